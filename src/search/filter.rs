// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Refinement filtering.
//!
//! Matching is set membership on tokens: a result survives when it shares at
//! least one token with the active filters. Several filters therefore widen
//! the result set (OR), they do not narrow it.
//!
//! **Invariant**: with a non-empty filter list, every surviving result
//! intersects the filter-token set, and survivors keep catalogue order.

use crate::token::RefinementToken;
use crate::types::{RefinementFilter, SearchResult};
use std::collections::HashSet;

/// Tokens selected by `filters`. Duplicates collapse.
pub fn filter_tokens(filters: &[RefinementFilter]) -> HashSet<&RefinementToken> {
    filters.iter().map(RefinementFilter::token).collect()
}

/// Results that survive `filters`, in catalogue order.
///
/// An empty filter list passes everything through.
pub fn apply<'a>(
    results: &'a [SearchResult],
    filters: &[RefinementFilter],
) -> Vec<&'a SearchResult> {
    if filters.is_empty() {
        return results.iter().collect();
    }

    let tokens = filter_tokens(filters);
    results.iter().filter(|r| r.matches_any(&tokens)).collect()
}
