// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow in and out of the engines.
//!
//! # Invariants
//!
//! - **SearchResult**: immutable once seeded. `refinement_tokens` keeps the
//!   order it had in the external comma-joined form.
//!
//! - **RefinementFacet**: value tokens are unique within the facet. Checked by
//!   [`RefinementFacet::new`] and again when a store is assembled.
//!
//! - **RefinementValue**: `count` was computed once over the fixed dataset.
//!   It is never narrowed by active filters.
//!
//! - **RefinementFilter**: carries a non-empty token. Construction rejects
//!   anything else, so the filter path never meets a half-built filter.
//!
//! - **SearchResultsPage**: a fresh value per call, owned by the caller.

use crate::error::{Result, SearchError};
use crate::token::RefinementToken;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

// =============================================================================
// DATASET
// =============================================================================

/// One entry of the fixed catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub title: String,
    pub path: String,
    /// ISO-8601 timestamp, kept verbatim.
    pub created: String,
    pub refinement_tokens: Vec<RefinementToken>,
    pub content_category: String,
}

impl SearchResult {
    /// Does this result carry any of `tokens`?
    ///
    /// A result without tokens never matches.
    pub fn matches_any(&self, tokens: &HashSet<&RefinementToken>) -> bool {
        self.refinement_tokens.iter().any(|t| tokens.contains(t))
    }
}

/// A selectable value within a facet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementValue {
    pub name: String,
    pub token: RefinementToken,
    /// Display label.
    pub value: String,
    pub count: u32,
}

impl RefinementValue {
    /// Build a value whose token is the service encoding of `label`.
    pub fn labelled(label: &str, count: u32) -> Self {
        RefinementValue {
            name: label.to_string(),
            token: RefinementToken::from_label(label),
            value: label.to_string(),
            count,
        }
    }
}

/// A named refinement dimension such as "Type" or "Theme".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefinementFacet {
    pub name: String,
    pub values: Vec<RefinementValue>,
}

impl RefinementFacet {
    /// Assemble a facet, rejecting duplicate value tokens.
    pub fn new(name: impl Into<String>, values: Vec<RefinementValue>) -> Result<Self> {
        let facet = RefinementFacet {
            name: name.into(),
            values,
        };
        facet.check_unique_tokens()?;
        Ok(facet)
    }

    pub(crate) fn check_unique_tokens(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.values.len());
        for value in &self.values {
            if !seen.insert(&value.token) {
                return Err(SearchError::input(format!(
                    "facet '{}' lists token {} more than once",
                    self.name, value.token
                )));
            }
        }
        Ok(())
    }

    pub fn find(&self, token: &RefinementToken) -> Option<&RefinementValue> {
        self.values.iter().find(|v| &v.token == token)
    }
}

// =============================================================================
// QUERY INPUT
// =============================================================================

/// A caller's selection of one facet value. Only the token takes part in
/// matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedFilter")]
pub struct RefinementFilter {
    value: RefinementValue,
}

#[derive(Deserialize)]
struct UncheckedFilter {
    value: RefinementValue,
}

impl TryFrom<UncheckedFilter> for RefinementFilter {
    type Error = SearchError;

    fn try_from(raw: UncheckedFilter) -> Result<Self> {
        RefinementFilter::new(raw.value)
    }
}

impl RefinementFilter {
    pub fn new(value: RefinementValue) -> Result<Self> {
        if value.token.is_empty() {
            return Err(SearchError::input(format!(
                "refinement filter '{}' has no token",
                value.name
            )));
        }
        Ok(RefinementFilter { value })
    }

    /// Filter on a bare token, with the token doubling as name and label.
    pub fn from_token(token: impl Into<RefinementToken>) -> Result<Self> {
        let token = token.into();
        let label = token.label().unwrap_or_else(|| token.to_string());
        RefinementFilter::new(RefinementValue {
            name: label.clone(),
            token,
            value: label,
            count: 0,
        })
    }

    pub fn value(&self) -> &RefinementValue {
        &self.value
    }

    pub fn token(&self) -> &RefinementToken {
        &self.value.token
    }
}

/// Everything one `search` call needs, in a form that can arrive as JSON.
///
/// A missing `refinementFilters` key is an empty filter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    #[serde(default)]
    pub refinement_filters: Vec<RefinementFilter>,
    #[serde(default = "first_page")]
    pub page_number: usize,
}

fn first_page() -> usize {
    1
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        SearchRequest {
            query: query.into(),
            refinement_filters: Vec::new(),
            page_number: first_page(),
        }
    }

    pub fn filter(mut self, filter: RefinementFilter) -> Self {
        self.refinement_filters.push(filter);
        self
    }

    pub fn page(mut self, page_number: usize) -> Self {
        self.page_number = page_number;
        self
    }
}

// =============================================================================
// QUERY OUTPUT
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    /// Results left after filtering, before slicing.
    pub total_rows: usize,
    /// Echo of the requested page number.
    pub current_page: usize,
    pub page_size: usize,
}

impl PaginationInfo {
    /// Number of non-empty pages, `0` when `page_size` is zero.
    pub fn page_count(&self) -> usize {
        if self.page_size == 0 {
            0
        } else {
            self.total_rows.div_ceil(self.page_size)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultsPage {
    /// Diagnostic echo: query + template + selected properties.
    pub query_echo: String,
    pub results: Vec<SearchResult>,
    pub facets: Vec<RefinementFacet>,
    pub pagination: PaginationInfo,
}
