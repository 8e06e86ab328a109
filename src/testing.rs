// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::config::EngineConfig;
use crate::latency::Immediate;
use crate::search::SearchEngine;
use crate::store::ResultStore;
use crate::token::RefinementToken;
use crate::types::{RefinementFilter, SearchResult};

/// Create a result tagged with the encoded form of each label.
pub fn make_result(id: usize, category: &str, labels: &[&str]) -> SearchResult {
    SearchResult {
        title: format!("{} {}", category, id),
        path: format!("http://example.test/{}", id),
        created: "2017-07-22T15:38:54.0000000Z".to_string(),
        refinement_tokens: labels
            .iter()
            .map(|l| RefinementToken::from_label(l))
            .collect(),
        content_category: category.to_string(),
    }
}

/// Configuration with a page size, a template and two selected properties.
pub fn configured(results_count: usize) -> EngineConfig {
    let mut config = EngineConfig::new();
    config
        .set_results_count(results_count)
        .set_query_template("")
        .set_selected_properties(["Title", "Path"]);
    config
}

/// Demo catalogue engine with no simulated latency.
pub fn demo_engine(results_count: usize) -> SearchEngine {
    SearchEngine::new(ResultStore::demo(), configured(results_count)).with_latency(Immediate)
}

/// Filter on the encoded form of `label`.
pub fn label_filter(label: &str) -> RefinementFilter {
    RefinementFilter::from_token(RefinementToken::from_label(label))
        .unwrap_or_else(|e| panic!("label '{}' produced an invalid filter: {}", label, e))
}
