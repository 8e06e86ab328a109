// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Autocomplete suggestions with the matched span marked up.
//!
//! Every candidate phrase is scanned for the typed keywords, ignoring case.
//! Hits come back in candidate order with the match wrapped in markers:
//!
//! ```text
//! keywords:  "DOC"
//! candidate: "project document"
//! output:    "project <B>doc</B>ument"
//! ```
//!
//! The marked span is copied from the candidate, so the candidate's casing
//! wins over the keywords'. Span length is measured in characters and always
//! equals the keyword length. Empty keywords match every candidate at the
//! start with a zero-length span.

use crate::config::LatencyConfig;
use crate::latency::{simulate, LatencyModel, Operation};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::ops::Range;
use std::sync::Arc;

/// Phrases the demo web part offers.
pub const DEFAULT_SUGGESTIONS: &[&str] = &[
    "sharepoint",
    "analysis document",
    "project document",
    "office 365",
    "azure cloud architecture",
    "architecture document",
    "sharepoint governance guide",
    "hr policies",
    "human resources procedures",
];

/// Start/end markup placed around a match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Markers {
            start: "<B>".to_string(),
            end: "</B>".to_string(),
        }
    }
}

impl Markers {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Markers {
            start: start.into(),
            end: end.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SuggestionEngine {
    candidates: Arc<[String]>,
    markers: Markers,
    latency: Arc<dyn LatencyModel>,
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        SuggestionEngine::new(DEFAULT_SUGGESTIONS.iter().copied())
    }
}

impl SuggestionEngine {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SuggestionEngine {
            candidates: candidates.into_iter().map(Into::into).collect(),
            markers: Markers::default(),
            latency: Arc::new(LatencyConfig::default()),
        }
    }

    pub fn with_markers(mut self, markers: Markers) -> Self {
        self.markers = markers;
        self
    }

    pub fn with_latency(mut self, model: impl LatencyModel + 'static) -> Self {
        self.latency = Arc::new(model);
        self
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn markers(&self) -> &Markers {
        &self.markers
    }

    /// Marked-up suggestions for `keywords`, delivered after the suggest
    /// latency. Never fails.
    pub fn suggest(&self, keywords: &str) -> impl Future<Output = Vec<String>> + Send + 'static {
        let suggestions = self.suggestions(keywords);
        let latency = Arc::clone(&self.latency);
        async move {
            simulate(latency.as_ref(), Operation::Suggest).await;
            suggestions
        }
    }

    /// Marked-up suggestions for `keywords`, without latency.
    pub fn suggestions(&self, keywords: &str) -> Vec<String> {
        let hits: Vec<String> = self
            .candidates
            .iter()
            .filter_map(|candidate| highlight(candidate, keywords, &self.markers))
            .collect();
        tracing::debug!(keywords, hits = hits.len(), "suggest");
        hits
    }
}

/// Wrap the first case-insensitive occurrence of `keywords` in `candidate`.
pub fn highlight(candidate: &str, keywords: &str, markers: &Markers) -> Option<String> {
    let span = find_ignore_case(candidate, keywords)?;
    let mut out = String::with_capacity(candidate.len() + markers.start.len() + markers.end.len());
    out.push_str(&candidate[..span.start]);
    out.push_str(&markers.start);
    out.push_str(&candidate[span.clone()]);
    out.push_str(&markers.end);
    out.push_str(&candidate[span.end..]);
    Some(out)
}

/// Byte range of the first case-insensitive occurrence of `needle`.
///
/// Comparison is per character, so the range always covers exactly
/// `needle.chars().count()` characters of `haystack`, even where lowercasing
/// would change a character's encoded length.
pub fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return Some(0..0);
    }

    haystack.char_indices().find_map(|(start, _)| {
        let mut end = start;
        let mut window = haystack[start..].chars();
        for &wanted in &needle {
            let c = window.next()?;
            if !chars_eq_ignore_case(c, wanted) {
                return None;
            }
            end += c.len_utf8();
        }
        Some(start..end)
    })
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
