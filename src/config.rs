// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine settings.
//!
//! Mirrors the read/write property surface the hosting component sets before
//! its first search: `resultsCount`, `queryTemplate` and `selectedProperties`.
//! The two optional settings start out unset; `search` refuses to run until
//! both are present.

use crate::error::{Result, SearchError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Default delay before a search resolves.
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 1000;

/// Default delay before suggestions resolve.
pub const DEFAULT_SUGGEST_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineConfig {
    /// Page size.
    #[serde(default)]
    pub results_count: Option<usize>,
    #[serde(default)]
    pub query_template: String,
    #[serde(default)]
    pub selected_properties: Option<Vec<String>>,
    #[serde(default)]
    pub latency: LatencyConfig,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn set_results_count(&mut self, count: usize) -> &mut Self {
        self.results_count = Some(count);
        self
    }

    pub fn set_query_template(&mut self, template: impl Into<String>) -> &mut Self {
        self.query_template = template.into();
        self
    }

    pub fn set_selected_properties<I, S>(&mut self, properties: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_properties = Some(properties.into_iter().map(Into::into).collect());
        self
    }

    /// Resolve the settings `search` depends on, or say which one is missing.
    pub(crate) fn require(&self) -> Result<(usize, &[String])> {
        let page_size = self.results_count.ok_or(SearchError::Configuration {
            setting: "resultsCount",
        })?;
        let properties = self
            .selected_properties
            .as_deref()
            .ok_or(SearchError::Configuration {
                setting: "selectedProperties",
            })?;
        Ok((page_size, properties))
    }
}

/// Artificial delays, in milliseconds. Zero means resolve immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencyConfig {
    #[serde(default = "default_search_delay")]
    pub search_ms: u64,
    #[serde(default = "default_suggest_delay")]
    pub suggest_ms: u64,
}

fn default_search_delay() -> u64 {
    DEFAULT_SEARCH_DELAY_MS
}

fn default_suggest_delay() -> u64 {
    DEFAULT_SUGGEST_DELAY_MS
}

impl Default for LatencyConfig {
    fn default() -> Self {
        LatencyConfig {
            search_ms: DEFAULT_SEARCH_DELAY_MS,
            suggest_ms: DEFAULT_SUGGEST_DELAY_MS,
        }
    }
}

impl LatencyConfig {
    pub fn none() -> Self {
        LatencyConfig {
            search_ms: 0,
            suggest_ms: 0,
        }
    }

    pub fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_ms)
    }

    pub fn suggest_delay(&self) -> Duration {
        Duration::from_millis(self.suggest_ms)
    }
}
