// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors surfaced by the engines.
//!
//! Everything here is raised before any simulated latency starts: a call
//! either fails up front or resolves exactly once with a full page.

use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SearchError>;

#[derive(Debug, Error)]
pub enum SearchError {
    /// A required engine setting was never configured.
    #[error("engine is not configured: `{setting}` must be set before searching")]
    Configuration { setting: &'static str },

    /// Caller-supplied data failed validation.
    #[error("invalid input: {reason}")]
    Input { reason: String },

    /// The catalogue or config JSON could not be parsed.
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SearchError {
    pub(crate) fn input(reason: impl Into<String>) -> Self {
        SearchError::Input {
            reason: reason.into(),
        }
    }

    /// True for precondition failures on the engine configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, SearchError::Configuration { .. })
    }
}
