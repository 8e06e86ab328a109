// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Refinement tokens and their external encoding.
//!
//! A token is an opaque identifier tying a result to a facet value. The
//! engines only ever compare tokens for equality; the `ǂǂ` + hex layout
//! below exists so catalogues written for the hosting search service can be
//! loaded unchanged.
//!
//! ```text
//! "Document"  ──from_label──▶  ǂǂ446f63756d656e74
//!                                ▲▲ └──── hex(UTF-8) ────┘
//!                             sentinel
//! ```
//!
//! On the wire a result carries its tokens as one comma-joined string:
//! `ǂǂ446f63756d656e74,ǂǂ45647563617465`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-character marker that prefixes every encoded token.
pub const TOKEN_SENTINEL: &str = "ǂǂ";

/// Separator between tokens in the external representation.
pub const TOKEN_SEPARATOR: &str = ",";

/// Opaque refinement token. Equality is the only meaningful operation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefinementToken(String);

impl RefinementToken {
    /// Wrap a raw token string as-is.
    pub fn new(raw: impl Into<String>) -> Self {
        RefinementToken(raw.into())
    }

    /// Encode a display label the way the search service does.
    pub fn from_label(label: &str) -> Self {
        RefinementToken(format!("{}{}", TOKEN_SENTINEL, hex::encode(label)))
    }

    /// Decode the label back out of a sentinel-prefixed token.
    ///
    /// Returns `None` for tokens that were not produced by [`from_label`]
    /// (missing sentinel, odd-length or non-hex payload, non-UTF-8 bytes).
    ///
    /// [`from_label`]: RefinementToken::from_label
    pub fn label(&self) -> Option<String> {
        let payload = self.0.strip_prefix(TOKEN_SENTINEL)?;
        let bytes = hex::decode(payload).ok()?;
        String::from_utf8(bytes).ok()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RefinementToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RefinementToken {
    fn from(raw: &str) -> Self {
        RefinementToken::new(raw)
    }
}

impl From<String> for RefinementToken {
    fn from(raw: String) -> Self {
        RefinementToken(raw)
    }
}

/// Split the comma-joined external form into ordered tokens.
///
/// Whitespace around each segment is trimmed. Empty segments (`""`, trailing
/// commas) are dropped, so a result with no tokens decodes to an empty list
/// rather than a single empty token.
pub fn parse_token_list(joined: &str) -> Vec<RefinementToken> {
    joined
        .split(TOKEN_SEPARATOR)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(RefinementToken::new)
        .collect()
}

/// Inverse of [`parse_token_list`].
pub fn join_token_list(tokens: &[RefinementToken]) -> String {
    tokens
        .iter()
        .map(RefinementToken::as_str)
        .collect::<Vec<_>>()
        .join(TOKEN_SEPARATOR)
}
