// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fixed catalogue behind the query engine.
//!
//! A [`ResultStore`] is built once and never changes. Facet counts are taken
//! as given: they describe the whole catalogue and are not recomputed when a
//! query narrows the results.
//!
//! Catalogues can be seeded in code ([`ResultStore::demo`]) or loaded from the
//! JSON shape the hosting search service emits:
//!
//! ```json
//! {
//!   "RelevantResults": [
//!     { "Title": "Form 1", "Path": "http://form1.ca",
//!       "Created": "2017-07-22T15:38:54.0000000Z",
//!       "RefinementTokenValues": "ǂǂ466f726d", "ContentCategory": "Form" }
//!   ],
//!   "RefinementResults": [
//!     { "FilterName": "Type", "Values": [
//!       { "RefinementCount": 1, "RefinementName": "Form",
//!         "RefinementToken": "ǂǂ466f726d", "RefinementValue": "Form" } ] }
//!   ]
//! }
//! ```

use crate::error::{Result, SearchError};
use crate::token::{parse_token_list, RefinementToken};
use crate::types::{RefinementFacet, RefinementValue, SearchResult};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultStore {
    results: Vec<SearchResult>,
    facets: Vec<RefinementFacet>,
}

impl ResultStore {
    /// Assemble a store. Fails if any facet repeats a value token.
    pub fn new(results: Vec<SearchResult>, facets: Vec<RefinementFacet>) -> Result<Self> {
        for facet in &facets {
            facet.check_unique_tokens()?;
        }
        Ok(ResultStore { results, facets })
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn facets(&self) -> &[RefinementFacet] {
        &self.facets
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Look a token up across all facets.
    pub fn find_value(
        &self,
        token: &RefinementToken,
    ) -> Option<(&RefinementFacet, &RefinementValue)> {
        self.facets
            .iter()
            .find_map(|facet| facet.find(token).map(|value| (facet, value)))
    }

    /// Look a facet value up by its display label or name (case-insensitive).
    pub fn find_label(&self, label: &str) -> Option<&RefinementValue> {
        self.facets
            .iter()
            .flat_map(|facet| facet.values.iter())
            .find(|v| v.value.eq_ignore_ascii_case(label) || v.name.eq_ignore_ascii_case(label))
    }

    /// Number of catalogue results carrying `token`.
    pub fn tally(&self, token: &RefinementToken) -> usize {
        self.results
            .iter()
            .filter(|r| r.refinement_tokens.contains(token))
            .count()
    }

    /// Parse a catalogue in the search service's JSON shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawCatalogue = serde_json::from_str(json)?;
        let results = raw
            .relevant_results
            .into_iter()
            .map(RawResult::into_result)
            .collect();
        let facets = raw
            .refinement_results
            .into_iter()
            .map(RawFacet::into_facet)
            .collect();
        Self::new(results, facets)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The five-result catalogue with Type and Theme facets that the demo
    /// web part ships with.
    pub fn demo() -> Self {
        const CREATED: &str = "2017-07-22T15:38:54.0000000Z";
        let result = |title: &str, path: &str, tokens: &str, category: &str| SearchResult {
            title: title.to_string(),
            path: path.to_string(),
            created: CREATED.to_string(),
            refinement_tokens: parse_token_list(tokens),
            content_category: category.to_string(),
        };

        let results = vec![
            result(
                "Document 1 - Category 1",
                "http://document1.ca",
                "ǂǂ446f63756d656e74,ǂǂ45647563617465",
                "Document",
            ),
            result(
                "Document 2 - Category 2",
                "http://document2.ca",
                "ǂǂ446f63756d656e74,ǂǂ416476697365",
                "Document",
            ),
            result("Form 1", "http://form1.ca", "ǂǂ466f726d", "Form"),
            result(
                "Video 1 - Category 1",
                "https://www.youtube.com/watch?v=S93e6UU7y9o",
                "ǂǂ566964656f,ǂǂ45647563617465",
                "Video",
            ),
            result(
                "Video 2 - Category 2",
                "https://www.youtube.com/watch?v=8Nl_dKVQ1O8",
                "ǂǂ566964656f,ǂǂ416476697365",
                "Video",
            ),
        ];

        let theme = |label: &str, token: &str| RefinementValue {
            name: label.to_string(),
            token: RefinementToken::new(token),
            value: label.to_string(),
            count: 2,
        };

        let facets = vec![
            RefinementFacet {
                name: "Type".to_string(),
                values: vec![
                    RefinementValue::labelled("Document", 2),
                    RefinementValue::labelled("Video", 2),
                    RefinementValue::labelled("Form", 1),
                ],
            },
            RefinementFacet {
                name: "Theme".to_string(),
                values: vec![
                    theme("Category 1", "ǂǂ45647563617465"),
                    theme("Category 2", "ǂǂ416476697365"),
                ],
            },
        ];

        ResultStore { results, facets }
    }
}

// =============================================================================
// EXTERNAL JSON SHAPE
// =============================================================================

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawCatalogue {
    #[serde(default)]
    relevant_results: Vec<RawResult>,
    #[serde(default)]
    refinement_results: Vec<RawFacet>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawResult {
    title: String,
    path: String,
    #[serde(default)]
    created: String,
    #[serde(default)]
    refinement_token_values: String,
    #[serde(default)]
    content_category: String,
}

impl RawResult {
    fn into_result(self) -> SearchResult {
        SearchResult {
            title: self.title,
            path: self.path,
            created: self.created,
            refinement_tokens: parse_token_list(&self.refinement_token_values),
            content_category: self.content_category,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawFacet {
    filter_name: String,
    #[serde(default)]
    values: Vec<RawValue>,
}

impl RawFacet {
    fn into_facet(self) -> RefinementFacet {
        RefinementFacet {
            name: self.filter_name,
            values: self.values.into_iter().map(RawValue::into_value).collect(),
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawValue {
    refinement_count: u32,
    refinement_name: String,
    refinement_token: String,
    refinement_value: String,
}

impl RawValue {
    fn into_value(self) -> RefinementValue {
        RefinementValue {
            name: self.refinement_name,
            token: RefinementToken::new(self.refinement_token),
            value: self.refinement_value,
            count: self.refinement_count,
        }
    }
}
