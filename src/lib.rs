// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory faceted search for exercising a search pipeline without a
//! search service behind it.
//!
//! A fixed catalogue of results, each tagged with refinement tokens, answers
//! queries with a filtered, paginated page and a set of facet counts. A
//! second engine offers autocomplete suggestions with the matched text marked
//! up. Both resolve asynchronously after a configurable simulated latency.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌────────────────┐
//! │  token.rs   │────▶│  store.rs    │────▶│  search/       │
//! │ (ǂǂ + hex,  │     │ (catalogue,  │     │ (filter,       │
//! │  CSV lists) │     │  facets)     │     │  paginate)     │
//! └─────────────┘     └──────────────┘     └────────────────┘
//!                                                  │
//! ┌─────────────┐     ┌──────────────┐             ▼
//! │ suggest.rs  │────▶│ latency.rs   │◀──── SearchResultsPage
//! │ (highlight) │     │ (delays)     │
//! └─────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use refiner::{EngineConfig, RefinementFilter, RefinementToken, ResultStore, SearchEngine};
//!
//! # async fn run() -> refiner::Result<()> {
//! let mut config = EngineConfig::new();
//! config
//!     .set_results_count(10)
//!     .set_selected_properties(["Title", "Path"]);
//!
//! let engine = SearchEngine::new(ResultStore::demo(), config);
//! let filter = RefinementFilter::from_token(RefinementToken::from_label("Document"))?;
//! let page = engine.search("report", &[filter], 1)?.await;
//! assert_eq!(page.pagination.total_rows, 2);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod latency;
pub mod search;
pub mod store;
pub mod suggest;
pub mod testing;
pub mod token;
mod types;

pub use config::{EngineConfig, LatencyConfig};
pub use error::{Result, SearchError};
pub use latency::{Immediate, LatencyModel, Operation};
pub use search::{page_bounds, paginate, SearchEngine};
pub use store::ResultStore;
pub use suggest::{highlight, Markers, SuggestionEngine, DEFAULT_SUGGESTIONS};
pub use token::{
    join_token_list, parse_token_list, RefinementToken, TOKEN_SENTINEL, TOKEN_SEPARATOR,
};
pub use types::{
    PaginationInfo, RefinementFacet, RefinementFilter, RefinementValue, SearchRequest,
    SearchResult, SearchResultsPage,
};
