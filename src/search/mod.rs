// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The query engine.
//!
//! A search is three steps over the fixed catalogue: filter by refinement
//! tokens, count what survived, slice out one page. The page is computed up
//! front and handed back as a future that resolves after the simulated
//! latency.
//!
//! ```text
//! catalogue ──filter──▶ survivors ──count──▶ total_rows
//!                           │
//!                           └──paginate──▶ page ──latency──▶ SearchResultsPage
//! ```
//!
//! Configuration is checked before anything else. A missing `resultsCount`
//! or `selectedProperties` comes back as `Err` from [`SearchEngine::search`]
//! itself, never from the future.
//!
//! Facets are returned exactly as stored. Real faceted search narrows the
//! counts under active filters; this engine deliberately does not, so facet
//! counts are the same for every query.

pub mod filter;
pub mod paginate;

use crate::config::EngineConfig;
use crate::error::Result;
use crate::latency::{simulate, LatencyModel, Operation};
use crate::store::ResultStore;
use crate::types::{PaginationInfo, RefinementFilter, SearchRequest, SearchResultsPage};
use std::future::Future;
use std::sync::Arc;

pub use filter::filter_tokens;
pub use paginate::{page_bounds, paginate};

#[derive(Debug, Clone)]
pub struct SearchEngine {
    store: Arc<ResultStore>,
    config: EngineConfig,
    /// Overrides `config.latency` when set.
    latency: Option<Arc<dyn LatencyModel>>,
}

impl SearchEngine {
    pub fn new(store: ResultStore, config: EngineConfig) -> Self {
        SearchEngine {
            store: Arc::new(store),
            config,
            latency: None,
        }
    }

    /// Share an already-built store between engines.
    pub fn with_shared_store(store: Arc<ResultStore>, config: EngineConfig) -> Self {
        SearchEngine {
            store,
            config,
            latency: None,
        }
    }

    pub fn with_latency(mut self, model: impl LatencyModel + 'static) -> Self {
        self.latency = Some(Arc::new(model));
        self
    }

    pub fn store(&self) -> &ResultStore {
        &self.store
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut EngineConfig {
        &mut self.config
    }

    /// Run a search and deliver the page after the search latency.
    ///
    /// Fails immediately if the engine is not configured. The returned future
    /// owns its page and does not borrow the engine, so it can be spawned or
    /// dropped freely.
    pub fn search(
        &self,
        query: &str,
        filters: &[RefinementFilter],
        page_number: usize,
    ) -> Result<impl Future<Output = SearchResultsPage> + Send + 'static> {
        let page = self.compute(query, filters, page_number)?;
        let latency = self.latency_model();
        Ok(async move {
            simulate(latency.as_ref(), Operation::Search).await;
            page
        })
    }

    /// [`search`](Self::search) driven by a request record.
    pub fn search_request(
        &self,
        request: &SearchRequest,
    ) -> Result<impl Future<Output = SearchResultsPage> + Send + 'static> {
        self.search(
            &request.query,
            &request.refinement_filters,
            request.page_number,
        )
    }

    /// Build the page without any simulated latency.
    pub fn compute(
        &self,
        query: &str,
        filters: &[RefinementFilter],
        page_number: usize,
    ) -> Result<SearchResultsPage> {
        let (page_size, properties) = self.config.require()?;
        let query_echo = format!(
            "{}{}{}",
            query,
            self.config.query_template,
            properties.join(",")
        );

        for filter in filters {
            if self.store.find_value(filter.token()).is_none() {
                tracing::warn!(token = %filter.token(), "refinement filter matches no known facet value");
            }
        }

        let survivors = filter::apply(self.store.results(), filters);
        let total_rows = survivors.len();
        let results = paginate(&survivors, page_size, page_number)
            .iter()
            .map(|r| (*r).clone())
            .collect::<Vec<_>>();

        tracing::debug!(
            query,
            filters = filters.len(),
            total_rows,
            page_number,
            page_size,
            returned = results.len(),
            "search"
        );

        Ok(SearchResultsPage {
            query_echo,
            results,
            facets: self.store.facets().to_vec(),
            pagination: PaginationInfo {
                total_rows,
                current_page: page_number,
                page_size,
            },
        })
    }

    fn latency_model(&self) -> Arc<dyn LatencyModel> {
        match &self.latency {
            Some(model) => Arc::clone(model),
            None => Arc::new(self.config.latency),
        }
    }
}
