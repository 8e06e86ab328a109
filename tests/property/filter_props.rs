//! Filtering invariants over random catalogues and filter sets.

use super::common::{configured, KINDS, THEMES};
use proptest::prelude::*;
use refiner::{
    Immediate, RefinementFacet, RefinementFilter, RefinementToken, RefinementValue, ResultStore,
    SearchEngine, SearchResult,
};
use std::collections::HashSet;

// ============================================================================
// STRATEGIES
// ============================================================================

fn label_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(
        KINDS
            .iter()
            .chain(THEMES.iter())
            .copied()
            .chain(["Orphan"])
            .collect::<Vec<_>>(),
    )
}

fn result_strategy() -> impl Strategy<Value = SearchResult> {
    (
        "[A-Za-z ]{1,20}",
        prop::collection::vec(label_strategy(), 0..4),
    )
        .prop_map(|(title, labels)| SearchResult {
            path: format!("http://example.test/{}", title.replace(' ', "-")),
            title,
            created: String::new(),
            refinement_tokens: labels
                .iter()
                .map(|l| RefinementToken::from_label(l))
                .collect(),
            content_category: labels.first().copied().unwrap_or("None").to_string(),
        })
}

fn catalogue_strategy() -> impl Strategy<Value = Vec<SearchResult>> {
    prop::collection::vec(result_strategy(), 0..30)
}

fn filters_strategy() -> impl Strategy<Value = Vec<RefinementFilter>> {
    prop::collection::vec(label_strategy(), 0..4).prop_map(|labels| {
        labels
            .into_iter()
            .map(|l| RefinementFilter::from_token(RefinementToken::from_label(l)).unwrap())
            .collect()
    })
}

fn engine_over(results: Vec<SearchResult>) -> SearchEngine {
    let values = KINDS
        .iter()
        .map(|k| RefinementValue::labelled(k, 0))
        .collect();
    let facets = vec![RefinementFacet::new("Type", values).unwrap()];
    let store = ResultStore::new(results, facets).unwrap();
    SearchEngine::new(store, configured(usize::MAX)).with_latency(Immediate)
}

proptest! {
    /// Property: every returned result comes from the catalogue and shares a
    /// token with the filters.
    #[test]
    fn prop_filtered_results_are_matching_subset(
        catalogue in catalogue_strategy(),
        filters in filters_strategy(),
    ) {
        prop_assume!(!filters.is_empty());
        let engine = engine_over(catalogue.clone());
        let page = engine.compute("q", &filters, 1).unwrap();

        let wanted: HashSet<&RefinementToken> = filters.iter().map(|f| f.token()).collect();
        for result in &page.results {
            prop_assert!(catalogue.contains(result));
            prop_assert!(result.refinement_tokens.iter().any(|t| wanted.contains(t)));
        }
    }

    /// Property: nothing that matches is dropped, and catalogue order is kept.
    #[test]
    fn prop_filter_matches_oracle(
        catalogue in catalogue_strategy(),
        filters in filters_strategy(),
    ) {
        let engine = engine_over(catalogue.clone());
        let page = engine.compute("q", &filters, 1).unwrap();

        let wanted: HashSet<&RefinementToken> = filters.iter().map(|f| f.token()).collect();
        let expected: Vec<SearchResult> = catalogue
            .iter()
            .filter(|r| filters.is_empty() || r.refinement_tokens.iter().any(|t| wanted.contains(t)))
            .cloned()
            .collect();

        prop_assert_eq!(page.pagination.total_rows, expected.len());
        prop_assert_eq!(page.results, expected);
    }

    /// Property: facets never depend on the filters.
    #[test]
    fn prop_facets_invariant_under_filters(
        catalogue in catalogue_strategy(),
        filters in filters_strategy(),
        page_number in 0usize..5,
    ) {
        let engine = engine_over(catalogue);
        let unfiltered = engine.compute("q", &[], 1).unwrap();
        let filtered = engine.compute("q", &filters, page_number).unwrap();
        prop_assert_eq!(unfiltered.facets, filtered.facets);
    }

    /// Property: filter order and duplication do not change the outcome.
    #[test]
    fn prop_filters_behave_as_a_set(
        catalogue in catalogue_strategy(),
        filters in filters_strategy(),
    ) {
        let engine = engine_over(catalogue);
        let mut shuffled: Vec<RefinementFilter> = filters.iter().rev().cloned().collect();
        shuffled.extend(filters.iter().cloned());

        let a = engine.compute("q", &filters, 1).unwrap();
        let b = engine.compute("q", &shuffled, 1).unwrap();
        prop_assert_eq!(a.results, b.results);
    }
}
