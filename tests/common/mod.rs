//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use refiner::{
    EngineConfig, Immediate, RefinementFacet, RefinementValue, ResultStore, SearchEngine,
    SearchResult,
};
use std::path::PathBuf;

// Re-export canonical test utilities from refiner::testing
pub use refiner::testing::{configured, demo_engine, label_filter, make_result};

// ============================================================================
// CATALOGUES
// ============================================================================

/// Labels cycled through when generating catalogues.
pub const KINDS: &[&str] = &["Document", "Form", "Video", "Image"];

/// Theme labels cycled through when generating catalogues.
pub const THEMES: &[&str] = &["Category 1", "Category 2", "Category 3"];

/// Build `n` results. Result `i` carries kind `i % 4` and theme `i % 3`;
/// every seventh result carries no tokens at all.
pub fn generated_results(n: usize) -> Vec<SearchResult> {
    (0..n)
        .map(|i| {
            let kind = KINDS[i % KINDS.len()];
            if i % 7 == 6 {
                make_result(i, kind, &[])
            } else {
                make_result(i, kind, &[kind, THEMES[i % THEMES.len()]])
            }
        })
        .collect()
}

/// Facets whose counts are tallied over `results`.
pub fn tallied_facets(results: &[SearchResult]) -> Vec<RefinementFacet> {
    let facet = |name: &str, labels: &[&str]| {
        let values = labels
            .iter()
            .map(|label| {
                let mut value = RefinementValue::labelled(label, 0);
                value.count = results
                    .iter()
                    .filter(|r| r.refinement_tokens.contains(&value.token))
                    .count() as u32;
                value
            })
            .collect();
        RefinementFacet::new(name, values).expect("generated facet tokens are unique")
    };
    vec![facet("Type", KINDS), facet("Theme", THEMES)]
}

/// Store of `n` generated results with tallied facets.
pub fn generated_store(n: usize) -> ResultStore {
    let results = generated_results(n);
    let facets = tallied_facets(&results);
    ResultStore::new(results, facets).expect("generated store is valid")
}

/// Engine over a generated store, no latency.
pub fn generated_engine(n: usize, results_count: usize) -> SearchEngine {
    SearchEngine::new(generated_store(n), configured(results_count)).with_latency(Immediate)
}

/// Engine with nothing configured.
pub fn unconfigured_engine() -> SearchEngine {
    SearchEngine::new(ResultStore::demo(), EngineConfig::new())
}

/// Titles of a page's results, for readable assertions.
pub fn titles(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.title.as_str()).collect()
}

// ============================================================================
// FILES
// ============================================================================

/// Temporary directory removed when the returned handle drops.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::TempDir::new().expect("Failed to create temp directory")
}

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture file");
    path
}
