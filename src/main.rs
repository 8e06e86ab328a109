// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use refiner::{
    EngineConfig, LatencyConfig, RefinementFilter, RefinementToken, ResultStore, SearchEngine,
    SuggestionEngine,
};

mod cli;
use cli::{display, Cli, Commands};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "refiner=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli).await {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let store = match &cli.catalogue {
        Some(path) => ResultStore::load(path)?,
        None => ResultStore::demo(),
    };
    tracing::debug!(
        results = store.len(),
        facets = store.facets().len(),
        "catalogue loaded"
    );
    let mut config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => demo_config(),
    };
    if cli.no_latency {
        config.latency = LatencyConfig::none();
    }

    match cli.command {
        Commands::Search {
            query,
            filters,
            page,
            results_count,
            select,
        } => {
            if let Some(count) = results_count {
                config.set_results_count(count);
            }
            if let Some(properties) = select {
                config.set_selected_properties(properties);
            }

            let filters = filters
                .iter()
                .map(|arg| resolve_filter(&store, arg))
                .collect::<Result<Vec<_>>>()?;

            let engine = SearchEngine::new(store, config);
            let page = engine
                .search(&query, &filters, page)
                .context("search rejected")?
                .await;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&page)?);
            } else {
                display::print_page(&page);
            }
        }
        Commands::Suggest { keywords } => {
            let engine = SuggestionEngine::default().with_latency(config.latency);
            let suggestions = engine.suggest(&keywords).await;

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&suggestions)?);
            } else {
                display::print_suggestions(&suggestions, engine.markers());
            }
        }
        Commands::Facets => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(store.facets())?);
            } else {
                display::print_facets(store.facets());
            }
        }
    }

    Ok(())
}

/// Settings used when no `--config` file is given.
fn demo_config() -> EngineConfig {
    let mut config = EngineConfig::new();
    config
        .set_results_count(10)
        .set_selected_properties(["Title", "Path", "Created"]);
    config
}

/// Accept a raw token, a token's label, or a facet value label.
fn resolve_filter(store: &ResultStore, arg: &str) -> Result<RefinementFilter> {
    let token = RefinementToken::new(arg);
    let value = store
        .find_value(&token)
        .map(|(_, value)| value)
        .or_else(|| store.find_label(arg))
        .or_else(|| {
            store
                .find_value(&RefinementToken::from_label(arg))
                .map(|(_, value)| value)
        });

    let filter = match value {
        Some(value) => RefinementFilter::new(value.clone()),
        None => RefinementFilter::from_token(token),
    };
    filter.with_context(|| format!("invalid --filter '{}'", arg))
}
