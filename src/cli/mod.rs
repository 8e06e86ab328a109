// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the refiner command-line interface.
//!
//! Three subcommands drive the engines from a terminal: `search` runs a
//! filtered, paginated query, `suggest` runs autocomplete, and `facets` lists
//! the refinement values a `--filter` can name. Global flags swap in a
//! catalogue or config file and turn the simulated latency off.

pub mod display;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "refiner",
    about = "In-memory faceted search simulator",
    version
)]
pub struct Cli {
    /// Engine config JSON (resultsCount, queryTemplate, selectedProperties, latency)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalogue JSON in the search service's RelevantResults/RefinementResults shape
    #[arg(long, global = true)]
    pub catalogue: Option<PathBuf>,

    /// Resolve immediately instead of simulating network latency
    #[arg(long, global = true)]
    pub no_latency: bool,

    /// Print JSON instead of formatted output
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalogue
    Search {
        /// Free-text query (echoed back, not matched)
        query: String,

        /// Refinement to filter by: a token (ǂǂ…) or a facet value label
        #[arg(short, long = "filter")]
        filters: Vec<String>,

        /// 1-based page number
        #[arg(short, long, default_value = "1")]
        page: usize,

        /// Page size, overriding the config file
        #[arg(short = 'n', long)]
        results_count: Option<usize>,

        /// Comma-separated selected properties, overriding the config file
        #[arg(long, value_delimiter = ',')]
        select: Option<Vec<String>>,
    },

    /// Suggest completions for a keyword fragment
    Suggest {
        /// Text typed so far
        keywords: String,
    },

    /// List facets and their refinement tokens
    Facets,
}
