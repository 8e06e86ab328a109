// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the refiner CLI.
//!
//! Boxed sections for pages, facets and suggestions. Colors are plain ANSI
//! and switch off for pipelines and for anyone who sets `NO_COLOR`.
//! Suggestion markers become bold text on a terminal and stay literal
//! everywhere else.

use refiner::{Markers, RefinementFacet, SearchResultsPage};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

pub mod colors {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GRAY: &str = "\x1b[90m";
}

use colors::*;

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply styles if TTY, otherwise return plain text
pub fn styled(styles: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", styles.join(""), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

fn border(s: &str) -> String {
    styled(&[GRAY], s)
}

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content) + 1);
    println!(
        "{} {}{}{}",
        border("│"),
        content,
        " ".repeat(pad),
        border("│")
    );
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", styled(&[BOLD, CYAN], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    );
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", border(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

pub fn print_page(page: &SearchResultsPage) {
    let info = &page.pagination;
    section_top("RESULTS");
    row(&format!("{} {}", styled(&[DIM], "query:"), page.query_echo));
    row(&format!(
        "page {} of {}  ·  {} rows  ·  {} per page",
        info.current_page,
        info.page_count(),
        info.total_rows,
        info.page_size
    ));
    if page.results.is_empty() {
        row(&styled(&[DIM], "(empty page)"));
    }
    for result in &page.results {
        row("");
        row(&styled(&[BOLD], &result.title));
        row(&format!(
            "{}  {}",
            styled(&[YELLOW], &result.content_category),
            styled(&[DIM], &result.path)
        ));
    }
    section_bot();
    print_facets(&page.facets);
}

pub fn print_facets(facets: &[RefinementFacet]) {
    section_top("FACETS");
    for facet in facets {
        row(&styled(&[BOLD], &facet.name));
        for value in &facet.values {
            row(&format!(
                "  {:<12} {:>3}  {}",
                value.value,
                value.count,
                styled(&[GRAY], value.token.as_str())
            ));
        }
    }
    section_bot();
}

pub fn print_suggestions(suggestions: &[String], markers: &Markers) {
    section_top("SUGGESTIONS");
    if suggestions.is_empty() {
        row(&styled(&[DIM], "(no match)"));
    }
    for suggestion in suggestions {
        row(&render_markers(suggestion, markers, use_colors()));
    }
    section_bot();
}

/// Turn marker pairs into bold green text when `colored`.
pub fn render_markers(text: &str, markers: &Markers, colored: bool) -> String {
    if !colored {
        return text.to_string();
    }
    text.replacen(&markers.start, &format!("{}{}", BOLD, GREEN), 1)
        .replacen(&markers.end, RESET, 1)
}
