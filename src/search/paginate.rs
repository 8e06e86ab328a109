// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page slicing.
//!
//! Pages are 1-based. Page `n` covers `[(n-1) * size, (n-1) * size + size)`,
//! clipped to the number of rows. Page 0, a zero page size, and any page that
//! starts past the last row are all empty.

use std::ops::Range;

/// Row range covered by `page_number`, or `None` when the page is empty.
pub fn page_bounds(
    total_rows: usize,
    page_size: usize,
    page_number: usize,
) -> Option<Range<usize>> {
    if page_number < 1 || page_size < 1 {
        return None;
    }
    let offset = (page_number - 1).checked_mul(page_size)?;
    if offset >= total_rows {
        return None;
    }
    let end = offset.saturating_add(page_size).min(total_rows);
    Some(offset..end)
}

/// Slice one page out of `items`.
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> &[T] {
    match page_bounds(items.len(), page_size, page_number) {
        Some(range) => &items[range],
        None => &[],
    }
}
