//! Pagination invariants: pages tile the filtered rows exactly.

use super::common::{generated_engine, label_filter, KINDS};
use proptest::prelude::*;
use refiner::{page_bounds, paginate, RefinementFilter};

fn kind_filters() -> impl Strategy<Value = Vec<RefinementFilter>> {
    prop::collection::vec(prop::sample::select(KINDS.to_vec()), 0..3)
        .prop_map(|labels| labels.into_iter().map(label_filter).collect())
}

proptest! {
    /// Property: concatenating pages 1..=page_count reproduces the full
    /// filtered result list, and every page but the last is full.
    #[test]
    fn prop_pages_reassemble_filtered_rows(
        n in 0usize..60,
        page_size in 1usize..12,
        filters in kind_filters(),
    ) {
        let everything = generated_engine(n, usize::MAX)
            .compute("q", &filters, 1)
            .unwrap();
        let engine = generated_engine(n, page_size);

        let first = engine.compute("q", &filters, 1).unwrap();
        let page_count = first.pagination.page_count();
        prop_assert_eq!(first.pagination.total_rows, everything.results.len());

        let mut reassembled = Vec::new();
        for page_number in 1..=page_count {
            let page = engine.compute("q", &filters, page_number).unwrap();
            prop_assert_eq!(page.pagination.total_rows, first.pagination.total_rows);
            prop_assert_eq!(page.pagination.current_page, page_number);
            if page_number < page_count {
                prop_assert_eq!(page.results.len(), page_size);
            } else {
                prop_assert!(!page.results.is_empty());
                prop_assert!(page.results.len() <= page_size);
            }
            reassembled.extend(page.results);
        }
        prop_assert_eq!(reassembled, everything.results);
    }

    /// Property: pages beyond the last one are empty but keep the total.
    #[test]
    fn prop_out_of_range_pages_are_empty(
        n in 0usize..40,
        page_size in 1usize..10,
        beyond in 1usize..5,
    ) {
        let engine = generated_engine(n, page_size);
        let first = engine.compute("q", &[], 1).unwrap();
        let past = first.pagination.page_count() + beyond;

        let page = engine.compute("q", &[], past).unwrap();
        prop_assert!(page.results.is_empty());
        prop_assert_eq!(page.pagination.total_rows, n);
        prop_assert_eq!(page.pagination.current_page, past);
    }

    /// Property: a zero page size yields no rows on any page.
    #[test]
    fn prop_zero_page_size_is_always_empty(
        n in 0usize..40,
        page_number in 0usize..10,
    ) {
        let page = generated_engine(n, 0).compute("q", &[], page_number).unwrap();
        prop_assert!(page.results.is_empty());
        prop_assert_eq!(page.pagination.total_rows, n);
        prop_assert_eq!(page.pagination.page_size, 0);
    }

    /// Property: bounds never overflow and always lie inside the rows.
    #[test]
    fn prop_page_bounds_stay_in_range(
        total in 0usize..10_000,
        page_size in any::<usize>(),
        page_number in any::<usize>(),
    ) {
        if let Some(range) = page_bounds(total, page_size, page_number) {
            prop_assert!(range.start < range.end);
            prop_assert!(range.end <= total);
            prop_assert!(range.end - range.start <= page_size);
        }
    }

    /// Property: `paginate` agrees with `page_bounds`.
    #[test]
    fn prop_paginate_matches_bounds(
        items in prop::collection::vec(any::<u8>(), 0..50),
        page_size in 0usize..8,
        page_number in 0usize..10,
    ) {
        let page = paginate(&items, page_size, page_number);
        match page_bounds(items.len(), page_size, page_number) {
            Some(range) => prop_assert_eq!(page, &items[range]),
            None => prop_assert!(page.is_empty()),
        }
    }
}
