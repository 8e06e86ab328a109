//! Page slicing through the public search API.

use super::common::{demo_engine, generated_engine, label_filter, titles};

#[test]
fn test_pages_of_two() {
    let engine = demo_engine(2);

    let first = engine.compute("x", &[], 1).unwrap();
    let second = engine.compute("x", &[], 2).unwrap();
    let third = engine.compute("x", &[], 3).unwrap();

    assert_eq!(
        titles(&first.results),
        vec!["Document 1 - Category 1", "Document 2 - Category 2"]
    );
    assert_eq!(
        titles(&second.results),
        vec!["Form 1", "Video 1 - Category 1"]
    );
    assert_eq!(titles(&third.results), vec!["Video 2 - Category 2"]);

    for page in [&first, &second, &third] {
        assert_eq!(page.pagination.total_rows, 5);
        assert_eq!(page.pagination.page_size, 2);
    }
    assert_eq!(third.pagination.current_page, 3);
}

#[test]
fn test_page_past_end_is_empty_but_counted() {
    let page = demo_engine(2).compute("x", &[], 4).unwrap();
    assert!(page.results.is_empty());
    assert_eq!(page.pagination.total_rows, 5);
    assert_eq!(page.pagination.current_page, 4);
}

#[test]
fn test_page_zero_is_empty() {
    let page = demo_engine(10).compute("x", &[], 0).unwrap();
    assert!(page.results.is_empty());
    assert_eq!(page.pagination.current_page, 0);
}

#[test]
fn test_zero_page_size_is_always_empty() {
    let engine = demo_engine(0);
    for page_number in 0..4 {
        let page = engine.compute("x", &[], page_number).unwrap();
        assert!(page.results.is_empty(), "page {} not empty", page_number);
        assert_eq!(page.pagination.total_rows, 5);
        assert_eq!(page.pagination.page_size, 0);
    }
}

#[test]
fn test_pagination_applies_after_filtering() {
    let engine = demo_engine(1);
    let filter = [label_filter("Video")];

    let first = engine.compute("x", &filter, 1).unwrap();
    let second = engine.compute("x", &filter, 2).unwrap();
    let third = engine.compute("x", &filter, 3).unwrap();

    assert_eq!(titles(&first.results), vec!["Video 1 - Category 1"]);
    assert_eq!(titles(&second.results), vec!["Video 2 - Category 2"]);
    assert!(third.results.is_empty());
    assert_eq!(first.pagination.total_rows, 2);
}

#[test]
fn test_pages_reassemble_catalogue() {
    let engine = generated_engine(23, 4);
    let everything = generated_engine(23, 100).compute("x", &[], 1).unwrap();

    let mut reassembled = Vec::new();
    let page_count = everything.pagination.total_rows.div_ceil(4);
    for page_number in 1..=page_count {
        let page = engine.compute("x", &[], page_number).unwrap();
        assert!(page.results.len() <= 4);
        reassembled.extend(page.results);
    }

    assert_eq!(reassembled, everything.results);
}
