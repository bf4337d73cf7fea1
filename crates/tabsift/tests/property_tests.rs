//! Property-based tests for cleaning, pagination and JSON conversion.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p tabsift --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p tabsift --test property_tests
//! ```

use proptest::prelude::*;

use tabsift::inference::column_from_tokens;
use tabsift::output::{make_json_safe, paginate};
use tabsift::recommend::{canonical_genre, canonical_language};
use tabsift::{Cleaner, Dataset};

// =============================================================================
// Test Strategies
// =============================================================================

/// Raw cell tokens: numbers, words, padding and missing markers.
fn token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("NA".to_string()),
        Just("nan".to_string()),
        Just("  ".to_string()),
        (-50i64..50).prop_map(|i| i.to_string()),
        (-100.0f64..100.0).prop_map(|f| format!("{:.2}", f)),
        "[a-c]{1,2}",
        " [a-c]{1,2} ",
        Just("True".to_string()),
    ]
}

/// A dataset of 1-4 columns and 0-30 rows built from raw tokens.
fn dataset() -> impl Strategy<Value = Dataset> {
    (1usize..5, 0usize..30).prop_flat_map(|(cols, rows)| {
        prop::collection::vec(prop::collection::vec(token(), rows), cols).prop_map(|columns| {
            let columns = columns
                .into_iter()
                .enumerate()
                .map(|(i, tokens)| column_from_tokens(format!("c{}", i), tokens))
                .collect();
            Dataset::new(columns).unwrap()
        })
    })
}

// =============================================================================
// Cleaning
// =============================================================================

proptest! {
    #[test]
    fn cleaning_never_adds_rows_or_gaps(raw in dataset()) {
        let (cleaned, report) = Cleaner::new().clean(&raw);

        prop_assert!(report.rows_after <= report.rows_before);
        prop_assert!(report.missing_after <= report.missing_before);
        prop_assert_eq!(report.missing_after, 0);
        prop_assert_eq!(report.duplicates_removed, report.rows_before - report.rows_after);
        prop_assert_eq!(cleaned.row_count(), report.rows_after);
        prop_assert_eq!(cleaned.column_names(), raw.column_names());
    }

    #[test]
    fn cleaning_settles_after_two_passes(raw in dataset()) {
        let cleaner = Cleaner::new();
        let (once, _) = cleaner.clean(&raw);
        let (twice, _) = cleaner.clean(&once);
        let (thrice, report) = cleaner.clean(&twice);

        prop_assert_eq!(report.duplicates_removed, 0);
        prop_assert_eq!(report.missing_before, 0);
        prop_assert_eq!(twice, thrice);
    }

    #[test]
    fn cleaning_is_deterministic(raw in dataset()) {
        let cleaner = Cleaner::new();
        prop_assert_eq!(cleaner.clean(&raw), cleaner.clean(&raw));
    }
}

// =============================================================================
// Pagination
// =============================================================================

proptest! {
    #[test]
    fn pages_reconstruct_dataset(raw in dataset(), page_size in 1i64..12) {
        let first = paginate(&raw, 1, page_size);
        let mut rows = Vec::new();

        for page in 1..=first.total_pages as i64 {
            let p = paginate(&raw, page, page_size);
            let start = (page as usize - 1) * p.page_size;
            prop_assert_eq!(p.rows.len(), p.page_size.min(p.total_rows.saturating_sub(start)));
            rows.extend(p.rows);
        }

        prop_assert_eq!(rows.len(), raw.row_count());
    }

    #[test]
    fn page_numbers_are_clamped(raw in dataset(), page in -5i64..50, page_size in -5i64..50) {
        let p = paginate(&raw, page, page_size);
        prop_assert!(p.page_size >= 1);
        prop_assert!(p.page >= 1);
        prop_assert!(p.page <= p.total_pages);
    }
}

// =============================================================================
// JSON conversion
// =============================================================================

proptest! {
    #[test]
    fn json_conversion_is_idempotent(values in prop::collection::vec(prop::num::f64::ANY, 0..20)) {
        let once = make_json_safe(&values);
        let twice = make_json_safe(&once);
        prop_assert_eq!(&once, &twice);

        for (value, json) in values.iter().zip(once.as_array().unwrap()) {
            prop_assert_eq!(json.is_null(), !value.is_finite());
        }
    }

    #[test]
    fn preview_rows_convert_cleanly(raw in dataset()) {
        let page = paginate(&raw, 1, 100);
        let json = serde_json::to_value(&page).unwrap();
        prop_assert_eq!(make_json_safe(&json), json);
    }
}

// =============================================================================
// Vocabulary lookups
// =============================================================================

proptest! {
    #[test]
    fn vocabulary_lookups_never_panic(s in "\\PC{0,40}") {
        let language = canonical_language(&s);
        let genre = canonical_genre(&s);
        prop_assert!(!language.is_empty());
        prop_assert!(!genre.is_empty());
    }
}
