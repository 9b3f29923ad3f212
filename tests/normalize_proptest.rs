//! Property-based tests for the normalizer and the lenient parsing mode.
//!
//! These pin down the contracts every stage leans on: normalization is
//! idempotent and shape-stable, and a lenient parse of arbitrary input
//! never fails, never panics, and never stores an empty part.

use fullname::parsing::normalize::normalize;
use fullname::{Options, Parser};
use proptest::prelude::*;

/// Name-ish fragments mixing words, whitespace flavors, commas and the
/// odd non-breaking space.
fn messy_string_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Plain word runs with ordinary separators
        "[a-zA-Z. ]{0,40}",
        // Comma-heavy input
        "[a-z ,]{0,30}",
        // Whitespace flavors and non-breaking spaces
        "[a-z ,\u{a0}\t\n]{0,30}",
        // Anything printable
        ".{0,20}",
    ]
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in messy_string_strategy()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_leaves_no_ragged_edges(s in messy_string_strategy()) {
        let result = normalize(&s);
        let trimmed = result.trim_matches(|c: char| c.is_whitespace() || c == ',');
        prop_assert_eq!(trimmed, result.as_str());
    }

    #[test]
    fn normalize_collapses_every_comma_run(s in messy_string_strategy()) {
        let result = normalize(&s);
        prop_assert!(!result.contains(",,"));
        prop_assert!(!result.contains(", ,"));
    }

    #[test]
    fn normalize_single_spaces_without_nbsp(s in messy_string_strategy()) {
        let result = normalize(&s);
        if !result.contains('\u{a0}') {
            prop_assert!(!result.contains("  "));
            prop_assert!(!result.contains('\t'));
            prop_assert!(!result.contains('\n'));
        }
    }

    #[test]
    fn lenient_parsing_never_fails(s in messy_string_strategy()) {
        let parser = Parser::with_options(Options {
            stop_on_error: false,
            ..Options::default()
        });
        let output = parser.parse(Some(&s));
        prop_assert!(output.is_ok());
    }

    #[test]
    fn lenient_parsing_never_stores_empty_parts(s in messy_string_strategy()) {
        let parser = Parser::with_options(Options {
            stop_on_error: false,
            ..Options::default()
        });
        let name = parser
            .parse(Some(&s))
            .expect("lenient parse")
            .into_name()
            .expect("whole record");
        for part in [
            name.leading_initial(),
            name.first_name(),
            name.middle_name(),
            name.last_name(),
            name.nicknames(),
            name.academic_title(),
            name.suffix(),
        ] {
            if let Some(text) = part {
                prop_assert!(!text.is_empty());
            }
        }
        // The record always carries the normalized input.
        let normalized = normalize(&s);
        prop_assert_eq!(name.full_name(), Some(normalized.as_str()));
    }
}
