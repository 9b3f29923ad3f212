//! String hygiene shared by every stage.
//!
//! Stages re-run [`normalize`] after each removal, so its exact behavior
//! is load-bearing: ends lose whitespace and commas, internal whitespace
//! collapses to single spaces, and runs of commas collapse to one.
//! Strings holding a non-breaking space keep their internal spacing
//! untouched, so intentionally non-breaking-spaced names survive.

use once_cell::sync::Lazy;
use regex::Regex;

/// Its presence disables internal whitespace collapsing.
const NO_BREAK_SPACE: char = '\u{a0}';

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Two or more commas separated by nothing but whitespace and commas.
static COMMA_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r",[\s,]*,").unwrap());

fn edge(c: char) -> bool {
    c.is_whitespace() || c == ','
}

/// Scrub a string of redundant whitespace and punctuation.
///
/// Total and idempotent; the empty string maps to itself.
pub fn normalize(tainted: &str) -> String {
    let trimmed = tainted.trim_matches(edge);
    let decommaed = COMMA_RUN.replace_all(trimmed, ", ");
    // The ", " replacement can leave a fresh trailing space or comma.
    let decommaed = decommaed.trim_matches(edge);
    if decommaed.contains(NO_BREAK_SPACE) {
        decommaed.to_string()
    } else {
        WHITESPACE_RUN.replace_all(decommaed, " ").into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_and_collapses_whitespace() {
        assert_eq!(normalize("  David   Davis  "), "David Davis");
        assert_eq!(normalize("\tDavid\n Davis\u{a0}"), "David Davis");
    }

    #[test]
    fn test_collapses_comma_runs() {
        assert_eq!(normalize("Davis,, David"), "Davis, David");
        assert_eq!(normalize("Davis, , David"), "Davis, David");
        assert_eq!(normalize("Davis,,, David"), "Davis, David");
    }

    #[test]
    fn test_trims_commas_and_spaces_from_both_ends() {
        assert_eq!(normalize(", Davis, "), "Davis");
        assert_eq!(normalize(" Jr., CLU, CFP, LUTC"), "Jr., CLU, CFP, LUTC");
        assert_eq!(normalize("Doe-Ray, John P.,"), "Doe-Ray, John P.");
    }

    #[test]
    fn test_non_breaking_space_blocks_internal_collapsing() {
        assert_eq!(
            normalize("Anna\u{a0}Maria  Smith"),
            "Anna\u{a0}Maria  Smith"
        );
        // Without the non-breaking space the run collapses.
        assert_eq!(normalize("Anna Maria  Smith"), "Anna Maria Smith");
    }

    #[test]
    fn test_total_on_empty_and_degenerate_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   "), "");
        assert_eq!(normalize(",,"), "");
        assert_eq!(normalize(" , , "), "");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "  David   Davis  ",
            "Davis,, David",
            "a ,,  b",
            "Anna\u{a0}Maria  Smith",
            "x\u{a0}y ,, z",
            "a,\u{a0},b",
            ", , ,",
            "",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }
}
