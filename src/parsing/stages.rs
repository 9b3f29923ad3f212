//! The extraction stages.
//!
//! Every stage takes the remaining buffer, matches its grammar fragment
//! and hands back the shrunken buffer together with the extracted value
//! and any condition it raised. All stages follow the same contract: the
//! designated capture of the first match is normalized and returned, the
//! entire matched span is stripped (the leading-initial stage excepted:
//! its lookahead is not consumed), and a stripping operation that removes
//! more than one occurrence raises `MultipleMatches`.
//!
//! The orchestrator in [`parser`](super::parser) runs the stages in a
//! fixed order and never lets one revisit text an earlier stage removed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::ParseError;
use crate::parsing::case::fix_name_case;
use crate::parsing::normalize::normalize;

/// What one stage did to the buffer.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StageResult {
    /// The remaining buffer, re-normalized.
    pub buffer: String,
    /// The extracted part, normalized and non-empty.
    pub value: Option<String>,
    /// A condition for the orchestrator to record.
    pub error: Option<ParseError>,
}

impl StageResult {
    fn unchanged(buffer: String) -> Self {
        StageResult {
            buffer,
            value: None,
            error: None,
        }
    }
}

/// Bracket- or quote-delimited nickname spans, shortest inner match.
static NICKNAMES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([\[('‘“"]+)(.+?)(['’”"\])]+)"#).unwrap());

/// A leading initial: one character plus dots, followed by a space and a
/// word of at least two letters. Only the initial itself is consumed.
static LEADING_INITIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.\.*) \p{L}\p{L}").unwrap());

/// The first space-delimited token.
static FIRST_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^ ]+").unwrap());

/// Normalized text of one capture group from the first match.
fn capture(pattern: &Regex, buffer: &str, group: usize) -> Option<String> {
    pattern
        .captures(buffer)
        .and_then(|caps| caps.get(group))
        .map(|m| normalize(m.as_str()))
        .filter(|text| !text.is_empty())
}

/// Replace every occurrence of `pattern`, re-normalizing.
///
/// Returns the new buffer and the number of occurrences replaced; more
/// than one is the `MultipleMatches` condition.
fn strip(pattern: &Regex, buffer: &str, replacement: &str) -> (String, usize) {
    let count = pattern.find_iter(buffer).count();
    if count == 0 {
        return (buffer.to_string(), 0);
    }
    let stripped = pattern.replace_all(buffer, replacement);
    (normalize(&stripped), count)
}

fn multiple(count: usize) -> Option<ParseError> {
    (count > 1).then_some(ParseError::MultipleMatches)
}

/// Stage 1: academic title.
///
/// The pattern requires a following space, so a title can never be the
/// last word of the buffer.
pub(crate) fn academic_title(pattern: &Regex, buffer: String) -> StageResult {
    let Some(title) = capture(pattern, &buffer, 1) else {
        return StageResult::unchanged(buffer);
    };
    let (buffer, count) = strip(pattern, &buffer, " ");
    StageResult {
        buffer,
        value: Some(title),
        error: multiple(count),
    }
}

/// Stage 2: nicknames.
///
/// The capture sat next to punctuation, so the global case pass may have
/// skipped it; it is fixed again when case fixing is on.
pub(crate) fn nicknames(fix_case: bool, buffer: String) -> StageResult {
    let Some(mut nick) = capture(&NICKNAMES, &buffer, 2) else {
        return StageResult::unchanged(buffer);
    };
    if fix_case {
        nick = fix_name_case(&nick);
    }
    let (buffer, count) = strip(&NICKNAMES, &buffer, " ");
    StageResult {
        buffer,
        value: Some(nick),
        error: multiple(count),
    }
}

/// Stage 3: suffix, including any comma-separated extra suffixes running
/// to the end of the buffer (`Jr., CLU, CFP, LUTC` comes back as one
/// string).
pub(crate) fn suffix(pattern: &Regex, buffer: String) -> StageResult {
    let Some(found) = capture(pattern, &buffer, 1) else {
        return StageResult::unchanged(buffer);
    };
    // Re-match the found text literally, keeping its trailing boundary.
    let removal = Regex::new(&format!(r"(?i) ({})($| |,)", regex::escape(&found)))
        .expect("escaped literal pattern");
    let (buffer, count) = strip(&removal, &buffer, "${2}");
    StageResult {
        buffer,
        value: Some(found),
        error: multiple(count),
    }
}

/// Stage 4: comma flip.
///
/// `Last, First` input becomes `First Last`; more than one comma cannot
/// be disambiguated and fails hard, leaving the buffer as it was.
pub(crate) fn flip_on_comma(buffer: String, full_name: &str) -> StageResult {
    let parts: Vec<&str> = buffer.split(',').collect();
    match parts.len() {
        2 => StageResult {
            buffer: normalize(&format!("{} {}", parts[1], parts[0])),
            value: None,
            error: None,
        },
        len if len > 2 => StageResult {
            buffer,
            value: None,
            error: Some(ParseError::FlipFailure {
                delimiter: ',',
                full_name: full_name.to_string(),
            }),
        },
        _ => StageResult::unchanged(buffer),
    }
}

/// Stage 5: last name, scanned from the end of the buffer.
///
/// The final token is extended leftwards over particle units: any token
/// followed by the conjunction `y` (Iberian double surnames), a two-token
/// configured prefix (`van der`), or a one-token configured prefix. Units
/// tolerate one trailing dot and compare case-insensitively. The name may
/// never claim the whole buffer; at least one leading token stays behind
/// for the first name or initial.
pub(crate) fn last_name(prefixes: &[String], mandatory: bool, buffer: String) -> StageResult {
    let tokens = space_tokens(&buffer);
    if tokens.len() < 2 {
        let error = mandatory.then_some(ParseError::LastNameNotFound);
        return StageResult {
            buffer,
            value: None,
            error,
        };
    }
    let mut start = tokens.len() - 1;
    loop {
        if start >= 3 && is_conjunction(tokens[start - 1].1) {
            start -= 2;
        } else if start >= 3 && is_prefix_pair(prefixes, tokens[start - 2].1, tokens[start - 1].1) {
            start -= 2;
        } else if start >= 2 && is_prefix(prefixes, tokens[start - 1].1) {
            start -= 1;
        } else {
            break;
        }
    }
    let span = tokens[start].0;
    let value = normalize(&buffer[span..]);
    let remaining = normalize(&buffer[..span]);
    StageResult {
        buffer: remaining,
        value: Some(value),
        error: None,
    }
}

/// Stage 6: leading initial.
///
/// The following space and two-letter word are required but not consumed,
/// which is what tells a true initial from a one-letter first name.
pub(crate) fn leading_initial(buffer: String) -> StageResult {
    let Some(end) = LEADING_INITIAL
        .captures(&buffer)
        .and_then(|caps| caps.get(1))
        .map(|m| m.end())
    else {
        return StageResult::unchanged(buffer);
    };
    let value = normalize(&buffer[..end]);
    if value.is_empty() {
        return StageResult::unchanged(buffer);
    }
    let remaining = normalize(&buffer[end..]);
    StageResult {
        buffer: remaining,
        value: Some(value),
        error: None,
    }
}

/// Stage 7: first name, the first remaining token.
pub(crate) fn first_name(mandatory: bool, buffer: String) -> StageResult {
    let Some(first) = capture(&FIRST_NAME, &buffer, 0) else {
        let error = mandatory.then_some(ParseError::FirstNameNotFound);
        return StageResult {
            buffer,
            value: None,
            error,
        };
    };
    let (buffer, _) = strip(&FIRST_NAME, &buffer, " ");
    StageResult {
        buffer,
        value: Some(first),
        error: None,
    }
}

/// Stage 8: whatever remains is the middle name.
///
/// A remainder of more than two words is recorded as a warning, never a
/// failure; it usually means the input was not a name at all.
pub(crate) fn middle_name(buffer: String) -> StageResult {
    let count = buffer.split(' ').count();
    let error = (count > 2).then_some(ParseError::ManyMiddleNames { count });
    let value = if buffer.is_empty() { None } else { Some(buffer) };
    StageResult {
        buffer: String::new(),
        value,
        error,
    }
}

/// Token start offsets. Literal spaces delimit; other whitespace (the
/// non-breaking space in particular) does not.
fn space_tokens(buffer: &str) -> Vec<(usize, &str)> {
    let mut tokens = Vec::new();
    let mut offset = 0;
    for piece in buffer.split(' ') {
        if !piece.is_empty() {
            tokens.push((offset, piece));
        }
        offset += piece.len() + 1;
    }
    tokens
}

/// One optional trailing dot dropped, lower-cased.
fn particle(token: &str) -> String {
    token.strip_suffix('.').unwrap_or(token).to_lowercase()
}

fn is_conjunction(token: &str) -> bool {
    particle(token) == "y"
}

fn is_prefix(prefixes: &[String], token: &str) -> bool {
    let token = particle(token);
    prefixes.iter().any(|p| p.to_lowercase() == token)
}

fn is_prefix_pair(prefixes: &[String], first: &str, second: &str) -> bool {
    let pair = format!("{} {}", first.to_lowercase(), particle(second));
    prefixes.iter().any(|p| p.to_lowercase() == pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::lexicon;

    fn default_prefixes() -> Vec<String> {
        lexicon::PREFIXES.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn test_nicknames_bracket_and_quote_variants() {
        for input in [
            "Björn \"Bill\" O'Malley",
            "Björn (\"Bill\") O'Malley",
            "Björn (Bill) O'Malley",
            "Björn 'Bill' O'Malley",
            "Björn [Bill] O'Malley",
            "Björn ‘Bill’ O'Malley",
            "Björn “Bill” O'Malley",
        ] {
            let out = nicknames(false, input.to_string());
            assert_eq!(out.value.as_deref(), Some("Bill"), "input {:?}", input);
            assert_eq!(out.buffer, "Björn O'Malley", "input {:?}", input);
            assert_eq!(out.error, None);
        }
    }

    #[test]
    fn test_nicknames_shortest_match_keeps_apostrophes_outside() {
        // The apostrophe in O'Malley never closes a span on its own.
        let out = nicknames(false, "Björn O'Malley".to_string());
        assert_eq!(out.value, None);
        assert_eq!(out.buffer, "Björn O'Malley");
    }

    #[test]
    fn test_nicknames_multiple_spans_flag_multiple_matches() {
        let out = nicknames(false, "Jüan (Martin) Lorenzo [Jojo]".to_string());
        assert_eq!(out.value.as_deref(), Some("Martin"));
        assert_eq!(out.buffer, "Jüan Lorenzo");
        assert_eq!(out.error, Some(ParseError::MultipleMatches));
    }

    #[test]
    fn test_flip_on_two_parts() {
        let out = flip_on_comma("Davis, David".to_string(), "Davis, David");
        assert_eq!(out.buffer, "David Davis");
        assert_eq!(out.error, None);
    }

    #[test]
    fn test_flip_without_comma_is_a_no_op() {
        let out = flip_on_comma("David Davis".to_string(), "David Davis");
        assert_eq!(out.buffer, "David Davis");
        assert_eq!(out.error, None);
    }

    #[test]
    fn test_flip_with_two_commas_fails_and_keeps_buffer() {
        let full = "Jüan, Martinez, de Lorenzo y Gutierez";
        let out = flip_on_comma(full.to_string(), full);
        assert_eq!(out.buffer, full);
        assert_eq!(
            out.error,
            Some(ParseError::FlipFailure {
                delimiter: ',',
                full_name: full.to_string(),
            })
        );
    }

    #[test]
    fn test_last_name_single_token() {
        let out = last_name(&default_prefixes(), true, "David Davis".to_string());
        assert_eq!(out.value.as_deref(), Some("Davis"));
        assert_eq!(out.buffer, "David");
    }

    #[test]
    fn test_last_name_takes_prefix_particles() {
        let out = last_name(&default_prefixes(), true, "Björn van O'Malley".to_string());
        assert_eq!(out.value.as_deref(), Some("van O'Malley"));
        assert_eq!(out.buffer, "Björn");

        let out = last_name(
            &default_prefixes(),
            true,
            "Björn Charles van der O'Malley".to_string(),
        );
        assert_eq!(out.value.as_deref(), Some("van der O'Malley"));
        assert_eq!(out.buffer, "Björn Charles");
    }

    #[test]
    fn test_last_name_two_token_particle_without_single_entry() {
        // "den" alone is not a prefix; only the "van den" pair is.
        let out = last_name(&default_prefixes(), true, "Anna van den Berg".to_string());
        assert_eq!(out.value.as_deref(), Some("van den Berg"));
        assert_eq!(out.buffer, "Anna");
    }

    #[test]
    fn test_last_name_dotted_particle() {
        let out = last_name(&default_prefixes(), true, "Anna St. Croix".to_string());
        assert_eq!(out.value.as_deref(), Some("St. Croix"));
        assert_eq!(out.buffer, "Anna");
    }

    #[test]
    fn test_last_name_conjunction_form() {
        let out = last_name(
            &default_prefixes(),
            true,
            "Björn Charles O'Malley y Muñoz".to_string(),
        );
        assert_eq!(out.value.as_deref(), Some("O'Malley y Muñoz"));
        assert_eq!(out.buffer, "Björn Charles");
    }

    #[test]
    fn test_last_name_never_claims_the_whole_buffer() {
        // "bin" is a prefix, but consuming it would leave no first name.
        let out = last_name(&default_prefixes(), true, "Bin Lin".to_string());
        assert_eq!(out.value.as_deref(), Some("Lin"));
        assert_eq!(out.buffer, "Bin");
    }

    #[test]
    fn test_last_name_missing_when_one_token_left() {
        let out = last_name(&default_prefixes(), true, "Edward".to_string());
        assert_eq!(out.value, None);
        assert_eq!(out.error, Some(ParseError::LastNameNotFound));
        assert_eq!(out.buffer, "Edward");

        let out = last_name(&default_prefixes(), false, "Edward".to_string());
        assert_eq!(out.error, None);
    }

    #[test]
    fn test_leading_initial_wants_a_two_letter_word_next() {
        let out = leading_initial("C. Björn Roger".to_string());
        assert_eq!(out.value.as_deref(), Some("C."));
        assert_eq!(out.buffer, "Björn Roger");

        // "C." before another initial is a first name, not an initial.
        let out = leading_initial("B. C.".to_string());
        assert_eq!(out.value, None);
        assert_eq!(out.buffer, "B. C.");

        let out = leading_initial("B C".to_string());
        assert_eq!(out.value, None);

        let out = leading_initial("B.J. Thomas".to_string());
        assert_eq!(out.value, None);
    }

    #[test]
    fn test_first_name_takes_the_first_token() {
        let out = first_name(true, "Jüan Martinez".to_string());
        assert_eq!(out.value.as_deref(), Some("Jüan"));
        assert_eq!(out.buffer, "Martinez");
    }

    #[test]
    fn test_first_name_missing_on_empty_buffer() {
        let out = first_name(true, String::new());
        assert_eq!(out.value, None);
        assert_eq!(out.error, Some(ParseError::FirstNameNotFound));

        let out = first_name(false, String::new());
        assert_eq!(out.error, None);
    }

    #[test]
    fn test_middle_name_is_the_remainder() {
        let out = middle_name("Martinez".to_string());
        assert_eq!(out.value.as_deref(), Some("Martinez"));
        assert_eq!(out.error, None);

        let out = middle_name(String::new());
        assert_eq!(out.value, None);
        assert_eq!(out.error, None);
    }

    #[test]
    fn test_middle_name_warns_past_two_words() {
        let out = middle_name("a b c d".to_string());
        assert_eq!(out.value.as_deref(), Some("a b c d"));
        assert_eq!(out.error, Some(ParseError::ManyMiddleNames { count: 4 }));

        let out = middle_name("C. R.".to_string());
        assert_eq!(out.error, None);
    }
}
