//! Word-case fixing for the optional `fix_case` pass.
//!
//! Runs exactly once, globally, before any stage; the nickname stage
//! re-applies it to its capture because the capture's first character sat
//! next to punctuation during the global pass.

/// Words whose canonical casing wins over first-letter capitalization:
/// name particles, roman numerals and dotted degrees.
pub const FORCE_CASE: &[&str] = &[
    "e", "y", "av", "af", "da", "dal", "de", "del", "der", "di", "la", "le", "van", "der", "den",
    "vel", "von", "II", "III", "IV", "V", "J.D.", "LL.M.", "M.D.", "D.O.", "D.C.", "Ph.D.",
];

/// Fix the case of a single word.
///
/// Force-cased words come back in their canonical casing; everything else
/// is lower-cased with its first character capitalized.
pub fn fix_word_case(word: &str) -> String {
    for entry in FORCE_CASE {
        if word.eq_ignore_ascii_case(entry) {
            return (*entry).to_string();
        }
    }
    let lowered = word.to_lowercase();
    let mut chars = lowered.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => lowered,
    }
}

/// Fix the case of every space-delimited word.
pub fn fix_name_case(name: &str) -> String {
    name.split(' ')
        .map(fix_word_case)
        .collect::<Vec<_>>()
        .join(" ")
}
