//! Default lexical tables.
//!
//! Overriding any table through [`Options`](super::Options) replaces it
//! wholesale; there is no element-wise merging.

/// Ordinary suffixes, matched with optional trailing dots.
pub const SUFFIXES: &[&str] = &["esq", "esquire", "jr", "sr", "phd"];

/// Numeral suffixes, matched without dots.
pub const NUMERAL_SUFFIXES: &[&str] = &["2", "iii", "ii", "iv", "v"];

/// Last-name particles. Multi-word entries match token-pairwise.
pub const PREFIXES: &[&str] = &[
    "bar", "ben", "bin", "da", "dal", "de la", "de", "del", "der", "di", "ibn", "la", "le", "san",
    "st", "ste", "van der", "van den", "van", "vel", "von",
];

/// Academic titles; never valid as the last word of a name.
pub const ACADEMIC_TITLES: &[&str] = &["ms", "miss", "mrs", "mr", "prof", "dr"];
