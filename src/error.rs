//! Parse error taxonomy.
//!
//! A closed set of conditions the pipeline can raise. Every condition is
//! recorded on the result record as its `Display` text; hard conditions
//! additionally abort the parse when `stop_on_error` is set, while
//! warnings never do.

use std::fmt;

/// Errors raised while parsing a name string.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The input was not a string.
    IncorrectInput,
    /// No first name was found while one was mandatory.
    FirstNameNotFound,
    /// No last name was found while one was mandatory.
    LastNameNotFound,
    /// More than one delimiter was left in the buffer, so "Last, First"
    /// reordering is ambiguous.
    FlipFailure { delimiter: char, full_name: String },
    /// A single stripping operation removed more than one occurrence of a
    /// stage pattern.
    MultipleMatches,
    /// The middle-name remainder held more than two words; the input is
    /// likely garbled.
    ManyMiddleNames { count: usize },
}

impl ParseError {
    /// Warnings are always recorded but never abort a parse.
    pub fn is_warning(&self) -> bool {
        matches!(self, ParseError::ManyMiddleNames { .. })
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::IncorrectInput => write!(f, "Incorrect input to parse."),
            ParseError::FirstNameNotFound => write!(f, "Couldn't find a first name."),
            ParseError::LastNameNotFound => write!(f, "Couldn't find a last name."),
            ParseError::FlipFailure {
                delimiter,
                full_name,
            } => write!(
                f,
                "Can't flip around multiple '{}' characters in name string '{}'.",
                delimiter, full_name
            ),
            ParseError::MultipleMatches => {
                write!(f, "The regex being used has multiple matches.")
            }
            ParseError::ManyMiddleNames { count } => {
                write!(f, "Warning: {} middle names", count)
            }
        }
    }
}

impl std::error::Error for ParseError {}
