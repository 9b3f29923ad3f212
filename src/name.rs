//! The parsed name record and part selection.
//!
//! [`Name`] is a plain data holder the pipeline fills while it consumes
//! the input; callers read it back through the per-part accessors or
//! [`Name::part`].

use serde::Serialize;

/// Which part of a parsed name a caller wants back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Part {
    /// The whole record.
    #[default]
    All,
    Title,
    First,
    Middle,
    Last,
    Nick,
    Suffix,
    /// The list of recorded error messages.
    Error,
}

impl Part {
    /// Parse a part name, case-insensitively.
    ///
    /// Unrecognized names fall back to [`Part::All`].
    pub fn from_name(name: &str) -> Part {
        match name.to_lowercase().as_str() {
            "title" => Part::Title,
            "first" => Part::First,
            "middle" => Part::Middle,
            "last" => Part::Last,
            "nick" => Part::Nick,
            "suffix" => Part::Suffix,
            "error" => Part::Error,
            _ => Part::All,
        }
    }
}

/// One selected part of a [`Name`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PartRef<'a> {
    /// The whole record.
    All(&'a Name),
    /// A single text part; `None` when the part was not found.
    Text(Option<&'a str>),
    /// The recorded error messages.
    Errors(&'a [String]),
}

/// A parsed name.
///
/// Each part is `None` until its extraction stage succeeds, and a set
/// part always holds a non-empty normalized string. `full_name` is the
/// normalized input, set once at parse start.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Name {
    full_name: Option<String>,
    leading_initial: Option<String>,
    first_name: Option<String>,
    middle_name: Option<String>,
    last_name: Option<String>,
    nicknames: Option<String>,
    academic_title: Option<String>,
    suffix: Option<String>,
    errors: Vec<String>,
}

impl Name {
    /// The normalized input the parse started from.
    pub fn full_name(&self) -> Option<&str> {
        self.full_name.as_deref()
    }

    /// A leading initial such as `C.` in `C. Björn Roger O'Malley`.
    pub fn leading_initial(&self) -> Option<&str> {
        self.leading_initial.as_deref()
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn middle_name(&self) -> Option<&str> {
        self.middle_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    /// Nicknames found in brackets or quotes.
    pub fn nicknames(&self) -> Option<&str> {
        self.nicknames.as_deref()
    }

    /// An academic title such as `Dr.` or `Prof.`.
    pub fn academic_title(&self) -> Option<&str> {
        self.academic_title.as_deref()
    }

    /// The suffix string, including any extra comma-separated suffixes
    /// (`Jr., CLU, CFP, LUTC`).
    pub fn suffix(&self) -> Option<&str> {
        self.suffix.as_deref()
    }

    /// Messages for every condition recorded during the parse, in order.
    /// An empty list is the success state.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Select one part of the record.
    pub fn part(&self, part: Part) -> PartRef<'_> {
        match part {
            Part::All => PartRef::All(self),
            Part::Title => PartRef::Text(self.academic_title()),
            Part::First => PartRef::Text(self.first_name()),
            Part::Middle => PartRef::Text(self.middle_name()),
            Part::Last => PartRef::Text(self.last_name()),
            Part::Nick => PartRef::Text(self.nicknames()),
            Part::Suffix => PartRef::Text(self.suffix()),
            Part::Error => PartRef::Errors(self.errors()),
        }
    }

    pub(crate) fn set_full_name(&mut self, value: String) {
        self.full_name = Some(value);
    }

    pub(crate) fn set_leading_initial(&mut self, value: String) {
        self.leading_initial = Some(value);
    }

    pub(crate) fn set_first_name(&mut self, value: String) {
        self.first_name = Some(value);
    }

    pub(crate) fn set_middle_name(&mut self, value: String) {
        self.middle_name = Some(value);
    }

    pub(crate) fn set_last_name(&mut self, value: String) {
        self.last_name = Some(value);
    }

    pub(crate) fn set_nicknames(&mut self, value: String) {
        self.nicknames = Some(value);
    }

    pub(crate) fn set_academic_title(&mut self, value: String) {
        self.academic_title = Some(value);
    }

    pub(crate) fn set_suffix(&mut self, value: String) {
        self.suffix = Some(value);
    }

    pub(crate) fn add_error(&mut self, message: String) {
        self.errors.push(message);
    }
}
