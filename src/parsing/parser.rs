//! Pipeline configuration and orchestration.
//!
//! [`Parser`] owns the immutable [`Options`] plus the two compiled
//! patterns built from the configurable tables, threads the buffer
//! through the stages in their fixed order, and funnels every stage
//! condition through one central recording function: recorded always,
//! raised only when `stop_on_error` is set and the condition is hard.

use regex::Regex;

use crate::error::ParseError;
use crate::name::{Name, Part, PartRef};
use crate::parsing::case::fix_name_case;
use crate::parsing::lexicon;
use crate::parsing::normalize::normalize;
use crate::parsing::stages::{self, StageResult};

/// Matches nothing; stands in for an empty configured table.
const NEVER: &str = r"[^\s\S]";

/// Configuration for a [`Parser`].
///
/// Overriding a lexical table replaces the default wholesale.
#[derive(Debug, Clone)]
pub struct Options {
    /// Ordinary suffixes, matched with optional trailing dots.
    pub suffixes: Vec<String>,
    /// Numeral suffixes, matched without dots.
    pub numeral_suffixes: Vec<String>,
    /// Last-name particles.
    pub prefixes: Vec<String>,
    /// Academic titles.
    pub academic_titles: Vec<String>,
    /// Record an error when no first name is found. Default `true`.
    pub mandatory_first_name: bool,
    /// Record an error when no last name is found. Default `true`.
    pub mandatory_last_name: bool,
    /// Which part [`Parser::parse`] returns. Default [`Part::All`].
    pub part: Part,
    /// Fix the case of every word before parsing. Default `false`.
    pub fix_case: bool,
    /// Abort on the first hard error instead of only collecting it.
    /// Default `true`.
    pub stop_on_error: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            suffixes: to_strings(lexicon::SUFFIXES),
            numeral_suffixes: to_strings(lexicon::NUMERAL_SUFFIXES),
            prefixes: to_strings(lexicon::PREFIXES),
            academic_titles: to_strings(lexicon::ACADEMIC_TITLES),
            mandatory_first_name: true,
            mandatory_last_name: true,
            part: Part::All,
            fix_case: false,
            stop_on_error: true,
        }
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

/// What [`Parser::parse`] returns, shaped by [`Options::part`].
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutput {
    /// The whole record (`Part::All`).
    All(Name),
    /// One text part; `None` when that part was not found.
    Text(Option<String>),
    /// The recorded error messages (`Part::Error`).
    Errors(Vec<String>),
}

impl ParseOutput {
    /// The whole record, if `Part::All` was requested.
    pub fn into_name(self) -> Option<Name> {
        match self {
            ParseOutput::All(name) => Some(name),
            _ => None,
        }
    }

    /// The selected text part, if one was requested and found.
    pub fn into_text(self) -> Option<String> {
        match self {
            ParseOutput::Text(text) => text,
            _ => None,
        }
    }

    /// The error list, if `Part::Error` was requested.
    pub fn into_errors(self) -> Vec<String> {
        match self {
            ParseOutput::Errors(errors) => errors,
            _ => Vec::new(),
        }
    }
}

/// The extraction pipeline.
///
/// A parser is immutable once built and freely reusable: every call to
/// [`parse`](Parser::parse) works on its own buffer and record, so
/// nothing leaks between calls.
#[derive(Debug)]
pub struct Parser {
    options: Options,
    title_pattern: Regex,
    suffix_pattern: Regex,
}

impl Parser {
    /// A parser with the default options.
    pub fn new() -> Self {
        Self::with_options(Options::default())
    }

    /// A parser with the given options.
    pub fn with_options(options: Options) -> Self {
        let title_pattern = compile(&format!(
            r"(?i)((^| )({})\.* )",
            alternation(&options.academic_titles)
        ));
        let suffix_pattern = compile(&format!(
            r"(?i)( ((({})\.*)|({}))(((,+ +\S+)*$)|( |,)))",
            alternation(&options.suffixes),
            alternation(&options.numeral_suffixes)
        ));
        Parser {
            options,
            title_pattern,
            suffix_pattern,
        }
    }

    /// The configuration this parser was built with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Parse a name string into its parts.
    ///
    /// `None` models absent or non-string input and records
    /// `IncorrectInput`. Hard errors are always recorded on the result;
    /// with `stop_on_error` set they also come back as `Err`.
    pub fn parse(&self, input: Option<&str>) -> Result<ParseOutput, ParseError> {
        let mut name = Name::default();
        let Some(raw) = input else {
            self.record(&mut name, ParseError::IncorrectInput)?;
            return Ok(self.select(name));
        };

        let full_name = if self.options.fix_case {
            fix_name_case(&normalize(raw))
        } else {
            normalize(raw)
        };
        name.set_full_name(full_name.clone());
        let mut buffer = full_name;

        let out = stages::academic_title(&self.title_pattern, buffer);
        buffer = self.store(&mut name, Name::set_academic_title, out)?;

        let out = stages::nicknames(self.options.fix_case, buffer);
        buffer = self.store(&mut name, Name::set_nicknames, out)?;

        let out = stages::suffix(&self.suffix_pattern, buffer);
        buffer = self.store(&mut name, Name::set_suffix, out)?;

        let out = stages::flip_on_comma(buffer, name.full_name().unwrap_or(""));
        buffer = out.buffer;
        if let Some(error) = out.error {
            self.record(&mut name, error)?;
        }

        let out = stages::last_name(
            &self.options.prefixes,
            self.options.mandatory_last_name,
            buffer,
        );
        buffer = self.store(&mut name, Name::set_last_name, out)?;

        let out = stages::leading_initial(buffer);
        buffer = self.store(&mut name, Name::set_leading_initial, out)?;

        let out = stages::first_name(self.options.mandatory_first_name, buffer);
        buffer = self.store(&mut name, Name::set_first_name, out)?;

        let out = stages::middle_name(buffer);
        self.store(&mut name, Name::set_middle_name, out)?;

        Ok(self.select(name))
    }

    /// Store a stage's value and feed its condition through [`record`].
    fn store(
        &self,
        name: &mut Name,
        set: fn(&mut Name, String),
        out: StageResult,
    ) -> Result<String, ParseError> {
        if let Some(value) = out.value {
            set(name, value);
        }
        if let Some(error) = out.error {
            self.record(name, error)?;
        }
        Ok(out.buffer)
    }

    /// Record a condition on the result; raise it when it is hard and
    /// `stop_on_error` is set. Warnings never raise.
    fn record(&self, name: &mut Name, error: ParseError) -> Result<(), ParseError> {
        name.add_error(error.to_string());
        if self.options.stop_on_error && !error.is_warning() {
            return Err(error);
        }
        Ok(())
    }

    fn select(&self, name: Name) -> ParseOutput {
        match self.options.part {
            Part::All => ParseOutput::All(name),
            Part::Error => ParseOutput::Errors(name.errors().to_vec()),
            part => {
                let text = match name.part(part) {
                    PartRef::Text(text) => text.map(String::from),
                    PartRef::All(_) | PartRef::Errors(_) => None,
                };
                ParseOutput::Text(text)
            }
        }
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

/// Join configured entries into an alternation of escaped literals, so
/// they always match literally; an empty table yields a pattern that
/// matches nothing at all.
fn alternation(entries: &[String]) -> String {
    let escaped: Vec<String> = entries
        .iter()
        .filter(|entry| !entry.is_empty())
        .map(|entry| regex::escape(entry))
        .collect();
    if escaped.is_empty() {
        NEVER.to_string()
    } else {
        escaped.join("|")
    }
}

// The interpolated alternations are escaped literals; the stage patterns
// always compile.
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("stage pattern")
}
