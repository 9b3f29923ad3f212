//! # fullname
//!
//! A parser for personal name strings.
//!
//! Splits free-text input like `Dr. John P. Doe-Ray, Jr.` or
//! `Doe-Ray, John P.` into its parts: leading initial, first name, middle
//! name, last name, nicknames, academic title and suffixes.
//!
//! ```text
//! let parser = Parser::new();
//! let name = parser.parse(Some("Dr. John P. Doe-Ray, Jr."))?.into_name();
//! // title "Dr.", first "John", middle "P.", last "Doe-Ray", suffix "Jr."
//! ```
//!
//! Parsing runs a fixed sequence of extraction stages over one shared text
//! buffer; see the [parsing] module for the stage order and the per-stage
//! grammars.

pub mod error;
pub mod name;
pub mod parsing;

pub use error::ParseError;
pub use name::{Name, Part, PartRef};
pub use parsing::{Options, ParseOutput, Parser};
