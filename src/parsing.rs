//! The extraction pipeline.
//!
//! Parsing runs a fixed sequence of stages over one shared text buffer,
//! each stage consuming its own grammar fragment and removing the matched
//! text before the next stage runs:
//!
//! 1. academic title
//! 2. nicknames
//! 3. suffix
//! 4. comma flip (`Last, First` reordering)
//! 5. last name
//! 6. leading initial
//! 7. first name
//! 8. middle name (the remainder)
//!
//! The order is load-bearing: stages never revisit text an earlier stage
//! removed, and each stage relies on the ones before it having run.

pub mod case;
pub mod lexicon;
pub mod normalize;

mod parser;
pub(crate) mod stages;

pub use parser::{Options, ParseOutput, Parser};
