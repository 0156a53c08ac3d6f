//! Kotoba IR - shared data types for the Kotoba interpreter.
//!
//! This crate holds the pieces every phase agrees on:
//! - [`Token`]: a lexical unit tagged with its originating line
//! - [`LineRange`]: the line (or `from-to` range) a diagnostic points at
//! - [`WordClass`]: the fixed keyword table that drives tokenizing,
//!   enclosure detection, and grammar templates
//!
//! There is no AST. Parsing and evaluation are fused in `kotoba_eval`, so
//! tokens are the only intermediate representation.

mod keyword;
mod line_range;
mod token;

pub use keyword::{all_keywords, classes_of, EnclosureKind, WordClass};
pub use line_range::LineRange;
pub use token::Token;
