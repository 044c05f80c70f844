//! Degrees-minutes-seconds and decimal-degree text
//!
//! A small explicit grammar (tokenizer + angle-group reducer) reads
//! free-form coordinate strings; the formatter writes them back.

mod tokenizer;
mod parser;
mod formatter;


pub use tokenizer::{tokenize, Hemisphere, Sign, Token, Unit};
pub use parser::parse_freeform;
pub use formatter::{to_dms, DmsFormatter, DmsStrings, DEFAULT_FRACTION_DIGITS, MAX_FRACTION_DIGITS};
