//! `$search` expression parser.
//!
//! This module parses tokenized search expressions into the typed tree.
//! The parser consumes tokens (not raw `&str`); lexical validity is
//! established by [`crate::lex::tokenize`] before any structure is built,
//! and the two stages report strictly separated error domains.
//!
//! ## Usage
//!
//! ```
//! use odata_search::parse_search;
//!
//! let expr = parse_search("abc AND NOT xyz OR olingo").unwrap();
//! assert_eq!(expr.to_string(), "((abc AND (NOT xyz)) OR olingo)");
//! ```

pub mod expr;
mod stream;

#[cfg(test)]
mod tests;

pub use expr::{parse, parse_search, MAX_GROUP_DEPTH};
pub use stream::TokenStream;
