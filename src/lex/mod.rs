//! `$search` lexical analysis.
//!
//! This module turns a raw search expression into a stream of typed tokens
//! with source spans. The parser then consumes these tokens.
//!
//! ## Design
//!
//! Search lexing is small but has interacting edge cases:
//! - Reserved words (`AND`, `OR`, `NOT`) are exact, case-sensitive,
//!   whole-run matches; look-alike words must never become operators
//! - Unquoted words allow letters and `- . _ ~` but no digits
//! - Phrases keep their quotes, recognize `\\` and `\"`, and must be
//!   separated from neighboring terms
//! - `NOT` must not be followed by a group open
//!
//! ## Usage
//!
//! ```
//! use odata_search::lex::tokenize;
//!
//! let tokens = tokenize("abc AND NOT xyz").unwrap();
//! for token in &tokens {
//!     println!("{:?} at {:?}", token.kind, token.span);
//! }
//! ```

mod chars;
mod token;
mod tokenizer;

pub use token::{reserved_from_str, Token, TokenKind};
pub use tokenizer::{tokenize, Tokenizer};
