//! # OData `$search` expression parser
//!
//! A tokenizer and parser for the OData `$search` query option: words and
//! phrases combined with `AND`, `OR`, `NOT`, and explicit grouping, with:
//! - Exact reserved-word recognition (whole-run, case-sensitive — look-alike
//!   words like `NO` or `ANDsomething` never become operators)
//! - Precise source spans on every token, tree node, and error
//! - A structured error taxonomy with stable reason codes
//!
//! ## Architecture
//!
//! Data flows one way: raw text → tokenizer → token stream → parser →
//! expression tree. Both stages are pure functions of the input string and
//! fail fast with the first classified violation; there is no shared state
//! between calls, so concurrent use needs no coordination.
//!
//! 1. **Tokenize**: scan the decoded `$search` text into spanned tokens,
//!    enforcing the lexical rules (word character set, phrase escaping,
//!    term separation)
//! 2. **Parse**: recursive descent over the tokens honoring precedence
//!    (`OR` lowest, then `AND`/adjacency, then `NOT`, then grouping)
//!
//! ## Quick Start
//!
//! ```
//! use odata_search::parse_search;
//!
//! let expr = parse_search("abc AND NOT xyz OR olingo").unwrap();
//! assert_eq!(expr.to_string(), "((abc AND (NOT xyz)) OR olingo)");
//!
//! let err = parse_search("notAw0rd").unwrap_err();
//! assert_eq!(err.kind().code(), "S001");
//! ```

pub mod ast;
pub mod diag;
pub mod lex;
pub mod parse;
pub mod span;

// Re-exports
pub use ast::{SearchExpression, SearchTerm, TermKind};
pub use diag::{render_error, SearchError, SearchErrorKind};
pub use lex::{tokenize, Token, TokenKind};
pub use parse::{parse, parse_search, MAX_GROUP_DEPTH};
pub use span::SourceSpan;
