//! Human-readable rendering of search errors.
//!
//! Renders a single error in a format similar to Rust compiler errors:
//!
//! ```text
//! error[S001]: forbidden character '0' at position 5
//!   --> $search:1:6
//!    |
//!  1 | notAw0rd
//!    |      ^
//! ```

use crate::diag::SearchError;

/// Render an error against its source text.
///
/// A `$search` value is treated as a single line. Caret alignment is
/// byte-based, so snippets containing multi-byte characters before the
/// error position may align imperfectly; acceptable for diagnostics.
pub fn render_error(err: &SearchError, source: &str) -> String {
    let span = err.span();
    let mut output = String::new();

    output.push_str(&format!("error[{}]: {}\n", err.kind().code(), err));
    output.push_str(&format!("  --> $search:1:{}\n", span.start + 1));
    output.push_str("   |\n");
    output.push_str(&format!(" 1 | {}\n", source));

    let pad = " ".repeat(span.start.min(source.len()));
    let carets = "^".repeat(span.len().max(1));
    output.push_str(&format!("   | {}{}\n", pad, carets));

    output
}
