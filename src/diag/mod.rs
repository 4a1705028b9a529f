//! Error types for `$search` tokenization and parsing.
//!
//! Failures are ordinary values: both stages are pure functions that return
//! the first violation they detect, with a stable machine-checkable kind
//! code and the offending source span. Malformed user input is an expected
//! condition, so nothing here panics, logs, or aggregates multiple errors.

mod render;

pub use render::render_error;

use crate::span::SourceSpan;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable reason codes for search expression errors.
///
/// `S001`-`S004` are lexical (reported by the tokenizer), `S005`-`S007`
/// structural (reported by the parser). A stream that never tokenizes
/// cleanly never reaches the parser, so the two ranges cannot mix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchErrorKind {
    /// Character not allowed at this point of an unquoted word
    #[serde(rename = "S001")]
    ForbiddenCharacter,

    /// End of input inside an open phrase
    #[serde(rename = "S002")]
    UnterminatedPhrase,

    /// Phrase with no content between its quotes
    #[serde(rename = "S003")]
    EmptyPhrase,

    /// Term directly abutting another term with no separator
    #[serde(rename = "S004")]
    AdjacentTokenNoSeparator,

    /// Mismatched open/close group
    #[serde(rename = "S005")]
    UnbalancedParenthesis,

    /// Operator or group with no following term
    #[serde(rename = "S006")]
    MissingOperand,

    /// Group nesting beyond the supported depth
    #[serde(rename = "S007")]
    GroupTooDeep,
}

impl SearchErrorKind {
    /// Get the string code (e.g. "S001").
    pub fn code(&self) -> &'static str {
        match self {
            Self::ForbiddenCharacter => "S001",
            Self::UnterminatedPhrase => "S002",
            Self::EmptyPhrase => "S003",
            Self::AdjacentTokenNoSeparator => "S004",
            Self::UnbalancedParenthesis => "S005",
            Self::MissingOperand => "S006",
            Self::GroupTooDeep => "S007",
        }
    }

    /// Whether this kind is detected while scanning characters.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self,
            Self::ForbiddenCharacter
                | Self::UnterminatedPhrase
                | Self::EmptyPhrase
                | Self::AdjacentTokenNoSeparator
        )
    }
}

impl std::fmt::Display for SearchErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A classified `$search` failure.
///
/// Each variant carries the span of the offending character or token;
/// scanning variants also carry the partial literal collected so far.
#[derive(Clone, Debug, PartialEq, Error, Serialize)]
pub enum SearchError {
    /// An unquoted word ran into a character outside the allowed set
    /// (letters and `- . _ ~`), or `NOT` was followed by a group open.
    #[error("forbidden character '{found}' at position {}", span.start)]
    ForbiddenCharacter {
        found: char,
        partial: String,
        span: SourceSpan,
    },

    /// End of input reached while still inside a phrase.
    #[error("unterminated phrase {partial} at position {}", span.start)]
    UnterminatedPhrase { partial: String, span: SourceSpan },

    /// A phrase must contain at least one character.
    #[error("empty phrase at position {}", span.start)]
    EmptyPhrase { span: SourceSpan },

    /// A word or phrase directly abuts another term.
    #[error("'{found}' directly follows a term without a separator at position {}", span.start)]
    AdjacentTokenNoSeparator { found: char, span: SourceSpan },

    /// A close-group with no matching open, or an open never closed.
    #[error("unbalanced parenthesis at position {}", span.start)]
    UnbalancedParenthesis { span: SourceSpan },

    /// An operator or group where a term was required but none followed.
    #[error("expected a search term, found {found} at position {}", span.start)]
    MissingOperand { found: String, span: SourceSpan },

    /// Group nesting exceeded the supported depth.
    #[error("group nesting deeper than {limit} levels at position {}", span.start)]
    GroupTooDeep { limit: usize, span: SourceSpan },
}

impl SearchError {
    /// The machine-checkable reason code for this error.
    pub fn kind(&self) -> SearchErrorKind {
        match self {
            Self::ForbiddenCharacter { .. } => SearchErrorKind::ForbiddenCharacter,
            Self::UnterminatedPhrase { .. } => SearchErrorKind::UnterminatedPhrase,
            Self::EmptyPhrase { .. } => SearchErrorKind::EmptyPhrase,
            Self::AdjacentTokenNoSeparator { .. } => SearchErrorKind::AdjacentTokenNoSeparator,
            Self::UnbalancedParenthesis { .. } => SearchErrorKind::UnbalancedParenthesis,
            Self::MissingOperand { .. } => SearchErrorKind::MissingOperand,
            Self::GroupTooDeep { .. } => SearchErrorKind::GroupTooDeep,
        }
    }

    /// The span of the offending character or token.
    pub fn span(&self) -> SourceSpan {
        match self {
            Self::ForbiddenCharacter { span, .. }
            | Self::UnterminatedPhrase { span, .. }
            | Self::EmptyPhrase { span }
            | Self::AdjacentTokenNoSeparator { span, .. }
            | Self::UnbalancedParenthesis { span }
            | Self::MissingOperand { span, .. }
            | Self::GroupTooDeep { span, .. } => *span,
        }
    }
}
