//! `$search` token types.
//!
//! Tokens are the output of lexical analysis, ready for parsing.
//! Each token carries its source span for precise diagnostics.

use crate::span::SourceSpan;
use std::sync::Arc;

/// A token with its source span.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// The token kind
    pub kind: TokenKind,
    /// Source location
    pub span: SourceSpan,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, span: SourceSpan) -> Self {
        Self { kind, span }
    }

    /// Create a token from a range.
    pub fn from_range(kind: TokenKind, start: usize, end: usize) -> Self {
        Self {
            kind,
            span: SourceSpan::new(start, end),
        }
    }

    /// Check if this token is of a specific kind.
    pub fn is(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.kind) == std::mem::discriminant(kind)
    }

    /// Check if this is an EOF token.
    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }

    /// The matched literal, if this token kind carries one.
    ///
    /// For a phrase this includes the surrounding quotes and any escape
    /// sequences, exactly as matched from the input.
    pub fn literal(&self) -> Option<&str> {
        self.kind.literal()
    }
}

/// Token kinds for the `$search` expression language.
///
/// This is the closed terminal set of the search grammar; `Eof` is a stream
/// terminator appended by the parser's token stream and never produced by
/// [`tokenize`](crate::lex::tokenize).
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    /// Unquoted search word, e.g. `olingo`
    Word(Arc<str>),

    /// Quoted search phrase, stored with its quotes, e.g. `"blue green"`
    Phrase(Arc<str>),

    /// Reserved word `AND`
    And,

    /// Reserved word `OR`
    Or,

    /// Reserved word `NOT`
    Not,

    /// `(`
    Open,

    /// `)`
    Close,

    /// End of input
    Eof,
}

impl TokenKind {
    /// Check if this token is one of the three reserved words.
    pub fn is_operator(&self) -> bool {
        matches!(self, TokenKind::And | TokenKind::Or | TokenKind::Not)
    }

    /// Check if this token carries term text (word or phrase).
    pub fn is_term(&self) -> bool {
        matches!(self, TokenKind::Word(_) | TokenKind::Phrase(_))
    }

    /// The matched literal, if this kind carries one.
    pub fn literal(&self) -> Option<&str> {
        match self {
            TokenKind::Word(s) | TokenKind::Phrase(s) => Some(s),
            _ => None,
        }
    }

    /// Get the reserved-word string for error messages (if an operator).
    pub fn operator_str(&self) -> Option<&'static str> {
        match self {
            TokenKind::And => Some("AND"),
            TokenKind::Or => Some("OR"),
            TokenKind::Not => Some("NOT"),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenKind::Word(s) => write!(f, "{}", s),
            TokenKind::Phrase(s) => write!(f, "{}", s),
            TokenKind::And => write!(f, "AND"),
            TokenKind::Or => write!(f, "OR"),
            TokenKind::Not => write!(f, "NOT"),
            TokenKind::Open => write!(f, "("),
            TokenKind::Close => write!(f, ")"),
            TokenKind::Eof => write!(f, "EOF"),
        }
    }
}

/// Classify a completed word run as a reserved word.
///
/// The comparison is case-sensitive and against the *entire* run: a run that
/// merely starts with a reserved word (`ANDsomething`) or matches it in the
/// wrong case (`and`) is an ordinary word. Classifying after the maximal run
/// is scanned is what keeps look-alikes (`NO`, `AN`, `NObody`) words without
/// any prefix special-casing.
pub fn reserved_from_str(s: &str) -> Option<TokenKind> {
    match s {
        "AND" => Some(TokenKind::And),
        "OR" => Some(TokenKind::Or),
        "NOT" => Some(TokenKind::Not),
        _ => None,
    }
}
