//! Token stream for parsing.
//!
//! Wraps the tokenizer output and provides single-token lookahead with
//! convenient matching helpers. The search grammar needs exactly one token
//! of lookahead and no backtracking, and parsing fails fast on the first
//! structural violation, so there is no error-recovery machinery here.

use crate::lex::{Token, TokenKind};
use crate::span::SourceSpan;

/// A stream of tokens for parsing.
///
/// Owned by the parser for the duration of a single parse call. An `Eof`
/// terminator is synthesized at the end of the underlying tokens.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<Token>,
    pos: usize,
    eof: Token,
}

impl TokenStream {
    /// Create a new token stream from tokenizer output.
    pub fn new(tokens: Vec<Token>) -> Self {
        let end = tokens.last().map(|t| t.span.end).unwrap_or(0);
        Self {
            tokens,
            pos: 0,
            eof: Token::new(TokenKind::Eof, SourceSpan::point(end)),
        }
    }

    /// Check if at end of stream.
    pub fn is_eof(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    /// Peek at the current token without consuming it.
    pub fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    /// Get the span of the current token.
    pub fn current_span(&self) -> SourceSpan {
        self.peek().span
    }

    /// Advance past the current token.
    pub fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Consume the current token and return it (owned).
    pub fn consume(&mut self) -> Token {
        let token = self.peek().clone();
        self.advance();
        token
    }

    /// Check if the current token matches the expected kind.
    pub fn check(&self, kind: &TokenKind) -> bool {
        std::mem::discriminant(&self.peek().kind) == std::mem::discriminant(kind)
    }

    /// Consume the current token if it matches, returning true.
    pub fn match_kind(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Check if the current token can start a term of the grammar.
    ///
    /// Anything that can start a `NotTerm`: a word, a phrase, a group open,
    /// or `NOT` itself. The parser uses this to detect implicit conjunction.
    pub fn is_term_start(&self) -> bool {
        matches!(
            self.peek().kind,
            TokenKind::Word(_) | TokenKind::Phrase(_) | TokenKind::Open | TokenKind::Not
        )
    }
}
