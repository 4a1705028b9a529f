//! The `$search` scanning state machine.
//!
//! Scans left to right over Unicode code points with three modes:
//! separator skipping, word scanning, and phrase scanning. Parentheses are
//! single-character productions with no lookahead. The scanner fails fast:
//! the first malformed construct aborts with a classified [`SearchError`]
//! and no partial token stream is returned.
//!
//! Reserved-word recognition happens only after a maximal word run has been
//! scanned, by comparing the whole run against `AND` / `OR` / `NOT`
//! case-sensitively. A run that merely contains or extends a reserved word
//! (`ANDsomething`, `NObody`, `and`) is an ordinary word, which is what
//! keeps short look-alikes from ever being misclassified.

use crate::diag::SearchError;
use crate::lex::chars::{is_phrase_boundary, is_search_ws, is_word_char, is_word_start};
use crate::lex::token::{reserved_from_str, Token, TokenKind};
use crate::span::SourceSpan;
use std::sync::Arc;
use tracing::trace;

/// Tokenize a raw `$search` expression.
///
/// On success the tokens appear in source order, and concatenating each
/// token's matched span together with the skipped whitespace between them
/// reconstructs the input exactly.
pub fn tokenize(source: &str) -> Result<Vec<Token>, SearchError> {
    let tokens = Tokenizer::new(source).run()?;
    trace!(tokens = tokens.len(), "tokenized search expression");
    Ok(tokens)
}

/// Scanner over a single `$search` value.
///
/// Pure function of its input: no state survives a `run` call.
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
    tokens: Vec<Token>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer over the given source.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            tokens: Vec::new(),
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    fn bump(&mut self, c: char) {
        self.pos += c.len_utf8();
    }

    /// Span of the single character at the current position.
    fn char_span(&self, c: char) -> SourceSpan {
        SourceSpan::new(self.pos, self.pos + c.len_utf8())
    }

    fn push(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::from_range(kind, start, self.pos));
    }

    /// Scan the whole input, consuming the tokenizer.
    pub fn run(mut self) -> Result<Vec<Token>, SearchError> {
        while let Some(c) = self.peek() {
            let start = self.pos;
            if is_search_ws(c) {
                self.bump(c);
                continue;
            }
            match c {
                '(' => {
                    // Negation is limited to atomic terms in this grammar
                    // variant: NOT directly before a group open is rejected
                    // here rather than in the parser.
                    if let Some(Token {
                        kind: TokenKind::Not,
                        ..
                    }) = self.tokens.last()
                    {
                        return Err(SearchError::ForbiddenCharacter {
                            found: '(',
                            partial: "NOT".to_string(),
                            span: self.char_span('('),
                        });
                    }
                    self.bump(c);
                    self.push(TokenKind::Open, start);
                }
                ')' => {
                    self.bump(c);
                    self.push(TokenKind::Close, start);
                }
                '"' => self.scan_phrase(start)?,
                c if is_word_start(c) => self.scan_word(start)?,
                other => {
                    return Err(SearchError::ForbiddenCharacter {
                        found: other,
                        partial: String::new(),
                        span: self.char_span(other),
                    });
                }
            }
        }
        Ok(self.tokens)
    }

    /// Word mode: consume a maximal run of letters and `- . _ ~`, then
    /// classify the whole run as a reserved word or an ordinary word.
    fn scan_word(&mut self, start: usize) -> Result<(), SearchError> {
        while let Some(c) = self.peek() {
            if is_word_char(c) {
                self.bump(c);
                continue;
            }
            if is_search_ws(c) || c == '(' || c == ')' {
                break;
            }
            if c == '"' {
                // word abutting a phrase with no separator
                return Err(SearchError::AdjacentTokenNoSeparator {
                    found: c,
                    span: self.char_span(c),
                });
            }
            // digits and all other symbols terminate the run as an error
            return Err(SearchError::ForbiddenCharacter {
                found: c,
                partial: self.source[start..self.pos].to_string(),
                span: self.char_span(c),
            });
        }
        let run = &self.source[start..self.pos];
        let kind = reserved_from_str(run).unwrap_or_else(|| TokenKind::Word(Arc::from(run)));
        self.push(kind, start);
        Ok(())
    }

    /// Phrase mode: consume up to an unescaped closing quote, honoring the
    /// `\\` and `\"` escape sequences. Percent sequences pass through as
    /// opaque literal text.
    fn scan_phrase(&mut self, start: usize) -> Result<(), SearchError> {
        self.bump('"');
        loop {
            match self.peek() {
                None => {
                    return Err(SearchError::UnterminatedPhrase {
                        partial: self.source[start..].to_string(),
                        span: SourceSpan::new(start, self.pos),
                    });
                }
                Some('"') => {
                    self.bump('"');
                    break;
                }
                Some('\\') => {
                    self.bump('\\');
                    match self.peek() {
                        Some(escaped @ ('"' | '\\')) => self.bump(escaped),
                        Some(other) => {
                            return Err(SearchError::ForbiddenCharacter {
                                found: other,
                                partial: self.source[start..self.pos].to_string(),
                                span: self.char_span(other),
                            });
                        }
                        None => {
                            return Err(SearchError::UnterminatedPhrase {
                                partial: self.source[start..].to_string(),
                                span: SourceSpan::new(start, self.pos),
                            });
                        }
                    }
                }
                Some(c) => self.bump(c),
            }
        }
        let end = self.pos;
        if end - start == 2 {
            return Err(SearchError::EmptyPhrase {
                span: SourceSpan::new(start, end),
            });
        }
        // the closing quote must be followed by a separator or end of input
        if let Some(c) = self.peek() {
            if !is_phrase_boundary(c) {
                return Err(SearchError::AdjacentTokenNoSeparator {
                    found: c,
                    span: self.char_span(c),
                });
            }
        }
        self.tokens.push(Token::from_range(
            TokenKind::Phrase(Arc::from(&self.source[start..end])),
            start,
            end,
        ));
        Ok(())
    }
}
