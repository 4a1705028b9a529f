//! Search expression parsing.
//!
//! Recursive descent over the token stream with one token of lookahead,
//! honoring the grammar's precedence (lowest to highest):
//!
//! ```text
//! SearchExpr := OrExpr
//! OrExpr     := AndExpr ( OR AndExpr )*
//! AndExpr    := NotTerm ( ( AND )? NotTerm )*   // adjacency is implicit AND
//! NotTerm    := NOT Primary | Primary
//! Primary    := Word | Phrase | OPEN SearchExpr CLOSE
//! ```
//!
//! OR and AND are left-associative; implicit conjunction produces the same
//! tree shape as an explicit `AND`. `NOT` binds to the single following
//! primary, never to a whole conjunction.

use crate::ast::{SearchExpression, SearchTerm, TermKind};
use crate::diag::SearchError;
use crate::lex::{tokenize, Token, TokenKind};
use crate::parse::stream::TokenStream;
use std::sync::Arc;
use tracing::trace;

/// Maximum group nesting depth accepted by the parser.
///
/// Recursion mirrors grouping depth, so pathological inputs like a few
/// thousand open parentheses could otherwise exhaust the stack.
pub const MAX_GROUP_DEPTH: usize = 64;

/// Tokenize and parse a raw `$search` expression.
///
/// The crate's primary entry point: either a well-formed expression tree
/// or the first classified error, never a partial result.
pub fn parse_search(input: &str) -> Result<SearchExpression, SearchError> {
    parse(tokenize(input)?)
}

/// Parse a token stream into an expression tree.
///
/// The stream must come from [`tokenize`]; a hand-built stream is accepted
/// but only lexically valid combinations are ever produced by this crate.
pub fn parse(tokens: Vec<Token>) -> Result<SearchExpression, SearchError> {
    let mut stream = TokenStream::new(tokens);
    let expr = parse_or_expr(&mut stream, 0)?;

    // the grammar consumes every token except a close with no open
    if !stream.is_eof() {
        return Err(SearchError::UnbalancedParenthesis {
            span: stream.current_span(),
        });
    }

    trace!("parsed search expression");
    Ok(expr)
}

/// Parse an OR expression: `AndExpr ( OR AndExpr )*`, left-associative.
fn parse_or_expr(stream: &mut TokenStream, depth: usize) -> Result<SearchExpression, SearchError> {
    let mut left = parse_and_expr(stream, depth)?;

    while stream.match_kind(&TokenKind::Or) {
        let right = parse_and_expr(stream, depth)?;
        left = SearchExpression::or(left, right);
    }

    Ok(left)
}

/// Parse an AND expression, folding explicit `AND` and bare adjacency into
/// the same left-associative conjunction shape.
fn parse_and_expr(stream: &mut TokenStream, depth: usize) -> Result<SearchExpression, SearchError> {
    let mut left = parse_not_term(stream, depth)?;

    loop {
        if stream.match_kind(&TokenKind::And) {
            let right = parse_not_term(stream, depth)?;
            left = SearchExpression::and(left, right);
        } else if stream.is_term_start() {
            // implicit conjunction: two terms separated only by whitespace
            let right = parse_not_term(stream, depth)?;
            left = SearchExpression::and(left, right);
        } else {
            break;
        }
    }

    Ok(left)
}

/// Parse `NOT Primary | Primary`.
fn parse_not_term(stream: &mut TokenStream, depth: usize) -> Result<SearchExpression, SearchError> {
    if stream.check(&TokenKind::Not) {
        let not_span = stream.current_span();
        stream.advance();
        let operand = parse_primary(stream, depth)?;
        let span = not_span.union(operand.span());
        return Ok(SearchExpression::not(operand, span));
    }
    parse_primary(stream, depth)
}

/// Parse a primary: a word, a phrase, or a parenthesized group.
fn parse_primary(stream: &mut TokenStream, depth: usize) -> Result<SearchExpression, SearchError> {
    let token = stream.consume();
    match token.kind {
        TokenKind::Word(text) => Ok(SearchExpression::Term(SearchTerm::new(
            TermKind::Word,
            text,
            token.span,
        ))),

        TokenKind::Phrase(literal) => Ok(SearchExpression::Term(SearchTerm::new(
            TermKind::Phrase,
            phrase_text(&literal),
            token.span,
        ))),

        TokenKind::Open => {
            if depth >= MAX_GROUP_DEPTH {
                return Err(SearchError::GroupTooDeep {
                    limit: MAX_GROUP_DEPTH,
                    span: token.span,
                });
            }
            // a group resets precedence; its content is a full expression
            let inner = parse_or_expr(stream, depth + 1)?;
            if !stream.match_kind(&TokenKind::Close) {
                // either end of input (open never closed) or, per the
                // grammar, unreachable otherwise
                return Err(SearchError::UnbalancedParenthesis {
                    span: stream.current_span(),
                });
            }
            Ok(inner)
        }

        other => Err(SearchError::MissingOperand {
            found: describe(&other),
            span: token.span,
        }),
    }
}

/// Describe a token for a missing-operand message.
fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::Eof => "end of input".to_string(),
        other => format!("'{}'", other),
    }
}

/// Extract the usable text of a phrase literal: strip the quotes and
/// resolve the `\\` and `\"` escape sequences. The tokenizer always
/// produces a quoted literal; a hand-built token without the quotes is
/// taken as-is rather than panicking on the slice.
fn phrase_text(literal: &str) -> Arc<str> {
    let inner = literal
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(literal);
    if !inner.contains('\\') {
        return Arc::from(inner);
    }
    let mut text = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(escaped) = chars.next() {
                text.push(escaped);
            }
        } else {
            text.push(c);
        }
    }
    Arc::from(text)
}
