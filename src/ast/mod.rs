//! The search expression tree.
//!
//! This is the parse result handed to query evaluation: a boolean
//! combination of word and phrase terms. Every node carries its source
//! span. The variant set is closed; pattern matches over it are meant to
//! be exhaustive.

use crate::span::SourceSpan;
use std::sync::Arc;

/// What kind of term a leaf node holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TermKind {
    /// Unquoted search word
    Word,
    /// Quoted search phrase
    Phrase,
}

/// A leaf of the expression tree: a bare word or a quoted phrase.
///
/// `text` is the case-preserved content the evaluator matches against.
/// For phrases that means quotes stripped and the `\\` / `\"` escapes
/// resolved; the raw literal stays on the token that produced this term.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchTerm {
    /// Word or phrase
    pub kind: TermKind,
    /// Case-preserved term text
    pub text: Arc<str>,
    /// Source location (for phrases, includes the quotes)
    pub span: SourceSpan,
}

impl SearchTerm {
    /// Create a new term.
    pub fn new(kind: TermKind, text: impl Into<Arc<str>>, span: SourceSpan) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }
}

/// A parsed `$search` expression.
///
/// Always well-formed: every `Not`, `And`, `Or` node has fully present
/// children, and the tree is immutable once constructed.
#[derive(Clone, Debug, PartialEq)]
pub enum SearchExpression {
    /// A word or phrase term
    Term(SearchTerm),

    /// Logical NOT of a single term or group
    Not {
        operand: Box<SearchExpression>,
        span: SourceSpan,
    },

    /// Logical AND (explicit or implicit via adjacency)
    And {
        left: Box<SearchExpression>,
        right: Box<SearchExpression>,
        span: SourceSpan,
    },

    /// Logical OR
    Or {
        left: Box<SearchExpression>,
        right: Box<SearchExpression>,
        span: SourceSpan,
    },
}

impl SearchExpression {
    /// Get the source span of this expression.
    pub fn span(&self) -> SourceSpan {
        match self {
            SearchExpression::Term(t) => t.span,
            SearchExpression::Not { span, .. } => *span,
            SearchExpression::And { span, .. } => *span,
            SearchExpression::Or { span, .. } => *span,
        }
    }

    /// Create a word term expression.
    pub fn word(text: impl Into<Arc<str>>, span: SourceSpan) -> Self {
        SearchExpression::Term(SearchTerm::new(TermKind::Word, text, span))
    }

    /// Create a phrase term expression.
    pub fn phrase(text: impl Into<Arc<str>>, span: SourceSpan) -> Self {
        SearchExpression::Term(SearchTerm::new(TermKind::Phrase, text, span))
    }

    /// Create a negation.
    pub fn not(operand: SearchExpression, span: SourceSpan) -> Self {
        SearchExpression::Not {
            operand: Box::new(operand),
            span,
        }
    }

    /// Create a conjunction; the span covers both children.
    pub fn and(left: SearchExpression, right: SearchExpression) -> Self {
        let span = left.span().union(right.span());
        SearchExpression::And {
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    /// Create a disjunction; the span covers both children.
    pub fn or(left: SearchExpression, right: SearchExpression) -> Self {
        let span = left.span().union(right.span());
        SearchExpression::Or {
            left: Box::new(left),
            right: Box::new(right),
            span,
        }
    }

    /// Check if this node is a leaf term.
    pub fn is_term(&self) -> bool {
        matches!(self, SearchExpression::Term(_))
    }
}

/// Renders the tree fully parenthesized, which makes precedence visible:
/// `abc AND NOT xyz OR olingo` displays as `((abc AND (NOT xyz)) OR olingo)`.
impl std::fmt::Display for SearchExpression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchExpression::Term(t) => match t.kind {
                TermKind::Word => write!(f, "{}", t.text),
                TermKind::Phrase => {
                    write!(f, "\"")?;
                    for c in t.text.chars() {
                        if c == '"' || c == '\\' {
                            write!(f, "\\")?;
                        }
                        write!(f, "{}", c)?;
                    }
                    write!(f, "\"")
                }
            },
            SearchExpression::Not { operand, .. } => write!(f, "(NOT {})", operand),
            SearchExpression::And { left, right, .. } => write!(f, "({} AND {})", left, right),
            SearchExpression::Or { left, right, .. } => write!(f, "({} OR {})", left, right),
        }
    }
}
