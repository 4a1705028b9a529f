//! End-to-end tests: raw text through tokenizer and parser.

use crate::ast::{SearchExpression, TermKind};
use crate::diag::{render_error, SearchErrorKind};
use crate::lex::{Token, TokenKind};
use crate::parse::{parse, parse_search, MAX_GROUP_DEPTH};

/// Parse and render the tree fully parenthesized.
fn shape(input: &str) -> String {
    match parse_search(input) {
        Ok(expr) => expr.to_string(),
        Err(err) => panic!("parse failed:\n{}", render_error(&err, input)),
    }
}

fn err_kind(input: &str) -> SearchErrorKind {
    parse_search(input).expect_err("expected parse error").kind()
}

#[test]
fn single_terms() {
    assert_eq!(shape("abc"), "abc");
    assert_eq!(shape("\"a phrase\""), "\"a phrase\"");
    assert_eq!(shape("(abc)"), "abc");
    assert_eq!(shape("((abc))"), "abc");
}

#[test]
fn term_kinds_and_text() {
    let expr = parse_search("\"blue\\\"green\"").unwrap();
    match expr {
        SearchExpression::Term(term) => {
            assert_eq!(term.kind, TermKind::Phrase);
            // quotes stripped, escape resolved, case preserved
            assert_eq!(term.text.as_ref(), "blue\"green");
        }
        other => panic!("expected a term, got {other:?}"),
    }

    let expr = parse_search("OLingo").unwrap();
    match expr {
        SearchExpression::Term(term) => {
            assert_eq!(term.kind, TermKind::Word);
            assert_eq!(term.text.as_ref(), "OLingo");
        }
        other => panic!("expected a term, got {other:?}"),
    }
}

#[test]
fn negation_binds_to_a_single_primary() {
    assert_eq!(shape("NOT abc"), "(NOT abc)");
    assert_eq!(shape("NOT \"abc\""), "(NOT \"abc\")");
    // NOT a AND b is (NOT a) AND b, never NOT (a AND b)
    assert_eq!(shape("NOT a AND b"), "((NOT a) AND b)");
    assert_eq!(shape("NOT abc AND nothing"), "((NOT abc) AND nothing)");
}

#[test]
fn precedence_or_lowest() {
    assert_eq!(
        shape("abc AND NOT xyz OR olingo"),
        "((abc AND (NOT xyz)) OR olingo)"
    );
    assert_eq!(shape("abc OR def AND ghi"), "(abc OR (def AND ghi))");
}

#[test]
fn left_associativity() {
    assert_eq!(shape("a OR b OR c"), "((a OR b) OR c)");
    assert_eq!(shape("a AND b AND c"), "((a AND b) AND c)");
    assert_eq!(
        shape("foo AND bar OR foo AND baz OR that AND bar"),
        "(((foo AND bar) OR (foo AND baz)) OR (that AND bar))"
    );
}

#[test]
fn implicit_conjunction_matches_explicit_and() {
    assert_eq!(shape("a b OR c"), "((a AND b) OR c)");
    assert_eq!(shape("a b OR c"), shape("a AND b OR c"));

    assert_eq!(shape("a b c"), shape("a AND b AND c"));
    assert_eq!(shape("abc     def  OR ghi"), "((abc AND def) OR ghi)");
    // adjacency with NOT and groups
    assert_eq!(shape("abc def NOT ghi"), "((abc AND def) AND (NOT ghi))");
    assert_eq!(shape("(a OR x) bc c"), "(((a OR x) AND bc) AND c)");
    assert_eq!(shape("(abc AND def) ghi"), shape("(abc AND def) AND ghi"));
}

#[test]
fn grouping_resets_precedence() {
    assert_eq!(
        shape("(foo OR that) AND (bar OR baz)"),
        "((foo OR that) AND (bar OR baz))"
    );
    assert_eq!(shape("abc AND (def OR ghi)"), "(abc AND (def OR ghi))");
}

#[test]
fn bare_operators_are_structural_errors() {
    // valid token streams, invalid parses
    assert_eq!(err_kind("AND"), SearchErrorKind::MissingOperand);
    assert_eq!(err_kind("OR"), SearchErrorKind::MissingOperand);
    assert_eq!(err_kind("NOT"), SearchErrorKind::MissingOperand);
    assert_eq!(err_kind("NOT AND"), SearchErrorKind::MissingOperand);
    assert_eq!(err_kind("NOT OR"), SearchErrorKind::MissingOperand);
    assert_eq!(err_kind("NOT NOT"), SearchErrorKind::MissingOperand);
    assert_eq!(err_kind("OR AND"), SearchErrorKind::MissingOperand);
    assert_eq!(err_kind("abc AND OR something"), SearchErrorKind::MissingOperand);
    assert_eq!(err_kind("abc AND"), SearchErrorKind::MissingOperand);
    assert_eq!(err_kind("abc OR"), SearchErrorKind::MissingOperand);
}

#[test]
fn missing_operand_from_raw_token_stream() {
    let tokens = vec![Token::from_range(TokenKind::And, 0, 3)];
    let err = parse(tokens).unwrap_err();
    assert_eq!(err.kind(), SearchErrorKind::MissingOperand);
    assert_eq!(err.span().start, 0);
}

#[test]
fn operator_before_close_is_a_parse_error() {
    // tokenizes cleanly; the parser reports the missing operand at the ')'
    let err = parse_search("(  abc AND) OR something").unwrap_err();
    assert_eq!(err.kind(), SearchErrorKind::MissingOperand);
    assert_eq!(err.span().start, 10);
}

#[test]
fn unbalanced_parentheses() {
    assert_eq!(
        err_kind("abc AND \"something\" )"),
        SearchErrorKind::UnbalancedParenthesis
    );
    assert_eq!(err_kind("abc )"), SearchErrorKind::UnbalancedParenthesis);
    assert_eq!(err_kind("(abc"), SearchErrorKind::UnbalancedParenthesis);
    assert_eq!(err_kind("((abc)"), SearchErrorKind::UnbalancedParenthesis);
    assert_eq!(err_kind("(abc OR"), SearchErrorKind::MissingOperand);
}

#[test]
fn empty_input_and_empty_group() {
    assert_eq!(err_kind(""), SearchErrorKind::MissingOperand);
    assert_eq!(err_kind("   "), SearchErrorKind::MissingOperand);
    assert_eq!(err_kind("()"), SearchErrorKind::MissingOperand);
    assert_eq!(err_kind("(  )"), SearchErrorKind::MissingOperand);
}

#[test]
fn lexical_errors_surface_through_parse_search() {
    // the tokenizer's domain, propagated unchanged by parse_search
    assert_eq!(err_kind("notAw0rd"), SearchErrorKind::ForbiddenCharacter);
    assert_eq!(err_kind("\"\""), SearchErrorKind::EmptyPhrase);
    assert_eq!(err_kind("\"phrase\"word"), SearchErrorKind::AdjacentTokenNoSeparator);
    assert_eq!(err_kind("\"abc"), SearchErrorKind::UnterminatedPhrase);
    assert_eq!(err_kind("NOT (sdf)"), SearchErrorKind::ForbiddenCharacter);
}

#[test]
fn nesting_depth_is_bounded() {
    let deep_ok = format!(
        "{}abc{}",
        "(".repeat(MAX_GROUP_DEPTH),
        ")".repeat(MAX_GROUP_DEPTH)
    );
    assert_eq!(shape(&deep_ok), "abc");

    let too_deep = format!(
        "{}abc{}",
        "(".repeat(MAX_GROUP_DEPTH + 1),
        ")".repeat(MAX_GROUP_DEPTH + 1)
    );
    let err = parse_search(&too_deep).unwrap_err();
    assert_eq!(err.kind(), SearchErrorKind::GroupTooDeep);
}

#[test]
fn not_before_group_accepted_at_parser_level() {
    // the NOT-before-open restriction is lexical; a hand-built stream
    // exercises the grammar, where NOT takes any primary
    let tokens = vec![
        Token::from_range(TokenKind::Not, 0, 3),
        Token::from_range(TokenKind::Open, 4, 5),
        Token::from_range(TokenKind::Word("sdf".into()), 5, 8),
        Token::from_range(TokenKind::Close, 8, 9),
    ];
    let expr = parse(tokens).unwrap();
    assert_eq!(expr.to_string(), "(NOT sdf)");
}

#[test]
fn handbuilt_phrase_without_quotes_is_taken_verbatim() {
    // tokenize always quotes phrase literals; a hand-built stream may not,
    // and parse must return a term rather than slice out of range
    let tokens = vec![Token::from_range(TokenKind::Phrase("x".into()), 0, 1)];
    let expr = parse(tokens).unwrap();
    match expr {
        SearchExpression::Term(term) => {
            assert_eq!(term.kind, TermKind::Phrase);
            assert_eq!(term.text.as_ref(), "x");
        }
        other => panic!("expected a term, got {other:?}"),
    }

    let tokens = vec![Token::from_range(TokenKind::Phrase("".into()), 0, 0)];
    let expr = parse(tokens).unwrap();
    assert_eq!(expr.to_string(), "\"\"");
}

#[test]
fn leading_close_is_a_missing_operand() {
    // a ')' in operand position reads as "expected a term, found ')'";
    // only a ')' after a complete expression is classified as unbalanced
    let err = parse_search(")").unwrap_err();
    assert_eq!(err.kind(), SearchErrorKind::MissingOperand);
    assert_eq!(err.span().start, 0);

    assert_eq!(err_kind(") abc"), SearchErrorKind::MissingOperand);
}

#[test]
fn parse_is_deterministic() {
    let a = parse_search("abc AND (def OR NOT \"g h\")").unwrap();
    let b = parse_search("abc AND (def OR NOT \"g h\")").unwrap();
    assert_eq!(a, b);
}

#[test]
fn spans_cover_source_ranges() {
    let source = "abc AND (def OR ghi)";
    let expr = parse_search(source).unwrap();

    // the root conjunction spans from the first word into the group
    assert_eq!(expr.span().start, 0);
    assert_eq!(expr.span().slice(source), "abc AND (def OR ghi");

    if let SearchExpression::And { left, right, .. } = expr {
        assert_eq!(left.span().slice(source), "abc");
        assert_eq!(right.span().slice(source), "def OR ghi");
    } else {
        panic!("expected a conjunction at the root");
    }
}

#[test]
fn error_positions_point_at_the_offense() {
    let err = parse_search("abc AND \"something\" )").unwrap_err();
    assert_eq!(err.span().start, 20);

    let err = parse_search("abc AND").unwrap_err();
    // missing operand reported at end of input
    assert_eq!(err.span().start, 7);
}
