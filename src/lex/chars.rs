//! `$search` character class predicates.
//!
//! Based on the OData ABNF productions for the search expression:
//! - `searchWord` is restricted to letters plus the unreserved marks
//! - `searchPhrase` content is near-arbitrary between double quotes
//! - whitespace between tokens is space or tab (`BWS` after decoding)

/// Check if a character can start an unquoted search word.
///
/// ```text
/// searchWord ::= 1*ALPHA  ; plus Unicode letter classes Ll/Lm/Lo/Lt/Lu/Nl
/// ```
///
/// `char::is_alphabetic` covers exactly those classes.
pub fn is_word_start(c: char) -> bool {
    c.is_alphabetic()
}

/// Check if a character can continue an unquoted search word.
///
/// ```text
/// word-char ::= ALPHA / "-" / "." / "_" / "~"
/// ```
///
/// Digits are deliberately absent: numeric text must be quoted as a phrase.
pub fn is_word_char(c: char) -> bool {
    c.is_alphabetic() || matches!(c, '-' | '.' | '_' | '~')
}

/// Check if a character is insignificant whitespace between tokens.
///
/// Percent-decoding happens upstream, so the decoded separator set is
/// space and tab.
pub fn is_search_ws(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

/// Check if a character may legally follow a closing phrase quote.
///
/// Anything else means two terms abut without a separator.
pub fn is_phrase_boundary(c: char) -> bool {
    is_search_ws(c) || matches!(c, '(' | ')')
}
