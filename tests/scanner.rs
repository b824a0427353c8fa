use pretty_assertions::assert_eq;
use tally::{
    error::{Diagnostic, Diagnostics, LexError},
    interpreter::lexer::{Scanner, Token, TokenKind, tokenize},
};

#[test]
fn peek_does_not_advance() {
    let mut diagnostics = Diagnostics::new();
    let mut scanner = Scanner::new("  7 * 6");

    let first = scanner.peek(&mut diagnostics);
    let second = scanner.peek(&mut diagnostics);

    assert_eq!(first, Token::new("7", TokenKind::Integer, 2));
    assert_eq!(first, second);
    assert_eq!(scanner.cursor(), 0);

    scanner.advance();
    assert_eq!(scanner.cursor(), 3);
    assert_eq!(scanner.peek(&mut diagnostics), Token::new("*", TokenKind::Mul, 4));
}

#[test]
fn end_of_input_is_none_and_sticky() {
    let mut diagnostics = Diagnostics::new();
    let mut scanner = Scanner::new("1 ");

    scanner.peek(&mut diagnostics);
    scanner.advance();

    let end = scanner.peek(&mut diagnostics);
    assert_eq!(end.kind, TokenKind::None);
    let cursor = scanner.cursor();
    scanner.advance();
    assert_eq!(scanner.cursor(), cursor);
    assert!(diagnostics.is_empty());
}

#[test]
fn every_operator_has_a_kind() {
    let (tokens, diagnostics) = tokenize("+-*()");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();

    assert_eq!(kinds,
               [TokenKind::Add,
                TokenKind::Minus,
                TokenKind::Mul,
                TokenKind::LParen,
                TokenKind::RParen]);
    assert!(diagnostics.is_empty());
}

#[test]
fn malformed_suffix_is_skipped_once() {
    let mut diagnostics = Diagnostics::new();
    let mut scanner = Scanner::new("12ab_3.x+1");

    let token = scanner.peek(&mut diagnostics);
    scanner.peek(&mut diagnostics);
    scanner.advance();

    assert_eq!(token, Token::new("12", TokenKind::Integer, 0));
    assert_eq!(scanner.peek(&mut diagnostics).kind, TokenKind::Add);
    assert_eq!(diagnostics.into_iter().collect::<Vec<_>>(),
               vec![Diagnostic::Lex(LexError::MalformedNumber { text:     "12ab_3.x".to_string(),
                                                                digits:   "12".to_string(),
                                                                position: 0, })]);
}

#[test]
fn unknown_characters_stop_the_stream() {
    let (tokens, diagnostics) = tokenize("1 / 2");

    assert_eq!(tokens, vec![Token::new("1", TokenKind::Integer, 0)]);
    assert_eq!(diagnostics.into_iter().collect::<Vec<_>>(),
               vec![Diagnostic::Lex(LexError::UnexpectedCharacter { character: '/',
                                                                    position:  2, })]);
}

#[test]
fn non_printable_characters_are_reported() {
    let mut diagnostics = Diagnostics::new();
    let mut scanner = Scanner::new("\u{1b}1");

    let token = scanner.peek(&mut diagnostics);

    assert_eq!(token.kind, TokenKind::None);
    assert_eq!(scanner.cursor(), 0);
    assert_eq!(diagnostics.into_iter().collect::<Vec<_>>(),
               vec![Diagnostic::Lex(LexError::NonPrintable { character: '\u{1b}',
                                                             position:  0, })]);
}

#[test]
fn non_ascii_is_not_printable() {
    let (tokens, diagnostics) = tokenize("3 × 4");

    assert_eq!(tokens.len(), 1);
    assert!(matches!(diagnostics.iter().next(),
                     Some(Diagnostic::Lex(LexError::NonPrintable { character: '×', .. }))));
}
