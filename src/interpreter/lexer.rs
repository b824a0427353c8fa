use logos::Logos;
use tracing::trace;

use crate::error::{Diagnostics, LexError};

/// The classification of a [`Token`].
///
/// `None` is not produced by any input text: it marks the end of input or a
/// character the scanner could not classify. Callers treat it as a hard stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input or a lexical error.
    None,
    /// A run of decimal digits.
    Integer,
    /// `+`
    Add,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `(`
    LParen,
    /// `)`
    RParen,
}

/// A classified, positioned unit of lexical input.
///
/// Tokens are plain values: the scanner hands out copies and nothing else
/// holds on to them except literal nodes of the syntax tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The source text of the token. For integers this is the digit prefix
    /// only, with any malformed suffix removed.
    pub text:     String,
    /// What kind of token this is.
    pub kind:     TokenKind,
    /// Byte offset of the first character of the token.
    pub position: usize,
}

impl Token {
    /// Creates a token from its parts.
    #[must_use]
    pub fn new(text: &str, kind: TokenKind, position: usize) -> Self {
        Self { text: text.to_string(),
               kind,
               position }
    }

    /// Creates the `None` token at `position`.
    #[must_use]
    pub const fn none(position: usize) -> Self {
        Self { text: String::new(),
               kind: TokenKind::None,
               position }
    }

    /// Returns `true` if this token has the given kind.
    #[must_use]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Raw lexemes recognized by the generated lexer.
///
/// Whitespace is skipped. Anything that matches no rule comes back as an
/// error and is classified by the [`Scanner`].
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\x0B\x0C]+")]
enum Lexeme {
    /// Integer literal tokens, such as `42`. A literal directly followed by
    /// identifier characters or `.` (`12abc`, `3.5`) is matched as a whole;
    /// the payload is the length of the leading digit run.
    #[regex(r"[0-9]+[A-Za-z0-9_.]*", digit_prefix_len)]
    Integer(usize),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Lexeme {
    const fn kind(self) -> TokenKind {
        match self {
            Self::Integer(_) => TokenKind::Integer,
            Self::Plus => TokenKind::Add,
            Self::Minus => TokenKind::Minus,
            Self::Star => TokenKind::Mul,
            Self::LParen => TokenKind::LParen,
            Self::RParen => TokenKind::RParen,
        }
    }
}

/// Counts the leading decimal digits of the current integer slice.
fn digit_prefix_len(lex: &logos::Lexer<Lexeme>) -> usize {
    lex.slice().bytes().take_while(u8::is_ascii_digit).count()
}

/// The last token handed out by [`Scanner::peek`].
#[derive(Debug, Clone)]
struct Lookahead {
    start: usize,
    token: Token,
    end:   usize,
}

/// Turns a source buffer into a stream of tokens with one token of lookahead.
///
/// The scanner follows a peek-then-advance protocol: [`Scanner::peek`]
/// classifies the token at the cursor without moving it and remembers where
/// that token ends; [`Scanner::advance`] then jumps to that remembered
/// position. `advance` takes no argument, so it must always follow the `peek`
/// of the token being consumed.
///
/// # Example
/// ```
/// use tally::{
///     error::Diagnostics,
///     interpreter::lexer::{Scanner, TokenKind},
/// };
///
/// let mut diagnostics = Diagnostics::new();
/// let mut scanner = Scanner::new("12 + 3");
///
/// let token = scanner.peek(&mut diagnostics);
/// assert_eq!(token.kind, TokenKind::Integer);
/// assert_eq!(token.text, "12");
///
/// // Peeking again does not move.
/// assert_eq!(scanner.peek(&mut diagnostics), token);
///
/// scanner.advance();
/// assert_eq!(scanner.peek(&mut diagnostics).kind, TokenKind::Add);
/// ```
#[derive(Debug, Clone)]
pub struct Scanner<'src> {
    buffer:    &'src str,
    cursor:    usize,
    lookahead: Option<Lookahead>,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner positioned at the start of `buffer`.
    #[must_use]
    pub const fn new(buffer: &'src str) -> Self {
        Self { buffer,
               cursor: 0,
               lookahead: None }
    }

    /// Current byte offset into the buffer.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the token starting at the cursor without consuming it.
    ///
    /// Lexical problems are reported to `diagnostics`. Peeking repeatedly at
    /// the same cursor returns the same token and reports nothing new.
    pub fn peek(&mut self, diagnostics: &mut Diagnostics) -> Token {
        if let Some(lookahead) = &self.lookahead
           && lookahead.start == self.cursor
        {
            return lookahead.token.clone();
        }

        let (token, end) = self.scan(diagnostics);
        trace!(kind = ?token.kind, text = %token.text, start = self.cursor, end, "peek");
        self.lookahead = Some(Lookahead { start: self.cursor,
                                          token: token.clone(),
                                          end });
        token
    }

    /// Moves the cursor past the most recently peeked token.
    ///
    /// A `None` token ends where it starts, so advancing over it is a no-op.
    pub fn advance(&mut self) {
        if let Some(lookahead) = &self.lookahead {
            self.cursor = lookahead.end;
        }
    }

    /// Classifies the token at the cursor and returns it with its end offset.
    fn scan(&self, diagnostics: &mut Diagnostics) -> (Token, usize) {
        let rest = &self.buffer[self.cursor..];
        let mut lexer = Lexeme::lexer(rest);

        let Some(result) = lexer.next() else {
            return (Token::none(self.buffer.len()), self.cursor);
        };

        let span = lexer.span();
        let start = self.cursor + span.start;
        let end = self.cursor + span.end;

        match result {
            Ok(Lexeme::Integer(digits)) => {
                let slice = lexer.slice();
                if digits < slice.len() {
                    diagnostics.report(LexError::MalformedNumber { text:     slice.to_string(),
                                                                   digits:   slice[..digits].to_string(),
                                                                   position: start, });
                }
                (Token::new(&slice[..digits], TokenKind::Integer, start), end)
            },
            Ok(lexeme) => (Token::new(lexer.slice(), lexeme.kind(), start), end),
            Err(()) => {
                let character = rest[span.start..].chars().next().unwrap_or_default();
                if character.is_ascii_graphic() {
                    diagnostics.report(LexError::UnexpectedCharacter { character,
                                                                       position: start });
                } else {
                    diagnostics.report(LexError::NonPrintable { character,
                                                                position: start });
                }

                let mut token = Token::none(start);
                token.text.push(character);
                (token, self.cursor)
            },
        }
    }
}

/// Scans `source` to completion, consuming every token up to the first
/// `None`.
///
/// This is a convenience for inspecting the token stream; the parser drives a
/// [`Scanner`] directly.
///
/// # Example
/// ```
/// use tally::interpreter::lexer::{TokenKind, tokenize};
///
/// let (tokens, diagnostics) = tokenize("(4 + 3) * 8");
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds,
///            [TokenKind::LParen,
///             TokenKind::Integer,
///             TokenKind::Add,
///             TokenKind::Integer,
///             TokenKind::RParen,
///             TokenKind::Mul,
///             TokenKind::Integer]);
/// assert!(diagnostics.is_empty());
/// ```
#[must_use]
pub fn tokenize(source: &str) -> (Vec<Token>, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let mut scanner = Scanner::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = scanner.peek(&mut diagnostics);
        if token.is(TokenKind::None) {
            break;
        }
        scanner.advance();
        tokens.push(token);
    }

    (tokens, diagnostics)
}
