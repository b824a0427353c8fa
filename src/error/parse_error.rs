#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing.
pub enum ParseError {
    /// Found a token that cannot start an operand.
    UnexpectedToken {
        /// The text of the token encountered. Empty at end of input.
        token:    String,
        /// Byte offset of the token in the source.
        position: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// Byte offset of the token found instead.
        position: usize,
    },
    /// Tokens remained after a complete expression was parsed.
    TrailingInput {
        /// The first token that was left over.
        token:    String,
        /// Byte offset of that token in the source.
        position: usize,
    },
}

impl ParseError {
    /// Gets the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnexpectedToken { position, .. }
            | Self::ExpectedClosingParen { position }
            | Self::TrailingInput { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token, position } if token.is_empty() => {
                write!(f, "Error at offset {position}: Unexpected end of input.")
            },
            Self::UnexpectedToken { token, position } => write!(f,
                                                                "Error at offset {position}: Syntax error in '{}'.",
                                                                token.escape_default()),
            Self::ExpectedClosingParen { position } => write!(f,
                                                              "Error at offset {position}: Expected closing parenthesis ')' but none found."),
            Self::TrailingInput { token, position } => write!(f,
                                                              "Error at offset {position}: Extra tokens after expression, starting at '{}'.",
                                                              token.escape_default()),
        }
    }
}

impl std::error::Error for ParseError {}
