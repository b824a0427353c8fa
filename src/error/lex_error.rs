#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while scanning.
pub enum LexError {
    /// A character outside the printable ASCII range was found.
    NonPrintable {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// A printable character that cannot start any token was found.
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the source.
        position:  usize,
    },
    /// An integer literal was directly followed by identifier characters or
    /// `.`; the suffix was skipped and only the digits were kept.
    MalformedNumber {
        /// The complete run of characters, suffix included.
        text:     String,
        /// The digit prefix that was kept as the literal.
        digits:   String,
        /// Byte offset of the literal in the source.
        position: usize,
    },
}

impl LexError {
    /// Gets the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::NonPrintable { position, .. }
            | Self::UnexpectedCharacter { position, .. }
            | Self::MalformedNumber { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonPrintable { character, position } => write!(f,
                                                                  "Error at offset {position}: Non-printable character {character:?} in input."),
            Self::UnexpectedCharacter { character, position } => {
                write!(f, "Error at offset {position}: Unexpected character '{character}'.")
            },
            Self::MalformedNumber { text,
                                    digits,
                                    position, } => write!(f,
                                                          "Error at offset {position}: Skipping trailing characters of '{text}', using {digits}."),
        }
    }
}

impl std::error::Error for LexError {}
