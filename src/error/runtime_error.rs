#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// A literal value was too large to be represented as a signed 64-bit
    /// integer and was clamped to `i64::MAX`.
    LiteralTooLarge {
        /// The digits of the literal.
        text:     String,
        /// Byte offset of the literal in the source.
        position: usize,
    },
}

impl RuntimeError {
    /// Gets the byte offset the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::LiteralTooLarge { position, .. } => *position,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LiteralTooLarge { text, position } => {
                write!(f, "Error at offset {position}: Literal {text} is too large.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
