use tracing::warn;

use crate::error::{LexError, ParseError, RuntimeError};

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single advisory message produced while scanning, parsing or evaluating.
///
/// Diagnostics never stop the pipeline; they are collected next to the
/// numeric result so callers can decide whether to trust it.
pub enum Diagnostic {
    /// Raised by the scanner.
    Lex(LexError),
    /// Raised by the parser.
    Parse(ParseError),
    /// Raised by the evaluator.
    Runtime(RuntimeError),
}

impl Diagnostic {
    /// Gets the byte offset the diagnostic refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::Lex(e) => e.position(),
            Self::Parse(e) => e.position(),
            Self::Runtime(e) => e.position(),
        }
    }
}

impl From<LexError> for Diagnostic {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<ParseError> for Diagnostic {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Diagnostic {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Diagnostic {}

/// An ordered collection of diagnostics for one parse and evaluation session.
///
/// Every reported diagnostic is also emitted as a `tracing` warning, so a
/// subscriber sees them in the order they were raised.
///
/// # Example
/// ```
/// use tally::error::{Diagnostics, ParseError};
///
/// let mut diagnostics = Diagnostics::new();
/// assert!(diagnostics.is_empty());
///
/// diagnostics.report(ParseError::ExpectedClosingParen { position: 6 });
/// assert_eq!(diagnostics.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Creates an empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Records a diagnostic and emits it as a warning event.
    pub fn report(&mut self, diagnostic: impl Into<Diagnostic>) {
        let diagnostic = diagnostic.into();
        warn!(position = diagnostic.position(), "{diagnostic}");
        self.entries.push(diagnostic);
    }

    /// Returns `true` when nothing was reported.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded diagnostics.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over the diagnostics in the order they were reported.
    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, diagnostic) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{diagnostic}")?;
        }
        Ok(())
    }
}

impl std::error::Error for Diagnostics {}
