#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while normalizing or tokenizing a
/// line.
///
/// The messages printed to the user are deliberately short; the payloads carry
/// the detail and end up in debug logs.
pub enum ParseError {
    /// The line is not a well-formed expression.
    InvalidExpression {
        /// What exactly was wrong with the expression.
        details: String,
    },
    /// An operand is neither an integer literal nor an alphabetic name, or an
    /// assignment target is not an alphabetic name.
    InvalidIdentifier {
        /// The offending token.
        token: String,
    },
    /// An integer literal does not fit into an `i64`.
    LiteralTooLarge {
        /// The literal as written.
        literal: String,
    },
}

impl ParseError {
    pub(crate) fn invalid_expression(details: impl Into<String>) -> Self {
        Self::InvalidExpression { details: details.into() }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidExpression { .. } => write!(f, "Invalid expression"),
            Self::InvalidIdentifier { .. } => write!(f, "Invalid identifier"),
            Self::LiteralTooLarge { .. } => write!(f, "Literal is too large"),
        }
    }
}

impl std::error::Error for ParseError {}
