/// Parsing errors.
///
/// Defines all error types that can occur while normalizing, splitting and
/// classifying an input line. Parse errors include malformed operator runs,
/// unbalanced parentheses, misplaced assignments and invalid identifiers.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while an expression is being
/// reduced: unknown variables, division by zero and integer overflow.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// The coarse category of an [`Error`].
///
/// Every failure surfaced to the user falls into exactly one of these
/// categories, regardless of which phase produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed operators, parentheses or assignment shape.
    InvalidExpression,
    /// An operand that is neither an integer literal nor a variable name.
    InvalidIdentifier,
    /// A variable read before any assignment to it.
    UnknownVariable,
    /// A `/`-prefixed line that is not a known command.
    UnknownCommand,
    /// A `/` whose right operand is zero.
    DivisionByZero,
    /// A literal or a result outside the range of `i64`.
    Overflow,
}

#[derive(Debug)]
/// Represents every error a session can report for a single input line.
///
/// None of these are fatal: the session prints the message and continues
/// with the next line.
pub enum Error {
    /// The line could not be turned into a valid expression.
    Parse(ParseError),
    /// The expression was valid but could not be evaluated.
    Runtime(RuntimeError),
    /// The line looked like a command but no such command exists.
    UnknownCommand {
        /// The command as typed, including the leading `/`.
        command: String,
    },
}

impl Error {
    /// Returns the category this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(ParseError::InvalidExpression { .. }) => ErrorKind::InvalidExpression,
            Self::Parse(ParseError::InvalidIdentifier { .. }) => ErrorKind::InvalidIdentifier,
            Self::Parse(ParseError::LiteralTooLarge { .. }) | Self::Runtime(RuntimeError::Overflow) => {
                ErrorKind::Overflow
            },
            Self::Runtime(RuntimeError::UnknownVariable { .. }) => ErrorKind::UnknownVariable,
            Self::Runtime(RuntimeError::DivisionByZero) => ErrorKind::DivisionByZero,
            Self::UnknownCommand { .. } => ErrorKind::UnknownCommand,
        }
    }
}

impl From<ParseError> for Error {
    fn from(error: ParseError) -> Self {
        Self::Parse(error)
    }
}

impl From<RuntimeError> for Error {
    fn from(error: RuntimeError) -> Self {
        Self::Runtime(error)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => e.fmt(f),
            Self::Runtime(e) => e.fmt(f),
            Self::UnknownCommand { .. } => write!(f, "Unknown command"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::UnknownCommand { .. } => None,
        }
    }
}
