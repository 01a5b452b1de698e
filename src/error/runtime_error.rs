#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while an expression is reduced.
pub enum RuntimeError {
    /// Tried to read a variable that was never assigned.
    UnknownVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// An arithmetic operation left the range of `i64`.
    Overflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { .. } => write!(f, "Unknown variable"),
            Self::DivisionByZero => write!(f, "Division by zero"),
            Self::Overflow => write!(f, "Integer overflow"),
        }
    }
}

impl std::error::Error for RuntimeError {}
