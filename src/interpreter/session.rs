use log::debug;

use crate::{
    error::Error,
    interpreter::{
        command::Command,
        evaluator::core::WorkingSet,
        normalizer::normalize,
        store::VariableStore,
    },
};

/// Result type of everything a session does with one input line.
pub type SessionResult<T> = Result<T, Error>;

/// What a processed line asks the caller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing to print: a blank line or an assignment.
    Silent,
    /// Print this value.
    Value(i64),
    /// Print the help text.
    Help,
    /// Say goodbye and end the session.
    Exit,
}

impl From<Command> for Outcome {
    fn from(command: Command) -> Self {
        match command {
            Command::Help => Self::Help,
            Command::Exit => Self::Exit,
        }
    }
}

/// Stores the state of one calculator session.
///
/// A session is created once and reused for every line the user enters. The
/// variable store persists across lines; the working set only lives for the
/// duration of a single evaluation and is cleared after every result and
/// every error, so a failed line never leaves anything behind.
#[derive(Debug, Default)]
pub struct Session {
    pub(crate) store:   VariableStore,
    pub(crate) working: WorkingSet,
}

impl Session {
    /// Creates a session with no variables.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The variables assigned so far.
    #[must_use]
    pub const fn variables(&self) -> &VariableStore {
        &self.store
    }

    /// Processes one raw input line: a blank line, a command or an
    /// expression.
    ///
    /// # Errors
    /// Returns an error for an unknown command or for any expression that
    /// fails to parse or evaluate. The session stays usable afterwards.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::session::{Outcome, Session};
    ///
    /// let mut session = Session::new();
    /// assert_eq!(session.process("x = 5").unwrap(), Outcome::Silent);
    /// assert_eq!(session.process("x * (2 + 1)").unwrap(), Outcome::Value(15));
    /// assert_eq!(session.process("   ").unwrap(), Outcome::Silent);
    /// assert_eq!(session.process("/exit").unwrap(), Outcome::Exit);
    /// ```
    pub fn process(&mut self, line: &str) -> SessionResult<Outcome> {
        let line = normalize(line);
        if line.is_empty() {
            return Ok(Outcome::Silent);
        }
        if line.starts_with('/') {
            return line.parse::<Command>().map(Outcome::from);
        }
        Ok(self.evaluate(&line)?.map_or(Outcome::Silent, Outcome::Value))
    }

    /// Evaluates an expression or an assignment.
    ///
    /// Returns `Some(value)` for an expression and `None` for an assignment.
    ///
    /// # Errors
    /// Returns the first parse or runtime error encountered. The variable
    /// store is only written by an assignment that fully succeeds.
    pub fn evaluate(&mut self, expression: &str) -> SessionResult<Option<i64>> {
        let result = self.resolve_groups(&normalize(expression))
                         .and_then(|flat| self.calculate(&flat, false));

        if let Err(e) = &result {
            debug!("'{expression}' failed: {e:?}");
        }
        debug_assert!(self.working.is_empty());
        result
    }
}
