use std::str::FromStr;

use crate::error::Error;

/// Printed in response to `/help`.
pub const HELP: &str = "\
Enter an expression to evaluate it, or assign a variable with `name = value`.
Operands are integers or variables made of latin letters. Supported operators
are + - * / with the usual precedence, and parentheses may be nested freely.
A run of minus signs is a single operator: `5 -- 3` is `5 + 3`.
Commands: /help shows this message, /exit leaves the calculator.";

/// Printed in response to `/exit`.
pub const FAREWELL: &str = "Bye!";

/// A `/`-prefixed command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `/help`
    Help,
    /// `/exit`
    Exit,
}

impl FromStr for Command {
    type Err = Error;

    /// Parses a trimmed command line.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::command::Command;
    ///
    /// assert_eq!("/help".parse::<Command>().unwrap(), Command::Help);
    /// assert!("/quit".parse::<Command>().is_err());
    /// ```
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        match line {
            "/help" => Ok(Self::Help),
            "/exit" => Ok(Self::Exit),
            _ => Err(Error::UnknownCommand { command: line.to_string() }),
        }
    }
}
