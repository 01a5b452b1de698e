use std::io::{self, BufRead, Write};

use log::{debug, info};

use crate::interpreter::{
    command::{FAREWELL, HELP},
    session::{Outcome, Session},
};

/// How a REPL run came to an end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The user entered `/exit`.
    Exit,
    /// The input ran out.
    EndOfInput,
}

/// Reads lines from `input` and writes results to `output` until `/exit` or
/// the end of input.
///
/// Values are written on their own line, assignments and blank lines write
/// nothing, and errors write their one-line message. Bytes that are not valid
/// UTF-8 are replaced, so such a line fails like any other malformed input.
/// Only I/O failures end the loop with an error.
///
/// # Errors
/// Returns any error raised while reading `input` or writing `output`.
///
/// # Example
/// ```
/// use reckon::{interpreter::session::Session, repl::{Ending, run}};
///
/// let mut session = Session::new();
/// let mut output = Vec::new();
/// let input = "a = 4\n\na * -2\nb\n/exit\n1 + 1\n";
///
/// let ending = run(&mut session, input.as_bytes(), &mut output, None).unwrap();
/// assert_eq!(ending, Ending::Exit);
/// assert_eq!(String::from_utf8(output).unwrap(), "-8\nUnknown variable\nBye!\n");
/// ```
pub fn run<R, W>(session: &mut Session,
                 mut input: R,
                 output: &mut W,
                 prompt: Option<&str>)
                 -> io::Result<Ending>
    where R: BufRead,
          W: Write
{
    let mut buffer = Vec::new();

    loop {
        if let Some(prompt) = prompt {
            write!(output, "{prompt}")?;
            output.flush()?;
        }

        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            info!("end of input");
            return Ok(Ending::EndOfInput);
        }
        let line = String::from_utf8_lossy(&buffer);
        let line = line.trim_end_matches(['\n', '\r']);

        match session.process(line) {
            Ok(Outcome::Silent) => {},
            Ok(Outcome::Value(value)) => writeln!(output, "{value}")?,
            Ok(Outcome::Help) => writeln!(output, "{HELP}")?,
            Ok(Outcome::Exit) => {
                writeln!(output, "{FAREWELL}")?;
                return Ok(Ending::Exit);
            },
            Err(e) => {
                debug!("{line:?}: {e:?}");
                writeln!(output, "{e}")?;
            },
        }
    }
}
