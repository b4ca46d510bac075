use std::fs::OpenOptions;
use std::io::{self, BufRead, BufReader, Write};
use tracing::debug;
use crate::error::AppError;
use crate::style::Styles;

const TTY_PATH: &str = "/dev/tty";

/// Human approval of a command before it runs.
pub trait Confirm {
    /// Ask whether `command` may run.
    fn confirm(&mut self, command: &str) -> Result<bool, AppError>;
}

/// Approves everything, used when interactive mode is off.
pub struct AutoConfirm;

impl Confirm for AutoConfirm {
    fn confirm(&mut self, _command: &str) -> Result<bool, AppError> {
        Ok(true)
    }
}

/// Asks on the controlling terminal, bypassing redirected stdin and stdout.
pub struct TtyConfirm {
    styles: Option<Styles>,
}

impl TtyConfirm {

    /// Create an instance.
    pub fn new() -> Self {
        let styles = if Styles::is_dumb_term() { None } else { Some(Styles::new()) };
        TtyConfirm {
            styles,
        }
    }

    fn prompt(&self, command: &str) -> String {
        match &self.styles {
            None => format!("Execute '{command}' [Y/n]: "),
            Some(styles) => format!("{} SHELL {:#}{} {:#}Execute '{}{}{:#}' [Y/n]: ",
                styles.prompt,
                styles.prompt,
                styles.prompt_arrow,
                styles.prompt_arrow,
                styles.command,
                command,
                styles.command,
            ),
        }
    }
}

impl Confirm for TtyConfirm {
    fn confirm(&mut self, command: &str) -> Result<bool, AppError> {
        let mut tty = OpenOptions::new()
            .read(true)
            .write(true)
            .open(TTY_PATH)
            .map_err(AppError::Terminal)?;

        tty.write_all(self.prompt(command).as_bytes()).map_err(AppError::Terminal)?;
        tty.flush().map_err(AppError::Terminal)?;

        let answer = read_answer(BufReader::new(&tty)).map_err(AppError::Terminal)?;

        let approved = is_confirmed(&answer);
        debug!(approved, "confirmation answered");
        Ok(approved)
    }
}

/// Read one newline-terminated line. End of input before the newline is an error.
fn read_answer(mut reader: impl BufRead) -> io::Result<String> {
    let mut answer = String::new();
    reader.read_line(&mut answer)?;
    if !answer.ends_with('\n') {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof));
    }
    Ok(answer)
}

/// `y`, `yes` and an empty answer approve, case-insensitive.
pub fn is_confirmed(answer: &str) -> bool {
    let answer = answer.trim().to_lowercase();
    answer == "y" || answer == "yes" || answer.is_empty()
}
