//! Assistant message interpretation.

use std::fmt::Display;
use crate::error::AppError;

const SHELL_PREFIX: &str = "shell:";
const EXIT_PREFIX: &str = "exit:";

/// Parsed meaning of one assistant message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// Run the command under the configured shell.
    RunCommand {
        /// Command text, surrounding whitespace removed.
        command: String,
    },
    /// End the run with the given process exit code.
    Terminate {
        /// Exit code.
        code: i32,
    },
    /// Content matches no directive.
    Invalid {
        /// Offending content.
        content: String,
    },
}

impl Directive {

    /// Parse assistant message content.
    ///
    /// `exit:` is tried before `shell:`. A non-integer exit code is an error
    /// rather than an [`Directive::Invalid`].
    pub fn parse(content: &str) -> Result<Self, AppError> {
        if let Some(code) = content.strip_prefix(EXIT_PREFIX) {
            let code = code.trim();
            return code.parse::<i32>()
                .map(|code| Directive::Terminate { code })
                .map_err(|_| AppError::InvalidExitCode(code.to_owned()));
        }

        if let Some(command) = content.strip_prefix(SHELL_PREFIX) {
            return Ok(Directive::RunCommand { command: command.trim().to_owned() });
        }

        Ok(Directive::Invalid { content: content.to_owned() })
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Directive::RunCommand { command } => write!(f, "{SHELL_PREFIX}{command}"),
            Directive::Terminate { code } => write!(f, "{EXIT_PREFIX}{code}"),
            Directive::Invalid { content } => f.write_str(content),
        }
    }
}
