use thiserror::Error;

/// App errors
#[derive(Error, Debug)]
pub enum AppError {

    /// Toml parsing error
    #[error("Failed to parse settings file: {0}")]
    TomlError(#[from] toml::de::Error),

    /// Settings parsing error
    #[error("Failed to parse settings file: {0}")]
    ConfigParseError(&'static str),

    /// Missing arguments
    #[error("Missing mandatory arguments: {0}\nTry `gpta --help` for more information.")]
    MissingArgError(&'static str),

    /// No task text after assembling flag, files and stdin.
    #[error("Please provide a task for the agent to perform.")]
    MissingTask,

    /// Input file could not be read.
    #[error("Error reading file '{path}': {source}")]
    FileRead {
        /// File name as given.
        path: String,
        /// Cause.
        source: std::io::Error,
    },

    /// Model client error
    #[error("Error sending API request: {0}")]
    Model(#[from] gpta_lib::Error),

    /// Assistant message matches neither directive.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// `exit:` directive with a non-integer code.
    #[error("Invalid exit code: {0}")]
    InvalidExitCode(String),

    /// Command declined at the confirmation prompt.
    #[error("Aborted by user.")]
    Aborted,

    /// Controlling terminal could not be used for confirmation.
    #[error("Unable to use /dev/tty for interactive confirmation: {0}")]
    Terminal(std::io::Error),

    /// Writing command output failed.
    #[error("Error writing output: {0}")]
    Output(std::io::Error),

    /// General error.
    #[error("{0}")]
    Error(String),
}
