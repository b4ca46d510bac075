use std::path::PathBuf;
use gpta_lib::Config as ModelParams;
use gpta_lib::DEFAULT_API_URL;

use crate::{error::AppError, options::Options};

/// Model used when none is configured.
pub const DEFAULT_MODEL: &str = "gpt-4o";
/// Shell used when none is configured.
pub const DEFAULT_SHELL: &str = "/bin/sh";
/// Instructions file the model is told to read first.
pub const DEFAULT_INSTRUCTIONS: &str = "~/gpta.system";

/// App config
#[derive(Clone, Debug)]
pub struct Config {
    /// Model name, key, endpoint.
    pub model_params: ModelParams,
    /// Shell used to run commands.
    pub shell: PathBuf,
    /// Ask before every command.
    pub interactive: bool,
    /// Log commands and exit codes.
    pub verbose: bool,
    /// Path of the instructions file, passed to the model verbatim.
    pub instructions: String,
    /// Task text from the command line.
    pub task: Option<String>,
    /// Files appended to the task.
    pub files: Vec<String>,
}

impl TryFrom<Options> for Config {
    type Error = AppError;

    fn try_from(options: Options) -> Result<Self, AppError> {
        let api_key = options.api_key
            .ok_or(AppError::MissingArgError("API key is not specified."))?;
        let model = options.model.unwrap_or_else(|| DEFAULT_MODEL.to_owned());
        let api_url = options.api_url.unwrap_or_else(|| DEFAULT_API_URL.to_owned());

        let model_params = ModelParams::new(model, api_key).with_api_url(api_url);

        Ok(Config {
            model_params,
            shell: options.shell.unwrap_or_else(|| DEFAULT_SHELL.to_owned()).into(),
            interactive: options.interactive.unwrap_or(false),
            verbose: options.verbose.unwrap_or(false),
            instructions: options.instructions.unwrap_or_else(|| DEFAULT_INSTRUCTIONS.to_owned()),
            task: options.task,
            files: options.files,
        })
    }
}
