//! App initialization functions.

use anstyle::Style;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use std::ffi::OsString;
use crate::error::AppError;
use crate::toml_parser::parse_toml_config;
use dirs::home_dir;

const SETTINGS_FILE: &str = ".gpta.toml";

/// App options.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// API key.
    pub api_key: Option<String>,
    /// Task to perform.
    pub task: Option<String>,
    /// Ask for confirmation before running commands.
    pub interactive: Option<bool>,
    /// Shell used to run commands.
    pub shell: Option<String>,
    /// Model name.
    pub model: Option<String>,
    /// Log commands and exit codes.
    pub verbose: Option<bool>,
    /// Instructions file the model reads first.
    pub instructions: Option<String>,
    /// Chat completions endpoint.
    pub api_url: Option<String>,
    /// Files whose content is appended to the task.
    pub files: Vec<String>,
}

impl Options {

    /// Create new unfilled options.
    pub fn new() -> Self {
        Options::default()
    }

    fn argument_parser<T>(args: impl IntoIterator<Item = T>) -> ArgMatches where T: Into<OsString> + Clone {
        let bold_underline = Style::new().underline().bold();
        let bold = Style::new().bold();

        Command::new("gpta")
            .about("gpta is an autonomous agent that completes a task by running shell commands chosen by an LLM.")
            .version(env!("CARGO_PKG_VERSION"))
            .arg(
                Arg::new("key")
                .long("key")
                .help("OpenAI API key")
                .short('k')
                .env("OPENAI_API_KEY")
                .hide_env_values(true)
                .required(false)
            ).arg(
                Arg::new("task")
                .long("task")
                .help("Task to perform")
                .short('t')
                .env("GPTA_TASK")
                .required(false)
            ).arg(
                Arg::new("interactive")
                .long("interactive")
                .help("Interactive mode (ask for confirmation before executing commands)")
                .short('i')
                .action(ArgAction::SetTrue)
                .overrides_with("no-interactive")
            ).arg(
                Arg::new("no-interactive")
                .long("no-interactive")
                .help("Run commands without confirmation, even if the settings file enables it")
                .action(ArgAction::SetTrue)
                .overrides_with("interactive")
            ).arg(
                Arg::new("shell")
                .long("shell")
                .help("Shell to use for executing commands [default: /bin/sh]")
                .short('s')
                .env("GPTA_SHELL")
                .required(false)
            ).arg(
                Arg::new("model")
                .long("model")
                .help("Model to use [default: gpt-4o]")
                .short('m')
                .env("GPTA_MODEL")
                .required(false)
            ).arg(
                Arg::new("verbose")
                .long("verbose")
                .help("Verbose output")
                .short('v')
                .action(ArgAction::SetTrue)
                .overrides_with("no-verbose")
            ).arg(
                Arg::new("no-verbose")
                .long("no-verbose")
                .help("Disable verbose output, even if the settings file enables it")
                .action(ArgAction::SetTrue)
                .overrides_with("verbose")
            ).arg(
                Arg::new("config")
                .long("config")
                .help("Instructions file the agent reads before the task [default: ~/gpta.system]")
                .short('c')
                .env("GPTA_CONFIG")
                .required(false)
            ).arg(
                Arg::new("api-url")
                .long("api-url")
                .help("Chat completions endpoint")
                .short('u')
                .env("GPTA_API_URL")
                .required(false)
            ).arg(
                Arg::new("settings")
                .long("settings")
                .help("Settings file path [default: ~/.gpta.toml]")
                .env("GPTA_SETTINGS")
                .required(false)
            ).arg(
                Arg::new("files")
                .value_name("FILE")
                .help("Files whose content is added to the task")
                .num_args(0..)
                .action(ArgAction::Append)
            )
            .after_help(format!("{bold_underline}Example:{bold_underline:#} {bold}

    gpta --key=<your-key> --task='Find the largest file in the current directory'{bold:#}

Input piped to gpta is added to the task the same way as FILE arguments.
gpta uses the settings file .gpta.toml from user's home directory, or the one specified with --settings.
The settings can be overridden with the command line arguments or environment variables."))
            .get_matches_from(args)
    }

    fn load_settings_file(path: Option<&str>) -> Result<Option<String>, std::io::Error> {
        Ok(if let Some(p) = path {
            Some(std::fs::read_to_string(p)?)
        } else if let Some(mut p) = home_dir() {
            p.push(SETTINGS_FILE);
            if std::fs::exists(p.as_path())? {
                Some(std::fs::read_to_string(p.as_path())?)
            } else {
                None
            }
        } else {
            None
        })
    }

    fn validate_mandatory_options(options: &Options) -> Result<(), AppError> {
        if options.api_key.as_deref().map_or(true, str::is_empty) {
            return Err(AppError::MissingArgError("API key is not specified."));
        }

        Ok(())
    }

    /// Load and validate options from env, command line arguments, settings file.
    pub fn load<T>(args: impl IntoIterator<Item = T>) -> Result<Self, AppError>
        where T: Into<OsString> + Clone
    {
        let m = Self::argument_parser(args);

        let mut options = Options::new();

        let settings_path = m.get_one("settings").map(|s: &String| s.as_ref());

        if let Some(content) = Self::load_settings_file(settings_path)
            .map_err(|err| AppError::Error(format!("Error loading settings file: {}", err)))?
        {
            parse_toml_config(&content, &mut options)?;
        }

        if let Some(x) = m.get_one::<String>("key") {
            options.api_key.replace(x.clone());
        }
        if let Some(x) = m.get_one::<String>("task") {
            options.task.replace(x.clone());
        }
        if let Some(x) = m.get_one::<String>("shell") {
            options.shell.replace(x.clone());
        }
        if let Some(x) = m.get_one::<String>("model") {
            options.model.replace(x.clone());
        }
        if let Some(x) = m.get_one::<String>("config") {
            options.instructions.replace(x.clone());
        }
        if let Some(x) = m.get_one::<String>("api-url") {
            options.api_url.replace(x.clone());
        }
        if m.get_flag("interactive") {
            options.interactive.replace(true);
        }
        if m.get_flag("no-interactive") {
            options.interactive.replace(false);
        }
        if m.get_flag("verbose") {
            options.verbose.replace(true);
        }
        if m.get_flag("no-verbose") {
            options.verbose.replace(false);
        }

        options.files = m.get_many::<String>("files")
            .map(|files| files.cloned().collect())
            .unwrap_or_default();

        Self::validate_mandatory_options(&options)?;

        Ok(options)
    }
}
