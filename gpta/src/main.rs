mod agent;
mod config;
mod directive;
mod error;
mod logging;
mod options;
mod prompts;
mod style;
mod task;
mod toml_parser;
mod tools;
mod transcript;

use agent::Agent;
use error::AppError;
use options::Options;
use config::Config;
use transcript::Transcript;

fn run_agent() -> Result<i32, AppError> {
    let options = Options::load(std::env::args_os())?;
    let config: Config = options.try_into()?;
    logging::init(config.verbose);

    let task = task::read_task(&config)?;
    let transcript = Transcript::new(prompts::system_prompt(&config), task);

    Agent::new(&config, transcript)?.run()
}

fn main() {
    match run_agent() {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("ERROR: {e}");
            std::process::exit(1);
        }
    }
}
