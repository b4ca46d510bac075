//! Initial task text from the command line, input files and piped stdin.

#[cfg(unix)]
use std::fs::Metadata;
use std::io::{self, Read};
use tracing::debug;
use crate::config::Config;
use crate::error::AppError;

const STDIN_NAME: &str = "/dev/stdin";

/// Build the task from `--task`, FILE arguments and stdin when it is piped.
pub fn read_task(config: &Config) -> Result<String, AppError> {
    let stdin = io::stdin();
    let mut piped = if stdin_is_piped(&stdin) { Some(stdin.lock()) } else { None };

    assemble_task(
        config.task.as_deref(),
        &config.files,
        piped.as_mut().map(|s| s as &mut dyn Read),
    )
}

#[cfg(unix)]
fn stdin_is_piped(stdin: &io::Stdin) -> bool {
    use std::fs::File;
    use std::os::fd::AsFd;

    match stdin.as_fd().try_clone_to_owned().map(File::from).and_then(|f| f.metadata()) {
        Ok(meta) => is_piped(&meta),
        Err(err) => {
            debug!(%err, "stdin not inspected");
            false
        }
    }
}

#[cfg(not(unix))]
fn stdin_is_piped(stdin: &io::Stdin) -> bool {
    use std::io::IsTerminal;
    !stdin.is_terminal()
}

/// Only pipes and redirected regular files carry input. Character devices
/// (a terminal, `/dev/null`) do not.
#[cfg(unix)]
fn is_piped(meta: &Metadata) -> bool {
    use std::os::unix::fs::FileTypeExt;

    let file_type = meta.file_type();
    file_type.is_fifo() || file_type.is_file()
}

/// Append every input to the task as a labeled block. Fails on a blank result.
pub fn assemble_task(
    task: Option<&str>,
    files: &[String],
    stdin: Option<&mut dyn Read>,
) -> Result<String, AppError> {
    let mut task = task.unwrap_or_default().to_owned();

    for name in files {
        let content = std::fs::read(name)
            .map_err(|source| AppError::FileRead { path: name.clone(), source })?;
        append_input(&mut task, name, &content);
    }

    if let Some(stdin) = stdin {
        let mut content = Vec::new();
        stdin.read_to_end(&mut content)
            .map_err(|source| AppError::FileRead { path: STDIN_NAME.to_owned(), source })?;
        if content.is_empty() {
            debug!("stdin is empty");
        } else {
            append_input(&mut task, STDIN_NAME, &content);
        }
    }

    if task.trim().is_empty() {
        return Err(AppError::MissingTask);
    }

    debug!(bytes = task.len(), files = files.len(), "task assembled");
    Ok(task)
}

fn append_input(task: &mut String, name: &str, content: &[u8]) {
    task.push_str(&format!("\nThe following input was provided via file '{name}':\n"));
    task.push_str(&String::from_utf8_lossy(content));
}
