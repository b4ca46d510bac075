use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tracing::{debug, warn};

/// Maximum size of the output returned to the model, marker included.
pub const MAX_OUTPUT_SIZE: usize = 4096;

const TRUNCATED_MARKER: &[u8] = b"Output truncated\n";
const NO_OUTPUT: &[u8] = b"No output\n";

/// Output of one command after the empty and size rules were applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedOutput {
    /// Bytes shown to the user and sent to the model.
    pub text: Vec<u8>,
    /// Output was cut to fit [`MAX_OUTPUT_SIZE`].
    pub truncated: bool,
    /// Command produced nothing.
    pub empty: bool,
    /// Command failed to launch or exited unsuccessfully.
    pub errored: bool,
}

impl CapturedOutput {

    /// Observation message content.
    pub fn to_observation(&self) -> String {
        String::from_utf8_lossy(&self.text).into_owned()
    }
}

/// Runs commands under the configured shell.
pub struct Shell {
    path: PathBuf,
}

impl Shell {

    /// Create an instance.
    pub fn new(path: PathBuf) -> Self {
        Shell {
            path,
        }
    }

    /// Shell executable.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run `<shell> -c <command>` and capture stdout and stderr as one stream.
    ///
    /// Never fails: launch errors and unsuccessful exit statuses end up in the
    /// captured text.
    pub fn capture(&self, command: &str) -> CapturedOutput {
        let (raw, error) = self.exec_pipe(command);
        let output = cap_output(raw, error);

        debug!(
            bytes = output.text.len(),
            truncated = output.truncated,
            empty = output.empty,
            errored = output.errored,
            "command finished"
        );

        output
    }

    fn exec_pipe(&self, command: &str) -> (Vec<u8>, Option<String>) {
        let (mut reader, writer) = match io::pipe() {
            Ok(pipe) => pipe,
            Err(err) => return (vec![], Some(err.to_string())),
        };

        let writer_err = match writer.try_clone() {
            Ok(w) => w,
            Err(err) => return (vec![], Some(err.to_string())),
        };

        // The Command is a temporary, so the parent's write ends are closed
        // once spawned and the reader sees EOF when the child exits.
        let child = Command::new(&self.path)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(writer_err)
            .spawn();

        let mut child = match child {
            Ok(child) => child,
            Err(err) => {
                warn!(shell = %self.path.display(), err = %err, "failed to spawn shell");
                return (vec![], Some(err.to_string()));
            }
        };

        let mut buf = Vec::new();
        let read_error = reader.read_to_end(&mut buf).err();

        let error = match child.wait() {
            Ok(status) if status.success() => read_error.map(|err| err.to_string()),
            Ok(status) => Some(status.to_string()),
            Err(err) => Some(err.to_string()),
        };

        (buf, error)
    }
}

/// Apply the error, empty and size rules to raw command output.
pub fn cap_output(mut raw: Vec<u8>, error: Option<String>) -> CapturedOutput {
    let errored = error.is_some();
    if let Some(err) = error {
        raw.extend_from_slice(format!("Error: {err}\n").as_bytes());
    }

    let empty = raw.is_empty();
    if empty {
        raw.extend_from_slice(NO_OUTPUT);
    }

    let truncated = raw.len() > MAX_OUTPUT_SIZE;
    if truncated {
        raw.truncate(MAX_OUTPUT_SIZE - TRUNCATED_MARKER.len());
        raw.extend_from_slice(TRUNCATED_MARKER);
    }

    CapturedOutput {
        text: raw,
        truncated,
        empty,
        errored,
    }
}
