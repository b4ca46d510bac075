//! Local side effects requested by the model.
mod shell;
mod confirm;

pub use shell::{Shell, MAX_OUTPUT_SIZE};
pub use confirm::{AutoConfirm, Confirm, TtyConfirm};
