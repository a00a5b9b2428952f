use std::io;

use thiserror::Error;

/// Process exit code when a dispatched shell command reports failure.
pub const EXIT_COMMAND_FAILED: u8 = 12;
/// Process exit code when a command entry cannot be classified.
pub const EXIT_UNKNOWN_COMMAND: u8 = 4;

/// Failure of a script run. The core never terminates the process itself;
/// the driver maps these onto the fixed exit codes via [`ScriptError::exit_code`].
#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("Command failed, exiting")]
    CommandFailed { command: String, code: i32 },
    #[error("Command failed, exiting")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },
    #[error("Unknown script sub command: {kind}: {value}")]
    UnknownCommand { kind: &'static str, value: String },
}

impl ScriptError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::CommandFailed { .. } | Self::Spawn { .. } => EXIT_COMMAND_FAILED,
            Self::UnknownCommand { .. } => EXIT_UNKNOWN_COMMAND,
        }
    }
}
