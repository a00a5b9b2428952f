use std::io;
use std::process::{Command, ExitStatus};

/// Exit status of a shell command. `std::process::ExitStatus` cannot be
/// constructed portably, so this carries the raw code instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellStatus {
    code: i32,
}

impl ShellStatus {
    pub fn from_code(code: i32) -> Self {
        Self { code }
    }

    pub fn success(&self) -> bool {
        self.code == 0
    }

    pub fn code(&self) -> i32 {
        self.code
    }
}

impl From<ExitStatus> for ShellStatus {
    fn from(status: ExitStatus) -> Self {
        // A signal-terminated process has no code; treat it as a failure.
        Self {
            code: status.code().unwrap_or(-1),
        }
    }
}

/// Synchronous shell execution capability. Token 0 is the program, the rest
/// are its arguments.
pub trait Shell {
    fn execute(&mut self, tokens: &[&str]) -> io::Result<ShellStatus>;
}

/// Runs commands as child processes, inheriting stdio and blocking until exit.
pub struct ProcessShell;

impl Shell for ProcessShell {
    fn execute(&mut self, tokens: &[&str]) -> io::Result<ShellStatus> {
        let (program, args) = tokens
            .split_first()
            .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "empty command"))?;
        let status = Command::new(program).args(args).status()?;
        Ok(status.into())
    }
}
