use indexmap::IndexMap;

pub use script::{Action, Callback, Command, DEFAULT_SCRIPT_NAME, Outcome, Script};

pub mod script;

use crate::service::shell::{ProcessShell, Shell};

/// All scripts declared by a build file, plus the shared variable mapping.
pub struct BuildContext {
    pub scripts: IndexMap<String, Script>,
    pub variables: IndexMap<String, String>,
}

/// The shared build context passed to every action: a shell capability and
/// the variable mapping used for placeholder expansion.
pub struct Environment {
    pub shell: Box<dyn Shell>,
    pub variables: IndexMap<String, String>,
}

impl Environment {
    pub fn new(variables: IndexMap<String, String>) -> Self {
        Self {
            shell: Box::new(ProcessShell),
            variables,
        }
    }

    pub fn with_shell(variables: IndexMap<String, String>, shell: Box<dyn Shell>) -> Self {
        Self { shell, variables }
    }
}
