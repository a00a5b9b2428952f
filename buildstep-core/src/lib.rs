mod config;
pub mod error;
pub mod model;
mod service;

use std::{fs, path::Path};

use model::BuildContext;

pub use error::{EXIT_COMMAND_FAILED, EXIT_UNKNOWN_COMMAND, ScriptError};
pub use service::shell::{ProcessShell, Shell, ShellStatus};

pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<BuildContext> {
    let config = serde_norway::from_str::<config::Root>(&fs::read_to_string(path)?)?;

    let scripts = config
        .scripts
        .into_iter()
        .map(|(name, commands)| {
            let script = service::script_parser::script_from_config(&name, commands);
            (name, script)
        })
        .collect();

    Ok(BuildContext {
        scripts,
        variables: config.variables,
    })
}
