use anyhow::anyhow;

use crate::error::ScriptError;
use crate::model::{
    Action, BuildContext, Command, Environment, Outcome, Script,
    script::{render_value, value_kind},
};

pub mod script_parser;
pub mod shell;
pub mod vars;

impl BuildContext {
    pub fn script_names(&self) -> Vec<String> {
        self.scripts.keys().cloned().collect()
    }

    pub fn get_script(&self, name: &str) -> Option<&Script> {
        self.scripts.get(name)
    }

    pub fn run_script(&mut self, name: &str, env: &mut Environment) -> anyhow::Result<Outcome> {
        let script = self
            .scripts
            .get_mut(name)
            .ok_or_else(|| anyhow!("Script {name} is not defined"))?;
        log::info!("{script}");
        Ok(script.run(env)?)
    }
}

impl Action for Script {
    /// Expands variables into the stored command list, then dispatches each
    /// command in order.
    ///
    /// Expansion rewrites the stored commands in place as a one-time
    /// transform. Running the script again re-expands the already-expanded
    /// strings, which is harmless because expansion of placeholder-free text
    /// is the identity.
    ///
    /// A callback command returns its value as the result of the whole run;
    /// commands after it are never dispatched. A failed shell command or an
    /// unrecognized entry aborts the run with the corresponding error.
    fn run(&mut self, env: &mut Environment) -> Result<Outcome, ScriptError> {
        for command in &mut self.commands {
            expand_command(command, env);
        }

        for command in &mut self.commands {
            match command {
                Command::ShellLine(line) => {
                    let tokens: Vec<&str> = line.split(' ').collect();
                    run_shell(env, &tokens)?;
                }
                Command::Args(args) => {
                    let tokens: Vec<&str> = args.iter().map(String::as_str).collect();
                    run_shell(env, &tokens)?;
                }
                Command::Action(action) => run_action(action.as_mut(), env),
                Command::Callback(callback) => {
                    log::debug!("Invoking callback {}", callback.name());
                    return Ok(Outcome::Value(callback.call(env)));
                }
                Command::Unrecognized(value) => {
                    return Err(ScriptError::UnknownCommand {
                        kind: value_kind(value),
                        value: render_value(value),
                    });
                }
            }
        }

        Ok(Outcome::Completed)
    }
}

fn expand_command(command: &mut Command, env: &Environment) {
    match command {
        Command::ShellLine(line) => *line = vars::expand(line, &env.variables),
        Command::Args(args) => {
            for arg in args {
                *arg = vars::expand(arg, &env.variables);
            }
        }
        // Nested actions, callbacks and unrecognized entries pass through.
        _ => {}
    }
}

fn run_shell(env: &mut Environment, tokens: &[&str]) -> Result<(), ScriptError> {
    log::debug!("Running {}", tokens.join(" "));
    let status = env
        .shell
        .execute(tokens)
        .map_err(|source| ScriptError::Spawn {
            command: tokens.join(" "),
            source,
        })?;
    if status.success() {
        Ok(())
    } else {
        Err(ScriptError::CommandFailed {
            command: tokens.join(" "),
            code: status.code(),
        })
    }
}

/// Runs a nested action against the same environment. The action's outcome
/// is not checked: a failing nested action does not abort the enclosing
/// script, it is only logged.
fn run_action(action: &mut dyn Action, env: &mut Environment) {
    log::info!("Running action {action}");
    if let Err(err) = action.run(env) {
        log::warn!("Nested action reported: {err}");
    }
}
