use std::fmt;

use itertools::Itertools;
use serde_norway::Value;

use crate::error::ScriptError;
use crate::model::Environment;

/// Name used when the caller does not supply one.
pub const DEFAULT_SCRIPT_NAME: &str = "Script";

/// A build action that can be run against the shared environment. Actions are
/// polymorphic in the wider pipeline; [`Script`] is one of them, and scripts
/// can embed other actions as commands.
pub trait Action: fmt::Display {
    fn run(&mut self, env: &mut Environment) -> Result<Outcome, ScriptError>;
}

/// Result of running an action.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Every command ran to completion.
    Completed,
    /// A callback command returned this value, superseding the remaining
    /// commands of its script.
    Value(Value),
}

/// A named invocable embedded in a script as a command.
pub struct Callback {
    name: String,
    func: Box<dyn FnMut(&mut Environment) -> Value>,
}

impl Callback {
    pub fn new(
        name: impl Into<String>,
        func: impl FnMut(&mut Environment) -> Value + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn call(&mut self, env: &mut Environment) -> Value {
        (self.func)(env)
    }
}

/// A single entry of a script's command list.
pub enum Command {
    /// A shell line, split on single spaces into tokens at dispatch time.
    ShellLine(String),
    /// Pre-tokenized arguments passed to the shell unmodified. This is the
    /// way to pass an argument containing spaces.
    Args(Vec<String>),
    /// A nested action run against the same environment.
    Action(Box<dyn Action>),
    /// An invocable whose return value becomes the result of the whole script.
    Callback(Callback),
    /// A config entry that is neither a string nor a list of strings. Kept
    /// around so that execution can report it instead of silently dropping it.
    Unrecognized(Value),
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::ShellLine(line) => f.debug_tuple("ShellLine").field(line).finish(),
            Command::Args(args) => f.debug_tuple("Args").field(args).finish(),
            Command::Action(action) => f.debug_tuple("Action").field(&action.to_string()).finish(),
            Command::Callback(callback) => {
                f.debug_tuple("Callback").field(&callback.name).finish()
            }
            Command::Unrecognized(value) => f.debug_tuple("Unrecognized").field(value).finish(),
        }
    }
}

/// A build step that runs a series of shell commands, nested actions, or
/// callbacks, in order.
pub struct Script {
    pub(crate) name: String,
    pub(crate) commands: Vec<Command>,
}

impl Script {
    pub fn new(commands: Vec<Command>) -> Self {
        Self {
            name: DEFAULT_SCRIPT_NAME.to_owned(),
            commands,
        }
    }

    pub fn with_name(commands: Vec<Command>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.commands.is_empty() {
            return write!(f, "Script({}): Empty", self.name);
        }
        if self.name != DEFAULT_SCRIPT_NAME {
            return write!(f, "Script({})", self.name);
        }
        let commands = self.commands.iter().map(render_command).join("\n\t");
        write!(f, "Script({}): (\n\t{}\n)", self.name, commands)
    }
}

fn render_command(command: &Command) -> String {
    match command {
        Command::ShellLine(line) => line.clone(),
        Command::Args(args) => args.join(" "),
        Command::Action(action) => action.to_string(),
        Command::Callback(callback) => callback.name().to_owned(),
        Command::Unrecognized(value) => format!("UNKNOWN: {}", render_value(value)),
    }
}

pub(crate) fn render_value(value: &Value) -> String {
    serde_norway::to_string(value)
        .map(|rendered| rendered.trim_end().to_owned())
        .unwrap_or_else(|_| format!("{value:?}"))
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display_empty_script() {
        let script = Script::new(vec![]);
        assert_eq!(script.to_string(), "Script(Script): Empty");
    }

    #[test]
    fn test_display_named_script_omits_commands() {
        let script = Script::with_name(
            vec![
                Command::ShellLine("echo hi".to_owned()),
                Command::ShellLine("false".to_owned()),
            ],
            "build",
        );
        assert_eq!(script.to_string(), "Script(build)");
    }

    #[test]
    fn test_display_named_empty_script_is_still_empty() {
        let script = Script::with_name(vec![], "build");
        assert_eq!(script.to_string(), "Script(build): Empty");
    }

    #[test]
    fn test_display_default_name_lists_commands() {
        let script = Script::new(vec![
            Command::ShellLine("echo hi".to_owned()),
            Command::Args(vec!["echo".to_owned(), "has space".to_owned()]),
            Command::Callback(Callback::new("finish", |_| Value::Null)),
            Command::Unrecognized(Value::from(42)),
        ]);
        assert_eq!(
            script.to_string(),
            "Script(Script): (\n\techo hi\n\techo has space\n\tfinish\n\tUNKNOWN: 42\n)"
        );
    }

    #[test]
    fn test_display_nested_action_uses_its_own_rendering() {
        let inner = Script::with_name(vec![Command::ShellLine("true".to_owned())], "inner");
        let script = Script::new(vec![Command::Action(Box::new(inner))]);
        assert_eq!(script.to_string(), "Script(Script): (\n\tScript(inner)\n)");
    }

    #[test]
    fn test_value_kinds() {
        assert_eq!(value_kind(&Value::Null), "null");
        assert_eq!(value_kind(&Value::from(42)), "number");
        assert_eq!(value_kind(&Value::Sequence(vec![])), "list");
    }
}
