use serde_norway::Value;

use crate::model::{Command, Script};

impl From<Value> for Command {
    /// Classify a raw config entry. Strings become shell lines, lists of
    /// strings become pre-tokenized arguments, anything else is kept as an
    /// unrecognized entry and reported at execution time.
    fn from(value: Value) -> Self {
        match value {
            Value::String(line) => Command::ShellLine(line),
            Value::Sequence(items) if items.iter().all(Value::is_string) => Command::Args(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(arg) => Some(arg),
                        _ => None,
                    })
                    .collect(),
            ),
            other => Command::Unrecognized(other),
        }
    }
}

pub fn script_from_config(name: &str, commands: Vec<Value>) -> Script {
    Script::with_name(commands.into_iter().map(Command::from).collect(), name)
}
