use indexmap::IndexMap;
use serde::Deserialize;
use serde_norway::Value;

/// Raw shape of a build file. Command entries stay as raw values here; they
/// are classified into command kinds when the model is built.
#[derive(Deserialize, Debug)]
pub struct Root {
    #[serde(default)]
    pub variables: IndexMap<String, String>,
    pub scripts: IndexMap<String, Vec<Value>>,
}
