use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::{Captures, Regex};

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*(.*?)\s*\}\}").expect("placeholder pattern is valid"));

/// Replace `{{ name }}` placeholders with values from `variables`.
///
/// Placeholders naming an undefined variable are left verbatim, and input
/// without placeholders comes back unchanged, so expansion is deterministic
/// and the identity on already-expanded text.
pub fn expand(text: &str, variables: &IndexMap<String, String>) -> String {
    PLACEHOLDER
        .replace_all(text, |captures: &Captures| {
            match variables.get(&captures[1]) {
                Some(value) => value.clone(),
                None => captures[0].to_owned(),
            }
        })
        .into_owned()
}
