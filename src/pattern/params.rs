//! Parameter value maps exchanged with a compiled pattern.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parameter values extracted by a match or supplied to a build.
pub type Params = HashMap<String, ParamValue>;

/// The value bound to one parameter name.
///
/// A name that occurs once in a pattern binds a `Single` scalar; a name
/// captured more than once accumulates into an ordered `Multiple`
/// sequence. On the build side a sequence is consumed positionally
/// across the occurrences of its name, while a scalar is consumed by the
/// first occurrence only - it is deliberately not broadcast to later
/// ones.
///
/// Serializes untagged, so JSON `"x"` and `["x", "y"]` map directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ParamValue {
    /// The value consumed by the `n`th occurrence (zero-based) of the
    /// owning name across a whole pattern.
    pub(crate) fn nth(&self, n: usize) -> Option<&str> {
        match self {
            ParamValue::Single(value) if n == 0 => Some(value),
            ParamValue::Single(_) => None,
            ParamValue::Multiple(values) => values.get(n).map(String::as_str),
        }
    }

    /// The scalar value, if this name was captured exactly once.
    #[must_use]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            ParamValue::Single(value) => Some(value),
            ParamValue::Multiple(_) => None,
        }
    }

    /// The value sequence, if this name was captured more than once.
    #[must_use]
    pub fn as_multiple(&self) -> Option<&[String]> {
        match self {
            ParamValue::Single(_) => None,
            ParamValue::Multiple(values) => Some(values),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Single(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::Multiple(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

/// Accumulate a captured value under `name`: the first occurrence stores
/// a scalar, each later occurrence grows the slot into an ordered
/// sequence in capture order.
pub(crate) fn push_value(params: &mut Params, name: &str, value: String) {
    if let Some(existing) = params.get_mut(name) {
        let values = match std::mem::replace(existing, ParamValue::Multiple(Vec::new())) {
            ParamValue::Single(first) => vec![first, value],
            ParamValue::Multiple(mut values) => {
                values.push(value);
                values
            }
        };
        *existing = ParamValue::Multiple(values);
    } else {
        params.insert(name.to_string(), ParamValue::Single(value));
    }
}
