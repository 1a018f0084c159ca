//! Registry core - the ordered named-rule table.

use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, info};

use crate::ids::RuleId;
use crate::parser::SyntaxError;
use crate::pattern::{MatchParams, Params, Pattern};

/// A compiled pattern registered under a unique name, together with an
/// open-ended user-data bag.
///
/// The final rule name - whether supplied by the caller or generated - is
/// always present in the data bag under `"name"`, so a caller holding
/// only the data can correlate it with match results.
#[derive(Debug, Clone)]
pub struct Rule {
    pattern: Pattern,
    name: String,
    data: Map<String, Value>,
}

impl Rule {
    /// The compiled pattern.
    #[must_use]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The rule's unique name within its registry.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The user-data bag attached at registration.
    #[must_use]
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }
}

/// One entry of a registry evaluation: the matching rule's name and the
/// parameters its pattern extracted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    pub name: String,
    pub params: Params,
}

/// An ordered collection of named rules
///
/// Rules are evaluated in registration order, and every rule is tried -
/// the registry reports all matches, not just the first. Mutation happens
/// only through [`add_rule`](Registry::add_rule); there is no deletion
/// other than replace-by-name.
///
/// The registry owns a set of default [`MatchParams`] applied to every
/// pattern it compiles; flag letters in individual rule texts override
/// them flag by flag.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    params: MatchParams,
    order: Vec<String>,
    index: HashMap<String, Rule>,
}

impl Registry {
    /// Create an empty registry with default match params.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry whose `params` are applied to every rule
    /// it compiles.
    #[must_use]
    pub fn with_params(params: MatchParams) -> Self {
        Self {
            params,
            order: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Compile `pattern` and register it.
    ///
    /// The rule's name is taken from `data["name"]` when present,
    /// otherwise a fresh process-unique name is generated; either way the
    /// final name is stored back into the data bag. Re-adding an existing
    /// name replaces the rule and moves it to the end of the evaluation
    /// order. `data` that is not a JSON object is treated as empty.
    ///
    /// Returns the registry for chaining.
    ///
    /// # Errors
    ///
    /// Propagates [`SyntaxError`] from pattern compilation; the registry
    /// is left unchanged in that case.
    pub fn add_rule(&mut self, pattern: &str, data: Value) -> Result<&mut Self, SyntaxError> {
        let pattern = Pattern::with_params(pattern, self.params)?;

        let mut data = match data {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        let name = match data.get("name").and_then(Value::as_str) {
            Some(name) => name.to_string(),
            None => RuleId::new().to_string(),
        };
        data.insert("name".to_string(), Value::String(name.clone()));

        self.order.retain(|existing| existing != &name);

        info!(
            rule = %name,
            pattern = %pattern,
            position = self.order.len(),
            "rule registered"
        );

        self.index.insert(
            name.clone(),
            Rule {
                pattern,
                name: name.clone(),
                data,
            },
        );
        self.order.push(name);

        Ok(self)
    }

    /// Look up a rule by name.
    #[must_use]
    pub fn get_rule(&self, name: &str) -> Option<&Rule> {
        self.index.get(name)
    }

    /// Rule names in evaluation order.
    #[must_use]
    pub fn order(&self) -> &[String] {
        &self.order
    }

    /// Evaluate `path` against every rule, in registration order.
    ///
    /// Non-short-circuiting: each matching rule contributes one
    /// [`RuleMatch`] to the result, and a path no rule matches yields an
    /// empty vector.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Vec<RuleMatch> {
        let hits: Vec<RuleMatch> = self
            .order
            .iter()
            .filter_map(|name| {
                let rule = self.index.get(name)?;
                rule.pattern.match_path(path).map(|params| RuleMatch {
                    name: name.clone(),
                    params,
                })
            })
            .collect();

        debug!(path = %path, rules = self.order.len(), hits = hits.len(), "registry evaluated");

        hits
    }
}
