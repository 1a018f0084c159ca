//! # Registry Module
//!
//! The registry module holds named, compiled patterns with attached user
//! data and evaluates a path against all of them.
//!
//! ## Overview
//!
//! The registry is responsible for:
//! - Compiling pattern text into [`Rule`]s as they are added
//! - Keeping rules in registration order with unique names
//! - Evaluating a path against every rule, reporting every match
//!
//! Re-adding a name replaces its rule and moves it to the end of the
//! order, so evaluation order is always most-recently-added-last.
//! Matching is non-short-circuiting: every rule is tried and every match
//! is reported, in order.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use waymark::Registry;
//!
//! let mut registry = Registry::new();
//! registry
//!     .add_rule("/pets(/<id>)", json!({ "name": "pets" }))?
//!     .add_rule("/users/<id>", json!({ "name": "users" }))?;
//!
//! let hits = registry.match_path("/pets/42");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].name, "pets");
//! # Ok::<(), waymark::SyntaxError>(())
//! ```

mod core;

#[cfg(test)]
mod tests;

pub use core::{Registry, Rule, RuleMatch};
