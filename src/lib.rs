//! # Waymark
//!
//! **Waymark** is a compact pattern language for URL-like paths with
//! optional segments, named parameters, enumerated parameter values, and
//! match-behavior flags. Each pattern compiles - once, eagerly, at
//! construction - into a bidirectional engine: match a concrete path and
//! extract its parameters, or build a concrete path from supplied
//! parameter values.
//!
//! ## Overview
//!
//! A pattern like
//!
//! ```text
//! /products(/<id>)
//! ```
//!
//! matches `/products` and `/products/42` (binding `id` to `"42"`), and
//! builds `/products` or `/products/42` depending on whether an `id`
//! value is supplied. Optional groups nest arbitrarily, and a group
//! whose parameters go unsatisfied at build time disappears from the
//! output entirely.
//!
//! ## Architecture
//!
//! The library is organized into three layers, leaves first:
//!
//! - **[`parser`]** - pattern text to part tree: a single-pass,
//!   character-level state machine with nested-group bookkeeping, plus
//!   the generic tree-walk reducer everything else compiles through
//! - **[`pattern`]** - part tree to runtime artifacts: the regex-based
//!   matching engine, the path generator, and the canonical serializer
//! - **[`registry`]** - named, ordered rules with attached user data,
//!   evaluated all-matches against a path
//!
//! ## Grammar
//!
//! ```text
//! pattern   := segment*
//! segment   := literal-run | '/' | group | param
//! group     := '(' pattern ')'
//! param     := '<' name ('=' value (',' value)*)? '>'
//! ```
//!
//! The reserved characters `\ ( ) < > , = /` are escaped with a
//! backslash to be used literally. Pattern text may end with a
//! whitespace-separated run of flag letters: `s` (don't anchor the
//! match start), `e` (don't anchor the end), `i` (ignore case);
//! upper-case explicitly disables a flag.
//!
//! ## Quick Start
//!
//! ```
//! use waymark::{Pattern, Registry};
//! use serde_json::json;
//!
//! // Compile a pattern
//! let pattern = Pattern::new("/item/<kind=food,toy>(/<id>)")?;
//!
//! // Extract parameters from a path
//! let params = pattern.match_path("/item/toy/7").expect("should match");
//! assert_eq!(params["kind"], "toy".into());
//! assert_eq!(params["id"], "7".into());
//!
//! // Build a path from parameters
//! assert_eq!(pattern.build(&params), "/item/toy/7");
//!
//! // Or register many patterns and evaluate them all
//! let mut registry = Registry::new();
//! registry.add_rule("/item/<kind=food,toy>(/<id>)", json!({ "name": "item" }))?;
//! assert_eq!(registry.match_path("/item/food").len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Encoding
//!
//! Literal pattern text is held percent-decoded and re-encoded on
//! output, and the matching engine accepts both encoded and unencoded
//! representations of the same path, so `/caf%C3%A9` and `/café` are the
//! same place. Captured parameter values are percent-decoded; built
//! paths are percent-encoded.
//!
//! ## Concurrency
//!
//! Parsing and compilation happen once at construction; a compiled
//! [`Pattern`] is immutable and safe for unsynchronized concurrent
//! read-only use. [`Registry::add_rule`] mutates and needs external
//! serialization if rules are added while matches are in flight.

pub mod cli;
pub mod ids;
pub mod parser;
pub mod pattern;
pub mod registry;

pub use parser::SyntaxError;
pub use pattern::{MatchParams, ParamValue, Params, Pattern};
pub use registry::{Registry, Rule, RuleMatch};
