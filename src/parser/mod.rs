//! # Parser Module
//!
//! The parser module turns pattern text into an ordered tree of typed
//! [`Part`] nodes. It has no knowledge of regular expressions or URL
//! matching; it is a pure single-pass tokenizer/parser plus the generic
//! tree-walk reducer the rest of the crate compiles through.
//!
//! ## Overview
//!
//! The parser is responsible for:
//! - Scanning pattern text character by character, left to right, with no
//!   backtracking
//! - Building the part tree (literals, delimiters, params, optional groups)
//! - Rejecting malformed patterns with a [`SyntaxError`]
//! - Reducing the tree to a string through a caller-supplied visitor
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
//! Literal runs, names and values are runs of characters with
//! backslash-escaping. The reserved characters `\ ( ) < > , = /` must be
//! escaped to be used literally; a backslash makes the following character
//! literal regardless of its class.
//!
//! ## Example
//!
//! ```
//! use waymark::parser::{Parser, Part};
//!
//! let parser = Parser::parse("/products(/<id>)")?;
//! assert!(matches!(parser.parts()[0], Part::Delimiter));
//! # Ok::<(), waymark::SyntaxError>(())
//! ```

mod core;
mod error;


pub use core::{Boundary, Parser, Part, StaticPart};
pub use error::SyntaxError;

pub(crate) use core::{parts_to_pattern, reduce_parts};
