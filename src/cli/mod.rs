//! # CLI Module
//!
//! The CLI module backs the `waymark` binary: a small inspection tool for
//! trying patterns from a shell.
//!
//! ## Commands
//!
//! ### `match`
//!
//! Match a concrete path against a pattern and print the extracted
//! parameters as JSON (exit code 1 when the path does not match):
//!
//! ```bash
//! waymark match "/products(/<id>)" /products/42
//! ```
//!
//! ### `build`
//!
//! Render a concrete path from a pattern and a JSON object of parameter
//! values:
//!
//! ```bash
//! waymark build "/products(/<id>)" --values '{"id": "42"}'
//! ```
//!
//! ### `print`
//!
//! Parse a pattern and print its canonical serialization:
//!
//! ```bash
//! waymark print "/products(/<id>)  i"
//! ```

mod commands;


pub use commands::{run_cli, Cli, Commands};
