//! # Pattern Module
//!
//! The pattern module compiles a parsed part tree into the three derived
//! artifacts that make a pattern useful at runtime:
//!
//! 1. **Matching engine** - a compiled [`regex::Regex`] plus the ordered
//!    parameter-name list; applied to a concrete path it extracts a
//!    parameter map.
//! 2. **Generator** - renders a concrete path from supplied parameter
//!    values, dropping optional groups whose params are unsatisfied.
//! 3. **Serializer** - the `Display` impl renders the canonical pattern
//!    text, flags included.
//!
//! All three are derived once, eagerly, at [`Pattern`] construction; the
//! pattern is immutable afterwards.
//!
//! ## Flags
//!
//! Pattern text may carry a trailing whitespace-separated run of flag
//! letters:
//!
//! | letter | meaning                                  |
//! |--------|------------------------------------------|
//! | `s`    | do not require the match to start at the beginning |
//! | `e`    | do not require the match to reach the end |
//! | `i`    | case-insensitive matching                 |
//!
//! Upper-case explicitly disables the flag; unrecognized letters are
//! ignored. See [`MatchParams`].
//!
//! ## Example
//!
//! ```
//! use waymark::Pattern;
//!
//! let pattern = Pattern::new("/item/<kind=foo,bar>")?;
//! assert!(pattern.match_path("/item/foo").is_some());
//! assert!(pattern.match_path("/item/baz").is_none());
//! # Ok::<(), waymark::SyntaxError>(())
//! ```

mod core;
mod flags;
mod params;

#[cfg(test)]
mod tests;

pub use core::Pattern;
pub use flags::MatchParams;
pub use params::{ParamValue, Params};
