use std::fmt;

/// Pattern syntax error
///
/// Returned when pattern text cannot be parsed into a part tree: an
/// unterminated escape, param or value list, unbalanced group nesting, a
/// structurally misplaced reserved character, empty pattern text, or a
/// literal whose percent-decoded form is not valid text.
///
/// There is no recovery path: construction either succeeds with a fully
/// valid pattern or fails atomically, and no partially-built pattern is
/// observable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pattern: String,
}

impl SyntaxError {
    pub(crate) fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// The offending pattern text, exactly as it was given.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid path pattern syntax: {:?}", self.pattern)
    }
}

impl std::error::Error for SyntaxError {}
