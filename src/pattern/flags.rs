//! Match-behavior flags and their letter encoding.
//!
//! A pattern's source text is `<body> [<flags>]` where the flags are a
//! trailing run of letters: `s` (do not anchor at the start), `e` (do not
//! anchor at the end), `i` (case-insensitive matching). A lower-case
//! letter enables the flag, the same letter upper-case explicitly
//! disables it, and unrecognized letters are ignored. Flags passed
//! programmatically merge with - and are overridden by - letters parsed
//! from the text.

/// Match-behavior flags for a pattern.
///
/// Each flag is tri-state: unset (the default, which matches as `false`),
/// enabled, or explicitly disabled. Only set flags are re-emitted by
/// serialization, so `Pattern::to_string()` round-trips exactly the
/// letters that were given.
///
/// # Example
///
/// ```
/// use waymark::{MatchParams, Pattern};
///
/// let params = MatchParams::new().ignore_case(true);
/// let pattern = Pattern::with_params("/pets", params)?;
/// assert!(pattern.match_path("/PETS").is_some());
/// # Ok::<(), waymark::SyntaxError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchParams {
    ignore_case: Option<bool>,
    do_not_match_start: Option<bool>,
    do_not_match_end: Option<bool>,
}

impl MatchParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or explicitly disable case-insensitive matching (`i`/`I`).
    #[must_use]
    pub fn ignore_case(mut self, on: bool) -> Self {
        self.ignore_case = Some(on);
        self
    }

    /// Enable or explicitly disable "do not require the match to start at
    /// the beginning of the path" (`s`/`S`).
    #[must_use]
    pub fn do_not_match_start(mut self, on: bool) -> Self {
        self.do_not_match_start = Some(on);
        self
    }

    /// Enable or explicitly disable "do not require the match to extend
    /// to the end of the path" (`e`/`E`).
    #[must_use]
    pub fn do_not_match_end(mut self, on: bool) -> Self {
        self.do_not_match_end = Some(on);
        self
    }

    /// Effective value of the `i` flag; unset counts as `false`.
    #[must_use]
    pub fn is_ignore_case(&self) -> bool {
        self.ignore_case.unwrap_or(false)
    }

    /// Effective value of the `s` flag; unset counts as `false`.
    #[must_use]
    pub fn is_do_not_match_start(&self) -> bool {
        self.do_not_match_start.unwrap_or(false)
    }

    /// Effective value of the `e` flag; unset counts as `false`.
    #[must_use]
    pub fn is_do_not_match_end(&self) -> bool {
        self.do_not_match_end.unwrap_or(false)
    }

    /// Apply flag letters parsed from pattern text on top of whatever was
    /// set programmatically. The letter's case selects the value;
    /// unrecognized letters are ignored.
    pub(crate) fn apply_letters(&mut self, letters: &str) {
        for ch in letters.chars() {
            let lower = ch.to_ascii_lowercase();
            let on = ch == lower;
            match lower {
                's' => self.do_not_match_start = Some(on),
                'e' => self.do_not_match_end = Some(on),
                'i' => self.ignore_case = Some(on),
                _ => {}
            }
        }
    }

    /// Flag letters for serialization: set flags only, fixed order
    /// `s`, `e`, `i`, lower-case for enabled and upper-case for
    /// explicitly disabled.
    pub(crate) fn letters(&self) -> String {
        let mut out = String::new();
        for (letter, value) in [
            ('s', self.do_not_match_start),
            ('e', self.do_not_match_end),
            ('i', self.ignore_case),
        ] {
            if let Some(on) = value {
                out.push(if on { letter } else { letter.to_ascii_uppercase() });
            }
        }
        out
    }
}
