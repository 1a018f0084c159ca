//! Pattern core - flag split, regex compilation, match and build.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::collections::HashMap;
use std::fmt;
use tracing::debug;

use super::flags::MatchParams;
use super::params::{push_value, Params};
use crate::parser::{parts_to_pattern, reduce_parts, Boundary, Parser, Part, SyntaxError};

/// Splits pattern text into the grammar body and the optional trailing
/// run of flag letters. Matches any input, including the empty string.
static PATTERN_SPLIT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([\s\S]*?)(?:\s+(\w+))?\s*$").expect("pattern split regex should be valid")
});

/// A compiled path pattern
///
/// Construction parses the pattern text, derives the matching engine
/// (a [`regex::Regex`] plus the ordered parameter-name list) and fixes
/// the match-behavior flags. A `Pattern` is immutable from then on:
/// [`match_path`](Pattern::match_path) and [`build`](Pattern::build) are
/// pure functions of the compiled state, so a `Pattern` can be shared
/// across threads without synchronization.
///
/// # Example
///
/// ```
/// use waymark::Pattern;
///
/// let pattern = Pattern::new("/products(/<id>)")?;
///
/// let params = pattern.match_path("/products/42").expect("should match");
/// assert_eq!(params["id"], "42".into());
///
/// assert_eq!(pattern.build(&params), "/products/42");
/// assert_eq!(pattern.build(&Default::default()), "/products");
/// # Ok::<(), waymark::SyntaxError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    parts: Vec<Part>,
    params: MatchParams,
    regex: Regex,
    names: Vec<String>,
}

impl Pattern {
    /// Compile pattern text with default match params.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError`] when the body cannot be parsed; see
    /// [`Parser::parse`].
    pub fn new(text: &str) -> Result<Self, SyntaxError> {
        Self::with_params(text, MatchParams::new())
    }

    /// Compile pattern text on top of programmatic match params.
    ///
    /// Flag letters in the text override the programmatic params
    /// flag by flag.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError`] when the body cannot be parsed.
    pub fn with_params(text: &str, params: MatchParams) -> Result<Self, SyntaxError> {
        let caps = PATTERN_SPLIT
            .captures(text)
            .expect("pattern split regex matches any input");
        let body = caps.get(1).map_or("", |m| m.as_str());

        let mut params = params;
        if let Some(letters) = caps.get(2) {
            params.apply_letters(letters.as_str());
        }

        let parts = Parser::parse(body)?.into_parts();
        let (regex, names) = compile_regex(&parts, &params);

        debug!(
            pattern = %body,
            regex = %regex.as_str(),
            names = names.len(),
            "pattern compiled"
        );

        Ok(Self {
            parts,
            params,
            regex,
            names,
        })
    }

    /// Match a concrete path and extract its parameters.
    ///
    /// Returns `None` when the path does not match. On a match, captured
    /// groups are walked in parameter-name order: a group left unmatched
    /// by an optional segment contributes nothing, captured text
    /// containing `%` is percent-decoded, and a name captured more than
    /// once accumulates its values in capture order. Never fails.
    #[must_use]
    pub fn match_path(&self, path: &str) -> Option<Params> {
        debug!(regex = %self.regex.as_str(), path = %path, "match attempt");

        let caps = self.regex.captures(path)?;
        let mut params = Params::new();

        for (index, name) in self.names.iter().enumerate() {
            let Some(group) = caps.get(index + 1) else {
                continue;
            };
            let text = group.as_str();
            let value = if text.contains('%') {
                match urlencoding::decode(text) {
                    Ok(decoded) => decoded.into_owned(),
                    // undecodable capture stays raw; matching never fails
                    Err(_) => text.to_string(),
                }
            } else {
                text.to_string()
            };
            push_value(&mut params, name, value);
        }

        Some(params)
    }

    /// Render a concrete path from parameter values.
    ///
    /// Delimiters and static text are emitted in their percent-encoded
    /// form; each param consumes its value as described on
    /// [`ParamValue`](crate::ParamValue), and a param without a usable
    /// value contributes
    /// empty output - which makes any enclosing optional group disappear
    /// entirely. Never fails.
    #[must_use]
    pub fn build(&self, values: &Params) -> String {
        let mut seen: HashMap<String, usize> = HashMap::new();

        reduce_parts(
            &self.parts,
            &mut |part: &Part, _| match part {
                Part::Delimiter => "/".to_string(),
                Part::Static(part) => part.encoded.clone(),
                Part::Param { name, .. } => {
                    let Some(value) = values.get(name) else {
                        return String::new();
                    };
                    // occurrences are counted even when the value turns
                    // out empty, so sequences stay positionally aligned
                    let occurrence = seen.entry(name.clone()).and_modify(|n| *n += 1).or_insert(0);
                    match value.nth(*occurrence) {
                        Some(text) if !text.is_empty() => urlencoding::encode(text).into_owned(),
                        _ => String::new(),
                    }
                }
                Part::Option { .. } => String::new(),
            },
            0,
        )
    }

    /// The match-behavior flags this pattern was compiled with.
    #[must_use]
    pub fn params(&self) -> &MatchParams {
        &self.params
    }

    /// Parameter names in left-to-right occurrence order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The root part sequence of the parsed tree.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }
}

impl fmt::Display for Pattern {
    /// Canonical re-serialization: the part tree re-escaped to pattern
    /// text, plus the flag letters that were set.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let body = parts_to_pattern(&self.parts);
        let letters = self.params.letters();
        if letters.is_empty() {
            f.write_str(&body)
        } else {
            write!(f, "{body} {letters}")
        }
    }
}

/// Derive the matching engine: regex source via the generic reducer,
/// parameter names in capture-group order, anchors and case sensitivity
/// from the flags.
fn compile_regex(parts: &[Part], params: &MatchParams) -> (Regex, Vec<String>) {
    let ignore_case = params.is_ignore_case();
    let mut names = Vec::new();

    let mut source = reduce_parts(
        parts,
        &mut |part: &Part, boundary| match part {
            Part::Delimiter => "/".to_string(),
            Part::Static(part) => static_fragment(&part.body, ignore_case),
            Part::Param { name, values } => {
                names.push(name.clone());
                if values.is_empty() {
                    return "([^/]+?)".to_string();
                }
                let alternatives: Vec<String> = values
                    .iter()
                    .map(|value| static_fragment(&value.body, ignore_case))
                    .collect();
                format!("({})", alternatives.join("|"))
            }
            Part::Option { .. } => match boundary {
                Boundary::Open => "(?:".to_string(),
                Boundary::Close => ")?".to_string(),
            },
        },
        0,
    );

    if !params.is_do_not_match_start() {
        source.insert(0, '^');
    }
    if !params.is_do_not_match_end() {
        source.push('$');
    }

    let regex = RegexBuilder::new(&source)
        .case_insensitive(ignore_case)
        .build()
        .expect("compiled pattern regex should be valid");

    (regex, names)
}

/// Is `ch` stable under percent-encoding (RFC 3986 unreserved)?
fn is_unreserved(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || matches!(ch, '-' | '.' | '_' | '~')
}

/// Re-express decoded literal text as a regex fragment accepting both the
/// literal character and its percent-encoded form, so one pattern matches
/// encoded and unencoded representations of the same path. Under
/// case-insensitive matching the encoded forms of both case variants are
/// accepted as well.
fn static_fragment(text: &str, ignore_case: bool) -> String {
    let mut out = String::new();
    for ch in text.chars() {
        let literal = regex::escape(&ch.to_string());
        if is_unreserved(ch) {
            out.push_str(&literal);
        } else if ignore_case {
            let lower: String = ch.to_lowercase().collect();
            let upper: String = ch.to_uppercase().collect();
            out.push_str(&format!(
                "(?:{}|{}|{})",
                literal,
                urlencoding::encode(&lower),
                urlencoding::encode(&upper)
            ));
        } else {
            out.push_str(&format!(
                "(?:{}|{})",
                literal,
                urlencoding::encode(&ch.to_string())
            ));
        }
    }
    out
}
