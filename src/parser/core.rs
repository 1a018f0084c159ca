//! Parser core - the character-level scan and the part tree.

use std::fmt;
use std::string::FromUtf8Error;

use super::SyntaxError;

/// A literal fragment of a pattern, held in both encoding disciplines.
///
/// `body` is the percent-decoded text; `encoded` is its percent-encoded
/// form. The decoded body drives matching and re-serialization, the
/// encoded form is what path generation emits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticPart {
    /// Percent-decoded literal text
    pub body: String,
    /// Percent-encoded form of `body`
    pub encoded: String,
}

impl StaticPart {
    /// Build from a raw scanned chunk: decode once, re-encode from the
    /// decoded body. Fails only when the decoded bytes are not valid text.
    pub(crate) fn from_raw(raw: &str) -> Result<Self, FromUtf8Error> {
        let body = urlencoding::decode(raw)?.into_owned();
        let encoded = urlencoding::encode(&body).into_owned();
        Ok(Self { body, encoded })
    }
}

/// One node of the parsed part tree.
///
/// Ownership is strictly tree-shaped: each node owns its children
/// outright. There is no sharing and there are no back references, so the
/// tree needs no reference counting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Literal text between structural characters
    Static(StaticPart),
    /// The path separator `/`
    Delimiter,
    /// A named capture point `<name>` or `<name=v1,v2,...>`.
    ///
    /// An empty `values` list means an unconstrained capture matching any
    /// run of non-separator characters; a non-empty list is an enumerated
    /// allow-list.
    Param {
        name: String,
        values: Vec<StaticPart>,
    },
    /// An optional group `( ... )`, optional at both match and build time.
    /// Groups may nest arbitrarily.
    Option { parts: Vec<Part> },
}

/// Which boundary of a [`Part::Option`] group the visitor is being asked
/// to render. Non-group parts are always visited with [`Boundary::Open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Open,
    Close,
}

/// Scan state for the single-pass pattern scan.
///
/// The escaped variants make "escape pending" part of the state proper,
/// so an escape inside a param name cannot be confused with one inside a
/// value list or a literal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Collecting a literal run at the current nesting level
    Literal,
    LiteralEscape,
    /// Collecting a param name after `<`
    Name,
    NameEscape,
    /// Collecting enumerated values after `<name=`
    Value,
    ValueEscape,
}

/// Pattern-text parser
///
/// Scans pattern text character by character, left to right, in a single
/// pass with no backtracking, and produces the validated part tree. The
/// scan dispatches on `(state, character)`; group nesting is tracked by a
/// stack of suspended part buffers.
///
/// # Example
///
/// ```
/// use waymark::parser::{Parser, Part};
///
/// let parser = Parser::parse("/pets/<id>")?;
/// assert_eq!(parser.parts().len(), 4);
/// assert!(matches!(&parser.parts()[3], Part::Param { name, .. } if name == "id"));
/// # Ok::<(), waymark::SyntaxError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    parts: Vec<Part>,
}

impl Parser {
    /// Parse pattern text into a part tree.
    ///
    /// # Errors
    ///
    /// Returns [`SyntaxError`] for an unterminated escape, param or value
    /// list, unbalanced group nesting, a reserved character in an illegal
    /// position, or empty pattern text.
    pub fn parse(src: &str) -> Result<Self, SyntaxError> {
        let fail = || SyntaxError::new(src);

        let mut state = State::Literal;
        let mut chunk = String::new();
        let mut buf: Vec<Part> = Vec::new();
        let mut stack: Vec<Vec<Part>> = Vec::new();
        let mut param_name = String::new();
        let mut values: Vec<StaticPart> = Vec::new();

        for ch in src.chars() {
            match (state, ch) {
                // An escaped character is literal regardless of its class,
                // including another backslash.
                (State::LiteralEscape, _) => {
                    chunk.push(ch);
                    state = State::Literal;
                }
                (State::NameEscape, _) => {
                    chunk.push(ch);
                    state = State::Name;
                }
                (State::ValueEscape, _) => {
                    chunk.push(ch);
                    state = State::Value;
                }

                (State::Literal, '\\') => state = State::LiteralEscape,
                (State::Name, '\\') => state = State::NameEscape,
                (State::Value, '\\') => state = State::ValueEscape,

                (State::Literal, '/') => {
                    flush_static(&mut chunk, &mut buf).map_err(|_| fail())?;
                    buf.push(Part::Delimiter);
                }
                (State::Literal, '(') => {
                    flush_static(&mut chunk, &mut buf).map_err(|_| fail())?;
                    stack.push(std::mem::take(&mut buf));
                }
                (State::Literal, ')') => {
                    let Some(parent) = stack.pop() else {
                        return Err(fail());
                    };
                    if !chunk.is_empty() {
                        flush_static(&mut chunk, &mut buf).map_err(|_| fail())?;
                    } else if buf.is_empty() {
                        // `()` - a group must contain something
                        return Err(fail());
                    }
                    let parts = std::mem::replace(&mut buf, parent);
                    buf.push(Part::Option { parts });
                }
                (State::Literal, '<') => {
                    flush_static(&mut chunk, &mut buf).map_err(|_| fail())?;
                    state = State::Name;
                }
                (State::Literal, '>' | '=' | ',') => return Err(fail()),
                (State::Literal, _) => chunk.push(ch),

                (State::Name, '>') => {
                    if chunk.is_empty() {
                        return Err(fail());
                    }
                    buf.push(Part::Param {
                        name: std::mem::take(&mut chunk),
                        values: Vec::new(),
                    });
                    state = State::Literal;
                }
                (State::Name, '=') => {
                    if chunk.is_empty() {
                        return Err(fail());
                    }
                    param_name = std::mem::take(&mut chunk);
                    values.clear();
                    state = State::Value;
                }
                (State::Name, '/' | '(' | ')' | '<' | ',') => return Err(fail()),
                (State::Name, _) => chunk.push(ch),

                (State::Value, ',') => {
                    if chunk.is_empty() {
                        return Err(fail());
                    }
                    values.push(StaticPart::from_raw(&chunk).map_err(|_| fail())?);
                    chunk.clear();
                }
                (State::Value, '>') => {
                    if chunk.is_empty() {
                        return Err(fail());
                    }
                    values.push(StaticPart::from_raw(&chunk).map_err(|_| fail())?);
                    chunk.clear();
                    buf.push(Part::Param {
                        name: std::mem::take(&mut param_name),
                        values: std::mem::take(&mut values),
                    });
                    state = State::Literal;
                }
                (State::Value, '/' | '(' | ')' | '<' | '=') => return Err(fail()),
                (State::Value, _) => chunk.push(ch),
            }
        }

        // Pending escape, open param/value list, or unclosed group at end
        // of input are all unterminated constructs.
        if state != State::Literal || !stack.is_empty() {
            return Err(fail());
        }

        if !chunk.is_empty() {
            flush_static(&mut chunk, &mut buf).map_err(|_| fail())?;
        } else if buf.is_empty() {
            return Err(fail());
        }

        Ok(Self { parts: buf })
    }

    /// The root part sequence.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    pub(crate) fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    /// Reduce the part tree to a single string through `visit`.
    ///
    /// The walk is depth-first. For an [`Part::Option`] group the visitor
    /// is invoked once for the opening boundary and once for the closing
    /// boundary around the recursively reduced content - but only if that
    /// content is non-empty; an empty group is omitted entirely. A
    /// [`Part::Param`] that reduces to empty output inside a group
    /// abandons the whole enclosing reduction, which cascades the
    /// omission through every ancestor group.
    pub fn compile<'p, F>(&'p self, mut visit: F) -> String
    where
        F: FnMut(&'p Part, Boundary) -> String,
    {
        reduce_parts(&self.parts, &mut visit, 0)
    }
}

impl fmt::Display for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&parts_to_pattern(&self.parts))
    }
}

fn flush_static(chunk: &mut String, buf: &mut Vec<Part>) -> Result<(), FromUtf8Error> {
    if chunk.is_empty() {
        return Ok(());
    }
    let part = StaticPart::from_raw(chunk)?;
    chunk.clear();
    buf.push(Part::Static(part));
    Ok(())
}

/// The generic depth-first reducer behind [`Parser::compile`],
/// path generation and re-serialization.
pub(crate) fn reduce_parts<'p, F>(parts: &'p [Part], visit: &mut F, depth: usize) -> String
where
    F: FnMut(&'p Part, Boundary) -> String,
{
    let mut result = String::new();

    for part in parts {
        if let Part::Option { parts: nested } = part {
            let chunk = reduce_parts(nested, visit, depth + 1);
            if chunk.is_empty() {
                continue;
            }
            result.push_str(&visit(part, Boundary::Open));
            result.push_str(&chunk);
            result.push_str(&visit(part, Boundary::Close));
            continue;
        }

        let chunk = visit(part, Boundary::Open);

        // An unsatisfied param poisons the whole enclosing group: bubble
        // the empty result so every ancestor Option drops with it.
        if chunk.is_empty() && depth > 0 {
            if let Part::Param { .. } = part {
                return String::new();
            }
        }

        result.push_str(&chunk);
    }

    result
}

/// Escape the reserved grammar characters in `text` so it round-trips
/// through the parser as a literal.
pub(crate) fn escape_reserved(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        if matches!(ch, '\\' | '(' | ')' | '<' | '>' | ',' | '=' | '/') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

/// Re-serialize a part tree to canonical pattern text (body only, no
/// flag letters).
pub(crate) fn parts_to_pattern(parts: &[Part]) -> String {
    reduce_parts(parts, &mut part_to_pattern, 0)
}

fn part_to_pattern(part: &Part, boundary: Boundary) -> String {
    match part {
        Part::Option { .. } => match boundary {
            Boundary::Open => "(".to_string(),
            Boundary::Close => ")".to_string(),
        },
        Part::Delimiter => "/".to_string(),
        Part::Static(part) => escape_reserved(&part.body),
        Part::Param { name, values } => {
            if values.is_empty() {
                return format!("<{}>", escape_reserved(name));
            }
            let values: Vec<String> = values.iter().map(|v| escape_reserved(&v.body)).collect();
            format!("<{}={}>", escape_reserved(name), values.join(","))
        }
    }
}
