//! Document elements for building formatted output
//!
//! This module provides the IR (Intermediate Representation) that rendering
//! rules produce. Like the Ruff and Biome formatters it distinguishes between:
//! - Static, ASCII-only text (keywords, punctuation) - fast path
//! - Dynamic, Unicode text from the syntax tree (identifiers, strings) - slow path
//!
//! Layout is expressed structurally: an [`Document::Indent`] block raises the
//! indentation level for every line that starts inside it, and
//! [`Document::HardLine`] always breaks. There is no width-aware fitting.
//!
//! # Example
//!
//! ```rust
//! use plume_core::doc::{hard_line, indent, sequence, text, token};
//!
//! let doc = sequence(vec![
//!     token("{"),
//!     indent(vec![hard_line(), text("a"), token(",")]),
//!     hard_line(),
//!     token("}"),
//! ]);
//! assert_eq!(doc.to_string(), "{\na,\n}");
//! ```

use std::fmt;

/// Document element - building block for formatted output
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Document {
    /// Static compile-time text: keywords, operators, punctuation
    ///
    /// Must be ASCII only and cannot contain line breaks or tabs.
    Token(&'static str),

    /// Dynamic text from the syntax tree: identifiers, string values, raw source
    Text(Box<str>),

    /// Single ASCII space
    Space,

    /// Hard line break - always inserts a newline
    HardLine,

    /// Elements printed one indentation level deeper
    Indent(Vec<Document>),

    /// Elements that belong together as one construct
    Group(Vec<Document>),

    /// Plain sequence of elements
    Sequence(Vec<Document>),
}

impl Document {
    /// Check if this element is empty (contains no actual content)
    pub fn is_empty(&self) -> bool {
        match self {
            Document::Token(s) => s.is_empty(),
            Document::Text(text) => text.is_empty(),
            Document::Space | Document::HardLine => false,
            Document::Indent(elements)
            | Document::Group(elements)
            | Document::Sequence(elements) => elements.iter().all(|e| e.is_empty()),
        }
    }
}

/// Flat rendering without indentation, mostly useful in assertions and logs.
/// Use [`crate::doc::Printer`] for layout-aware output.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Token(s) => write!(f, "{}", s),
            Document::Text(text) => write!(f, "{}", text),
            Document::Space => write!(f, " "),
            Document::HardLine => writeln!(f),
            Document::Indent(elements)
            | Document::Group(elements)
            | Document::Sequence(elements) => {
                for element in elements {
                    write!(f, "{}", element)?;
                }
                Ok(())
            }
        }
    }
}

impl From<&'static str> for Document {
    fn from(value: &'static str) -> Self {
        token(value)
    }
}

/// Builder API: Create token for static, ASCII-only text
///
/// # Panics
///
/// In debug builds, panics if `text` contains non-ASCII characters, newlines,
/// tabs, or carriage returns.
pub fn token(text: &'static str) -> Document {
    debug_assert!(text.is_ascii(), "Token must be ASCII only, got: {:?}", text);
    debug_assert!(
        !text.contains(['\n', '\r', '\t']),
        "Token cannot contain newlines/tabs, use HardLine/Space instead: {:?}",
        text
    );
    Document::Token(text)
}

/// Builder API: Create text element from dynamic content
pub fn text(text: &str) -> Document {
    Document::Text(text.into())
}

/// Builder API: Create a hard line break
pub fn hard_line() -> Document {
    Document::HardLine
}

/// Builder API: Create a space
pub fn space() -> Document {
    Document::Space
}

/// Builder API: Indent every line that starts inside `elements`
pub fn indent(elements: Vec<Document>) -> Document {
    Document::Indent(elements)
}

/// Builder API: Group elements together
pub fn group(elements: Vec<Document>) -> Document {
    Document::Group(elements)
}

/// Builder API: Create a sequence of elements
pub fn sequence(elements: Vec<Document>) -> Document {
    Document::Sequence(elements)
}

/// Builder API: An element that prints nothing
pub fn empty() -> Document {
    Document::Sequence(Vec::new())
}

/// Builder API: Interleave `separator` between `documents`
///
/// ```rust
/// use plume_core::doc::{join, text, token};
///
/// let joined = join(token(", "), vec![text("a"), text("b")]);
/// assert_eq!(joined.to_string(), "a, b");
/// ```
pub fn join<I>(separator: Document, documents: I) -> Document
where
    I: IntoIterator<Item = Document>,
{
    let mut elements = Vec::new();
    for (idx, document) in documents.into_iter().enumerate() {
        if idx > 0 {
            elements.push(separator.clone());
        }
        elements.push(document);
    }
    Document::Sequence(elements)
}
