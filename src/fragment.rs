//! Normalization of loosely-typed builder inputs into tree nodes.
//!
//! Builder call sites mix prebuilt nodes, bare strings, optional pieces and
//! nested lists. [`Part`] is the common currency: anything convertible into
//! one can appear in a [`fragment!`] list, and [`fragment`] flattens the lot
//! into a single concatenation node. Bare strings made entirely of
//! punctuation are classified with the subtle `annotation` style
//! automatically, so structural glue like `"["` or `", "` fades without
//! every call site having to say so.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::style::StyleName;
use crate::tree::Stylized;

/// ASCII punctuation (underscore excepted) and whitespace.
static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r##"^[!"#$%&'()*+,\-./:;<=>?@\[\]\^`{|}~\s]+$"##).unwrap());

/// A loosely-typed piece of a fragment.
///
/// Conversions exist for nodes, `&str`/`String`, nested part lists, and
/// `Option` of any of those (`None` contributes nothing), mirroring the
/// shapes builders accept.
#[derive(Debug, Clone)]
pub enum Part<'a> {
    /// A prebuilt node, taken as-is.
    Node(Stylized<'a>),
    /// A bare string, classified by [`fragment`].
    Text(Cow<'a, str>),
    /// A nested list, flattened in order.
    Many(Vec<Part<'a>>),
    /// Nothing; dropped during flattening.
    Empty,
}

impl<'a> From<Stylized<'a>> for Part<'a> {
    fn from(node: Stylized<'a>) -> Self {
        Part::Node(node)
    }
}

impl<'a> From<&'a str> for Part<'a> {
    fn from(text: &'a str) -> Self {
        Part::Text(Cow::Borrowed(text))
    }
}

impl<'a> From<String> for Part<'a> {
    fn from(text: String) -> Self {
        Part::Text(Cow::Owned(text))
    }
}

impl<'a> From<Cow<'a, str>> for Part<'a> {
    fn from(text: Cow<'a, str>) -> Self {
        Part::Text(text)
    }
}

impl<'a> From<Vec<Part<'a>>> for Part<'a> {
    fn from(parts: Vec<Part<'a>>) -> Self {
        Part::Many(parts)
    }
}

impl<'a, T: Into<Part<'a>>> From<Option<T>> for Part<'a> {
    fn from(part: Option<T>) -> Self {
        match part {
            Some(part) => part.into(),
            None => Part::Empty,
        }
    }
}

/// Flattens parts into a single concatenation node.
///
/// Nested lists flatten recursively, empties are dropped, and bare strings
/// are classified: punctuation-only text gets the `annotation` style, all
/// other text stays unstyled.
///
/// The [`fragment!`] macro is the usual entry point:
///
/// ```rust
/// use telltale::{fragment, Nesting, StringifyOptions, Stylized, TextPrinter};
///
/// let node = fragment!["(", Stylized::text("hi"), ")"];
/// let printer = TextPrinter::plain();
/// let nesting = Nesting::new();
/// let options = StringifyOptions { nesting: &nesting, printer: &printer };
/// assert_eq!(node.stringify(&options), "(hi)");
/// ```
pub fn fragment<'a>(parts: Vec<Part<'a>>) -> Stylized<'a> {
    let mut children = Vec::new();
    for part in parts {
        flatten_into(part, &mut children);
    }
    Stylized::Fragment { children }
}

/// Interleaves `separator` between `items` and flattens the result.
pub fn join<'a>(items: Vec<Part<'a>>, separator: impl Into<Part<'a>>) -> Stylized<'a> {
    let separator = separator.into();
    let last = items.len().saturating_sub(1);

    let mut parts = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        parts.push(item);
        if index != last {
            parts.push(separator.clone());
        }
    }
    fragment(parts)
}

fn flatten_into<'a>(part: Part<'a>, out: &mut Vec<Stylized<'a>>) {
    match part {
        Part::Node(node) => out.push(node),
        Part::Text(text) => out.push(classify(text)),
        Part::Many(parts) => {
            for part in parts {
                flatten_into(part, out);
            }
        }
        Part::Empty => {}
    }
}

fn classify(text: Cow<'_, str>) -> Stylized<'_> {
    if PUNCTUATION.is_match(&text) {
        Stylized::styled(text, StyleName::Annotation)
    } else {
        Stylized::text(text)
    }
}

/// Builds a fragment node from a mixed list of parts.
///
/// Accepts anything convertible into a [`Part`]: nodes, strings, options,
/// nested `Vec<Part>` lists.
#[macro_export]
macro_rules! fragment {
    ($($part:expr),* $(,)?) => {
        $crate::fragment(::std::vec![$($crate::Part::from($part)),*])
    };
}
