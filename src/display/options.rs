//! Descriptions, annotations, the tagged display spec, and its errors.

use std::borrow::Cow;
use std::fmt;

use crate::display::{FormatFn, Name, Toolkit};
use crate::style::StyleName;
use crate::tree::Stylized;

/// A description attached to a display name.
///
/// Renders immediately after the label as `Name[description]`; the brackets
/// are inserted automatically. This differs from an [`Annotation`], which
/// appears after the structure and is inserted as-is.
pub enum Description<'a> {
    /// Literal text, rendered with the `annotation` style.
    Text(Cow<'a, str>),
    /// A boolean literal.
    Bool(bool),
    /// An integer literal.
    Int(i64),
    /// A floating-point literal.
    Float(f64),
    /// A prebuilt fragment, rendered as-is.
    Node(Stylized<'a>),
    /// A callback producing the description from the toolkit.
    Format(FormatFn<'a>),
}

impl<'a> Description<'a> {
    /// A callback description.
    pub fn format(format: impl Fn(&Toolkit<'_>) -> Stylized<'a> + 'a) -> Self {
        Description::Format(Box::new(format))
    }

    /// Whether this description should count as present for the naming
    /// policy. Empty literal text counts as absent.
    pub(crate) fn is_present(&self) -> bool {
        match self {
            Description::Text(text) => !text.is_empty(),
            _ => true,
        }
    }

    pub(crate) fn to_stylized(&self, f: &Toolkit<'_>) -> Stylized<'a> {
        match self {
            Description::Text(text) => Stylized::styled(text.clone(), StyleName::Annotation),
            Description::Bool(value) => {
                Stylized::styled(value.to_string(), StyleName::Annotation)
            }
            Description::Int(value) => Stylized::styled(value.to_string(), StyleName::Annotation),
            Description::Float(value) => {
                Stylized::styled(value.to_string(), StyleName::Annotation)
            }
            Description::Node(node) => node.clone(),
            Description::Format(format) => format(f),
        }
    }
}

impl<'a> From<&'a str> for Description<'a> {
    fn from(text: &'a str) -> Self {
        Description::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Description<'_> {
    fn from(text: String) -> Self {
        Description::Text(Cow::Owned(text))
    }
}

impl From<bool> for Description<'_> {
    fn from(value: bool) -> Self {
        Description::Bool(value)
    }
}

impl From<i64> for Description<'_> {
    fn from(value: i64) -> Self {
        Description::Int(value)
    }
}

impl From<i32> for Description<'_> {
    fn from(value: i32) -> Self {
        Description::Int(value.into())
    }
}

impl From<f64> for Description<'_> {
    fn from(value: f64) -> Self {
        Description::Float(value)
    }
}

impl<'a> From<Stylized<'a>> for Description<'a> {
    fn from(node: Stylized<'a>) -> Self {
        Description::Node(node)
    }
}

/// An annotation rendered after a display's body.
///
/// Annotations are never elided by nesting. They appear space-separated
/// after the structural body: inside the parentheses for tuples, outside
/// the closing brace for structs.
pub enum Annotation<'a> {
    /// Literal text, rendered with the `annotation` style.
    Text(Cow<'a, str>),
    /// A prebuilt fragment, rendered as-is.
    Node(Stylized<'a>),
    /// A callback producing the annotation from the toolkit.
    Format(FormatFn<'a>),
}

impl<'a> Annotation<'a> {
    /// A callback annotation.
    pub fn format(format: impl Fn(&Toolkit<'_>) -> Stylized<'a> + 'a) -> Self {
        Annotation::Format(Box::new(format))
    }

    /// Renders with a leading space, or to nothing when the annotation
    /// itself renders empty.
    pub(crate) fn to_stylized_spaced(&self, f: &Toolkit<'_>) -> Stylized<'a> {
        let node = match self {
            Annotation::Text(text) => Stylized::styled(text.clone(), StyleName::Annotation),
            Annotation::Node(node) => node.clone(),
            Annotation::Format(format) => format(f),
        };
        if node.is_empty() {
            node
        } else {
            crate::fragment![" ", node]
        }
    }
}

impl<'a> From<&'a str> for Annotation<'a> {
    fn from(text: &'a str) -> Self {
        Annotation::Text(Cow::Borrowed(text))
    }
}

impl From<String> for Annotation<'_> {
    fn from(text: String) -> Self {
        Annotation::Text(Cow::Owned(text))
    }
}

impl<'a> From<Stylized<'a>> for Annotation<'a> {
    fn from(node: Stylized<'a>) -> Self {
        Annotation::Node(node)
    }
}

/// Tagged configuration for a freeform display.
///
/// Every field is named and optional, so there is exactly one way to spell
/// each combination. A spec with neither `name` nor `format` has nothing to
/// render and is rejected by [`display_spec`](crate::display_spec).
///
/// # Example
///
/// ```rust
/// use telltale::{display_spec, DisplaySpec, Nesting, TextPrinter};
///
/// let spec = DisplaySpec {
///     name: Some("Token".into()),
///     description: Some("eof".into()),
///     ..DisplaySpec::default()
/// };
/// let display = display_spec(spec).unwrap();
/// let printer = TextPrinter::plain();
/// assert_eq!(display.render(&Nesting::new(), &printer), "Token[eof]");
/// ```
#[derive(Default)]
pub struct DisplaySpec<'a> {
    /// The display name, literal or compact.
    pub name: Option<Name<'a>>,
    /// The freeform body callback.
    pub format: Option<FormatFn<'a>>,
    /// Description rendered as `Name[description]`.
    pub description: Option<Description<'a>>,
    /// Annotation rendered after the body.
    pub annotation: Option<Annotation<'a>>,
}

/// Error for display configurations that cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayError {
    /// The spec provided neither a name nor a format callback.
    MissingContent,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayError::MissingContent => {
                write!(f, "display spec has neither a name nor a format callback")
            }
        }
    }
}

impl std::error::Error for DisplayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_description_presence() {
        assert!(Description::from("short").is_present());
        assert!(!Description::from("").is_present());
        assert!(Description::from(0i64).is_present());
        assert!(Description::format(|_| crate::fragment![]).is_present());
    }

    #[test]
    fn test_error_display() {
        let message = DisplayError::MissingContent.to_string();
        assert!(message.contains("name"));
        assert!(message.contains("format"));
    }
}
