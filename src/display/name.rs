//! Display names and the compact-elision policy.

use std::borrow::Cow;

use crate::display::{Description, Toolkit};
use crate::fragment::fragment;
use crate::style::StyleName;
use crate::tree::Stylized;

/// The name of a displayed shape.
///
/// A literal name is always shown. A compact name is one whose presence is
/// not required to understand the body of the display, so it is elided in
/// nested contexts to streamline the output — unless a description is
/// attached, because `Name[description]` without `Name` would read as
/// nonsense. Annotations never force a compact name to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Name<'a> {
    /// A name that always renders.
    Literal(Cow<'a, str>),
    /// A name elided when nested and undescribed.
    Compact(Cow<'a, str>),
}

impl<'a> Name<'a> {
    /// A compact name.
    pub fn compact(label: impl Into<Cow<'a, str>>) -> Self {
        Name::Compact(label.into())
    }

    /// The label text.
    pub fn label(&self) -> &str {
        match self {
            Name::Literal(label) | Name::Compact(label) => label,
        }
    }

    /// Whether this name is eligible for elision.
    pub fn is_compact(&self) -> bool {
        matches!(self, Name::Compact(_))
    }

    fn label_cow(&self) -> Cow<'a, str> {
        match self {
            Name::Literal(label) | Name::Compact(label) => label.clone(),
        }
    }
}

impl<'a> From<&'a str> for Name<'a> {
    fn from(label: &'a str) -> Self {
        Name::Literal(Cow::Borrowed(label))
    }
}

impl From<String> for Name<'_> {
    fn from(label: String) -> Self {
        Name::Literal(Cow::Owned(label))
    }
}

impl<'a> From<Cow<'a, str>> for Name<'a> {
    fn from(label: Cow<'a, str>) -> Self {
        Name::Literal(label)
    }
}

/// A resolved name: label plus (possibly empty) description fragment.
pub(crate) struct DisplayName<'a> {
    label: Cow<'a, str>,
    desc: Stylized<'a>,
}

impl<'a> DisplayName<'a> {
    /// Renders as `Label` or `Label[description]`.
    pub(crate) fn into_stylized(self) -> Stylized<'a> {
        let label = Stylized::styled(self.label, StyleName::Ident);
        if self.desc.is_empty() {
            label
        } else {
            crate::fragment![label, "[", self.desc, "]"]
        }
    }
}

/// The shared naming policy, computed once per render.
///
/// Returns `None` when the name should be elided entirely: compact, nested,
/// and no description present.
pub(crate) fn compute_display_name<'a>(
    name: &Name<'a>,
    description: Option<&Description<'a>>,
    f: &Toolkit<'_>,
) -> Option<DisplayName<'a>> {
    match description {
        Some(description) if description.is_present() => Some(DisplayName {
            label: name.label_cow(),
            desc: description.to_stylized(f),
        }),
        _ if name.is_compact() && f.is_nested() => None,
        _ => Some(DisplayName {
            label: name.label_cow(),
            desc: fragment(vec![]),
        }),
    }
}
