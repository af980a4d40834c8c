//! The four shape constructors and the lazy display object they build.

use std::borrow::Cow;

use crate::display::name::{compute_display_name, DisplayName};
use crate::display::{Annotation, Description, DisplayError, DisplaySpec, Name};
use crate::fragment::{fragment, Part};
use crate::printer::Printer;
use crate::style::StyleName;
use crate::tree::{Nesting, StringifyOptions, Stylized};
use crate::value::Value;

/// A freeform body callback: given the toolkit, produce a tree.
pub type FormatFn<'a> = Box<dyn Fn(&Toolkit<'_>) -> Stylized<'a> + 'a>;

enum Body<'a> {
    /// A field mapping, laid out by the printer with its native braces.
    Struct(Value<'a>),
    /// A sequence, laid out by the printer and re-delimited as parentheses.
    Tuple(Value<'a>),
    /// A freeform callback.
    Format(FormatFn<'a>),
}

/// A display configuration, returned by a value's [`Inspect`] hook.
///
/// Rendering is lazy: nothing is stringified — and the printer is never
/// called — until [`Display::render`] runs, at which point the current
/// nesting context decides compact-name elision.
///
/// [`Inspect`]: crate::Inspect
pub struct Display<'a> {
    name: Option<Name<'a>>,
    body: Option<Body<'a>>,
    description: Option<Description<'a>>,
    annotation: Option<Annotation<'a>>,
}

/// Displays a named structure with a field mapping.
///
/// The field layout — braces, line wrapping, indentation — is fully
/// delegated to the printer. An annotation renders after the closing brace.
///
/// # Example
///
/// ```rust
/// use telltale::{display_struct, fields, Nesting, TextPrinter};
///
/// let display = display_struct("Point", fields! { x: 1, y: 2 });
/// let printer = TextPrinter::plain();
/// assert_eq!(display.render(&Nesting::new(), &printer), "Point { x: 1, y: 2 }");
/// ```
pub fn display_struct<'a>(
    name: impl Into<Name<'a>>,
    fields: impl Into<Value<'a>>,
) -> Display<'a> {
    Display {
        name: Some(name.into()),
        body: Some(Body::Struct(fields.into())),
        description: None,
        annotation: None,
    }
}

/// Displays a named tuple.
///
/// The elements are laid out by the printer as a sequence, and the printer's
/// brackets are spliced into parentheses, so the tuple inherits the
/// printer's line-wrapping decisions. A single non-sequence value is treated
/// as a one-element tuple. An annotation renders inside the closing paren.
///
/// # Example
///
/// ```rust
/// use telltale::{display_tuple, Nesting, TextPrinter};
///
/// let display = display_tuple("Hello", "world");
/// let printer = TextPrinter::plain();
/// assert_eq!(display.render(&Nesting::new(), &printer), "Hello('world')");
/// ```
pub fn display_tuple<'a>(name: impl Into<Name<'a>>, inner: impl Into<Value<'a>>) -> Display<'a> {
    let inner = inner.into();
    let elements = match inner {
        Value::Seq(_) => inner,
        other => Value::Seq(vec![other]),
    };
    Display {
        name: Some(name.into()),
        body: Some(Body::Tuple(elements)),
        description: None,
        annotation: None,
    }
}

/// Displays a label with no body and no delimiters.
///
/// Units support a description (`Name[description]`) but not an annotation:
/// annotations render inside a structure's delimiters, and a unit has no
/// inside. An annotation configured on a unit display is ignored.
///
/// # Example
///
/// ```rust
/// use telltale::{display_unit, Nesting, TextPrinter};
///
/// let display = display_unit("Sentinel").description("eof");
/// let printer = TextPrinter::plain();
/// assert_eq!(display.render(&Nesting::new(), &printer), "Sentinel[eof]");
/// ```
pub fn display_unit<'a>(name: impl Into<Name<'a>>) -> Display<'a> {
    Display {
        name: Some(name.into()),
        body: None,
        description: None,
        annotation: None,
    }
}

/// Displays through a freeform callback.
///
/// The callback receives a [`Toolkit`] and returns an arbitrary tree; no
/// name, description, or annotation wrapping is applied beyond what the
/// callback constructs (attach them with the fluent setters or
/// [`display_spec`] if wanted — a named freeform display renders as
/// `Name(body)`).
///
/// # Example
///
/// ```rust
/// use telltale::{display, fragment, Nesting, TextPrinter};
///
/// let redacted = display(|f| fragment![f.ident("Secret"), "(", f.annotation("elided"), ")"]);
/// let printer = TextPrinter::plain();
/// assert_eq!(redacted.render(&Nesting::new(), &printer), "Secret(elided)");
/// ```
pub fn display<'a, F>(format: F) -> Display<'a>
where
    F: Fn(&Toolkit<'_>) -> Stylized<'a> + 'a,
{
    Display {
        name: None,
        body: Some(Body::Format(Box::new(format))),
        description: None,
        annotation: None,
    }
}

/// Builds a freeform display from a tagged [`DisplaySpec`].
///
/// # Errors
///
/// Returns [`DisplayError::MissingContent`] when the spec provides neither a
/// name nor a format callback — there would be nothing to render.
pub fn display_spec(spec: DisplaySpec<'_>) -> Result<Display<'_>, DisplayError> {
    if spec.name.is_none() && spec.format.is_none() {
        return Err(DisplayError::MissingContent);
    }
    Ok(Display {
        name: spec.name,
        body: spec.format.map(Body::Format),
        description: spec.description,
        annotation: spec.annotation,
    })
}

impl<'a> Display<'a> {
    /// Attaches a description, rendered as `Name[description]`.
    pub fn description(mut self, description: impl Into<Description<'a>>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Attaches an annotation, rendered after the body.
    ///
    /// Ignored by body-less displays (see [`display_unit`]).
    pub fn annotation(mut self, annotation: impl Into<Annotation<'a>>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Assembles the tree under the current nesting context and stringifies
    /// it through the printer.
    pub fn render(&self, nesting: &Nesting, printer: &dyn Printer) -> String {
        let toolkit = Toolkit::new(nesting);
        let tree = self.to_stylized(&toolkit);
        tree.stringify(&StringifyOptions { nesting, printer })
    }

    fn to_stylized(&self, f: &Toolkit<'_>) -> Stylized<'a> {
        let name = self
            .name
            .as_ref()
            .and_then(|name| compute_display_name(name, self.description.as_ref(), f))
            .map(DisplayName::into_stylized);

        match &self.body {
            None => name.unwrap_or_else(|| fragment(vec![])),
            Some(Body::Struct(fields)) => {
                let mut parts: Vec<Part<'a>> = Vec::new();
                if let Some(name) = name {
                    parts.push(name.into());
                    parts.push(" ".into());
                }
                parts.push(f.inspect(fields.clone()).into());
                if let Some(annotation) = &self.annotation {
                    parts.push(annotation.to_stylized_spaced(f).into());
                }
                fragment(parts)
            }
            Some(Body::Tuple(elements)) => {
                let body = f.inspect(elements.clone());
                let open = fragment(vec!["(".into()]);
                let close = match &self.annotation {
                    Some(annotation) => {
                        fragment(vec![annotation.to_stylized_spaced(f).into(), ")".into()])
                    }
                    None => fragment(vec![")".into()]),
                };
                fragment(vec![
                    Part::from(name),
                    Stylized::splice_with(body, open, close).into(),
                ])
            }
            Some(Body::Format(format)) => {
                let annotation = self.annotation.as_ref().map(|a| a.to_stylized_spaced(f));
                let inner = fragment(vec![format(f).into(), Part::from(annotation)]);
                match name {
                    None => inner,
                    Some(name) if inner.is_empty() => name,
                    Some(name) => fragment(vec![name.into(), "(".into(), inner.into(), ")".into()]),
                }
            }
        }
    }
}

/// The helper handed to freeform callbacks.
///
/// Provides label formatting under the elision policy, a scoped [`nest`]
/// operation, per-style text builders, and a recursive [`inspect`] helper.
///
/// [`nest`]: Toolkit::nest
/// [`inspect`]: Toolkit::inspect
pub struct Toolkit<'env> {
    nesting: &'env Nesting,
}

impl<'env> Toolkit<'env> {
    pub(crate) fn new(nesting: &'env Nesting) -> Self {
        Self { nesting }
    }

    /// Whether the current render position is nested.
    pub fn is_nested(&self) -> bool {
        self.nesting.is_nested()
    }

    /// Evaluates `format` under a nested context, restoring the previous
    /// state afterward — on panic too.
    pub fn nest<'a>(&self, format: impl FnOnce(&Toolkit<'env>) -> Stylized<'a>) -> Stylized<'a> {
        let _guard = self.nesting.enter();
        format(self)
    }

    /// Defers a value to the printer; the value renders as nested.
    pub fn inspect<'a>(&self, value: impl Into<Value<'a>>) -> Stylized<'a> {
        let value = value.into();
        self.nest(|f| Stylized::inspect(value, f.is_nested()))
    }

    /// Formats a name under the elision policy with the `ident` style.
    pub fn label<'a>(&self, name: impl Into<Name<'a>>) -> Stylized<'a> {
        self.label_styled(name, StyleName::Ident)
    }

    /// Formats a name under the elision policy with an explicit style.
    pub fn label_styled<'a>(&self, name: impl Into<Name<'a>>, style: StyleName) -> Stylized<'a> {
        match name.into() {
            Name::Literal(label) => Stylized::styled(label, style),
            Name::Compact(_) if self.is_nested() => fragment(vec![]),
            Name::Compact(label) => Stylized::styled(label, style),
        }
    }

    /// Styled text with an explicit semantic style.
    pub fn styled<'a>(&self, style: StyleName, text: impl Into<Cow<'a, str>>) -> Stylized<'a> {
        Stylized::styled(text, style)
    }

    /// `ident`-styled text (structure names).
    pub fn ident<'a>(&self, text: impl Into<Cow<'a, str>>) -> Stylized<'a> {
        Stylized::styled(text, StyleName::Ident)
    }

    /// `path`-styled text (physical locations).
    pub fn path<'a>(&self, text: impl Into<Cow<'a, str>>) -> Stylized<'a> {
        Stylized::styled(text, StyleName::Path)
    }

    /// `primitive`-styled text (wrapped numbers and booleans).
    pub fn primitive<'a>(&self, text: impl Into<Cow<'a, str>>) -> Stylized<'a> {
        Stylized::styled(text, StyleName::Primitive)
    }

    /// `annotation`-styled text (subtle decorations).
    pub fn annotation<'a>(&self, text: impl Into<Cow<'a, str>>) -> Stylized<'a> {
        Stylized::styled(text, StyleName::Annotation)
    }

    /// `punctuation`-styled text (subtle structural glue).
    pub fn punctuation<'a>(&self, text: impl Into<Cow<'a, str>>) -> Stylized<'a> {
        Stylized::styled(text, StyleName::Punctuation)
    }

    /// `plain`-styled text.
    pub fn plain<'a>(&self, text: impl Into<Cow<'a, str>>) -> Stylized<'a> {
        Stylized::styled(text, StyleName::Plain)
    }

    /// `literal`-styled text (wrapped strings).
    pub fn literal<'a>(&self, text: impl Into<Cow<'a, str>>) -> Stylized<'a> {
        Stylized::styled(text, StyleName::Literal)
    }

    /// `pattern`-styled text (regexps, globs).
    pub fn pattern<'a>(&self, text: impl Into<Cow<'a, str>>) -> Stylized<'a> {
        Stylized::styled(text, StyleName::Pattern)
    }

    /// `builtin`-styled text (dates and other built-ins).
    pub fn builtin<'a>(&self, text: impl Into<Cow<'a, str>>) -> Stylized<'a> {
        Stylized::styled(text, StyleName::Builtin)
    }

    /// `type`-styled text (type names).
    pub fn type_name<'a>(&self, text: impl Into<Cow<'a, str>>) -> Stylized<'a> {
        Stylized::styled(text, StyleName::Type)
    }
}
