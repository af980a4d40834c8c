//! Stylized nodes: the formatting-intent algebra behind every display.
//!
//! A [`Stylized`] tree says *what* should appear — styled text runs,
//! concatenations, deferred inspections of nested values, and spliced
//! wrappers — without deciding layout. Layout belongs to the
//! [`Printer`](crate::Printer) on the other side of the boundary; the single
//! recursive [`Stylized::stringify`] pass is the only place the two meet.
//!
//! # Delimiter splicing
//!
//! The printer renders containers with its own brackets and indentation
//! (`"[ 1, 2 ]"`, or a multi-line form like `"[\n  1,\n  2\n]"`). A splice
//! node with replacement delimiters reuses those layout decisions while
//! presenting different outer delimiters: it strips one leading run matching
//! `{` or `[` plus trailing spaces, and one trailing run of leading spaces
//! plus `}`, `]` or `)`, then affixes its own open/close nodes around the
//! untouched middle. Spaces only — a newline after the opening bracket is
//! part of the layout and must survive. If either run fails to match (a
//! primitive rendered without brackets, say), that side passes through
//! unmodified; splicing never errors and never drops interior content.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::printer::Printer;
use crate::style::StyleName;
use crate::tree::Nesting;
use crate::value::Value;

static OPEN_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[{\[] *").unwrap());
static CLOSE_DELIMITER: Lazy<Regex> = Lazy::new(|| Regex::new(r" *[}\])]$").unwrap());

/// Everything [`Stylized::stringify`] needs from the caller: the nesting
/// context for this render stack and the printer boundary object.
pub struct StringifyOptions<'p> {
    /// The nesting context owned by the top-level print call.
    pub nesting: &'p Nesting,
    /// The host printer that lays out values and applies styles.
    pub printer: &'p dyn Printer,
}

/// An immutable node of formatting intent.
///
/// Nodes are plain values: a fragment owns its children outright, and a
/// deferred-inspection node borrows the value it will hand to the printer.
/// [`Stylized::is_empty`] is computable without touching the printer, so
/// callers can decide whether surrounding punctuation is warranted before
/// paying for a full render.
#[derive(Debug, Clone)]
pub enum Stylized<'a> {
    /// A literal text run with an optional semantic style.
    Text {
        /// The literal text.
        text: Cow<'a, str>,
        /// Semantic style, or `None` for unstyled text.
        style: Option<StyleName>,
    },
    /// An ordered concatenation; children render back-to-back with no
    /// implicit separator.
    Fragment {
        /// The child nodes, in render order.
        children: Vec<Stylized<'a>>,
    },
    /// A wrapper that re-delimits its child's rendering.
    Splice {
        /// The wrapped node.
        child: Box<Stylized<'a>>,
        /// Replacement `(open, close)` delimiters, or `None` for plain
        /// pass-through grouping.
        delimiters: Option<Box<(Stylized<'a>, Stylized<'a>)>>,
    },
    /// A value rendered by the printer when the tree is stringified.
    ///
    /// The nesting flag is captured at construction time and re-installed
    /// for the duration of the printer call.
    Inspect {
        /// The value handed to the printer.
        value: Value<'a>,
        /// The nesting state this value should render under.
        nested: bool,
    },
}

impl<'a> Stylized<'a> {
    /// An unstyled text node.
    pub fn text(text: impl Into<Cow<'a, str>>) -> Self {
        Stylized::Text {
            text: text.into(),
            style: None,
        }
    }

    /// A text node carrying a semantic style.
    pub fn styled(text: impl Into<Cow<'a, str>>, style: StyleName) -> Self {
        Stylized::Text {
            text: text.into(),
            style: Some(style),
        }
    }

    /// A pass-through grouping: renders exactly like `child`.
    pub fn splice(child: Stylized<'a>) -> Self {
        Stylized::Splice {
            child: Box::new(child),
            delimiters: None,
        }
    }

    /// A splice substituting the child's outer delimiters with `open` and
    /// `close` (see the module docs for the matching rules).
    pub fn splice_with(child: Stylized<'a>, open: Stylized<'a>, close: Stylized<'a>) -> Self {
        Stylized::Splice {
            child: Box::new(child),
            delimiters: Some(Box::new((open, close))),
        }
    }

    /// A deferred inspection of `value`, capturing `nested` now.
    pub fn inspect(value: impl Into<Value<'a>>, nested: bool) -> Self {
        Stylized::Inspect {
            value: value.into(),
            nested,
        }
    }

    /// Whether rendering this node without styling would produce an empty
    /// string.
    ///
    /// Deferred inspections report `false`: their output is unknown until
    /// the printer runs. A splice carrying non-empty replacement delimiters
    /// is non-empty even around an empty child, since the delimiters
    /// themselves will render.
    pub fn is_empty(&self) -> bool {
        match self {
            Stylized::Text { text, .. } => text.is_empty(),
            Stylized::Fragment { children } => children.iter().all(Stylized::is_empty),
            Stylized::Splice { child, delimiters } => {
                child.is_empty()
                    && delimiters
                        .as_ref()
                        .map_or(true, |d| d.0.is_empty() && d.1.is_empty())
            }
            Stylized::Inspect { .. } => false,
        }
    }

    /// The recursive render pass.
    ///
    /// This is the only operation that crosses the printer boundary; all
    /// other node operations are pure.
    pub fn stringify(&self, options: &StringifyOptions<'_>) -> String {
        match self {
            Stylized::Text { text, style } => match style {
                Some(style) => options.printer.stylize(text, style.printer_style()),
                None => text.clone().into_owned(),
            },
            Stylized::Fragment { children } => children
                .iter()
                .map(|child| child.stringify(options))
                .collect(),
            Stylized::Splice { child, delimiters } => {
                let rendered = child.stringify(options);
                match delimiters {
                    None => rendered,
                    Some(d) => splice_delimiters(&rendered, &d.0, &d.1, options),
                }
            }
            Stylized::Inspect { value, nested } => {
                let _guard = options.nesting.set(*nested);
                options.printer.inspect(value, options.nesting)
            }
        }
    }
}

/// Strips the child's outer delimiter runs and affixes the replacements.
///
/// Each side is handled independently; a side with no match keeps its text.
/// Degenerate overlap (the two runs covering the same characters, as in
/// `"[ ]"`) clamps to an empty middle rather than panicking.
fn splice_delimiters(
    rendered: &str,
    open: &Stylized<'_>,
    close: &Stylized<'_>,
    options: &StringifyOptions<'_>,
) -> String {
    let start = OPEN_DELIMITER.find(rendered).map_or(0, |m| m.end());
    let end = CLOSE_DELIMITER
        .find(rendered)
        .map_or(rendered.len(), |m| m.start());
    let middle = &rendered[start..end.max(start)];

    let mut out = open.stringify(options);
    out.push_str(middle);
    out.push_str(&close.stringify(options));
    out
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::style::PrinterStyle;

    /// Minimal printer: renders values naively and wraps styled text in
    /// `<category:...>` markers so tests can see styling decisions.
    struct StubPrinter {
        saw_nested: Cell<Option<bool>>,
    }

    impl StubPrinter {
        fn new() -> Self {
            Self {
                saw_nested: Cell::new(None),
            }
        }
    }

    impl Printer for StubPrinter {
        fn inspect(&self, value: &Value<'_>, nesting: &Nesting) -> String {
            self.saw_nested.set(Some(nesting.is_nested()));
            match value {
                Value::Str(s) => format!("'{s}'"),
                Value::Int(i) => i.to_string(),
                other => format!("{other:?}"),
            }
        }

        fn stylize(&self, text: &str, style: PrinterStyle) -> String {
            format!("<{}:{}>", style.as_str(), text)
        }
    }

    fn render(node: &Stylized<'_>) -> String {
        let nesting = Nesting::new();
        let printer = StubPrinter::new();
        node.stringify(&StringifyOptions {
            nesting: &nesting,
            printer: &printer,
        })
    }

    #[test]
    fn test_text_is_empty_only_when_blank() {
        assert!(Stylized::text("").is_empty());
        assert!(Stylized::styled("", StyleName::Ident).is_empty());
        assert!(!Stylized::text("x").is_empty());
    }

    #[test]
    fn test_fragment_is_empty_when_all_children_are() {
        let empty = Stylized::Fragment {
            children: vec![Stylized::text(""), Stylized::text("")],
        };
        assert!(empty.is_empty());
        assert!(Stylized::Fragment { children: vec![] }.is_empty());

        let nonempty = Stylized::Fragment {
            children: vec![Stylized::text(""), Stylized::text("x")],
        };
        assert!(!nonempty.is_empty());
    }

    #[test]
    fn test_inspect_is_never_empty() {
        assert!(!Stylized::inspect(1i64, false).is_empty());
    }

    #[test]
    fn test_splice_emptiness_accounts_for_delimiters() {
        assert!(Stylized::splice(Stylized::text("")).is_empty());
        let delimited = Stylized::splice_with(
            Stylized::text(""),
            Stylized::text("("),
            Stylized::text(")"),
        );
        assert!(!delimited.is_empty());
        let blank_delims = Stylized::splice_with(
            Stylized::text(""),
            Stylized::text(""),
            Stylized::text(""),
        );
        assert!(blank_delims.is_empty());
    }

    #[test]
    fn test_unstyled_text_bypasses_the_printer() {
        assert_eq!(render(&Stylized::text("plain")), "plain");
    }

    #[test]
    fn test_styled_text_goes_through_stylize() {
        let node = Stylized::styled("Point", StyleName::Ident);
        assert_eq!(render(&node), "<special:Point>");
    }

    #[test]
    fn test_fragment_concatenates_without_separator() {
        let node = Stylized::Fragment {
            children: vec![
                Stylized::text("a"),
                Stylized::text("b"),
                Stylized::text("c"),
            ],
        };
        assert_eq!(render(&node), "abc");
    }

    #[test]
    fn test_splice_without_delimiters_passes_through() {
        let node = Stylized::splice(Stylized::text("[ 1, 2 ]"));
        assert_eq!(render(&node), "[ 1, 2 ]");
    }

    #[test]
    fn test_splice_replaces_single_line_brackets() {
        let node = Stylized::splice_with(
            Stylized::text("[ 1, 2 ]"),
            Stylized::text("("),
            Stylized::text(")"),
        );
        assert_eq!(render(&node), "(1, 2)");
    }

    #[test]
    fn test_splice_replaces_braces_too() {
        let node = Stylized::splice_with(
            Stylized::text("{ a: 1 }"),
            Stylized::text("<"),
            Stylized::text(">"),
        );
        assert_eq!(render(&node), "<a: 1>");
    }

    #[test]
    fn test_splice_preserves_multiline_interior() {
        let node = Stylized::splice_with(
            Stylized::text("[\n  1,\n  2\n]"),
            Stylized::text("("),
            Stylized::text(")"),
        );
        assert_eq!(render(&node), "(\n  1,\n  2\n)");
    }

    #[test]
    fn test_splice_mismatch_affixes_without_stripping() {
        let node = Stylized::splice_with(
            Stylized::text("'world'"),
            Stylized::text("("),
            Stylized::text(")"),
        );
        assert_eq!(render(&node), "('world')");
    }

    #[test]
    fn test_splice_strips_each_side_independently() {
        let open_only = Stylized::splice_with(
            Stylized::text("[ tail"),
            Stylized::text("("),
            Stylized::text(")"),
        );
        assert_eq!(render(&open_only), "(tail)");

        let close_only = Stylized::splice_with(
            Stylized::text("head ]"),
            Stylized::text("("),
            Stylized::text(")"),
        );
        assert_eq!(render(&close_only), "(head)");
    }

    #[test]
    fn test_splice_handles_degenerate_overlap() {
        let node = Stylized::splice_with(
            Stylized::text("[ ]"),
            Stylized::text("("),
            Stylized::text(")"),
        );
        assert_eq!(render(&node), "()");
    }

    #[test]
    fn test_empty_array_splices_to_empty_middle() {
        let node = Stylized::splice_with(
            Stylized::text("[]"),
            Stylized::text("("),
            Stylized::text(")"),
        );
        assert_eq!(render(&node), "()");
    }

    #[test]
    fn test_inspect_installs_captured_flag() {
        let nesting = Nesting::new();
        let printer = StubPrinter::new();
        let options = StringifyOptions {
            nesting: &nesting,
            printer: &printer,
        };

        Stylized::inspect("world", true).stringify(&options);
        assert_eq!(printer.saw_nested.get(), Some(true));
        assert!(!nesting.is_nested());

        let _outer = nesting.enter();
        Stylized::inspect(1i64, false).stringify(&options);
        assert_eq!(printer.saw_nested.get(), Some(false));
        assert!(nesting.is_nested());
    }

    #[test]
    fn test_inspect_returns_printer_text_verbatim() {
        assert_eq!(render(&Stylized::inspect("world", true)), "'world'");
    }
}
