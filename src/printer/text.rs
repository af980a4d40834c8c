//! The reference host printer.
//!
//! [`TextPrinter`] owns the layout decisions the display core delegates:
//! container brackets, line wrapping against a width limit, indentation, and
//! quote selection for strings. Containers render single-line when the
//! single-line form is newline-free and fits the configured width
//! (measurement is ANSI-aware, so colored output wraps the same as plain);
//! otherwise one element per line, indented, with internal newlines
//! re-indented and the closing bracket on its own line.
//!
//! Container punctuation is never styled. Display wrappers recognize the
//! printer's brackets textually when splicing, and an escape code in front
//! of a `[` would break that contract.

use crate::display::Inspect;
use crate::printer::{ColorChoice, Printer, Theme};
use crate::style::PrinterStyle;
use crate::tree::Nesting;
use crate::value::Value;

/// Configuration for [`TextPrinter`].
#[derive(Debug, Clone)]
pub struct PrintOptions {
    /// Width limit that flips containers into their multi-line form.
    pub width: usize,
    /// Spaces of indentation per nesting level.
    pub indent: usize,
    /// Whether to apply ANSI styling.
    pub color: ColorChoice,
    /// The style palette.
    pub theme: Theme,
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            width: 80,
            indent: 2,
            color: ColorChoice::Auto,
            theme: Theme::new(),
        }
    }
}

impl PrintOptions {
    /// Sets the wrap width, returning the updated options for chaining.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Sets the per-level indentation.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the color mode.
    pub fn color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Sets the style palette.
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// The reference [`Printer`]: recursive value layout with width-aware
/// wrapping and themed ANSI styling.
///
/// # Example
///
/// ```rust
/// use telltale::{fields, TextPrinter, Value};
///
/// let printer = TextPrinter::plain();
/// let value = fields! { name: "telltale", major: 0 };
/// assert_eq!(printer.print_value(&value), "{ name: 'telltale', major: 0 }");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TextPrinter {
    options: PrintOptions,
}

impl TextPrinter {
    /// A printer with the given options.
    pub fn new(options: PrintOptions) -> Self {
        Self { options }
    }

    /// A printer that never styles its output.
    pub fn plain() -> Self {
        Self::new(PrintOptions::default().color(ColorChoice::Never))
    }

    /// The active options.
    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    /// Prints a displayable value, owning a fresh nesting context.
    pub fn print(&self, value: &dyn Inspect) -> String {
        value.display().render(&Nesting::new(), self)
    }

    /// Prints a raw value tree, owning a fresh nesting context.
    pub fn print_value(&self, value: &Value<'_>) -> String {
        self.render_value(value, &Nesting::new())
    }

    fn colors_enabled(&self) -> bool {
        match self.options.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => console::colors_enabled(),
        }
    }

    fn render_value(&self, value: &Value<'_>, nesting: &Nesting) -> String {
        match value {
            Value::Null => self.stylize("null", PrinterStyle::Null),
            Value::Bool(value) => self.stylize(&value.to_string(), PrinterStyle::Number),
            Value::Int(value) => self.stylize(&value.to_string(), PrinterStyle::Number),
            Value::Uint(value) => self.stylize(&value.to_string(), PrinterStyle::Number),
            Value::Float(value) => self.stylize(&value.to_string(), PrinterStyle::Number),
            Value::Str(value) => self.stylize(&quote(value), PrinterStyle::String),
            Value::Seq(items) => {
                let parts = items
                    .iter()
                    .map(|item| self.render_value(item, nesting))
                    .collect();
                self.wrap('[', ']', parts)
            }
            Value::Map(entries) => {
                let parts = entries
                    .iter()
                    .map(|(key, value)| format!("{key}: {}", self.render_value(value, nesting)))
                    .collect();
                self.wrap('{', '}', parts)
            }
            Value::Custom(value) => value.display().render(nesting, self),
        }
    }

    fn wrap(&self, open: char, close: char, parts: Vec<String>) -> String {
        if parts.is_empty() {
            return format!("{open}{close}");
        }

        let single = format!("{open} {} {close}", parts.join(", "));
        if !single.contains('\n') && console::measure_text_width(&single) <= self.options.width {
            return single;
        }

        let indent = " ".repeat(self.options.indent);
        let newline_indent = format!("\n{indent}");
        let body = parts
            .iter()
            .map(|part| format!("{indent}{}", part.replace('\n', &newline_indent)))
            .collect::<Vec<_>>()
            .join(",\n");
        format!("{open}\n{body}\n{close}")
    }
}

impl Printer for TextPrinter {
    fn inspect(&self, value: &Value<'_>, nesting: &Nesting) -> String {
        self.render_value(value, nesting)
    }

    fn stylize(&self, text: &str, style: PrinterStyle) -> String {
        if self.colors_enabled() {
            self.options
                .theme
                .style(style)
                .force_styling(true)
                .apply_to(text)
                .to_string()
        } else {
            text.to_string()
        }
    }
}

/// Quotes a string, preferring `'`, then `"`, then a backtick, then `'`
/// with escaping. Backslashes, newlines, and the chosen quote are escaped.
fn quote(text: &str) -> String {
    let quote = if !text.contains('\'') {
        '\''
    } else if !text.contains('"') {
        '"'
    } else if !text.contains('`') {
        '`'
    } else {
        '\''
    };

    let mut out = String::with_capacity(text.len() + 2);
    out.push(quote);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}
