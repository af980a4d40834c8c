//! Semantic style names and their printer-category mapping.
//!
//! Callers pick styles from a small semantic vocabulary ([`StyleName`]) that
//! says what a piece of text *is* — an identifier, a literal, an annotation.
//! The printer boundary translates each name into one of its native
//! categories ([`PrinterStyle`]), and the printer's theme decides what a
//! category looks like. Code building display trees never touches native
//! categories directly.

use std::fmt;

/// Semantic style vocabulary for stylized text.
///
/// The set is fixed and enumerable (see [`STYLE_NAMES`]). Every name maps
/// onto a [`PrinterStyle`] via [`StyleName::printer_style`]; several names
/// share a category on purpose, so a theme can restyle a whole category at
/// once while call sites stay descriptive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleName {
    /// The name of a structure (a type name, function name, etc.).
    ///
    /// Maps to [`PrinterStyle::Special`], cyan in the default theme.
    Ident,
    /// The physical location of a value, such as a path.
    ///
    /// Maps to [`PrinterStyle::Module`], underlined in the default theme.
    Path,
    /// The inner value of a simple wrapper when it is a number or boolean.
    ///
    /// Maps to [`PrinterStyle::Number`], yellow in the default theme.
    Primitive,
    /// A label attached to a value (the `default=` in `default=1`).
    ///
    /// Maps to [`PrinterStyle::Undefined`], dim in the default theme.
    Label,
    /// An annotation meant to read more subtly than the value it decorates.
    ///
    /// Maps to [`PrinterStyle::Undefined`], dim in the default theme.
    Annotation,
    /// Punctuation rendered subtly to reduce visual noise.
    ///
    /// Maps to [`PrinterStyle::Undefined`], dim in the default theme.
    Punctuation,
    /// Plain value text.
    ///
    /// Maps to [`PrinterStyle::Null`].
    Plain,
    /// The inner value of a simple wrapper when it is a string.
    ///
    /// Maps to [`PrinterStyle::String`], green in the default theme.
    Literal,
    /// Pattern-like values: regular expressions, file globs.
    ///
    /// Maps to [`PrinterStyle::Regexp`], red in the default theme.
    Pattern,
    /// Built-in values such as dates.
    ///
    /// Maps to [`PrinterStyle::Date`], magenta in the default theme.
    Builtin,
    /// Type names, as distinct from runtime value identifiers.
    ///
    /// Maps to [`PrinterStyle::Date`], magenta in the default theme.
    Type,
}

/// Every semantic style name, in declaration order.
pub const STYLE_NAMES: [StyleName; 11] = [
    StyleName::Ident,
    StyleName::Path,
    StyleName::Primitive,
    StyleName::Label,
    StyleName::Annotation,
    StyleName::Punctuation,
    StyleName::Plain,
    StyleName::Literal,
    StyleName::Pattern,
    StyleName::Builtin,
    StyleName::Type,
];

impl StyleName {
    /// The lowercase name used in registries and diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            StyleName::Ident => "ident",
            StyleName::Path => "path",
            StyleName::Primitive => "primitive",
            StyleName::Label => "label",
            StyleName::Annotation => "annotation",
            StyleName::Punctuation => "punctuation",
            StyleName::Plain => "plain",
            StyleName::Literal => "literal",
            StyleName::Pattern => "pattern",
            StyleName::Builtin => "builtin",
            StyleName::Type => "type",
        }
    }

    /// Looks up a semantic name from its string form.
    pub fn from_name(name: &str) -> Option<StyleName> {
        STYLE_NAMES.into_iter().find(|s| s.as_str() == name)
    }

    /// The printer-native category this name maps onto.
    pub fn printer_style(self) -> PrinterStyle {
        match self {
            StyleName::Ident => PrinterStyle::Special,
            StyleName::Path => PrinterStyle::Module,
            StyleName::Primitive => PrinterStyle::Number,
            StyleName::Label => PrinterStyle::Undefined,
            StyleName::Annotation => PrinterStyle::Undefined,
            StyleName::Punctuation => PrinterStyle::Undefined,
            StyleName::Plain => PrinterStyle::Null,
            StyleName::Literal => PrinterStyle::String,
            StyleName::Pattern => PrinterStyle::Regexp,
            StyleName::Builtin => PrinterStyle::Date,
            StyleName::Type => PrinterStyle::Date,
        }
    }
}

impl fmt::Display for StyleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Native style categories of the printer boundary.
///
/// These are the categories a [`Printer`](crate::Printer) knows how to
/// colorize; the reference printer's [`Theme`](crate::Theme) maps each onto
/// a concrete [`console::Style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrinterStyle {
    /// Structure names and other special identifiers.
    Special,
    /// Module and path text.
    Module,
    /// Numeric and boolean primitives.
    Number,
    /// Subtle text: labels, annotations, quiet punctuation.
    Undefined,
    /// Plain value text.
    Null,
    /// String literals.
    String,
    /// Pattern-like values.
    Regexp,
    /// Built-in values such as dates.
    Date,
}

impl PrinterStyle {
    /// The lowercase name used in diagnostics.
    pub fn as_str(self) -> &'static str {
        match self {
            PrinterStyle::Special => "special",
            PrinterStyle::Module => "module",
            PrinterStyle::Number => "number",
            PrinterStyle::Undefined => "undefined",
            PrinterStyle::Null => "null",
            PrinterStyle::String => "string",
            PrinterStyle::Regexp => "regexp",
            PrinterStyle::Date => "date",
        }
    }
}

impl fmt::Display for PrinterStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
