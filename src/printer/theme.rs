//! Theme mapping printer categories onto concrete console styles.

use std::collections::HashMap;

use console::Style;

use crate::style::PrinterStyle;

/// A mapping from [`PrinterStyle`] categories to [`console::Style`] values.
///
/// The default palette follows the conventions of classic inspector output:
/// special identifiers cyan, modules underlined, numbers yellow, subtle text
/// dim, null bold, strings green, patterns red, dates magenta. Individual
/// categories can be overridden fluently.
///
/// # Example
///
/// ```rust
/// use console::Style;
/// use telltale::{PrinterStyle, Theme};
///
/// let theme = Theme::new()
///     .set(PrinterStyle::Special, Style::new().blue().bold())
///     .set(PrinterStyle::String, Style::new().cyan());
/// let _ = theme.style(PrinterStyle::Special);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Theme {
    overrides: HashMap<PrinterStyle, Style>,
}

impl Theme {
    /// Creates a theme with the default palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides one category, returning the updated theme for chaining.
    pub fn set(mut self, category: PrinterStyle, style: Style) -> Self {
        self.overrides.insert(category, style);
        self
    }

    /// The concrete style for a category.
    pub fn style(&self, category: PrinterStyle) -> Style {
        self.overrides
            .get(&category)
            .cloned()
            .unwrap_or_else(|| default_style(category))
    }
}

fn default_style(category: PrinterStyle) -> Style {
    match category {
        PrinterStyle::Special => Style::new().cyan(),
        PrinterStyle::Module => Style::new().underlined(),
        PrinterStyle::Number => Style::new().yellow(),
        PrinterStyle::Undefined => Style::new().dim(),
        PrinterStyle::Null => Style::new().bold(),
        PrinterStyle::String => Style::new().green(),
        PrinterStyle::Regexp => Style::new().red(),
        PrinterStyle::Date => Style::new().magenta(),
    }
}
