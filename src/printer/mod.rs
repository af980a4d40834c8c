//! The printer boundary and the reference implementation behind it.
//!
//! The display core never lays out containers, wraps lines, or picks
//! colors; it calls a [`Printer`] for all of that. [`TextPrinter`] is the
//! reference implementation, but anything honoring the trait contract can
//! stand in — displays only depend on the boundary.

mod text;
mod theme;

pub use text::{PrintOptions, TextPrinter};
pub use theme::Theme;

use crate::style::PrinterStyle;
use crate::tree::Nesting;
use crate::value::Value;

/// The host printer the display core delegates to.
///
/// # Contract
///
/// - `inspect` lays out a value — including containers, with whatever
///   wrapping and indentation the printer chooses — and recurses into
///   [`Value::Custom`] entries through their hook, passing the shared
///   nesting context along unchanged. The printer must not toggle the
///   nesting flag itself; only deferred-inspection nodes install state.
/// - For delimiter splicing to work, container renderings should open with
///   `{` or `[` and close with `}`, `]`, or `)`; a printer with different
///   conventions degrades splices to pass-through rather than breaking
///   them.
/// - `stylize` applies a native style category to a literal string, or
///   returns it unchanged when styling is off (non-interactive output).
pub trait Printer {
    /// Renders an arbitrary value to text.
    fn inspect(&self, value: &Value<'_>, nesting: &Nesting) -> String;

    /// Applies a style category to a literal string.
    fn stylize(&self, text: &str, style: PrinterStyle) -> String;
}

/// When the reference printer applies ANSI styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorChoice {
    /// Follow the terminal's color capability.
    #[default]
    Auto,
    /// Always style.
    Always,
    /// Never style.
    Never,
}
