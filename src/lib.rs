//! # telltale
//!
//! Composable stylized value display for diagnostic terminal output.
//!
//! A value's owner declares how it should look when printed — named
//! structures, tuples, unit labels, descriptions, annotations, nested
//! values — instead of hand-building strings. Builders assemble an
//! immutable [`Stylized`] tree of formatting intent; a [`Printer`] turns it
//! into text, owning every layout and color decision along the way.
//!
//! ## Quick Start
//!
//! ```rust
//! use telltale::{display_struct, fields, Display, Inspect, TextPrinter};
//!
//! struct Point {
//!     x: i64,
//!     y: i64,
//! }
//!
//! impl Inspect for Point {
//!     fn display(&self) -> Display<'_> {
//!         display_struct("Point", fields! { x: self.x, y: self.y })
//!     }
//! }
//!
//! let printer = TextPrinter::plain();
//! assert_eq!(printer.print(&Point { x: 1, y: 2 }), "Point { x: 1, y: 2 }");
//! ```
//!
//! ## Core Concepts
//!
//! - **[`Inspect`]**: the extension point. Implement it (or use
//!   [`inspectable!`]) to declare a value displayable; the hook returns a
//!   [`Display`] built from one of the shape constructors.
//! - **[`display_struct`], [`display_tuple`], [`display_unit`],
//!   [`display`]**: the four shapes. Structs delegate field layout to the
//!   printer; tuples splice the printer's sequence layout into parentheses;
//!   units are bare labels; freeform callbacks build arbitrary trees with a
//!   [`Toolkit`].
//! - **[`Stylized`]**: the node algebra — styled text, fragments, deferred
//!   inspections, and delimiter splices. Emptiness is knowable without
//!   rendering; only [`Stylized::stringify`] crosses the printer boundary.
//! - **[`Nesting`]**: the explicit context that lets a compact-named shape
//!   elide its label when it renders inside another display. Scoped guards
//!   restore it on every exit path.
//! - **[`StyleName`]**: the semantic style vocabulary, mapped onto the
//!   printer's native categories and themed there.
//! - **[`TextPrinter`]**: the reference printer — width-aware wrapping,
//!   quote fallback, [`Theme`]-driven ANSI styling via `console`.
//!
//! ## Nested display
//!
//! Deferred values re-enter the printer, which re-enters any custom hooks
//! it finds, so nested displays inherit the host's line-wrapping for free:
//!
//! ```rust
//! use telltale::{display_tuple, Display, Inspect, PrintOptions, TextPrinter};
//! use telltale::ColorChoice;
//!
//! struct Pair(i64, i64);
//!
//! impl Inspect for Pair {
//!     fn display(&self) -> Display<'_> {
//!         display_tuple("Pair", vec![self.0, self.1])
//!     }
//! }
//!
//! struct Span {
//!     ends: Vec<Pair>,
//! }
//!
//! impl Inspect for Span {
//!     fn display(&self) -> Display<'_> {
//!         display_tuple("Span", self.ends.iter().map(Inspect::as_value).collect::<Vec<_>>())
//!     }
//! }
//!
//! let span = Span { ends: vec![Pair(1, 2), Pair(3, 4)] };
//! let printer = TextPrinter::new(PrintOptions::default().color(ColorChoice::Never));
//! assert_eq!(printer.print(&span), "Span(Pair(1, 2), Pair(3, 4))");
//! ```

mod display;
mod fragment;
mod printer;
mod style;
mod tree;
mod value;

pub use display::{
    display, display_spec, display_struct, display_tuple, display_unit, Annotation, Description,
    Display, DisplayError, DisplaySpec, FormatFn, Inspect, Name, Toolkit,
};
pub use fragment::{fragment, join, Part};
pub use printer::{ColorChoice, PrintOptions, Printer, TextPrinter, Theme};
pub use style::{PrinterStyle, StyleName, STYLE_NAMES};
pub use tree::{NestGuard, Nesting, StringifyOptions, Stylized};
pub use value::Value;

/// Prints a displayable value with a default [`TextPrinter`].
///
/// Color follows the terminal's capability; build a printer explicitly for
/// anything else.
pub fn inspect(value: &dyn Inspect) -> String {
    TextPrinter::default().print(value)
}
