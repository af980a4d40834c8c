//! Display builders and the custom-inspection extension point.
//!
//! A value opts into stylized display by implementing [`Inspect`]: its hook
//! returns a [`Display`] built with one of the shape constructors
//! ([`display_struct`], [`display_tuple`], [`display_unit`], or the freeform
//! [`display`]/[`display_spec`]). The printer recognizes the hook wherever a
//! [`Value::Custom`](crate::Value::Custom) appears and defers to it.

mod builders;
mod name;
mod options;

pub use builders::{
    display, display_spec, display_struct, display_tuple, display_unit, Display, FormatFn, Toolkit,
};
pub use name::Name;
pub use options::{Annotation, Description, DisplayError, DisplaySpec};

use crate::value::Value;

/// The custom-inspection extension point.
///
/// Implementing this trait declares how a value should look when printed.
/// The hook runs lazily, at render time, so the display can react to the
/// nesting context it lands in.
///
/// The [`inspectable!`](crate::inspectable) macro writes the impl
/// declaratively for simple cases.
pub trait Inspect {
    /// Builds this value's display configuration.
    fn display(&self) -> Display<'_>;

    /// Borrows this value into a [`Value`] tree, to embed it in the fields
    /// or elements of another display.
    fn as_value(&self) -> Value<'_>
    where
        Self: Sized,
    {
        Value::Custom(self)
    }
}

/// Declaratively wires a display builder to a type.
///
/// Expands to an [`Inspect`] impl whose hook binds the value to the given
/// identifier and evaluates the body.
///
/// # Example
///
/// ```rust
/// use telltale::{display_tuple, inspectable, TextPrinter};
///
/// struct Id(u64);
///
/// inspectable!(Id => |id| display_tuple("Id", id.0));
///
/// assert_eq!(TextPrinter::plain().print(&Id(7)), "Id(7)");
/// ```
#[macro_export]
macro_rules! inspectable {
    ($ty:ty => |$this:ident| $body:expr) => {
        impl $crate::Inspect for $ty {
            fn display(&self) -> $crate::Display<'_> {
                let $this = self;
                $body
            }
        }
    };
}
