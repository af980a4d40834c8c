//! Explicit nesting context for render calls.
//!
//! A value rendered as a field or element inside another displayed value is
//! *nested*; compact display names use this to decide whether to elide
//! themselves. The context is a single boolean owned by the top-level print
//! call and threaded by reference through every render, so independent
//! renders can never observe each other's state.

use std::cell::Cell;

/// The nesting flag for one render call stack.
///
/// Create one per top-level print and pass it by reference everywhere.
/// Mutation goes through guards ([`Nesting::enter`], [`Nesting::set`]) that
/// restore the previous value when dropped, including during panic
/// unwinding, so a failing nested render never corrupts the flag for a
/// sibling render.
///
/// # Example
///
/// ```rust
/// use telltale::Nesting;
///
/// let nesting = Nesting::new();
/// assert!(!nesting.is_nested());
/// {
///     let _guard = nesting.enter();
///     assert!(nesting.is_nested());
/// }
/// assert!(!nesting.is_nested());
/// ```
#[derive(Debug, Default)]
pub struct Nesting {
    nested: Cell<bool>,
}

impl Nesting {
    /// Creates a fresh, non-nested context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the current render position is inside another displayed value.
    pub fn is_nested(&self) -> bool {
        self.nested.get()
    }

    /// Marks the context as nested until the guard is dropped.
    pub fn enter(&self) -> NestGuard<'_> {
        self.set(true)
    }

    /// Installs an explicit flag value until the guard is dropped.
    ///
    /// Deferred-inspection nodes use this to re-establish the nesting state
    /// captured at construction time while the printer renders their value.
    pub fn set(&self, nested: bool) -> NestGuard<'_> {
        let previous = self.nested.replace(nested);
        NestGuard {
            nested: &self.nested,
            previous,
        }
    }
}

/// Guard restoring the previous nesting flag on drop.
#[derive(Debug)]
pub struct NestGuard<'a> {
    nested: &'a Cell<bool>,
    previous: bool,
}

impl Drop for NestGuard<'_> {
    fn drop(&mut self) {
        self.nested.set(self.previous);
    }
}
