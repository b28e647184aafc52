//! Observable text cell shared between a display and whatever renders it

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Debug, Default)]
struct Inner {
    value: RefCell<String>,
    version: Cell<u64>,
}

/// A bound text value, cloned handles observe the same contents.
///
/// This is the adapter between a controller and a display widget: the
/// controller may write through the cell directly, and the widget reads from
/// it when it redraws. [`TextVariable::version`] increases on every write so a
/// renderer can tell whether anything changed since it last looked.
#[derive(Clone, Default)]
pub struct TextVariable {
    inner: Rc<Inner>,
}

impl TextVariable {
    /// Creates an empty variable
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a variable holding `value`
    #[must_use]
    pub fn with_value(value: impl Into<String>) -> Self {
        let var = Self::new();
        *var.inner.value.borrow_mut() = value.into();
        var
    }

    /// Returns a copy of the current value
    #[must_use]
    pub fn get(&self) -> String {
        self.inner.value.borrow().clone()
    }

    /// Calls `f` with the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&str) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Replaces the current value
    pub fn set(&self, value: impl Into<String>) {
        *self.inner.value.borrow_mut() = value.into();
        self.inner.version.set(self.inner.version.get() + 1);
    }

    /// Number of writes since creation
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    /// Length of the current value in characters
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.with(|v| v.chars().count())
    }

    /// True if both handles point at the same cell
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for TextVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextVariable")
            .field("value", &*self.inner.value.borrow())
            .field("version", &self.inner.version.get())
            .finish()
    }
}
