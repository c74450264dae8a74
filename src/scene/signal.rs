use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

enum Source<T> {
    Value(T),
    Computed(Rc<dyn Fn() -> T>),
}

/// Shared, read-through value cell.
///
/// A signal holds either a plain value or a binding that is re-evaluated on every read, so
/// downstream consumers always observe the latest state of whatever the binding depends on.
/// Clones share the same cell. Signals are single-threaded by construction.
pub struct Signal<T>(Rc<RefCell<Source<T>>>);

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T: Clone + 'static> Signal<T> {
    /// Signal holding `value`.
    pub fn new(value: T) -> Self {
        Self(Rc::new(RefCell::new(Source::Value(value))))
    }

    /// Signal bound to `f`.
    pub fn computed(f: impl Fn() -> T + 'static) -> Self {
        Self(Rc::new(RefCell::new(Source::Computed(Rc::new(f)))))
    }

    /// Current value, evaluating the binding if there is one.
    pub fn get(&self) -> T {
        // Release the borrow before running the binding; it may read other signals.
        let binding = match &*self.0.borrow() {
            Source::Value(v) => return v.clone(),
            Source::Computed(f) => Rc::clone(f),
        };
        binding()
    }

    /// Replace the value (and drop any binding).
    pub fn set(&self, value: T) {
        *self.0.borrow_mut() = Source::Value(value);
    }

    /// Replace the value with a binding.
    pub fn bind(&self, f: impl Fn() -> T + 'static) {
        *self.0.borrow_mut() = Source::Computed(Rc::new(f));
    }

    /// Return `true` while the signal is driven by a binding.
    pub fn is_computed(&self) -> bool {
        matches!(&*self.0.borrow(), Source::Computed(_))
    }

    /// Return `true` when both handles share one cell.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: Clone + fmt::Debug + 'static> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signal").field(&self.get()).finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/signal.rs"]
mod tests;
