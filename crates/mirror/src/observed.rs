use std::cell::{Ref, RefCell};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Marker implemented by every generated observable mirror.
///
/// Observable mirrors have reference semantics: all of their fields are
/// [`Observed`] cells, so they are mutated through a shared reference and
/// every change is reported to the cell's observers.
pub trait Observable {}

type Observer<T> = Box<dyn Fn(&T)>;

/// A mutable, observable field of an observable mirror.
///
/// Observers are called after every change, with the new value. An observer
/// may register further observers on the cell it observes; those are called
/// from the next change on. An observer must not write to the cell it
/// observes.
///
/// Equality and hashing use the current value. Changing the value of a cell
/// while its mirror is a member of a `HashSet` or a key of a `HashMap` is a
/// logic error, as it is for any type with interior mutability.
pub struct Observed<T> {
    value: RefCell<T>,
    observers: RefCell<Vec<Observer<T>>>,
}

impl<T> Observed<T> {
    pub fn new(value: T) -> Observed<T> {
        Observed {
            value: RefCell::new(value),
            observers: RefCell::new(Vec::new()),
        }
    }

    /// Borrows the current value.
    ///
    /// # Panics
    ///
    /// Panics if the value is being updated.
    pub fn get(&self) -> Ref<'_, T> {
        self.value.borrow()
    }

    /// Calls `f` with the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.value.borrow())
    }

    /// Replaces the value, returning the previous one.
    pub fn set(&self, value: T) -> T {
        let prev = self.value.replace(value);
        self.notify();
        prev
    }

    /// Modifies the value in place.
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let ret = f(&mut self.value.borrow_mut());
        self.notify();
        ret
    }

    /// Registers `observer` to be called after every change.
    pub fn observe(&self, observer: impl Fn(&T) + 'static) {
        self.observers.borrow_mut().push(Box::new(observer));
    }

    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }

    fn notify(&self) {
        // Taken out so that observers can call `observe` on this cell
        let mut observers = self.observers.take();

        {
            let value = self.value.borrow();

            for observer in &observers {
                observer(&value);
            }
        }

        let mut registered = self.observers.borrow_mut();
        observers.append(&mut registered);
        *registered = observers;
    }
}

impl<T: Clone> Observed<T> {
    /// Returns a copy of the current value.
    pub fn cloned(&self) -> T {
        self.value.borrow().clone()
    }
}

impl<T: Default> Default for Observed<T> {
    fn default() -> Observed<T> {
        Observed::new(T::default())
    }
}

impl<T: PartialEq> PartialEq for Observed<T> {
    fn eq(&self, other: &Observed<T>) -> bool {
        *self.value.borrow() == *other.value.borrow()
    }
}

impl<T: Eq> Eq for Observed<T> {}

impl<T: Hash> Hash for Observed<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.borrow().hash(state);
    }
}

impl<T: fmt::Debug> fmt::Debug for Observed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Observed").field(&*self.value.borrow()).finish()
    }
}
