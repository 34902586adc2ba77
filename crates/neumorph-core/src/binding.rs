//! State binding for reactive UI.
//!
//! The host owns state in a [`ReactiveCell`]; widgets reach it through a
//! [`Binding`], a getter/setter pair that never owns the value.
//!
//! # Example
//!
//! ```
//! use neumorph_core::{Binding, ReactiveCell};
//!
//! let cell = ReactiveCell::new(true);
//! let binding = Binding::from_cell(&cell);
//!
//! binding.set(!binding.get());
//! assert!(!cell.get());
//! ```

use std::fmt;
use std::sync::{Arc, RwLock};

/// Type alias for subscriber callbacks.
type SubscriberFn<T> = Box<dyn Fn(&T) + Send + Sync>;

/// Type alias for subscribers list.
type Subscribers<T> = Arc<RwLock<Vec<SubscriberFn<T>>>>;

type Getter<T> = Arc<dyn Fn() -> T + Send + Sync>;
type Setter<T> = Arc<dyn Fn(T) + Send + Sync>;

/// A reactive cell that holds a value and notifies on changes.
///
/// Clones share both the value and the subscriber list.
pub struct ReactiveCell<T> {
    value: Arc<RwLock<T>>,
    subscribers: Subscribers<T>,
}

impl<T: Clone + Send + Sync + 'static> ReactiveCell<T> {
    /// Create a new reactive cell with an initial value.
    pub fn new(value: T) -> Self {
        Self {
            value: Arc::new(RwLock::new(value)),
            subscribers: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Get the current value.
    pub fn get(&self) -> T {
        self.value.read().expect("ReactiveCell lock poisoned").clone()
    }

    /// Set a new value, notifying subscribers.
    pub fn set(&self, value: T) {
        {
            let mut guard = self.value.write().expect("ReactiveCell lock poisoned");
            *guard = value;
        }
        self.notify();
    }

    /// Update the value using a function.
    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        {
            let mut guard = self.value.write().expect("ReactiveCell lock poisoned");
            f(&mut guard);
        }
        self.notify();
    }

    /// Subscribe to value changes.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        self.subscribers
            .write()
            .expect("ReactiveCell lock poisoned")
            .push(Box::new(callback));
    }

    /// Number of registered subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.read().expect("ReactiveCell lock poisoned").len()
    }

    fn notify(&self) {
        let value = self.get();
        let subscribers = self.subscribers.read().expect("ReactiveCell lock poisoned");
        for sub in subscribers.iter() {
            sub(&value);
        }
    }
}

impl<T> Clone for ReactiveCell<T> {
    fn clone(&self) -> Self {
        Self {
            value: Arc::clone(&self.value),
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}

impl<T: Clone + Send + Sync + Default + 'static> Default for ReactiveCell<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Clone + Send + Sync + fmt::Debug + 'static> fmt::Debug for ReactiveCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReactiveCell")
            .field("value", &*self.value.read().expect("ReactiveCell lock poisoned"))
            .finish_non_exhaustive()
    }
}

/// Two-way binding to externally owned state.
///
/// A binding does not hold the value. Reads go through the getter and writes
/// are requests handed to the setter; the owner decides what happens.
pub struct Binding<T> {
    get: Getter<T>,
    set: Setter<T>,
}

impl<T: 'static> Binding<T> {
    /// Create a binding from a getter and a setter.
    pub fn new<G, S>(get: G, set: S) -> Self
    where
        G: Fn() -> T + Send + Sync + 'static,
        S: Fn(T) + Send + Sync + 'static,
    {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// Read the current value.
    pub fn get(&self) -> T {
        (self.get)()
    }

    /// Request a new value.
    pub fn set(&self, value: T) {
        (self.set)(value);
    }
}

impl<T: Clone + Send + Sync + 'static> Binding<T> {
    /// Bind to a reactive cell.
    pub fn from_cell(cell: &ReactiveCell<T>) -> Self {
        let reader = cell.clone();
        let writer = cell.clone();
        Self::new(move || reader.get(), move |value| writer.set(value))
    }

    /// A read-only binding that ignores writes.
    pub fn constant(value: T) -> Self {
        Self::new(move || value.clone(), |_| {})
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
            set: Arc::clone(&self.set),
        }
    }
}

impl<T: fmt::Debug + 'static> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("value", &(self.get)())
            .finish_non_exhaustive()
    }
}
