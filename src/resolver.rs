use std::mem;
use std::sync::{Arc, Mutex};

use crate::promise::Promise;
use crate::state::SharedState;

/// The write half of a promise. Decides the outcome exactly once.
///
/// Handles may be cloned and moved across threads; whichever
/// [`resolve`](Resolver::resolve) or [`reject`](Resolver::reject) call runs
/// first decides the outcome, and every later call is a no-op. Observers
/// never fire twice.
///
/// # Examples
///
/// ```
/// use promise_cell::Resolver;
///
/// let resolver = Resolver::new();
/// let promise = resolver.promise();
/// resolver.resolve(String::from("🍓"));
/// assert!(promise.is_resolved());
/// ```
pub struct Resolver<T> {
    shared: Arc<Mutex<SharedState<T>>>,
}

impl<T> Clone for Resolver<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Default for Resolver<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Resolver<T> {
    /// A fresh, unresolved promise state.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(Mutex::new(SharedState::new())),
        }
    }

    /// A consumer handle on the same state. May be called any number of
    /// times; every returned handle watches the identical outcome.
    pub fn promise(&self) -> Promise<T> {
        Promise::new(Arc::clone(&self.shared))
    }

    pub fn is_resolved(&self) -> bool {
        self.shared.lock().unwrap().resolved
    }

    /// Rejects the promise, firing the pending failure observers in
    /// registration order. No-op if the outcome is already decided.
    ///
    /// A rejection carries no payload; pending success observers are
    /// discarded unfired.
    pub fn reject(&self) {
        let mut shared = self.shared.lock().unwrap();
        if shared.resolved {
            return;
        }
        shared.resolved = true;
        let observers = mem::take(&mut shared.on_failure);
        shared.on_success.clear();
        let wakers = mem::take(&mut shared.wakers);
        drop(shared);

        // Observers run after the guard drops: one may re-enter the cell
        // (register another observer, query the flag) and must see the
        // decided state, not a held lock.
        for observer in observers {
            observer();
        }
        for waker in wakers {
            waker.wake();
        }
    }
}

impl<T: Clone> Resolver<T> {
    /// Resolves the promise with `value`, firing the pending success
    /// observers in registration order, each with its own clone of the
    /// value. No-op if the outcome is already decided.
    pub fn resolve(&self, value: T) {
        let mut shared = self.shared.lock().unwrap();
        if shared.resolved {
            return;
        }
        shared.resolved = true;
        shared.result = Some(value.clone());
        let observers = mem::take(&mut shared.on_success);
        shared.on_failure.clear();
        let wakers = mem::take(&mut shared.wakers);
        drop(shared);

        for observer in observers {
            observer(value.clone());
        }
        for waker in wakers {
            waker.wake();
        }
    }
}
