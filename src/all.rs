use std::mem;
use std::sync::{Arc, Mutex};

use crate::promise::Promise;
use crate::resolver::Resolver;

/// Bookkeeping for one [`Promise::all`] call.
///
/// `remaining` counts inputs that have not succeeded yet. `decided` flips
/// when the aggregate's outcome is settled; callbacks arriving after that
/// still record their value but can no longer touch the output.
struct AllState<T> {
    slots: Vec<Option<T>>,
    remaining: usize,
    decided: bool,
}

impl<T: Clone + Send + 'static> Promise<T> {
    /// Aggregates `promises` into one promise that resolves with every
    /// input's value, in input order, once all of them have resolved.
    ///
    /// The first input to fail rejects the aggregate, whatever the other
    /// inputs do afterwards. An empty slice yields an already-resolved
    /// empty `Vec`. Inputs that are already resolved are replayed during
    /// registration, so the aggregate may be decided before this returns.
    ///
    /// # Examples
    ///
    /// ```
    /// use promise_cell::{Promise, Resolver};
    ///
    /// let first = Resolver::new();
    /// let second = Resolver::new();
    /// let aggregate = Promise::all(&[first.promise(), second.promise()]);
    /// second.resolve(2);
    /// first.resolve(1);
    /// aggregate.on_completion(
    ///     |values| assert_eq!(values, vec![1, 2]),
    ///     || unreachable!(),
    /// );
    /// ```
    pub fn all(promises: &[Promise<T>]) -> Promise<Vec<T>> {
        let resolver = Resolver::new();
        let aggregate = resolver.promise();

        if promises.is_empty() {
            resolver.resolve(Vec::new());
            return aggregate;
        }

        let state = Arc::new(Mutex::new(AllState {
            slots: vec![None; promises.len()],
            remaining: promises.len(),
            decided: false,
        }));

        // Every input gets its observer pair, even when an earlier input
        // already failed synchronously during this loop; `decided` turns
        // the late callbacks into no-ops instead of skipping registration.
        for (index, promise) in promises.iter().enumerate() {
            let on_success = {
                let state = Arc::clone(&state);
                let resolver = resolver.clone();
                move |value: T| {
                    let mut state = state.lock().unwrap();
                    state.slots[index] = Some(value);
                    state.remaining -= 1;
                    if state.remaining == 0 && !state.decided {
                        state.decided = true;
                        let values: Vec<T> =
                            mem::take(&mut state.slots).into_iter().flatten().collect();
                        drop(state);
                        resolver.resolve(values);
                    }
                }
            };
            let on_failure = {
                let state = Arc::clone(&state);
                let resolver = resolver.clone();
                move || {
                    let mut state = state.lock().unwrap();
                    if !state.decided {
                        state.decided = true;
                        drop(state);
                        resolver.reject();
                    }
                }
            };
            promise.on_completion(on_success, on_failure);
        }

        aggregate
    }
}
