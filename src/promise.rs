use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};

use crate::state::SharedState;
use crate::Error;

/// The read half of a promise. Observes the outcome the
/// [`Resolver`](crate::Resolver) decides.
///
/// Handles may be cloned freely; every clone watches the same state, so a
/// single producer can fan out to any number of consumers. A `Promise` is
/// also a [`Future`] yielding `Result<T, Error>`, for consumers that would
/// rather await than register callbacks.
///
/// # Examples
///
/// ```
/// use promise_cell::Resolver;
/// use futures::executor::block_on;
/// use std::thread;
///
/// let resolver = Resolver::new();
/// let promise = resolver.promise();
/// let producer = thread::spawn(move || resolver.resolve(String::from("🍓")));
/// assert_eq!(block_on(promise), Ok(String::from("🍓")));
/// producer.join().expect("the producer thread has panicked");
/// ```
pub struct Promise<T> {
    shared: Arc<Mutex<SharedState<T>>>,
}

impl<T> Clone for Promise<T> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<T> Promise<T> {
    pub(crate) fn new(shared: Arc<Mutex<SharedState<T>>>) -> Self {
        Self { shared }
    }

    pub fn is_resolved(&self) -> bool {
        self.shared.lock().unwrap().resolved
    }
}

impl<T: Clone> Promise<T> {
    /// Registers an observer pair for the eventual outcome.
    ///
    /// Exactly one of the two runs, exactly once per call. If the outcome
    /// is already known, the matching observer runs synchronously on the
    /// calling thread before this returns and nothing is registered;
    /// otherwise both are queued and the winning half fires, in
    /// registration order, when the producer decides.
    ///
    /// Attaching before or after resolution is observationally identical.
    pub fn on_completion(
        &self,
        on_success: impl FnOnce(T) + Send + 'static,
        on_failure: impl FnOnce() + Send + 'static,
    ) {
        let mut shared = self.shared.lock().unwrap();
        if shared.resolved {
            let result = shared.result.clone();
            drop(shared);
            match result {
                Some(value) => on_success(value),
                None => on_failure(),
            }
        } else {
            shared.on_success.push(Box::new(on_success));
            shared.on_failure.push(Box::new(on_failure));
        }
    }
}

impl<T: Clone> Future for Promise<T> {
    type Output = Result<T, Error>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut shared = self.shared.lock().unwrap();
        if shared.resolved {
            match shared.result.clone() {
                Some(value) => Poll::Ready(Ok(value)),
                None => Poll::Ready(Err(Error::Rejected)),
            }
        } else {
            // Each awaiting task polls through its own clone; park every
            // waker, not just the latest one.
            shared.wakers.push(cx.waker().clone());
            Poll::Pending
        }
    }
}
