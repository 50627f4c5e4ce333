use std::task::Waker;

pub(crate) type SuccessFn<T> = Box<dyn FnOnce(T) + Send>;
pub(crate) type FailureFn = Box<dyn FnOnce() + Send>;

/// The cell shared by one [`Resolver`](crate::Resolver) and every
/// [`Promise`](crate::Promise) handle derived from it.
///
/// Lives behind an `Arc<Mutex<_>>`; the flag flip, the result store and the
/// draining of all three lists happen inside one critical section, so a
/// concurrent registration either queues against the unresolved state or
/// sees the outcome already in place.
pub(crate) struct SharedState<T> {
    /// One-way: flips to `true` on the first `resolve`/`reject`, never back.
    pub(crate) resolved: bool,
    /// `Some` iff resolved via success. Stays `None` after a rejection.
    pub(crate) result: Option<T>,
    /// Pending success observers, in registration order.
    pub(crate) on_success: Vec<SuccessFn<T>>,
    /// Pending failure observers, in registration order.
    pub(crate) on_failure: Vec<FailureFn>,
    /// Tasks parked on the await surface.
    pub(crate) wakers: Vec<Waker>,
}

impl<T> SharedState<T> {
    pub(crate) fn new() -> Self {
        Self {
            resolved: false,
            result: None,
            on_success: Vec::new(),
            on_failure: Vec::new(),
            wakers: Vec::new(),
        }
    }
}
