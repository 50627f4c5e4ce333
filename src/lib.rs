//! A single-resolution promise: a value produced exactly once, observed any
//! number of times.
//!
//! A [`Resolver`] is the write half; it decides the outcome with
//! [`resolve`](Resolver::resolve) or [`reject`](Resolver::reject), exactly
//! once. A [`Promise`] is the read half; it can be cloned freely, queried
//! with [`is_resolved`](Promise::is_resolved), observed with
//! [`on_completion`](Promise::on_completion), or awaited. Observers
//! registered after the outcome is known fire immediately with that
//! outcome, so consumers never need to care whether they attached early or
//! late.
//!
//! [`Promise::all`] aggregates many promises into one that succeeds with
//! every input's value in input order, or fails as soon as any input fails.
//!
//! # Examples
//!
//! ```
//! use promise_cell::Resolver;
//!
//! let resolver = Resolver::new();
//! let promise = resolver.promise();
//! promise.on_completion(
//!     |value| println!("resolved with {value}"),
//!     || println!("rejected"),
//! );
//! resolver.resolve(String::from("🍓"));
//! assert!(promise.is_resolved());
//! ```

use thiserror::Error;

mod all;
mod promise;
mod resolver;
mod state;

pub use promise::Promise;
pub use resolver::Resolver;

/// Returned when awaiting a promise whose producer rejected.
///
/// A rejection carries no payload; producers that need to communicate a
/// reason encode it in the success type instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("promise was rejected")]
    Rejected,
}
