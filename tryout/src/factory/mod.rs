//! Free functions that construct outcomes.
//!
//! Every outcome starts here. The functions are stateless; the ones that run
//! user code (`supplier`, `tried`) never let a recoverable fault escape,
//! while the validation helpers (`test`, `test_with_message`) expect a pure,
//! total predicate and do not intercept its panics.

use std::error::Error as StdError;

use crate::capture::capture;
use crate::fault::{EMPTY_COLLECTION_MESSAGE, VALIDATION_MESSAGE};
use crate::{Fault, FaultKind, Outcome};

/// Wraps `value` as a successful outcome.
pub const fn success<V>(value: V) -> Outcome<V> {
    Outcome::Success(value)
}

/// Builds a failed outcome from a message.
///
/// # Examples
///
/// ```
/// use tryout::{failure, FaultKind, Outcome};
///
/// let outcome: Outcome<u8> = failure("boom");
/// let fault = outcome.fault().expect("failure");
/// assert_eq!(fault.message(), "boom");
/// assert_eq!(fault.kind(), FaultKind::Explicit);
/// ```
pub fn failure<V>(message: impl Into<String>) -> Outcome<V> {
    Outcome::Failure(Fault::new(FaultKind::Explicit, message))
}

/// Builds a failed outcome from a message and the error that caused it.
pub fn failure_with_cause<V, E>(message: impl Into<String>, cause: E) -> Outcome<V>
where
    E: StdError + Send + Sync + 'static,
{
    Outcome::Failure(Fault::with_cause(FaultKind::Explicit, message, cause))
}

/// Builds a failed outcome from an error alone; its description becomes the
/// message.
pub fn failure_from<V, E>(cause: E) -> Outcome<V>
where
    E: StdError + Send + Sync + 'static,
{
    Outcome::Failure(Fault::from_cause(FaultKind::Explicit, cause))
}

/// Lifts an optional value, treating absence as a failure.
///
/// # Examples
///
/// ```
/// use tryout::{lift, success};
///
/// assert_eq!(lift(Some(3)), success(3));
///
/// let fault = lift::<u8>(None).or_throw().unwrap_err();
/// assert_eq!(fault.message(), "value must not be empty!");
/// ```
pub fn lift<V>(value: Option<V>) -> Outcome<V> {
    value.map_or_else(|| Outcome::Failure(Fault::null_value()), Outcome::Success)
}

/// Runs `supplier`, capturing its error or panic as a failure.
///
/// # Examples
///
/// ```
/// use tryout::{supplier, FaultKind};
///
/// assert_eq!(supplier(|| "7".parse::<u8>()).optional(), Some(7));
///
/// let fault = supplier(|| "seven".parse::<u8>()).or_throw().unwrap_err();
/// assert_eq!(fault.kind(), FaultKind::Caught);
/// assert_eq!(fault.message(), "invalid digit found in string");
/// ```
pub fn supplier<V, E, F>(supplier: F) -> Outcome<V>
where
    F: FnOnce() -> Result<V, E>,
    E: StdError + Send + Sync + 'static,
{
    capture(supplier)
}

/// Succeeds with `collection` when it is present and holds at least one
/// element.
///
/// Any collection whose shared reference can be iterated is accepted, which
/// covers every standard container.
///
/// # Examples
///
/// ```
/// use std::collections::HashMap;
/// use tryout::coll_must_have_some_one;
///
/// assert!(coll_must_have_some_one(Some(vec![1])).is_success());
/// assert!(coll_must_have_some_one(Some(HashMap::<u8, u8>::new())).is_failure());
/// assert!(coll_must_have_some_one::<Vec<u8>>(None).is_failure());
/// ```
pub fn coll_must_have_some_one<C>(collection: Option<C>) -> Outcome<C>
where
    for<'a> &'a C: IntoIterator,
{
    match collection {
        Some(coll) if (&coll).into_iter().next().is_some() => Outcome::Success(coll),
        _ => Outcome::Failure(Fault::validation(EMPTY_COLLECTION_MESSAGE)),
    }
}

/// Succeeds with `value` when `predicate` accepts it.
///
/// The rejection carries the message `"not passed the test"`.
pub fn test<V, P>(value: V, predicate: P) -> Outcome<V>
where
    P: FnOnce(&V) -> bool,
{
    test_with_message(value, predicate, VALIDATION_MESSAGE)
}

/// Succeeds with `value` when `predicate` accepts it, failing with `message`
/// otherwise.
///
/// # Examples
///
/// ```
/// use tryout::{success, test_with_message};
///
/// assert_eq!(test_with_message(4, |x| *x > 0, "must be positive"), success(4));
///
/// let fault = test_with_message(-1, |x| *x > 0, "must be positive")
///     .or_throw()
///     .unwrap_err();
/// assert_eq!(fault.message(), "must be positive");
/// ```
pub fn test_with_message<V, P>(value: V, predicate: P, message: impl Into<String>) -> Outcome<V>
where
    P: FnOnce(&V) -> bool,
{
    if predicate(&value) {
        Outcome::Success(value)
    } else {
        Outcome::Failure(Fault::validation(message))
    }
}

/// Applies `mapper` to `value`, capturing its error or panic as a failure.
pub fn tried<V, U, E, F>(value: V, mapper: F) -> Outcome<U>
where
    F: FnOnce(V) -> Result<U, E>,
    E: StdError + Send + Sync + 'static,
{
    capture(|| mapper(value))
}
