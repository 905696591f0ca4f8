//! Value-preserving transformations.
//!
//! None of these let a recoverable fault escape. A failed receiver passes its
//! fault through untouched and user code is never invoked for it.

use std::error::Error as StdError;

use super::Outcome;
use crate::capture::{capture, capture_value, guard};
use crate::{Fault, FaultKind};

impl<V> Outcome<V> {
    /// Transforms the payload with an infallible `mapper`.
    ///
    /// `mapper` runs at most once, and only on the success path. A panic
    /// inside it becomes a [`crate::FaultKind::Panic`] failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::{failure, success, Outcome};
    ///
    /// assert_eq!(success(5).map(|x| x * 2).or_throw().ok(), Some(10));
    ///
    /// let failed: Outcome<i32> = failure("boom");
    /// let fault = failed.map(|x| x * 2).or_throw().unwrap_err();
    /// assert_eq!(fault.message(), "boom");
    /// ```
    pub fn map<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(V) -> U,
    {
        match self {
            Self::Success(value) => capture_value(|| mapper(value)),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Transforms the payload with a fallible `mapper`.
    ///
    /// An `Err` returned by `mapper` becomes a
    /// [`crate::FaultKind::Caught`] failure holding the error as its cause.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::{success, FaultKind};
    ///
    /// let parsed = success("42").try_map(str::parse::<u32>);
    /// assert_eq!(parsed.optional(), Some(42));
    ///
    /// let rejected = success("x").try_map(str::parse::<u32>);
    /// assert_eq!(rejected.fault().map(|f| f.kind()), Some(FaultKind::Caught));
    /// ```
    pub fn try_map<U, E, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(V) -> Result<U, E>,
        E: StdError + Send + Sync + 'static,
    {
        match self {
            Self::Success(value) => capture(|| mapper(value)),
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }

    /// Keeps the payload only when `predicate` accepts it.
    ///
    /// A rejected payload is discarded and replaced by the generic
    /// `"value must not be empty!"` fault, tagged
    /// [`crate::FaultKind::PredicateRejection`]. Use [`Outcome::filter_or`]
    /// to describe the rejection instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::{success, FaultKind};
    ///
    /// let fault = success(4).filter(|x| *x > 10).or_throw().unwrap_err();
    /// assert_eq!(fault.message(), "value must not be empty!");
    /// assert_eq!(fault.kind(), FaultKind::PredicateRejection);
    /// ```
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        self.filter_with(predicate, Fault::predicate_rejection)
    }

    /// Keeps the payload only when `predicate` accepts it, failing with
    /// `message` otherwise.
    pub fn filter_or<P>(self, predicate: P, message: impl Into<String>) -> Self
    where
        P: FnOnce(&V) -> bool,
    {
        let text = message.into();
        self.filter_with(predicate, || Fault::new(FaultKind::PredicateRejection, text))
    }

    fn filter_with<P, R>(self, predicate: P, rejection: R) -> Self
    where
        P: FnOnce(&V) -> bool,
        R: FnOnce() -> Fault,
    {
        match self {
            Self::Success(value) => match guard(|| predicate(&value)) {
                Ok(true) => Self::Success(value),
                Ok(false) => Self::Failure(rejection()),
                Err(fault) => Self::Failure(fault),
            },
            failed @ Self::Failure(_) => failed,
        }
    }

    /// Chains a computation that itself yields an outcome.
    ///
    /// The outcome returned by `mapper` becomes the result directly. Faults
    /// already captured inside it are preserved as-is; only a panic raised by
    /// invoking `mapper` is converted here.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::{success, test_with_message};
    ///
    /// let positive = |x: i32| test_with_message(x, |v| *v > 0, "must be positive");
    /// assert_eq!(success(3).flat_map(positive), positive(3));
    /// assert!(success(-3).flat_map(positive).is_failure());
    /// ```
    pub fn flat_map<U, F>(self, mapper: F) -> Outcome<U>
    where
        F: FnOnce(V) -> Outcome<U>,
    {
        match self {
            Self::Success(value) => match guard(|| mapper(value)) {
                Ok(next) => next,
                Err(fault) => Outcome::Failure(fault),
            },
            Self::Failure(fault) => Outcome::Failure(fault),
        }
    }
}
