//! The `Outcome` sum type and its variant accessors.
//!
//! Combinators and the operators that leave the outcome world are inherent
//! methods defined in the `combinators` and `terminal` submodules.

mod combinators;
mod terminal;

use crate::Fault;

/// Either a computed value or the fault that prevented it.
///
/// Outcomes are immutable: every operator consumes or borrows the receiver and
/// yields a new value. Construct them through the functions in
/// [`crate::factory`] or receive them from a combinator.
///
/// # Examples
///
/// ```
/// use tryout::{Outcome, success};
///
/// match success(5).map(|x| x * 2) {
///     Outcome::Success(v) => assert_eq!(v, 10),
///     Outcome::Failure(fault) => panic!("unexpected fault: {fault}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "an outcome may hold a fault that should be handled"]
pub enum Outcome<V> {
    /// The computation produced a value.
    Success(V),
    /// The computation failed; the record explains why.
    Failure(Fault),
}

impl<V> Outcome<V> {
    /// Returns `true` for the `Success` variant.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` for the `Failure` variant.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Borrows the payload when present.
    #[must_use]
    pub const fn success_ref(&self) -> Option<&V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Borrows the fault when present.
    #[must_use]
    pub const fn fault(&self) -> Option<&Fault> {
        match self {
            Self::Success(_) => None,
            Self::Failure(fault) => Some(fault),
        }
    }

    /// Borrows the outcome as a standard [`Result`].
    ///
    /// # Errors
    ///
    /// Returns the fault of a failed outcome.
    pub const fn as_result(&self) -> Result<&V, &Fault> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Failure(fault) => Err(fault),
        }
    }

    /// Borrows the payload, asserting that the outcome succeeded.
    ///
    /// Prefer [`Outcome::success_ref`] or a `match` unless the variant has
    /// already been established.
    ///
    /// # Panics
    ///
    /// Panics when called on a `Failure`.
    #[must_use]
    #[track_caller]
    pub fn success_value(&self) -> &V {
        match self {
            Self::Success(value) => value,
            Self::Failure(fault) => {
                panic!("variant mismatch: success_value called on a failure ({fault})")
            }
        }
    }

    /// Borrows the fault, asserting that the outcome failed.
    ///
    /// # Panics
    ///
    /// Panics when called on a `Success`.
    #[must_use]
    #[track_caller]
    pub const fn failure_fault(&self) -> &Fault {
        match self {
            Self::Success(_) => panic!("variant mismatch: failure_fault called on a success"),
            Self::Failure(fault) => fault,
        }
    }
}

impl<V> From<Result<V, Fault>> for Outcome<V> {
    fn from(result: Result<V, Fault>) -> Self {
        match result {
            Ok(value) => Self::Success(value),
            Err(fault) => Self::Failure(fault),
        }
    }
}

impl<V> From<Outcome<V>> for Result<V, Fault> {
    fn from(outcome: Outcome<V>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(fault) => Err(fault),
        }
    }
}
