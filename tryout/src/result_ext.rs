//! Extensions for moving standard `Result` and `Option` values into outcomes.
//!
//! These helpers reduce repetitive `match` blocks when a function already
//! returns `Result<T, E>` or `Option<T>` and the caller wants to keep chaining
//! in outcome form.
//!
//! - Use [`OutcomeResultExt::into_outcome`] for any error type; the error is
//!   kept as the fault's cause.
//! - Use [`OutcomeOptionExt::lift`] to treat `None` as a null-value failure.
//!
//! # Examples
//!
//! ```
//! use tryout::{OutcomeOptionExt, OutcomeResultExt};
//!
//! let port = std::env::var("TRYOUT_DOC_PORT_UNSET")
//!     .into_outcome()
//!     .try_map(|raw| raw.parse::<u16>());
//! assert!(port.is_failure());
//!
//! let first = [3, 4].first().copied().lift();
//! assert_eq!(first.optional(), Some(3));
//! ```

use std::error::Error as StdError;

use crate::{Outcome, capture, factory};

/// Converts a `Result<T, E>` into an [`Outcome<T>`].
pub trait OutcomeResultExt<T, E> {
    /// `Ok` becomes `Success`; `Err` becomes a
    /// [`crate::FaultKind::Caught`] failure holding the error as its cause.
    fn into_outcome(self) -> Outcome<T>;
}

impl<T, E> OutcomeResultExt<T, E> for Result<T, E>
where
    E: StdError + Send + Sync + 'static,
{
    fn into_outcome(self) -> Outcome<T> {
        match self {
            Ok(value) => Outcome::Success(value),
            Err(err) => Outcome::Failure(capture::caught(err)),
        }
    }
}

/// Converts an `Option<T>` into an [`Outcome<T>`].
pub trait OutcomeOptionExt<T> {
    /// Same as [`crate::lift`].
    fn lift(self) -> Outcome<T>;
}

impl<T> OutcomeOptionExt<T> for Option<T> {
    fn lift(self) -> Outcome<T> {
        factory::lift(self)
    }
}
