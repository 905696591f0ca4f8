//! Core crate for the `tryout` outcome type.
//!
//! An [`Outcome`] is either a computed value or the [`Fault`] that prevented
//! it. Outcomes are built with the free functions in [`factory`] (re-exported
//! here), transformed with combinators such as [`Outcome::map`],
//! [`Outcome::flat_map`] and [`Outcome::filter`], and finally consumed with a
//! terminal operator like [`Outcome::or_throw`] or [`Outcome::optional`].
//!
//! Everything runs eagerly on the calling thread. Combinators and the
//! factories that run user code never let a recoverable fault escape: an
//! `Err` or an unwinding panic becomes a failed outcome instead.
//!
//! ```
//! use tryout::{lift, test_with_message};
//!
//! let header: Option<&str> = Some("8080");
//! let port = lift(header)
//!     .try_map(str::parse::<u16>)
//!     .flat_map(|p| test_with_message(p, |p| *p >= 1024, "privileged port"))
//!     .or_throw()?;
//! assert_eq!(port, 8080);
//! # Ok::<(), tryout::Fault>(())
//! ```

mod capture;
pub mod factory;
mod fault;
mod outcome;
mod result_ext;

pub use factory::{
    coll_must_have_some_one, failure, failure_from, failure_with_cause, lift, success, supplier,
    test, test_with_message, tried,
};
pub use fault::{
    EMPTY_COLLECTION_MESSAGE, Fault, FaultCause, FaultKind, NULL_VALUE_MESSAGE, VALIDATION_MESSAGE,
};
pub use outcome::Outcome;
pub use result_ext::{OutcomeOptionExt, OutcomeResultExt};
