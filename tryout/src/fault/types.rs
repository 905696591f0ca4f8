//! Failure record carried by the `Failure` variant of an outcome.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

/// Shared, type-erased cause attached to a [`Fault`].
pub type FaultCause = Arc<dyn StdError + Send + Sync + 'static>;

/// Message substituted when a fault would otherwise carry an empty message.
pub(crate) const UNSPECIFIED_MESSAGE: &str = "unspecified failure";

/// Origin of a [`Fault`].
///
/// Every failure is represented uniformly by [`Fault`]; the kind records which
/// operation produced it so callers can react without string matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum FaultKind {
    /// Built directly by the caller through a `failure*` factory.
    Explicit,
    /// Produced by lifting an absent value.
    NullValue,
    /// A validation predicate or collection-size check rejected the value.
    Validation,
    /// A wrapped computation returned an error.
    Caught,
    /// A wrapped computation panicked and the unwind was intercepted.
    Panic,
    /// `filter` rejected the payload.
    PredicateRejection,
}

impl FaultKind {
    /// Returns `true` for faults intercepted from user computations.
    #[must_use]
    pub const fn is_caught(self) -> bool {
        matches!(self, Self::Caught | Self::Panic)
    }

    /// Short label used in diagnostics and structured log fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Explicit => "explicit",
            Self::NullValue => "null-value",
            Self::Validation => "validation",
            Self::Caught => "caught",
            Self::Panic => "panic",
            Self::PredicateRejection => "predicate-rejection",
        }
    }
}

impl fmt::Display for FaultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The failure record held by a failed outcome.
///
/// A fault always carries a non-empty message and may chain an originating
/// error, reachable through [`std::error::Error::source`]. Cloning is cheap:
/// the cause is reference counted, so the same fault can flow through any
/// number of combinators and still be recognised when it is re-raised.
#[derive(Debug, Clone)]
pub struct Fault {
    pub(crate) kind: FaultKind,
    pub(crate) message: String,
    pub(crate) cause: Option<FaultCause>,
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// The source is the wrapped error itself, never the `Arc` around it.
impl StdError for Fault {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_deref()
            .map(|cause| cause as &(dyn StdError + 'static))
    }
}

impl Fault {
    /// Origin of this fault.
    #[must_use]
    pub const fn kind(&self) -> FaultKind {
        self.kind
    }

    /// Diagnostic message; never empty.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The chained cause, if any.
    #[must_use]
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Attempts to view the chained cause as a concrete error type.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::supplier;
    ///
    /// let outcome = supplier(|| "x".parse::<u8>());
    /// let fault = outcome.fault().expect("parse should fail");
    /// assert!(fault.downcast_cause_ref::<std::num::ParseIntError>().is_some());
    /// ```
    #[must_use]
    pub fn downcast_cause_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.cause.as_deref().and_then(|cause| cause.downcast_ref::<E>())
    }

    /// Walks the source chain and returns the innermost error.
    ///
    /// Returns `self` when no cause is attached.
    #[must_use]
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }
}

impl PartialEq for Fault {
    /// Faults compare by kind and message. Causes are opaque and ignored.
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message == other.message
    }
}

impl Eq for Fault {}
