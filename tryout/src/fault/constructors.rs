//! Constructors for `Fault`.

use std::error::Error as StdError;
use std::sync::Arc;

use super::types::{Fault, FaultCause, FaultKind, UNSPECIFIED_MESSAGE};

/// Message used when an absent value is lifted or a filter rejects a payload.
pub const NULL_VALUE_MESSAGE: &str = "value must not be empty!";

/// Message used when a collection-size check fails.
pub const EMPTY_COLLECTION_MESSAGE: &str = "size of collection must be > 0";

/// Default message used when a validation predicate rejects a value.
pub const VALIDATION_MESSAGE: &str = "not passed the test";

fn non_empty(message: String) -> String {
    if message.trim().is_empty() {
        UNSPECIFIED_MESSAGE.to_owned()
    } else {
        message
    }
}

impl Fault {
    /// Builds a fault of the given kind from a message alone.
    ///
    /// Blank messages are replaced so the record always describes itself.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::{Fault, FaultKind};
    ///
    /// let fault = Fault::new(FaultKind::Explicit, "boom");
    /// assert_eq!(fault.message(), "boom");
    /// assert!(Fault::new(FaultKind::Explicit, "").message().len() > 0);
    /// ```
    #[must_use]
    pub fn new(kind: FaultKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: non_empty(message.into()),
            cause: None,
        }
    }

    /// Builds a fault from a message and a chained cause.
    #[must_use]
    pub fn with_cause<E>(kind: FaultKind, message: impl Into<String>, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::with_shared_cause(kind, message, Arc::new(cause))
    }

    /// Builds a fault from a message and an already shared cause.
    #[must_use]
    pub fn with_shared_cause(kind: FaultKind, message: impl Into<String>, cause: FaultCause) -> Self {
        Self {
            kind,
            message: non_empty(message.into()),
            cause: Some(cause),
        }
    }

    /// Builds a fault whose message is the cause's own description.
    #[must_use]
    pub fn from_cause<E>(kind: FaultKind, cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let message = cause.to_string();
        Self::with_cause(kind, message, cause)
    }

    /// The fault produced by lifting an absent value.
    #[must_use]
    pub fn null_value() -> Self {
        Self::new(FaultKind::NullValue, NULL_VALUE_MESSAGE)
    }

    /// A validation fault with the given message.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Validation, message)
    }

    /// The fault produced when `filter` rejects a payload.
    ///
    /// It deliberately shares the null-value message; only the kind tells the
    /// two apart.
    #[must_use]
    pub fn predicate_rejection() -> Self {
        Self::new(FaultKind::PredicateRejection, NULL_VALUE_MESSAGE)
    }

    /// A fault capturing an error returned by a wrapped computation.
    #[must_use]
    pub fn caught<E>(cause: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::from_cause(FaultKind::Caught, cause)
    }

    /// A fault recording an intercepted panic.
    #[must_use]
    pub fn panic(message: impl Into<String>) -> Self {
        Self::new(FaultKind::Panic, message)
    }

    /// Returns a copy of this fault tagged with a different kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: FaultKind) -> Self {
        self.kind = kind;
        self
    }
}
