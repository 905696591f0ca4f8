//! Trait-based conversions into `Fault`.

use std::error::Error as StdError;
use std::sync::Arc;

use super::{Fault, FaultKind};

impl From<&str> for Fault {
    fn from(message: &str) -> Self {
        Self::new(FaultKind::Explicit, message)
    }
}

impl From<String> for Fault {
    fn from(message: String) -> Self {
        Self::new(FaultKind::Explicit, message)
    }
}

/// Boxed errors are treated as caught faults; the box becomes the shared
/// cause without re-allocating the error itself.
impl From<Box<dyn StdError + Send + Sync + 'static>> for Fault {
    fn from(cause: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        let message = cause.to_string();
        Self::with_shared_cause(FaultKind::Caught, message, Arc::from(cause))
    }
}
