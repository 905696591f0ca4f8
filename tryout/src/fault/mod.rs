//! Failure records carried by failed outcomes.

mod constructors;
mod conversions;
mod types;

pub use constructors::{EMPTY_COLLECTION_MESSAGE, NULL_VALUE_MESSAGE, VALIDATION_MESSAGE};
pub use types::{Fault, FaultCause, FaultKind};
