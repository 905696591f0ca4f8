//! Assertions over `tryout::Outcome` values that report through `anyhow`.

use anyhow::{Result, anyhow, ensure};
use std::fmt::Debug;
use tryout::{Fault, FaultKind, Outcome};

/// Returns the payload of a successful outcome.
///
/// # Errors
///
/// Returns an error describing the fault when the outcome failed.
pub fn expect_success<V>(outcome: Outcome<V>) -> Result<V> {
    outcome
        .or_throw()
        .map_err(|fault| anyhow!("expected success, got {} fault: {fault}", fault.kind()))
}

/// Returns the fault of a failed outcome after checking its kind and message.
///
/// # Errors
///
/// Returns an error when the outcome succeeded or the fault differs from the
/// expectation.
pub fn expect_fault<V: Debug>(
    outcome: Outcome<V>,
    kind: FaultKind,
    message: &str,
) -> Result<Fault> {
    let fault = match outcome {
        Outcome::Success(value) => return Err(anyhow!("expected failure, got success {value:?}")),
        Outcome::Failure(fault) => fault,
    };
    ensure!(
        fault.kind() == kind,
        "expected {kind} fault, got {}: {fault}",
        fault.kind()
    );
    ensure!(
        fault.message() == message,
        "expected message {message:?}, got {:?}",
        fault.message()
    );
    Ok(fault)
}
