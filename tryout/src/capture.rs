//! Catch boundary for user-supplied computations.
//!
//! Only recoverable faults are intercepted: errors returned as `Err` and
//! panics that unwind. Aborting faults never reach this code.

use std::any::Any;
use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};

use crate::{Fault, Outcome};

/// Runs `f`, converting an unwinding panic into a [`Fault`].
///
/// The closure is consumed and its captured state is dropped during the
/// unwind, so nothing observes it afterwards; asserting unwind safety is sound.
pub(crate) fn guard<T, F>(f: F) -> Result<T, Fault>
where
    F: FnOnce() -> T,
{
    panic::catch_unwind(AssertUnwindSafe(f)).map_err(|payload| {
        let fault = Fault::panic(panic_message(payload.as_ref()));
        tracing::debug!(kind = %fault.kind(), reason = %fault.message(), "captured panic");
        fault
    })
}

/// Runs a fallible computation, capturing both its error and any panic.
pub(crate) fn capture<T, E, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: StdError + Send + Sync + 'static,
{
    match guard(f) {
        Ok(Ok(value)) => Outcome::Success(value),
        Ok(Err(err)) => Outcome::Failure(caught(err)),
        Err(fault) => Outcome::Failure(fault),
    }
}

/// Runs an infallible computation, capturing any panic.
pub(crate) fn capture_value<T, F>(f: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    guard(f).into()
}

pub(crate) fn caught<E>(err: E) -> Fault
where
    E: StdError + Send + Sync + 'static,
{
    let fault = Fault::caught(err);
    tracing::debug!(kind = %fault.kind(), reason = %fault.message(), "captured error");
    fault
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "unknown panic".to_owned())
}

#[cfg(test)]
mod tests {
    #![expect(clippy::expect_used, reason = "tests panic when a capture is missed")]

    use rstest::rstest;
    use test_helpers::logs::capture_logs;

    use super::{capture, capture_value, guard};
    use crate::FaultKind;

    #[derive(Debug, thiserror::Error)]
    #[error("disk on fire")]
    struct DiskError;

    #[rstest]
    fn guard_passes_through_normal_returns() {
        assert_eq!(guard(|| 7), Ok(7));
    }

    const fn panics_with_static_str() -> u8 {
        panic!("static boom")
    }

    fn panics_with_formatted_string() -> u8 {
        let subject = String::from("formatted");
        panic!("{subject} boom")
    }

    #[rstest]
    #[case::static_str(panics_with_static_str as fn() -> u8, "static boom")]
    #[case::formatted(panics_with_formatted_string as fn() -> u8, "formatted boom")]
    fn guard_captures_panic_messages(#[case] f: fn() -> u8, #[case] expected: &str) {
        let fault = guard(f).expect_err("panic should be captured");
        assert_eq!(fault.kind(), FaultKind::Panic);
        assert_eq!(fault.message(), expected);
    }

    #[rstest]
    fn guard_reports_opaque_payloads() {
        let fault = guard(|| -> u8 { std::panic::panic_any(42_u32) })
            .expect_err("panic should be captured");
        assert_eq!(fault.message(), "unknown panic");
    }

    #[rstest]
    fn capture_records_errors_as_caught() {
        let outcome = capture(|| Err::<u8, _>(DiskError));
        let fault = outcome.fault().expect("error should be captured");
        assert_eq!(fault.kind(), FaultKind::Caught);
        assert_eq!(fault.message(), "disk on fire");
        assert!(fault.downcast_cause_ref::<DiskError>().is_some());
    }

    #[rstest]
    fn captured_errors_are_logged_with_their_kind() {
        let (outcome, logs) = capture_logs(|| capture(|| Err::<u8, _>(DiskError)));
        assert!(outcome.is_failure());
        assert!(logs.contains("captured error"), "logs: {logs}");
        assert!(logs.contains("kind=caught"), "logs: {logs}");
        assert!(logs.contains("reason=disk on fire"), "logs: {logs}");
    }

    #[rstest]
    fn captured_panics_are_logged_with_their_kind() {
        let (fault, logs) = capture_logs(|| guard(panics_with_static_str).expect_err("panic"));
        assert_eq!(fault.kind(), FaultKind::Panic);
        assert!(logs.contains("captured panic"), "logs: {logs}");
        assert!(logs.contains("kind=panic"), "logs: {logs}");
    }

    #[rstest]
    fn capture_value_wraps_returns() {
        assert_eq!(capture_value(|| "ok").optional(), Some("ok"));
    }
}
