//! Captures `tracing` output emitted while a closure runs.
//!
//! The subscriber is installed for the current thread only, so tests running
//! in parallel never see each other's events.

use std::io;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Runs `f` with a thread-local subscriber recording every level and
/// returns its value alongside the formatted, uncoloured log text.
///
/// # Examples
///
/// ```
/// let ((), logs) = tryout_test_helpers::logs::capture_logs(|| {
///     tracing::debug!(header = "X-real-ip", "resolved");
/// });
/// assert!(logs.contains("resolved"));
/// ```
#[must_use]
pub fn capture_logs<T, F>(f: F) -> (T, String)
where
    F: FnOnce() -> T,
{
    let buffer = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(buffer.clone())
        .with_max_level(Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();
    let value = tracing::subscriber::with_default(subscriber, f);
    let logs = String::from_utf8_lossy(&buffer.0.lock()).into_owned();
    (value, logs)
}
