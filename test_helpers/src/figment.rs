//! Jail wrappers for configuration tests.
//!
//! Configuration loading reads files relative to the working directory and
//! process-wide environment variables. Running each case inside a
//! [`figment::Jail`] keeps those reads hermetic; these helpers surface the
//! closure's value as an `anyhow::Result` so tests can use `?` throughout.

use anyhow::{Result, anyhow};
use camino::Utf8PathBuf;

/// Runs `f` inside a fresh [`figment::Jail`] and returns its value.
///
/// The jail clears nothing by itself; call [`figment::Jail::clear_env`] in the
/// closure when ambient variables could interfere.
///
/// # Errors
///
/// Returns an error if the closure fails or the jail cannot be created.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|jail| {
        output = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!("jailed test failed: {err}"))?;
    output.ok_or_else(|| anyhow!("jail closure did not produce a value"))
}

/// Writes `contents` to `name` inside the jail and returns the file's path
/// relative to the jail root.
///
/// # Errors
///
/// Returns a [`figment::Error`] when the file cannot be written.
#[expect(clippy::result_large_err, reason = "jail closures propagate figment errors")]
pub fn write_file(
    jail: &mut figment::Jail,
    name: &str,
    contents: &str,
) -> figment::error::Result<Utf8PathBuf> {
    jail.create_file(name, contents)
        .map_err(|err| figment::Error::from(format!("cannot write {name}: {err}")))?;
    Ok(Utf8PathBuf::from(name))
}
