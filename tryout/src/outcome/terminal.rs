//! Operators that leave the outcome world.
//!
//! Callbacks handed to these operators are effects, not transformations: a
//! panic raised inside one propagates to the caller.

use super::Outcome;
use crate::Fault;

impl<V> Outcome<V> {
    /// Returns the payload, or the contained fault unchanged.
    ///
    /// This is the escape hatch back into ordinary `?`-based control flow.
    ///
    /// # Errors
    ///
    /// Returns the [`Fault`] held by a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::{lift, Fault};
    ///
    /// fn first_word(line: Option<&str>) -> Result<&str, Fault> {
    ///     let line = lift(line).or_throw()?;
    ///     Ok(line.split_whitespace().next().unwrap_or_default())
    /// }
    ///
    /// assert_eq!(first_word(Some("hello world")).ok(), Some("hello"));
    /// assert_eq!(
    ///     first_word(None).unwrap_err().message(),
    ///     "value must not be empty!"
    /// );
    /// ```
    pub fn or_throw(self) -> Result<V, Fault> {
        self.into()
    }

    /// Returns the payload, discarding any failure detail.
    #[must_use]
    pub fn optional(self) -> Option<V> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Runs `callback` on the payload for its side effects and returns the
    /// outcome unchanged.
    pub fn if_present<F>(self, callback: F) -> Self
    where
        F: FnOnce(&V),
    {
        if let Self::Success(value) = &self {
            callback(value);
        }
        self
    }

    /// Hands the payload to `callback`, or raises the contained fault.
    ///
    /// The callback's own error is returned as-is; a fault is converted into
    /// the callback's error type.
    ///
    /// # Errors
    ///
    /// Returns the callback's error, or the fault of a failed outcome.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::{success, failure, Outcome};
    ///
    /// let mut seen = Vec::new();
    /// success(3).if_present_or_throw(|v| -> anyhow::Result<()> {
    ///     seen.push(v);
    ///     Ok(())
    /// })?;
    /// assert_eq!(seen, [3]);
    ///
    /// let failed: Outcome<i32> = failure("boom");
    /// let err = failed.if_present_or_throw(|_| Ok::<(), anyhow::Error>(())).unwrap_err();
    /// assert_eq!(err.to_string(), "boom");
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn if_present_or_throw<F, E>(self, callback: F) -> Result<(), E>
    where
        F: FnOnce(V) -> Result<(), E>,
        E: From<Fault>,
    {
        match self {
            Self::Success(value) => callback(value),
            Self::Failure(fault) => Err(fault.into()),
        }
    }

    /// Runs `callback` on the fault of a failed outcome and returns the
    /// outcome unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use tryout::{lift, Outcome};
    ///
    /// let mut logged = None;
    /// let outcome: Outcome<u8> = lift(None).if_throwable(|fault| {
    ///     logged = Some(fault.message().to_owned());
    /// });
    /// assert!(outcome.is_failure());
    /// assert_eq!(logged.as_deref(), Some("value must not be empty!"));
    /// ```
    pub fn if_throwable<F>(self, callback: F) -> Self
    where
        F: FnOnce(&Fault),
    {
        if let Self::Failure(fault) = &self {
            callback(fault);
        }
        self
    }
}
