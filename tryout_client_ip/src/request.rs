//! Request abstraction consumed by the resolver.

use uncased::{Uncased, UncasedStr};

/// The parts of an inbound request that identify its sender.
///
/// Implement this for your framework's request type. Header lookups are
/// expected to ignore ASCII case, as HTTP header names do.
pub trait ClientRequest {
    /// Returns the first value of header `name`, if present.
    fn header(&self, name: &str) -> Option<&str>;

    /// Returns the peer address of the underlying connection, if known.
    fn remote_addr(&self) -> Option<&str>;
}

impl<T: ClientRequest + ?Sized> ClientRequest for &T {
    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }

    fn remote_addr(&self) -> Option<&str> {
        (**self).remote_addr()
    }
}

/// Owned request headers plus the connection's remote address.
///
/// # Examples
///
/// ```
/// use tryout_client_ip::{ClientRequest, RequestParts};
///
/// let request = RequestParts::new()
///     .with_header("X-Real-IP", "203.0.113.9")
///     .with_remote_addr("10.0.0.1");
/// assert_eq!(request.header("x-real-ip"), Some("203.0.113.9"));
/// assert_eq!(request.remote_addr(), Some("10.0.0.1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParts {
    headers: Vec<(Uncased<'static>, String)>,
    remote_addr: Option<String>,
}

impl RequestParts {
    /// Creates an empty request with no headers and no remote address.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            headers: Vec::new(),
            remote_addr: None,
        }
    }

    /// Appends a header. Earlier values win on lookup.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((Uncased::from(name.into()), value.into()));
        self
    }

    /// Sets the connection's remote address.
    #[must_use]
    pub fn with_remote_addr(mut self, addr: impl Into<String>) -> Self {
        self.remote_addr = Some(addr.into());
        self
    }
}

impl ClientRequest for RequestParts {
    fn header(&self, name: &str) -> Option<&str> {
        let wanted = UncasedStr::new(name);
        self.headers
            .iter()
            .find(|(key, _)| UncasedStr::new(key.as_str()) == wanted)
            .map(|(_, value)| value.as_str())
    }

    fn remote_addr(&self) -> Option<&str> {
        self.remote_addr.as_deref()
    }
}

impl<K, V> FromIterator<(K, V)> for RequestParts
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |parts, (name, value)| parts.with_header(name, value))
    }
}
