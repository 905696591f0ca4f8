//! Recovers the originating client address from proxy headers.

use std::net::{AddrParseError, IpAddr, SocketAddr};

use tryout::{Outcome, lift, success, test_with_message};
use uncased::UncasedStr;

use crate::{ClientIpConfig, ClientRequest};

/// Resolves the client address of a request according to a
/// [`ClientIpConfig`].
///
/// Lookup order:
/// 1. the forwarded-for header, only when it lists a proxy chain (contains a
///    comma), yielding its first entry;
/// 2. each fallback header in turn, yielding its value verbatim;
/// 3. the connection's remote address.
///
/// A header value is usable when it is not blank and is not the configured
/// unknown marker.
///
/// # Examples
///
/// ```
/// use tryout_client_ip::{ClientIpResolver, RequestParts};
///
/// let request = RequestParts::new()
///     .with_header("X-Forwarded-For", "203.0.113.7, 10.0.0.2")
///     .with_remote_addr("10.0.0.2");
/// let ip = ClientIpResolver::default().resolve(&request).optional();
/// assert_eq!(ip.as_deref(), Some("203.0.113.7"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientIpResolver {
    config: ClientIpConfig,
}

impl ClientIpResolver {
    /// Creates a resolver for `config`.
    #[must_use]
    pub const fn new(config: ClientIpConfig) -> Self {
        Self { config }
    }

    /// The configuration this resolver applies.
    #[must_use]
    pub const fn config(&self) -> &ClientIpConfig {
        &self.config
    }

    /// Returns `true` when `value` could be an address.
    #[must_use]
    pub fn is_usable(&self, value: &str) -> bool {
        let trimmed = value.trim();
        !trimmed.is_empty()
            && UncasedStr::new(trimmed) != UncasedStr::new(self.config.unknown_marker.trim())
    }

    /// Resolves the client address as text.
    ///
    /// Fails with a null-value fault only when no header is usable and the
    /// request carries no remote address.
    pub fn resolve<R>(&self, request: &R) -> Outcome<String>
    where
        R: ClientRequest + ?Sized,
    {
        let from_headers = std::iter::once_with(|| self.forwarded_for(request))
            .chain(
                self.config
                    .fallback_headers
                    .iter()
                    .map(|name| self.header(request, name)),
            )
            .find_map(Outcome::optional);
        from_headers.map_or_else(
            || {
                lift(request.remote_addr())
                    .map(str::to_owned)
                    .if_present(|ip| tracing::debug!(%ip, "falling back to remote address"))
                    .if_throwable(|fault| {
                        tracing::debug!(%fault, "request carries no client address");
                    })
            },
            |ip| success(ip.to_owned()),
        )
    }

    /// Resolves and parses the client address.
    ///
    /// Accepts bare addresses and `address:port` pairs; unparsable values
    /// become caught faults wrapping the [`AddrParseError`].
    pub fn resolve_addr<R>(&self, request: &R) -> Outcome<IpAddr>
    where
        R: ClientRequest + ?Sized,
    {
        self.resolve(request).try_map(|raw| parse_addr(&raw))
    }

    fn forwarded_for<'r, R>(&self, request: &'r R) -> Outcome<&'r str>
    where
        R: ClientRequest + ?Sized,
    {
        let name = self.config.forwarded_for_header.as_str();
        lift(request.header(name))
            .flat_map(|chain| self.usable(name, chain))
            .filter_or(|chain| chain.contains(','), format!("{name} holds no proxy chain"))
            .map(|chain| chain.split(',').next().unwrap_or(chain).trim())
            .flat_map(|first| self.usable(name, first))
            .if_present(|value| {
                tracing::debug!(header = name, %value, "resolved client address from proxy chain");
            })
    }

    fn header<'r, R>(&self, request: &'r R, name: &str) -> Outcome<&'r str>
    where
        R: ClientRequest + ?Sized,
    {
        lift(request.header(name))
            .flat_map(|value| self.usable(name, value))
            .if_present(|value| tracing::debug!(header = name, %value, "resolved client address"))
    }

    fn usable<'r>(&self, name: &str, value: &'r str) -> Outcome<&'r str> {
        let message = format!("{name} holds no usable address");
        test_with_message(value, |v| self.is_usable(v), message)
            .if_throwable(|fault| tracing::trace!(header = name, %fault, "skipping header"))
    }
}

fn parse_addr(raw: &str) -> Result<IpAddr, AddrParseError> {
    raw.parse::<IpAddr>()
        .or_else(|err| raw.parse::<SocketAddr>().map(|addr| addr.ip()).map_err(|_| err))
}

/// Resolves the client address of `request` with the default configuration.
///
/// # Examples
///
/// ```
/// use tryout_client_ip::{real_ip, RequestParts};
///
/// let request = RequestParts::new()
///     .with_header("Proxy-Client-IP", "unknown")
///     .with_header("WL-Proxy-Client-IP", "198.51.100.4");
/// assert_eq!(real_ip(&request).as_deref(), Some("198.51.100.4"));
/// ```
#[must_use]
pub fn real_ip<R>(request: &R) -> Option<String>
where
    R: ClientRequest + ?Sized,
{
    ClientIpResolver::default().resolve(request).optional()
}

#[cfg(test)]
mod tests;
