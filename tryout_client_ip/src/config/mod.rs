//! Layered configuration for client address resolution.
//!
//! Values are merged in increasing precedence: built-in defaults, an optional
//! TOML file (with the `toml` feature), then environment variables prefixed
//! with [`ENV_PREFIX`].

mod header_env;

use figment::Figment;
use figment::providers::Serialized;
use serde::{Deserialize, Serialize};
use tryout::test_with_message;

use crate::{ClientIpError, ClientIpResult};
use header_env::HeaderEnv;

/// Prefix for environment variables read by [`ClientIpConfig::load`].
pub const ENV_PREFIX: &str = "CLIENT_IP_";

/// Header carrying the proxy chain, client first.
pub const FORWARDED_FOR_HEADER: &str = "X-Forwarded-For";

/// Headers consulted, in order, when the forwarded-for chain is unusable.
pub const FALLBACK_HEADERS: [&str; 5] = [
    "Proxy-Client-IP",
    "WL-Proxy-Client-IP",
    "HTTP_CLIENT_IP",
    "HTTP_X_FORWARDED_FOR",
    "X-real-ip",
];

/// Settings read from the environment as comma-separated header lists.
const LIST_KEYS: &[&str] = &["fallback_headers"];

/// Placeholder some proxies emit instead of an address.
pub const UNKNOWN_MARKER: &str = "unknown";

/// Which headers to trust and how to recognise placeholder values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientIpConfig {
    /// Header holding a comma-separated proxy chain.
    pub forwarded_for_header: String,
    /// Single-address headers, highest priority first.
    pub fallback_headers: Vec<String>,
    /// Case-insensitive value treated as "no address".
    pub unknown_marker: String,
}

impl Default for ClientIpConfig {
    fn default() -> Self {
        Self {
            forwarded_for_header: FORWARDED_FOR_HEADER.to_owned(),
            fallback_headers: FALLBACK_HEADERS.iter().map(|h| (*h).to_owned()).collect(),
            unknown_marker: UNKNOWN_MARKER.to_owned(),
        }
    }
}

impl ClientIpConfig {
    /// Defaults overlaid with `CLIENT_IP_*` environment variables.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(HeaderEnv::prefixed(ENV_PREFIX, LIST_KEYS))
    }

    /// Defaults, then the TOML file at `path` if it exists, then the
    /// environment.
    #[cfg(feature = "toml")]
    #[must_use]
    pub fn figment_with_file(path: impl AsRef<std::path::Path>) -> Figment {
        use figment::providers::{Format, Toml};

        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(HeaderEnv::prefixed(ENV_PREFIX, LIST_KEYS))
    }

    /// Extracts and validates a configuration from `figment`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientIpError::Config`] when extraction fails and
    /// [`ClientIpError::Invalid`] when a required value is blank.
    pub fn from_figment(figment: &Figment) -> ClientIpResult<Self> {
        let config: Self = figment.extract()?;
        config.validated()
    }

    /// Loads defaults overlaid with the environment.
    ///
    /// # Errors
    ///
    /// See [`ClientIpConfig::from_figment`].
    pub fn load() -> ClientIpResult<Self> {
        Self::from_figment(&Self::figment())
    }

    /// Loads defaults, the TOML file at `path` and the environment.
    ///
    /// # Errors
    ///
    /// See [`ClientIpConfig::from_figment`].
    #[cfg(feature = "toml")]
    pub fn load_from(path: impl AsRef<std::path::Path>) -> ClientIpResult<Self> {
        Self::from_figment(&Self::figment_with_file(path))
    }

    /// Checks that the header name and unknown marker are not blank.
    ///
    /// # Errors
    ///
    /// Returns [`ClientIpError::Invalid`] naming the offending field.
    pub fn validated(self) -> ClientIpResult<Self> {
        let checked = test_with_message(
            self,
            |c| !c.forwarded_for_header.trim().is_empty(),
            "forwarded_for_header must not be blank",
        )
        .flat_map(|config| {
            test_with_message(
                config,
                |candidate| !candidate.unknown_marker.trim().is_empty(),
                "unknown_marker must not be blank",
            )
        });
        checked.or_throw().map_err(ClientIpError::from)
    }

    /// Parses a configuration from TOML text without consulting the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`ClientIpError::Config`] for malformed TOML.
    #[cfg(feature = "toml")]
    pub fn from_toml_str(text: &str) -> ClientIpResult<Self> {
        use figment::providers::{Format, Toml};

        let figment = Figment::from(Serialized::defaults(Self::default())).merge(Toml::string(text));
        Self::from_figment(&figment)
    }
}
