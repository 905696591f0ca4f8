//! Client address resolution built on [`tryout`] outcomes.
//!
//! Requests that pass through proxies carry the originating address in one of
//! several headers. [`ClientIpResolver`] walks those headers in a configurable
//! order, skipping blank values and the `unknown` placeholder, and falls back
//! to the connection's remote address. Header names and the placeholder are
//! loaded with [`ClientIpConfig::load`] from defaults, an optional TOML file
//! and `CLIENT_IP_*` environment variables.
//!
//! ```
//! use tryout_client_ip::{ClientIpResolver, RequestParts};
//!
//! let request = RequestParts::new()
//!     .with_header("X-Forwarded-For", "unknown")
//!     .with_header("X-real-ip", "192.0.2.33")
//!     .with_remote_addr("10.1.1.1:52311");
//! let resolver = ClientIpResolver::default();
//! assert_eq!(resolver.resolve(&request).optional().as_deref(), Some("192.0.2.33"));
//! ```

mod config;
mod error;
mod request;
mod resolver;

pub use config::{ClientIpConfig, ENV_PREFIX, FALLBACK_HEADERS, FORWARDED_FOR_HEADER, UNKNOWN_MARKER};
pub use error::{ClientIpError, ClientIpResult};
pub use request::{ClientRequest, RequestParts};
pub use resolver::{ClientIpResolver, real_ip};
