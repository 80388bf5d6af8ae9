// ── Facade configuration ──
//
// Everything the facade needs to reach the backend. Built by
// `armory-config` from profiles, or directly in tests.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

/// Where the weapon service listens in a local development setup.
pub const DEFAULT_SERVER: &str = "http://localhost:5166";

/// TLS certificate verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// Use the built-in root store.
    #[default]
    SystemDefaults,
    /// Trust an additional CA certificate (PEM).
    CustomCa(PathBuf),
    /// Accept any certificate. Only for local development servers.
    DangerAcceptInvalid,
}

/// Connection settings for a [`Facade`](crate::Facade).
#[derive(Debug, Clone)]
pub struct FacadeConfig {
    /// Service root, e.g. `http://localhost:5166`.
    pub url: Url,
    pub tls: TlsVerification,
    /// `None` keeps the HTTP client's default (no timeout).
    pub timeout: Option<Duration>,
}

impl FacadeConfig {
    pub fn new(url: Url) -> Self {
        Self {
            url,
            tls: TlsVerification::default(),
            timeout: None,
        }
    }
}

impl Default for FacadeConfig {
    fn default() -> Self {
        // The constant is a valid absolute URL.
        #[allow(clippy::expect_used)]
        let url = Url::parse(DEFAULT_SERVER).expect("default server URL");
        Self::new(url)
    }
}
