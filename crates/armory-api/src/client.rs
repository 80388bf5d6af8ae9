// Weapon catalogue HTTP client
//
// Wraps `reqwest::Client` with base-URL joining and status checking.
// Endpoint methods live in `weapons.rs` and `assist.rs` as inherent
// impls to keep this module focused on transport mechanics.

use reqwest::StatusCode;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::transport::TransportConfig;

/// Raw HTTP client for the weapon catalogue service.
///
/// Every request is a single round trip: no retries, no session state.
/// Each call names the statuses it accepts; anything else becomes
/// [`Error::Status`].
pub struct ArmoryClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ArmoryClient {
    /// Create a client for the service rooted at `base_url`
    /// (e.g. `http://localhost:5166`).
    pub fn new(base_url: &str, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::with_client(base_url, http)
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(base_url: &str, http: reqwest::Client) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self { http, base_url })
    }

    /// Ensure the base URL ends with `/` so relative joins keep any path prefix.
    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// The service base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ── URL builder ──────────────────────────────────────────────────

    /// Join a relative path (e.g. `"api/Weapon/3"`) onto the base URL.
    pub(crate) fn url(&self, path: &str) -> Result<Url, Error> {
        Ok(self.base_url.join(path)?)
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Send a GET and return the raw response regardless of status.
    pub(crate) async fn get_raw(&self, path: &str) -> Result<reqwest::Response, Error> {
        let url = self.url(path)?;
        debug!("GET {url}");
        Ok(self.http.get(url).send().await?)
    }

    pub(crate) async fn get_with_params(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<reqwest::Response, Error> {
        let url = self.url(path)?;
        debug!("GET {url} params={params:?}");
        Ok(self.http.get(url).query(params).send().await?)
    }

    pub(crate) async fn post_raw<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, Error> {
        let url = self.url(path)?;
        debug!("POST {url}");
        Ok(self.http.post(url).json(body).send().await?)
    }

    pub(crate) async fn put_raw<B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response, Error> {
        let url = self.url(path)?;
        debug!("PUT {url}");
        Ok(self.http.put(url).json(body).send().await?)
    }

    pub(crate) async fn delete_raw(&self, path: &str) -> Result<reqwest::Response, Error> {
        let url = self.url(path)?;
        debug!("DELETE {url}");
        Ok(self.http.delete(url).send().await?)
    }

    // ── Response handling ────────────────────────────────────────────

    /// Reject any status outside `accepted`, keeping the body for diagnostics.
    pub(crate) async fn expect_status(
        resp: reqwest::Response,
        accepted: &[StatusCode],
    ) -> Result<reqwest::Response, Error> {
        let status = resp.status();
        trace!(%status, "response received");
        if accepted.contains(&status) {
            Ok(resp)
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(Error::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    /// Check the status, then decode the JSON body.
    pub(crate) async fn decode<T: DeserializeOwned>(
        resp: reqwest::Response,
        accepted: &[StatusCode],
    ) -> Result<T, Error> {
        let resp = Self::expect_status(resp, accepted).await?;
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(|e| Error::Deserialization {
            message: e.to_string(),
            body,
        })
    }

    /// Check the status, then return the body text unchanged.
    pub(crate) async fn text(
        resp: reqwest::Response,
        accepted: &[StatusCode],
    ) -> Result<String, Error> {
        let resp = Self::expect_status(resp, accepted).await?;
        Ok(resp.text().await?)
    }
}
