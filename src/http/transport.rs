//! Transport primitive
//!
//! Owns the underlying blocking HTTP client and the fixed request headers.
//! Issues exactly one round-trip per call and hands the raw response back.

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::types::Method;
use reqwest::blocking::{Client, Response};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde_json::Value;
use tracing::debug;
use url::Url;

/// Header carrying the pre-issued API key
const API_KEY_HEADER: &str = "x-api-key";

/// Single-request HTTP transport with fixed headers
pub struct Transport {
    http: Client,
    base_url: Url,
}

impl Transport {
    /// Build a transport from resolved client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut api_key = HeaderValue::from_str(&config.api_key).map_err(|_| {
            Error::invalid_argument("API key contains characters not valid in a header")
        })?;
        api_key.set_sensitive(true);
        headers.insert(API_KEY_HEADER, api_key);

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url: config.endpoint_base()?,
        })
    }

    /// The base URL requests are issued against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue a single request. Query pairs are appended for any verb that
    /// carries them; the body, when present, is serialized as JSON.
    pub fn send(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(String, String)],
        body: Option<&Value>,
    ) -> Result<Response> {
        let url = self.base_url.join(endpoint.trim_start_matches('/'))?;
        debug!(%method, %url, "sending request");

        let mut request = self.http.request(method.into(), url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        Ok(request.send()?)
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}
