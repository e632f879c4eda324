//! Client configuration and credential resolution
//!
//! Configuration is resolved once at client construction and immutable
//! afterwards. Every value follows the same chain: explicit argument first,
//! then environment, then (for the API key only) a mounted secret file.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;
use url::Url;

/// Environment variable holding the API key
pub const ENV_API_KEY: &str = "HUDU_API_KEY";

/// Environment variable holding the account domain
pub const ENV_DOMAIN: &str = "HUDU_DOMAIN";

/// Environment variable holding the API version
pub const ENV_API_VERSION: &str = "HUDU_API_VERSION";

/// Mounted secret consulted when the API key is found nowhere else
pub const API_KEY_SECRET_PATH: &str = "/run/secrets/HUDU_API_KEY";

/// API version used when none is configured
pub const DEFAULT_API_VERSION: &str = "v1";

/// The page size the platform silently caps list endpoints at
pub const DEFAULT_PAGE_SIZE: u32 = 25;

/// Resolved, immutable client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Pre-issued static API key, sent as the `x-api-key` header
    pub api_key: String,
    /// Account domain, e.g. `acme.huducloud.com`
    pub domain: String,
    /// API version path segment, e.g. `v1`
    pub api_version: String,
    /// Page size the platform caps list endpoints at
    pub page_size: u32,
    /// Override for the derived base URL, for targeting a local mock server
    pub base_url: Option<Url>,
}

impl ClientConfig {
    /// Resolve configuration from explicit values, the process environment,
    /// and the mounted secret file.
    pub fn resolve(
        api_key: Option<String>,
        domain: Option<String>,
        api_version: Option<String>,
    ) -> Result<Self> {
        Self::resolve_from(
            api_key,
            domain,
            api_version,
            |name| std::env::var(name).ok(),
            Path::new(API_KEY_SECRET_PATH),
        )
    }

    /// Resolution against injected sources, so tests never touch the
    /// process environment.
    pub(crate) fn resolve_from<E>(
        api_key: Option<String>,
        domain: Option<String>,
        api_version: Option<String>,
        env: E,
        secret_path: &Path,
    ) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
    {
        let api_key = match api_key.or_else(|| env(ENV_API_KEY)) {
            Some(key) => key,
            None => read_secret(secret_path)?
                .ok_or_else(|| Error::missing_credential("api_key"))?,
        };

        let domain = domain
            .or_else(|| env(ENV_DOMAIN))
            .ok_or_else(|| Error::missing_credential("domain"))?;

        let api_version = api_version
            .or_else(|| env(ENV_API_VERSION))
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());

        Ok(Self {
            api_key,
            domain,
            api_version,
            page_size: DEFAULT_PAGE_SIZE,
            base_url: None,
        })
    }

    /// The base URL all endpoints are joined onto, always with a trailing
    /// slash so relative joins extend the path instead of replacing it.
    pub fn endpoint_base(&self) -> Result<Url> {
        let raw = match &self.base_url {
            Some(url) => url.to_string(),
            None => format!("https://{}/api/{}", self.domain, self.api_version),
        };
        let raw = if raw.ends_with('/') { raw } else { raw + "/" };
        Ok(Url::parse(&raw)?)
    }
}

/// Read and trim the mounted secret, if present. An absent file is not an
/// error; an unreadable one is.
fn read_secret(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)?;
    let trimmed = contents.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(trimmed.to_string()))
}

#[cfg(test)]
mod tests;
