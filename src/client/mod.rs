//! Client construction and the public entry point
//!
//! A [`HuduClient`] is built once, resolving credentials from explicit
//! arguments, the environment, or the mounted secret, and is immutable
//! afterwards. Construction can optionally pre-build the two name/id lookup
//! tables; that is a blocking step performed before the client is handed
//! back.

use crate::config::ClientConfig;
use crate::engine::{ApiOutcome, Engine, Params, Query, RequestPolicy};
use crate::error::Result;
use crate::http::Transport;
use crate::lookup::LookupTable;
use crate::types::Method;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Synchronous client for the Hudu REST API.
///
/// Every method blocks the calling thread until all underlying round-trips
/// complete. The client keeps no per-call mutable state, so sharing one
/// behind an `Arc` across threads is safe for independent requests.
#[derive(Debug)]
pub struct HuduClient {
    engine: Engine,
    companies: Option<LookupTable>,
    asset_layouts: Option<LookupTable>,
}

impl HuduClient {
    /// Start building a client
    pub fn builder() -> HuduClientBuilder {
        HuduClientBuilder::default()
    }

    /// Build a client entirely from the environment (and mounted secret)
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Execute one API call against an arbitrary endpoint.
    ///
    /// This is the engine's contract, exposed for endpoints the typed
    /// facade does not cover.
    pub fn execute(&self, method: Method, endpoint: &str, params: Params) -> Result<ApiOutcome> {
        self.engine.execute(method, endpoint, params)
    }

    /// Issue a single unpaginated GET and hand back the raw response.
    ///
    /// For troubleshooting and data-format examination more than anything.
    pub fn raw_get(&self, endpoint: &str, filters: Query) -> Result<reqwest::blocking::Response> {
        self.engine.raw_get(endpoint, &filters)
    }

    /// The company name/id table, when construction was asked to build it
    pub fn companies(&self) -> Option<&LookupTable> {
        self.companies.as_ref()
    }

    /// The asset-layout name/id table, when construction was asked to build it
    pub fn asset_layouts(&self) -> Option<&LookupTable> {
        self.asset_layouts.as_ref()
    }

    /// Paginated GET used by the facade
    pub(crate) fn fetch(&self, endpoint: &str, filters: Query) -> Result<Vec<Value>> {
        self.engine.fetch(endpoint, &filters)
    }

    /// Write with a JSON body, used by the facade
    pub(crate) fn submit(&self, method: Method, endpoint: &str, body: Value) -> Result<ApiOutcome> {
        self.engine.write(method, endpoint, Some(body))
    }

    /// Body-less write: lifecycle PUTs send an empty object, DELETE nothing
    pub(crate) fn submit_empty(&self, method: Method, endpoint: &str) -> Result<ApiOutcome> {
        let body = match method {
            Method::DELETE => None,
            _ => Some(json!({})),
        };
        self.engine.write(method, endpoint, body)
    }
}

/// Builder for [`HuduClient`]
#[derive(Debug, Default)]
pub struct HuduClientBuilder {
    api_key: Option<String>,
    domain: Option<String>,
    api_version: Option<String>,
    base_url: Option<String>,
    lookup_tables: bool,
    policy: RequestPolicy,
}

impl HuduClientBuilder {
    /// Set the API key, overriding environment and secret-file discovery
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the account domain, e.g. `acme.huducloud.com`
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the API version path segment
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Point the client at an explicit base URL instead of the one derived
    /// from the domain. Meant for local mock servers.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Pre-build the company and asset-layout lookup tables at construction
    pub fn lookup_tables(mut self, enabled: bool) -> Self {
        self.lookup_tables = enabled;
        self
    }

    /// Override the self-imposed inter-page throttle
    pub fn page_delay(mut self, delay: Duration) -> Self {
        self.policy.page_delay = delay;
        self
    }

    /// Override the fixed sleep before retrying a rate-limited page
    pub fn rate_limit_backoff(mut self, backoff: Duration) -> Self {
        self.policy.rate_limit_backoff = backoff;
        self
    }

    /// Override how many consecutive 429s are tolerated before giving up
    pub fn max_rate_limit_retries(mut self, retries: u32) -> Self {
        self.policy.max_rate_limit_retries = retries;
        self
    }

    /// Resolve configuration and construct the client.
    ///
    /// With `lookup_tables` set, this performs two full paginated listings
    /// (companies, asset layouts) before returning.
    pub fn build(self) -> Result<HuduClient> {
        let mut config = ClientConfig::resolve(self.api_key, self.domain, self.api_version)?;
        if let Some(raw) = self.base_url {
            config.base_url = Some(Url::parse(&raw)?);
        }

        let mut policy = self.policy;
        policy.capped_page_size = config.page_size;

        let engine = Engine::new(Transport::new(&config)?, policy);
        let mut client = HuduClient {
            engine,
            companies: None,
            asset_layouts: None,
        };

        if self.lookup_tables {
            debug!("building lookup tables");
            let companies = client.fetch("companies", Query::new())?;
            client.companies = Some(LookupTable::from_records(&companies));
            let layouts = client.fetch("asset_layouts", Query::new())?;
            client.asset_layouts = Some(LookupTable::from_records(&layouts));
        }

        Ok(client)
    }
}
