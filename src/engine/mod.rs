//! Request engine
//!
//! Every resource method funnels through [`Engine::execute`]: one control
//! path that validates the verb, drives the adaptive pagination loop for
//! GET, and performs the single round-trip write path for POST/PUT/DELETE.
//!
//! # Pagination strategy
//!
//! The platform paginates list endpoints, but page-size support is
//! inconsistent: some endpoints honor `page_size`, others silently cap at
//! 25 while echoing back full pages. The engine starts optimistic (1000)
//! and downgrades to the cap the moment a page comes back with exactly the
//! capped length; otherwise an endpoint that ignores `page_size` would
//! never return a short page and the loop would re-fetch forever.

mod types;

pub use types::{ApiOutcome, Params, Query, RawResponse, RequestPolicy};

use crate::error::{Error, Result};
use crate::http::Transport;
use crate::response::{classify, Payload};
use crate::types::Method;
use reqwest::StatusCode;
use serde_json::{json, Value};
use std::thread;
use tracing::{debug, warn};
use types::PageState;

/// The pagination engine: issues requests through the transport and
/// accumulates results according to the policy's fixed delays and sizes.
#[derive(Debug)]
pub struct Engine {
    transport: Transport,
    policy: RequestPolicy,
}

impl Engine {
    /// Create an engine over a transport
    pub fn new(transport: Transport, policy: RequestPolicy) -> Self {
        Self { transport, policy }
    }

    /// Execute one logical API call.
    ///
    /// GET returns [`ApiOutcome::Records`] with all pages merged. POST and
    /// PUT serialize the body params and return the decoded response, or the
    /// raw one when it does not decode. DELETE sends no body. Any other verb
    /// and any empty endpoint fail before a single byte leaves the process.
    pub fn execute(&self, method: Method, endpoint: &str, params: Params) -> Result<ApiOutcome> {
        if endpoint.is_empty() {
            return Err(Error::invalid_argument("endpoint must not be empty"));
        }

        match method {
            Method::GET => {
                let filters = match params {
                    Params::None => Query::new(),
                    Params::Query(query) => query,
                    Params::Body(_) => {
                        return Err(Error::invalid_argument(
                            "GET calls take query filters, not a JSON body",
                        ))
                    }
                };
                Ok(ApiOutcome::Records(self.fetch(endpoint, &filters)?))
            }
            Method::POST | Method::PUT => {
                let body = match params {
                    Params::None => json!({}),
                    Params::Body(value) => value,
                    Params::Query(_) => {
                        return Err(Error::invalid_argument(
                            "write calls take a JSON body, not query filters",
                        ))
                    }
                };
                self.write(method, endpoint, Some(body))
            }
            Method::DELETE => self.write(Method::DELETE, endpoint, None),
            other => Err(Error::invalid_argument(format!(
                "unsupported HTTP method: {other}; use GET, POST, PUT or DELETE"
            ))),
        }
    }

    /// Paginated GET: merge pages until one comes back short.
    pub(crate) fn fetch(&self, endpoint: &str, filters: &Query) -> Result<Vec<Value>> {
        let mut state = PageState::new(self.policy.optimistic_page_size);
        let mut records: Vec<Value> = Vec::new();
        let mut rate_limit_attempts: u32 = 0;

        loop {
            let wire = state.wire_query(filters);
            let response = self.transport.send(Method::GET, endpoint, &wire, None)?;
            // client-side throttle, independent of any server feedback
            thread::sleep(self.policy.page_delay);

            let status = response.status();
            if status == StatusCode::TOO_MANY_REQUESTS {
                rate_limit_attempts += 1;
                if rate_limit_attempts > self.policy.max_rate_limit_retries {
                    return Err(Error::RateLimited {
                        attempts: rate_limit_attempts,
                    });
                }
                warn!(
                    page = state.page,
                    attempt = rate_limit_attempts,
                    backoff_secs = self.policy.rate_limit_backoff.as_secs(),
                    "rate limited, retrying the same page"
                );
                thread::sleep(self.policy.rate_limit_backoff);
                continue;
            }
            if status != StatusCode::OK {
                let reason = status.canonical_reason().unwrap_or_default();
                return Err(Error::remote(status.as_u16(), reason));
            }
            rate_limit_attempts = 0;

            let batch = match classify(response.json::<Value>()?)? {
                Payload::Wrapped {
                    value: Value::Object(item),
                    ..
                } => {
                    // single-resource endpoints return exactly one object
                    // per call and never paginate
                    records = vec![Value::Object(item)];
                    break;
                }
                Payload::Wrapped {
                    value: Value::Array(items),
                    ..
                }
                | Payload::List(items) => items,
                Payload::Wrapped { key, .. } => {
                    return Err(Error::unsupported_shape(format!(
                        "payload under '{key}' is neither an object nor an array"
                    )))
                }
            };

            let size = batch.len() as u32;
            debug!(
                page = state.page,
                size,
                page_size = state.page_size,
                total = records.len(),
                "page received"
            );
            records.extend(batch);

            if size == self.policy.capped_page_size {
                // the endpoint ignores the requested size; match its cap so
                // a short page can actually be observed
                state.downgrade(self.policy.capped_page_size);
            }
            state.advance();

            if size < state.page_size {
                break;
            }
        }

        Ok(records)
    }

    /// Single round-trip write. The response is decoded as JSON when
    /// possible; otherwise the raw body is handed back unchanged.
    pub(crate) fn write(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<Value>,
    ) -> Result<ApiOutcome> {
        let response = self.transport.send(method, endpoint, &[], body.as_ref())?;
        let status = response.status().as_u16();
        let text = response.text()?;

        match serde_json::from_str::<Value>(&text) {
            Ok(value) => Ok(ApiOutcome::Json(value)),
            Err(_) => Ok(ApiOutcome::Raw(RawResponse { status, body: text })),
        }
    }

    /// Unpaginated GET passthrough for troubleshooting
    pub(crate) fn raw_get(
        &self,
        endpoint: &str,
        filters: &Query,
    ) -> Result<reqwest::blocking::Response> {
        self.transport
            .send(Method::GET, endpoint, filters.pairs(), None)
    }
}
