//! Request engine types

use crate::config::DEFAULT_PAGE_SIZE;
use serde_json::Value;
use std::time::Duration;

// ============================================================================
// Caller-Supplied Filters
// ============================================================================

/// Immutable caller-supplied query filters for a GET call.
///
/// The engine never mutates these; paging controls live in an engine-owned
/// cursor and the two are merged only when the wire query is built.
#[derive(Debug, Clone, Default)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    /// Create an empty filter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter pair
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) {
        self.pairs.push((key.into(), value.to_string()));
    }

    /// Add a filter pair only when the value is present; unset fields are
    /// omitted so the server applies its own defaults
    pub fn set_opt(&mut self, key: impl Into<String>, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.set(key, value);
        }
    }

    /// The accumulated pairs, in insertion order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Whether any filter has been set
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

// ============================================================================
// Call Parameters
// ============================================================================

/// Parameters for one engine call: nothing, query filters (GET), or a JSON
/// body (POST/PUT). Passing the wrong kind for the verb is an invalid
/// argument, not a silent reinterpretation.
#[derive(Debug, Clone, Default)]
pub enum Params {
    /// No parameters
    #[default]
    None,
    /// Query filters for a GET call
    Query(Query),
    /// JSON body for a POST or PUT call
    Body(Value),
}

impl From<Query> for Params {
    fn from(query: Query) -> Self {
        Params::Query(query)
    }
}

impl From<Value> for Params {
    fn from(body: Value) -> Self {
        Params::Body(body)
    }
}

// ============================================================================
// Outcomes
// ============================================================================

/// A response the write path could not decode as JSON, handed back as-is
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status of the round-trip
    pub status: u16,
    /// Unparsed response body
    pub body: String,
}

/// What one engine call produced.
///
/// GET calls always yield `Records`. Write calls yield `Json` when the
/// response body decodes, and `Raw` when it does not; callers of the write
/// path must tolerate both.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    /// Accumulated items from a paginated (or single-object) GET
    Records(Vec<Value>),
    /// Decoded response from a write call
    Json(Value),
    /// Undecodable response from a write call
    Raw(RawResponse),
}

impl ApiOutcome {
    /// The accumulated records, if this was a GET outcome
    pub fn records(&self) -> Option<&[Value]> {
        match self {
            ApiOutcome::Records(items) => Some(items),
            _ => None,
        }
    }

    /// The decoded JSON, if the response could be parsed
    pub fn json(&self) -> Option<&Value> {
        match self {
            ApiOutcome::Json(value) => Some(value),
            _ => None,
        }
    }
}

// ============================================================================
// Policy
// ============================================================================

/// Fixed delays and page sizes driving the engine.
///
/// The defaults are the platform's documented behavior; tests shrink the
/// delays to keep runs fast.
#[derive(Debug, Clone)]
pub struct RequestPolicy {
    /// Self-imposed throttle after every GET round-trip
    pub page_delay: Duration,
    /// Fixed sleep before retrying a rate-limited page; never grows
    pub rate_limit_backoff: Duration,
    /// Consecutive 429 retries tolerated before the call fails
    pub max_rate_limit_retries: u32,
    /// Page size requested first, before an endpoint reveals its cap
    pub optimistic_page_size: u32,
    /// Page size endpoints silently cap at
    pub capped_page_size: u32,
}

impl Default for RequestPolicy {
    fn default() -> Self {
        Self {
            page_delay: Duration::from_millis(10),
            rate_limit_backoff: Duration::from_secs(30),
            max_rate_limit_retries: 10,
            optimistic_page_size: 1000,
            capped_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

// ============================================================================
// Paging State
// ============================================================================

/// Engine-owned paging cursor, merged with caller filters at send time
#[derive(Debug, Clone)]
pub(crate) struct PageState {
    pub page: u32,
    pub page_size: u32,
}

impl PageState {
    pub fn new(optimistic_page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: optimistic_page_size,
        }
    }

    /// Build the wire query: caller filters first, then paging controls
    pub fn wire_query(&self, filters: &Query) -> Vec<(String, String)> {
        let mut pairs = filters.pairs().to_vec();
        pairs.push(("page".to_string(), self.page.to_string()));
        pairs.push(("page_size".to_string(), self.page_size.to_string()));
        pairs
    }

    pub fn advance(&mut self) {
        self.page += 1;
    }

    pub fn downgrade(&mut self, capped_page_size: u32) {
        self.page_size = capped_page_size;
    }
}
