//! # hudu-client
//!
//! A synchronous, typed Rust client for the Hudu documentation platform's
//! REST API.
//!
//! ## Features
//!
//! - **One request path**: every resource method funnels through a single
//!   engine that validates the verb, paginates GETs, and writes once
//! - **Adaptive pagination**: requests large pages first and downgrades to
//!   the platform's silent 25-item cap when an endpoint ignores `page_size`
//! - **Credential discovery**: explicit argument, environment variable, or
//!   mounted secret file
//! - **Lookup tables**: optional construction-time name/id tables for
//!   companies and asset layouts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hudu_client::{ArticleQuery, HuduClient, NewArticle, Result};
//!
//! fn main() -> Result<()> {
//!     // Credentials from HUDU_API_KEY / HUDU_DOMAIN
//!     let client = HuduClient::new()?;
//!
//!     let articles = client.get_articles(ArticleQuery {
//!         company_id: Some(42),
//!         ..ArticleQuery::default()
//!     })?;
//!     println!("{} articles", articles.len());
//!
//!     client.create_article(&NewArticle::new("Switch runbook", "<p>steps</p>"))?;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │                      Resource Facade                       │
//! │  get_* / create_* / update_* / remove_* / archive_*        │
//! └────────────────────────────┬───────────────────────────────┘
//!                              │
//! ┌──────────┬─────────────────┴──────────┬────────────────────┐
//! │  Config  │          Engine            │     Classifier     │
//! ├──────────┼────────────────────────────┼────────────────────┤
//! │ API key  │ page/page_size loop        │ Wrapped{key,value} │
//! │ Domain   │ 25-cap downgrade           │ List(items)        │
//! │ Secret   │ 429 backoff (fixed, capped)│ first-key unwrap   │
//! └──────────┴────────────────────────────┴────────────────────┘
//!                              │
//!                   ┌──────────┴──────────┐
//!                   │      Transport      │
//!                   │  one HTTPS request  │
//!                   └─────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration and credential resolution
pub mod config;

/// HTTP transport primitive
pub mod http;

/// Response payload classification
pub mod response;

/// The request engine: pagination and the write path
pub mod engine;

/// Bidirectional name/id lookup tables
pub mod lookup;

/// Client construction
pub mod client;

/// Per-resource API methods
pub mod resources;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{HuduClient, HuduClientBuilder};
pub use engine::{ApiOutcome, Params, Query, RawResponse, RequestPolicy};
pub use error::{Error, Result};
pub use lookup::LookupTable;
pub use resources::{
    ActivityLogQuery, ArticleQuery, AssetQuery, AssetUpdate, CompanyAsset, CompanyQuery,
    FieldType, LayoutField, NewArticle, NewAsset, NewAssetLayout, NewAssetPassword,
    PasswordQuery,
};
pub use types::Method;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
