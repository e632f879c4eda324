//! Articles

use crate::client::HuduClient;
use crate::engine::{ApiOutcome, Query};
use crate::error::Result;
use crate::types::Method;
use serde::Serialize;
use serde_json::{json, Value};

/// Filters for listing articles
#[derive(Debug, Clone, Default)]
pub struct ArticleQuery {
    pub name: Option<String>,
    pub company_id: Option<i64>,
    pub draft: Option<bool>,
}

/// Body for creating or updating an article.
///
/// The platform requires name and content on every write; the rest is
/// optional and omitted when unset.
#[derive(Debug, Clone, Serialize)]
pub struct NewArticle {
    pub name: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_sharing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
}

impl NewArticle {
    /// An article body with just the required fields
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            enable_sharing: None,
            folder_id: None,
            company_id: None,
        }
    }
}

impl HuduClient {
    /// List articles matching the filters
    pub fn get_articles(&self, filter: ArticleQuery) -> Result<Vec<Value>> {
        let mut query = Query::new();
        query.set_opt("name", filter.name);
        query.set_opt("company_id", filter.company_id);
        query.set_opt("draft", filter.draft);
        self.fetch("articles", query)
    }

    /// Fetch one article, as a one-element batch
    pub fn get_article(&self, id: i64) -> Result<Vec<Value>> {
        self.fetch(&format!("articles/{id}"), Query::new())
    }

    /// Create an article
    pub fn create_article(&self, article: &NewArticle) -> Result<ApiOutcome> {
        self.submit(Method::POST, "articles", json!({ "article": article }))
    }

    /// Update an article
    pub fn update_article(&self, id: i64, article: &NewArticle) -> Result<ApiOutcome> {
        self.submit(
            Method::PUT,
            &format!("articles/{id}"),
            json!({ "article": article }),
        )
    }

    /// Delete an article
    pub fn remove_article(&self, id: i64) -> Result<ApiOutcome> {
        self.submit_empty(Method::DELETE, &format!("articles/{id}"))
    }

    /// Archive an article
    pub fn archive_article(&self, id: i64) -> Result<ApiOutcome> {
        self.submit_empty(Method::PUT, &format!("articles/{id}/archive"))
    }

    /// Restore an archived article
    pub fn unarchive_article(&self, id: i64) -> Result<ApiOutcome> {
        self.submit_empty(Method::PUT, &format!("articles/{id}/unarchive"))
    }
}
