//! Companies

use crate::client::HuduClient;
use crate::engine::Query;
use crate::error::Result;
use serde_json::Value;

/// Filters for listing companies
#[derive(Debug, Clone, Default)]
pub struct CompanyQuery {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub search: Option<String>,
}

impl HuduClient {
    /// List companies matching the filters
    pub fn get_companies(&self, filter: CompanyQuery) -> Result<Vec<Value>> {
        let mut query = Query::new();
        query.set_opt("name", filter.name);
        query.set_opt("slug", filter.slug);
        query.set_opt("search", filter.search);
        self.fetch("companies", query)
    }

    /// Fetch one company, as a one-element batch
    pub fn get_company(&self, id: i64) -> Result<Vec<Value>> {
        self.fetch(&format!("companies/{id}"), Query::new())
    }
}
