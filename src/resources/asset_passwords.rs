//! Asset passwords

use crate::client::HuduClient;
use crate::engine::{ApiOutcome, Query};
use crate::error::Result;
use crate::types::Method;
use serde::Serialize;
use serde_json::{json, Value};

/// Filters for listing asset passwords
#[derive(Debug, Clone, Default)]
pub struct PasswordQuery {
    pub name: Option<String>,
    pub company_id: Option<i64>,
    pub slug: Option<String>,
    pub search: Option<String>,
}

/// Body for creating or updating an asset password
#[derive(Debug, Clone, Serialize)]
pub struct NewAssetPassword {
    pub name: String,
    pub username: String,
    pub password: String,
    pub company_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Type of the owning record, e.g. `Asset`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passwordable_type: Option<String>,
    /// Id of the owning record
    #[serde(skip_serializing_if = "Option::is_none")]
    pub passwordable_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_portal: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp_secret: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_folder_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

impl NewAssetPassword {
    /// A password body with just the required fields
    pub fn new(
        name: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        company_id: i64,
    ) -> Self {
        Self {
            name: name.into(),
            username: username.into(),
            password: password.into(),
            company_id,
            description: None,
            passwordable_type: None,
            passwordable_id: None,
            in_portal: None,
            otp_secret: None,
            url: None,
            password_type: None,
            password_folder_id: None,
            slug: None,
        }
    }
}

impl HuduClient {
    /// List asset passwords matching the filters
    pub fn get_asset_passwords(&self, filter: PasswordQuery) -> Result<Vec<Value>> {
        let mut query = Query::new();
        query.set_opt("name", filter.name);
        query.set_opt("company_id", filter.company_id);
        query.set_opt("slug", filter.slug);
        query.set_opt("search", filter.search);
        self.fetch("asset_passwords", query)
    }

    /// Fetch one asset password, as a one-element batch
    pub fn get_asset_password(&self, id: i64) -> Result<Vec<Value>> {
        self.fetch(&format!("asset_passwords/{id}"), Query::new())
    }

    /// Create an asset password
    pub fn create_asset_password(&self, password: &NewAssetPassword) -> Result<ApiOutcome> {
        self.submit(
            Method::POST,
            "asset_passwords",
            json!({ "asset_password": password }),
        )
    }

    /// Update an asset password
    pub fn update_asset_password(
        &self,
        id: i64,
        password: &NewAssetPassword,
    ) -> Result<ApiOutcome> {
        self.submit(
            Method::PUT,
            &format!("asset_passwords/{id}"),
            json!({ "asset_password": password }),
        )
    }

    /// Delete an asset password
    pub fn remove_asset_password(&self, id: i64) -> Result<ApiOutcome> {
        self.submit_empty(Method::DELETE, &format!("asset_passwords/{id}"))
    }

    /// Archive an asset password
    pub fn archive_asset_password(&self, id: i64) -> Result<ApiOutcome> {
        self.submit_empty(Method::PUT, &format!("asset_passwords/{id}/archive"))
    }

    /// Restore an archived asset password
    pub fn unarchive_asset_password(&self, id: i64) -> Result<ApiOutcome> {
        self.submit_empty(Method::PUT, &format!("asset_passwords/{id}/unarchive"))
    }
}
