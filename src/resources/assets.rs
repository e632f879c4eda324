//! Assets
//!
//! Assets live under their company: writes always go through
//! `companies/{company_id}/assets...`, while the flat `assets` endpoint
//! serves cross-company listing and filtering.

use crate::client::HuduClient;
use crate::engine::{ApiOutcome, Query};
use crate::error::{Error, Result};
use crate::types::{JsonObject, Method};
use serde::Serialize;
use serde_json::{json, Value};

/// Filters for listing assets
#[derive(Debug, Clone, Default)]
pub struct AssetQuery {
    pub company_id: Option<i64>,
    pub id: Option<i64>,
    pub name: Option<String>,
    pub primary_serial: Option<String>,
    pub asset_layout_id: Option<i64>,
    pub archived: Option<bool>,
}

impl AssetQuery {
    /// A company id with no narrower filter is just the company listing
    fn is_company_listing(&self) -> bool {
        self.company_id.is_some()
            && self.id.is_none()
            && self.name.is_none()
            && self.primary_serial.is_none()
            && self.asset_layout_id.is_none()
    }
}

/// Body for creating an asset.
///
/// Custom fields are passed through exactly as given.
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub asset_layout_id: i64,
    pub name: String,
    pub primary_serial: Option<String>,
    pub primary_mail: Option<String>,
    pub primary_model: Option<String>,
    pub primary_manufacturer: Option<String>,
    pub custom_fields: Option<JsonObject>,
}

impl NewAsset {
    /// An asset body with just the required fields
    pub fn new(asset_layout_id: i64, name: impl Into<String>) -> Self {
        Self {
            asset_layout_id,
            name: name.into(),
            primary_serial: None,
            primary_mail: None,
            primary_model: None,
            primary_manufacturer: None,
            custom_fields: None,
        }
    }
}

/// Changes to apply to an existing asset.
///
/// The platform requires `name` and `asset_layout_id` on every update; when
/// either is unset the current values are fetched and re-sent. Custom-field
/// keys are normalized (lower-cased, spaces to underscores) before
/// transmission.
#[derive(Debug, Clone, Default)]
pub struct AssetUpdate {
    pub asset_layout_id: Option<i64>,
    pub name: Option<String>,
    pub primary_serial: Option<String>,
    pub primary_mail: Option<String>,
    pub primary_model: Option<String>,
    pub primary_manufacturer: Option<String>,
    pub custom_fields: Option<JsonObject>,
}

/// A single asset together with the passwords attached to it
#[derive(Debug, Clone, Serialize)]
pub struct CompanyAsset {
    /// The asset record, as a one-element batch
    pub data: Vec<Value>,
    /// Company passwords whose `passwordable_id` points at the asset
    pub passwords: Vec<Value>,
}

/// The wire shape shared by asset create and update bodies
#[derive(Debug, Serialize)]
struct AssetBody {
    asset_layout_id: i64,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_serial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_mail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    primary_manufacturer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    custom_fields: Option<Value>,
}

/// Normalize custom-field keys the way the update endpoint expects: each
/// field becomes a single-entry object keyed by the lower-cased,
/// underscore-separated label.
pub(crate) fn normalize_custom_fields(fields: JsonObject) -> Value {
    let entries = fields
        .into_iter()
        .map(|(key, value)| {
            let key = key.to_lowercase().replace(' ', "_");
            let mut entry = JsonObject::new();
            entry.insert(key, value);
            Value::Object(entry)
        })
        .collect();
    Value::Array(entries)
}

impl HuduClient {
    /// List assets matching the filters.
    ///
    /// When only a company id (plus at most the archived flag) is given,
    /// the company-scoped listing endpoint is used instead.
    pub fn get_assets(&self, filter: AssetQuery) -> Result<Vec<Value>> {
        if filter.is_company_listing() {
            let company_id = filter.company_id.unwrap_or_default();
            return self.get_company_assets(company_id, filter.archived);
        }

        let mut query = Query::new();
        query.set_opt("company_id", filter.company_id);
        query.set_opt("id", filter.id);
        query.set_opt("name", filter.name);
        query.set_opt("primary_serial", filter.primary_serial);
        query.set_opt("asset_layout_id", filter.asset_layout_id);
        query.set_opt("archived", filter.archived);
        self.fetch("assets", query)
    }

    /// List one company's assets
    pub fn get_company_assets(
        &self,
        company_id: i64,
        archived: Option<bool>,
    ) -> Result<Vec<Value>> {
        let mut query = Query::new();
        query.set_opt("archived", archived);
        self.fetch(&format!("companies/{company_id}/assets"), query)
    }

    /// Fetch one asset together with the passwords attached to it.
    ///
    /// Two dependent calls: the asset itself, then all passwords scoped to
    /// its company, filtered client-side on `passwordable_id`.
    pub fn get_company_asset(&self, company_id: i64, id: i64) -> Result<CompanyAsset> {
        let data = self.fetch(
            &format!("companies/{company_id}/assets/{id}"),
            Query::new(),
        )?;

        let mut scope = Query::new();
        scope.set("company_id", company_id);
        let passwords = self
            .fetch("asset_passwords", scope)?
            .into_iter()
            .filter(|password| {
                password.get("passwordable_id").and_then(Value::as_i64) == Some(id)
            })
            .collect();

        Ok(CompanyAsset { data, passwords })
    }

    /// Create an asset under a company
    pub fn create_asset(&self, company_id: i64, asset: &NewAsset) -> Result<ApiOutcome> {
        let body = AssetBody {
            asset_layout_id: asset.asset_layout_id,
            name: asset.name.clone(),
            primary_serial: asset.primary_serial.clone(),
            primary_mail: asset.primary_mail.clone(),
            primary_model: asset.primary_model.clone(),
            primary_manufacturer: asset.primary_manufacturer.clone(),
            custom_fields: asset.custom_fields.clone().map(Value::Object),
        };
        self.submit(
            Method::POST,
            &format!("companies/{company_id}/assets"),
            json!({ "asset": body }),
        )
    }

    /// Update an asset, backfilling the required name/layout pair from the
    /// current record when the caller left either unset
    pub fn update_asset(
        &self,
        id: i64,
        company_id: i64,
        update: AssetUpdate,
    ) -> Result<ApiOutcome> {
        let AssetUpdate {
            mut asset_layout_id,
            mut name,
            primary_serial,
            primary_mail,
            primary_model,
            primary_manufacturer,
            custom_fields,
        } = update;

        if name.is_none() || asset_layout_id.is_none() {
            let mut probe = Query::new();
            probe.set("id", id);
            probe.set("company_id", company_id);
            let existing = self.fetch("assets", probe)?;
            let current = existing.first().ok_or_else(|| {
                Error::invalid_argument(format!(
                    "asset {id} not found in company {company_id}"
                ))
            })?;
            if name.is_none() {
                name = current
                    .get("name")
                    .and_then(Value::as_str)
                    .map(str::to_string);
            }
            if asset_layout_id.is_none() {
                asset_layout_id = current.get("asset_layout_id").and_then(Value::as_i64);
            }
        }

        let body = AssetBody {
            asset_layout_id: asset_layout_id.ok_or_else(|| {
                Error::invalid_argument("asset record carries no asset_layout_id")
            })?,
            name: name
                .ok_or_else(|| Error::invalid_argument("asset record carries no name"))?,
            primary_serial,
            primary_mail,
            primary_model,
            primary_manufacturer,
            custom_fields: custom_fields.map(normalize_custom_fields),
        };

        self.submit(
            Method::PUT,
            &format!("companies/{company_id}/assets/{id}"),
            json!({ "asset": body }),
        )
    }

    /// Delete an asset
    pub fn remove_asset(&self, id: i64, company_id: i64) -> Result<ApiOutcome> {
        self.submit_empty(
            Method::DELETE,
            &format!("companies/{company_id}/assets/{id}"),
        )
    }

    /// Archive an asset
    pub fn archive_asset(&self, id: i64, company_id: i64) -> Result<ApiOutcome> {
        self.submit_empty(
            Method::PUT,
            &format!("companies/{company_id}/assets/{id}/archive"),
        )
    }

    /// Restore an archived asset
    pub fn unarchive_asset(&self, id: i64, company_id: i64) -> Result<ApiOutcome> {
        self.submit_empty(
            Method::PUT,
            &format!("companies/{company_id}/assets/{id}/unarchive"),
        )
    }
}
