//! Asset layouts

use crate::client::HuduClient;
use crate::engine::{ApiOutcome, Query};
use crate::error::Result;
use crate::types::Method;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The field kinds a layout can carry. Serialized exactly as the platform
/// spells them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldType {
    Text,
    RichText,
    Heading,
    CheckBox,
    Website,
    Password,
    Email,
    Number,
    Date,
    Dropdown,
    Embed,
    Phone,
    AssetLink,
    AssetTag,
}

/// One field definition inside a layout
#[derive(Debug, Clone, Serialize)]
pub struct LayoutField {
    pub label: String,
    pub show_in_list: bool,
    pub required: bool,
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<i64>,
    pub expiration: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkable_id: Option<i64>,
}

impl LayoutField {
    /// A field with just the required attributes
    pub fn new(
        label: impl Into<String>,
        show_in_list: bool,
        required: bool,
        field_type: FieldType,
    ) -> Self {
        Self {
            label: label.into(),
            show_in_list,
            required,
            field_type,
            min: None,
            max: None,
            hint: None,
            options: None,
            position: None,
            expiration: false,
            linkable_id: None,
        }
    }
}

/// Body for creating or updating an asset layout
#[derive(Debug, Clone, Serialize)]
pub struct NewAssetLayout {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub icon_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_passwords: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_photos: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_comments: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_files: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password_types: Option<String>,
    pub fields: Vec<LayoutField>,
}

impl NewAssetLayout {
    /// A layout body with just the required fields
    pub fn new(
        name: impl Into<String>,
        icon: impl Into<String>,
        color: impl Into<String>,
        icon_color: impl Into<String>,
        fields: Vec<LayoutField>,
    ) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            icon_color: icon_color.into(),
            include_passwords: None,
            include_photos: None,
            include_comments: None,
            include_files: None,
            password_types: None,
            fields,
        }
    }
}

impl HuduClient {
    /// List asset layouts, optionally filtered by name
    pub fn get_asset_layouts(&self, name: Option<&str>) -> Result<Vec<Value>> {
        let mut query = Query::new();
        query.set_opt("name", name);
        self.fetch("asset_layouts", query)
    }

    /// Fetch one asset layout, as a one-element batch
    pub fn get_asset_layout(&self, id: i64) -> Result<Vec<Value>> {
        self.fetch(&format!("asset_layouts/{id}"), Query::new())
    }

    /// Create an asset layout
    pub fn create_asset_layout(&self, layout: &NewAssetLayout) -> Result<ApiOutcome> {
        self.submit(Method::POST, "asset_layouts", json!({ "asset_layout": layout }))
    }

    /// Update an asset layout
    pub fn update_asset_layout(&self, id: i64, layout: &NewAssetLayout) -> Result<ApiOutcome> {
        self.submit(
            Method::PUT,
            &format!("asset_layouts/{id}"),
            json!({ "asset_layout": layout }),
        )
    }
}
