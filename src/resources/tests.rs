//! Tests for facade request shaping

use super::assets::normalize_custom_fields;
use super::*;
use crate::types::JsonObject;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

fn custom_fields(pairs: &[(&str, Value)]) -> JsonObject {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), value.clone()))
        .collect()
}

#[test]
fn test_custom_field_keys_are_normalized() {
    let fields = custom_fields(&[("Serial Number", json!("X1-99"))]);

    assert_eq!(
        normalize_custom_fields(fields),
        json!([{"serial_number": "X1-99"}])
    );
}

#[test]
fn test_each_custom_field_becomes_its_own_entry() {
    let fields = custom_fields(&[
        ("Serial Number", json!("X1-99")),
        ("Warranty Until", json!("2027-01-01")),
        ("already_snake", json!(7)),
    ]);

    assert_eq!(
        normalize_custom_fields(fields),
        json!([
            {"serial_number": "X1-99"},
            {"warranty_until": "2027-01-01"},
            {"already_snake": 7},
        ])
    );
}

#[test]
fn test_unset_article_fields_are_omitted() {
    let article = NewArticle::new("Switch runbook", "<p>steps</p>");

    let body = serde_json::to_value(&article).unwrap();
    assert_eq!(
        body,
        json!({"name": "Switch runbook", "content": "<p>steps</p>"})
    );
}

#[test]
fn test_set_article_fields_are_kept() {
    let mut article = NewArticle::new("Switch runbook", "<p>steps</p>");
    article.company_id = Some(7);
    article.enable_sharing = Some(false);

    let body = serde_json::to_value(&article).unwrap();
    assert_eq!(body["company_id"], 7);
    assert_eq!(body["enable_sharing"], false);
    assert!(body.get("folder_id").is_none());
}

#[test]
fn test_password_body_required_fields_only() {
    let password = NewAssetPassword::new("admin", "root", "hunter2", 7);

    let body = serde_json::to_value(&password).unwrap();
    assert_eq!(
        body,
        json!({
            "name": "admin",
            "username": "root",
            "password": "hunter2",
            "company_id": 7,
        })
    );
}

#[test]
fn test_layout_field_serializes_the_platform_spelling() {
    let field = LayoutField::new("Backups enabled", true, false, FieldType::CheckBox);

    let body = serde_json::to_value(&field).unwrap();
    assert_eq!(body["field_type"], "CheckBox");
    assert_eq!(body["expiration"], false);
    assert!(body.get("linkable_id").is_none());
}

#[test]
fn test_layout_body_carries_its_fields() {
    let layout = NewAssetLayout::new(
        "Workstation",
        "fa-desktop",
        "#3455DB",
        "#FFFFFF",
        vec![LayoutField::new("Hostname", true, true, FieldType::Text)],
    );

    let body = serde_json::to_value(&layout).unwrap();
    assert_eq!(body["fields"][0]["label"], "Hostname");
    assert_eq!(body["fields"][0]["field_type"], "Text");
    assert!(body.get("include_passwords").is_none());
}
