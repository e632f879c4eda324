//! Tests for configuration resolution

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::Path;
use url::Url;

fn no_env(_: &str) -> Option<String> {
    None
}

fn missing_secret() -> &'static Path {
    Path::new("/nonexistent/HUDU_API_KEY")
}

#[test]
fn test_explicit_values_win() {
    let config = ClientConfig::resolve_from(
        Some("explicit-key".into()),
        Some("docs.example.com".into()),
        Some("v2".into()),
        |_| Some("from-env".into()),
        missing_secret(),
    )
    .unwrap();

    assert_eq!(config.api_key, "explicit-key");
    assert_eq!(config.domain, "docs.example.com");
    assert_eq!(config.api_version, "v2");
    assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
}

#[test]
fn test_environment_fallback() {
    let env = |name: &str| match name {
        ENV_API_KEY => Some("env-key".to_string()),
        ENV_DOMAIN => Some("env.example.com".to_string()),
        ENV_API_VERSION => Some("v3".to_string()),
        _ => None,
    };

    let config = ClientConfig::resolve_from(None, None, None, env, missing_secret()).unwrap();

    assert_eq!(config.api_key, "env-key");
    assert_eq!(config.domain, "env.example.com");
    assert_eq!(config.api_version, "v3");
}

#[test]
fn test_api_version_defaults() {
    let env = |name: &str| match name {
        ENV_API_KEY => Some("env-key".to_string()),
        ENV_DOMAIN => Some("env.example.com".to_string()),
        _ => None,
    };

    let config = ClientConfig::resolve_from(None, None, None, env, missing_secret()).unwrap();
    assert_eq!(config.api_version, DEFAULT_API_VERSION);
}

#[test]
fn test_secret_file_fallback() {
    let mut secret = tempfile::NamedTempFile::new().unwrap();
    writeln!(secret, "  key-from-secret  ").unwrap();

    let config = ClientConfig::resolve_from(
        None,
        Some("docs.example.com".into()),
        None,
        no_env,
        secret.path(),
    )
    .unwrap();

    assert_eq!(config.api_key, "key-from-secret");
}

#[test]
fn test_empty_secret_is_missing() {
    let mut secret = tempfile::NamedTempFile::new().unwrap();
    writeln!(secret, "   ").unwrap();

    let err = ClientConfig::resolve_from(
        None,
        Some("docs.example.com".into()),
        None,
        no_env,
        secret.path(),
    )
    .unwrap_err();

    assert!(matches!(err, Error::MissingCredential { ref field } if field == "api_key"));
}

#[test]
fn test_missing_api_key() {
    let err = ClientConfig::resolve_from(
        None,
        Some("docs.example.com".into()),
        None,
        no_env,
        missing_secret(),
    )
    .unwrap_err();

    assert!(matches!(err, Error::MissingCredential { ref field } if field == "api_key"));
}

#[test]
fn test_missing_domain() {
    let err = ClientConfig::resolve_from(
        Some("key".into()),
        None,
        None,
        no_env,
        missing_secret(),
    )
    .unwrap_err();

    assert!(matches!(err, Error::MissingCredential { ref field } if field == "domain"));
}

#[test]
fn test_derived_endpoint_base() {
    let config = ClientConfig::resolve_from(
        Some("key".into()),
        Some("docs.example.com".into()),
        None,
        no_env,
        missing_secret(),
    )
    .unwrap();

    assert_eq!(
        config.endpoint_base().unwrap().as_str(),
        "https://docs.example.com/api/v1/"
    );
}

#[test]
fn test_base_url_override_gains_trailing_slash() {
    let mut config = ClientConfig::resolve_from(
        Some("key".into()),
        Some("docs.example.com".into()),
        None,
        no_env,
        missing_secret(),
    )
    .unwrap();
    config.base_url = Some(Url::parse("http://127.0.0.1:4444/api/v1").unwrap());

    assert_eq!(
        config.endpoint_base().unwrap().as_str(),
        "http://127.0.0.1:4444/api/v1/"
    );
}
