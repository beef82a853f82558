//! Settings passed explicitly to whatever needs them.
//!
//! # Design
//! There is no process-wide settings object. A `Settings` value is built once
//! (from defaults, a TOML string, or a file) and handed to the code that reads
//! it, so tests construct their own and never depend on initialization order.

use std::path::Path;

use toml::{Table, Value};

use crate::error::ConfigError;
use crate::types::Endpoint;

const DEFAULT_SETTINGS: &str = r#"
key = "value"
list = ["item1", "item2"]

[map]
key1 = "value1"
key2 = "value2"
"#;

/// An immutable table of settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    table: Table,
}

impl Settings {
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let table = toml::from_str::<Table>(source)?;
        Ok(Self { table })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&source)
    }

    /// Look up a setting; dotted keys descend into tables (`map.key1`).
    pub fn get(&self, key: &str) -> Option<&Value> {
        let mut parts = key.split('.');
        let mut value = self.table.get(parts.next()?)?;
        for part in parts {
            value = value.as_table()?.get(part)?;
        }
        Some(value)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn all(&self) -> &Table {
        &self.table
    }

    /// The API endpoint from `api.scheme`, `api.host` and `api.path`, each
    /// falling back to the default endpoint when unset.
    pub fn endpoint(&self) -> Result<Endpoint, ConfigError> {
        let fallback = Endpoint::default();
        Ok(Endpoint {
            scheme: self.string_or("api.scheme", fallback.scheme)?,
            host: self.string_or("api.host", fallback.host)?,
            path: self.string_or("api.path", fallback.path)?,
        })
    }

    fn string_or(&self, key: &str, fallback: String) -> Result<String, ConfigError> {
        match self.get(key) {
            None => Ok(fallback),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(ConfigError::Invalid {
                key: key.to_string(),
                expected: "string",
            }),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        // Constant input, parsing cannot fail.
        let table = toml::from_str(DEFAULT_SETTINGS).unwrap_or_default();
        Self { table }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = Settings::default();
        let expected = toml::toml! {
            key = "value"
            list = ["item1", "item2"]

            [map]
            key1 = "value1"
            key2 = "value2"
        };
        assert_eq!(settings.all(), &expected);
        assert_eq!(settings.get_str("key"), Some("value"));
        assert_eq!(settings.get_str("map.key2"), Some("value2"));
    }

    #[test]
    fn independent_settings_do_not_share_state() {
        let mock = Settings::from_toml_str(r#"mock = "mock""#).unwrap();
        assert_eq!(mock.all().len(), 1);
        assert_eq!(mock.get_str("mock"), Some("mock"));
        assert_eq!(mock.get("key"), None);

        assert_eq!(Settings::default().get_str("key"), Some("value"));
    }

    #[test]
    fn missing_and_non_table_lookups() {
        let settings = Settings::default();
        assert!(settings.get("nope").is_none());
        assert!(settings.get("key.inner").is_none());
        assert!(settings.get("map.key3").is_none());
        assert!(settings.get_str("list").is_none());
    }

    #[test]
    fn endpoint_defaults_when_unset() {
        let endpoint = Settings::default().endpoint().unwrap();
        assert_eq!(endpoint, Endpoint::default());
    }

    #[test]
    fn endpoint_overrides_per_field() {
        let settings = Settings::from_toml_str(
            r#"
            [api]
            scheme = "http"
            host = "127.0.0.1:3000"
            "#,
        )
        .unwrap();
        let endpoint = settings.endpoint().unwrap();
        assert_eq!(endpoint.scheme, "http");
        assert_eq!(endpoint.host, "127.0.0.1:3000");
        assert_eq!(endpoint.path, "/v1/users/0");
    }

    #[test]
    fn endpoint_rejects_non_string() {
        let settings = Settings::from_toml_str("[api]\nhost = 3000\n").unwrap();
        let err = settings.endpoint().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "api.host"));
        assert_eq!(err.to_string(), "setting `api.host` must be a string");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Settings::from_toml_str("key = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Settings::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }

    #[test]
    fn load_reads_file() {
        let path = std::env::temp_dir().join(format!("user-api-settings-{}.toml", std::process::id()));
        std::fs::write(&path, "[api]\npath = \"/users/0\"\n").unwrap();
        let settings = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(settings.endpoint().unwrap().path, "/users/0");
    }
}
