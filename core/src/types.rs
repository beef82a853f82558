//! Wire types for the user API.
//!
//! # Design
//! `User` is defined independently from the mock-server crate; the integration
//! tests catch any drift between the two. Only a JSON object is a user. Every
//! field falls back to its zero value when the key is absent or `null`, and
//! unknown keys are ignored, so producers may add fields without breaking this
//! client.

use serde::de::{Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A user as returned by `GET /users/{id}`.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct User {
    pub login: String,
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
}

impl<'de> Deserialize<'de> for User {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Derived struct impls also accept sequences; require an object first.
        let object = Map::<String, Value>::deserialize(deserializer)?;
        let fields = UserFields::deserialize(Value::Object(object)).map_err(D::Error::custom)?;
        Ok(Self {
            login: fields.login,
            id: fields.id,
            kind: fields.kind,
        })
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct UserFields {
    #[serde(deserialize_with = "null_as_default")]
    login: String,
    #[serde(deserialize_with = "null_as_default")]
    id: i64,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    kind: String,
}

impl Default for UserFields {
    fn default() -> Self {
        let User { login, id, kind } = User::default();
        Self { login, id, kind }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The parts a request URL is assembled from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub scheme: String,
    pub host: String,
    pub path: String,
}

impl Endpoint {
    pub fn new(scheme: &str, host: &str, path: &str) -> Self {
        Self {
            scheme: scheme.to_string(),
            host: host.to_string(),
            path: path.to_string(),
        }
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new("https", "api.foo.com", "/v1/users/0")
    }
}
