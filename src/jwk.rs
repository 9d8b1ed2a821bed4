use serde::Deserialize;
use serde_json::Value;

use crate::common::*;
use crate::error::*;

/// Key types that can be reconstructed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    Rsa,
    Ec,
}

impl KeyType {
    pub fn from_kty(kty: &str) -> Result<Self, JWKError> {
        match kty {
            "RSA" => Ok(KeyType::Rsa),
            "EC" => Ok(KeyType::Ec),
            other => Err(JWKError::UnsupportedKeyType(other.to_string())),
        }
    }

    pub fn kty(&self) -> &'static str {
        match self {
            KeyType::Rsa => "RSA",
            KeyType::Ec => "EC",
        }
    }
}

/// A JSON Web Key, projected onto the members defined by RFC 7517 and RFC 7518
/// for RSA and EC keys.
///
/// Members unknown to this crate (`key_ops`, `x5c`, `oth`...) are ignored.
#[derive(Clone, Default, Deserialize)]
pub struct JwkDocument {
    pub kty: String,

    #[serde(default)]
    pub kid: Option<String>,
    #[serde(default)]
    pub alg: Option<String>,
    #[serde(default, rename = "use")]
    pub key_use: Option<String>,

    #[serde(default)]
    pub n: Option<String>,
    #[serde(default)]
    pub e: Option<String>,
    #[serde(default)]
    pub d: Option<String>,
    #[serde(default)]
    pub p: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub dp: Option<String>,
    #[serde(default)]
    pub dq: Option<String>,
    #[serde(default)]
    pub qi: Option<String>,

    #[serde(default)]
    pub crv: Option<String>,
    #[serde(default)]
    pub x: Option<String>,
    #[serde(default)]
    pub y: Option<String>,
}

impl JwkDocument {
    /// Parses a JWK from its JSON representation.
    ///
    /// The text has to be a JSON object with a `kty` member. An empty or `null`
    /// `kty` is handled as if it was missing. The value of `kty` itself is only
    /// checked by `key_type()`.
    pub fn parse(json: &str) -> Result<Self, JWKError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| JWKError::MalformedInput(e.to_string()))?;
        let object = match value {
            Value::Object(object) => object,
            _ => return Err(JWKError::MalformedInput("not a JSON object".to_string())),
        };
        match object.get("kty") {
            None | Some(Value::Null) => return Err(JWKError::MissingKeyType),
            Some(Value::String(kty)) if kty.is_empty() => return Err(JWKError::MissingKeyType),
            _ => {}
        }
        serde_json::from_value(Value::Object(object))
            .map_err(|e| JWKError::MalformedInput(e.to_string()))
    }

    pub fn key_type(&self) -> Result<KeyType, JWKError> {
        KeyType::from_kty(&self.kty)
    }

    pub fn metadata(&self) -> KeyMetadata {
        KeyMetadata {
            key_id: self.kid.clone(),
            algorithm: self.alg.clone(),
            key_use: self.key_use.clone(),
        }
    }
}

/// Returns the value of a member, unless it is absent or empty.
pub(crate) fn non_empty(member: &Option<String>) -> Option<&str> {
    member.as_deref().filter(|value| !value.is_empty())
}
