use std::fmt;

use crate::algorithms::*;
use crate::common::*;
use crate::curve::EcCurveId;
use crate::error::*;
use crate::factory::*;
use crate::jwk::{JwkDocument, KeyType};
use crate::material::*;
use crate::reconstructor::*;

enum InnerKey {
    Rsa(RSAKey),
    Ec(ECKey),
}

/// A key reconstructed from a JWK, usable to sign and verify JWS payloads
pub struct KeyHandle {
    key: InnerKey,
    metadata: KeyMetadata,
}

impl From<RSAKey> for KeyHandle {
    fn from(key: RSAKey) -> Self {
        KeyHandle {
            key: InnerKey::Rsa(key),
            metadata: KeyMetadata::default(),
        }
    }
}

impl From<ECKey> for KeyHandle {
    fn from(key: ECKey) -> Self {
        KeyHandle {
            key: InnerKey::Ec(key),
            metadata: KeyMetadata::default(),
        }
    }
}

impl KeyHandle {
    /// Reconstructs a key from the JSON representation of a JWK.
    pub fn from_jwk(jwk: &str) -> Result<Self, JWKError> {
        Self::from_jwk_with_options(jwk, &ConversionOptions::default())
    }

    pub fn from_jwk_with_options(jwk: &str, options: &ConversionOptions) -> Result<Self, JWKError> {
        let doc = JwkDocument::parse(jwk)?;
        let key = JwkReconstructor::new()
            .with_options(options.clone())
            .reconstruct_document(&doc)?;
        Ok(key.with_metadata(doc.metadata()))
    }

    pub fn with_metadata(mut self, metadata: KeyMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_key_id(mut self, key_id: &str) -> Self {
        self.metadata.key_id = Some(key_id.to_string());
        self
    }

    pub fn metadata(&self) -> &KeyMetadata {
        &self.metadata
    }

    pub fn key_id(&self) -> Option<&str> {
        self.metadata.key_id.as_deref()
    }

    pub fn key_type(&self) -> KeyType {
        match &self.key {
            InnerKey::Rsa(_) => KeyType::Rsa,
            InnerKey::Ec(_) => KeyType::Ec,
        }
    }

    /// The curve of an EC key
    pub fn curve(&self) -> Option<EcCurveId> {
        match &self.key {
            InnerKey::Rsa(_) => None,
            InnerKey::Ec(key) => Some(key.curve()),
        }
    }

    pub fn has_private_key(&self) -> bool {
        match &self.key {
            InnerKey::Rsa(key) => key.has_private_key(),
            InnerKey::Ec(key) => key.has_private_key(),
        }
    }

    /// The JWS algorithm ("alg") of signatures made with this key
    pub fn jws_algorithm(&self) -> &'static str {
        match &self.key {
            InnerKey::Rsa(_) => "RS256",
            InnerKey::Ec(key) => key.curve().jws_algorithm(),
        }
    }

    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, JWKError> {
        match &self.key {
            InnerKey::Rsa(key) => key.sign(message),
            InnerKey::Ec(key) => key.sign(message),
        }
    }

    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), JWKError> {
        match &self.key {
            InnerKey::Rsa(key) => key.verify(message, signature),
            InnerKey::Ec(key) => key.verify(message, signature),
        }
    }

    /// The public parameters, as held by the crypto backend
    pub fn export_public(&self) -> KeyMaterial {
        match &self.key {
            InnerKey::Rsa(key) => KeyMaterial::Rsa(key.public_params(), None),
            InnerKey::Ec(key) => KeyMaterial::Ec(key.public_params(), None),
        }
    }

    /// All the parameters, or `None` for a public key
    pub fn export_private(&self) -> Option<KeyMaterial> {
        match &self.key {
            InnerKey::Rsa(key) => {
                let private = key.private_params()?;
                Some(KeyMaterial::Rsa(key.public_params(), Some(private)))
            }
            InnerKey::Ec(key) => {
                let private = key.private_params()?;
                Some(KeyMaterial::Ec(key.public_params(), Some(private)))
            }
        }
    }

    /// A public key with the same metadata
    pub fn public_key(&self) -> Result<KeyHandle, JWKError> {
        let key = match self.export_public() {
            KeyMaterial::Rsa(public, _) => NativeKeyFactory.build_rsa_key(public, None)?,
            KeyMaterial::Ec(public, _) => NativeKeyFactory.build_ec_key(public, None)?,
        };
        Ok(key.with_metadata(self.metadata.clone()))
    }
}

impl fmt::Debug for KeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyHandle")
            .field("alg", &self.jws_algorithm())
            .field("private", &self.has_private_key())
            .field("metadata", &self.metadata)
            .finish()
    }
}
