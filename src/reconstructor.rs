use tracing::debug;

use crate::common::*;
use crate::error::*;
use crate::factory::*;
use crate::jwk::{JwkDocument, KeyType};
use crate::material::*;

/// Converts JWKs into keys built by a `KeyFactory`.
///
/// Every check fails fast: the first invalid or unsupported member aborts the
/// conversion, and nothing is handed to the factory.
#[derive(Debug, Clone, Default)]
pub struct JwkReconstructor<F = NativeKeyFactory> {
    factory: F,
    options: ConversionOptions,
}

impl JwkReconstructor<NativeKeyFactory> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: KeyFactory> JwkReconstructor<F> {
    pub fn with_factory(factory: F) -> Self {
        JwkReconstructor {
            factory,
            options: ConversionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ConversionOptions) -> Self {
        self.options = options;
        self
    }

    pub fn options(&self) -> &ConversionOptions {
        &self.options
    }

    /// Parses a JWK and builds the key it describes.
    pub fn reconstruct(&self, jwk: &str) -> Result<F::Key, JWKError> {
        let doc = JwkDocument::parse(jwk)?;
        self.reconstruct_document(&doc)
    }

    pub fn reconstruct_document(&self, doc: &JwkDocument) -> Result<F::Key, JWKError> {
        match self.key_material(doc)? {
            KeyMaterial::Rsa(public, private) => self.factory.build_rsa_key(public, private),
            KeyMaterial::Ec(public, private) => self.factory.build_ec_key(public, private),
        }
    }

    /// Extracts and validates the key parameters of a JWK.
    pub fn key_material(&self, doc: &JwkDocument) -> Result<KeyMaterial, JWKError> {
        let key_type = doc.key_type().map_err(|e| {
            debug!(kty = %doc.kty, "unsupported key type");
            e
        })?;
        debug!(kty = key_type.kty(), kid = ?doc.kid, "reconstructing a key from a JWK");

        let material = match key_type {
            KeyType::Rsa => {
                let public = RsaPublicParams::from_jwk(doc)?;
                if let Some(min_bits) = self.options.min_rsa_modulus_bits {
                    let bits = public.modulus_bits();
                    if bits < min_bits {
                        debug!(bits, min_bits, "RSA modulus is too short");
                        return Err(JWKError::UnsupportedRsaModulus(bits));
                    }
                }
                let private = RsaPrivateParams::from_jwk(doc)?;
                KeyMaterial::Rsa(public, private)
            }
            KeyType::Ec => {
                let public = EcPublicParams::from_jwk(doc)?;
                if let Some(allowed_curves) = &self.options.allowed_curves {
                    if !allowed_curves.contains(&public.curve) {
                        debug!(curve = %public.curve, "curve is not allowed");
                        return Err(JWKError::UnsupportedCurve(public.curve.to_string()));
                    }
                }
                let private = EcPrivateParams::from_jwk(doc)?;
                KeyMaterial::Ec(public, private)
            }
        };

        if self.options.require_private_key && !material.has_private_key() {
            debug!("public key found where a private key is required");
            return Err(JWKError::MissingPrivateKey);
        }
        Ok(material)
    }
}
