use p256::ecdsa::signature::{Signer as _, Verifier as _};
use tracing::debug;

use crate::base64url;
use crate::curve::EcCurveId;
use crate::error::*;
use crate::jwk::{non_empty, JwkDocument};
use crate::material::*;

impl EcPublicParams {
    /// Resolves the curve and extracts the public coordinates of an EC JWK.
    pub fn from_jwk(jwk: &JwkDocument) -> Result<Self, JWKError> {
        let curve = EcCurveId::resolve(jwk.crv.as_deref())?;
        let (x, y) = match (non_empty(&jwk.x), non_empty(&jwk.y)) {
            (Some(x), Some(y)) => (x, y),
            _ => {
                debug!(%curve, "EC JWK without public coordinates");
                return Err(JWKError::MissingEcPublicParams);
            }
        };
        Ok(EcPublicParams {
            curve,
            x: base64url::decode("x", x)?,
            y: base64url::decode("y", y)?,
        })
    }

    /// SEC1 uncompressed encoding of the point
    pub fn to_sec1_uncompressed(&self) -> Vec<u8> {
        let mut sec1 = Vec::with_capacity(1 + self.x.len() + self.y.len());
        sec1.push(0x04);
        sec1.extend_from_slice(&self.x);
        sec1.extend_from_slice(&self.y);
        sec1
    }
}

impl EcPrivateParams {
    /// Extracts the private scalar of an EC JWK, if there is one.
    pub fn from_jwk(jwk: &JwkDocument) -> Result<Option<Self>, JWKError> {
        match non_empty(&jwk.d) {
            None => Ok(None),
            Some(d) => Ok(Some(EcPrivateParams {
                d: base64url::decode_secret("d", d)?,
            })),
        }
    }
}

#[doc(hidden)]
pub enum ECPublicKey {
    P256(p256::ecdsa::VerifyingKey),
    P384(p384::ecdsa::VerifyingKey),
    P521(p521::ecdsa::VerifyingKey),
}

#[doc(hidden)]
pub enum ECSecretKey {
    P256(p256::ecdsa::SigningKey),
    P384(p384::ecdsa::SigningKey),
    P521(p521::ecdsa::SigningKey),
}

impl ECPublicKey {
    fn from_sec1_bytes(curve: EcCurveId, raw: &[u8]) -> Result<Self, JWKError> {
        let invalid = || JWKError::NativeKeyRejected(format!("invalid {} point", curve));
        let pk = match curve {
            EcCurveId::P256 => p256::ecdsa::VerifyingKey::from_sec1_bytes(raw)
                .map(ECPublicKey::P256)
                .map_err(|_| invalid())?,
            EcCurveId::P384 => p384::ecdsa::VerifyingKey::from_sec1_bytes(raw)
                .map(ECPublicKey::P384)
                .map_err(|_| invalid())?,
            EcCurveId::P521 => p521::ecdsa::VerifyingKey::from_sec1_bytes(raw)
                .map(ECPublicKey::P521)
                .map_err(|_| invalid())?,
        };
        Ok(pk)
    }

    fn to_bytes_uncompressed(&self) -> Vec<u8> {
        match self {
            ECPublicKey::P256(pk) => pk.to_encoded_point(false).as_bytes().to_vec(),
            ECPublicKey::P384(pk) => pk.to_encoded_point(false).as_bytes().to_vec(),
            ECPublicKey::P521(pk) => pk.to_encoded_point(false).as_bytes().to_vec(),
        }
    }
}

impl ECSecretKey {
    fn from_bytes(curve: EcCurveId, raw: &[u8]) -> Result<Self, JWKError> {
        let invalid = || JWKError::NativeKeyRejected(format!("invalid {} scalar", curve));
        if raw.len() != curve.field_size() {
            return Err(invalid());
        }
        let sk = match curve {
            EcCurveId::P256 => p256::ecdsa::SigningKey::from_slice(raw)
                .map(ECSecretKey::P256)
                .map_err(|_| invalid())?,
            EcCurveId::P384 => p384::ecdsa::SigningKey::from_slice(raw)
                .map(ECSecretKey::P384)
                .map_err(|_| invalid())?,
            EcCurveId::P521 => p521::ecdsa::SigningKey::from_slice(raw)
                .map(ECSecretKey::P521)
                .map_err(|_| invalid())?,
        };
        Ok(sk)
    }

    fn public_key_uncompressed(&self) -> Vec<u8> {
        match self {
            ECSecretKey::P256(sk) => {
                sk.verifying_key().to_encoded_point(false).as_bytes().to_vec()
            }
            ECSecretKey::P384(sk) => {
                sk.verifying_key().to_encoded_point(false).as_bytes().to_vec()
            }
            ECSecretKey::P521(sk) => p521::ecdsa::VerifyingKey::from(sk)
                .to_encoded_point(false)
                .as_bytes()
                .to_vec(),
        }
    }

    fn to_bytes(&self) -> SecretBytes {
        let bytes = match self {
            ECSecretKey::P256(sk) => sk.to_bytes().to_vec(),
            ECSecretKey::P384(sk) => sk.to_bytes().to_vec(),
            ECSecretKey::P521(sk) => sk.to_bytes().to_vec(),
        };
        SecretBytes::new(bytes)
    }
}

/// An ECDSA key over one of the NIST curves
pub struct ECKey {
    curve: EcCurveId,
    pk: ECPublicKey,
    sk: Option<ECSecretKey>,
}

impl ECKey {
    pub fn from_params(
        public: &EcPublicParams,
        private: Option<&EcPrivateParams>,
    ) -> Result<Self, JWKError> {
        let curve = public.curve;
        let size = curve.field_size();
        if public.x.len() != size || public.y.len() != size {
            return Err(JWKError::NativeKeyRejected(format!(
                "{} coordinates must be {} bytes long",
                curve, size
            )));
        }
        let sec1 = public.to_sec1_uncompressed();
        let pk = ECPublicKey::from_sec1_bytes(curve, &sec1)?;
        let sk = match private {
            None => None,
            Some(private) => {
                let sk = ECSecretKey::from_bytes(curve, &private.d)?;
                if sk.public_key_uncompressed() != sec1 {
                    return Err(JWKError::NativeKeyRejected(
                        "the private key doesn't match the public key".to_string(),
                    ));
                }
                Some(sk)
            }
        };
        Ok(ECKey { curve, pk, sk })
    }

    pub fn curve(&self) -> EcCurveId {
        self.curve
    }

    pub fn has_private_key(&self) -> bool {
        self.sk.is_some()
    }

    pub fn public_params(&self) -> EcPublicParams {
        let size = self.curve.field_size();
        let sec1 = self.pk.to_bytes_uncompressed();
        EcPublicParams {
            curve: self.curve,
            x: sec1[1..1 + size].to_vec(),
            y: sec1[1 + size..].to_vec(),
        }
    }

    pub fn private_params(&self) -> Option<EcPrivateParams> {
        self.sk.as_ref().map(|sk| EcPrivateParams { d: sk.to_bytes() })
    }

    /// Signs with the hash function associated with the curve.
    ///
    /// The signature is the fixed-size concatenation of `r` and `s` used by JWS.
    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, JWKError> {
        let sk = self.sk.as_ref().ok_or(JWKError::MissingPrivateKey)?;
        let signature = match sk {
            ECSecretKey::P256(sk) => {
                let signature: p256::ecdsa::Signature = sk.sign(message);
                signature.to_bytes().to_vec()
            }
            ECSecretKey::P384(sk) => {
                let signature: p384::ecdsa::Signature = sk.sign(message);
                signature.to_bytes().to_vec()
            }
            ECSecretKey::P521(sk) => {
                let signature: p521::ecdsa::Signature = sk.sign(message);
                signature.to_bytes().to_vec()
            }
        };
        Ok(signature)
    }

    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), JWKError> {
        let verified = match &self.pk {
            ECPublicKey::P256(pk) => {
                let signature = p256::ecdsa::Signature::from_slice(signature)
                    .map_err(|_| JWKError::InvalidSignature)?;
                pk.verify(message, &signature)
            }
            ECPublicKey::P384(pk) => {
                let signature = p384::ecdsa::Signature::from_slice(signature)
                    .map_err(|_| JWKError::InvalidSignature)?;
                pk.verify(message, &signature)
            }
            ECPublicKey::P521(pk) => {
                let signature = p521::ecdsa::Signature::from_slice(signature)
                    .map_err(|_| JWKError::InvalidSignature)?;
                pk.verify(message, &signature)
            }
        };
        verified.map_err(|_| JWKError::InvalidSignature)
    }
}
