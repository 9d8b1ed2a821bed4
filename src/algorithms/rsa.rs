use rsa::pkcs1v15;
use rsa::signature::{RandomizedSigner as _, SignatureEncoding as _, Verifier as _};
use rsa::traits::{PrivateKeyParts as _, PublicKeyParts as _};
use rsa::{BigUint, RsaPrivateKey, RsaPublicKey};
use sha2::Sha256;
use std::convert::TryFrom;
use tracing::{debug, trace};
use zeroize::Zeroizing;

use crate::base64url;
use crate::error::*;
use crate::jwk::{non_empty, JwkDocument};
use crate::material::*;

impl RsaPublicParams {
    /// Extracts the modulus and the public exponent of an RSA JWK.
    pub fn from_jwk(jwk: &JwkDocument) -> Result<Self, JWKError> {
        let (n, e) = match (non_empty(&jwk.n), non_empty(&jwk.e)) {
            (Some(n), Some(e)) => (n, e),
            _ => {
                debug!("RSA JWK without a modulus or an exponent");
                return Err(JWKError::MissingRsaPublicParams);
            }
        };
        Ok(RsaPublicParams {
            exponent: base64url::decode("e", e)?,
            modulus: base64url::decode("n", n)?,
        })
    }
}

impl RsaPrivateParams {
    /// Extracts the private exponent and, if present, the CRT parameters.
    ///
    /// Returns `None` for public keys. CRT parameters without a private
    /// exponent are ignored.
    pub fn from_jwk(jwk: &JwkDocument) -> Result<Option<Self>, JWKError> {
        let crt = [
            non_empty(&jwk.p),
            non_empty(&jwk.q),
            non_empty(&jwk.dp),
            non_empty(&jwk.dq),
            non_empty(&jwk.qi),
        ];
        let present = crt.iter().filter(|member| member.is_some()).count();

        let d = match non_empty(&jwk.d) {
            Some(d) => d,
            None => {
                if present > 0 {
                    trace!(present, "ignoring RSA CRT parameters without a private exponent");
                }
                return Ok(None);
            }
        };
        let d = base64url::decode_secret("d", d)?;

        let crt = match crt {
            [Some(p), Some(q), Some(dp), Some(dq), Some(qi)] => Some(RsaCrtParams {
                p: base64url::decode_secret("p", p)?,
                q: base64url::decode_secret("q", q)?,
                dp: base64url::decode_secret("dp", dp)?,
                dq: base64url::decode_secret("dq", dq)?,
                qi: base64url::decode_secret("qi", qi)?,
            }),
            [None, None, None, None, None] => None,
            _ => {
                debug!(present, "RSA JWK with a partial set of CRT parameters");
                return Err(JWKError::IncompleteRsaPrivateParams);
            }
        };
        Ok(Some(RsaPrivateParams { d, crt }))
    }
}

/// An RSA key backed by the `rsa` crate, signing with RSASSA-PKCS1-v1_5 and SHA-256
#[derive(Clone)]
pub struct RSAKey {
    pk: RsaPublicKey,
    sk: Option<RsaPrivateKey>,
}

fn native_error(e: rsa::Error) -> JWKError {
    JWKError::NativeKeyRejected(e.to_string())
}

fn to_secret(x: &BigUint) -> SecretBytes {
    Zeroizing::new(x.to_bytes_be())
}

impl RSAKey {
    pub fn from_params(
        public: &RsaPublicParams,
        private: Option<&RsaPrivateParams>,
    ) -> Result<Self, JWKError> {
        // RFC 7518 requires the minimal big-endian encoding
        if public.modulus.first() == Some(&0) || public.exponent.first() == Some(&0) {
            return Err(JWKError::NativeKeyRejected(
                "RSA public parameters with leading zero bytes".to_string(),
            ));
        }
        let n = BigUint::from_bytes_be(&public.modulus);
        let e = BigUint::from_bytes_be(&public.exponent);
        let pk = RsaPublicKey::new(n.clone(), e.clone()).map_err(native_error)?;
        let private = match private {
            None => return Ok(RSAKey { pk, sk: None }),
            Some(private) => private,
        };

        let d = BigUint::from_bytes_be(&private.d);
        // Without CRT parameters, the primes are recovered from n, e and d.
        let primes = match &private.crt {
            Some(crt) => vec![
                BigUint::from_bytes_be(&crt.p),
                BigUint::from_bytes_be(&crt.q),
            ],
            None => vec![],
        };
        let mut sk = RsaPrivateKey::from_components(n, e, d, primes).map_err(native_error)?;
        sk.validate().map_err(native_error)?;
        sk.precompute().map_err(native_error)?;

        if let Some(crt) = &private.crt {
            let dp = BigUint::from_bytes_be(&crt.dp);
            let dq = BigUint::from_bytes_be(&crt.dq);
            let qi = BigUint::from_bytes_be(&crt.qi);
            if sk.dp() != Some(&dp) || sk.dq() != Some(&dq) || sk.crt_coefficient() != Some(qi) {
                return Err(JWKError::NativeKeyRejected(
                    "inconsistent RSA CRT parameters".to_string(),
                ));
            }
        }
        Ok(RSAKey { pk, sk: Some(sk) })
    }

    pub fn has_private_key(&self) -> bool {
        self.sk.is_some()
    }

    pub fn modulus_bits(&self) -> usize {
        self.pk.n().bits()
    }

    pub fn public_params(&self) -> RsaPublicParams {
        RsaPublicParams {
            modulus: self.pk.n().to_bytes_be(),
            exponent: self.pk.e().to_bytes_be(),
        }
    }

    pub fn private_params(&self) -> Option<RsaPrivateParams> {
        let sk = self.sk.as_ref()?;
        let crt = match (sk.primes(), sk.dp(), sk.dq(), sk.crt_coefficient()) {
            ([p, q], Some(dp), Some(dq), Some(qi)) => Some(RsaCrtParams {
                p: to_secret(p),
                q: to_secret(q),
                dp: to_secret(dp),
                dq: to_secret(dq),
                qi: Zeroizing::new(qi.to_bytes_be()),
            }),
            _ => None,
        };
        Some(RsaPrivateParams {
            d: to_secret(sk.d()),
            crt,
        })
    }

    pub fn sign(&self, message: &[u8]) -> Result<Vec<u8>, JWKError> {
        let sk = self.sk.as_ref().ok_or(JWKError::MissingPrivateKey)?;
        let signing_key = pkcs1v15::SigningKey::<Sha256>::new(sk.clone());
        let mut rng = rand::thread_rng();
        let signature = signing_key
            .try_sign_with_rng(&mut rng, message)
            .map_err(|e| JWKError::NativeKeyRejected(e.to_string()))?;
        Ok(signature.to_vec())
    }

    pub fn verify(&self, message: &[u8], signature: &[u8]) -> Result<(), JWKError> {
        let verifying_key = pkcs1v15::VerifyingKey::<Sha256>::new(self.pk.clone());
        let signature =
            pkcs1v15::Signature::try_from(signature).map_err(|_| JWKError::InvalidSignature)?;
        verifying_key
            .verify(message, &signature)
            .map_err(|_| JWKError::InvalidSignature)
    }
}
