use std::fmt;

use zeroize::Zeroizing;

use crate::curve::EcCurveId;

/// Secret byte string, wiped on drop
pub type SecretBytes = Zeroizing<Vec<u8>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicParams {
    pub modulus: Vec<u8>,
    pub exponent: Vec<u8>,
}

impl RsaPublicParams {
    /// Size of the modulus in bits, ignoring leading zero bytes
    pub fn modulus_bits(&self) -> usize {
        let significant = match self.modulus.iter().position(|&b| b != 0) {
            None => return 0,
            Some(first) => &self.modulus[first..],
        };
        significant.len() * 8 - significant[0].leading_zeros() as usize
    }
}

/// The Chinese Remainder Theorem parameters of an RSA private key.
///
/// RFC 7518 §6.3.2 requires all of them to be present if any is.
#[derive(Clone, PartialEq, Eq)]
pub struct RsaCrtParams {
    pub p: SecretBytes,
    pub q: SecretBytes,
    pub dp: SecretBytes,
    pub dq: SecretBytes,
    pub qi: SecretBytes,
}

#[derive(Clone, PartialEq, Eq)]
pub struct RsaPrivateParams {
    pub d: SecretBytes,
    pub crt: Option<RsaCrtParams>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EcPublicParams {
    pub curve: EcCurveId,
    pub x: Vec<u8>,
    pub y: Vec<u8>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct EcPrivateParams {
    pub d: SecretBytes,
}

/// Validated key parameters extracted from a JWK
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    Rsa(RsaPublicParams, Option<RsaPrivateParams>),
    Ec(EcPublicParams, Option<EcPrivateParams>),
}

impl KeyMaterial {
    pub fn has_private_key(&self) -> bool {
        match self {
            KeyMaterial::Rsa(_, private) => private.is_some(),
            KeyMaterial::Ec(_, private) => private.is_some(),
        }
    }

    /// The same material, without the private part
    pub fn public_only(&self) -> KeyMaterial {
        match self {
            KeyMaterial::Rsa(public, _) => KeyMaterial::Rsa(public.clone(), None),
            KeyMaterial::Ec(public, _) => KeyMaterial::Ec(public.clone(), None),
        }
    }
}

impl fmt::Debug for RsaCrtParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaCrtParams").finish_non_exhaustive()
    }
}

impl fmt::Debug for RsaPrivateParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaPrivateParams")
            .field("crt", &self.crt.is_some())
            .finish_non_exhaustive()
    }
}

impl fmt::Debug for EcPrivateParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EcPrivateParams").finish_non_exhaustive()
    }
}
