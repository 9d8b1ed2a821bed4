use std::collections::HashSet;

use crate::curve::EcCurveId;

/// Additional constraints to enforce while converting a JWK
#[derive(Clone, Debug, Default)]
pub struct ConversionOptions {
    /// Reject keys that don't carry private material
    ///
    /// ACME account keys and order-signing keys have to be able to sign;
    /// a public-only JWK is then a configuration mistake.
    pub require_private_key: bool,

    /// Reject RSA keys with a modulus shorter than the given number of bits
    pub min_rsa_modulus_bits: Option<usize>,

    /// Only accept these curves for EC keys
    pub allowed_curves: Option<HashSet<EcCurveId>>,
}

/// Advisory members of a JWK that are not part of the key material
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct KeyMetadata {
    /// Key identifier ("kid")
    pub key_id: Option<String>,
    /// Intended algorithm ("alg")
    pub algorithm: Option<String>,
    /// Intended use ("use"), usually "sig"
    pub key_use: Option<String>,
}
