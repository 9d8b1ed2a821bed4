use std::fmt;

use crate::error::*;

/// Curves an EC JWK can be defined over.
///
/// Only the NIST curves used by ACME servers are recognized; Edwards and
/// Montgomery curves are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EcCurveId {
    P256,
    P384,
    P521,
}

impl EcCurveId {
    /// Maps the value of a `crv` member to a curve.
    pub fn resolve(crv: Option<&str>) -> Result<Self, JWKError> {
        match crv {
            None | Some("") => Err(JWKError::MissingCurve),
            Some("P-256") => Ok(EcCurveId::P256),
            Some("P-384") => Ok(EcCurveId::P384),
            Some("P-521") => Ok(EcCurveId::P521),
            Some(other) => Err(JWKError::UnsupportedCurve(other.to_string())),
        }
    }

    /// JWK curve name
    pub fn name(&self) -> &'static str {
        match self {
            EcCurveId::P256 => "P-256",
            EcCurveId::P384 => "P-384",
            EcCurveId::P521 => "P-521",
        }
    }

    /// ASN.1 object identifier of the named curve
    pub fn oid(&self) -> &'static str {
        match self {
            EcCurveId::P256 => "1.2.840.10045.3.1.7",
            EcCurveId::P384 => "1.3.132.0.34",
            EcCurveId::P521 => "1.3.132.0.35",
        }
    }

    /// Size of a field element, which is also the size of `x`, `y` and `d`
    pub fn field_size(&self) -> usize {
        match self {
            EcCurveId::P256 => 32,
            EcCurveId::P384 => 48,
            EcCurveId::P521 => 66,
        }
    }

    /// JWS algorithm used with keys on this curve
    pub fn jws_algorithm(&self) -> &'static str {
        match self {
            EcCurveId::P256 => "ES256",
            EcCurveId::P384 => "ES384",
            EcCurveId::P521 => "ES512",
        }
    }
}

impl fmt::Display for EcCurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
