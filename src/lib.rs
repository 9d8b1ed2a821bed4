#![forbid(unsafe_code)]

//! Reconstructs RSA and EC keys from JSON Web Keys (RFC 7517, RFC 7518).
//!
//! ```ignore
//! use jwk_key::prelude::*;
//!
//! let key = KeyHandle::from_jwk(account_key_jwk)?;
//! let signature = key.sign(signing_input.as_bytes())?;
//! ```

pub mod algorithms;
pub mod base64url;
pub mod common;
pub mod curve;
pub mod error;
pub mod factory;
pub mod jwk;
pub mod key_handle;
pub mod material;
pub mod reconstructor;

#[cfg(test)]
mod test_vectors;

pub mod prelude {
    pub use crate::common::*;
    pub use crate::curve::*;
    pub use crate::error::JWKError;
    pub use crate::factory::*;
    pub use crate::jwk::{JwkDocument, KeyType};
    pub use crate::key_handle::*;
    pub use crate::material::*;
    pub use crate::reconstructor::*;
}
