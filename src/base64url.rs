use ct_codecs::{Base64UrlSafeNoPadding, Decoder};
use zeroize::Zeroizing;

use crate::error::*;

/// Decodes a base64url (no padding) JWK member.
pub fn decode(member: &'static str, encoded: &str) -> Result<Vec<u8>, JWKError> {
    Base64UrlSafeNoPadding::decode_to_vec(encoded, None)
        .map_err(|_| JWKError::InvalidBase64Url(member))
}

/// Same as `decode()`, for members holding secret values.
pub fn decode_secret(member: &'static str, encoded: &str) -> Result<Zeroizing<Vec<u8>>, JWKError> {
    decode(member, encoded).map(Zeroizing::new)
}
