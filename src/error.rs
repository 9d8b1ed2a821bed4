#[derive(Debug, thiserror::Error)]
pub enum JWKError {
    #[error("Malformed JWK input: [{0}]")]
    MalformedInput(String),
    #[error("Missing JWK key type")]
    MissingKeyType,
    #[error("Unsupported JWK key type: [{0}]")]
    UnsupportedKeyType(String),
    #[error("Missing RSA modulus or exponent")]
    MissingRsaPublicParams,
    #[error("RSA CRT parameters must be all present or all absent")]
    IncompleteRsaPrivateParams,
    #[error("Missing EC curve")]
    MissingCurve,
    #[error("Unsupported EC curve: [{0}]")]
    UnsupportedCurve(String),
    #[error("Missing EC public coordinates")]
    MissingEcPublicParams,
    #[error("Invalid base64url encoding for member [{0}]")]
    InvalidBase64Url(&'static str),
    #[error("Key rejected by the crypto backend: [{0}]")]
    NativeKeyRejected(String),
    #[error("Unsupported RSA modulus size: {0} bits")]
    UnsupportedRsaModulus(usize),
    #[error("Missing private key")]
    MissingPrivateKey,
    #[error("Signature didn't verify")]
    InvalidSignature,
}
