//! Real keys, in JWK form, shared by the unit tests.

pub const RSA_N: &str = "wFufOHC9V8zPbSc5yW6fnNYAcPTZJV5L5cNNH0pCPDthe8R3WjVzT_qbiJ74U_NdyDeouaYO9NoORB7gNax7Pkrc4jDWgHfHkrDuC32mv36ujyyf6Bd1Nsgr6V6Qf3FMMtHqUjRIZbvbS2olVfEWKDBYmeyor-XXH7XloWI7KsOgYU0lPRAi5jlY6zi3n3v2YVCOgCwGtB8tn35Pb_mOGv_0bsO39yXwoeeqXUEZlg-zkIax7l4rThAq2Mz5ARvPI49bOIQGGLkvDCoE3f5eqDur-XDIWOxlHpLO5ALtI3PPmbGrgx-Ni2O63H6qQ-UwEyQa345J_XcNJNy0eO82qQ";
pub const RSA_E: &str = "AQAB";
pub const RSA_D: &str = "TRxtl5KaVLgl7vvqjnVqRtUDGEUPR4uloVXJdOGv67ViPttjfSYwM7-i2gHgSscksT6exM1s8Xr4fRZjiyC5xx77rTEmzBk4R_Xld3XHgryl_X9GGyRMOMnF0Ke4BV7FzRmZdZq_6wiDwJesn-clmrbGze2xMdJRisTAaRGX5mwTCnf8StPcufDdSUF2i1Fx5c0uVIpnGPCSlQKyllCMQUG0xKKyeQ1bEbRlqh38hxzsha0EWX7PzskdLNYZvw4HWJe0R1SLXrTiAA2qdwceO1kJ3Fm9K3MNGhwMdMyQy-npgUZapzvo8uh6wYc6FyhAowCd0j5WyhCToGN-txWB";
pub const RSA_P: &str = "88uG_zyJfFkcAbJRf6TuRqecvfUjri5d-WIoPxtfxuyRqb44MP73ZxPPaJMiyGeQOEVJPZzSW-MGBf5RAMYazYUlfaI_2TQezp9tvW_NfM4ZoNBg3b3NA6iGgsJ5sGmobxkKm0f-1oo8NPySSCL9sRBv54igUVViji0ixUzFYSk";
pub const RSA_Q: &str = "yfzgljpduq9IJRPPNfu5DkpkurMEBdvlkvoWsPuz8gnP_KyTGPCzLKS030U_7am6iP0JmGz0fUc_-Kx1q1Fg-6E6p_bXyxt64GBsCkTcLFoP6Fcs-nU8I-fFc5E72kP64DzVkEEk7C4ynXmg94DroTNVtm4KkfzSaekoU1FiWYE";
pub const RSA_DP: &str = "iMliNiUeMuHAgAcwCQFeG9CBdmdrnJgxa_IyCK5wP6mOVQIAfyUfZPtNfSxI8M6Csb_WRzaNJLctMwGtK1T7xuJ01ZfKYTEINABpz0dCsUrmQD-Kif-rXukYh5dcNaoisisHs3ZiurcW7tfjr4vKcaV6VBtpcBkLUiBrCO55NHk";
pub const RSA_DQ: &str = "N5gIYJDT92wDGWFoaN1Nw-cp7lETTGGHwHphAHlmv7l_q3X8TqMBTcpPlhxDSjCrDMVIfNGQQWL48oLVKEAPx3JK6KwCHP8FRPiFBBaL2xE2y6Yi1RSrZt6F9BcHOD35sPpNdZTYisD0YW92pGixcf7lGn8THbdOWqQ32ybNQQE";
pub const RSA_QI: &str = "15g2apqAextOFfCRyMrw0WYrpqwSOFmDAvK5RcJ-eKb11rncRuFWMWKu7hYcDvCyD0-g2G2i0PCFKwOW4S3zRqbGr7TXjaoRvU4O48UPhonOPrTxLIcV7-N11tSUDjnsgzs2PoE3llX30_liIK29-2_htlMI5V3TtaogWI0mmVI";

pub const RSA_ALL: &[&str] = &["n", "e", "d", "p", "q", "dp", "dq", "qi"];

pub const EC_P256_JWK: &str = r#"{
    "kty": "EC",
    "crv": "P-256",
    "x": "2_lBgBiu9RZdhBxfccjG4I1ik7Ayu6XAjj2c9QZFtWE",
    "y": "MKPNvwqYISN1iRyZmf4DU1WTFWeEJUWDtY8ZWyu60Cs",
    "d": "mmQcOX85wtYGlE-cKzlGERTfawo1Wi2AfGgMfOmn-Qs"
}"#;

pub const EC_P384_JWK: &str = r#"{
    "kty": "EC",
    "crv": "P-384",
    "x": "ojRgVwgigF12oCgkSK_L2OUzQ7wCK9OuamjH5kZvEJTO2vrByDe8LID52UFVw7qj",
    "y": "o_IzYDgL1gOQDIT1K3AJ_57vgpqOG_D5W-PLn0i9OMTSPRqUlejbSnpfoMpiPMpy",
    "d": "cYfbQkdTnimNN8H_krOdTwaJyzVQkFbxrQJ5NBws47BgZ9xohGoGCDwa7bAipGUk"
}"#;

pub const EC_P521_JWK: &str = r#"{
    "kty": "EC",
    "crv": "P-521",
    "x": "AfG4V0RvguWkU5HGGcEyEmQzgnDKxi1YhHS6jxM9MMql2RDw3x4JQypoXCST9D6qknmUZbibPd5jfxZ8tJK_ETF2",
    "y": "AJQPeTMfwYsZomNwhiirb7zon72DyGXDD3rwHn7T11qHmr-8OBlXmNS_mQAAPNcnzMWTPIfBK35-Kjb8ZUjA1H6Z",
    "d": "ABgpOCfYLydFDtvtxPN7FOQrwH6FPK6NxdiPqNtSnYdPrNSp5ocHeiVdbie7_iFfJIZSW_rmOI2ne88spKZTVTIg"
}"#;

/// An RSA JWK with only the given members of the test key
pub fn rsa_jwk(members: &[&str]) -> String {
    let mut jwk = serde_json::Map::new();
    jwk.insert("kty".to_string(), "RSA".into());
    for member in members {
        let value = match *member {
            "n" => RSA_N,
            "e" => RSA_E,
            "d" => RSA_D,
            "p" => RSA_P,
            "q" => RSA_Q,
            "dp" => RSA_DP,
            "dq" => RSA_DQ,
            "qi" => RSA_QI,
            other => panic!("unknown RSA member {}", other),
        };
        jwk.insert(member.to_string(), value.into());
    }
    serde_json::Value::Object(jwk).to_string()
}

/// The same JWK, without its private members
pub fn public_only(jwk: &str) -> String {
    let mut jwk: serde_json::Value = serde_json::from_str(jwk).unwrap();
    let object = jwk.as_object_mut().unwrap();
    for member in ["d", "p", "q", "dp", "dq", "qi"] {
        object.remove(member);
    }
    jwk.to_string()
}
