use crate::algorithms::*;
use crate::error::*;
use crate::key_handle::*;
use crate::material::*;

/// Turns validated key parameters into key objects.
///
/// The parameters are complete and consistent with the JWK rules when a
/// factory receives them. Whatever the backend refuses beyond that should be
/// reported as `JWKError::NativeKeyRejected`.
pub trait KeyFactory {
    type Key;

    fn build_rsa_key(
        &self,
        public: RsaPublicParams,
        private: Option<RsaPrivateParams>,
    ) -> Result<Self::Key, JWKError>;

    fn build_ec_key(
        &self,
        public: EcPublicParams,
        private: Option<EcPrivateParams>,
    ) -> Result<Self::Key, JWKError>;
}

/// Builds `KeyHandle`s backed by the `rsa`, `p256`, `p384` and `p521` crates
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeKeyFactory;

impl KeyFactory for NativeKeyFactory {
    type Key = KeyHandle;

    fn build_rsa_key(
        &self,
        public: RsaPublicParams,
        private: Option<RsaPrivateParams>,
    ) -> Result<KeyHandle, JWKError> {
        let key = RSAKey::from_params(&public, private.as_ref())?;
        Ok(KeyHandle::from(key))
    }

    fn build_ec_key(
        &self,
        public: EcPublicParams,
        private: Option<EcPrivateParams>,
    ) -> Result<KeyHandle, JWKError> {
        let key = ECKey::from_params(&public, private.as_ref())?;
        Ok(KeyHandle::from(key))
    }
}

/// A factory that returns the parameters it is given, without building anything
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMaterialFactory;

impl KeyFactory for KeyMaterialFactory {
    type Key = KeyMaterial;

    fn build_rsa_key(
        &self,
        public: RsaPublicParams,
        private: Option<RsaPrivateParams>,
    ) -> Result<KeyMaterial, JWKError> {
        Ok(KeyMaterial::Rsa(public, private))
    }

    fn build_ec_key(
        &self,
        public: EcPublicParams,
        private: Option<EcPrivateParams>,
    ) -> Result<KeyMaterial, JWKError> {
        Ok(KeyMaterial::Ec(public, private))
    }
}
