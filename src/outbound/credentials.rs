use crate::domain::auth::{CredentialVerifier, VerifyCredentialsParams, VerifyError};
use async_trait::async_trait;

/// Accepts any password for any known email. Stands in at the
/// `CredentialVerifier` seam until real password storage exists.
#[derive(Debug, Clone, Default)]
pub struct PermissiveVerifier {}

impl PermissiveVerifier {
    pub fn new() -> Self {
        Self {}
    }
}

#[async_trait]
impl CredentialVerifier for PermissiveVerifier {
    async fn verify(&self, params: VerifyCredentialsParams) -> Result<bool, VerifyError> {
        tracing::debug!(email = %params.email, "permissive verifier accepting credentials");

        Ok(true)
    }
}
