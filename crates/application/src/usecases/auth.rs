//! Authentication use case implementation.

use async_trait::async_trait;
use domain::identity::NewAccount;

use crate::dto::{AccountView, Credential, LoginResponse};
use crate::error::Result;
use crate::ports::inbound::Authentication;
use crate::ports::outbound::{
    Clock, CredentialValidator, IdentityStore, SessionClaims, TelemetryPort,
    TokenSigner,
};
use crate::usecases::{SESSION_LIFETIME, TOKEN_TYPE};

/// Authentication use case service.
///
/// Stateless: one instance can serve concurrent calls as long as its
/// collaborators can.
pub struct AuthenticationUseCase {
    store: Box<dyn IdentityStore>,
    validator: Box<dyn CredentialValidator>,
    token_signer: Box<dyn TokenSigner>,
    telemetry: Box<dyn TelemetryPort>,
    clock: Box<dyn Clock>,
}

impl AuthenticationUseCase {
    pub fn new(
        store: Box<dyn IdentityStore>,
        validator: Box<dyn CredentialValidator>,
        token_signer: Box<dyn TokenSigner>,
        telemetry: Box<dyn TelemetryPort>,
        clock: Box<dyn Clock>,
    ) -> Self {
        Self {
            store,
            validator,
            token_signer,
            telemetry,
            clock,
        }
    }

    async fn register(&self, credential: Credential) -> Result<AccountView> {
        self.validator.validate(&credential)?;

        let account =
            NewAccount::new(credential.google_id, credential.facebook_id);
        let account = self.store.create(account).await?;

        self.telemetry.record_account_created(account.id);

        Ok(account.into())
    }

    async fn authenticate(
        &self,
        credential: Credential,
    ) -> Result<LoginResponse> {
        self.validator.validate(&credential)?;

        let google_id = credential.google_id.as_deref().unwrap_or_default();
        let facebook_id =
            credential.facebook_id.as_deref().unwrap_or_default();

        let mut account = self.store.find_by_google_id(google_id).await?;
        tracing::debug!(account_id = %account.id, "google identifier matched");

        // Both identifiers must resolve. The facebook match replaces the
        // google one and is the account the session is issued for.
        account = self.store.find_by_facebook_id(facebook_id).await?;

        let claims = SessionClaims {
            account_id: account.id,
            exp: self.clock.now() + SESSION_LIFETIME,
        };
        let token = self.token_signer.sign(&claims)?;

        self.telemetry.record_login_success(account.id);

        Ok(LoginResponse {
            token_type: TOKEN_TYPE.to_string(),
            token,
            expires_in: SESSION_LIFETIME,
        })
    }
}

#[async_trait]
impl Authentication for AuthenticationUseCase {
    async fn sign_up(&self, credential: Credential) -> Result<AccountView> {
        self.register(credential).await.inspect_err(|err| {
            self.telemetry.record_failure("sign_up", err.kind())
        })
    }

    async fn login(&self, credential: Credential) -> Result<LoginResponse> {
        self.authenticate(credential).await.inspect_err(|err| {
            self.telemetry.record_failure("login", err.kind())
        })
    }
}
