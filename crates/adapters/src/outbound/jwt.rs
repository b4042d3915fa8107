//! Session token signing using HS256 (HMAC SHA-256).

use application::error::SigningError;
use application::ports::outbound::{
    SessionClaims, TokenSigner as ImplTokenSigner,
};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
};

/// HMAC key pair derived from the process secret.
struct Keys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

/// JWT signer.
///
/// An empty secret is accepted at construction so the service can start, but
/// every signature then fails with [`SigningError::MissingSecret`].
pub struct TokenSigner {
    algorithm: Algorithm,
    keys: Option<Keys>,
}

impl TokenSigner {
    /// Create a new [`TokenSigner`] from a shared secret.
    pub fn new(secret: &str) -> Self {
        let keys = (!secret.is_empty()).then(|| Keys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        });

        Self {
            algorithm: Algorithm::HS256,
            keys,
        }
    }

    /// Decode and check a token, returning its claims.
    pub fn verify(&self, token: &str) -> Result<SessionClaims, SigningError> {
        let keys = self.keys.as_ref().ok_or(SigningError::MissingSecret)?;

        let mut validation = Validation::new(self.algorithm);
        validation.validate_aud = false;

        decode::<SessionClaims>(token, &keys.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|err| SigningError::Encoding(Box::new(err)))
    }
}

impl ImplTokenSigner for TokenSigner {
    fn sign(&self, claims: &SessionClaims) -> Result<String, SigningError> {
        let keys = self.keys.as_ref().ok_or(SigningError::MissingSecret)?;

        encode(&Header::new(self.algorithm), claims, &keys.encoding)
            .map_err(|err| SigningError::Encoding(Box::new(err)))
    }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use domain::identity::AccountId;

    use super::*;

    const SECRET: &str = "a-very-secret-key";

    fn claims(id: i64) -> SessionClaims {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        SessionClaims {
            account_id: AccountId::new(id).unwrap(),
            exp: now + 43_200,
        }
    }

    #[test]
    fn test_sign_and_verify() {
        let signer = TokenSigner::new(SECRET);
        let claims = claims(7);

        let token = signer.sign(&claims).unwrap();
        assert_eq!(token.split('.').count(), 3);

        let decoded = signer.verify(&token).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn test_claims_layout() {
        let token = TokenSigner::new(SECRET).sign(&claims(7)).unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_aud = false;
        let raw = decode::<serde_json::Value>(
            &token,
            &DecodingKey::from_secret(SECRET.as_bytes()),
            &validation,
        )
        .unwrap()
        .claims;

        assert_eq!(raw["account_id"], 7);
        assert!(raw["exp"].is_u64());
    }

    #[test]
    fn test_missing_secret() {
        let signer = TokenSigner::new("");
        assert!(matches!(
            signer.sign(&claims(1)),
            Err(SigningError::MissingSecret)
        ));
    }

    #[test]
    fn test_secret_mismatch() {
        let token = TokenSigner::new(SECRET).sign(&claims(1)).unwrap();
        let result = TokenSigner::new("another-secret").verify(&token);
        assert!(matches!(result, Err(SigningError::Encoding(_))));
    }
}
