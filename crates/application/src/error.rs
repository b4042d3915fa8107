//! Application-level errors.

pub type Result<T> = std::result::Result<T, ApplicationError>;

/// Credential rejected before any store access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("google_id or facebook_id is required")]
    EmptyCredential,
    #[error("invalid {field}: {message}")]
    InvalidField { field: String, message: String },
}

/// Persistence or lookup failure reported by an identity store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("account not found")]
    NotFound,
    #[error("an account already uses this {field}")]
    Conflict { field: String },
    #[error("identity store unavailable")]
    Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    pub fn unavailable<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Unavailable(Box::new(err))
    }
}

/// Session token could not be built.
#[derive(Debug, thiserror::Error)]
pub enum SigningError {
    #[error("signing secret is not configured")]
    MissingSecret,
    #[error("failed to sign session token")]
    Encoding(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Errors that can occur in the application layer.
#[derive(Debug, thiserror::Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Signing(#[from] SigningError),
}

impl ApplicationError {
    /// Short label of the failure, used by telemetry.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "invalid_credential",
            Self::Store(StoreError::NotFound) => "not_found",
            Self::Store(StoreError::Conflict { .. }) => "conflict",
            Self::Store(StoreError::Unavailable(_)) => "store_unavailable",
            Self::Signing(_) => "signing",
        }
    }
}

/// Maps any backend error into [`StoreError::Unavailable`].
pub trait ToUnavailable<T> {
    fn catch(self) -> std::result::Result<T, StoreError>;
}

impl<T, E> ToUnavailable<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn catch(self) -> std::result::Result<T, StoreError> {
        self.map_err(StoreError::unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind() {
        let err: ApplicationError = ValidationError::EmptyCredential.into();
        assert_eq!(err.kind(), "invalid_credential");

        let err: ApplicationError = StoreError::NotFound.into();
        assert_eq!(err.kind(), "not_found");

        let err: ApplicationError = SigningError::MissingSecret.into();
        assert_eq!(err.kind(), "signing");
    }

    #[test]
    fn test_catch() {
        let res: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("connection refused"));
        assert!(matches!(res.catch(), Err(StoreError::Unavailable(_))));
    }
}
