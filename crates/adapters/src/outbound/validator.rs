//! Credential validation backed by the `validator` crate.

use application::dto::Credential;
use application::error::ValidationError;
use application::ports::outbound::CredentialValidator;
use domain::identity::present;
use validator::{Validate, ValidationErrors};

/// Provider identifiers, blank when absent.
#[derive(Debug, Validate)]
struct ProviderIds {
    #[validate(
        length(max = 255, message = "must not exceed 255 characters."),
        custom(
            function = "validate_provider_id",
            message = "must only contain letters, digits, '-' or '_'."
        )
    )]
    google_id: String,
    #[validate(
        length(max = 255, message = "must not exceed 255 characters."),
        custom(
            function = "validate_provider_id",
            message = "must only contain letters, digits, '-' or '_'."
        )
    )]
    facebook_id: String,
}

fn validate_provider_id(id: &str) -> Result<(), validator::ValidationError> {
    if id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        Ok(())
    } else {
        Err(validator::ValidationError::new("provider_id"))
    }
}

/// Fields of [`ProviderIds`], in declaration order.
const FIELDS: [&str; 2] = ["google_id", "facebook_id"];

/// Keep the first offending field in declaration order, so the Google
/// identifier is reported before the Facebook one.
fn first_field_error(errors: ValidationErrors) -> ValidationError {
    let errors = errors.field_errors();

    FIELDS
        .into_iter()
        .find_map(|field| {
            let issue = errors.get(field)?.first()?;
            let message = issue
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| issue.code.to_string());
            Some(ValidationError::InvalidField {
                field: field.to_owned(),
                message,
            })
        })
        .unwrap_or(ValidationError::EmptyCredential)
}

/// Validator rejecting empty credentials and malformed provider identifiers.
#[derive(Debug, Default)]
pub struct FieldValidator;

impl FieldValidator {
    /// Create a new [`FieldValidator`].
    pub fn new() -> Self {
        Self
    }
}

impl CredentialValidator for FieldValidator {
    fn validate(&self, credential: &Credential) -> Result<(), ValidationError> {
        let google_id = present(credential.google_id.as_deref());
        let facebook_id = present(credential.facebook_id.as_deref());

        if google_id.is_none() && facebook_id.is_none() {
            return Err(ValidationError::EmptyCredential);
        }

        ProviderIds {
            google_id: google_id.unwrap_or_default().to_owned(),
            facebook_id: facebook_id.unwrap_or_default().to_owned(),
        }
        .validate()
        .map_err(first_field_error)
    }
}
