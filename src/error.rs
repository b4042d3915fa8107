//! Error handler for the HTTP layer.

use application::error::{
    ApplicationError, SigningError, StoreError, ValidationError,
};
use axum::extract::rejection::JsonRejection;
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Enum representing server-side errors.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Application(#[from] ApplicationError),

    #[error(transparent)]
    Axum(#[from] JsonRejection),
}

/// Structure for detailed error responses.
#[derive(Debug, Serialize)]
pub struct ResponseError {
    r#type: Option<String>,
    title: String,
    status: u16,
    detail: String,
    instance: Option<String>,
    errors: Option<Vec<FieldError>>,
}

impl ResponseError {
    /// Update error status code.
    pub fn status(mut self, code: StatusCode) -> Self {
        self.status = code.as_u16();
        self
    }

    /// Update `title` field.
    pub fn title(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    /// Add detailed error.
    pub fn details(mut self, description: &str) -> Self {
        self.detail = description.into();
        self
    }

    /// Report the offending field.
    pub fn field(mut self, field: &str, message: &str) -> Self {
        self.errors = Some(vec![FieldError {
            field: field.into(),
            message: message.into(),
        }]);
        self
    }

    /// Transform [`ResponseError`] into axum [`Response`].
    pub fn into_response(
        self,
    ) -> std::result::Result<Response, axum::http::Error> {
        if let Ok(body) = serde_json::to_string(&self) {
            Response::builder()
                .status(self.status)
                .header(header::CONTENT_TYPE, "application/json")
                .body(body.into())
        } else {
            Ok(internal_server_error())
        }
    }
}

impl Default for ResponseError {
    fn default() -> Self {
        Self {
            r#type: None,
            title: "Internal server error.".to_owned(),
            status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
            detail: String::default(),
            instance: None,
            errors: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct FieldError {
    field: String,
    message: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let response = ResponseError::default()
            .title("There were validation errors with your request.")
            .details(&self.to_string())
            .status(StatusCode::BAD_REQUEST);

        let response = match &self {
            ServerError::Axum(rejection) => response
                .title("Server error during data parsing.")
                .details(&rejection.body_text())
                .status(rejection.status()),

            ServerError::Application(ApplicationError::Validation(err)) => {
                match err {
                    ValidationError::InvalidField { field, message } => {
                        response.field(field, message)
                    },
                    ValidationError::EmptyCredential => response,
                }
            },

            ServerError::Application(ApplicationError::Store(err)) => {
                match err {
                    StoreError::NotFound => response
                        .title("No account matches this credential.")
                        .status(StatusCode::NOT_FOUND),
                    StoreError::Conflict { .. } => response
                        .title("An account already exists for this credential.")
                        .status(StatusCode::CONFLICT),
                    StoreError::Unavailable(source) => {
                        tracing::error!(err = %source, "identity store unavailable");

                        ResponseError::default()
                            .title("Storage is temporarily unavailable.")
                            .status(StatusCode::SERVICE_UNAVAILABLE)
                    },
                }
            },

            ServerError::Application(ApplicationError::Signing(err)) => {
                match err {
                    SigningError::MissingSecret => {
                        tracing::error!("`SECRET` is not set, sessions cannot be issued");
                    },
                    SigningError::Encoding(source) => {
                        tracing::error!(err = %source, "session token not signed");
                    },
                }

                ResponseError::default().title("Could not issue a session.")
            },
        };

        response
            .into_response()
            .unwrap_or_else(|_| internal_server_error())
    }
}

fn internal_server_error() -> Response {
    Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(
            serde_json::json!({
                "type": null,
                "title": "Internal server error.",
                "status": StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                "detail": null,
                "instance": null,
                "errors": null,
            })
            .to_string()
            .into(),
        )
        .unwrap_or_else(|_| Response::new("Internal server error".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: impl Into<ApplicationError>) -> StatusCode {
        ServerError::from(err.into()).into_response().status()
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_of(ValidationError::EmptyCredential),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(status_of(StoreError::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            status_of(StoreError::Conflict {
                field: "google_id".into()
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_of(StoreError::unavailable(std::io::Error::other("down"))),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            status_of(SigningError::MissingSecret),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
