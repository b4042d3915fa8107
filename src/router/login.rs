use application::dto::{Credential, LoginResponse};
use axum::Json;
use axum::extract::State;

use crate::AppState;
use crate::error::Result;
use crate::router::Body;

/// Handler to issue a session token.
pub async fn handler(
    State(state): State<AppState>,
    Body(credential): Body<Credential>,
) -> Result<Json<LoginResponse>> {
    Ok(Json(state.auth.login(credential).await?))
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use adapters::outbound::jwt::TokenSigner;
    use axum::http::{Method, StatusCode};
    use http_body_util::BodyExt;
    use serde_json::json;

    use super::*;
    use crate::router::tests::{SECRET, state};
    use crate::{app, make_request};

    const LIFETIME: u64 = 60 * 60 * 12;

    fn credential() -> String {
        json!({ "google_id": "g1", "facebook_id": "f1" }).to_string()
    }

    #[tokio::test]
    async fn test_login_handler() {
        let (state, _) = state(SECRET);
        let app = app(state);

        let response =
            make_request(app.clone(), Method::POST, "/signup", credential())
                .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let response =
            make_request(app, Method::POST, "/login", credential()).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: LoginResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(body.token_type, "Bearer");
        assert_eq!(body.expires_in, LIFETIME);

        let claims = TokenSigner::new(SECRET).verify(&body.token).unwrap();
        assert_eq!(claims.account_id.get(), 1);

        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        assert!(claims.exp <= now + LIFETIME);
        assert!(claims.exp + 5 >= now + LIFETIME);
    }

    #[tokio::test]
    async fn test_login_unknown_account() {
        let (state, store) = state(SECRET);
        let app = app(state);

        let response =
            make_request(app, Method::POST, "/login", credential()).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(store.is_empty().await);
    }

    async fn login_account_id(app: axum::Router, body: String) -> i64 {
        let response = make_request(app, Method::POST, "/login", body).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: LoginResponse = serde_json::from_slice(&body).unwrap();
        let claims = TokenSigner::new(SECRET).verify(&body.token).unwrap();
        claims.account_id.get()
    }

    #[tokio::test]
    async fn test_login_with_single_provider() {
        let (state, _) = state(SECRET);
        let app = app(state);

        let body = json!({ "google_id": "g1" }).to_string();
        let response =
            make_request(app.clone(), Method::POST, "/signup", body.clone())
                .await;
        assert_eq!(response.status(), StatusCode::CREATED);

        assert_eq!(login_account_id(app.clone(), body).await, 1);
        assert_eq!(
            login_account_id(
                app,
                json!({ "google_id": "g1", "facebook_id": "" }).to_string()
            )
            .await,
            1
        );
    }

    #[tokio::test]
    async fn test_login_with_single_provider_after_linked_account() {
        let (state, _) = state(SECRET);
        let app = app(state);

        make_request(app.clone(), Method::POST, "/signup", credential()).await;
        let response = make_request(
            app,
            Method::POST,
            "/login",
            json!({ "google_id": "g1" }).to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_login_without_secret() {
        let (state, _) = state("");
        let app = app(state);

        make_request(app.clone(), Method::POST, "/signup", credential()).await;
        let response =
            make_request(app, Method::POST, "/login", credential()).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_login_with_empty_credential() {
        let (state, _) = state(SECRET);
        let app = app(state);

        let response = make_request(
            app,
            Method::POST,
            "/login",
            json!({ "google_id": "", "facebook_id": null }).to_string(),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
