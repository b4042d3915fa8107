use application::dto::{AccountView, Credential};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use crate::AppState;
use crate::error::Result;
use crate::router::Body;

/// Handler to register an account from a federated credential.
pub async fn handler(
    State(state): State<AppState>,
    Body(credential): Body<Credential>,
) -> Result<(StatusCode, Json<AccountView>)> {
    let account = state.auth.sign_up(credential).await?;

    Ok((StatusCode::CREATED, Json(account)))
}
