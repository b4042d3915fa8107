//! Federated sign-up and session issuance API.

#![forbid(unsafe_code)]

pub mod config;
mod database;
pub mod error;
mod router;
pub mod telemetry;

use std::sync::Arc;
use std::time::Duration;

use adapters::outbound::clock::SystemClock;
use adapters::outbound::jwt::TokenSigner;
use adapters::outbound::persistence::memory::InMemoryIdentityStore;
use adapters::outbound::persistence::postgres::PgIdentityStore;
use adapters::outbound::telemetry::TracingTelemetry;
use adapters::outbound::validator::FieldValidator;
use application::ports::inbound::Authentication;
use application::ports::outbound::IdentityStore;
use application::usecases::AuthenticationUseCase;
use axum::body::Bytes;
use axum::http::{Method, StatusCode, header};
use axum::routing::{get, post};
use axum::{Router, middleware as AxumMiddleware};
use metrics_exporter_prometheus::PrometheusHandle;
use tower::ServiceBuilder;
use tower_http::LatencyUnit;
use tower_http::cors::{Any, CorsLayer};
use tower_http::sensitive_headers::SetSensitiveHeadersLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};

use crate::config::Configuration;

/// MUST NEVER be used in production.
#[cfg(test)]
pub async fn make_request(
    app: Router,
    method: Method,
    path: &str,
    body: String,
) -> axum::http::Response<axum::body::Body> {
    use axum::extract::Request;
    use tower::util::ServiceExt;

    app.oneshot(
        Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(axum::body::Body::from(body))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// State sharing between routes.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Configuration>,
    pub auth: Arc<dyn Authentication>,
    pub metrics: Option<PrometheusHandle>,
}

/// Create router.
pub fn app(state: AppState) -> Router {
    let middleware = ServiceBuilder::new()
        // Add high level tracing/logging to all requests.
        .layer(
            TraceLayer::new_for_http()
                .on_body_chunk(|chunk: &Bytes, latency: Duration, _span: &tracing::Span| {
                    tracing::trace!(size_bytes = chunk.len(), latency = ?latency, "sending body chunk")
                })
                .make_span_with(DefaultMakeSpan::new().include_headers(true).level(tracing::Level::INFO))
                .on_request(DefaultOnRequest::new())
                .on_response(DefaultOnResponse::new().include_headers(true).latency_unit(LatencyUnit::Micros)),
        )
        // Set a timeout.
        .layer(TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, Duration::from_secs(10)))
        // Remove senstive headers from trace.
        .layer(SetSensitiveHeadersLayer::new([header::AUTHORIZATION, header::COOKIE]))
        // Add CORS preflight support.
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers(Any),
        );

    Router::new()
        // `GET /status.json` goes to `status`.
        .route("/status.json", get(router::status::status))
        .route("/metrics", get(router::metrics::handler))
        // `POST /signup` goes to `signup`.
        .route("/signup", post(router::signup::handler))
        // `POST /login` goes to `login`.
        .route("/login", post(router::login::handler))
        .with_state(state)
        .route_layer(AxumMiddleware::from_fn(telemetry::track))
        .layer(middleware)
}

/// Initialize the application state.
pub async fn initialize_state(
    config: Configuration,
    metrics: Option<PrometheusHandle>,
) -> Result<AppState, Box<dyn std::error::Error + Send + Sync>> {
    let store: Box<dyn IdentityStore> = match &config.postgres {
        Some(postgres) => {
            let pool = database::connect(postgres).await?;
            Box::new(PgIdentityStore::new(pool))
        },
        None => {
            tracing::warn!(
                "missing `postgres` entry on `config.yaml` file, accounts are kept in memory"
            );
            Box::new(InMemoryIdentityStore::new())
        },
    };

    // read once, immutable for the process lifetime.
    let secret = std::env::var("SECRET").unwrap_or_default();
    if secret.is_empty() {
        tracing::warn!("missing `SECRET` environnement variable, login is disabled");
    }

    let auth = AuthenticationUseCase::new(
        store,
        Box::new(FieldValidator::new()),
        Box::new(TokenSigner::new(&secret)),
        Box::new(TracingTelemetry::new()),
        Box::new(SystemClock),
    );

    Ok(AppState {
        config: Arc::new(config),
        auth: Arc::new(auth),
        metrics,
    })
}
