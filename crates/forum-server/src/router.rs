//! Router configuration.
//!
//! This module creates the main Axum router that combines all endpoints.

use axum::{
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode},
    response::Json,
    routing::get,
    Router,
};
use forum_model::IdentityProviderKind;
use serde::{Deserialize, Serialize};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    let health = Router::new()
        .route("/health", get(health_check))
        .route("/health/live", get(liveness_check))
        .route("/health/ready", get(readiness_check));

    let sso = Router::new()
        .route("/sso/{provider}/login-url", get(login_url))
        .with_state(state.clone());

    Router::new()
        .merge(health)
        .merge(sso)
        .route("/", get(root))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&state.config.cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.iter().any(|o| o == "*") {
        return cors.allow_origin(Any);
    }
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|o| HeaderValue::from_str(o).ok())
        .collect();
    cors.allow_origin(AllowOrigin::list(origins))
}

/// Query parameters of the login URL endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct LoginUrlParams {
    /// Run the login in a popup window.
    #[serde(default)]
    pub popup: bool,
    /// Link the external identity to the signed-in user.
    #[serde(default)]
    pub connect: bool,
}

/// Login URL response. `url` is empty when the provider is unavailable.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginUrlResponse {
    /// Provider name as requested, normalized when recognized.
    pub provider: String,
    /// URL to redirect the browser to.
    pub url: String,
}

async fn login_url(
    State(state): State<AppState>,
    Path(provider): Path<String>,
    Query(params): Query<LoginUrlParams>,
) -> Json<LoginUrlResponse> {
    let url = state
        .dispatcher
        .generate_login_url_by_name(&provider, params.popup, params.connect);
    let provider = provider
        .parse::<IdentityProviderKind>()
        .map_or(provider, |kind| kind.as_str().to_string());

    Json(LoginUrlResponse { provider, url })
}

/// Root endpoint handler.
async fn root() -> Json<ServerInfo> {
    Json(ServerInfo {
        name: "forum-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
}

/// Server information response.
#[derive(Serialize)]
pub struct ServerInfo {
    name: String,
    version: String,
}

/// Basic health check.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    })
}

/// Kubernetes liveness probe.
async fn liveness_check() -> StatusCode {
    StatusCode::OK
}

/// Kubernetes readiness probe.
async fn readiness_check() -> StatusCode {
    StatusCode::OK
}
