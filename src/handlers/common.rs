//! Liveness, readiness, build identity and the OpenAPI document.

use crate::openapi::ApiDoc;
use crate::service::InventoryService;
use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use utoipa::OpenApi;

/// Probe answer. `store` is only filled in by the readiness probe.
#[derive(Serialize)]
pub struct ProbeStatus {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    store: Option<&'static str>,
}

#[derive(Serialize)]
pub struct BuildInfo {
    name: &'static str,
    version: &'static str,
}

const BUILD: BuildInfo = BuildInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

/// The process is up; the store is not consulted.
pub async fn health() -> Json<ProbeStatus> {
    Json(ProbeStatus { status: "ok", store: None })
}

/// Ready when the department collection answers a listing.
pub async fn ready(State(state): State<AppState>) -> (StatusCode, Json<ProbeStatus>) {
    match InventoryService::list_departments(&state.repos).await {
        Ok(_) => (StatusCode::OK, Json(ProbeStatus { status: "ok", store: Some("ok") })),
        Err(e) => {
            tracing::warn!(error = %e, "readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ProbeStatus {
                    status: "degraded",
                    store: Some("unavailable"),
                }),
            )
        }
    }
}

pub async fn version() -> Json<BuildInfo> {
    Json(BUILD)
}

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
