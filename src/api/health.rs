use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde_json::json;

use crate::api::negotiate::Representation;
use crate::infrastructure::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy"),
        (status = 406, description = "Neither HTML nor JSON is acceptable"),
        (status = 503, description = "Datastore unreachable")
    )
)]
// The body is JSON for either representation; the extractor only rejects
// callers that accept neither.
pub async fn health_check(
    _representation: Representation,
    State(state): State<AppState>,
) -> impl IntoResponse {
    let database_up = state.db().ping().await.is_ok();
    let status = if database_up {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(json!({
            "status": if database_up { "ok" } else { "unavailable" },
            "service": "bookbrowse",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
