//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /api/health`
///
/// # Response Codes
///
/// - **200 OK**: Storage reachable
/// - **503 Service Unavailable**: Storage check failed
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "storage": { "status": "ok" }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let storage_check = check_storage(&state).await;

    let healthy = storage_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            storage: storage_check,
        },
    };

    if healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

async fn check_storage(state: &AppState) -> CheckStatus {
    match state.link_service.check_storage().await {
        Ok(()) => CheckStatus {
            status: "ok".to_string(),
            message: None,
        },
        Err(e) => {
            tracing::warn!(error = %e, "Storage health check failed");
            CheckStatus {
                status: "error".to_string(),
                message: Some(e.to_string()),
            }
        }
    }
}
