//! This module contains the REST endpoint implementations.

use axum::extract::Path;
use axum::http::StatusCode;
use axum::Json;
use lib_flightpath::snapshot::FlightSnapshot;
use serde::{Deserialize, Serialize};

use crate::provider::{get_flight_with_airports, get_provider, FlightDataProvider};

/// Error body returned on every non-2xx response
#[derive(Debug, Serialize, Deserialize)]
pub struct Detail {
    /// Human-readable error description
    pub detail: String,
}

/// Liveness probe body
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// always "ok" while the service is up
    pub status: String,
    /// time of the probe
    pub timestamp: String,
}

fn detail(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<Detail>) {
    (
        status,
        Json(Detail {
            detail: message.into(),
        }),
    )
}

/// GET /api/flight/{code}
///
/// Looks up the flight, enriches it with airport records and returns the
/// normalized snapshot. 400 for an effectively empty code, 404 when the
/// upstream has no record, 502 when the upstream fails.
pub async fn get_flight(
    Path(code): Path<String>,
) -> Result<Json<FlightSnapshot>, (StatusCode, Json<Detail>)> {
    flight_by_code(&code, get_provider().await).await
}

pub(crate) async fn flight_by_code(
    code: &str,
    provider: &dyn FlightDataProvider,
) -> Result<Json<FlightSnapshot>, (StatusCode, Json<Detail>)> {
    let code = code.trim().to_uppercase();
    if code.is_empty() {
        rest_warn!("(flight_by_code) empty flight code.");
        return Err(detail(StatusCode::BAD_REQUEST, "Flight code is required"));
    }

    rest_debug!("(flight_by_code) looking up [{}].", code);
    match get_flight_with_airports(&code, provider).await {
        Ok(Some(snapshot)) => Ok(Json(snapshot)),
        Ok(None) => {
            rest_info!("(flight_by_code) flight [{}] not found.", code);
            Err(detail(
                StatusCode::NOT_FOUND,
                format!("Flight {} not found", code),
            ))
        }
        Err(e) => {
            rest_error!("(flight_by_code) provider error for [{}]: {}.", code, e);
            Err(detail(StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}

/// GET /health
///
/// Returns ok when the service is available
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
