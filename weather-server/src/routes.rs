use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde::{Deserialize, Serialize};
use weather_core::{Coordinate, ForecastReport, ForecastResolver};

/// Shared per-process state; immutable once constructed.
pub struct AppState {
    resolver: ForecastResolver,
}

impl AppState {
    pub fn new(resolver: ForecastResolver) -> Self {
        Self { resolver }
    }
}

/// Build the gateway router. Every failure path answers with an
/// [`ApiError`] JSON payload, including the method and path fallbacks.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/weather", get(weather).fallback(method_not_allowed))
        .fallback(not_found)
        .with_state(state)
}

/// Wire error payload shared by every failure path.
#[derive(Debug, Serialize)]
struct ApiError {
    #[serde(skip)]
    status: StatusCode,
    error: &'static str,
    message: &'static str,
}

impl ApiError {
    fn new(status: StatusCode, error: &'static str, message: &'static str) -> Self {
        Self { status, error, message }
    }

    fn bad_request(error: &'static str, message: &'static str) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, Json(self)).into_response()
    }
}

/// Raw query parameters; parsed by hand so missing, unparseable and
/// out-of-range coordinates each get their own error payload.
#[derive(Debug, Deserialize)]
struct WeatherQuery {
    lat: Option<String>,
    lon: Option<String>,
}

async fn weather(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WeatherQuery>,
) -> Result<Json<ForecastReport>, ApiError> {
    let coord = parse_coordinate(&params)?;

    match state.resolver.resolve(coord).await {
        Ok(report) => Ok(Json(report)),
        Err(err) => {
            // Full detail stays in the server log; the caller only learns
            // that the forecast could not be fetched.
            tracing::error!(error = %err, lat = coord.lat, lon = coord.lon, "forecast resolution failed");
            Err(ApiError::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "API error",
                "Could not get forecast",
            ))
        }
    }
}

fn parse_coordinate(params: &WeatherQuery) -> Result<Coordinate, ApiError> {
    let (Some(lat_raw), Some(lon_raw)) = (params.lat.as_deref(), params.lon.as_deref()) else {
        return Err(ApiError::bad_request(
            "Missing coords",
            "Need both lat and lon params",
        ));
    };

    let lat = lat_raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ApiError::bad_request("Bad latitude", "Must be a number"))?;

    let lon = lon_raw
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ApiError::bad_request("Bad longitude", "Must be a number"))?;

    Coordinate::new(lat, lon)
        .ok_or_else(|| ApiError::bad_request("Invalid coords", "Check your lat/lon values"))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// Static service metadata returned from `/`.
#[derive(Debug, Serialize)]
struct ServiceInfo {
    name: &'static str,
    endpoints: [&'static str; 2],
    temp_ranges: TempRanges,
}

#[derive(Debug, Serialize)]
struct TempRanges {
    cold: &'static str,
    moderate: &'static str,
    hot: &'static str,
}

const SERVICE_INFO: ServiceInfo = ServiceInfo {
    name: "Weather API",
    endpoints: ["/weather?lat=X&lon=Y", "/health"],
    temp_ranges: TempRanges {
        cold: "≤60.7°F",
        moderate: "60.8-89.4°F",
        hot: "≥89.5°F",
    },
};

async fn index() -> Json<ServiceInfo> {
    Json(SERVICE_INFO)
}

async fn method_not_allowed() -> ApiError {
    ApiError::new(
        StatusCode::METHOD_NOT_ALLOWED,
        "Method not allowed",
        "Only GET supported",
    )
}

async fn not_found() -> ApiError {
    ApiError::new(StatusCode::NOT_FOUND, "Not found", "Unknown endpoint")
}
