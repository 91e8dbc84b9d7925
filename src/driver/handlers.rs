//! HTTP request handlers and JSON response shapes.

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use log::warn;
use serde::{Deserialize, Serialize};

use super::AppState;
use crate::application::error::{LookupError, ReportError};
use crate::domain::entities::{AccessLogSummary, LookupResult};

/// `GET /address` query parameter
const POSTAL_CODE_PARAM: &str = "postal_code";

/// `GET /address` response body
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AddressResponse {
    /// 郵便番号（リクエストパラメータ）
    pub postal_code: String,
    /// 該当する地域の数
    pub hit_count: usize,
    /// 各住所のうち共通する部分の住所
    pub address: String,
    /// 東京駅から最も離れている地域までの距離（km）
    pub tokyo_sta_distance: f64,
}

impl From<LookupResult> for AddressResponse {
    fn from(result: LookupResult) -> Self {
        Self {
            postal_code: result.postal_code.to_string(),
            hit_count: result.hit_count,
            address: result.common_address,
            tokyo_sta_distance: result.max_distance_km,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AccessLogItem {
    pub postal_code: String,
    pub request_count: u64,
}

impl From<AccessLogSummary> for AccessLogItem {
    fn from(summary: AccessLogSummary) -> Self {
        Self {
            postal_code: summary.postal_code,
            request_count: summary.request_count,
        }
    }
}

/// `GET /address/access_logs` response body
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct AccessLogsResponse {
    pub access_logs: Vec<AccessLogItem>,
}

impl IntoResponse for LookupError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            LookupError::InvalidInput(_) => (
                StatusCode::BAD_REQUEST,
                "Invalid postal code format. Must be 7 digits.",
            ),
            LookupError::NotFound(_) => (
                StatusCode::NOT_FOUND,
                "No location found for the given postal code",
            ),
            LookupError::UpstreamUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to fetch data from external API",
            ),
            LookupError::UpstreamMalformed(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to parse external API response",
            ),
        };

        if status.is_server_error() {
            warn!("Lookup failed: {}", self);
        }

        (status, message).into_response()
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        match self {
            ReportError::StoreUnavailable(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to query access logs",
            )
                .into_response(),
        }
    }
}

/// Root page.
pub async fn index() -> &'static str {
    "Welcome to Postal API!"
}

/// Explicit 405 for HEAD on the GET-only API routes.
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")])
}

/// First value of `name` in the query string, empty when absent.
fn first_param(params: &[(String, String)], name: &str) -> String {
    params
        .iter()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.clone())
        .unwrap_or_default()
}

/// Look up the common address and farthest distance for a postal code.
///
/// A repeated `postal_code` parameter uses its first value.
pub async fn lookup_address(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<AddressResponse>, LookupError> {
    let raw = first_param(&params, POSTAL_CODE_PARAM);
    let outcome = state.lookup.execute(&raw).await?;

    Ok(Json(AddressResponse::from(outcome.result)))
}

/// Request counts per postal code, most requested first.
pub async fn access_logs(
    State(state): State<AppState>,
) -> Result<Json<AccessLogsResponse>, ReportError> {
    let summaries = state.access_logs.execute().await?;

    Ok(Json(AccessLogsResponse {
        access_logs: summaries.into_iter().map(AccessLogItem::from).collect(),
    }))
}
