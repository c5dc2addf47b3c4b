//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::parser::{ParseError, parse_pnr};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/convert", post(convert))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Convert a PNR text dump into a structured itinerary.
async fn convert(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ConvertResponse>, AppError> {
    // Parse JSON manually so malformed bodies get the JSON error shape
    let req: ConvertRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, bytes = body.len(), "rejecting malformed JSON body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let text = req.pnr_text.unwrap_or_default();
    if text.trim().is_empty() {
        return Ok(Json(ConvertResponse::not_attempted()));
    }

    let options = req.options.unwrap_or_default();
    let references = state.references.snapshot().await;
    let result = parse_pnr(&text, &options, &references, &state.config)?;

    info!(
        flights = result.flights.len(),
        passengers = result.passengers.len(),
        "converted PNR"
    );
    Ok(Json(ConvertResponse::parsed(result)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    PayloadTooLarge { message: String },
}

impl From<ParseError> for AppError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::InputTooLarge { .. } => AppError::PayloadTooLarge {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::PayloadTooLarge { message } => (StatusCode::PAYLOAD_TOO_LARGE, message),
        };

        warn!(%status, %message, "request failed");

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}
