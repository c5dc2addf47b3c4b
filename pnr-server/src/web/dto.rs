//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{FlightSegment, ItineraryResult};
use crate::parser::ParseOptions;

/// Request to convert a PNR text dump.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertRequest {
    /// Raw PNR text as pasted from the GDS terminal
    pub pnr_text: Option<String>,

    /// Rendering options (defaults to 12-hour clocks)
    pub options: Option<ParseOptions>,
}

/// Successful conversion response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConvertResponse {
    pub success: bool,

    /// Parsed flights and passengers
    pub result: ItineraryResult,

    /// False when there was no text to parse
    pub pnr_processing_attempted: bool,
}

impl ConvertResponse {
    /// Response for a request that was parsed.
    pub fn parsed(result: ItineraryResult) -> Self {
        Self {
            success: true,
            result,
            pnr_processing_attempted: true,
        }
    }

    /// Response for a request with no PNR text.
    pub fn not_attempted() -> Self {
        Self {
            success: true,
            result: ItineraryResult::default(),
            pnr_processing_attempted: false,
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Always false
    pub success: bool,

    /// Error message
    pub error: String,

    /// Empty result so clients can render unconditionally
    pub result: EmptyResult,
}

/// The `result` member of an error response.
#[derive(Debug, Default, Serialize)]
pub struct EmptyResult {
    pub flights: Vec<FlightSegment>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            result: EmptyResult::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TimeFormat;
    use serde_json::json;

    #[test]
    fn request_with_options() {
        let req: ConvertRequest = serde_json::from_value(json!({
            "pnrText": "1 KQ 100 Y 15JAN MBOJFK 1200 1800",
            "options": { "segmentTimeFormat": "24h", "showTransitTimes": true }
        }))
        .unwrap();

        assert_eq!(req.pnr_text.as_deref(), Some("1 KQ 100 Y 15JAN MBOJFK 1200 1800"));
        let options = req.options.unwrap();
        assert_eq!(options.segment_time_format, TimeFormat::TwentyFourHour);
        assert_eq!(options.transit_time_format, TimeFormat::TwelveHour);
    }

    #[test]
    fn request_without_fields() {
        let req: ConvertRequest = serde_json::from_value(json!({})).unwrap();
        assert!(req.pnr_text.is_none());
        assert!(req.options.is_none());

        let req: ConvertRequest = serde_json::from_value(json!({ "options": null })).unwrap();
        assert!(req.options.is_none());
    }

    #[test]
    fn not_attempted_shape() {
        let value = serde_json::to_value(ConvertResponse::not_attempted()).unwrap();
        assert_eq!(
            value,
            json!({
                "success": true,
                "result": { "flights": [], "passengers": [] },
                "pnrProcessingAttempted": false
            })
        );
    }

    #[test]
    fn error_shape() {
        let value = serde_json::to_value(ErrorResponse::new("boom")).unwrap();
        assert_eq!(
            value,
            json!({ "success": false, "error": "boom", "result": { "flights": [] } })
        );
    }
}
