//! Protocol Messages
//!
//! JSON bodies exchanged on the `/hunter` routes, and the fixed response
//! messages clients match on.

use serde::{Serialize, Deserialize};

use crate::core::position::Position;
use crate::core::speed::Speed;

// =============================================================================
// RESPONSE MESSAGES
// =============================================================================

/// Plain-text body of a successful prey configuration.
pub const PREY_CONFIGURED: &str = "A presa está configurada corretamente";

/// Prefix of the prey configuration decode error; the decoder text follows.
pub const PREY_DECODE_ERROR_PREFIX: &str = "Erro ao decodificar JSON: ";

/// Successful hunter configuration.
pub const HUNTER_CONFIGURED: &str = "hunter configured";

/// Hunter configuration decode error.
pub const INVALID_REQUEST_BODY: &str = "invalid request body";

/// Successful hunt.
pub const PREY_HUNTED: &str = "prey hunted";

/// Failed hunt.
pub const CAN_NOT_HUNT: &str = "can not hunt the prey";

// =============================================================================
// CLIENT -> SERVER
// =============================================================================

/// Body of both configure routes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfigureRequest {
    /// New speed. Negative or non-finite values fail decoding.
    pub speed: Speed,
    /// New position.
    pub position: Position,
}

// =============================================================================
// SERVER -> CLIENT
// =============================================================================

/// Successful JSON reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Payload, `null` when there is nothing to return.
    pub data: Option<T>,
    /// Human readable outcome.
    pub message: String,
}

impl ApiResponse<()> {
    /// Reply without payload.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            data: None,
            message: message.into(),
        }
    }
}

/// Error JSON reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Canonical reason phrase of the HTTP status, e.g. `Bad Request`.
    pub status: String,
    /// What went wrong.
    pub message: String,
}

impl ErrorResponse {
    /// Create an error reply.
    pub fn new(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configure_request_decode() {
        let req: ConfigureRequest =
            serde_json::from_str(r#"{"speed": 4.0,"position":{"X": 0.1, "Y": 0.4,"Z": 3.1}}"#).unwrap();
        assert_eq!(req.speed.get(), 4.0);
        assert_eq!(req.position, Position::new(0.1, 0.4, 3.1));
    }

    #[test]
    fn test_configure_request_requires_fields() {
        assert!(serde_json::from_str::<ConfigureRequest>(r#"{"speed": 4.0}"#).is_err());
        assert!(serde_json::from_str::<ConfigureRequest>(r#"{"position":{"X":0,"Y":0,"Z":0}}"#).is_err());
    }

    #[test]
    fn test_configure_request_rejects_negative_speed() {
        let err = serde_json::from_str::<ConfigureRequest>(
            r#"{"speed": -1.0,"position":{"X": 0, "Y": 0,"Z": 0}}"#,
        )
        .unwrap_err();
        assert!(err.to_string().starts_with("speed must be non-negative"));
    }

    #[test]
    fn test_response_wire_format() {
        let ok = serde_json::to_string(&ApiResponse::message(HUNTER_CONFIGURED)).unwrap();
        assert_eq!(ok, r#"{"data":null,"message":"hunter configured"}"#);

        let err = serde_json::to_string(&ErrorResponse::new("Bad Request", INVALID_REQUEST_BODY)).unwrap();
        assert_eq!(err, r#"{"status":"Bad Request","message":"invalid request body"}"#);
    }
}
