use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Client errors returned by the API. The `Display` text is the wire message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Only {0} is allowed")]
    MethodNotAllowed(&'static str),
    #[error("Invalid JSON body")]
    InvalidBody,
    #[error("vehicle_id is required")]
    MissingVehicleId,
    #[error("latitude and longitude are required")]
    MissingCoordinates,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidBody
            | ApiError::MissingVehicleId
            | ApiError::MissingCoordinates => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_wire_format() {
        assert_eq!(ApiError::MethodNotAllowed("POST").to_string(), "Only POST is allowed");
        assert_eq!(ApiError::MethodNotAllowed("GET").to_string(), "Only GET is allowed");
        assert_eq!(ApiError::InvalidBody.to_string(), "Invalid JSON body");
        assert_eq!(ApiError::MissingVehicleId.to_string(), "vehicle_id is required");
        assert_eq!(ApiError::MissingCoordinates.to_string(), "latitude and longitude are required");
    }

    #[test]
    fn method_errors_are_405_and_the_rest_400() {
        assert_eq!(ApiError::MethodNotAllowed("GET").into_response().status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::InvalidBody.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingVehicleId.into_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::MissingCoordinates.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
