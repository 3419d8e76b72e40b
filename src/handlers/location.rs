use std::sync::Arc;
use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use tracing::debug;
use crate::models::error::ApiError;
use crate::models::location::LocationPayload;
use crate::store::LocationStore;

/// `POST /location`: record a vehicle's latest position.
///
/// The body is taken as raw bytes so clients are not required to send a JSON content type.
pub async fn post_location(
    State(store): State<Arc<LocationStore>>,
    body: Bytes,
) -> Result<Json<Value>, ApiError> {
    let location = LocationPayload::from_slice(&body)
        .and_then(LocationPayload::validate)
        .map_err(|e| {
            debug!("rejected location update: {}", e);
            e
        })?;

    debug!(
        "location update for {}: ({}, {})",
        location.vehicle_id, location.latitude, location.longitude
    );
    store.upsert(location);

    Ok(Json(json!({ "status": "ok" })))
}

pub async fn only_post() -> ApiError {
    ApiError::MethodNotAllowed("POST")
}
