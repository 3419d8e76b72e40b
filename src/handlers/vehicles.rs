use std::sync::Arc;
use axum::extract::State;
use axum::Json;
use serde::Serialize;
use crate::models::error::ApiError;
use crate::models::location::Location;
use crate::store::LocationStore;

#[derive(Serialize)]
pub struct VehiclesResponse {
    pub vehicles: Vec<Location>,
}

/// `GET /vehicles`: latest location of every vehicle that has reported.
pub async fn get_vehicles(State(store): State<Arc<LocationStore>>) -> Json<VehiclesResponse> {
    Json(VehiclesResponse { vehicles: store.snapshot() })
}

pub async fn only_get() -> ApiError {
    ApiError::MethodNotAllowed("GET")
}
