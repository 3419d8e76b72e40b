pub mod dashboard;
pub mod location;
pub mod vehicles;

use std::sync::Arc;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use crate::store::LocationStore;

pub fn router(store: Arc<LocationStore>) -> Router {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route(
            "/location",
            post(location::post_location)
                .fallback(location::only_post)
                .layer(DefaultBodyLimit::disable()),
        )
        // HEAD would otherwise be served by the GET handler
        .route(
            "/vehicles",
            get(vehicles::get_vehicles)
                .head(vehicles::only_get)
                .fallback(vehicles::only_get),
        )
        // logging so we can see whats going on
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(store)
}
