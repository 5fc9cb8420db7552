//! Routes Layer
//!
//! axum handlers that bridge HTTP requests to the repository.

mod error;
mod item_routes;

use std::time::Instant;

use axum::extract::Request;
use axum::http::{header, Method};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::{AppState, CorsConfig};

pub use error::ApiError;
pub use item_routes::*;

/// Build the `/items` API router
pub fn router(state: AppState, cors: &CorsConfig) -> Router {
    Router::new()
        .route("/items", get(list_items).post(add_item))
        .route("/items/{id}", get(get_item).put(update_item).delete(delete_item))
        .layer(cors_layer(cors))
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// The UI is served from its own origin, so browsers need CORS to call us
fn cors_layer(cors: &CorsConfig) -> CorsLayer {
    let origin = match cors {
        CorsConfig::Any => AllowOrigin::any(),
        CorsConfig::Origins(origins) => AllowOrigin::list(origins.iter().cloned()),
    };
    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

/// Log method, path, status and latency for every request
async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(request).await;

    tracing::info!(
        %method,
        %path,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request"
    );
    response
}
