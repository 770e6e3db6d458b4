#![forbid(unsafe_code)]

//! The submission service: accepts a name, an age and a file as a multipart
//! POST and stores the file in the upload directory.

use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    routing::post,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

mod api;
pub mod args;
pub mod config;
pub mod error;
pub mod storage;

pub use config::{prepare_upload_dir, ServiceConfig};

/// The route the form is posted to.
pub const FORM_ROUTE: &str = "/api/form";

/// Builds the router for the service. The upload directory named in `config`
/// is expected to exist already, see [`prepare_upload_dir`].
pub fn app(config: ServiceConfig) -> Router {
    let body_limit = config.max_upload_bytes;

    Router::new()
        .route(FORM_ROUTE, post(api::form::submit_form))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors())
        .layer(TraceLayer::new_for_http())
        .with_state(config)
}

/// Requests are accepted from any origin.
fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
