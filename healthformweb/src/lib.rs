#![forbid(unsafe_code)]

//! The dashboard: a single page with a form for a name, an age and a file.
//! Submissions are checked here first and then forwarded to the submission
//! service.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

mod asset;
pub mod args;
pub mod client;
mod components;
mod error;
pub mod validation;
mod views;

use client::SubmissionSender;

/// Shared by all handlers.
#[derive(Clone)]
pub struct AppState {
    sender: Arc<dyn SubmissionSender>,
}

impl AppState {
    pub fn new(sender: Arc<dyn SubmissionSender>) -> Self {
        Self { sender }
    }
}

/// Builds the router for the dashboard. `max_upload_bytes` limits the size
/// of the form post coming from the browser.
pub fn app(state: AppState, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/", get(views::form::index))
        .route("/submit", post(views::form::submit))
        .route("/assets/*file", get(asset::static_handler))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
