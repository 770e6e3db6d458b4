use axum::{http::StatusCode, response::IntoResponse};

use crate::components::{
    notice::{notice, NoticeKind},
    page::page,
};

/// An error that is shown to the browser as a page with a single notice on
/// it.
pub struct ApiError {
    code: StatusCode,
    message: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let text = match self.message {
            Some(msg) => msg,
            None => self
                .code
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string(),
        };

        (self.code, page(notice(NoticeKind::Error, &text))).into_response()
    }
}

impl From<StatusCode> for ApiError {
    fn from(code: StatusCode) -> Self {
        Self {
            code,
            message: None,
        }
    }
}

impl ApiError {
    /// Sets the message on the error.
    pub fn message<S: Into<String>>(mut self, msg: S) -> Self {
        self.message = Some(msg.into());
        self
    }

    pub fn not_found() -> Self {
        StatusCode::NOT_FOUND.into()
    }
}
