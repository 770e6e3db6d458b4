use axum::{http::StatusCode, response::IntoResponse, Json};
use healthform_core::{FormResponse, SubmissionError};

/// The single error kind of the service: a status code and the text that the
/// caller gets to see in the `error` field.
#[derive(Debug)]
pub struct ApiError {
    code: StatusCode,
    message: String,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.code, Json(FormResponse::error(self.message))).into_response()
    }
}

/// Every failure while handling a submission is reported as a client error,
/// including ones that were really the server's fault (e.g. a full disk).
impl From<SubmissionError> for ApiError {
    fn from(err: SubmissionError) -> Self {
        Self::bad_request().message(err.to_string())
    }
}

impl From<StatusCode> for ApiError {
    fn from(code: StatusCode) -> Self {
        Self {
            code,
            message: code.canonical_reason().unwrap_or("Unknown error").to_string(),
        }
    }
}

impl ApiError {
    /// Sets the message on the error.
    pub fn message<S: Into<String>>(mut self, msg: S) -> Self {
        self.message = msg.into();
        self
    }

    pub fn bad_request() -> Self {
        StatusCode::BAD_REQUEST.into()
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }
}
