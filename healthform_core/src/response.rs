use serde::Serialize;

use crate::SUCCESS_MESSAGE;

/// The JSON body the service answers with. Serialises to either
/// `{"message": "..."}` or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormResponse {
    Success { message: String },
    Failure { error: String },
}

impl FormResponse {
    pub fn success() -> Self {
        Self::Success {
            message: SUCCESS_MESSAGE.to_string(),
        }
    }

    pub fn error<S: Into<String>>(msg: S) -> Self {
        Self::Failure { error: msg.into() }
    }
}
