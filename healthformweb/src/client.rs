use async_trait::async_trait;
use healthform_core::{Submission, AGE_FIELD, FILE_FIELD, NAME_FIELD};
use reqwest::{
    multipart::{Form, Part},
    StatusCode,
};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, instrument};

/// How the service answered a submission that reached it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Accepted,
    /// Any non-200 answer. Holds the `error` field of the body, or
    /// "Unknown error" if there was none.
    Rejected(String),
}

/// The service could not be reached, or its answer could not be read.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Sends a validated submission to the service. One attempt per call.
#[async_trait]
pub trait SubmissionSender: Send + Sync {
    async fn send(&self, submission: &Submission) -> Result<SendOutcome, ClientError>;
}

/// Posts submissions to the service over HTTP as a multipart form.
#[derive(Debug, Clone)]
pub struct HttpSubmissionSender {
    client: reqwest::Client,
    url: String,
}

impl HttpSubmissionSender {
    pub fn new<S: Into<String>>(url: S) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    /// Uses an already configured client, e.g. one with timeouts or proxy
    /// settings of its own.
    pub fn with_client<S: Into<String>>(client: reqwest::Client, url: S) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SubmissionSender for HttpSubmissionSender {
    #[instrument(skip_all, fields(url = %self.url))]
    async fn send(&self, submission: &Submission) -> Result<SendOutcome, ClientError> {
        let file = Part::bytes(submission.file.data.to_vec())
            .file_name(submission.file.file_name.clone());

        let form = Form::new()
            .text(NAME_FIELD, submission.name.clone())
            .text(AGE_FIELD, submission.age.clone())
            .part(FILE_FIELD, file);

        let response = self.client.post(&self.url).multipart(form).send().await?;
        let status = response.status();
        debug!("Service answered {status}");

        if status == StatusCode::OK {
            return Ok(SendOutcome::Accepted);
        }

        let body: Value = response.json().await?;
        let error = match body.get("error") {
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
            None => "Unknown error".to_string(),
        };

        Ok(SendOutcome::Rejected(error))
    }
}
