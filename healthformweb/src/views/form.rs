use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::HeaderMap,
};
use healthform_core::{Submission, UploadedFile, AGE_FIELD, FILE_FIELD, NAME_FIELD, SUCCESS_MESSAGE};
use maud::{html, Markup};
use tracing::{debug, info, instrument, warn};

use crate::{
    client::{ClientError, SendOutcome},
    components::{
        notice::{notice, NoticeKind},
        page::page,
    },
    validation::{validate_form, FieldError, FormInput},
    AppState,
};

/// File types offered by the browser's file picker. The restriction is only a
/// hint to the picker, nothing checks it.
pub const ACCEPTED_EXTENSIONS: &str = ".txt,.pdf,.png,.jpg,.jpeg";

/// How a press of the Submit button ended.
#[derive(Debug)]
pub enum Outcome {
    /// Stopped before anything was sent to the service.
    Invalid(FieldError),
    Accepted,
    Rejected(String),
    Failed(ClientError),
}

impl Outcome {
    pub fn notice(&self) -> Markup {
        match self {
            Outcome::Invalid(err) => notice(NoticeKind::Error, &err.to_string()),
            Outcome::Accepted => notice(NoticeKind::Success, SUCCESS_MESSAGE),
            Outcome::Rejected(error) => notice(
                NoticeKind::Error,
                &format!("Failed to submit the form: {error}"),
            ),
            Outcome::Failed(err) => {
                notice(NoticeKind::Error, &format!("An error occurred: {err}"))
            }
        }
    }
}

/// The landing page: an empty form.
pub async fn index() -> Markup {
    page(form_view(&FormInput::default(), None))
}

/// Header set by `assets/form.js` when it posts the form in the background.
pub const PARTIAL_HEADER: &str = "x-partial";

/// Handles the form post from the browser. Background posts (see
/// [`PARTIAL_HEADER`]) get back just the notice, which is put in under the
/// form; a plain form post gets the whole page again with the notice in place.
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    multipart: Result<Multipart, MultipartRejection>,
) -> Markup {
    let (input, result) = match multipart {
        Ok(multipart) => match read_form_input(multipart).await {
            Ok(input) => {
                let outcome = submit_input(&state, &input).await;
                (input, outcome.notice())
            }
            Err(text) => (FormInput::default(), read_failure(&text)),
        },
        Err(rejection) => (FormInput::default(), read_failure(&rejection.body_text())),
    };

    if headers.contains_key(PARTIAL_HEADER) {
        result
    } else {
        page(form_view(&input, Some(result)))
    }
}

fn read_failure(text: &str) -> Markup {
    warn!("Could not read the form: {text}");
    notice(NoticeKind::Error, &format!("An error occurred: {text}"))
}

/// Validates locally and only then contacts the service.
async fn submit_input(state: &AppState, input: &FormInput) -> Outcome {
    let submission = match validate_form(input) {
        Ok(submission) => submission,
        Err(err) => {
            debug!("Form is not valid: {err}");
            return Outcome::Invalid(err);
        }
    };

    match state.sender.send(&submission).await {
        Ok(SendOutcome::Accepted) => {
            info!("{}", submitted_summary(&submission));
            Outcome::Accepted
        }
        Ok(SendOutcome::Rejected(error)) => {
            warn!("Service rejected the submission: {error}");
            Outcome::Rejected(error)
        }
        Err(err) => {
            warn!("Could not reach the service: {err}");
            Outcome::Failed(err)
        }
    }
}

/// What gets logged for an accepted submission. Only the file is described,
/// nothing about the person.
fn submitted_summary(submission: &Submission) -> String {
    format!(
        "Submitted `{}`, {} bytes",
        submission.file.file_name,
        submission.file.data.len()
    )
}

async fn read_form_input(mut multipart: Multipart) -> Result<FormInput, String> {
    let mut input = FormInput::default();

    while let Some(field) = multipart.next_field().await.map_err(|e| e.body_text())? {
        let field_name = field.name().unwrap_or_default().to_string();
        match field_name.as_str() {
            NAME_FIELD => input.name = field.text().await.map_err(|e| e.body_text())?,
            AGE_FIELD => input.age = field.text().await.map_err(|e| e.body_text())?,
            FILE_FIELD => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await.map_err(|e| e.body_text())?;
                input.file = Some(UploadedFile { file_name, data });
            }
            _ => debug!("Skipping part `{field_name}`"),
        }
    }

    Ok(input)
}

/// The form itself, with `input` filled back in, followed by the area that
/// results are shown in.
pub fn form_view(input: &FormInput, result: Option<Markup>) -> Markup {
    let age = if input.age.is_empty() { "1" } else { input.age.as_str() };

    html! {
        h4 { "Enter your details:" }
        form id="healthcare_form" action="/submit" method="post" enctype="multipart/form-data" {
            label for="name" {
                "Name"
                input type="text" id="name" name=(NAME_FIELD) placeholder="Enter your name" value=(input.name);
            }
            label for="age" {
                "Age"
                input type="number" id="age" name=(AGE_FIELD) min="1" step="1" value=(age);
            }
            label for="file" {
                "Upload File"
                input type="file" id="file" name=(FILE_FIELD) accept=(ACCEPTED_EXTENSIONS);
            }
            button type="submit" { "Submit" }
        }
        div id="spinner" class="spinner" { "Submitting your form..." }
        div id="result" {
            @if let Some(result) = result {
                (result)
            }
        }
    }
}
