use axum::{
    extract::{multipart::{MultipartError, MultipartRejection}, Multipart, State},
    Json,
};
use healthform_core::{
    FormResponse, Submission, SubmissionError, UploadedFile, AGE_FIELD, FILE_FIELD, NAME_FIELD,
};
use sha2::{Digest, Sha256};
use tracing::{debug, info, instrument, warn};

use crate::{config::ServiceConfig, error::ApiResult, storage::save_upload};

/// Handles one form submission: presence validation, then the file is
/// written to the upload directory.
///
/// A request that is not multipart at all is treated as one in which every
/// field is missing.
#[instrument(skip_all)]
pub async fn submit_form(
    State(config): State<ServiceConfig>,
    multipart: Result<Multipart, MultipartRejection>,
) -> ApiResult<Json<FormResponse>> {
    let submission = match multipart {
        Ok(multipart) => read_submission(multipart).await,
        Err(rejection) => {
            debug!("Not a multipart request: {rejection}");
            Err(SubmissionError::MissingFields)
        }
    };

    let submission = submission.inspect_err(|err| warn!("Rejected submission: {err}"))?;

    let path = save_upload(&config.upload_dir, &submission.file)
        .await
        .inspect_err(|err| warn!("{err}"))?;

    let digest = Sha256::digest(&submission.file.data);
    info!(
        "Saved `{}` to {path:?}, {} bytes, sha256 = {digest:x}",
        submission.file.file_name,
        submission.file.data.len()
    );

    Ok(Json(FormResponse::success()))
}

/// Pulls `name`, `age` and `file` out of the multipart body. Parts that carry
/// a filename only count as the `file` field and parts without one only count
/// as text fields. When a field is repeated the first occurrence is used, and
/// anything else in the body is skipped.
async fn read_submission(mut multipart: Multipart) -> Result<Submission, SubmissionError> {
    let mut name = None;
    let mut age = None;
    let mut file = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let field_name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);

        match (field_name.as_str(), file_name) {
            (FILE_FIELD, Some(file_name)) if file.is_none() => {
                let data = field.bytes().await.map_err(multipart_error)?;
                file = Some(UploadedFile { file_name, data });
            }
            (NAME_FIELD, None) if name.is_none() => {
                name = Some(field.text().await.map_err(multipart_error)?);
            }
            (AGE_FIELD, None) if age.is_none() => {
                age = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => debug!("Skipping part `{field_name}`"),
        }
    }

    Submission::from_parts(name, age, file)
}

fn multipart_error(err: MultipartError) -> SubmissionError {
    SubmissionError::Multipart(err.body_text())
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use axum::http::{header, HeaderValue, Method, StatusCode};
    use axum_test::{
        multipart::{MultipartForm, Part},
        TestServer,
    };
    use serde_json::{json, Value};

    use crate::{app, ServiceConfig, FORM_ROUTE};

    fn test_server(config: ServiceConfig) -> TestServer {
        TestServer::new(app(config)).unwrap()
    }

    fn file_part(file_name: &str, content: &str) -> Part {
        Part::bytes(content.as_bytes().to_vec())
            .file_name(file_name.to_string())
            .mime_type("text/plain")
    }

    fn full_form(name: &str, age: &str, file_name: &str, content: &str) -> MultipartForm {
        MultipartForm::new()
            .add_text("name", name.to_string())
            .add_text("age", age.to_string())
            .add_part("file", file_part(file_name, content))
    }

    fn dir_is_empty(dir: &Path) -> bool {
        std::fs::read_dir(dir).unwrap().next().is_none()
    }

    #[tokio::test]
    async fn valid_submission_is_stored() {
        let tmp = tempfile::tempdir().unwrap();
        let server = test_server(ServiceConfig::new(tmp.path()));

        let response = server
            .post(FORM_ROUTE)
            .multipart(full_form("Jane Doe", "34", "record.txt", "hello"))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(
            response.json::<Value>(),
            json!({ "message": "Form submitted successfully!" })
        );
        assert_eq!(std::fs::read(tmp.path().join("record.txt")).unwrap(), b"hello");
    }

    #[tokio::test]
    async fn age_is_not_checked_by_the_service() {
        let tmp = tempfile::tempdir().unwrap();
        let server = test_server(ServiceConfig::new(tmp.path()));

        for age in ["thirty-four", "0", "-1"] {
            let response = server
                .post(FORM_ROUTE)
                .multipart(full_form("Jane Doe", age, "record.txt", "hello"))
                .await;
            assert_eq!(response.status_code(), StatusCode::OK, "age = {age}");
        }
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let server = test_server(ServiceConfig::new(tmp.path()));

        let response = server
            .post(FORM_ROUTE)
            .multipart(full_form("", "34", "record.txt", "hello"))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>(), json!({ "error": "All fields are required." }));
        assert!(dir_is_empty(tmp.path()));
    }

    #[tokio::test]
    async fn each_missing_field_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let server = test_server(ServiceConfig::new(tmp.path()));

        let forms = [
            MultipartForm::new()
                .add_text("age", "34")
                .add_part("file", file_part("record.txt", "hello")),
            MultipartForm::new()
                .add_text("name", "Jane Doe")
                .add_part("file", file_part("record.txt", "hello")),
            MultipartForm::new()
                .add_text("name", "Jane Doe")
                .add_text("age", "34"),
        ];

        for form in forms {
            let response = server.post(FORM_ROUTE).multipart(form).await;
            assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(response.json::<Value>(), json!({ "error": "All fields are required." }));
        }

        assert!(dir_is_empty(tmp.path()));
    }

    #[tokio::test]
    async fn file_part_without_filename_is_missing() {
        let tmp = tempfile::tempdir().unwrap();
        let server = test_server(ServiceConfig::new(tmp.path()));

        let form = MultipartForm::new()
            .add_text("name", "Jane Doe")
            .add_text("age", "34")
            .add_text("file", "hello");

        let response = server.post(FORM_ROUTE).multipart(form).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert!(dir_is_empty(tmp.path()));
    }

    #[tokio::test]
    async fn non_multipart_body_is_missing_every_field() {
        let tmp = tempfile::tempdir().unwrap();
        let server = test_server(ServiceConfig::new(tmp.path()));

        let response = server
            .post(FORM_ROUTE)
            .json(&json!({ "name": "Jane Doe", "age": "34" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>(), json!({ "error": "All fields are required." }));
    }

    #[tokio::test]
    async fn second_upload_with_same_name_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let server = test_server(ServiceConfig::new(tmp.path()));

        for content in ["first", "second"] {
            let response = server
                .post(FORM_ROUTE)
                .multipart(full_form("Jane Doe", "34", "record.txt", content))
                .await;
            assert_eq!(response.status_code(), StatusCode::OK);
        }

        assert_eq!(std::fs::read(tmp.path().join("record.txt")).unwrap(), b"second");
    }

    #[tokio::test]
    async fn write_failure_text_is_returned() {
        let tmp = tempfile::tempdir().unwrap();
        let server = test_server(ServiceConfig::new(tmp.path()));

        let response = server
            .post(FORM_ROUTE)
            .multipart(full_form("Jane Doe", "34", "no_such_dir/record.txt", "hello"))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        let error = body["error"].as_str().unwrap();
        assert!(error.contains("no_such_dir"), "error = {error}");
        assert!(body.get("message").is_none());
    }

    #[tokio::test]
    async fn oversized_body_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ServiceConfig {
            upload_dir: tmp.path().to_path_buf(),
            max_upload_bytes: 64,
        };
        let server = test_server(config);

        let big = "x".repeat(4096);
        let response = server
            .post(FORM_ROUTE)
            .multipart(full_form("Jane Doe", "34", "big.txt", &big))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert!(response.json::<Value>()["error"].is_string());
        assert!(!tmp.path().join("big.txt").exists());
    }

    #[tokio::test]
    async fn any_origin_is_allowed() {
        let tmp = tempfile::tempdir().unwrap();
        let server = test_server(ServiceConfig::new(tmp.path()));

        let response = server
            .post(FORM_ROUTE)
            .add_header(header::ORIGIN, HeaderValue::from_static("http://localhost:8501"))
            .multipart(full_form("Jane Doe", "34", "record.txt", "hello"))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    }

    #[tokio::test]
    async fn only_post_is_routed() {
        let tmp = tempfile::tempdir().unwrap();
        let server = test_server(ServiceConfig::new(tmp.path()));

        let response = server.method(Method::GET, FORM_ROUTE).await;
        assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);
    }
}
