#![forbid(unsafe_code)]

//! Types shared by the submission service and the dashboard that feeds it.

mod error;
pub mod response;
pub mod submission;

pub use error::SubmissionError;
pub use response::FormResponse;
pub use submission::{Submission, UploadedFile};

/// Multipart field carrying the submitter's name.
pub const NAME_FIELD: &str = "name";

/// Multipart field carrying the submitter's age.
pub const AGE_FIELD: &str = "age";

/// Multipart field carrying the uploaded file.
pub const FILE_FIELD: &str = "file";

/// Message returned by the service when a submission has been stored.
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Default cap, in megabytes, on the size of a form post.
pub const DEFAULT_MAX_UPLOAD_MB: usize = 200;

/// Message returned by the service when any of the fields is missing.
pub const MISSING_FIELDS_MESSAGE: &str = "All fields are required.";
