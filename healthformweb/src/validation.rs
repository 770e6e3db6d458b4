use healthform_core::{Submission, UploadedFile};
use thiserror::Error;

/// What the browser sent, before any checks. The file is `None` if the
/// request had no file part at all; browsers send a part with an empty
/// filename when nothing was chosen.
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    pub name: String,
    pub age: String,
    pub file: Option<UploadedFile>,
}

/// The first problem found with a [`FormInput`]. Each one maps to the message
/// shown next to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Name is required.")]
    NameRequired,
    #[error("Age must be a positive number.")]
    AgeNotPositive,
    #[error("File upload is required.")]
    FileRequired,
}

/// Checks name, age and file in that order. The age must be a whole number
/// of at least 1, which is stricter than what the service itself accepts.
pub fn validate_form(input: &FormInput) -> Result<Submission, FieldError> {
    if input.name.is_empty() {
        return Err(FieldError::NameRequired);
    }

    let age = match input.age.trim().parse::<i64>() {
        Ok(age) if age > 0 => age,
        _ => return Err(FieldError::AgeNotPositive),
    };

    let file = match &input.file {
        Some(file) if !file.file_name.is_empty() => file.clone(),
        _ => return Err(FieldError::FileRequired),
    };

    Ok(Submission {
        name: input.name.clone(),
        age: age.to_string(),
        file,
    })
}
