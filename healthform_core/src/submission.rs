use bytes::Bytes;

use crate::error::SubmissionError;

/// A file as it arrived in the request: the name the client gave it and its
/// raw content. Neither is inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedFile {
    pub file_name: String,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new<N, D>(file_name: N, data: D) -> Self
    where
        N: Into<String>,
        D: Into<Bytes>,
    {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }
}

/// One complete submission. The age is kept as the text that was sent; it is
/// never parsed or range checked here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub age: String,
    pub file: UploadedFile,
}

impl Submission {
    /// Performs presence validation. A field counts as missing if it was not
    /// sent or is empty; a file counts as missing if it has no filename. The
    /// content of the file is allowed to be empty.
    pub fn from_parts(
        name: Option<String>,
        age: Option<String>,
        file: Option<UploadedFile>,
    ) -> Result<Self, SubmissionError> {
        let name = name.filter(|n| !n.is_empty());
        let age = age.filter(|a| !a.is_empty());
        let file = file.filter(|f| !f.file_name.is_empty());

        match (name, age, file) {
            (Some(name), Some(age), Some(file)) => Ok(Self { name, age, file }),
            _ => Err(SubmissionError::MissingFields),
        }
    }
}
