use std::path::{Path, PathBuf};

use healthform_core::{SubmissionError, UploadedFile};

/// Writes `file` into `upload_dir` under the name the client gave it. The
/// name is used as-is, so an existing file of the same name is replaced. The
/// path that was written is returned.
pub async fn save_upload(upload_dir: &Path, file: &UploadedFile) -> Result<PathBuf, SubmissionError> {
    let path = upload_dir.join(&file.file_name);
    tokio::fs::write(&path, &file.data)
        .await
        .map_err(|source| SubmissionError::SaveFile {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}
