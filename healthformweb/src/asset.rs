use axum::{
    http::{header, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::Embed;

use crate::error::ApiError;

#[derive(Embed)]
#[folder = "assets"]
#[include = "*.css"]
#[include = "*.js"]
pub struct Asset;

// We use a wildcard matcher ("/assets/*file") to match against everything
// within our defined assets directory. This is the directory on our Asset
// struct above, where folder = "assets".
pub async fn static_handler(uri: Uri) -> impl IntoResponse {
    let path = uri.path().trim_start_matches('/');
    let path = path.strip_prefix("assets/").unwrap_or(path);

    StaticFile(path.to_string())
}

struct StaticFile<T>(T);

impl<T> IntoResponse for StaticFile<T>
where
    T: Into<String>,
{
    fn into_response(self) -> Response {
        let path = self.0.into();

        match Asset::get(path.as_str()) {
            Some(content) => {
                let mime = mime_guess::from_path(path).first_or_octet_stream();
                ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
            }
            None => ApiError::not_found()
                .message(format!("No such asset: {path}"))
                .into_response(),
        }
    }
}
