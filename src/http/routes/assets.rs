//! Images referenced from documents.

use std::fs;

use axum::{
    http::header,
    response::IntoResponse,
};

use crate::http::error::AppError;
use crate::http::routes::{blocking, file_name, Outcome};
use crate::http::server::AppState;
use crate::security::{resolve, ResolveError};

/// Image content type for `name`, by extension.
pub fn image_mime(name: &str) -> Option<&'static str> {
    let (_, ext) = name.rsplit_once('.')?;
    let mime = match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "webp" => "image/webp",
        "ico" => "image/x-icon",
        "bmp" => "image/bmp",
        "avif" => "image/avif",
        _ => return None,
    };
    Some(mime)
}

pub async fn serve(state: &AppState, path: &str) -> Result<Outcome, AppError> {
    let Some(mime) = image_mime(&file_name(path)) else {
        return Ok(Outcome::Next);
    };

    let root = state.root().to_path_buf();
    let request_path = path.to_owned();
    let bytes = blocking(move || match resolve(&request_path, &root) {
        Ok(file) if file.is_file() => Ok(Some(fs::read(&file)?)),
        Ok(_) | Err(ResolveError::NotFound) => Ok(None),
        Err(e) => Err(e.into()),
    })
    .await?;

    Ok(match bytes {
        Some(bytes) => Outcome::Respond(([(header::CONTENT_TYPE, mime)], bytes).into_response()),
        None => Outcome::Next,
    })
}
