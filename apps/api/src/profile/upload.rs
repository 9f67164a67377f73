//! Resume upload decoding: multipart form parsing and document-to-text.
//!
//! PDF text extraction is CPU-bound and runs via `tokio::task::spawn_blocking`.

use axum::extract::multipart::{Multipart, MultipartError};
use axum::http::StatusCode;
use bytes::Bytes;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;

const PDF_MAGIC: &[u8] = b"%PDF-";

/// A decoded upload: the owning user and the resume's plain text.
#[derive(Debug)]
pub struct UploadedResume {
    pub user_id: Uuid,
    pub file_name: Option<String>,
    pub text: String,
}

/// Reads the `user_id` and `file` parts of a resume upload form.
/// Unknown parts are skipped.
pub async fn read_upload(mut multipart: Multipart) -> Result<UploadedResume, AppError> {
    let mut user_id: Option<Uuid> = None;
    let mut file: Option<(Option<String>, Option<String>, Bytes)> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        match field.name() {
            Some("user_id") => {
                let raw = field.text().await.map_err(multipart_error)?;
                let parsed = raw.trim().parse::<Uuid>().map_err(|_| {
                    AppError::Validation(format!("user_id must be a UUID, got '{}'", raw.trim()))
                })?;
                user_id = Some(parsed);
            }
            Some("file") => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await.map_err(multipart_error)?;
                file = Some((file_name, content_type, data));
            }
            other => debug!(field = ?other, "ignoring unknown upload field"),
        }
    }

    let user_id =
        user_id.ok_or_else(|| AppError::Validation("missing 'user_id' form field".into()))?;
    let (file_name, content_type, data) =
        file.ok_or_else(|| AppError::Validation("missing 'file' form field".into()))?;

    let text = document_text(data, file_name.as_deref(), content_type.as_deref()).await?;

    Ok(UploadedResume {
        user_id,
        file_name,
        text,
    })
}

/// Converts an uploaded document to text. PDFs go through `pdf-extract`;
/// anything else must be UTF-8.
pub async fn document_text(
    data: Bytes,
    file_name: Option<&str>,
    content_type: Option<&str>,
) -> Result<String, AppError> {
    let text = if is_pdf(&data, file_name, content_type) {
        let len = data.len();
        let extracted = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
            .await
            .map_err(|e| {
                warn!("PDF extraction task failed: {e}");
                AppError::UnprocessableEntity("could not read PDF document".into())
            })?;
        extracted.map_err(|e| {
            warn!(bytes = len, "PDF extraction failed: {e}");
            AppError::UnprocessableEntity("could not read PDF document".into())
        })?
    } else {
        String::from_utf8(data.to_vec()).map_err(|_| {
            AppError::UnprocessableEntity("document is neither a PDF nor UTF-8 text".into())
        })?
    };

    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "document contains no readable text".into(),
        ));
    }
    Ok(text)
}

fn is_pdf(data: &[u8], file_name: Option<&str>, content_type: Option<&str>) -> bool {
    data.starts_with(PDF_MAGIC)
        || content_type.is_some_and(|ct| ct.eq_ignore_ascii_case("application/pdf"))
        || file_name.is_some_and(|name| name.to_ascii_lowercase().ends_with(".pdf"))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(format!("malformed upload: {}", err.body_text()))
    }
}
