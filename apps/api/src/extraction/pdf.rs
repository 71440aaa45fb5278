//! PDF text extraction via the `pdf-extract` crate.

use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;

/// Extracts the text layer of an in-memory PDF.
///
/// Parsing is CPU-bound, so it runs on the blocking pool. `pdf-extract` can
/// panic on malformed documents; a panicked task is reported as a PDF error.
pub async fn extract_pdf_text(pdf: Bytes) -> Result<String, AppError> {
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&pdf))
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::Pdf("Resume PDF is malformed".to_string())
            } else {
                AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}"))
            }
        })?
        .map_err(|e| AppError::Pdf(format!("Could not read resume PDF: {e}")))?;

    ensure_text_layer(text)
}

/// Image-only (scanned) PDFs decode fine but carry no text to analyze.
fn ensure_text_layer(text: String) -> Result<String, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::UnprocessableEntity(
            "Resume PDF contains no extractable text".to_string(),
        ));
    }
    debug!("Extracted {} characters from resume PDF", text.len());
    Ok(text)
}

/// True when the upload looks like a PDF, by content type or file name.
pub fn is_pdf_upload(content_type: Option<&str>, file_name: Option<&str>) -> bool {
    let by_type = content_type
        .map(|ct| ct.eq_ignore_ascii_case("application/pdf"))
        .unwrap_or(false);
    let by_name = file_name
        .map(|name| name.to_ascii_lowercase().ends_with(".pdf"))
        .unwrap_or(false);
    by_type || by_name
}
