//! PDF text extraction: the only place that touches `pdf-extract`.

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::errors::AppError;
use crate::questions::normalize::ExtractedText;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Turns uploaded document bytes into raw text.
///
/// Carried in `AppState` as `Arc<dyn TextExtractor>`.
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, data: &[u8]) -> Result<ExtractedText, AppError>;
}

/// Per-page extraction with `pdf-extract`, run on the blocking pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    #[tracing::instrument(skip(self, data), fields(bytes = data.len()))]
    async fn extract(&self, data: &[u8]) -> Result<ExtractedText, AppError> {
        let owned = data.to_vec();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || {
                pdf_extract::extract_text_from_mem_by_pages(&owned).map_err(|e| e.to_string())
            }),
        )
        .await
        .map_err(|_| AppError::NoExtractableText("PDF extraction timed out".to_string()))?
        // pdf-extract panics on some malformed inputs; the join error carries it.
        .map_err(|e| AppError::NoExtractableText(format!("extraction task failed: {e}")))?
        .map_err(|e| AppError::NoExtractableText(format!("failed to parse PDF: {e}")))?;

        info!(page_count = pages.len(), "PDF text extraction complete");

        Ok(ExtractedText::Pages(pages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_non_pdf_bytes_are_not_extractable() {
        let result = PdfTextExtractor
            .extract(b"this is plainly not a PDF document")
            .await;
        assert!(matches!(result, Err(AppError::NoExtractableText(_))));
    }

    #[tokio::test]
    async fn test_empty_upload_is_not_extractable() {
        let result = PdfTextExtractor.extract(&[]).await;
        assert!(matches!(result, Err(AppError::NoExtractableText(_))));
    }
}
