//! Analyze pipeline: one upload in, one raw completion out.
//!
//! Flow: extract → normalize → ensure_extractable → build_prompt → generate.
//! Stateless; every request is processed independently.

use tracing::info;

use crate::errors::AppError;
use crate::llm_client::QuestionGenerator;
use crate::models::upload::UploadRequest;
use crate::questions::extract::TextExtractor;
use crate::questions::normalize::{ensure_extractable, normalize};
use crate::questions::prompts::build_prompt;

/// Runs the pipeline and returns the completion text unmodified.
///
/// Blank extracted text is rejected before the generator is invoked. Any
/// generator failure surfaces as `GenerationFailed`; its cause is logged when
/// the error is turned into a response.
pub async fn analyze_resume(
    upload: &UploadRequest,
    extractor: &dyn TextExtractor,
    generator: &dyn QuestionGenerator,
) -> Result<String, AppError> {
    let extracted = extractor.extract(&upload.document).await?;
    let resume_text = ensure_extractable(normalize(extracted))?;
    info!(
        file_name = %upload.file_name,
        chars = resume_text.chars().count(),
        "Résumé text extracted"
    );

    let prompt = build_prompt(&resume_text, &upload.preferences);

    let completion = generator.generate(&prompt).await?;

    info!(chars = completion.len(), "Questions generated");
    Ok(completion)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::errors::AppError;
    use crate::llm_client::{LlmError, QuestionGenerator};
    use crate::questions::extract::TextExtractor;
    use crate::questions::normalize::ExtractedText;

    /// Treats the upload bytes as UTF-8 pages separated by form feeds.
    pub struct Utf8Extractor;

    #[async_trait]
    impl TextExtractor for Utf8Extractor {
        async fn extract(&self, data: &[u8]) -> Result<ExtractedText, AppError> {
            let text = String::from_utf8(data.to_vec())
                .map_err(|e| AppError::NoExtractableText(e.to_string()))?;
            Ok(ExtractedText::Pages(
                text.split('\u{c}').map(String::from).collect(),
            ))
        }
    }

    /// Records every prompt and replies with a canned completion or error.
    pub struct RecordingGenerator {
        reply: Result<String, u16>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl RecordingGenerator {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        pub fn last_prompt(&self) -> Option<String> {
            self.prompts.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl QuestionGenerator for RecordingGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "API key not valid: secret-key-123".to_string(),
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;

    use super::test_support::{RecordingGenerator, Utf8Extractor};
    use super::*;
    use crate::models::upload::{Preferences, QuestionStyle};

    fn upload(text: &str, preferences: Preferences) -> UploadRequest {
        UploadRequest {
            file_name: "resume.pdf".to_string(),
            document: Bytes::from(text.to_string()),
            preferences,
        }
    }

    #[tokio::test]
    async fn test_completion_is_returned_unmodified() {
        let generator = RecordingGenerator::replying("  1. What?\n2. Why?\n");
        let result = analyze_resume(
            &upload("Jane Doe, Rust engineer", Preferences::default()),
            &Utf8Extractor,
            &generator,
        )
        .await
        .unwrap();
        assert_eq!(result, "  1. What?\n2. Why?\n");
        assert_eq!(generator.calls(), 1);
    }

    #[tokio::test]
    async fn test_pages_reach_the_prompt_joined_by_newline() {
        let generator = RecordingGenerator::replying("1. Q");
        let prefs = Preferences {
            role: Some("SRE".to_string()),
            experience: None,
            question_style: Some(QuestionStyle::Experience),
        };
        analyze_resume(&upload("page one\u{c}page two", prefs), &Utf8Extractor, &generator)
            .await
            .unwrap();

        let prompt = generator.last_prompt().unwrap();
        assert!(prompt.contains("page one\npage two"));
        assert!(prompt.contains("Target role: SRE"));
    }

    #[tokio::test]
    async fn test_blank_text_never_reaches_generator() {
        let generator = RecordingGenerator::replying("1. Q");
        let err = analyze_resume(
            &upload(" \n\u{c}\t ", Preferences::default()),
            &Utf8Extractor,
            &generator,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::NoExtractableText(_)));
        assert_eq!(generator.calls(), 0);
    }

    #[tokio::test]
    async fn test_generator_error_becomes_generation_failed() {
        let generator = RecordingGenerator::failing(401);
        let err = analyze_resume(
            &upload("Jane Doe", Preferences::default()),
            &Utf8Extractor,
            &generator,
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::GenerationFailed(_)));
        assert_eq!(generator.calls(), 1);
    }
}
