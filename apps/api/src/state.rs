use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::QuestionGenerator;
use crate::questions::extract::TextExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; handlers hold no per-request state here.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Default: GeminiClient.
    pub generator: Arc<dyn QuestionGenerator>,
}
