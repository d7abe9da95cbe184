//! Upload/result view-model.
//!
//! Transitions: Idle → Submitting → {Succeeded, Failed}; selecting a file
//! returns to Idle, retry re-enters Submitting with the same selections.
//! Every action takes `&mut self`, so at most one round trip is in flight.

use std::io::Write;

use thiserror::Error;
use tracing::info;

use crate::client::api::{AnalyzeApi, SelectedFile};
use crate::models::upload::Preferences;
use crate::questions::parser::QuestionSet;

pub const NO_FILE_SELECTED_MESSAGE: &str = "Please select a PDF file first.";
pub const EMPTY_RESULT_MESSAGE: &str = "No questions were generated.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Submitting,
    Succeeded(QuestionSet),
    Failed(String),
}

#[derive(Debug, Error)]
#[error("only PDF files can be uploaded (got '{0}')")]
pub struct NotAPdf(pub String);

/// Destination for copied question text.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> std::io::Result<()>;
}

impl<W: Write> Clipboard for W {
    fn set_text(&mut self, text: &str) -> std::io::Result<()> {
        self.write_all(text.as_bytes())?;
        self.flush()
    }
}

pub struct UploadSession<A: AnalyzeApi> {
    api: A,
    file: Option<SelectedFile>,
    pub preferences: Preferences,
    state: SessionState,
    copied: bool,
}

impl<A: AnalyzeApi> UploadSession<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            file: None,
            preferences: Preferences::default(),
            state: SessionState::Idle,
            copied: false,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.file.as_ref()
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Clears any previous result, then keeps the file if it is a PDF.
    /// A rejected file leaves the previous selection in place.
    pub fn select_file(&mut self, file: SelectedFile) -> Result<(), NotAPdf> {
        self.state = SessionState::Idle;
        self.copied = false;

        if !file.is_pdf() {
            return Err(NotAPdf(file.name));
        }
        self.file = Some(file);
        Ok(())
    }

    /// One round trip with the current file and preferences.
    /// Without a file this fails locally and issues no request.
    pub async fn submit(&mut self) -> &SessionState {
        let Some(file) = &self.file else {
            self.state = SessionState::Failed(NO_FILE_SELECTED_MESSAGE.to_string());
            return &self.state;
        };

        self.state = SessionState::Submitting;
        self.copied = false;

        let outcome = self.api.analyze(file, &self.preferences).await;

        self.state = match outcome {
            Ok(raw) => match QuestionSet::from_completion(&raw) {
                Some(set) => {
                    info!(count = set.len(), "Questions received");
                    SessionState::Succeeded(set)
                }
                None => SessionState::Failed(EMPTY_RESULT_MESSAGE.to_string()),
            },
            Err(e) => {
                info!("Analyze request failed: {e}");
                SessionState::Failed(e.display_message())
            }
        };
        &self.state
    }

    /// Repeats the round trip with the same selections; the previous result
    /// is replaced wholesale.
    pub async fn retry(&mut self) -> &SessionState {
        self.submit().await
    }

    /// Copies the current questions as numbered blocks. Returns `false` when
    /// there is nothing to copy.
    pub fn copy(&mut self, clipboard: &mut dyn Clipboard) -> std::io::Result<bool> {
        let SessionState::Succeeded(set) = &self.state else {
            return Ok(false);
        };
        clipboard.set_text(&set.to_clipboard_text())?;
        self.copied = true;
        Ok(true)
    }
}
