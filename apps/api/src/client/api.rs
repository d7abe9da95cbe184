//! HTTP client for `POST /api/analyze`.

use std::path::Path;

use anyhow::Context;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::models::upload::Preferences;

/// Shown when the request never reached the server or the reply was unreadable.
pub const CONNECTION_FAILED_MESSAGE: &str = "Failed to connect to the server.";
/// Shown when the server reports failure without a message.
pub const UNKNOWN_ERROR_MESSAGE: &str = "Something went wrong.";

const PDF_MIME: &str = "application/pdf";

/// A file picked by the user, held in memory until submission.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl SelectedFile {
    pub async fn from_path(path: &Path) -> anyhow::Result<Self> {
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read '{}'", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "resume.pdf".to_string());
        let content_type = name
            .to_ascii_lowercase()
            .ends_with(".pdf")
            .then(|| PDF_MIME.to_string());

        Ok(SelectedFile {
            name,
            content_type,
            data: Bytes::from(data),
        })
    }

    /// PDF by declared content type, or by extension when none is declared.
    pub fn is_pdf(&self) -> bool {
        match self.content_type.as_deref() {
            Some(mime) => mime == PDF_MIME,
            None => self.name.to_ascii_lowercase().ends_with(".pdf"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a failure; the message is shown verbatim.
    #[error("server error: {0}")]
    Server(String),

    #[error("connection failed: {0}")]
    Connection(#[from] reqwest::Error),
}

impl ClientError {
    /// The text the user sees. Transport detail is never shown.
    pub fn display_message(&self) -> String {
        match self {
            ClientError::Server(message) => message.clone(),
            ClientError::Connection(_) => CONNECTION_FAILED_MESSAGE.to_string(),
        }
    }
}

/// One analyze round trip: file + preferences in, raw completion out.
#[async_trait]
pub trait AnalyzeApi: Send + Sync {
    async fn analyze(
        &self,
        file: &SelectedFile,
        preferences: &Preferences,
    ) -> Result<String, ClientError>;
}

#[derive(Debug, Deserialize)]
struct AnalyzeBody {
    #[serde(default)]
    success: bool,
    questions: Option<String>,
    error: Option<String>,
}

#[derive(Clone)]
pub struct HttpAnalyzeClient {
    client: Client,
    endpoint: String,
}

impl HttpAnalyzeClient {
    pub fn new(server: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: Client::builder().build()?,
            endpoint: format!("{}/api/analyze", server.trim_end_matches('/')),
        })
    }
}

#[async_trait]
impl AnalyzeApi for HttpAnalyzeClient {
    async fn analyze(
        &self,
        file: &SelectedFile,
        preferences: &Preferences,
    ) -> Result<String, ClientError> {
        let part = Part::bytes(file.data.to_vec())
            .file_name(file.name.clone())
            .mime_str(PDF_MIME)?;
        let form = build_form(part, preferences);

        debug!(endpoint = %self.endpoint, file = %file.name, "Submitting résumé");
        let response = self.client.post(&self.endpoint).multipart(form).send().await?;
        let body: AnalyzeBody = response.json().await?;

        interpret(body)
    }
}

fn build_form(file: Part, preferences: &Preferences) -> Form {
    let mut form = Form::new().part("file", file);
    if let Some(role) = &preferences.role {
        form = form.text("role", role.clone());
    }
    if let Some(experience) = &preferences.experience {
        form = form.text("experience", experience.clone());
    }
    if let Some(style) = preferences.question_style {
        form = form.text("questionType", style.as_tag());
    }
    form
}

fn interpret(body: AnalyzeBody) -> Result<String, ClientError> {
    match body {
        AnalyzeBody {
            success: true,
            questions: Some(questions),
            ..
        } => Ok(questions),
        AnalyzeBody { error, .. } => Err(ClientError::Server(
            error.unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_string()),
        )),
    }
}
