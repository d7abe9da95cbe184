use bytes::Bytes;
/// Steers the mixture of technical vs. experience-based questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuestionStyle {
    Technical,
    Experience,
    #[default]
    Balanced,
}

impl QuestionStyle {
    /// Maps a form value to a style. Unrecognized tags fall back to `Balanced`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim() {
            "technical" => QuestionStyle::Technical,
            "experience" => QuestionStyle::Experience,
            _ => QuestionStyle::Balanced,
        }
    }

    pub fn as_tag(&self) -> &'static str {
        match self {
            QuestionStyle::Technical => "technical",
            QuestionStyle::Experience => "experience",
            QuestionStyle::Balanced => "balanced",
        }
    }
}

/// Optional, independent preference selections. Any combination is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Preferences {
    pub role: Option<String>,
    pub experience: Option<String>,
    pub question_style: Option<QuestionStyle>,
}

impl Preferences {
    /// Builds preferences from raw form values; blank values count as absent.
    pub fn from_form(
        role: Option<String>,
        experience: Option<String>,
        question_type: Option<String>,
    ) -> Self {
        Preferences {
            role: non_blank(role),
            experience: non_blank(experience),
            question_style: non_blank(question_type).map(|t| QuestionStyle::from_tag(&t)),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// One user submission. Request-scoped; discarded after the response.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub document: Bytes,
    pub preferences: Preferences,
}
