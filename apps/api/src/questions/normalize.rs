//! Text normalization: collapses whatever the extractor produced into one string.

#![allow(dead_code)]

use std::fmt;

use crate::errors::AppError;

/// Raw output of a text extraction step.
pub enum ExtractedText {
    /// The whole document as one string.
    Whole(String),
    /// One string per page, in page order.
    Pages(Vec<String>),
    /// Anything else; normalized through its `Display` form.
    Opaque(Box<dyn fmt::Display + Send + Sync>),
}

impl fmt::Debug for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractedText::Whole(text) => f.debug_tuple("Whole").field(&text.len()).finish(),
            ExtractedText::Pages(pages) => f.debug_tuple("Pages").field(&pages.len()).finish(),
            ExtractedText::Opaque(_) => f.write_str("Opaque"),
        }
    }
}

impl From<String> for ExtractedText {
    fn from(text: String) -> Self {
        ExtractedText::Whole(text)
    }
}

impl From<Vec<String>> for ExtractedText {
    fn from(pages: Vec<String>) -> Self {
        ExtractedText::Pages(pages)
    }
}

/// Produces one string: pages are joined with `\n` in order, opaque values
/// use their string representation. The text itself is not trimmed.
pub fn normalize(extracted: ExtractedText) -> String {
    match extracted {
        ExtractedText::Whole(text) => text,
        ExtractedText::Pages(pages) => pages.join("\n"),
        ExtractedText::Opaque(value) => value.to_string(),
    }
}

/// Rejects text that is empty once surrounding whitespace is ignored.
/// Must run before any generation call.
pub fn ensure_extractable(text: String) -> Result<String, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::NoExtractableText(format!(
            "extracted {} bytes of whitespace",
            text.len()
        )));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_text_passes_through_untouched() {
        let text = "  Jane Doe\nRust engineer  ".to_string();
        assert_eq!(normalize(ExtractedText::from(text.clone())), text);
    }

    #[test]
    fn test_pages_join_with_newline_in_order() {
        let pages = vec!["page one".to_string(), "page two".to_string(), "three".to_string()];
        assert_eq!(normalize(pages.into()), "page one\npage two\nthree");
    }

    #[test]
    fn test_empty_page_list_normalizes_to_empty() {
        assert_eq!(normalize(ExtractedText::Pages(Vec::new())), "");
    }

    #[test]
    fn test_opaque_value_uses_display() {
        assert_eq!(normalize(ExtractedText::Opaque(Box::new(42))), "42");
    }

    #[test]
    fn test_whitespace_only_is_not_extractable() {
        let err = ensure_extractable(" \n\t \n".to_string()).unwrap_err();
        assert!(matches!(err, AppError::NoExtractableText(_)));
        assert!(matches!(
            ensure_extractable(String::new()),
            Err(AppError::NoExtractableText(_))
        ));
    }

    #[test]
    fn test_extractable_text_is_returned_unchanged() {
        let text = "\n  Experience: 3 years  \n".to_string();
        assert_eq!(ensure_extractable(text.clone()).unwrap(), text);
    }

    #[test]
    fn test_blank_pages_are_not_extractable() {
        let joined = normalize(vec!["  ".to_string(), "\n".to_string()].into());
        assert!(ensure_extractable(joined).is_err());
    }
}
