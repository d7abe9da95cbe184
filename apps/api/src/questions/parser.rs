//! Question List Parser: splits a raw completion into individual questions.
//!
//! Two states: `Seeking` until the first numbered line, then `Accumulating`
//! the current question. Numbering values are discarded; output order is the
//! order lines were encountered.

use std::sync::LazyLock;

use regex::Regex;

/// `1. `, `12) `: digits, `.` or `)`, then at least one whitespace character.
static NUMBERED_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[.)]\s+").expect("numbered-line pattern is valid"));

const SEPARATOR: &str = "---";

enum ParseState {
    Seeking,
    Accumulating(String),
}

/// Parses a completion into questions.
///
/// Never returns an empty list: when no numbered line is found the result is
/// the whole raw input, unchanged, as a single element.
pub fn parse_questions(raw: &str) -> Vec<String> {
    let mut questions = Vec::new();
    let mut state = ParseState::Seeking;

    let lines = raw
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && *line != SEPARATOR);

    for line in lines {
        if let Some(prefix) = NUMBERED_PREFIX.find(line) {
            if let ParseState::Accumulating(current) = &state {
                push_trimmed(&mut questions, current);
            }
            state = ParseState::Accumulating(line[prefix.end()..].to_string());
        } else if let ParseState::Accumulating(current) = &mut state {
            current.push(' ');
            current.push_str(line);
        }
        // Seeking + unnumbered: preamble, dropped.
    }

    if let ParseState::Accumulating(current) = &state {
        push_trimmed(&mut questions, current);
    }

    if questions.is_empty() {
        return vec![raw.to_string()];
    }
    questions
}

fn push_trimmed(questions: &mut Vec<String>, current: &str) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        questions.push(trimmed.to_string());
    }
}

/// An ordered, non-empty list of generated questions. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet(Vec<String>);

impl QuestionSet {
    /// Parses a completion. A blank completion has nothing to display.
    pub fn from_completion(raw: &str) -> Option<Self> {
        if raw.trim().is_empty() {
            return None;
        }
        Some(QuestionSet(parse_questions(raw)))
    }

    pub fn questions(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `"{index}. {question}"` blocks, 1-based, joined by a blank line.
    pub fn to_clipboard_text(&self) -> String {
        self.0
            .iter()
            .enumerate()
            .map(|(i, q)| format!("{}. {}", i + 1, q))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
