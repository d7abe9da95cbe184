//! Prompt Builder: composes the single instruction sent to the generation service.
//!
//! Pure: identical inputs always yield an identical prompt. The résumé text is
//! appended verbatim and no substitution pass runs over it afterwards.

use crate::models::upload::{Preferences, QuestionStyle};

/// Number of questions requested from the model.
pub const QUESTION_COUNT: usize = 5;

const CRITERIA: &str = "Write the questions according to these criteria:
1. Concrete questions about the experience and projects listed in the résumé
2. In-depth questions about the candidate's technical stack
3. Questions that reveal the candidate's problem-solving ability";

const TECHNICAL_CLAUSE: &str = "Question style: technical\n\
    Lean toward questions about the technology stack, system architecture and algorithms.";

const EXPERIENCE_CLAUSE: &str = "Question style: experience\n\
    Lean toward questions about the situation, the candidate's role and the outcome \
    of the projects listed in the résumé.";

const BALANCED_CLAUSE: &str = "Question style: balanced\n\
    Ask an even mix of technical questions and experience-based questions.";

const RESUME_HEADER: &str = "Résumé:";

/// Builds the generation prompt.
///
/// Order: base instruction, role clause, experience clause, style clause,
/// criteria, résumé text, closing instruction.
pub fn build_prompt(resume_text: &str, preferences: &Preferences) -> String {
    let mut prompt = String::with_capacity(resume_text.len() + 1024);

    prompt.push_str(&base_instruction());
    prompt.push('\n');

    if let Some(role) = &preferences.role {
        prompt.push('\n');
        prompt.push_str(&role_clause(role));
        prompt.push('\n');
    }

    if let Some(experience) = &preferences.experience {
        prompt.push('\n');
        prompt.push_str(&experience_clause(experience));
        prompt.push('\n');
    }

    if let Some(style) = preferences.question_style {
        prompt.push('\n');
        prompt.push_str(style_clause(style));
        prompt.push('\n');
    }

    prompt.push('\n');
    prompt.push_str(CRITERIA);
    prompt.push_str("\n\n");
    prompt.push_str(RESUME_HEADER);
    prompt.push('\n');
    prompt.push_str(resume_text);
    prompt.push_str("\n\n");
    prompt.push_str(&closing_instruction());
    prompt.push('\n');

    prompt
}

fn base_instruction() -> String {
    format!(
        "The following is a candidate's résumé. \
        Based on this résumé, write {QUESTION_COUNT} interview questions."
    )
}

fn closing_instruction() -> String {
    format!("Write the {QUESTION_COUNT} interview questions as a numbered list.")
}

fn role_clause(role: &str) -> String {
    format!(
        "Target role: {role}\n\
        Focus the questions on the competencies and skills that matter most for this role."
    )
}

fn experience_clause(experience: &str) -> String {
    format!(
        "Experience level: {experience}\n\
        Calibrate the difficulty and depth of the questions to this experience level."
    )
}

fn style_clause(style: QuestionStyle) -> &'static str {
    match style {
        QuestionStyle::Technical => TECHNICAL_CLAUSE,
        QuestionStyle::Experience => EXPERIENCE_CLAUSE,
        QuestionStyle::Balanced => BALANCED_CLAUSE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\nBuilt a Rust ingestion pipeline handling 2M events/day.";

    fn all_prefs() -> Preferences {
        Preferences {
            role: Some("Backend Engineer".to_string()),
            experience: Some("5 years".to_string()),
            question_style: Some(QuestionStyle::Technical),
        }
    }

    #[test]
    fn test_base_prompt_has_no_optional_clauses() {
        let prompt = build_prompt(RESUME, &Preferences::default());
        assert!(prompt.starts_with(&base_instruction()));
        assert!(prompt.contains(CRITERIA));
        assert!(!prompt.contains("Target role:"));
        assert!(!prompt.contains("Experience level:"));
        assert!(!prompt.contains("Question style:"));
        assert!(prompt.trim_end().ends_with(&closing_instruction()));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_prompt(RESUME, &all_prefs()), build_prompt(RESUME, &all_prefs()));
    }

    #[test]
    fn test_clauses_appear_in_fixed_order() {
        let prompt = build_prompt(RESUME, &all_prefs());
        let role = prompt.find("Target role: Backend Engineer").unwrap();
        let experience = prompt.find("Experience level: 5 years").unwrap();
        let style = prompt.find(TECHNICAL_CLAUSE).unwrap();
        let resume = prompt.find(RESUME).unwrap();
        let closing = prompt.rfind(&closing_instruction()).unwrap();
        assert!(role < experience);
        assert!(experience < style);
        assert!(style < resume);
        assert!(resume < closing);
    }

    #[test]
    fn test_each_style_selects_its_clause() {
        for (style, clause) in [
            (QuestionStyle::Technical, TECHNICAL_CLAUSE),
            (QuestionStyle::Experience, EXPERIENCE_CLAUSE),
            (QuestionStyle::Balanced, BALANCED_CLAUSE),
        ] {
            let prefs = Preferences {
                question_style: Some(style),
                ..Preferences::default()
            };
            assert!(build_prompt(RESUME, &prefs).contains(clause));
        }
    }

    #[test]
    fn test_unrecognized_style_tag_gets_balanced_clause() {
        let prefs = Preferences::from_form(None, None, Some("behavioral".to_string()));
        let prompt = build_prompt(RESUME, &prefs);
        assert!(prompt.contains(BALANCED_CLAUSE));
    }

    #[test]
    fn test_resume_text_is_embedded_verbatim() {
        let tricky = "1. Not a question\n---\n{role}\n  indented  \n2) also text\n";
        let prompt = build_prompt(tricky, &all_prefs());
        assert!(prompt.contains(&format!("{RESUME_HEADER}\n{tricky}\n\n")));
    }

    #[test]
    fn test_preference_values_cannot_touch_resume_text() {
        let prefs = Preferences {
            role: Some("{resume}".to_string()),
            ..Preferences::default()
        };
        let prompt = build_prompt(RESUME, &prefs);
        assert_eq!(prompt.matches(RESUME).count(), 1);
        assert!(prompt.contains("Target role: {resume}"));
    }

    #[test]
    fn test_sections_are_separated_by_one_blank_line() {
        for prefs in [Preferences::default(), all_prefs()] {
            let prompt = build_prompt(RESUME, &prefs);
            assert!(!prompt.contains("\n\n\n"));
        }
    }

    #[test]
    fn test_base_instruction_requests_five_questions() {
        assert!(base_instruction().contains("write 5 interview questions"));
    }
}
