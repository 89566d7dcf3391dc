use thiserror::Error;

/// Marker line opening the solution section of a tutor reply.
pub const SOLUTION_MARKER: &str = "---SOLUTION---";
/// Marker line opening the explanation section.
pub const EXPLANATION_MARKER: &str = "---EXPLANATION---";
/// Marker line opening the related-questions section.
pub const RELATED_MARKER: &str = "---RELATED QUESTIONS---";

/// How many follow-up questions the tutor prompt asks for.
pub const RELATED_QUESTION_COUNT: usize = 3;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PromptError {
    #[error("question cannot be empty")]
    Empty,
}

/// Build the tutor prompt around a free-text coding question.
///
/// The question is embedded verbatim; the template asks for commented code,
/// a step-by-step explanation, and [`RELATED_QUESTION_COUNT`] related
/// questions, delimited by the three marker lines so the reply can be split
/// by [`crate::reply::parse_reply`].
///
/// # Errors
///
/// Returns `PromptError::Empty` for empty or whitespace-only input. Callers
/// report this to the user; it must never reach the model client.
pub fn build_tutor_prompt(question: &str) -> Result<String, PromptError> {
    let question = question.trim();
    if question.is_empty() {
        return Err(PromptError::Empty);
    }

    Ok(format!(
        r#"You are an expert coding tutor.

Given the coding question below:

"""{question}"""

Please:
1. Write a clean solution with comments.
2. Explain how it works step-by-step.
3. Generate {RELATED_QUESTION_COUNT} other related coding questions.

Respond in this format:
{SOLUTION_MARKER}
<code>

{EXPLANATION_MARKER}
<text>

{RELATED_MARKER}
1.
2.
3.
"#
    ))
}

/// Build the short prompt used by practice-panel solutions.
///
/// The question title is embedded verbatim; the reply is rendered as-is,
/// without section markers.
#[must_use]
pub fn build_solution_prompt(title: &str) -> String {
    format!("Solve this LeetCode coding problem and explain it clearly:\n\n\"{title}\"")
}
