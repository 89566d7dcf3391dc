use prep_core::reply::ParsedReply;

use crate::vm::markdown::markdown_to_html;

/// Display shape for a parsed tutor answer.
///
/// The solution is kept verbatim for a code block; the other sections are
/// pre-rendered to sanitized HTML. Any field may be blank when the model
/// ignored the requested format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TutorAnswerVm {
    pub solution: String,
    pub explanation_html: String,
    pub related_html: String,
}

#[must_use]
pub fn map_tutor_answer(reply: &ParsedReply) -> TutorAnswerVm {
    TutorAnswerVm {
        solution: reply.solution.trim_end().to_string(),
        explanation_html: markdown_to_html(&reply.explanation),
        related_html: markdown_to_html(&reply.related),
    }
}
