use crate::prompt::{EXPLANATION_MARKER, RELATED_MARKER, SOLUTION_MARKER};

/// A tutor reply split into its three labeled sections.
///
/// The split is best-effort: the model is asked to use the marker lines but
/// is not guaranteed to, so any field may be empty and callers must tolerate
/// that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedReply {
    pub solution: String,
    pub explanation: String,
    pub related: String,
}

impl ParsedReply {
    /// True when no marker was recognized anywhere in the reply.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.solution.is_empty() && self.explanation.is_empty() && self.related.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Solution,
    Explanation,
    Related,
}

/// Split raw model output into solution, explanation, and related questions.
///
/// Lines are classified in order: a line starting with a marker switches the
/// current section and is itself discarded; other lines are appended (with a
/// trailing newline) to the current section, or dropped while no section has
/// been entered yet. A repeated marker appends to the section's earlier
/// content instead of replacing it.
#[must_use]
pub fn parse_reply(text: &str) -> ParsedReply {
    let mut reply = ParsedReply::default();
    let mut current: Option<Section> = None;

    for line in text.lines() {
        if line.starts_with(SOLUTION_MARKER) {
            current = Some(Section::Solution);
            continue;
        }
        if line.starts_with(EXPLANATION_MARKER) {
            current = Some(Section::Explanation);
            continue;
        }
        if line.starts_with(RELATED_MARKER) {
            current = Some(Section::Related);
            continue;
        }

        let Some(section) = current else {
            continue;
        };
        let target = match section {
            Section::Solution => &mut reply.solution,
            Section::Explanation => &mut reply.explanation,
            Section::Related => &mut reply.related,
        };
        target.push_str(line);
        target.push('\n');
    }

    reply
}
