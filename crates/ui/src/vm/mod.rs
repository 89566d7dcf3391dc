mod answer_vm;
mod markdown;
mod question_vm;

pub use answer_vm::{TutorAnswerVm, map_tutor_answer};
pub use markdown::{markdown_to_html, sanitize_html};
pub use question_vm::{QuestionItemVm, map_question_item};
