use prep_core::model::PracticeQuestion;

/// Display shape for one sampled practice question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionItemVm {
    pub id: u64,
    pub title: String,
    pub link: String,
}

#[must_use]
pub fn map_question_item(question: &PracticeQuestion) -> QuestionItemVm {
    QuestionItemVm {
        id: question.id().value(),
        title: question.title().to_string(),
        link: question.link().to_string(),
    }
}
