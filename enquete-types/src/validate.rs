use uuid::Uuid;

use crate::{Answer, OTHER_OPTION, Question, QuestionType, Survey};

/// Error type for answer validation.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    /// A required question has no usable answer.
    #[error("question {question_id} requires an answer")]
    Missing { question_id: Uuid },

    /// A multi-select question has no selections.
    #[error("question {question_id} requires at least one selection")]
    NoSelection { question_id: Uuid },

    /// A ranking question has the wrong number of selections.
    #[error("question {question_id} requires exactly {required} selections, got {actual}")]
    SelectionCount {
        question_id: Uuid,
        required: u32,
        actual: usize,
    },

    /// An "other" option was chosen without its free-text supplement.
    #[error("question {question_id} needs free text for the chosen その他 option")]
    OtherTextMissing { question_id: Uuid },
}

impl AnswerError {
    /// The question the error refers to.
    pub fn question_id(&self) -> Uuid {
        match self {
            Self::Missing { question_id }
            | Self::NoSelection { question_id }
            | Self::SelectionCount { question_id, .. }
            | Self::OtherTextMissing { question_id } => *question_id,
        }
    }
}

/// Check one answer against its question.
///
/// Optional questions always pass. For required questions: a chosen option
/// containing the "other" sentinel needs `other_text` filled in; a question
/// with a selection limit needs exactly that many selections; an unlimited
/// multi-select needs at least one; anything else needs some answer value.
pub fn validate_answer(question: &Question, answer: Option<&Answer>) -> Result<(), AnswerError> {
    if !question.required {
        return Ok(());
    }
    let question_id = question.id;
    let Some(answer) = answer else {
        return Err(AnswerError::Missing { question_id });
    };

    if question.question_type == QuestionType::MultipleChoice
        && picked_other(question, answer)
        && answer.other_text.as_deref().is_none_or(str::is_empty)
    {
        return Err(AnswerError::OtherTextMissing { question_id });
    }

    if let Some(required) = question.max_selections {
        let actual = answer.selection_count();
        if actual != required as usize {
            return Err(AnswerError::SelectionCount {
                question_id,
                required,
                actual,
            });
        }
        return Ok(());
    }

    if question.question_type == QuestionType::MultipleChoice && question.is_multiple_select {
        if answer.selection_count() == 0 {
            return Err(AnswerError::NoSelection { question_id });
        }
        return Ok(());
    }

    if answer.answer_text.is_some() || answer.answer_option.is_some() {
        Ok(())
    } else {
        Err(AnswerError::Missing { question_id })
    }
}

/// Check a full answer set against a survey, in question order.
///
/// Returns the first violation encountered.
pub fn validate_response(survey: &Survey, answers: &[Answer]) -> Result<(), AnswerError> {
    for question in survey.sorted_questions() {
        let answer = answers
            .iter()
            .find(|answer| answer.question_id == question.id);
        validate_answer(question, answer)?;
    }
    Ok(())
}

fn picked_other(question: &Question, answer: &Answer) -> bool {
    if question.is_multiple_select {
        answer
            .answer_options
            .as_deref()
            .is_some_and(|options| options.iter().any(|option| option.contains(OTHER_OPTION)))
    } else {
        answer
            .answer_option
            .as_deref()
            .is_some_and(|option| option.contains(OTHER_OPTION))
    }
}
