use enquete_types::{QuestionDraft, QuestionType};

use crate::document::{ParsedQuestion, ParsedSurvey, QuestionKind, RANKING_SELECTIONS};

/// Flatten a parsed document into persistence-ready question rows.
///
/// Sections are not a persisted entity: each row remembers its section's
/// title and description, and `order_index` numbers the questions globally
/// in document order, so consumers render one flat, correctly ordered list
/// regardless of section boundaries.
pub fn to_question_drafts(survey: &ParsedSurvey) -> Vec<QuestionDraft> {
    let mut drafts = Vec::with_capacity(survey.question_count());
    let mut order_index = 0;

    for section in &survey.sections {
        for question in &section.questions {
            drafts.push(QuestionDraft {
                question_text: question.text.clone(),
                question_type: question_type(question.kind),
                options: question.options.clone(),
                required: question.required,
                order_index,
                is_multiple_select: is_multiple_select(question.kind),
                max_selections: max_selections(question),
                section_title: section.title.clone(),
                section_description: section.description.clone(),
            });
            order_index += 1;
        }
    }

    drafts
}

/// Map a parsed kind onto the two physical kinds of the persisted schema.
fn question_type(kind: QuestionKind) -> QuestionType {
    match kind {
        QuestionKind::FreeText => QuestionType::Text,
        QuestionKind::SingleChoice | QuestionKind::MultiChoice | QuestionKind::Ranking => {
            QuestionType::MultipleChoice
        }
    }
}

fn is_multiple_select(kind: QuestionKind) -> bool {
    matches!(kind, QuestionKind::MultiChoice | QuestionKind::Ranking)
}

fn max_selections(question: &ParsedQuestion) -> Option<u32> {
    question
        .max_selections
        .or((question.kind == QuestionKind::Ranking).then_some(RANKING_SELECTIONS))
}
