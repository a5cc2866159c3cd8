use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed option text for free-form "other" choices.
///
/// Imported documents mark an escape-hatch choice with this sentinel. The
/// answering UI shows an extra text field whenever a selected option
/// contains it, and validation requires that field to be filled in.
pub const OTHER_OPTION: &str = "その他";

/// The physical kind of a persisted question.
///
/// Only two kinds exist at the persistence layer: free text and
/// choice-based. Multi-select and ranking behavior is expressed through
/// `is_multiple_select` and `max_selections` on the question row, not
/// through additional kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Free-form text entry.
    Text,

    /// Choice from a fixed option list (single or multi select).
    MultipleChoice,
}

impl QuestionType {
    /// Whether questions of this kind carry an option list.
    pub fn has_options(self) -> bool {
        matches!(self, Self::MultipleChoice)
    }
}

/// A question ready for insertion, before the database assigns identity.
///
/// This is the shape the import pipeline produces: one flat row per
/// question, with the owning section's title and description denormalized
/// onto it. `order_index` spans all sections, so consumers can render the
/// question list in document order without reconstructing sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuestionDraft {
    /// The prompt text shown to the monitor.
    pub question_text: String,

    /// The physical question kind.
    pub question_type: QuestionType,

    /// Options in document order. Empty for text questions.
    #[serde(default)]
    pub options: Vec<String>,

    /// Whether an answer is mandatory.
    pub required: bool,

    /// 0-based position in the flat question list, spanning all sections.
    pub order_index: u32,

    /// Whether several options may be selected at once.
    pub is_multiple_select: bool,

    /// Selection limit: `Some(3)` for ranking questions, `None` for
    /// unrestricted multi-select and everything else.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<u32>,

    /// Title of the section this question came from.
    pub section_title: String,

    /// Description of the section, if the document provided one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_description: Option<String>,
}

/// A persisted question row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: Uuid,

    pub survey_id: Uuid,

    /// The prompt text shown to the monitor.
    pub question_text: String,

    /// The physical question kind.
    pub question_type: QuestionType,

    /// Options in document order. Empty for text questions.
    #[serde(default)]
    pub options: Vec<String>,

    /// Whether an answer is mandatory.
    pub required: bool,

    /// 0-based position in the flat question list, spanning all sections.
    pub order_index: u32,

    pub created_at: DateTime<Utc>,

    /// Whether several options may be selected at once.
    pub is_multiple_select: bool,

    /// Selection limit for ranking questions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selections: Option<u32>,

    /// Title of the section this question came from.
    pub section_title: String,

    /// Description of the section, if the document provided one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_description: Option<String>,
}

impl Question {
    /// Materialize a draft into a row belonging to the given survey.
    pub fn from_draft(survey_id: Uuid, draft: QuestionDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            survey_id,
            question_text: draft.question_text,
            question_type: draft.question_type,
            options: draft.options,
            required: draft.required,
            order_index: draft.order_index,
            created_at: Utc::now(),
            is_multiple_select: draft.is_multiple_select,
            max_selections: draft.max_selections,
            section_title: draft.section_title,
            section_description: draft.section_description,
        }
    }

    /// Whether this question enforces a fixed number of selections.
    pub fn has_selection_limit(&self) -> bool {
        self.max_selections.is_some()
    }
}
