use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One answer to one question.
///
/// Exactly one of the `answer_*` fields is populated for an answered
/// question: `answer_text` for text questions, `answer_option` for single
/// choice, `answer_options` for multi-select and ranking. `other_text`
/// carries the free-form supplement when an "other" option was chosen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: Uuid,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_text: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_option: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_options: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub other_text: Option<String>,
}

impl Answer {
    fn empty(question_id: Uuid) -> Self {
        Self {
            question_id,
            answer_text: None,
            answer_option: None,
            answer_options: None,
            other_text: None,
        }
    }

    /// A free-text answer.
    pub fn text(question_id: Uuid, text: impl Into<String>) -> Self {
        Self {
            answer_text: Some(text.into()),
            ..Self::empty(question_id)
        }
    }

    /// A single-choice answer.
    pub fn option(question_id: Uuid, option: impl Into<String>) -> Self {
        Self {
            answer_option: Some(option.into()),
            ..Self::empty(question_id)
        }
    }

    /// A multi-select or ranking answer.
    pub fn options(question_id: Uuid, options: Vec<String>) -> Self {
        Self {
            answer_options: Some(options),
            ..Self::empty(question_id)
        }
    }

    /// Attach the free-form supplement for an "other" choice.
    pub fn with_other_text(mut self, text: impl Into<String>) -> Self {
        self.other_text = Some(text.into());
        self
    }

    /// Whether any answer value is present.
    pub fn has_value(&self) -> bool {
        self.answer_text.is_some()
            || self.answer_option.is_some()
            || self.answer_options.is_some()
    }

    /// Number of selected options (zero for non-selection answers).
    pub fn selection_count(&self) -> usize {
        self.answer_options.as_ref().map_or(0, Vec::len)
    }
}

/// Who answered, denormalized onto the response for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Respondent {
    pub name: String,
    pub email: String,
}

/// A completed survey response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: Uuid,

    pub survey_id: Uuid,

    /// The monitor who answered.
    pub monitor_id: Uuid,

    pub answers: Vec<Answer>,

    pub completed_at: DateTime<Utc>,

    /// Points credited to the monitor for this response.
    pub points_earned: u32,

    /// Respondent identity, when the caller joined it in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<Respondent>,
}

impl SurveyResponse {
    /// Create a response with the given answers, completed now.
    pub fn new(survey_id: Uuid, monitor_id: Uuid, answers: Vec<Answer>) -> Self {
        Self {
            id: Uuid::new_v4(),
            survey_id,
            monitor_id,
            answers,
            completed_at: Utc::now(),
            points_earned: 0,
            monitor: None,
        }
    }

    /// Attach respondent identity for export.
    pub fn with_monitor(mut self, name: impl Into<String>, email: impl Into<String>) -> Self {
        self.monitor = Some(Respondent {
            name: name.into(),
            email: email.into(),
        });
        self
    }

    /// Look up the answer to a question, if any.
    pub fn answer_for(&self, question_id: Uuid) -> Option<&Answer> {
        self.answers
            .iter()
            .find(|answer| answer.question_id == question_id)
    }
}
