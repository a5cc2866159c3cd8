use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Question, QuestionDraft};

/// Lifecycle status of a survey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurveyStatus {
    /// Being authored; not visible to monitors.
    #[default]
    Draft,

    /// Published and accepting responses.
    Active,

    /// Closed; responses remain available for export.
    Completed,
}

/// A survey row with its question set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub id: Uuid,

    /// The client (business user) who owns this survey.
    pub client_id: Uuid,

    pub title: String,

    pub description: String,

    pub status: SurveyStatus,

    /// Points a monitor earns for completing the survey.
    pub points_reward: u32,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// The question set. Order of this vector is not significant;
    /// `order_index` is.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Survey {
    /// Create a new draft survey with no questions.
    pub fn new(client_id: Uuid, title: impl Into<String>, description: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            client_id,
            title: title.into(),
            description: description.into(),
            status: SurveyStatus::Draft,
            points_reward: 0,
            created_at: now,
            updated_at: now,
            questions: Vec::new(),
        }
    }

    /// Set the completion reward.
    pub fn with_points_reward(mut self, points: u32) -> Self {
        self.points_reward = points;
        self
    }

    /// Replace the question set with freshly imported drafts.
    ///
    /// Import follows delete-all-then-reinsert semantics: the previous
    /// question set is discarded wholesale and every draft becomes a new
    /// row.
    pub fn replace_questions(&mut self, drafts: Vec<QuestionDraft>) {
        self.questions = drafts
            .into_iter()
            .map(|draft| Question::from_draft(self.id, draft))
            .collect();
        self.updated_at = Utc::now();
    }

    /// Questions in display order (ascending `order_index`).
    pub fn sorted_questions(&self) -> Vec<&Question> {
        let mut questions: Vec<&Question> = self.questions.iter().collect();
        questions.sort_by_key(|question| question.order_index);
        questions
    }

    /// Number of questions in the survey.
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }
}
