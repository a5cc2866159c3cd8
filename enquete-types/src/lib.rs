//! Core types for the enquete survey platform.
//!
//! This crate provides the persisted schema shared by the import pipeline
//! and the export backends:
//! - `Survey` and `SurveyStatus` - the survey row and its lifecycle
//! - `Question`, `QuestionDraft`, and `QuestionType` - the flat question schema
//! - `Answer`, `SurveyResponse`, and `Respondent` - collected responses
//! - `validate_answer` / `validate_response` - answer validation rules
//!
//! Everything here is plain data: rows as they cross the database boundary,
//! serializable with serde. The import logic that produces question rows
//! lives in `enquete-import`; document generation lives in the export crates.

mod question;
pub use question::{OTHER_OPTION, Question, QuestionDraft, QuestionType};

mod survey;
pub use survey::{Survey, SurveyStatus};

mod response;
pub use response::{Answer, Respondent, SurveyResponse};

mod validate;
pub use validate::{AnswerError, validate_answer, validate_response};
