//! # enquete-import
//!
//! Markdown survey import for the enquete platform.
//!
//! Clients author surveys as structured plain-text documents; this crate
//! turns such a document into the flat question rows the platform persists.
//! The pipeline has two pure steps:
//!
//! 1. [`parse`] - a single forward pass over the lines of the document,
//!    producing a [`ParsedSurvey`] of sections and questions
//! 2. [`to_question_drafts`] - flattens the sections into
//!    `enquete_types::QuestionDraft` rows with a global order index
//!
//! [`ImportPreview`] bundles both steps for import surfaces that re-render
//! a live preview on every edit.
//!
//! ## Document grammar
//!
//! | Line prefix | Meaning |
//! |---|---|
//! | `# text` (first) | document title |
//! | `# text` (later) | new section titled `text` |
//! | `## text` | description of the open section |
//! | `### text` | single-choice question |
//! | `#### text` | multi-choice question |
//! | `##### text` | free-text question |
//! | `$$$1-3 text` | ranking question (pick exactly 3) |
//! | `□ text` | option for the open question |
//!
//! A bare line containing `その他` while options are being collected appends
//! the fixed "other" option. The first free-standing line before any section
//! becomes the document description. Everything else is ignored; the parser
//! never fails.
//!
//! ## Usage
//!
//! ```
//! use enquete_import::{parse, to_question_drafts};
//!
//! let document = "# 利用調査\n### 利用頻度は？\n□ 毎日\n□ 週に1回";
//! let parsed = parse(document);
//! let drafts = to_question_drafts(&parsed);
//!
//! assert_eq!(parsed.title, "利用調査");
//! assert_eq!(drafts.len(), 1);
//! assert_eq!(drafts[0].options, ["毎日", "週に1回"]);
//! ```

mod document;
pub use document::{
    DEFAULT_DESCRIPTION, DEFAULT_SECTION_TITLE, DEFAULT_TITLE, ParsedQuestion, ParsedSection,
    ParsedSurvey, QuestionKind, RANKING_SELECTIONS,
};

mod parser;
pub use parser::parse;

mod convert;
pub use convert::to_question_drafts;

mod preview;
pub use preview::ImportPreview;
