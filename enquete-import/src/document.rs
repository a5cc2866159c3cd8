/// Title used when the document never provides a top-level heading.
pub const DEFAULT_TITLE: &str = "インポートされたアンケート";

/// Description used when no free-standing line precedes the sections.
pub const DEFAULT_DESCRIPTION: &str = "ファイルからインポートされたアンケートです";

/// Title of the section synthesized when questions appear before any heading.
pub const DEFAULT_SECTION_TITLE: &str = "メインセクション";

/// Number of selections a ranking question asks for.
pub const RANKING_SELECTIONS: u32 = 3;

/// The kind of a parsed question, before persistence mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionKind {
    /// Free-form text entry (`##### ` marker).
    FreeText,

    /// Choose one option (`### ` marker).
    SingleChoice,

    /// Choose any number of options (`#### ` marker).
    MultiChoice,

    /// Pick exactly [`RANKING_SELECTIONS`] options (`$$$1-3` marker).
    Ranking,
}

impl QuestionKind {
    /// Whether option lines following the marker belong to this question.
    pub fn collects_options(self) -> bool {
        !matches!(self, Self::FreeText)
    }
}

/// A question as read from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuestion {
    /// The prompt text after the marker.
    pub text: String,

    /// The question kind, derived from the marker.
    pub kind: QuestionKind,

    /// Options in document order. Duplicates are kept as written.
    pub options: Vec<String>,

    /// Always true: the grammar has no syntax for optional questions.
    pub required: bool,

    /// Fixed selection count for ranking questions.
    pub max_selections: Option<u32>,
}

impl ParsedQuestion {
    /// Create a question of the given kind with no options yet.
    pub fn new(text: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            text: text.into(),
            kind,
            options: Vec::new(),
            required: true,
            max_selections: (kind == QuestionKind::Ranking).then_some(RANKING_SELECTIONS),
        }
    }
}

/// A titled group of questions; the UI pages on section boundaries.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSection {
    pub title: String,

    /// Set by a `## ` line inside the section.
    pub description: Option<String>,

    /// Questions in document order.
    pub questions: Vec<ParsedQuestion>,
}

impl ParsedSection {
    /// Create an empty section with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            questions: Vec::new(),
        }
    }
}

/// A parsed survey document: title, description, and ordered sections.
///
/// Produced by [`parse`](crate::parse); sections and questions appear in
/// document order and are never reordered.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedSurvey {
    pub title: String,

    pub description: String,

    pub sections: Vec<ParsedSection>,
}

impl ParsedSurvey {
    /// Total number of questions across all sections.
    pub fn question_count(&self) -> usize {
        self.sections
            .iter()
            .map(|section| section.questions.len())
            .sum()
    }

    /// Whether the document produced no questions at all.
    pub fn is_empty(&self) -> bool {
        self.question_count() == 0
    }
}
