use enquete_types::QuestionDraft;

use crate::{parse, to_question_drafts};

/// The summary an import surface shows before the user confirms.
///
/// Built by running the full parse-then-normalize pipeline; cheap enough to
/// rebuild on every edit of the input text.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportPreview {
    pub title: String,

    pub description: String,

    pub section_count: usize,

    pub question_count: usize,

    /// The rows that would be inserted on confirmation.
    pub questions: Vec<QuestionDraft>,
}

impl ImportPreview {
    /// Parse and normalize a document in one step.
    ///
    /// Identical input yields identical output, so callers can re-run this
    /// on every change without staleness concerns.
    pub fn from_markdown(markdown: &str) -> Self {
        let parsed = parse(markdown);
        let questions = to_question_drafts(&parsed);
        Self {
            section_count: parsed.sections.len(),
            question_count: questions.len(),
            title: parsed.title,
            description: parsed.description,
            questions,
        }
    }

    /// Whether there is nothing to import.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::DEFAULT_TITLE;

    #[test]
    fn preview_counts_sections_and_questions() {
        let preview =
            ImportPreview::from_markdown("# t\n# 第一部\n### 質問\n□ A\n# 第二部\n##### 記述");

        assert_eq!(preview.title, "t");
        assert_eq!(preview.section_count, 2);
        assert_eq!(preview.question_count, 2);
        assert!(!preview.is_empty());
    }

    #[test]
    fn preview_of_empty_input_is_empty() {
        let preview = ImportPreview::from_markdown("");

        assert_eq!(preview.title, DEFAULT_TITLE);
        assert_eq!(preview.section_count, 0);
        assert!(preview.is_empty());
    }

    #[test]
    fn preview_is_deterministic() {
        let text = "# t\n$$$1-3 順位\n□ A\n□ B\n□ C";
        assert_eq!(
            ImportPreview::from_markdown(text),
            ImportPreview::from_markdown(text)
        );
    }
}
