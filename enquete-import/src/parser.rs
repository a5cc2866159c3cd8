use enquete_types::OTHER_OPTION;
use tracing::{debug, trace};

use crate::document::{
    DEFAULT_DESCRIPTION, DEFAULT_SECTION_TITLE, DEFAULT_TITLE, ParsedQuestion, ParsedSection,
    ParsedSurvey, QuestionKind,
};

/// Top-level heading: the first one is the document title, the rest open
/// sections.
const HEADING: &str = "# ";
/// Sets the description of the currently open section.
const SECTION_DESCRIPTION: &str = "## ";
/// Opens a single-choice question.
const SINGLE_CHOICE: &str = "### ";
/// Opens a multi-choice question.
const MULTI_CHOICE: &str = "#### ";
/// Opens a free-text question.
const FREE_TEXT: &str = "##### ";
/// Opens a ranking question; must be followed by whitespace and the prompt.
const RANKING: &str = "$$$1-3";
/// Appends an option to the question currently collecting options.
const OPTION: &str = "□ ";

/// Parse a survey document into sections and questions.
///
/// The input is processed as a sequence of trimmed, non-empty lines; blank
/// lines carry no meaning. Each line is matched against the marker prefixes
/// above, first match wins, and anything unrecognized either becomes the
/// document description (first free-standing line before any section) or is
/// ignored. The function is total: malformed input degrades to a smaller
/// result, never an error.
pub fn parse(markdown: &str) -> ParsedSurvey {
    let mut parser = Parser::default();
    for line in markdown.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        parser.line(line);
    }
    parser.finish()
}

/// Mutable cursors for the single forward pass over the document.
///
/// `current_question` and `current_section` hold the constructs still being
/// filled in; they are appended to their parent the moment a new construct
/// begins or the input ends. `collecting_options` is true while option
/// lines belong to `current_question`.
#[derive(Default)]
struct Parser {
    title: String,
    description: String,
    sections: Vec<ParsedSection>,
    current_section: Option<ParsedSection>,
    current_question: Option<ParsedQuestion>,
    collecting_options: bool,
}

impl Parser {
    fn line(&mut self, line: &str) {
        trace!(line, "classify");

        if let Some(rest) = line.strip_prefix(HEADING) {
            // The first top-level heading is the document title, consumed
            // once; every later one starts a section.
            if self.title.is_empty() {
                self.title = rest.trim().to_string();
                debug!(title = %self.title, "document title");
            } else {
                self.start_section(rest.trim());
            }
            return;
        }

        if let Some(rest) = line.strip_prefix(SECTION_DESCRIPTION) {
            // Only meaningful inside a section; ignored otherwise.
            if self.current_section.is_some() {
                self.set_section_description(rest.trim());
            }
            return;
        }

        if let Some(text) = ranking_text(line) {
            self.open_question(text, QuestionKind::Ranking);
            return;
        }

        if let Some(rest) = line.strip_prefix(FREE_TEXT) {
            self.open_question(rest.trim(), QuestionKind::FreeText);
            return;
        }

        if let Some(rest) = line.strip_prefix(MULTI_CHOICE) {
            self.open_question(rest.trim(), QuestionKind::MultiChoice);
            return;
        }

        if let Some(rest) = line.strip_prefix(SINGLE_CHOICE) {
            self.open_question(rest.trim(), QuestionKind::SingleChoice);
            return;
        }

        if let Some(rest) = line.strip_prefix(OPTION) {
            if self.collecting_options {
                if let Some(question) = &mut self.current_question {
                    question.options.push(rest.trim().to_string());
                }
            }
            return;
        }

        // A bare line mentioning the "other" keyword while options are being
        // collected appends the fixed sentinel option. Substring matching is
        // deliberate, quirks included.
        if self.collecting_options && line.contains(OTHER_OPTION) {
            if let Some(question) = &mut self.current_question {
                question.options.push(OTHER_OPTION.to_string());
            }
            return;
        }

        // First free-standing line before any section becomes the document
        // description.
        if self.description.is_empty()
            && self.current_section.is_none()
            && !line.starts_with('#')
            && !line.starts_with('□')
        {
            self.description = line.to_string();
            debug!(description = %self.description, "document description");
        }
    }

    fn start_section(&mut self, title: &str) {
        self.finalize_question();
        if let Some(section) = self.current_section.take() {
            self.sections.push(section);
        }
        debug!(title, "section opened");
        self.current_section = Some(ParsedSection::new(title));
        self.collecting_options = false;
    }

    fn set_section_description(&mut self, description: &str) {
        self.finalize_question();
        if let Some(section) = &mut self.current_section {
            section.description = Some(description.to_string());
        }
        self.collecting_options = false;
    }

    fn open_question(&mut self, text: &str, kind: QuestionKind) {
        self.finalize_question();
        if self.current_section.is_none() {
            // Content before any heading still needs a home.
            self.current_section = Some(ParsedSection::new(DEFAULT_SECTION_TITLE));
        }
        debug!(?kind, text, "question opened");
        self.current_question = Some(ParsedQuestion::new(text, kind));
        self.collecting_options = kind.collects_options();
    }

    /// Append the open question to the open section, if both exist.
    fn finalize_question(&mut self) {
        if let Some(question) = self.current_question.take() {
            if let Some(section) = &mut self.current_section {
                section.questions.push(question);
            }
        }
    }

    fn finish(mut self) -> ParsedSurvey {
        if let Some(question) = self.current_question.take() {
            match &mut self.current_section {
                Some(section) => section.questions.push(question),
                // No heading ever opened a section; synthesize one so the
                // question is not lost.
                None => {
                    let mut section = ParsedSection::new(DEFAULT_SECTION_TITLE);
                    section.questions.push(question);
                    self.current_section = Some(section);
                }
            }
        }
        if let Some(section) = self.current_section.take() {
            self.sections.push(section);
        }

        let survey = ParsedSurvey {
            title: if self.title.is_empty() {
                DEFAULT_TITLE.to_string()
            } else {
                self.title
            },
            description: if self.description.is_empty() {
                DEFAULT_DESCRIPTION.to_string()
            } else {
                self.description
            },
            sections: self.sections,
        };
        debug!(
            sections = survey.sections.len(),
            questions = survey.question_count(),
            "document parsed"
        );
        survey
    }
}

/// Match the ranking marker: `$$$1-3` followed by at least one whitespace
/// character, returning the prompt text after it.
fn ranking_text(line: &str) -> Option<&str> {
    let rest = line.strip_prefix(RANKING)?;
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim_start())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::RANKING_SELECTIONS;

    #[test]
    fn first_heading_is_the_title_not_a_section() {
        let survey = parse("# タイトル\n### 質問\n□ A");

        assert_eq!(survey.title, "タイトル");
        assert_eq!(survey.sections.len(), 1);
        assert_eq!(survey.sections[0].title, DEFAULT_SECTION_TITLE);
    }

    #[test]
    fn later_headings_open_sections() {
        let survey = parse("# タイトル\n# 第一部\n### 質問\n□ A\n# 第二部");

        assert_eq!(survey.sections.len(), 2);
        assert_eq!(survey.sections[0].title, "第一部");
        assert_eq!(survey.sections[0].questions.len(), 1);
        assert_eq!(survey.sections[1].title, "第二部");
        assert!(survey.sections[1].questions.is_empty());
    }

    #[test]
    fn free_line_before_sections_becomes_description() {
        let survey = parse("# タイトル\nこれは説明文です\n# 第一部");

        assert_eq!(survey.description, "これは説明文です");
        // only the first free line counts
        let survey = parse("一行目\n二行目");
        assert_eq!(survey.description, "一行目");
    }

    #[test]
    fn section_description_closes_the_open_question() {
        let survey = parse("# t\n# 第一部\n### 質問\n□ A\n## この部についての説明\n□ B");

        let section = &survey.sections[0];
        assert_eq!(section.description.as_deref(), Some("この部についての説明"));
        assert_eq!(section.questions.len(), 1);
        // option collection stopped at the description line
        assert_eq!(section.questions[0].options, ["A"]);
    }

    #[test]
    fn section_description_without_section_is_ignored() {
        let survey = parse("## 宙に浮いた説明\n### 質問");

        assert_eq!(survey.description, DEFAULT_DESCRIPTION);
        assert_eq!(survey.sections.len(), 1);
        assert_eq!(survey.sections[0].title, DEFAULT_SECTION_TITLE);
    }

    #[test]
    fn question_kinds_by_marker() {
        let survey = parse("### 単数\n#### 複数\n##### 記述\n$$$1-3 順位");

        let questions = &survey.sections[0].questions;
        let kinds: Vec<QuestionKind> = questions.iter().map(|q| q.kind).collect();
        assert_eq!(
            kinds,
            [
                QuestionKind::SingleChoice,
                QuestionKind::MultiChoice,
                QuestionKind::FreeText,
                QuestionKind::Ranking,
            ]
        );
    }

    #[test]
    fn ranking_question_fixes_max_selections() {
        let survey = parse("$$$1-3 上位3つを選んでください\n□ A\n□ B");

        let question = &survey.sections[0].questions[0];
        assert_eq!(question.kind, QuestionKind::Ranking);
        assert_eq!(question.max_selections, Some(RANKING_SELECTIONS));
        // fewer options than selections is still accepted
        assert_eq!(question.options.len(), 2);
    }

    #[test]
    fn ranking_marker_requires_whitespace() {
        let survey = parse("$$$1-3x ではない行");

        assert!(survey.sections.is_empty());
        // it is not a marker, so it became the description
        assert_eq!(survey.description, "$$$1-3x ではない行");
    }

    #[test]
    fn option_order_and_duplicates_preserved() {
        let survey = parse("### 質問\n□ B\n□ a\n□ B\n□ A");

        let question = &survey.sections[0].questions[0];
        assert_eq!(question.options, ["B", "a", "B", "A"]);
    }

    #[test]
    fn options_outside_collection_are_ignored() {
        let survey = parse("##### 記述質問\n□ 無視される選択肢");

        let question = &survey.sections[0].questions[0];
        assert!(question.options.is_empty());
    }

    #[test]
    fn other_keyword_line_appends_sentinel() {
        let survey = parse("#### 質問\n□ A\nその他（自由にお書きください）");

        let question = &survey.sections[0].questions[0];
        assert_eq!(question.options, ["A", OTHER_OPTION]);
    }

    #[test]
    fn other_keyword_inside_bullet_option_is_kept_verbatim() {
        let survey = parse("#### 質問\n□ その他のサービス");

        let question = &survey.sections[0].questions[0];
        assert_eq!(question.options, ["その他のサービス"]);
    }

    #[test]
    fn empty_input_yields_defaults() {
        let survey = parse("");

        assert_eq!(survey.title, DEFAULT_TITLE);
        assert_eq!(survey.description, DEFAULT_DESCRIPTION);
        assert!(survey.sections.is_empty());
        assert!(survey.is_empty());
    }

    #[test]
    fn blank_lines_and_indentation_are_insignificant() {
        let with_noise = parse("\n  # タイトル  \n\n   ### 質問   \n\n  □ A  \n\n");
        let clean = parse("# タイトル\n### 質問\n□ A");

        assert_eq!(with_noise, clean);
    }

    #[test]
    fn marker_without_trailing_space_is_ignored() {
        // "#" and "#####x" are not markers; the title goes to the first
        // real heading
        let survey = parse("#\n#####x\n# 本当のタイトル\n### 質問");

        assert_eq!(survey.title, "本当のタイトル");
        assert_eq!(survey.sections.len(), 1);
        assert_eq!(survey.sections[0].title, DEFAULT_SECTION_TITLE);
        assert_eq!(survey.sections[0].questions.len(), 1);
    }

    #[test]
    fn questions_are_required_by_default() {
        let survey = parse("### 質問\n□ A");
        assert!(survey.sections[0].questions[0].required);
    }
}
