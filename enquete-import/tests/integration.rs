//! Integration tests for enquete-import

use enquete_import::{
    DEFAULT_DESCRIPTION, DEFAULT_SECTION_TITLE, DEFAULT_TITLE, ImportPreview, QuestionKind, parse,
    to_question_drafts,
};
use enquete_types::{OTHER_OPTION, QuestionType};

#[test]
fn test_title_heading_does_not_open_a_section() {
    let survey = parse("# Title\n### Q1\n□ A\n□ B");

    assert_eq!(survey.title, "Title");
    // the first heading was consumed as the title, so the question lives
    // in a synthesized default section
    assert_eq!(survey.sections.len(), 1);
    assert_eq!(survey.sections[0].title, DEFAULT_SECTION_TITLE);

    let question = &survey.sections[0].questions[0];
    assert_eq!(question.kind, QuestionKind::SingleChoice);
    assert_eq!(question.text, "Q1");
    assert_eq!(question.options, ["A", "B"]);

    let drafts = to_question_drafts(&survey);
    assert_eq!(drafts[0].order_index, 0);
}

#[test]
fn test_multi_choice_section_document() {
    let survey = parse("# Doc\n# Section A\n#### Pick many\n□ X\n□ Y\n□ その他");

    assert_eq!(survey.title, "Doc");
    assert_eq!(survey.sections.len(), 1);
    assert_eq!(survey.sections[0].title, "Section A");

    let drafts = to_question_drafts(&survey);
    assert_eq!(drafts.len(), 1);
    assert_eq!(drafts[0].question_text, "Pick many");
    assert_eq!(drafts[0].options, ["X", "Y", OTHER_OPTION]);
    assert!(drafts[0].is_multiple_select);
    assert_eq!(drafts[0].max_selections, None);
}

#[test]
fn test_ranking_without_heading_gets_default_section() {
    let survey = parse("$$$1-3 Top picks\n□ A\n□ B\n□ C\n□ D");

    assert_eq!(survey.title, DEFAULT_TITLE);
    assert_eq!(survey.sections.len(), 1);
    assert_eq!(survey.sections[0].title, DEFAULT_SECTION_TITLE);

    let question = &survey.sections[0].questions[0];
    assert_eq!(question.text, "Top picks");
    assert_eq!(question.options.len(), 4);
    assert_eq!(question.max_selections, Some(3));
}

#[test]
fn test_empty_input() {
    let survey = parse("");

    assert_eq!(survey.title, DEFAULT_TITLE);
    assert_eq!(survey.description, DEFAULT_DESCRIPTION);
    assert!(survey.sections.is_empty());
    assert!(to_question_drafts(&survey).is_empty());
}

#[test]
fn test_consecutive_ranking_questions_are_independent() {
    let document = "$$$1-3 First ranking\n□ A\n□ B\n□ C\n□ D\n□ E\n\
                    $$$1-3 Second ranking\n□ V\n□ W\n□ X\n□ Y\n□ Z";
    let drafts = to_question_drafts(&parse(document));

    assert_eq!(drafts.len(), 2);
    for draft in &drafts {
        assert_eq!(draft.question_type, QuestionType::MultipleChoice);
        assert!(draft.is_multiple_select);
        assert_eq!(draft.max_selections, Some(3));
        assert_eq!(draft.options.len(), 5);
    }
    assert_eq!(drafts[0].order_index, 0);
    assert_eq!(drafts[1].order_index, 1);
}

#[test]
fn test_order_index_is_contiguous_across_sections() {
    let document = "# t\nintro\n# A\n### q1\n□ a\n#### q2\n□ b\n# B\n## about B\n\
                    ##### q3\n$$$1-3 q4\n□ c\n□ d\n□ e";
    let drafts = to_question_drafts(&parse(document));

    let indices: Vec<u32> = drafts.iter().map(|d| d.order_index).collect();
    assert_eq!(indices, (0..drafts.len() as u32).collect::<Vec<u32>>());
    assert!(drafts.iter().all(|d| d.required));
}

#[test]
fn test_pipeline_is_deterministic() {
    let document = "# t\n# A\n#### q\n□ a\nその他を選んだ方はご記入ください";

    let first = ImportPreview::from_markdown(document);
    let second = ImportPreview::from_markdown(document);
    assert_eq!(first, second);
}
