//! CSV generation from survey responses.

use chrono::NaiveDate;
use enquete_types::{Answer, OTHER_OPTION, Survey, SurveyResponse};

/// Respondent name used when no identity was joined onto the response.
const UNKNOWN_NAME: &str = "Unknown Monitor";
/// Respondent email used when no identity was joined onto the response.
const UNKNOWN_EMAIL: &str = "unknown@example.com";

/// Options for CSV generation.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Prepend a UTF-8 byte order mark so spreadsheet apps detect the
    /// encoding.
    pub include_bom: bool,

    /// Header label for the respondent name column.
    pub name_header: String,

    /// Header label for the respondent email column.
    pub email_header: String,

    /// Header label for the completion timestamp column.
    pub completed_header: String,

    /// Cell text for questions the respondent did not answer.
    pub unanswered: String,
}

impl CsvOptions {
    /// Create options with the platform defaults (Japanese headers, BOM on).
    pub fn new() -> Self {
        Self {
            include_bom: true,
            name_header: "回答者名".to_string(),
            email_header: "メールアドレス".to_string(),
            completed_header: "回答日時".to_string(),
            unanswered: "未回答".to_string(),
        }
    }

    /// Drop the byte order mark.
    pub fn without_bom(mut self) -> Self {
        self.include_bom = false;
        self
    }

    /// Replace the fixed column header labels.
    pub fn with_headers(
        mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        completed: impl Into<String>,
    ) -> Self {
        self.name_header = name.into();
        self.email_header = email.into();
        self.completed_header = completed.into();
        self
    }
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Render all responses to a survey as CSV.
///
/// Columns are respondent name, email, and completion time, then one column
/// per question in ascending `order_index`. The header row carries the
/// question texts.
pub fn export_responses(
    survey: &Survey,
    responses: &[SurveyResponse],
    options: &CsvOptions,
) -> String {
    let questions = survey.sorted_questions();

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(responses.len() + 1);

    let mut header = vec![
        options.name_header.clone(),
        options.email_header.clone(),
        options.completed_header.clone(),
    ];
    header.extend(questions.iter().map(|q| q.question_text.clone()));
    rows.push(header);

    for response in responses {
        let mut row = Vec::with_capacity(questions.len() + 3);
        match &response.monitor {
            Some(respondent) => {
                row.push(respondent.name.clone());
                row.push(respondent.email.clone());
            }
            None => {
                row.push(UNKNOWN_NAME.to_string());
                row.push(UNKNOWN_EMAIL.to_string());
            }
        }
        row.push(response.completed_at.format("%Y/%m/%d %H:%M:%S").to_string());
        for question in &questions {
            row.push(render_answer(response.answer_for(question.id), options));
        }
        rows.push(row);
    }

    let mut out = String::new();
    if options.include_bom {
        out.push('\u{FEFF}');
    }
    let body = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|field| escape_field(field))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n");
    out.push_str(&body);
    out
}

/// Build the download filename for a survey's responses.
pub fn export_filename(title: &str, date: NaiveDate) -> String {
    format!("{title}_responses_{}.csv", date.format("%Y-%m-%d"))
}

/// Render one answer cell.
fn render_answer(answer: Option<&Answer>, options: &CsvOptions) -> String {
    let Some(answer) = answer else {
        return options.unanswered.clone();
    };

    if let Some(text) = &answer.answer_text {
        return text.clone();
    }

    if let Some(option) = &answer.answer_option {
        return match answer.other_text.as_deref() {
            Some(other) if !other.is_empty() => format!("{option} ({other})"),
            _ => option.clone(),
        };
    }

    if let Some(selected) = &answer.answer_options {
        let joined = selected.join(", ");
        return match answer.other_text.as_deref() {
            Some(other) if !other.is_empty() => format!("{joined} ({OTHER_OPTION}: {other})"),
            _ => joined,
        };
    }

    options.unanswered.clone()
}

/// Quote a field containing a comma, quote, or newline; double inner quotes.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
