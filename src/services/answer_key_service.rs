use crate::error::{Error, Result};
use crate::models::question::{AnswerKey, QuestionKey};
use crate::utils::cell::{cell_question_id, cell_text};
use calamine::{Reader, Xlsx};
use std::io::Cursor;

/// Worksheet holding the answer key / classification table in the Formato
/// workbook.
pub const ANSWER_KEY_SHEET: &str = "ECOEMS 202526";

/// Rows of title block above the header row in the Formato template.
pub const ANSWER_KEY_TITLE_ROWS: u32 = 5;

/// Position of the correct-answer column, counted from the first used column
/// of the sheet. A schema assumption of the Formato template, not an
/// algorithmic constant.
pub const CORRECT_ANSWER_COLUMN_OFFSET: u32 = 8;

const ID_HEADER: &str = "ID";
const SUBJECT_HEADER: &str = "Subject";

pub struct AnswerKeyService;

impl AnswerKeyService {
    /// Parse the Formato workbook into an [`AnswerKey`].
    ///
    /// Fails when the workbook is unreadable, the named worksheet is absent,
    /// or data rows exist below a header that lacks the `ID`/`Subject`
    /// columns. Rows without a usable `ID` cell are skipped; malformed cells
    /// degrade to empty strings. Duplicate ids keep the last-seen row.
    pub fn parse(formato: &[u8]) -> Result<AnswerKey> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(formato))?;
        let range = workbook
            .worksheet_range(ANSWER_KEY_SHEET)
            .map_err(|e| match e {
                calamine::XlsxError::WorksheetNotFound(name) => Error::SheetNotFound(name),
                other => Error::Workbook(other),
            })?;

        let Some((start_row, start_col)) = range.start() else {
            return Ok(AnswerKey::default());
        };
        let (end_row, end_col) = range.end().unwrap_or((start_row, start_col));

        // The header row sits right below the title block.
        let header_row = start_row.max(ANSWER_KEY_TITLE_ROWS);
        let mut id_col = None;
        let mut subject_col = None;
        for col in start_col..=end_col {
            match cell_text(range.get_value((header_row, col))).as_str() {
                ID_HEADER => id_col = Some(col),
                SUBJECT_HEADER => subject_col = Some(col),
                _ => {}
            }
        }
        let Some(id_col) = id_col else {
            // A structurally missing ID column is fatal as soon as data rows
            // exist below the header; a header-only sheet parses empty.
            if end_row > header_row {
                return Err(Error::ColumnNotFound(ID_HEADER.to_string()));
            }
            return Ok(AnswerKey::default());
        };
        let answer_col = start_col + CORRECT_ANSWER_COLUMN_OFFSET;

        let mut key = AnswerKey::default();
        for row in (header_row + 1)..=end_row {
            let Some(question_id) = cell_question_id(range.get_value((row, id_col))) else {
                continue;
            };
            let Some(subject_col) = subject_col else {
                return Err(Error::ColumnNotFound(SUBJECT_HEADER.to_string()));
            };
            let correct_answer = cell_text(range.get_value((row, answer_col)));
            let subject = cell_text(range.get_value((row, subject_col)));

            key.correct_answers
                .insert(question_id, correct_answer.clone());
            key.classification.insert(
                question_id,
                QuestionKey {
                    question_id,
                    subject: subject.clone(),
                    topic: subject,
                    sub_topic: String::new(),
                    sub_subtopic: String::new(),
                    correct_answer,
                },
            );
        }

        Ok(key)
    }
}
