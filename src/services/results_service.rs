use crate::dto::analysis_dto::AnalysisResponse;
use crate::error::{Error, Result};
use crate::models::question::AnswerKey;
use crate::models::report::{PerformanceReportEntry, ScoredAnswer, StudentHashmap, TopicBreakdown};
use crate::services::answer_key_service::AnswerKeyService;
use crate::utils::cell::{cell_text, cell_text_raw};
use calamine::{Reader, Xlsx};
use indexmap::IndexMap;
use std::io::Cursor;

/// Worksheet holding the raw student responses in the Resultados workbook.
pub const RESULTS_SHEET: &str = "Sheet1";

/// Literal first-cell value marking the header row of the results table.
pub const STUDENT_HEADER_MARKER: &str = "Student Name";

/// Position of the first answer column, counted from the first used column
/// of the sheet. Schema assumption of the Resultados template.
pub const FIRST_ANSWER_COLUMN_OFFSET: u32 = 4;

/// Fixed number of answer slots per student row. Slot `i` (0-based) maps to
/// `question_id = i + 1`.
pub const ANSWER_SLOTS: usize = 128;

pub struct ResultsService;

impl ResultsService {
    /// Full pipeline: parse the answer key, then aggregate the results
    /// against it. Pure function of the two buffers.
    pub fn analyze(formato: &[u8], resultados: &[u8]) -> Result<AnalysisResponse> {
        let key = AnswerKeyService::parse(formato)?;
        let (student_hashmap, performance_report) = Self::aggregate(resultados, &key)?;
        Ok(AnalysisResponse {
            student_hashmap,
            performance_report,
        })
    }

    /// Parse the Resultados workbook, score every student against the answer
    /// key, and reduce the scored answers into the per-topic report.
    pub fn aggregate(
        resultados: &[u8],
        key: &AnswerKey,
    ) -> Result<(StudentHashmap, Vec<PerformanceReportEntry>)> {
        let raw_answers = Self::scan_students(resultados)?;
        let student_hashmap = Self::score(raw_answers, key);
        let performance_report = Self::report(&student_hashmap);
        Ok((student_hashmap, performance_report))
    }

    /// Phase 1: locate the header row and read 128 answer letters per
    /// student. Student names are used verbatim, untrimmed, as keys; a
    /// duplicated name overwrites the earlier row.
    fn scan_students(resultados: &[u8]) -> Result<IndexMap<String, Vec<Option<char>>>> {
        let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(resultados))?;
        let range = workbook
            .worksheet_range(RESULTS_SHEET)
            .map_err(|e| match e {
                calamine::XlsxError::WorksheetNotFound(name) => Error::SheetNotFound(name),
                other => Error::Workbook(other),
            })?;

        let Some((start_row, start_col)) = range.start() else {
            return Err(Error::HeaderNotFound(STUDENT_HEADER_MARKER.to_string()));
        };
        let (end_row, _) = range.end().unwrap_or((start_row, start_col));

        let header_row = (start_row..=end_row)
            .find(|row| cell_text_raw(range.get_value((*row, start_col))) == STUDENT_HEADER_MARKER)
            .ok_or_else(|| Error::HeaderNotFound(STUDENT_HEADER_MARKER.to_string()))?;

        let mut students = IndexMap::new();
        for row in (header_row + 1)..=end_row {
            let name = cell_text_raw(range.get_value((row, start_col)));
            // Blank separator rows and repeated header rows are not students.
            if name.is_empty() || name == STUDENT_HEADER_MARKER {
                continue;
            }
            let answers = (0..ANSWER_SLOTS as u32)
                .map(|slot| {
                    let text =
                        cell_text(range.get_value((row, start_col + FIRST_ANSWER_COLUMN_OFFSET + slot)));
                    text.chars().next()
                })
                .collect();
            students.insert(name, answers);
        }

        Ok(students)
    }

    /// Phase 2: one [`ScoredAnswer`] per slot, in slot order. An answer is
    /// correct iff both the student's letter and the key's answer are
    /// present and equal; anything missing scores as incorrect.
    fn score(
        students: IndexMap<String, Vec<Option<char>>>,
        key: &AnswerKey,
    ) -> StudentHashmap {
        let mut scored_map = IndexMap::with_capacity(students.len());
        for (name, answers) in students {
            let scored = answers
                .iter()
                .enumerate()
                .map(|(slot, answer)| {
                    let question_id = slot as u32 + 1;
                    let correct_letter = key
                        .correct_answers
                        .get(&question_id)
                        .filter(|letter| !letter.is_empty());
                    let correct = match (answer, correct_letter) {
                        (Some(given), Some(expected)) => given.to_string() == *expected,
                        _ => false,
                    };
                    let classification = key.classification.get(&question_id);
                    ScoredAnswer {
                        question_id,
                        correct,
                        subject: classification.map(|c| c.subject.clone()).unwrap_or_default(),
                        topic: classification.map(|c| c.topic.clone()).unwrap_or_default(),
                        sub_topic: classification
                            .map(|c| c.sub_topic.clone())
                            .unwrap_or_default(),
                        sub_subtopic: classification
                            .map(|c| c.sub_subtopic.clone())
                            .unwrap_or_default(),
                    }
                })
                .collect();
            scored_map.insert(name, scored);
        }
        scored_map
    }

    /// Phase 3: reduce each student's scored answers into totals and the
    /// per-topic breakdown, in student insertion order.
    fn report(student_hashmap: &StudentHashmap) -> Vec<PerformanceReportEntry> {
        student_hashmap
            .iter()
            .map(|(name, answers)| {
                let total = answers.len() as u32;
                let total_correct = answers.iter().filter(|a| a.correct).count() as u32;
                let total_incorrect = total - total_correct;
                let score_percent = if total > 0 {
                    total_correct as f64 * 100.0 / total as f64
                } else {
                    0.0
                };

                let mut by_topic: IndexMap<String, TopicBreakdown> = IndexMap::new();
                for answer in answers {
                    let entry = by_topic
                        .entry(answer.topic.clone())
                        .or_insert_with(|| TopicBreakdown {
                            subject: answer.subject.clone(),
                            correct: 0,
                            incorrect: 0,
                            total: 0,
                        });
                    entry.total += 1;
                    if answer.correct {
                        entry.correct += 1;
                    } else {
                        entry.incorrect += 1;
                    }
                }

                PerformanceReportEntry {
                    name: name.clone(),
                    total_correct,
                    total_incorrect,
                    score_percent,
                    by_topic,
                }
            })
            .collect()
    }
}
