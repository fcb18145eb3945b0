use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Classification and correct answer for a single question, as defined by
/// one row of the answer-key workbook.
///
/// `subject` is mirrored into `topic`; `sub_topic` and `sub_subtopic` are
/// placeholders for a richer classification the current template does not
/// carry. The JSON key `sub_subtopi` is kept as-is for wire compatibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionKey {
    pub question_id: u32,
    pub subject: String,
    pub topic: String,
    pub sub_topic: String,
    #[serde(rename = "sub_subtopi")]
    pub sub_subtopic: String,
    pub correct_answer: String,
}

/// Parsed answer-key workbook: the flat answer lookup plus the per-question
/// classification, both keyed by question id.
#[derive(Debug, Clone, Default)]
pub struct AnswerKey {
    pub correct_answers: HashMap<u32, String>,
    pub classification: HashMap<u32, QuestionKey>,
}
