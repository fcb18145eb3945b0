use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One scored slot of a student's answer sheet: correctness verdict plus the
/// classification copied from the matching question key (empty when the
/// question id has no key entry).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredAnswer {
    pub question_id: u32,
    pub correct: bool,
    pub subject: String,
    pub topic: String,
    pub sub_topic: String,
    #[serde(rename = "sub_subtopi")]
    pub sub_subtopic: String,
}

/// Student name -> scored answers, one entry per slot, in slot order.
/// Insertion order of students is preserved so the serialized JSON is
/// deterministic for identical inputs.
pub type StudentHashmap = IndexMap<String, Vec<ScoredAnswer>>;

/// Per-topic counters accumulated over one student's scored answers.
/// `subject` is the first-seen subject label for the topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicBreakdown {
    pub subject: String,
    pub correct: u32,
    pub incorrect: u32,
    pub total: u32,
}

/// Aggregated performance of a single student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceReportEntry {
    pub name: String,
    pub total_correct: u32,
    pub total_incorrect: u32,
    pub score_percent: f64,
    pub by_topic: IndexMap<String, TopicBreakdown>,
}
