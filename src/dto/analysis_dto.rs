use crate::models::report::{PerformanceReportEntry, StudentHashmap};
use serde::Serialize;

/// Response body of the results-analysis endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResponse {
    pub student_hashmap: StudentHashmap,
    pub performance_report: Vec<PerformanceReportEntry>,
}
