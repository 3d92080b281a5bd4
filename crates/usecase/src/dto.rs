// crates/usecase/src/dto.rs
use project_radar_domain::FileRecord;
use serde::{Deserialize, Serialize};

/// Scan result as exposed at the service boundary: `{"files": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanOutput {
    pub files: Vec<FileRecord>,
}

/// Result of one analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum AnalysisOutcome {
    Success { content: String },
    Error { message: String },
}

impl AnalysisOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Summary text, or the failure message.
    pub fn text(&self) -> &str {
        match self {
            Self::Success { content } => content,
            Self::Error { message } => message,
        }
    }
}

/// Analysis of one project's recent files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectAnalysis {
    pub project: String,
    pub files: Vec<String>,
    pub outcome: AnalysisOutcome,
}

/// What a weekly report run did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub recent_projects: usize,
    pub recent_files: usize,
    pub notifications_sent: usize,
    pub notifications_skipped: usize,
    pub notifications_failed: usize,
    pub analyses: Vec<ProjectAnalysis>,
}
