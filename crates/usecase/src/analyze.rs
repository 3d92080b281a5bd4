// crates/usecase/src/analyze.rs
use std::path::{Path, PathBuf};

use log::{info, warn};
use project_radar_ports::{analysis::Summarizer, extraction::DocumentReader};
use project_radar_shared_kernel::{ApplicationError, ApplicationResult};

use crate::dto::AnalysisOutcome;

pub const PROMPT_PREAMBLE: &str =
    "You are a professional project manager. Please summarize the key points of the following files:\n\n";

/// Extracts a set of files and asks the summarizer for their key points.
pub struct AnalyzeFiles<'a> {
    reader: &'a dyn DocumentReader,
    summarizer: &'a dyn Summarizer,
}

impl<'a> AnalyzeFiles<'a> {
    pub fn new(reader: &'a dyn DocumentReader, summarizer: &'a dyn Summarizer) -> Self {
        Self { reader, summarizer }
    }

    /// Preamble followed by one `=== File: name ===` section per path, in order.
    pub fn build_prompt(&self, paths: &[PathBuf]) -> String {
        let mut prompt = String::from(PROMPT_PREAMBLE);
        for path in paths {
            let content = self.reader.read_content(path);
            prompt.push_str(&format!("=== File: {} ===\n{content}\n\n", display_name(path)));
        }
        prompt
    }

    /// Single summarizer call; no retries.
    pub fn summarize(&self, paths: &[PathBuf]) -> ApplicationResult<String> {
        let prompt = self.build_prompt(paths);
        info!("analyzing {} files", paths.len());
        self.summarizer.summarize(&prompt).map_err(|err| ApplicationError::AnalysisFailed {
            reason: err.to_string(),
            source: Some(Box::new(err.into())),
        })
    }

    pub fn run(&self, paths: &[PathBuf]) -> AnalysisOutcome {
        match self.summarize(paths) {
            Ok(content) => AnalysisOutcome::Success { content },
            Err(ApplicationError::AnalysisFailed { reason, .. }) => {
                warn!("analysis failed: {reason}");
                AnalysisOutcome::Error { message: reason }
            }
        }
    }
}

fn display_name(path: &Path) -> String {
    path.file_name().map_or_else(|| path.to_string_lossy().into_owned(), |n| n.to_string_lossy().into_owned())
}
