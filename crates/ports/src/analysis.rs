// crates/ports/src/analysis.rs
use project_radar_shared_kernel::InfraResult;

/// Port for the LLM that turns a prompt into a free-text summary.
pub trait Summarizer: Send + Sync {
    fn summarize(&self, prompt: &str) -> InfraResult<String>;
}
