//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and infrastructure adapters
//! to implement specific use cases:
//!
//! - [`scan`]: scan the configured roots into classified records
//! - [`analyze`]: extract files and ask the summarizer for key points
//! - [`report`]: the weekly recent-activity report job
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod analyze;
pub mod dto;
pub mod report;
pub mod scan;

pub use analyze::AnalyzeFiles;
pub use dto::{AnalysisOutcome, ProjectAnalysis, ReportSummary, ScanOutput};
pub use report::WeeklyReport;
pub use scan::ScanProjects;
