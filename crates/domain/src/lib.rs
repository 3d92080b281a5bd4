//! # Domain
//!
//! Pure policy for the scan-classify-extract pipeline: file records, read-only
//! configuration values, keyword classification, recency ordering, the
//! recent-activity window and extraction placeholder rules.
//!
//! Nothing in this crate touches the filesystem or the network.

#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod classify;
pub mod config;
pub mod extraction;
pub mod model;

pub use analytics::{ActivityGroup, RecentActivity, recent_since, sort_by_recency};
pub use classify::{ProjectClassifier, UNCATEGORIZED};
pub use config::{
    ExtractionLimits, ProjectCatalog, ProjectDefinition, RadarConfig, ReportSettings, ScanConfiguration,
    ScanConfigurationBuilder,
};
pub use extraction::ExtractionOutcome;
pub use model::FileRecord;
