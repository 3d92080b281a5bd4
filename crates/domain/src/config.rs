pub mod limits;
pub mod projects;
pub mod scan;

pub use limits::{ExtractionLimits, ReportSettings};
pub use projects::{ProjectCatalog, ProjectDefinition};
pub use scan::{ScanConfiguration, ScanConfigurationBuilder, ScanConfigurationBuilderError};

use project_radar_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Everything the pipeline reads at runtime, resolved once at startup.
///
/// Passed by reference into the scanner, classifier and extractors; never
/// mutated after construction.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadarConfig {
    pub scan: ScanConfiguration,
    pub projects: ProjectCatalog,
    pub limits: ExtractionLimits,
    pub report: ReportSettings,
}

impl RadarConfig {
    /// Rejects values the pipeline cannot run with.
    pub fn validate(&self) -> DomainResult<()> {
        if self.scan.roots.is_empty() {
            return Err(DomainError::InvalidConfiguration { reason: "no scan roots configured".to_string() });
        }
        if self.report.window_days == 0 {
            return Err(DomainError::InvalidConfiguration {
                reason: "report window must be at least one day".to_string(),
            });
        }
        if self.limits.max_chars == 0 {
            return Err(DomainError::InvalidConfiguration { reason: "max_chars must be positive".to_string() });
        }
        Ok(())
    }
}
