// crates/ports/src/filesystem.rs
use std::path::Path;

use project_radar_domain::{FileRecord, ScanConfiguration};
use project_radar_shared_kernel::InfraResult;

/// Port for producing the recency-ordered record list of one scan.
///
/// Implementations swallow per-file and per-directory errors; a scan whose
/// roots are all missing returns an empty list.
pub trait FileScanner: Send + Sync {
    fn scan(&self, config: &ScanConfiguration) -> Vec<FileRecord>;
}

/// Port resolving the platform account that owns a file.
pub trait OwnerLookup: Send + Sync {
    fn owner_of(&self, path: &Path) -> InfraResult<String>;
}
