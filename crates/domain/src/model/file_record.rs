use std::path::{Path, PathBuf};

use project_radar_shared_kernel::{FileExtension, ModificationTime};
use serde::{Deserialize, Serialize};

/// Owner reported when the owner-lookup collaborator fails.
pub const UNKNOWN_OWNER: &str = "Unknown";

/// One scanned file.
///
/// Built once by the scanner and never mutated afterwards. Serialized field
/// names follow the scan endpoint's wire format (`updated_at`, `raw_mtime`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    filename: String,
    path: String,
    project: String,
    #[serde(rename = "updated_at")]
    modified_at: String,
    owner: String,
    #[serde(rename = "raw_mtime")]
    modified_at_raw: ModificationTime,
}

impl FileRecord {
    pub fn new(
        path: &Path,
        project: impl Into<String>,
        modified: ModificationTime,
        owner: impl Into<String>,
    ) -> Self {
        let filename = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        Self {
            filename,
            path: path.to_string_lossy().into_owned(),
            project: project.into(),
            modified_at: modified.display_local(),
            owner: owner.into(),
            modified_at_raw: modified,
        }
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(&self.path)
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn modified_at(&self) -> &str {
        &self.modified_at
    }

    pub fn modified_at_raw(&self) -> ModificationTime {
        self.modified_at_raw
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn extension(&self) -> FileExtension {
        FileExtension::from_path(Path::new(&self.filename))
    }
}
