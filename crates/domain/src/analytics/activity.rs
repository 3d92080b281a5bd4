use std::{collections::HashMap, path::PathBuf, time::Duration};

use project_radar_shared_kernel::ModificationTime;

use crate::model::FileRecord;

/// Recently modified files of one project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityGroup {
    project: String,
    filenames: Vec<String>,
    paths: Vec<PathBuf>,
}

impl ActivityGroup {
    fn new(project: &str) -> Self {
        Self { project: project.to_string(), filenames: Vec::new(), paths: Vec::new() }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn filenames(&self) -> &[String] {
        &self.filenames
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.filenames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filenames.is_empty()
    }
}

/// Recent files grouped by project, projects in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecentActivity {
    groups: Vec<ActivityGroup>,
}

impl RecentActivity {
    pub fn groups(&self) -> &[ActivityGroup] {
        &self.groups
    }

    pub fn get(&self, project: &str) -> Option<&ActivityGroup> {
        self.groups.iter().find(|g| g.project == project)
    }

    pub fn project_count(&self) -> usize {
        self.groups.len()
    }

    pub fn file_count(&self) -> usize {
        self.groups.iter().map(ActivityGroup::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// `(project, filenames)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.groups.iter().map(|g| (g.project(), g.filenames()))
    }
}

/// Selects records modified less than `window` before `now` and groups them.
///
/// The window is exclusive: a record exactly `window` old is dropped. Records
/// stamped in the future relative to `now` are kept.
pub fn recent_since(records: &[FileRecord], window: Duration, now: ModificationTime) -> RecentActivity {
    let window = window.as_secs_f64();
    let mut groups: Vec<ActivityGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records.iter().filter(|r| r.modified_at_raw().age_at(now) < window) {
        let slot = *index.entry(record.project()).or_insert_with(|| {
            groups.push(ActivityGroup::new(record.project()));
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.filenames.push(record.filename().to_string());
        group.paths.push(record.to_path_buf());
    }

    RecentActivity { groups }
}
