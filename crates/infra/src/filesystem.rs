// crates/infra/src/filesystem.rs
use std::{
    collections::HashSet,
    fs::Metadata,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use ignore::{DirEntry, WalkBuilder};
use log::debug;
use project_radar_domain::{
    FileRecord, ProjectCatalog, ProjectClassifier, ScanConfiguration, model::UNKNOWN_OWNER, sort_by_recency,
};
use project_radar_ports::filesystem::{FileScanner, OwnerLookup};
use project_radar_shared_kernel::{FileExtension, ModificationTime};

use crate::platform::{DirIdentity, default_owner_lookup, dir_identity, path_key};

/// Filesystem adapter implementing the `FileScanner` port on top of `ignore`'s walker.
///
/// Ignore files and hidden-file rules are switched off: only the configured
/// directory and extension exclusions filter the walk.
pub struct WalkScanner {
    catalog: ProjectCatalog,
    owners: Box<dyn OwnerLookup>,
}

impl WalkScanner {
    pub fn new(catalog: ProjectCatalog, owners: Box<dyn OwnerLookup>) -> Self {
        Self { catalog, owners }
    }

    /// Scanner using the platform's owner lookup.
    pub fn with_default_owner_lookup(catalog: ProjectCatalog) -> Self {
        Self::new(catalog, default_owner_lookup())
    }

    fn build_record(
        &self,
        path: &Path,
        config: &ScanConfiguration,
        classifier: &ProjectClassifier<'_>,
    ) -> Option<FileRecord> {
        let ext = FileExtension::from_path(path);
        if config.is_excluded_extension(&ext) {
            return None;
        }

        // Follows file symlinks to their target.
        let metadata = match std::fs::metadata(path) {
            Ok(md) => md,
            Err(err) => {
                debug!("skipping {}: {err}", path.display());
                return None;
            }
        };
        if !metadata.is_file() || metadata.len() == 0 {
            return None;
        }
        let modified = match metadata.modified() {
            Ok(time) => ModificationTime::from_system_time(time),
            Err(err) => {
                debug!("skipping {}: no modification time ({err})", path.display());
                return None;
            }
        };

        let owner = if config.needs_owner_lookup(&ext) {
            self.owners.owner_of(path).unwrap_or_else(|err| {
                debug!("owner lookup failed: {err}");
                UNKNOWN_OWNER.to_string()
            })
        } else {
            String::new()
        };

        Some(FileRecord::new(path, classifier.classify(path), modified, owner))
    }
}

impl FileScanner for WalkScanner {
    fn scan(&self, config: &ScanConfiguration) -> Vec<FileRecord> {
        let classifier = ProjectClassifier::new(&self.catalog);
        let walk_config = Arc::new(config.clone());

        // Order-preserving dedup across overlapping roots: first occurrence wins.
        let mut seen = HashSet::new();
        let mut records = Vec::new();

        for root in &config.roots {
            if !root.is_dir() {
                debug!("root {} does not exist, skipping", root.display());
                continue;
            }
            for path in walk_root(root, Arc::clone(&walk_config)) {
                if !seen.insert(path_key(&path)) {
                    continue;
                }
                if let Some(record) = self.build_record(&path, config, &classifier) {
                    records.push(record);
                }
            }
        }

        sort_by_recency(&mut records);
        records
    }
}

/// Candidate file paths under `root` in deterministic (name-sorted, depth-first) order.
fn walk_root(root: &Path, config: Arc<ScanConfiguration>) -> Vec<PathBuf> {
    let mut builder = WalkBuilder::new(root);
    builder.standard_filters(false).follow_links(config.follow_links).sort_by_file_name(|a, b| a.cmp(b));

    // Loop prevention when following links: a directory reached a second time
    // (same device and inode) is not descended again.
    let visited: Arc<Mutex<HashSet<DirIdentity>>> = Arc::new(Mutex::new(HashSet::new()));
    builder.filter_entry(move |entry| keep_entry(entry, &config, &visited));

    let mut paths = Vec::new();
    for result in builder.build() {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                debug!("walk error: {err}");
                continue;
            }
        };
        // File symlinks are candidates; build_record stats through them and
        // drops those pointing at directories.
        let is_candidate = entry.file_type().is_some_and(|ft| ft.is_file() || ft.is_symlink());
        if is_candidate {
            paths.push(entry.into_path());
        }
    }
    paths
}

fn keep_entry(entry: &DirEntry, config: &ScanConfiguration, visited: &Mutex<HashSet<DirIdentity>>) -> bool {
    let follow_links = config.follow_links;
    let Some(ft) = entry.file_type() else {
        return true;
    };

    let mut target_md: Option<Metadata> = None;
    let is_dir_like = if ft.is_dir() {
        if follow_links {
            target_md = std::fs::metadata(entry.path()).ok();
        }
        true
    } else if follow_links && entry.path_is_symlink() {
        target_md = std::fs::metadata(entry.path()).ok();
        target_md.as_ref().is_some_and(Metadata::is_dir)
    } else {
        false
    };
    if !is_dir_like {
        return true;
    }

    // The root itself is never pruned.
    if entry.depth() > 0 && config.is_excluded_dir(&entry.file_name().to_string_lossy()) {
        debug!("pruning excluded directory {}", entry.path().display());
        return false;
    }

    if follow_links && let Some(id) = dir_identity(entry.path(), target_md.as_ref()) {
        let mut set = visited.lock().unwrap_or_else(PoisonError::into_inner);
        if !set.insert(id) {
            debug!("already visited {}, not descending", entry.path().display());
            return false;
        }
    }
    true
}
