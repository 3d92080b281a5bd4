use std::{collections::BTreeSet, path::PathBuf};

use derive_builder::Builder;
use project_radar_shared_kernel::FileExtension;
use serde::{Deserialize, Serialize};

/// Where to scan and what to leave out.
#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[builder(setter(into))]
#[serde(default)]
pub struct ScanConfiguration {
    #[builder(default = "default_roots()")]
    pub roots: Vec<PathBuf>,
    /// Directory names pruned at any depth (exact, case-sensitive match).
    #[builder(setter(custom), default = "default_excluded_dirs()")]
    pub excluded_dirs: BTreeSet<String>,
    #[builder(setter(custom), default = "default_excluded_extensions()")]
    pub excluded_extensions: BTreeSet<FileExtension>,
    #[builder(setter(custom), default = "default_owner_lookup_extensions()")]
    pub owner_lookup_extensions: BTreeSet<FileExtension>,
    #[builder(default)]
    pub follow_links: bool,
}

impl ScanConfiguration {
    pub fn builder() -> ScanConfigurationBuilder {
        ScanConfigurationBuilder::default()
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    pub fn is_excluded_extension(&self, ext: &FileExtension) -> bool {
        !ext.is_empty() && self.excluded_extensions.contains(ext)
    }

    pub fn needs_owner_lookup(&self, ext: &FileExtension) -> bool {
        !ext.is_empty() && self.owner_lookup_extensions.contains(ext)
    }
}

impl Default for ScanConfiguration {
    fn default() -> Self {
        Self {
            roots: default_roots(),
            excluded_dirs: default_excluded_dirs(),
            excluded_extensions: default_excluded_extensions(),
            owner_lookup_extensions: default_owner_lookup_extensions(),
            follow_links: false,
        }
    }
}

impl ScanConfigurationBuilder {
    pub fn excluded_dirs<I, S>(&mut self, names: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn excluded_extensions<I, S>(&mut self, exts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_extensions = Some(exts.into_iter().map(FileExtension::new).collect());
        self
    }

    pub fn owner_lookup_extensions<I, S>(&mut self, exts: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.owner_lookup_extensions = Some(exts.into_iter().map(FileExtension::new).collect());
        self
    }
}

fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("./demo_data/documents"), PathBuf::from("C:/Users/User/Documents/Projects")]
}

fn default_excluded_dirs() -> BTreeSet<String> {
    [".git", ".vscode", "__pycache__", "node_modules", "Backup", "Temp"].into_iter().map(String::from).collect()
}

fn default_excluded_extensions() -> BTreeSet<FileExtension> {
    ["dll", "exe", "tmp", "log", "bak"].into_iter().map(FileExtension::new).collect()
}

fn default_owner_lookup_extensions() -> BTreeSet<FileExtension> {
    ["pdf", "doc", "docx", "xls", "xlsx", "ppt", "pptx"].into_iter().map(FileExtension::new).collect()
}
