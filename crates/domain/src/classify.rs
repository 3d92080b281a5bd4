//! Keyword scoring that maps a file path onto a project label.
//!
//! Each keyword of a project scores [`FILENAME_HIT`] when it occurs in the
//! file name, otherwise [`PATH_HIT`] when it occurs anywhere in the path.
//! Matching is case-insensitive. The highest total wins; equal totals go to
//! the project defined first.

use std::path::Path;

use crate::config::ProjectCatalog;

/// Label for files no project claims.
pub const UNCATEGORIZED: &str = "Uncategorized";

pub const FILENAME_HIT: u32 = 10;
pub const PATH_HIT: u32 = 3;

#[derive(Debug, Clone)]
struct Rule<'a> {
    project: &'a str,
    keywords: Vec<String>,
}

/// Score of one candidate project for one path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectScore<'a> {
    pub project: &'a str,
    pub score: u32,
}

/// Classifier bound to a read-only project catalog.
#[derive(Debug, Clone)]
pub struct ProjectClassifier<'a> {
    rules: Vec<Rule<'a>>,
}

impl<'a> ProjectClassifier<'a> {
    pub fn new(catalog: &'a ProjectCatalog) -> Self {
        let rules = catalog
            .iter()
            .map(|project| Rule {
                project: project.name(),
                keywords: project.keywords().iter().map(|k| k.to_lowercase()).collect(),
            })
            .collect();
        Self { rules }
    }

    /// Scores of all projects with a positive score, in definition order.
    pub fn scores(&self, path: &Path) -> Vec<ProjectScore<'a>> {
        let full_path = path.to_string_lossy().to_lowercase();
        let filename = path.file_name().map(|n| n.to_string_lossy().to_lowercase()).unwrap_or_default();

        self.rules
            .iter()
            .filter_map(|rule| {
                let score = rule
                    .keywords
                    .iter()
                    .map(|kw| {
                        if filename.contains(kw.as_str()) {
                            FILENAME_HIT
                        } else if full_path.contains(kw.as_str()) {
                            PATH_HIT
                        } else {
                            0
                        }
                    })
                    .sum::<u32>();
                (score > 0).then_some(ProjectScore { project: rule.project, score })
            })
            .collect()
    }

    /// Best-matching project label, or [`UNCATEGORIZED`].
    pub fn classify(&self, path: &Path) -> &'a str {
        let mut best: Option<ProjectScore<'a>> = None;
        for candidate in self.scores(path) {
            // strict comparison keeps the earliest project on ties
            if best.is_none_or(|b| candidate.score > b.score) {
                best = Some(candidate);
            }
        }
        best.map_or(UNCATEGORIZED, |b| b.project)
    }
}
