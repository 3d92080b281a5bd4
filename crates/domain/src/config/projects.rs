use std::collections::HashSet;

use project_radar_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// A project label and the keywords that point at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDefinition {
    name: String,
    keywords: Vec<String>,
}

impl ProjectDefinition {
    pub fn new<I, S>(name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { name: name.into(), keywords: keywords.into_iter().map(Into::into).collect() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

/// Ordered project definitions. Order is significant: it breaks score ties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<ProjectDefinition>", into = "Vec<ProjectDefinition>")]
pub struct ProjectCatalog {
    projects: Vec<ProjectDefinition>,
}

impl ProjectCatalog {
    /// Builds a catalog, rejecting duplicate names and blank keywords.
    ///
    /// A blank keyword is a substring of every path and would claim every file.
    pub fn new(projects: Vec<ProjectDefinition>) -> DomainResult<Self> {
        let mut seen = HashSet::new();
        for project in &projects {
            if !seen.insert(project.name.as_str()) {
                return Err(DomainError::DuplicateProject { name: project.name.clone() });
            }
            if project.keywords.is_empty() || project.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(DomainError::EmptyKeywords { name: project.name.clone() });
            }
        }
        Ok(Self { projects })
    }

    pub fn empty() -> Self {
        Self { projects: Vec::new() }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectDefinition> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self {
            projects: vec![
                ProjectDefinition::new("Project-Alpha", ["Alpha", "Gen1"]),
                ProjectDefinition::new("Project-Beta", ["Beta"]),
                ProjectDefinition::new("Project-Gamma", ["Gamma", "Monitoring"]),
            ],
        }
    }
}

impl TryFrom<Vec<ProjectDefinition>> for ProjectCatalog {
    type Error = DomainError;

    fn try_from(projects: Vec<ProjectDefinition>) -> DomainResult<Self> {
        Self::new(projects)
    }
}

impl From<ProjectCatalog> for Vec<ProjectDefinition> {
    fn from(catalog: ProjectCatalog) -> Self {
        catalog.projects
    }
}
