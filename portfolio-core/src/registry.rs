//! Read-only project registry.
//!
//! # Lifecycle
//!
//! A [`ProjectRegistry`] is built exactly once, before the first query:
//!
//! - [`ProjectRegistry::builtin`] parses the content document compiled into
//!   the binary (`content/projects.yaml`)
//! - [`ProjectRegistry::load_at`] reads a content document from disk
//! - [`ProjectRegistry::from_projects`] takes already-built records
//!
//! All three funnel through the same integrity checks. The first violation
//! aborts construction; a partially valid registry is never returned.
//! After construction there is no mutation path, so a shared
//! `&ProjectRegistry` can be read from any number of threads.

use std::collections::HashSet;
use std::path::Path;

use crate::error::RegistryError;
use crate::types::{ContentFile, Project};

/// Canonical content, embedded at compile time.
const BUILTIN_CONTENT: &str = include_str!("../content/projects.yaml");

/// Origin label used in parse errors for the embedded document.
pub const BUILTIN_ORIGIN: &str = "<builtin>";

/// Ordered, immutable collection of [`Project`] records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRegistry {
    projects: Vec<Project>,
}

impl ProjectRegistry {
    // -----------------------------------------------------------------------
    // 1. Construction
    // -----------------------------------------------------------------------

    /// Validate `projects` and freeze them in the given order.
    ///
    /// Returns the first integrity violation found, scanning records in
    /// order: empty id, empty title, repeated tool, then duplicate id.
    pub fn from_projects(projects: Vec<Project>) -> Result<Self, RegistryError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(projects.len());
        for (index, project) in projects.iter().enumerate() {
            if let Err(err) = check_record(index, project) {
                tracing::warn!(index, error = %err, "rejecting registry content");
                return Err(err);
            }
            if !seen.insert(project.id.as_str()) {
                let err = RegistryError::DuplicateId { id: project.id.clone() };
                tracing::warn!(index, error = %err, "rejecting registry content");
                return Err(err);
            }
            tracing::debug!(id = %project.id, status = %project.status, "loaded project");
        }
        tracing::info!(count = projects.len(), "project registry ready");
        Ok(Self { projects })
    }

    /// Parse a content document and validate it.
    ///
    /// `origin` only labels errors (a path, or [`BUILTIN_ORIGIN`]).
    pub fn from_yaml_str(origin: &str, yaml: &str) -> Result<Self, RegistryError> {
        let content: ContentFile = serde_yaml::from_str(yaml).map_err(|source| {
            RegistryError::Parse { origin: origin.to_owned(), source }
        })?;
        Self::from_projects(content.projects)
    }

    /// The canonical registry compiled into the binary.
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::from_yaml_str(BUILTIN_ORIGIN, BUILTIN_CONTENT)
    }

    /// Read and validate a content document at `path`.
    pub fn load_at(path: &Path) -> Result<Self, RegistryError> {
        let contents = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&path.display().to_string(), &contents)
    }

    // -----------------------------------------------------------------------
    // 2. Queries
    // -----------------------------------------------------------------------

    /// Every record, in registry order.
    pub fn list_all(&self) -> &[Project] {
        &self.projects
    }

    /// The record whose id equals `id` exactly (case-sensitive).
    pub fn get_by_id(&self, id: &str) -> Result<&Project, RegistryError> {
        self.projects
            .iter()
            .find(|p| p.id.as_str() == id)
            .ok_or_else(|| RegistryError::NotFound { id: id.to_owned() })
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

fn check_record(index: usize, project: &Project) -> Result<(), RegistryError> {
    if project.id.as_str().is_empty() {
        return Err(RegistryError::EmptyId { index });
    }
    if project.title.trim().is_empty() {
        return Err(RegistryError::EmptyTitle { id: project.id.clone() });
    }
    let mut tools: HashSet<&str> = HashSet::with_capacity(project.toolstack.len());
    for tool in &project.toolstack {
        if !tools.insert(tool.as_str()) {
            return Err(RegistryError::DuplicateTool {
                id: project.id.clone(),
                tool: tool.clone(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CardVisual, ProjectId, ProjectStatus};

    fn project(id: &str) -> Project {
        Project {
            id: ProjectId::from(id),
            title: format!("Title of {id}"),
            kind: "GDSII Layout".to_string(),
            card_visual: CardVisual::Gdsii,
            card_badge: "220 nm SOI".to_string(),
            preview: "teaser".to_string(),
            description: vec![],
            toolstack: vec!["GDSFactory".to_string(), "KLayout".to_string()],
            code_snippet: String::new(),
            image_gallery: vec![],
            latex: vec![],
            status: ProjectStatus::ComingSoon,
        }
    }

    #[test]
    fn empty_registry_is_valid() {
        let reg = ProjectRegistry::from_projects(vec![]).expect("empty");
        assert!(reg.is_empty());
        assert!(reg.list_all().is_empty());
    }

    #[test]
    fn order_is_preserved() {
        let reg =
            ProjectRegistry::from_projects(vec![project("b"), project("a"), project("c")])
                .expect("build");
        let ids: Vec<&str> = reg.list_all().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }

    #[test]
    fn duplicate_id_rejected() {
        let err = ProjectRegistry::from_projects(vec![project("a"), project("a")]).unwrap_err();
        assert!(matches!(err, RegistryError::DuplicateId { ref id } if id.as_str() == "a"));
        assert!(err.is_data_integrity());
    }

    #[test]
    fn empty_id_rejected() {
        let err = ProjectRegistry::from_projects(vec![project("a"), project("")]).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyId { index: 1 }));
    }

    #[test]
    fn blank_title_rejected() {
        let mut p = project("a");
        p.title = "   ".to_string();
        let err = ProjectRegistry::from_projects(vec![p]).unwrap_err();
        assert!(matches!(err, RegistryError::EmptyTitle { .. }));
    }

    #[test]
    fn repeated_tool_rejected() {
        let mut p = project("a");
        p.toolstack.push("KLayout".to_string());
        let err = ProjectRegistry::from_projects(vec![p]).unwrap_err();
        assert!(
            matches!(err, RegistryError::DuplicateTool { ref tool, .. } if tool == "KLayout")
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let reg = ProjectRegistry::from_projects(vec![project("ring")]).expect("build");
        assert!(reg.get_by_id("ring").is_ok());
        let err = reg.get_by_id("Ring").unwrap_err();
        assert!(err.is_not_found());
        assert!(!err.is_data_integrity());
    }

    #[test]
    fn lookup_requires_full_id() {
        let reg = ProjectRegistry::from_projects(vec![project("ring-resonator")]).expect("build");
        assert!(reg.get_by_id("ring").unwrap_err().is_not_found());
        assert!(reg.get_by_id("").unwrap_err().is_not_found());
    }

    #[test]
    fn builtin_content_parses() {
        let reg = ProjectRegistry::builtin().expect("builtin content must be valid");
        assert!(!reg.is_empty());
    }

    #[test]
    fn parse_error_carries_origin() {
        let err = ProjectRegistry::from_yaml_str("inline", "projects: [ : broken").unwrap_err();
        assert!(matches!(err, RegistryError::Parse { .. }));
        assert!(err.to_string().contains("inline"));
    }
}
