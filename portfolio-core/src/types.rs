//! Domain types for the portfolio registry.
//!
//! Field names serialize in camelCase to match the content document
//! (`cardVisual`, `codeSnippet`, ...). The free-text category is stored as
//! `kind` and serialized under its literal name `type`.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// Stable identifier of a project; used for lookup and as a link target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(pub String);

impl ProjectId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ProjectId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProjectId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Closed-set tags
// ---------------------------------------------------------------------------

/// Illustrative motif drawn on a summary tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardVisual {
    /// Mask-layout motif.
    Gdsii,
    /// Field-simulation motif.
    Fdtd,
    /// Source-code motif.
    Code,
}

impl CardVisual {
    /// All visual tags in a stable order.
    pub fn all() -> &'static [CardVisual] {
        &[CardVisual::Gdsii, CardVisual::Fdtd, CardVisual::Code]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardVisual::Gdsii => "gdsii",
            CardVisual::Fdtd => "fdtd",
            CardVisual::Code => "code",
        }
    }
}

impl fmt::Display for CardVisual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Publication state; decides between full content and a placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    Published,
    ComingSoon,
}

impl ProjectStatus {
    /// All status tags in a stable order.
    pub fn all() -> &'static [ProjectStatus] {
        &[ProjectStatus::Published, ProjectStatus::ComingSoon]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Published => "published",
            ProjectStatus::ComingSoon => "coming-soon",
        }
    }

    pub fn is_published(&self) -> bool {
        matches!(self, ProjectStatus::Published)
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One entry of a project's image gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageRef {
    /// Relative or absolute URL of the image.
    pub src: String,
    #[serde(default)]
    pub alt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// One engineering write-up.
///
/// Immutable once it is inside a [`crate::ProjectRegistry`]; the registry
/// only hands out shared references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub card_visual: CardVisual,
    pub card_badge: String,
    pub preview: String,
    /// Paragraphs, in display order.
    #[serde(default)]
    pub description: Vec<String>,
    /// Ordered set of tool names; entries are pairwise distinct.
    #[serde(default)]
    pub toolstack: Vec<String>,
    /// Shown verbatim; highlighting happens downstream.
    #[serde(default)]
    pub code_snippet: String,
    #[serde(default)]
    pub image_gallery: Vec<ImageRef>,
    /// Math-markup fragments, in display order.
    #[serde(default)]
    pub latex: Vec<String>,
    pub status: ProjectStatus,
}

/// Root of a content document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ContentFile {
    #[serde(default)]
    pub projects: Vec<Project>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
