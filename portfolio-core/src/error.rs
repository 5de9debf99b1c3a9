//! Error types for portfolio-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::ProjectId;

/// All errors that can arise from building or querying a registry.
///
/// Every variant except [`RegistryError::NotFound`] and
/// [`RegistryError::Io`] is a data-integrity failure raised while the
/// registry is being constructed.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Content file could not be read.
    #[error("failed to read registry content at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed content, an unknown closed-set tag, or an unknown field.
    #[error("failed to parse registry content from {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("project #{index} has an empty id")]
    EmptyId { index: usize },

    #[error("project '{id}' has an empty title")]
    EmptyTitle { id: ProjectId },

    #[error("project '{id}' lists tool '{tool}' more than once")]
    DuplicateTool { id: ProjectId, tool: String },

    #[error("duplicate project id '{id}'")]
    DuplicateId { id: ProjectId },

    /// Lookup miss; recoverable.
    #[error("project '{id}' not found")]
    NotFound { id: String },
}

impl RegistryError {
    /// `true` for load-time failures that must halt initialization.
    pub fn is_data_integrity(&self) -> bool {
        matches!(
            self,
            RegistryError::Parse { .. }
                | RegistryError::EmptyId { .. }
                | RegistryError::EmptyTitle { .. }
                | RegistryError::DuplicateTool { .. }
                | RegistryError::DuplicateId { .. }
        )
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound { .. })
    }
}
