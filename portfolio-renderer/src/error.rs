//! Error types for portfolio-renderer.

use std::path::PathBuf;

use thiserror::Error;

use portfolio_core::RegistryError;

/// All errors that can arise from rendering a view.
///
/// A lookup miss is not an error here: the detail renderer turns it into
/// [`crate::DetailView::NotFound`].
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// JSON serialization error (building tera context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Registry failure other than a lookup miss.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}
