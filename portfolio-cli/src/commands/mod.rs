//! Subcommand implementations.

pub mod cards;
pub mod list;
pub mod show;

use std::path::Path;

use anyhow::{Context, Result};

use portfolio_core::ProjectRegistry;
use portfolio_renderer::Renderer;

/// Build the registry once: from `content` when given, else the built-in one.
pub fn load_registry(content: Option<&Path>) -> Result<ProjectRegistry> {
    match content {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading project content");
            ProjectRegistry::load_at(path).with_context(|| {
                format!("failed to load project content from {}", path.display())
            })
        }
        None => ProjectRegistry::builtin().context("built-in project registry is invalid"),
    }
}

pub fn build_renderer(templates: Option<&Path>) -> Result<Renderer> {
    Renderer::with_overrides(templates).context("failed to load view templates")
}
