//! Portfolio core library — project records, the read-only registry, errors.
//!
//! - [`types`] — [`Project`] and its closed-set tags
//! - [`error`] — [`RegistryError`]
//! - [`registry`] — [`ProjectRegistry`] construction and queries

pub mod error;
pub mod registry;
pub mod types;

pub use error::RegistryError;
pub use registry::ProjectRegistry;
pub use types::{CardVisual, ContentFile, ImageRef, Project, ProjectId, ProjectStatus};
