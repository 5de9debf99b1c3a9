//! Tera rendering engine — [`ViewKind`], [`TemplateEngine`] and [`Renderer`].
//!
//! # Views
//!
//! | View     | Template                  | Registry call  |
//! |----------|---------------------------|----------------|
//! | Cards    | `views/cards.md.tera`     | `list_all`     |
//! | Detail   | `views/detail.md.tera`    | `get_by_id`    |
//! | NotFound | `views/not_found.md.tera` | `get_by_id` miss |

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tera::Tera;

use portfolio_core::ProjectRegistry;

use crate::context::{to_tera_context, CardsContext, DetailContext, NotFoundContext};
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("shared/_footer.tera", include_str!("templates/_partials/footer.tera")),
    ("shared/_toolstack.tera", include_str!("templates/_partials/toolstack.tera")),
    ("shared/_coming_soon.tera", include_str!("templates/_partials/coming_soon.tera")),
    ("views/cards.md.tera", include_str!("templates/cards.md.tera")),
    ("views/detail.md.tera", include_str!("templates/detail.md.tera")),
    ("views/not_found.md.tera", include_str!("templates/not_found.md.tera")),
];

// ---------------------------------------------------------------------------
// Override directory
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

/// Lowercase, `/`-separated key for a template path relative to the override
/// root. Matches the names in [`TPLS`].
fn template_key(relative: &Path) -> String {
    relative
        .components()
        .map(|part| part.as_os_str().to_string_lossy().to_lowercase())
        .collect::<Vec<_>>()
        .join("/")
}

/// Every `.tera` file below `root`, keyed by [`template_key`], sorted by path.
///
/// A `root` that is missing or is not a directory is an error.
fn read_overrides(root: &Path) -> Result<Vec<(String, String)>, RenderError> {
    let meta = fs::metadata(root).map_err(|e| io_err(root, e))?;
    if !meta.is_dir() {
        let source = io::Error::new(io::ErrorKind::InvalidInput, "not a directory");
        return Err(io_err(root, source));
    }

    let mut pending = vec![root.to_path_buf()];
    let mut files = Vec::new();
    while let Some(dir) = pending.pop() {
        for entry in fs::read_dir(&dir).map_err(|e| io_err(&dir, e))? {
            let path = entry.map_err(|e| io_err(&dir, e))?.path();
            if path.is_dir() {
                pending.push(path);
            } else if path.extension().is_some_and(|ext| ext == "tera") {
                files.push(path);
            }
        }
    }
    files.sort();

    files
        .into_iter()
        .map(|path| {
            let key = template_key(path.strip_prefix(root).unwrap_or(&path));
            let body = fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
            tracing::debug!(template = %key, path = %path.display(), "template override");
            Ok((key, body))
        })
        .collect()
}

/// Embedded templates first; overrides replace them by name or add partials.
fn build_tera(overrides: Option<&Path>) -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TPLS.iter().copied())?;
    if let Some(root) = overrides {
        tera.add_raw_templates(read_overrides(root)?)?;
    }
    Ok(tera)
}

// ---------------------------------------------------------------------------
// ViewKind
// ---------------------------------------------------------------------------

/// Every view the renderer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    Cards,
    Detail,
    NotFound,
}

impl ViewKind {
    /// All views in a stable order.
    pub fn all() -> &'static [ViewKind] {
        &[ViewKind::Cards, ViewKind::Detail, ViewKind::NotFound]
    }

    pub fn template_name(&self) -> &'static str {
        match self {
            ViewKind::Cards => "views/cards.md.tera",
            ViewKind::Detail => "views/detail.md.tera",
            ViewKind::NotFound => "views/not_found.md.tera",
        }
    }
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based engine for rendering templates with optional user overrides.
///
/// `user_template_dir` must be an existing directory. Its `.tera` files
/// override embedded defaults by relative path (e.g. `views/cards.md.tera`),
/// compared in lowercase with forward slashes.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render `view` with any serializable payload.
    pub fn render<T: Serialize>(&self, view: ViewKind, payload: &T) -> Result<String, RenderError> {
        let ctx = to_tera_context(payload)?;
        let content = self.tera.render(view.template_name(), &ctx)?;
        tracing::debug!(view = ?view, bytes = content.len(), "rendered view");
        Ok(content)
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Outcome of a detail-page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView {
    /// The project exists; full page or coming-soon placeholder.
    Found(String),
    /// The id is not in the registry; fallback page.
    NotFound(String),
}

impl DetailView {
    pub fn is_found(&self) -> bool {
        matches!(self, DetailView::Found(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            DetailView::Found(page) | DetailView::NotFound(page) => page,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            DetailView::Found(page) | DetailView::NotFound(page) => page,
        }
    }
}

/// Card and detail renderer. Create once and reuse; the registry is passed
/// to each call.
pub struct Renderer {
    engine: TemplateEngine,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_overrides(None)
    }

    /// Construct a [`Renderer`] whose embedded templates may be overridden
    /// from `user_template_dir`.
    pub fn with_overrides(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(user_template_dir)? })
    }

    /// Summary tiles for every project, in registry order.
    pub fn render_cards(&self, registry: &ProjectRegistry) -> Result<String, RenderError> {
        let ctx = CardsContext::from_registry(registry);
        self.engine.render(ViewKind::Cards, &ctx)
    }

    /// Detail page for `id`; a lookup miss renders the fallback page.
    pub fn render_detail(
        &self,
        registry: &ProjectRegistry,
        id: &str,
    ) -> Result<DetailView, RenderError> {
        match registry.get_by_id(id) {
            Ok(project) => {
                let ctx = DetailContext::new(registry, project);
                Ok(DetailView::Found(self.engine.render(ViewKind::Detail, &ctx)?))
            }
            Err(err) if err.is_not_found() => {
                tracing::debug!(id, "detail lookup missed; rendering fallback");
                let ctx = NotFoundContext::new(registry, id);
                Ok(DetailView::NotFound(self.engine.render(ViewKind::NotFound, &ctx)?))
            }
            Err(err) => Err(err.into()),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
