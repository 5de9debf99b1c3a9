//! Template contexts — serializable rendering payloads built from registry records.
//!
//! The card view sees only the summary fields of each record. The detail
//! view sees every field, plus `published` so templates can choose between
//! full content and the placeholder without string comparisons.
//!
//! Titles, image text and captions arrive Markdown-escaped, and badges arrive
//! as complete code spans, so templates can drop them into link or image
//! syntax as they are.

use serde::{Deserialize, Serialize};

use portfolio_core::{ImageRef, Project, ProjectRegistry};

use crate::error::RenderError;
use crate::markdown::{code_fence, code_span, escape_text};

/// Link target for a project's detail page.
pub fn detail_href(id: &str) -> String {
    format!("projects/?id={id}")
}

/// Data shared by every view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaCtx {
    pub renderer_version: String,
    pub project_count: usize,
}

impl MetaCtx {
    fn for_registry(registry: &ProjectRegistry) -> Self {
        MetaCtx {
            renderer_version: env!("CARGO_PKG_VERSION").to_string(),
            project_count: registry.len(),
        }
    }
}

/// One summary tile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardCtx {
    pub id: String,
    /// Escaped; safe as link text.
    pub title: String,
    /// Free-text category (`type` on the record).
    pub kind: String,
    pub visual: String,
    /// Inline code span.
    pub badge: String,
    pub preview: String,
    pub href: String,
}

impl CardCtx {
    pub fn from_project(project: &Project) -> Self {
        CardCtx {
            id: project.id.to_string(),
            title: escape_text(&project.title),
            kind: escape_text(&project.kind),
            visual: project.card_visual.to_string(),
            badge: code_span(&project.card_badge),
            preview: project.preview.clone(),
            href: detail_href(project.id.as_str()),
        }
    }
}

/// Payload for the card view; tiles in registry order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CardsContext {
    pub cards: Vec<CardCtx>,
    pub meta: MetaCtx,
}

impl CardsContext {
    pub fn from_registry(registry: &ProjectRegistry) -> Self {
        CardsContext {
            cards: registry.list_all().iter().map(CardCtx::from_project).collect(),
            meta: MetaCtx::for_registry(registry),
        }
    }
}

/// One gallery image. `caption` is always present (null when unset) so
/// templates can test it directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageCtx {
    pub src: String,
    pub alt: String,
    pub caption: Option<String>,
}

impl From<&ImageRef> for ImageCtx {
    fn from(image: &ImageRef) -> Self {
        ImageCtx {
            src: image.src.clone(),
            alt: escape_text(&image.alt),
            caption: image.caption.as_deref().map(escape_text),
        }
    }
}

/// Full project fields for the detail view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailCtx {
    pub id: String,
    pub title: String,
    pub kind: String,
    pub visual: String,
    pub badge: String,
    pub preview: String,
    pub description: Vec<String>,
    pub toolstack: Vec<String>,
    pub code_snippet: String,
    /// Backtick fence that cannot occur inside `code_snippet`.
    pub code_fence: String,
    pub images: Vec<ImageCtx>,
    pub latex: Vec<String>,
    pub status: String,
    pub published: bool,
}

impl DetailCtx {
    pub fn from_project(project: &Project) -> Self {
        DetailCtx {
            id: project.id.to_string(),
            title: escape_text(&project.title),
            kind: escape_text(&project.kind),
            visual: project.card_visual.to_string(),
            badge: code_span(&project.card_badge),
            preview: project.preview.clone(),
            description: project.description.clone(),
            toolstack: project.toolstack.clone(),
            code_snippet: project.code_snippet.clone(),
            code_fence: code_fence(&project.code_snippet),
            images: project.image_gallery.iter().map(ImageCtx::from).collect(),
            latex: project.latex.clone(),
            status: project.status.to_string(),
            published: project.status.is_published(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailContext {
    pub project: DetailCtx,
    pub meta: MetaCtx,
}

impl DetailContext {
    pub fn new(registry: &ProjectRegistry, project: &Project) -> Self {
        DetailContext {
            project: DetailCtx::from_project(project),
            meta: MetaCtx::for_registry(registry),
        }
    }
}

/// Payload for the fallback page shown on a lookup miss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotFoundContext {
    pub requested_id: String,
    pub index_href: String,
    pub meta: MetaCtx,
}

impl NotFoundContext {
    pub fn new(registry: &ProjectRegistry, requested_id: &str) -> Self {
        NotFoundContext {
            requested_id: requested_id.to_string(),
            index_href: "../".to_string(),
            meta: MetaCtx::for_registry(registry),
        }
    }
}

/// Convert any serializable payload to a [`tera::Context`].
pub fn to_tera_context<T: Serialize>(payload: &T) -> Result<tera::Context, RenderError> {
    tera::Context::from_serialize(payload).map_err(RenderError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_core::{CardVisual, ProjectId, ProjectStatus};

    fn make_project(id: &str, status: ProjectStatus) -> Project {
        Project {
            id: ProjectId::from(id),
            title: "Ring filter".to_string(),
            kind: "GDSII Layout".to_string(),
            card_visual: CardVisual::Gdsii,
            card_badge: "220 nm SOI".to_string(),
            preview: "teaser".to_string(),
            description: vec!["para one".to_string()],
            toolstack: vec!["GDSFactory".to_string()],
            code_snippet: "print()".to_string(),
            image_gallery: vec![],
            latex: vec![],
            status,
        }
    }

    #[test]
    fn cards_follow_registry_order() {
        let reg = ProjectRegistry::from_projects(vec![
            make_project("b", ProjectStatus::Published),
            make_project("a", ProjectStatus::ComingSoon),
        ])
        .unwrap();
        let ctx = CardsContext::from_registry(&reg);
        assert_eq!(ctx.cards.len(), 2);
        assert_eq!(ctx.cards[0].id, "b");
        assert_eq!(ctx.cards[1].href, "projects/?id=a");
        assert_eq!(ctx.cards[0].visual, "gdsii");
        assert_eq!(ctx.meta.project_count, 2);
    }

    #[test]
    fn detail_ctx_flags_publication() {
        let published = DetailCtx::from_project(&make_project("p", ProjectStatus::Published));
        assert!(published.published);
        assert_eq!(published.status, "published");

        let pending = DetailCtx::from_project(&make_project("c", ProjectStatus::ComingSoon));
        assert!(!pending.published);
        assert_eq!(pending.status, "coming-soon");
    }

    #[test]
    fn markdown_sensitive_text_is_quoted() {
        let mut project = make_project("q", ProjectStatus::Published);
        project.title = "Ring [v2]".to_string();
        project.card_badge = "a`b".to_string();
        project.code_snippet = "before\n```\nafter".to_string();
        project.image_gallery.push(ImageRef {
            src: "img/a.png".to_string(),
            alt: "x]y".to_string(),
            caption: Some("*raw*".to_string()),
        });

        let card = CardCtx::from_project(&project);
        assert_eq!(card.title, r"Ring \[v2\]");
        assert_eq!(card.badge, "``a`b``");

        let detail = DetailCtx::from_project(&project);
        assert_eq!(detail.code_fence, "````");
        assert_eq!(detail.code_snippet, project.code_snippet, "snippet stays verbatim");
        assert_eq!(detail.images[0].alt, r"x\]y");
        assert_eq!(detail.images[0].caption.as_deref(), Some(r"\*raw\*"));
    }

    #[test]
    fn to_tera_context_succeeds() {
        let reg = ProjectRegistry::from_projects(vec![]).unwrap();
        let ctx = NotFoundContext::new(&reg, "missing");
        let tera_ctx = to_tera_context(&ctx).expect("context conversion");
        assert!(tera_ctx.contains_key("requested_id"));
    }
}
