//! # portfolio-renderer
//!
//! Tera-based card and detail views over a [`ProjectRegistry`].
//!
//! The registry is passed in explicitly on every call; the renderer holds
//! only compiled templates.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use portfolio_core::ProjectRegistry;
//! use portfolio_renderer::{DetailView, Renderer};
//!
//! fn print_views(registry: &ProjectRegistry) {
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(cards) = renderer.render_cards(registry) {
//!             println!("{cards}");
//!         }
//!         match renderer.render_detail(registry, "ring-resonator-filter") {
//!             Ok(DetailView::Found(page)) => println!("{page}"),
//!             Ok(DetailView::NotFound(page)) => eprintln!("{page}"),
//!             Err(e) => eprintln!("render failed: {e}"),
//!         }
//!     }
//! }
//! ```
//!
//! [`ProjectRegistry`]: portfolio_core::ProjectRegistry

pub mod context;
pub mod engine;
pub mod error;
pub mod markdown;

pub use context::{CardsContext, DetailContext, NotFoundContext};
pub use engine::{DetailView, Renderer, TemplateEngine, ViewKind};
pub use error::RenderError;
