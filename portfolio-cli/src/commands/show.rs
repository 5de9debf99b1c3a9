//! `portfolio show <id>` — detail view for one project.

use anyhow::{bail, Context, Result};
use clap::Args;

use portfolio_core::ProjectRegistry;
use portfolio_renderer::DetailView;

use crate::GlobalArgs;

/// Arguments for `portfolio show`.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Project id (exact, case-sensitive).
    pub id: String,

    /// Emit the full record as JSON instead of the rendered page.
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    pub fn run(self, registry: &ProjectRegistry, global: &GlobalArgs) -> Result<()> {
        if self.json {
            let project = registry.get_by_id(&self.id)?;
            println!(
                "{}",
                serde_json::to_string_pretty(project).context("failed to serialize project")?
            );
            return Ok(());
        }

        let renderer = super::build_renderer(global.templates.as_deref())?;
        let view = renderer
            .render_detail(registry, &self.id)
            .with_context(|| format!("failed to render detail view for '{}'", self.id))?;
        match view {
            DetailView::Found(page) => {
                print!("{page}");
                Ok(())
            }
            DetailView::NotFound(page) => {
                print!("{page}");
                bail!("project '{}' not found", self.id)
            }
        }
    }
}
