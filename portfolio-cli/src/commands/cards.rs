//! `portfolio cards` — summary tiles for every project.

use anyhow::{Context, Result};
use clap::Args;

use portfolio_core::ProjectRegistry;

use crate::GlobalArgs;

/// Arguments for `portfolio cards`.
#[derive(Args, Debug)]
pub struct CardsArgs {}

impl CardsArgs {
    pub fn run(self, registry: &ProjectRegistry, global: &GlobalArgs) -> Result<()> {
        let renderer = super::build_renderer(global.templates.as_deref())?;
        let page = renderer.render_cards(registry).context("failed to render card view")?;
        print!("{page}");
        Ok(())
    }
}
