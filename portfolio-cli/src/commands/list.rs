//! `portfolio list` — every project in registry order.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use portfolio_core::{ProjectRegistry, ProjectStatus};

/// Arguments for `portfolio list`.
#[derive(Args, Debug)]
pub struct ListArgs {
    /// Emit the full records as JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Tabled)]
struct ProjectRow {
    #[tabled(rename = "id")]
    id: String,
    #[tabled(rename = "title")]
    title: String,
    #[tabled(rename = "type")]
    kind: String,
    #[tabled(rename = "badge")]
    badge: String,
    #[tabled(rename = "status")]
    status: String,
}

impl ListArgs {
    pub fn run(self, registry: &ProjectRegistry) -> Result<()> {
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(registry.list_all())
                    .context("failed to serialize projects")?
            );
            return Ok(());
        }

        if registry.is_empty() {
            println!("No projects registered.");
            return Ok(());
        }

        let rows: Vec<ProjectRow> = registry
            .list_all()
            .iter()
            .map(|p| ProjectRow {
                id: p.id.to_string(),
                title: p.title.clone(),
                kind: p.kind.clone(),
                badge: p.card_badge.clone(),
                status: status_label(p.status),
            })
            .collect();

        println!("{} project(s)", registry.len().to_string().bold());
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}

fn status_label(status: ProjectStatus) -> String {
    match status {
        ProjectStatus::Published => status.as_str().green().to_string(),
        ProjectStatus::ComingSoon => status.as_str().yellow().to_string(),
    }
}
