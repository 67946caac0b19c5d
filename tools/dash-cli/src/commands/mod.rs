//! CLI command implementations.

pub mod categories;
pub mod config;
pub mod explore;
pub mod render;
pub mod report;

use clap::{Args, Subcommand};

/// Arguments for the report command.
#[derive(Args)]
pub struct ReportArgs {
    /// Restrict the report to one category.
    #[arg(short = 'C', long)]
    pub category: Option<String>,
}

/// Arguments for the render command.
#[derive(Args)]
pub struct RenderArgs {
    /// Restrict the page to one category.
    #[arg(short = 'C', long)]
    pub category: Option<String>,

    /// Output file (`-` for stdout). Defaults to `render.output`.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file and the catalog it points to.
    Validate,
}
