//! Dash CLI - Command line tool for the catalog dashboard.
//!
//! Commands:
//! - `dash report` - Print the dashboard report for a category
//! - `dash categories` - List categories with product counts
//! - `dash render` - Write the dashboard as a static HTML page
//! - `dash explore` - Filter the dashboard interactively
//! - `dash config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use dash_observability::{init_tracing, LogLevel};

use commands::{ConfigArgs, RenderArgs, ReportArgs};

/// Dash CLI - Catalog analytics from the command line
#[derive(Parser)]
#[command(name = "dash")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// JSON catalog file (overrides catalog.path)
    #[arg(long, global = true)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dashboard report
    Report(ReportArgs),

    /// List categories with product counts
    Categories,

    /// Render the dashboard as an HTML page
    Render(RenderArgs),

    /// Filter the dashboard interactively
    Explore,

    /// Manage configuration
    Config(ConfigArgs),
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Report(_) => "report",
            Self::Categories => "categories",
            Self::Render(_) => "render",
            Self::Explore => "explore",
            Self::Config(_) => "config",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let command = cli.command.name();

    // Load config
    let loaded = context::Context::load(
        cli.config.as_deref(),
        cli.catalog.as_deref(),
        output.clone(),
    );
    let ctx = match loaded {
        Ok(ctx) => ctx.with_command(command),
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let level = if cli.verbose {
        LogLevel::Debug
    } else {
        ctx.config.logging.level
    };
    init_tracing(level, ctx.config.logging.format);

    tracing::debug!(command, run_id = %ctx.logger.run_id(), "starting");

    // Execute command
    let result = match cli.command {
        Commands::Report(args) => commands::report::run(args, &ctx),
        Commands::Categories => commands::categories::run(&ctx),
        Commands::Render(args) => commands::render::run(args, &ctx),
        Commands::Explore => commands::explore::run(&ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    ctx.report_metrics();

    if let Err(e) = result {
        ctx.logger
            .debug_builder("command failed")
            .field("command", command)
            .field("error", format!("{:#}", e))
            .emit();
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
