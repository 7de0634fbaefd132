//! Storefront CLI - Local preview tool for the storefront homepage.
//!
//! Commands:
//! - `storefront render` - Render a catalog payload to HTML
//! - `storefront breakpoints` - Show the responsive slider table
//! - `storefront time-left` - Remaining time until a deal deadline

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{BreakpointsArgs, RenderArgs, TimeLeftArgs};

/// Storefront CLI - Preview the storefront homepage locally
#[derive(Parser)]
#[command(name = "storefront")]
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

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the homepage from a catalog payload
    Render(RenderArgs),

    /// Show carousel breakpoints
    Breakpoints(BreakpointsArgs),

    /// Time remaining until a deadline
    TimeLeft(TimeLeftArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let config_path = cli.config.as_deref();
    let ctx = match context::Context::load(config_path, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Breakpoints(args) => commands::breakpoints::run(args, &ctx).await,
        Commands::TimeLeft(args) => commands::time_left::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
