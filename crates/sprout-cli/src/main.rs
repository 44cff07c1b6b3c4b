//! Sprout CLI Application
//!
//! Command-line interface and MCP server for the sprout plant-watering
//! tracker.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, SproutMcpServer};
use renderer::TerminalRenderer;
use sprout_core::{FixedClock, TrackerBuilder};
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        today,
        command,
    } = Args::parse();

    let mut builder = TrackerBuilder::new();
    if let Some(path) = database_file {
        builder = builder.with_database_path(path);
    }
    if let Some(today) = today {
        builder = builder.with_clock(FixedClock(today));
    }

    let tracker = builder
        .build()
        .await
        .context("Failed to initialize tracker")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Sprout started (today is {})", tracker.today());

    match command {
        Some(Plant { command }) => {
            Cli::new(tracker, renderer)
                .handle_plant_command(command)
                .await
        }
        Some(Stats) => Cli::new(tracker, renderer).show_stats().await,
        Some(Serve) => {
            info!("Starting Sprout MCP server");
            run_stdio_server(SproutMcpServer::new(tracker))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(tracker, renderer).show_dashboard().await,
    }
}
