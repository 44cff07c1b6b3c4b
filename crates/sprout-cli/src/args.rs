use std::path::PathBuf;

use clap::{Parser, Subcommand};
use jiff::civil::Date;

use crate::cli::PlantCommands;

/// Keep track of when your plants need water
///
/// Sprout records each plant with how often it needs watering, remembers
/// every watering, and tells you which plants are overdue, due today or due
/// soon. Run it without a subcommand to see the dashboard, or start the MCP
/// (Model Context Protocol) server to let an AI assistant manage your plants.
#[derive(Parser)]
#[command(version, about, name = "sprout")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/sprout/sprout.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Pretend today is this date (YYYY-MM-DD) instead of reading the clock
    #[arg(long, global = true, value_name = "YYYY-MM-DD")]
    pub today: Option<Date>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Sprout CLI
///
/// - `plant`: add, list, water and inspect plants
/// - `stats`: totals across the whole collection
/// - `serve`: start the MCP server for AI assistant integration
#[derive(Subcommand)]
pub enum Commands {
    /// Manage plants
    #[command(alias = "p")]
    Plant {
        #[command(subcommand)]
        command: PlantCommands,
    },
    /// Show how many plants and waterings are recorded
    Stats,
    /// Start the MCP server
    Serve,
}
