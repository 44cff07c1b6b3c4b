//! MCP server implementation for Sprout
//!
//! Exposes the plant tracker over the Model Context Protocol so an AI
//! assistant can list plants, record waterings and read history. Tool
//! results are the same markdown the CLI prints.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use sprout_core::Tracker;
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{AddPlant, Id, McpResult, RecordWatering};

/// MCP server for Sprout
#[derive(Clone)]
pub struct SproutMcpServer {
    tracker: Arc<Tracker>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SproutMcpServer {
    /// Create a new Sprout MCP server
    pub fn new(tracker: Tracker) -> Self {
        Self {
            tracker: Arc::new(tracker),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.tracker.clone())
    }

    #[tool(
        name = "list_plants",
        description = "List every plant with its watering status: due date, days until due, and whether it is overdue, due today, due soon or healthy. Plants that need water now are listed first under 'Needs water'."
    )]
    async fn list_plants(&self) -> McpResult {
        self.handlers().list_plants().await
    }

    #[tool(
        name = "add_plant",
        description = "Add a plant to track. Provide a non-empty name and frequency, the number of days between waterings (a positive whole number). The plant is recorded as watered today. Returns the new plant ID."
    )]
    async fn add_plant(&self, params: Parameters<AddPlant>) -> McpResult {
        self.handlers().add_plant(params).await
    }

    #[tool(
        name = "water_plant",
        description = "Mark a plant as watered today. Updates its last watered date and appends an entry to its watering history, then returns the plant's new status."
    )]
    async fn water_plant(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().water_plant(params).await
    }

    #[tool(
        name = "plant_history",
        description = "Show a plant's details, next due date, and its full watering history, most recent first."
    )]
    async fn plant_history(&self, params: Parameters<Id>) -> McpResult {
        self.handlers().plant_history(params).await
    }

    #[tool(
        name = "record_watering",
        description = "Back-fill a watering that happened earlier. Provide plant_id and optionally date (YYYY-MM-DD, defaults to today, must not be in the future). Only the history changes; the plant's schedule stays as it is."
    )]
    async fn record_watering(&self, params: Parameters<RecordWatering>) -> McpResult {
        self.handlers().record_watering(params).await
    }

    #[tool(
        name = "stats",
        description = "Count the plants being tracked and the waterings recorded across all of them."
    )]
    async fn stats(&self) -> McpResult {
        self.handlers().stats().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for SproutMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "sprout".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(r#"Sprout keeps track of when house plants need water.

## Core Concepts
- **Plant**: a name plus a watering frequency in days
- **Watering history**: one entry per watering, never edited
- **Status**: overdue, due today, due soon (within 2 days) or healthy, computed from the last watering and the frequency

## Workflow
1. `list_plants` to see what needs water; plants under 'Needs water' are due today or overdue
2. `water_plant` after watering a plant
3. `add_plant` for a new plant, `plant_history` to look back, `record_watering` to add a watering that was missed
4. `stats` for totals"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: SproutMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Sprout MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
