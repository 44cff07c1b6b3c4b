//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use sprout_core::{
    display::{CreateResult, RecordResult},
    params as core, Tracker,
};

use super::errors::to_mcp_error;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// Core parameter types are wrapped in a transparent serde container that adds
// the MCP-specific derives, so `sprout-core` stays free of rmcp concerns.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type Id = McpParams<core::Id>;
pub type AddPlant = McpParams<core::AddPlant>;
pub type RecordWatering = McpParams<core::RecordWatering>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text_result(text: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    tracker: Arc<Tracker>,
}

impl McpHandlers {
    pub fn new(tracker: Arc<Tracker>) -> Self {
        Self { tracker }
    }

    pub async fn list_plants(&self) -> McpResult {
        debug!("list_plants");

        let dashboard = self
            .tracker
            .dashboard()
            .await
            .map_err(|e| to_mcp_error("Failed to list plants", &e))?;

        text_result(format!("# Plants\n\n{dashboard}"))
    }

    pub async fn add_plant(&self, Parameters(params): Parameters<AddPlant>) -> McpResult {
        debug!("add_plant: {:?}", params);

        let plant = self
            .tracker
            .add_plant(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to add plant", &e))?;

        text_result(CreateResult::new(plant).to_string())
    }

    pub async fn water_plant(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("water_plant: {:?}", params);

        let result = self
            .tracker
            .water_plant_result(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to water plant", &e))?;

        text_result(result.to_string())
    }

    pub async fn plant_history(&self, Parameters(params): Parameters<Id>) -> McpResult {
        debug!("plant_history: {:?}", params);

        let history = self
            .tracker
            .plant_history(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to load plant history", &e))?;

        text_result(history.to_string())
    }

    pub async fn record_watering(
        &self,
        Parameters(params): Parameters<RecordWatering>,
    ) -> McpResult {
        debug!("record_watering: {:?}", params);

        let event = self
            .tracker
            .record_watering(params.as_ref())
            .await
            .map_err(|e| to_mcp_error("Failed to record watering", &e))?;

        text_result(RecordResult::new(event).to_string())
    }

    pub async fn stats(&self) -> McpResult {
        debug!("stats");

        let stats = self
            .tracker
            .stats()
            .await
            .map_err(|e| to_mcp_error("Failed to compute stats", &e))?;

        text_result(format!("# Stats\n\n{stats}"))
    }
}
