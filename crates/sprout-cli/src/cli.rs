//! Command-line interface definitions and handlers
//!
//! Each subcommand has a clap argument struct that converts into the core
//! parameter type, so clap attributes never leak into `sprout-core`:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker
//! ```
//!
//! [`Cli`] runs the converted request against the tracker and renders the
//! markdown produced by the core display types.

use anyhow::Result;
use clap::{Args, Subcommand};
use log::debug;
use sprout_core::{
    display::{CreateResult, RecordResult},
    params::{AddPlant, Id, RecordWatering},
    Tracker, TrackerError,
};

use crate::renderer::TerminalRenderer;

// ============================================================================
// CLI Argument Wrapper Implementations
// ============================================================================

/// Add a new plant
///
/// The plant starts out as watered today.
#[derive(Args)]
pub struct AddPlantArgs {
    /// Name of the plant
    pub name: String,
    /// How often the plant needs water, in days
    #[arg(allow_hyphen_values = true)]
    pub frequency: String,
}

impl TryFrom<AddPlantArgs> for AddPlant {
    type Error = TrackerError;

    /// The frequency stays a string until here so that non-numeric input is
    /// reported the same way as any other invalid frequency.
    fn try_from(val: AddPlantArgs) -> Result<Self, Self::Error> {
        AddPlant::parse(&val.name, Some(&val.frequency))
    }
}

/// Water a plant today
#[derive(Args)]
pub struct WaterPlantArgs {
    #[arg(help = "Unique identifier of the plant that was watered")]
    pub id: u64,
}

impl From<WaterPlantArgs> for Id {
    fn from(val: WaterPlantArgs) -> Self {
        Id { id: val.id }
    }
}

/// Show a plant with its watering history
#[derive(Args)]
pub struct PlantHistoryArgs {
    #[arg(help = "Unique identifier of the plant to show the history for")]
    pub id: u64,
}

impl From<PlantHistoryArgs> for Id {
    fn from(val: PlantHistoryArgs) -> Self {
        Id { id: val.id }
    }
}

/// Record a past watering without changing the plant's schedule
#[derive(Args)]
pub struct RecordWateringArgs {
    #[arg(help = "Unique identifier of the plant that was watered")]
    pub id: u64,
    /// Day of the watering (YYYY-MM-DD); defaults to today
    #[arg(short, long, value_name = "YYYY-MM-DD")]
    pub date: Option<String>,
}

impl From<RecordWateringArgs> for RecordWatering {
    fn from(val: RecordWateringArgs) -> Self {
        RecordWatering {
            plant_id: val.id,
            date: val.date,
        }
    }
}

/// Plant management commands
#[derive(Subcommand)]
pub enum PlantCommands {
    /// Add a new plant
    #[command(alias = "a")]
    Add(AddPlantArgs),
    /// List all plants with their watering status
    #[command(aliases = ["l", "ls"])]
    List,
    /// Water a plant today
    #[command(alias = "w")]
    Water(WaterPlantArgs),
    /// Show a plant and its watering history
    #[command(alias = "show")]
    History(PlantHistoryArgs),
    /// Record a past watering
    #[command(alias = "r")]
    Record(RecordWateringArgs),
}

// ============================================================================
// Command handlers
// ============================================================================

pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer) -> Self {
        Self { tracker, renderer }
    }

    pub async fn handle_plant_command(&self, command: PlantCommands) -> Result<()> {
        match command {
            PlantCommands::Add(args) => self.add_plant(&AddPlant::try_from(args)?).await,
            PlantCommands::List => self.show_dashboard().await,
            PlantCommands::Water(args) => self.water_plant(&args.into()).await,
            PlantCommands::History(args) => self.show_history(&args.into()).await,
            PlantCommands::Record(args) => self.record_watering(&args.into()).await,
        }
    }

    pub async fn show_dashboard(&self) -> Result<()> {
        let dashboard = self.tracker.dashboard().await?;
        debug!(
            "Dashboard with {} plants, {} alerts",
            dashboard.plants.len(),
            dashboard.alerts.len()
        );

        let mut output = String::from("# Plants\n\n");
        output.push_str(&dashboard.to_string());
        self.renderer.render(&output)
    }

    pub async fn show_stats(&self) -> Result<()> {
        let stats = self.tracker.stats().await?;
        self.renderer.render(&format!("# Stats\n\n{stats}"))
    }

    async fn add_plant(&self, params: &AddPlant) -> Result<()> {
        let plant = self.tracker.add_plant(params).await?;
        self.renderer.render(&CreateResult::new(plant).to_string())
    }

    async fn water_plant(&self, params: &Id) -> Result<()> {
        let result = self.tracker.water_plant_result(params).await?;
        self.renderer.render(&result.to_string())
    }

    async fn show_history(&self, params: &Id) -> Result<()> {
        let history = self.tracker.plant_history(params).await?;
        self.renderer.render(&history.to_string())
    }

    async fn record_watering(&self, params: &RecordWatering) -> Result<()> {
        let event = self.tracker.record_watering(params).await?;
        self.renderer.render(&RecordResult::new(event).to_string())
    }
}
