//! Core library for the Sprout plant-watering tracker.
//!
//! This crate records plants and their watering history in SQLite and works
//! out, for every plant, whether it is healthy, due soon, due today or
//! overdue.
//!
//! # Layers
//!
//! - **Status calculation** ([`schedule`]): a pure function of the last
//!   watered day, the frequency and today's date
//! - **Stores** ([`db`]): plant and watering-history tables behind
//!   [`Database`]
//! - **Tracker** ([`tracker`]): the async handle front ends use; owns the
//!   database path and an injectable [`clock::Clock`]
//! - **Display** ([`display`]): markdown rendering shared by the CLI and the
//!   MCP server
//!
//! # Quick Start
//!
//! ```rust
//! use jiff::civil::date;
//! use sprout_core::{clock::FixedClock, params::{AddPlant, Id}, PlantStatus, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path("plants.db")
//!     .with_clock(FixedClock(date(2024, 1, 1)))
//!     .build()
//!     .await?;
//!
//! let plant = tracker
//!     .add_plant(&AddPlant {
//!         name: "Basil".to_string(),
//!         frequency: 2,
//!     })
//!     .await?;
//!
//! let status = tracker.plant_status(&Id { id: plant.id }).await?;
//! assert_eq!(status.status, PlantStatus::DueSoon);
//! # Ok(())
//! # }
//! ```

pub mod clock;
pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod schedule;
pub mod tracker;

// Re-export commonly used types
pub use clock::{Clock, FixedClock, SystemClock};
pub use db::Database;
pub use display::{CreateResult, HumanDate, RecordResult, WaterResult, WateringLog};
pub use error::{Result, TrackerError};
pub use models::{
    Dashboard, Plant, PlantHistory, PlantOverview, PlantStatus, Stats, WateringEvent,
};
pub use params::{AddPlant, Id, RecordWatering};
pub use schedule::{watering_status, WateringStatus};
pub use tracker::{Tracker, TrackerBuilder};
