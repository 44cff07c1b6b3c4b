//! High-level tracker API for plants and their watering history.
//!
//! [`Tracker`] is the handle every front end receives. It owns the database
//! path and the clock, and runs each store call on a blocking task so async
//! callers (the MCP server) never stall the runtime.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │    Handlers     │    │   Operations    │    │    Database     │
//! │  (dashboard,    │───▶│ (plant_ops,     │───▶│   (via db/)     │
//! │ history, stats) │    │  watering_ops)  │    │                 │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! ## Submodules
//!
//! - [`builder`]: creates [`Tracker`] instances
//! - [`plant_ops`]: add, get, list and mark plants as watered
//! - [`watering_ops`]: water plants and read the watering history
//! - [`handlers`]: the user-facing views (dashboard, history, stats)
//!
//! # Usage
//!
//! ```rust,no_run
//! use sprout_core::{params::AddPlant, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path("/tmp/plants.db")
//!     .build()
//!     .await?;
//!
//! tracker
//!     .add_plant(&AddPlant {
//!         name: "Fern".to_string(),
//!         frequency: 3,
//!     })
//!     .await?;
//!
//! let dashboard = tracker.dashboard().await?;
//! println!("{dashboard}");
//! # Ok(())
//! # }
//! ```

use std::{path::PathBuf, sync::Arc};

use jiff::civil::Date;
use tokio::task;

use crate::{
    clock::Clock,
    db::Database,
    error::{Result, TrackerError},
};

pub mod builder;
pub mod handlers;
pub mod plant_ops;
pub mod watering_ops;


pub use builder::TrackerBuilder;

/// Main tracker interface for managing plants.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
    pub(crate) clock: Arc<dyn Clock>,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf, clock: Arc<dyn Clock>) -> Self {
        Self { db_path, clock }
    }

    /// The date this tracker considers to be today.
    pub fn today(&self) -> Date {
        self.clock.today()
    }

    /// Runs `f` against a freshly opened database on the blocking pool.
    pub(crate) async fn with_database<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            f(&mut db)
        })
        .await
        .map_err(TrackerError::join)?
    }
}
