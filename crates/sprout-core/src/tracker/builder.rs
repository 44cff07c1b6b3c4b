//! Builder for creating and configuring Tracker instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use log::debug;
use tokio::task;

use super::Tracker;
use crate::{
    clock::{Clock, SystemClock},
    db::Database,
    error::{Result, TrackerError},
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
    clock: Option<Arc<dyn Clock>>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/sprout/sprout.db` or `~/.local/share/sprout/sprout.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.database_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Replaces the system clock, e.g. with a
    /// [`FixedClock`](crate::clock::FixedClock).
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the database directory cannot be
    /// created
    /// Returns `TrackerError::Database` if database initialization fails
    pub async fn build(self) -> Result<Tracker> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| TrackerError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        debug!("Initializing database at {}", db_path.display());
        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), TrackerError>(())
        })
        .await
        .map_err(TrackerError::join)??;

        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        Ok(Tracker::new(db_path, clock))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("sprout")
            .place_data_file("sprout.db")
            .map_err(|e| TrackerError::XdgDirectory(e.to_string()))
    }
}
