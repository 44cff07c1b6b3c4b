//! Database operations and SQLite management for plants and watering history.
//!
//! This module provides the low-level stores behind the tracker. It handles
//! the SQLite connection, schema bootstrapping, and one query module per
//! table. Every mutating operation runs inside its own transaction.

use std::path::Path;

use log::debug;
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod migrations;
pub mod plant_queries;
pub mod utils;
pub mod watering_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        debug!("Opening database at {}", path.as_ref().display());
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
