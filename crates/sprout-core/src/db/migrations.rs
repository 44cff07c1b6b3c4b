//! Database schema initialization.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    ///
    /// The schema only uses `IF NOT EXISTS` statements, so running it against
    /// an existing database (including one written by the original web
    /// tracker) only adds what is missing.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Foreign keys are per-connection in SQLite
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        Ok(())
    }
}
