//! Plant CRUD operations and queries.

use jiff::civil::Date;
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

use super::utils::plant_from_row;
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::Plant,
};

const INSERT_PLANT_SQL: &str =
    "INSERT INTO plant (name, frequency, last_watered) VALUES (?1, ?2, ?3)";
const SELECT_PLANT_SQL: &str =
    "SELECT id, name, frequency, last_watered FROM plant WHERE id = ?1";
const SELECT_ALL_PLANTS_SQL: &str =
    "SELECT id, name, frequency, last_watered FROM plant ORDER BY id";
const CHECK_PLANT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM plant WHERE id = ?1)";
const UPDATE_LAST_WATERED_SQL: &str = "UPDATE plant SET last_watered = ?1 WHERE id = ?2";
const COUNT_PLANTS_SQL: &str = "SELECT COUNT(*) FROM plant";

impl super::Database {
    /// Creates a new plant last watered on `today`.
    ///
    /// Callers are expected to have validated `name` and `frequency`; the
    /// schema's CHECK constraints reject anything that slips through.
    pub fn create_plant(&mut self, name: &str, frequency: u32, today: Date) -> Result<Plant> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(INSERT_PLANT_SQL, params![name, frequency, today.to_string()])
            .db_context("Failed to insert plant")?;

        let id = tx.last_insert_rowid() as u64;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Created plant {id} ({name}, every {frequency} days)");

        Ok(Plant {
            id,
            name: name.into(),
            frequency,
            last_watered: today,
        })
    }

    /// Retrieves a plant by its ID.
    pub fn get_plant(&self, id: u64) -> Result<Option<Plant>> {
        Self::find_plant(&self.connection, id)
    }

    /// Retrieves a plant by its ID, failing when it does not exist.
    pub fn require_plant(&self, id: u64) -> Result<Plant> {
        self.get_plant(id)?
            .ok_or(TrackerError::PlantNotFound { id })
    }

    /// Lists every plant in creation order.
    ///
    /// Legacy rows without a last watered day are left out.
    pub fn list_plants(&self) -> Result<Vec<Plant>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_PLANTS_SQL)
            .db_context("Failed to prepare query")?;

        let plants = stmt
            .query_map([], plant_from_row)
            .db_context("Failed to query plants")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch plants")?;

        Ok(plants.into_iter().flatten().collect())
    }

    /// Sets a plant's last watered day without recording a history event.
    pub fn mark_watered(&mut self, id: u64, today: Date) -> Result<Plant> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        Self::set_last_watered(&tx, id, today)?;
        let plant = Self::find_plant(&tx, id)?.ok_or(TrackerError::PlantNotFound { id })?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(plant)
    }

    /// Number of plants in the store.
    pub fn count_plants(&self) -> Result<u64> {
        let count: i64 = self
            .connection
            .query_row(COUNT_PLANTS_SQL, [], |row| row.get(0))
            .db_context("Failed to count plants")?;
        Ok(count as u64)
    }

    pub(super) fn find_plant(conn: &Connection, id: u64) -> Result<Option<Plant>> {
        let plant = conn
            .query_row(SELECT_PLANT_SQL, params![id as i64], plant_from_row)
            .optional()
            .db_context("Failed to query plant")?;
        Ok(plant.flatten())
    }

    pub(super) fn plant_exists(conn: &Connection, id: u64) -> Result<bool> {
        conn.query_row(CHECK_PLANT_EXISTS_SQL, params![id as i64], |row| row.get(0))
            .db_context("Failed to check plant existence")
    }

    /// Fails with `PlantNotFound` when no row was updated, leaving the
    /// surrounding transaction to roll back.
    pub(super) fn set_last_watered(conn: &Connection, id: u64, date: Date) -> Result<()> {
        let rows = conn
            .execute(UPDATE_LAST_WATERED_SQL, params![date.to_string(), id as i64])
            .db_context("Failed to update last watered date")?;

        if rows == 0 {
            return Err(TrackerError::PlantNotFound { id });
        }
        Ok(())
    }
}
