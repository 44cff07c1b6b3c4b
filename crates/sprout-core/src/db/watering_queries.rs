//! Watering history operations and queries.
//!
//! The history is append-only: events are inserted and read, never updated or
//! deleted.

use jiff::civil::Date;
use log::debug;
use rusqlite::{params, Connection};

use super::utils::event_from_row;
use crate::{
    error::{DatabaseResultExt, Result, TrackerError},
    models::{Plant, WateringEvent},
};

const INSERT_EVENT_SQL: &str = "INSERT INTO watering_history (plant_id, date) VALUES (?1, ?2)";
const SELECT_PLANT_EVENTS_SQL: &str = "SELECT id, plant_id, date FROM watering_history \
     WHERE plant_id = ?1 ORDER BY date DESC, id DESC";
const COUNT_EVENTS_SQL: &str = "SELECT COUNT(*) FROM watering_history";

impl super::Database {
    /// Waters a plant: sets its last watered day to `today` and appends a
    /// history event, both in one transaction.
    ///
    /// Returns the updated plant and the new event. Nothing is written when
    /// the plant does not exist.
    pub fn water_plant(&mut self, plant_id: u64, today: Date) -> Result<(Plant, WateringEvent)> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        Self::set_last_watered(&tx, plant_id, today)?;
        let event = Self::insert_event(&tx, plant_id, today)?;
        let plant = Self::find_plant(&tx, plant_id)?
            .ok_or(TrackerError::PlantNotFound { id: plant_id })?;

        tx.commit().db_context("Failed to commit transaction")?;
        debug!("Watered plant {plant_id} on {today} (event {})", event.id);

        Ok((plant, event))
    }

    /// Appends a watering event for `date` without touching the plant.
    pub fn record_watering(&mut self, plant_id: u64, date: Date) -> Result<WateringEvent> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        if !Self::plant_exists(&tx, plant_id)? {
            return Err(TrackerError::PlantNotFound { id: plant_id });
        }

        let event = Self::insert_event(&tx, plant_id, date)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(event)
    }

    /// Lists a plant's watering events, most recent first.
    pub fn list_watering_events(&self, plant_id: u64) -> Result<Vec<WateringEvent>> {
        if !Self::plant_exists(&self.connection, plant_id)? {
            return Err(TrackerError::PlantNotFound { id: plant_id });
        }

        let mut stmt = self
            .connection
            .prepare(SELECT_PLANT_EVENTS_SQL)
            .db_context("Failed to prepare query")?;

        let events = stmt
            .query_map(params![plant_id as i64], event_from_row)
            .db_context("Failed to query watering events")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch watering events")?;

        Ok(events)
    }

    /// Number of watering events across all plants.
    pub fn count_watering_events(&self) -> Result<u64> {
        let count: i64 = self
            .connection
            .query_row(COUNT_EVENTS_SQL, [], |row| row.get(0))
            .db_context("Failed to count watering events")?;
        Ok(count as u64)
    }

    fn insert_event(conn: &Connection, plant_id: u64, date: Date) -> Result<WateringEvent> {
        conn.execute(INSERT_EVENT_SQL, params![plant_id as i64, date.to_string()])
            .db_context("Failed to insert watering event")?;

        Ok(WateringEvent {
            id: conn.last_insert_rowid() as u64,
            plant_id,
            date,
        })
    }
}
