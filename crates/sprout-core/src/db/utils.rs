//! Row conversion helpers shared by the query modules.

use jiff::civil::Date;
use log::warn;
use rusqlite::{types::Type, Row};

use crate::{
    models::{Plant, WateringEvent},
    params::MAX_FREQUENCY_DAYS,
};

/// Parses an ISO-8601 date text, reporting the column index on failure.
fn parse_date(raw: &str, idx: usize) -> rusqlite::Result<Date> {
    // Older writers may append a time component; only the calendar day matters.
    let day = raw.get(..10).unwrap_or(raw);
    day.parse::<Date>()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Parses a non-null date column.
pub(super) fn date_column(row: &Row<'_>, idx: usize) -> rusqlite::Result<Date> {
    let raw: String = row.get(idx)?;
    parse_date(&raw, idx)
}

/// Maps `id, name, frequency, last_watered` to a [`Plant`].
///
/// Databases written by the web tracker accepted any integer frequency and
/// allowed a NULL `last_watered`. Out-of-range frequencies are clamped into
/// `1..=MAX_FREQUENCY_DAYS`; a row without a last watered day yields `None`
/// until the plant is watered again.
pub(super) fn plant_from_row(row: &Row<'_>) -> rusqlite::Result<Option<Plant>> {
    let id = row.get::<_, i64>(0)? as u64;
    let name: String = row.get(1)?;

    let Some(raw_last_watered) = row.get::<_, Option<String>>(3)? else {
        warn!("Skipping plant {id} ({name}): no last watered date");
        return Ok(None);
    };

    let stored_frequency: i64 = row.get(2)?;
    let frequency = stored_frequency.clamp(1, i64::from(MAX_FREQUENCY_DAYS)) as u32;
    if i64::from(frequency) != stored_frequency {
        warn!("Plant {id} ({name}) has frequency {stored_frequency}, using {frequency} days");
    }

    Ok(Some(Plant {
        id,
        name,
        frequency,
        last_watered: parse_date(&raw_last_watered, 3)?,
    }))
}

/// Maps `id, plant_id, date` to a [`WateringEvent`].
pub(super) fn event_from_row(row: &Row<'_>) -> rusqlite::Result<WateringEvent> {
    Ok(WateringEvent {
        id: row.get::<_, i64>(0)? as u64,
        plant_id: row.get::<_, i64>(1)? as u64,
        date: date_column(row, 2)?,
    })
}
