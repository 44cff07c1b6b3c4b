//! Parameter structures for tracker operations
//!
//! These are the typed requests every front end (CLI, MCP) builds before
//! calling into the core. They carry no framework derives beyond serde and an
//! optional `JsonSchema`, so each interface wraps them with its own argument
//! parsing:
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (validated here)│
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Validation happens in this module, before a request reaches the stores:
//! a request that fails validation never opens a transaction.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use jiff::civil::Date;

use crate::error::{Result, TrackerError};

/// Largest accepted watering frequency, in days.
pub const MAX_FREQUENCY_DAYS: u32 = 36_500;

/// Generic parameters for operations requiring just a plant ID.
///
/// Used for water_plant, plant_history and plant_status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct Id {
    /// The ID of the plant to operate on
    pub id: u64,
}

/// Parameters for adding a new plant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct AddPlant {
    /// Name of the plant (required, non-empty)
    pub name: String,
    /// How often the plant needs water, in days (must be positive)
    pub frequency: i64,
}

impl AddPlant {
    /// Builds a request from untyped form input, where the frequency may be
    /// missing or not a number at all.
    ///
    /// ```rust
    /// use sprout_core::params::AddPlant;
    ///
    /// let params = AddPlant::parse("Fern", Some(" 3 "))?;
    /// assert_eq!(params.frequency, 3);
    ///
    /// assert!(AddPlant::parse("Fern", Some("often")).is_err());
    /// assert!(AddPlant::parse("Fern", None).is_err());
    /// # Ok::<(), sprout_core::TrackerError>(())
    /// ```
    pub fn parse(name: &str, frequency: Option<&str>) -> Result<Self> {
        let raw = frequency.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(TrackerError::invalid_input("frequency").with_reason("Frequency is required"));
        }
        let frequency = raw.parse::<i64>().map_err(|_| {
            TrackerError::invalid_input("frequency")
                .with_reason(format!("'{raw}' is not a whole number of days"))
        })?;

        Ok(Self {
            name: name.to_string(),
            frequency,
        })
    }

    /// Checks the request and returns the trimmed name and the frequency.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When the name is blank
    /// * `TrackerError::InvalidInput` - When the frequency is not in
    ///   `1..=MAX_FREQUENCY_DAYS`
    pub fn validate(&self) -> Result<(String, u32)> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(TrackerError::invalid_input("name").with_reason("Name must not be empty"));
        }

        if self.frequency <= 0 {
            return Err(TrackerError::invalid_input("frequency").with_reason(format!(
                "Frequency must be a positive number of days, got {}",
                self.frequency
            )));
        }

        let frequency = u32::try_from(self.frequency)
            .ok()
            .filter(|days| *days <= MAX_FREQUENCY_DAYS)
            .ok_or_else(|| {
                TrackerError::invalid_input("frequency").with_reason(format!(
                    "Frequency must be at most {MAX_FREQUENCY_DAYS} days, got {}",
                    self.frequency
                ))
            })?;

        Ok((name.to_string(), frequency))
    }
}

/// Parameters for back-filling a watering event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct RecordWatering {
    /// ID of the plant that was watered
    pub plant_id: u64,
    /// Day of the watering as YYYY-MM-DD; defaults to today
    pub date: Option<String>,
}

impl RecordWatering {
    /// Resolves the watering day against `today`.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When the date does not parse
    /// * `TrackerError::InvalidInput` - When the date lies after `today`
    pub fn validate(&self, today: Date) -> Result<Date> {
        let Some(raw) = self.date.as_deref().map(str::trim) else {
            return Ok(today);
        };

        let date = raw.parse::<Date>().map_err(|e| {
            TrackerError::invalid_input("date")
                .with_reason(format!("'{raw}' is not a YYYY-MM-DD date: {e}"))
        })?;

        if date > today {
            return Err(TrackerError::invalid_input("date")
                .with_reason(format!("{date} is in the future (today is {today})")));
        }

        Ok(date)
    }
}
