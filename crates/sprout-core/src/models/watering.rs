//! Watering history records.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// An immutable record that a plant was watered on a given day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WateringEvent {
    /// Unique identifier for the event
    pub id: u64,

    /// ID of the plant that was watered
    pub plant_id: u64,

    /// Day of the watering
    pub date: Date,
}
