//! Plant model definition and related functionality.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use crate::schedule::{self, WateringStatus};

/// A tracked plant and its watering schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Plant {
    /// Unique identifier for the plant
    pub id: u64,

    /// Display name (never empty)
    pub name: String,

    /// Days between waterings (always positive)
    pub frequency: u32,

    /// Day the plant was last watered; the creation day for new plants
    pub last_watered: Date,
}

impl Plant {
    /// Day the plant next needs water.
    pub fn due_date(&self) -> Date {
        schedule::due_date(self.last_watered, self.frequency)
    }

    /// Classifies this plant as seen on `today`.
    pub fn status_on(&self, today: Date) -> WateringStatus {
        schedule::watering_status(self.last_watered, self.frequency, today)
    }
}
