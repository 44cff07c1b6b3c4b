//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use super::datetime::HumanDate;
use crate::models::{Plant, PlantOverview, WateringEvent};

/// Wrapper type for displaying the result of create operations.
///
/// ```rust
/// use jiff::civil::date;
/// use sprout_core::{display::CreateResult, models::Plant};
///
/// let plant = Plant {
///     id: 1,
///     name: "Aloe".to_string(),
///     frequency: 14,
///     last_watered: date(2024, 2, 1),
/// };
///
/// let output = CreateResult::new(plant).to_string();
/// assert!(output.starts_with("Added plant with ID: 1"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
}

impl<T> CreateResult<T> {
    /// Create a new CreateResult wrapper.
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for CreateResult<Plant> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Added plant with ID: {}", self.resource.id)?;
        writeln!(f)?;
        write!(f, "{}", self.resource)
    }
}

/// Outcome of the water action: the plant's fresh status and the history
/// entry that was appended.
#[derive(Debug, Clone)]
pub struct WaterResult {
    pub overview: PlantOverview,
    pub event: WateringEvent,
}

impl WaterResult {
    pub fn new(overview: PlantOverview, event: WateringEvent) -> Self {
        Self { overview, event }
    }
}

/// Outcome of back-filling a watering: the event that was appended.
///
/// ```rust
/// use jiff::civil::date;
/// use sprout_core::{display::RecordResult, models::WateringEvent};
///
/// let event = WateringEvent {
///     id: 4,
///     plant_id: 2,
///     date: date(2024, 2, 20),
/// };
/// assert_eq!(
///     RecordResult::new(event).to_string(),
///     "Recorded watering of plant 2 on February 20, 2024\n"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct RecordResult {
    pub event: WateringEvent,
}

impl RecordResult {
    pub fn new(event: WateringEvent) -> Self {
        Self { event }
    }
}

impl fmt::Display for RecordResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Recorded watering of plant {} on {}",
            self.event.plant_id,
            HumanDate(&self.event.date)
        )
    }
}

impl fmt::Display for WaterResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Watered '{}' (ID: {}) on {}",
            self.overview.name,
            self.overview.id,
            HumanDate(&self.event.date)
        )?;
        writeln!(f)?;
        write!(f, "{}", self.overview)
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_water_result_display() {
        let plant = Plant {
            id: 2,
            name: "Pothos".to_string(),
            frequency: 7,
            last_watered: date(2024, 4, 10),
        };
        let event = WateringEvent {
            id: 11,
            plant_id: 2,
            date: date(2024, 4, 10),
        };

        let output = WaterResult::new(PlantOverview::new(plant, date(2024, 4, 10)), event).to_string();
        assert!(output.starts_with("Watered 'Pothos' (ID: 2) on April 10, 2024"));
        assert!(output.contains("Due in 7 days"));
        assert!(output.contains("(today)"));
    }

    #[test]
    fn test_record_result_display() {
        let event = WateringEvent {
            id: 3,
            plant_id: 9,
            date: date(2023, 12, 31),
        };

        assert_eq!(
            RecordResult::new(event).to_string(),
            "Recorded watering of plant 9 on December 31, 2023\n"
        );
    }
}
