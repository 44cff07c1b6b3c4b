//! Read models assembled for the front ends.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{Plant, PlantStatus, WateringEvent};
use crate::schedule::WateringStatus;

/// `strftime` pattern for dates shown to people, e.g. "January 08, 2024".
pub const HUMAN_DATE_FORMAT: &str = "%B %d, %Y";

/// A plant together with its status on a particular day.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantOverview {
    pub id: u64,
    pub name: String,
    pub frequency: u32,
    pub last_watered: Date,
    pub due_date: Date,
    pub days_until_due: i64,
    pub status: PlantStatus,
    pub status_text: String,
    pub watered_today: bool,
    /// `last_watered` formatted with [`HUMAN_DATE_FORMAT`]
    pub last_watered_human: String,
}

impl PlantOverview {
    /// Computes the overview of `plant` as seen on `today`.
    pub fn new(plant: Plant, today: Date) -> Self {
        let WateringStatus {
            due_date,
            days_until_due,
            status,
            status_text,
            watered_today,
        } = plant.status_on(today);

        Self {
            last_watered_human: plant.last_watered.strftime(HUMAN_DATE_FORMAT).to_string(),
            id: plant.id,
            name: plant.name,
            frequency: plant.frequency,
            last_watered: plant.last_watered,
            due_date,
            days_until_due,
            status,
            status_text,
            watered_today,
        }
    }

    /// Overdue and due-today plants raise an alert.
    pub fn is_alert(&self) -> bool {
        self.status.is_alert()
    }
}

/// Every plant with its status, plus the names of plants that need attention.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Dashboard {
    /// Day the statuses were computed for
    pub today: Date,
    pub plants: Vec<PlantOverview>,
    /// Names of due-today and overdue plants, in plant order
    pub alerts: Vec<String>,
}

impl Dashboard {
    /// Builds the dashboard for `plants` as seen on `today`.
    pub fn new(plants: Vec<Plant>, today: Date) -> Self {
        let plants: Vec<PlantOverview> = plants
            .into_iter()
            .map(|plant| PlantOverview::new(plant, today))
            .collect();
        let alerts = plants
            .iter()
            .filter(|plant| plant.is_alert())
            .map(|plant| plant.name.clone())
            .collect();

        Self {
            today,
            plants,
            alerts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }
}

/// A plant's detail view: the plant, when it is next due, and every
/// recorded watering, most recent first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlantHistory {
    pub plant: Plant,
    pub due_date: Date,
    pub events: Vec<WateringEvent>,
}

impl PlantHistory {
    pub fn new(plant: Plant, events: Vec<WateringEvent>) -> Self {
        Self {
            due_date: plant.due_date(),
            plant,
            events,
        }
    }
}

/// Aggregate counts across both stores.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stats {
    pub total_plants: u64,
    pub total_waterings: u64,
}
