//! Watering status classification.

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the four watering states a plant can be in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PlantStatus {
    /// The due date has passed
    Overdue,

    /// The plant is due today
    DueToday,

    /// Due within the next two days
    DueSoon,

    /// Nothing to do for a while
    Healthy,
}

impl PlantStatus {
    /// Stable machine-readable label.
    pub fn as_str(&self) -> &'static str {
        match self {
            PlantStatus::Overdue => "overdue",
            PlantStatus::DueToday => "due_today",
            PlantStatus::DueSoon => "due_soon",
            PlantStatus::Healthy => "healthy",
        }
    }

    /// Whether a plant in this state belongs in the alert list.
    pub fn is_alert(&self) -> bool {
        matches!(self, PlantStatus::Overdue | PlantStatus::DueToday)
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// ```rust
    /// use sprout_core::models::PlantStatus;
    ///
    /// assert_eq!(PlantStatus::Overdue.with_icon(), "✗ Overdue");
    /// assert_eq!(PlantStatus::Healthy.with_icon(), "✓ Healthy");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            PlantStatus::Overdue => "✗ Overdue",
            PlantStatus::DueToday => "! Due today",
            PlantStatus::DueSoon => "➤ Due soon",
            PlantStatus::Healthy => "✓ Healthy",
        }
    }
}
