//! Due-date arithmetic and status classification.
//!
//! [`watering_status`] is the only piece of real logic in the tracker: it takes
//! the day a plant was last watered, its watering frequency and the current
//! date, and decides how urgently the plant needs water.
//!
//! ```rust
//! use jiff::civil::date;
//! use sprout_core::{models::PlantStatus, schedule::watering_status};
//!
//! let status = watering_status(date(2024, 1, 1), 7, date(2024, 1, 10));
//! assert_eq!(status.days_until_due, -2);
//! assert_eq!(status.status, PlantStatus::Overdue);
//! assert_eq!(status.status_text, "2 days overdue");
//! ```

use jiff::{civil::Date, Span};
use serde::{Deserialize, Serialize};

use crate::models::PlantStatus;

/// Plants due within this many days are reported as due soon.
pub const DUE_SOON_DAYS: i64 = 2;

/// Result of classifying one plant against a given day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WateringStatus {
    /// `last_watered + frequency` days
    pub due_date: Date,
    /// Signed distance from today to the due date; negative when overdue
    pub days_until_due: i64,
    pub status: PlantStatus,
    /// Human-readable summary such as "Due in 3 days"
    pub status_text: String,
    /// Whether the plant was already watered today
    pub watered_today: bool,
}

impl WateringStatus {
    /// Overdue and due-today plants raise an alert.
    pub fn is_alert(&self) -> bool {
        self.status.is_alert()
    }
}

/// The day a plant next needs water.
///
/// Saturates at the last representable date instead of overflowing.
pub fn due_date(last_watered: Date, frequency: u32) -> Date {
    Span::new()
        .try_days(i64::from(frequency))
        .map_or(Date::MAX, |span| last_watered.saturating_add(span))
}

/// Classifies a plant watered on `last_watered` every `frequency` days, as
/// seen on `today`.
pub fn watering_status(last_watered: Date, frequency: u32, today: Date) -> WateringStatus {
    let due_date = due_date(last_watered, frequency);
    let days_until_due = i64::from((due_date - today).get_days());

    let (status, status_text) = match days_until_due {
        days if days < 0 => (PlantStatus::Overdue, format!("{} days overdue", -days)),
        0 => (PlantStatus::DueToday, "Due today".to_string()),
        days if days <= DUE_SOON_DAYS => (
            PlantStatus::DueSoon,
            format!("Due in {days} day{}", if days > 1 { "s" } else { "" }),
        ),
        days => (PlantStatus::Healthy, format!("Due in {days} days")),
    };

    WateringStatus {
        due_date,
        days_until_due,
        status,
        status_text,
        watered_today: last_watered == today,
    }
}
