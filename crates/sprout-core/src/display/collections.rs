//! Collection wrapper types for displaying groups of domain objects.

use std::fmt;

use super::datetime::HumanDate;
use crate::models::WateringEvent;

/// Newtype wrapper for displaying a plant's watering events as a markdown
/// list, in the order given.
///
/// # Examples
///
/// ```rust
/// use jiff::civil::date;
/// use sprout_core::{display::WateringLog, models::WateringEvent};
///
/// let events = vec![WateringEvent {
///     id: 1,
///     plant_id: 1,
///     date: date(2024, 1, 8),
/// }];
/// assert_eq!(WateringLog(&events).to_string(), "- January 08, 2024\n");
/// ```
pub struct WateringLog<'a>(pub &'a [WateringEvent]);

impl fmt::Display for WateringLog<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No waterings recorded yet.");
        }
        for event in self.0 {
            writeln!(f, "- {}", HumanDate(&event.date))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log() {
        assert_eq!(WateringLog(&[]).to_string(), "No waterings recorded yet.\n");
    }
}
