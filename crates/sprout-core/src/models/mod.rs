//! Data models for plants and their watering history.
//!
//! This module contains the domain models persisted by the stores
//! ([`Plant`], [`WateringEvent`]) and the read models the tracker assembles
//! for the front ends ([`PlantOverview`], [`Dashboard`], [`PlantHistory`],
//! [`Stats`]). Display implementations live in [`crate::display::models`] so
//! that data structures and presentation stay separate.
//!
//! # Display Features
//!
//! All Display implementations produce markdown:
//!
//! - **Plant**: header with ID and name, frequency, last watered and due date
//! - **PlantOverview**: one compact block per plant with a status icon
//!   (✗ Overdue, ! Due today, ➤ Due soon, ✓ Healthy)
//! - **Dashboard**: alert section followed by every plant overview
//! - **PlantHistory**: plant header followed by the watering log
//!
//! # Examples
//!
//! ```rust
//! use jiff::civil::date;
//! use sprout_core::models::{Plant, PlantOverview, PlantStatus};
//!
//! let plant = Plant {
//!     id: 1,
//!     name: "Fern".to_string(),
//!     frequency: 3,
//!     last_watered: date(2024, 5, 1),
//! };
//!
//! let overview = PlantOverview::new(plant, date(2024, 5, 3));
//! assert_eq!(overview.status, PlantStatus::DueSoon);
//! assert_eq!(overview.status_text, "Due in 1 day");
//! assert_eq!(overview.last_watered_human, "May 01, 2024");
//! ```

pub mod overview;
pub mod plant;
pub mod status;
pub mod watering;


pub use overview::{Dashboard, PlantHistory, PlantOverview, Stats, HUMAN_DATE_FORMAT};
pub use plant::Plant;
pub use status::PlantStatus;
pub use watering::WateringEvent;
