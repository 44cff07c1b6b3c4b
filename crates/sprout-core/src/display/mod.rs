//! Display formatting functions and result types.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]);
//! this module adds wrapper types for contexts where the same data needs a
//! different rendering, such as a creation confirmation or a watering log.
//! Everything renders to markdown, which the CLI prints through its terminal
//! renderer and the MCP server returns verbatim.
//!
//! ## Module Organization
//!
//! - [`collections`]: collection wrappers ([`WateringLog`])
//! - [`results`]: operation results ([`CreateResult`], [`WaterResult`],
//!   [`RecordResult`])
//! - [`datetime`]: date formatting ([`HumanDate`])
//! - [`models`]: Display implementations for domain models

pub mod collections;
pub mod datetime;
pub mod models;
pub mod results;

pub use collections::WateringLog;
pub use datetime::HumanDate;
pub use results::{CreateResult, RecordResult, WaterResult};
