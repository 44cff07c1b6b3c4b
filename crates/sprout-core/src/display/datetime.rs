//! Date display utilities.

use std::fmt;

use jiff::civil::Date;

use crate::models::HUMAN_DATE_FORMAT;

/// A wrapper around a calendar `Date` that formats it for people, e.g.
/// "January 08, 2024".
pub struct HumanDate<'a>(pub &'a Date);

impl fmt::Display for HumanDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime(HUMAN_DATE_FORMAT))
    }
}
