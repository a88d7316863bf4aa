//! Row keys of the comparison grid and their chronological ordering.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};

use chrono::NaiveDate;

/// Composite row key: the calendar date label and hour-bucket label exactly as they appear in
/// provider listings, e.g. `07/10` and `14시대`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlotKey {
    pub date: String,
    pub hour: String,
}

impl SlotKey {
    pub fn new(date: impl Into<String>, hour: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            hour: hour.into(),
        }
    }

    /// Leading numeric prefix of the hour-bucket label: `14시대` → 14. Labels without one
    /// order as hour 0.
    pub fn hour_number(&self) -> u32 {
        let digits: String = self.hour.chars().take_while(char::is_ascii_digit).collect();
        digits.parse().unwrap_or(0)
    }

    /// Calendar date of the label. `MM/DD` labels carry no year of their own and are resolved
    /// against the caller's reference year; full `YYYY-MM-DD` labels are taken as-is.
    fn calendar_date(&self, year: i32) -> Option<NaiveDate> {
        if let Ok(date) = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d") {
            return Some(date);
        }
        let (month, day) = self.date.split_once('/')?;
        NaiveDate::from_ymd_opt(year, month.parse().ok()?, day.parse().ok()?)
    }

    /// Total order over row keys: ascending calendar date, then ascending hour number.
    /// Unparsable date labels order ahead of every parsable one.
    pub fn chronological(&self, other: &SlotKey, year: i32) -> Ordering {
        (self.calendar_date(year), self.hour_number())
            .cmp(&(other.calendar_date(year), other.hour_number()))
    }
}

impl Display for SlotKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.hour)
    }
}
