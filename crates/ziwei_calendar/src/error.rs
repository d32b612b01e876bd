//! Error types for calendar conversion and date parsing.

use thiserror::Error;

/// Errors from date parsing, lunar/solar conversion, or time-slot validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum DateError {
    /// Input string is not of the form `YYYY-M-D`.
    #[error("malformed date string: {0:?}")]
    Malformed(String),
    /// Solar date does not exist (e.g. Feb 30).
    #[error("nonexistent solar date {year}-{month}-{day}")]
    InvalidSolarDate { year: i32, month: u32, day: u32 },
    /// Lunar date does not exist in the given lunar year.
    #[error("nonexistent lunar date {year}-{month}-{day}{}", leap_marker(.leap))]
    InvalidLunarDate {
        year: i32,
        month: u32,
        day: u32,
        leap: bool,
    },
    /// Lunar month number outside 1..=12.
    #[error("lunar month {0} out of range 1-12")]
    InvalidLunarMonth(u32),
    /// Date falls outside the lunar table (lunar years 1900-2100).
    #[error("date {0} outside supported lunar range 1900-2100")]
    OutOfRange(String),
    /// Time-slot index outside 0..=12.
    #[error("time slot {0} out of range 0-12")]
    InvalidTimeSlot(u8),
    /// Hour of day outside 0..=23.
    #[error("hour {0} out of range 0-23")]
    InvalidHour(u8),
}

fn leap_marker(leap: &bool) -> &'static str {
    if *leap { " (leap)" } else { "" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lunar_display_marks_leap() {
        let e = DateError::InvalidLunarDate {
            year: 2020,
            month: 4,
            day: 30,
            leap: true,
        };
        assert_eq!(e.to_string(), "nonexistent lunar date 2020-4-30 (leap)");
    }

    #[test]
    fn slot_display() {
        assert_eq!(
            DateError::InvalidTimeSlot(13).to_string(),
            "time slot 13 out of range 0-12"
        );
    }
}
