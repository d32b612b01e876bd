//! Two-hour time slots (shichen) used for birth times.
//!
//! Slots 1-11 cover the eleven two-hour windows from 01:00 to 23:00.
//! The midnight window is split: slot 0 is 00:00-01:00 (early rat) and
//! slot 12 is 23:00-00:00 (late rat). Both count as the rat branch.

use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Number of distinct slots, the two rat halves counted separately.
pub const TIME_SLOT_COUNT: u8 = 13;

const HOUR_RANGES: [&str; 13] = [
    "00:00~01:00",
    "01:00~03:00",
    "03:00~05:00",
    "05:00~07:00",
    "07:00~09:00",
    "09:00~11:00",
    "11:00~13:00",
    "13:00~15:00",
    "15:00~17:00",
    "17:00~19:00",
    "19:00~21:00",
    "21:00~23:00",
    "23:00~00:00",
];

/// A validated birth time slot in 0..=12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct TimeSlot(u8);

impl TimeSlot {
    /// Early rat (00:00-01:00).
    pub const EARLY_RAT: TimeSlot = TimeSlot(0);
    /// Late rat (23:00-00:00).
    pub const LATE_RAT: TimeSlot = TimeSlot(12);

    pub fn new(index: u8) -> Result<Self, DateError> {
        if index < TIME_SLOT_COUNT {
            Ok(Self(index))
        } else {
            Err(DateError::InvalidTimeSlot(index))
        }
    }

    /// Raw slot index 0..=12.
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Branch offset used when counting houses: the late rat counts as 0.
    pub const fn counting_offset(self) -> u8 {
        if self.0 == 12 { 0 } else { self.0 }
    }

    /// Whether this is the late-rat slot that belongs to the next calendar day's lunar date.
    pub const fn is_late_rat(self) -> bool {
        self.0 == 12
    }

    /// Clock range covered, e.g. `"11:00~13:00"`.
    pub const fn hour_range(self) -> &'static str {
        HOUR_RANGES[self.0 as usize]
    }

    /// All 13 slots in order.
    pub fn all() -> impl Iterator<Item = TimeSlot> {
        (0..TIME_SLOT_COUNT).map(TimeSlot)
    }
}

impl TryFrom<u8> for TimeSlot {
    type Error = DateError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<TimeSlot> for u8 {
    fn from(slot: TimeSlot) -> u8 {
        slot.0
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.0, self.hour_range())
    }
}

/// Map an hour of day (0-23) to its time slot.
///
/// Hour 23 is the late rat (slot 12); every other hour maps to `(hour + 1) / 2`.
pub fn hour_to_slot(hour: u8) -> Result<TimeSlot, DateError> {
    match hour {
        23 => Ok(TimeSlot::LATE_RAT),
        0..=22 => Ok(TimeSlot((hour + 1) / 2)),
        _ => Err(DateError::InvalidHour(hour)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_hours() {
        assert_eq!(hour_to_slot(0).unwrap().index(), 0);
        assert_eq!(hour_to_slot(23).unwrap().index(), 12);
    }

    #[test]
    fn two_hour_windows() {
        assert_eq!(hour_to_slot(1).unwrap().index(), 1);
        assert_eq!(hour_to_slot(2).unwrap().index(), 1);
        assert_eq!(hour_to_slot(11).unwrap().index(), 6);
        assert_eq!(hour_to_slot(12).unwrap().index(), 6);
        assert_eq!(hour_to_slot(22).unwrap().index(), 11);
    }

    #[test]
    fn hour_out_of_range() {
        assert_eq!(hour_to_slot(24), Err(DateError::InvalidHour(24)));
    }

    #[test]
    fn slot_out_of_range() {
        assert_eq!(TimeSlot::new(13), Err(DateError::InvalidTimeSlot(13)));
    }

    #[test]
    fn late_rat_counts_as_zero() {
        assert_eq!(TimeSlot::LATE_RAT.counting_offset(), 0);
        assert_eq!(TimeSlot::EARLY_RAT.counting_offset(), 0);
        assert!(TimeSlot::LATE_RAT.is_late_rat());
        assert!(!TimeSlot::EARLY_RAT.is_late_rat());
    }

    #[test]
    fn hour_range_noon() {
        assert_eq!(TimeSlot::new(6).unwrap().hour_range(), "11:00~13:00");
    }

    #[test]
    fn all_has_thirteen() {
        assert_eq!(TimeSlot::all().count(), 13);
    }
}
