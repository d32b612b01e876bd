//! Calendar support for Zi Wei Dou Shu charts.
//!
//! This crate provides:
//! - A table-driven Chinese lunisolar calendar (lunar years 1900-2100)
//!   behind the [`CalendarOracle`] trait
//! - Two-hour birth time slots and the hour → slot mapping
//! - Solar date parsing and the western sun sign

pub mod error;
pub mod lunar;
pub mod solar;
pub mod time_slot;

pub use chrono::NaiveDate;
pub use error::DateError;
pub use lunar::{
    CalendarOracle, FIRST_LUNAR_YEAR, LAST_LUNAR_YEAR, LunarDate, TableCalendar, leap_month,
    leap_month_days, lunar_to_solar, month_days, solar_to_lunar, year_days,
};
pub use solar::{
    ALL_WESTERN_SIGNS, WesternSign, parse_date, parse_ymd, solar_date, western_sign,
    western_sign_of,
};
pub use time_slot::{TIME_SLOT_COUNT, TimeSlot, hour_to_slot};
