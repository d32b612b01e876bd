//! Chinese lunisolar calendar: month-length table and solar/lunar conversion.
//!
//! Each year from 1900 to 2100 is packed into one `u32`:
//! - bits 0-3: leap month number (0 = no leap month)
//! - bit 16: the leap month has 30 days
//! - bit `16 - m` (for month `m` in 1..=12): month `m` has 30 days
//!
//! Day 0 of the count is solar 1900-01-31, lunar 1900-01-01.
//!
//! Clean-room: month lengths follow the published Purple Mountain
//! Observatory almanac tables, public domain.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// First lunar year covered by the table.
pub const FIRST_LUNAR_YEAR: i32 = 1900;
/// Last lunar year covered by the table.
pub const LAST_LUNAR_YEAR: i32 = 2100;

/// `num_days_from_ce` of solar 1900-01-31 (lunar 1900-01-01).
const EPOCH_DAYS_FROM_CE: i32 = 693_626;

#[rustfmt::skip]
const LUNAR_INFO: [u32; 201] = [
    0x04bd8, 0x04ae0, 0x0a570, 0x054d5, 0x0d260, 0x0d950, 0x16554, 0x056a0, 0x09ad0, 0x055d2, // 1900
    0x04ae0, 0x0a5b6, 0x0a4d0, 0x0d250, 0x1d255, 0x0b540, 0x0d6a0, 0x0ada2, 0x095b0, 0x14977, // 1910
    0x04970, 0x0a4b0, 0x0b4b5, 0x06a50, 0x06d40, 0x1ab54, 0x02b60, 0x09570, 0x052f2, 0x04970, // 1920
    0x06566, 0x0d4a0, 0x0ea50, 0x16a95, 0x05ad0, 0x02b60, 0x186e3, 0x092e0, 0x1c8d7, 0x0c950, // 1930
    0x0d4a0, 0x1d8a6, 0x0b550, 0x056a0, 0x1a5b4, 0x025d0, 0x092d0, 0x0d2b2, 0x0a950, 0x0b557, // 1940
    0x06ca0, 0x0b550, 0x15355, 0x04da0, 0x0a5b0, 0x14573, 0x052b0, 0x0a9a8, 0x0e950, 0x06aa0, // 1950
    0x0aea6, 0x0ab50, 0x04b60, 0x0aae4, 0x0a570, 0x05260, 0x0f263, 0x0d950, 0x05b57, 0x056a0, // 1960
    0x096d0, 0x04dd5, 0x04ad0, 0x0a4d0, 0x0d4d4, 0x0d250, 0x0d558, 0x0b540, 0x0b6a0, 0x195a6, // 1970
    0x095b0, 0x049b0, 0x0a974, 0x0a4b0, 0x0b27a, 0x06a50, 0x06d40, 0x0af46, 0x0ab60, 0x09570, // 1980
    0x04af5, 0x04970, 0x064b0, 0x074a3, 0x0ea50, 0x06b58, 0x05ac0, 0x0ab60, 0x096d5, 0x092e0, // 1990
    0x0c960, 0x0d954, 0x0d4a0, 0x0da50, 0x07552, 0x056a0, 0x0abb7, 0x025d0, 0x092d0, 0x0cab5, // 2000
    0x0a950, 0x0b4a0, 0x0baa4, 0x0ad50, 0x055d9, 0x04ba0, 0x0a5b0, 0x15176, 0x052b0, 0x0a930, // 2010
    0x07954, 0x06aa0, 0x0ad50, 0x05b52, 0x04b60, 0x0a6e6, 0x0a4e0, 0x0d260, 0x0ea65, 0x0d530, // 2020
    0x05aa0, 0x076a3, 0x096d0, 0x04afb, 0x04ad0, 0x0a4d0, 0x1d0b6, 0x0d250, 0x0d520, 0x0dd45, // 2030
    0x0b5a0, 0x056d0, 0x055b2, 0x049b0, 0x0a577, 0x0a4b0, 0x0aa50, 0x1b255, 0x06d20, 0x0ada0, // 2040
    0x14b63, 0x09370, 0x049f8, 0x04970, 0x064b0, 0x168a6, 0x0ea50, 0x06b20, 0x1a6c4, 0x0aae0, // 2050
    0x092e0, 0x0d2e3, 0x0c960, 0x0d557, 0x0d4a0, 0x0da50, 0x05d55, 0x056a0, 0x0a6d0, 0x055d4, // 2060
    0x052d0, 0x0a9b8, 0x0a950, 0x0b4a0, 0x0b6a6, 0x0ad50, 0x055a0, 0x0aba4, 0x0a5b0, 0x052b0, // 2070
    0x0b273, 0x06930, 0x07337, 0x06aa0, 0x0ad50, 0x14b55, 0x04b60, 0x0a570, 0x054e4, 0x0d160, // 2080
    0x0e968, 0x0d520, 0x0daa0, 0x16aa6, 0x056d0, 0x04ae0, 0x0a9d4, 0x0a2d0, 0x0d150, 0x0f252, // 2090
    0x0d520,                                                                                   // 2100
];

/// A date in the Chinese lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LunarDate {
    pub year: i32,
    /// Month number 1-12. A leap month carries the number of the month it follows.
    pub month: u32,
    pub day: u32,
    pub is_leap_month: bool,
}

impl LunarDate {
    /// Validate and build a lunar date.
    pub fn new(year: i32, month: u32, day: u32, is_leap_month: bool) -> Result<Self, DateError> {
        if !(1..=12).contains(&month) {
            return Err(DateError::InvalidLunarMonth(month));
        }
        if !in_table(year) {
            return Err(DateError::OutOfRange(format!("lunar {year}-{month}-{day}")));
        }
        let invalid = DateError::InvalidLunarDate {
            year,
            month,
            day,
            leap: is_leap_month,
        };
        if is_leap_month && leap_month(year) != Some(month) {
            return Err(invalid);
        }
        if day == 0 || day > month_days(year, month, is_leap_month) {
            return Err(invalid);
        }
        Ok(Self {
            year,
            month,
            day,
            is_leap_month,
        })
    }

    /// Apply the fix-leap policy.
    ///
    /// With `fix_leap` set, a date in the first half (day 1-15) of a leap
    /// month is read as the regular month of the same number. Later days
    /// keep their leap flag.
    pub fn fold_leap(self, fix_leap: bool) -> Self {
        if fix_leap && self.is_leap_month && self.day <= 15 {
            Self {
                is_leap_month: false,
                ..self
            }
        } else {
            self
        }
    }
}

impl std::fmt::Display for LunarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_leap_month {
            write!(f, "{}-{}-{} (leap)", self.year, self.month, self.day)
        } else {
            write!(f, "{}-{}-{}", self.year, self.month, self.day)
        }
    }
}

fn in_table(year: i32) -> bool {
    (FIRST_LUNAR_YEAR..=LAST_LUNAR_YEAR).contains(&year)
}

fn info(year: i32) -> u32 {
    LUNAR_INFO[(year - FIRST_LUNAR_YEAR) as usize]
}

/// Leap month number of a lunar year, if any. `None` outside the table.
pub fn leap_month(year: i32) -> Option<u32> {
    if !in_table(year) {
        return None;
    }
    match info(year) & 0xf {
        0 => None,
        m => Some(m),
    }
}

/// Length of the leap month (29 or 30), or 0 when the year has none.
pub fn leap_month_days(year: i32) -> u32 {
    match leap_month(year) {
        None => 0,
        Some(_) if info(year) & 0x10000 != 0 => 30,
        Some(_) => 29,
    }
}

/// Length of a lunar month in days. Returns 0 for a month that does not exist.
pub fn month_days(year: i32, month: u32, leap: bool) -> u32 {
    if !in_table(year) || !(1..=12).contains(&month) {
        return 0;
    }
    if leap {
        return if leap_month(year) == Some(month) {
            leap_month_days(year)
        } else {
            0
        };
    }
    if info(year) & (0x10000 >> month) != 0 {
        30
    } else {
        29
    }
}

/// Total days in a lunar year, leap month included.
pub fn year_days(year: i32) -> u32 {
    let regular: u32 = (1..=12).map(|m| month_days(year, m, false)).sum();
    regular + leap_month_days(year)
}

/// Solar/lunar conversion oracle consumed by chart construction.
pub trait CalendarOracle {
    /// Lunar date of a solar (proleptic Gregorian) date.
    fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, DateError>;

    /// Solar date of a lunar date.
    fn lunar_to_solar(&self, lunar: &LunarDate) -> Result<NaiveDate, DateError>;
}

/// Table-driven oracle covering lunar years 1900-2100.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableCalendar;

impl CalendarOracle for TableCalendar {
    fn solar_to_lunar(&self, date: NaiveDate) -> Result<LunarDate, DateError> {
        let out_of_range = || DateError::OutOfRange(date.to_string());
        let mut offset = date.num_days_from_ce() - EPOCH_DAYS_FROM_CE;
        if offset < 0 {
            return Err(out_of_range());
        }

        let mut year = FIRST_LUNAR_YEAR;
        loop {
            if year > LAST_LUNAR_YEAR {
                return Err(out_of_range());
            }
            let days = year_days(year) as i32;
            if offset < days {
                break;
            }
            offset -= days;
            year += 1;
        }

        let leap = leap_month(year);
        for month in 1..=12 {
            let days = month_days(year, month, false) as i32;
            if offset < days {
                return Ok(LunarDate {
                    year,
                    month,
                    day: offset as u32 + 1,
                    is_leap_month: false,
                });
            }
            offset -= days;

            if leap == Some(month) {
                let days = leap_month_days(year) as i32;
                if offset < days {
                    return Ok(LunarDate {
                        year,
                        month,
                        day: offset as u32 + 1,
                        is_leap_month: true,
                    });
                }
                offset -= days;
            }
        }
        // year_days() is the sum of the months walked above
        Err(out_of_range())
    }

    fn lunar_to_solar(&self, lunar: &LunarDate) -> Result<NaiveDate, DateError> {
        let lunar = LunarDate::new(lunar.year, lunar.month, lunar.day, lunar.is_leap_month)?;

        let mut offset: i32 = (FIRST_LUNAR_YEAR..lunar.year)
            .map(|y| year_days(y) as i32)
            .sum();

        let leap = leap_month(lunar.year);
        for month in 1..lunar.month {
            offset += month_days(lunar.year, month, false) as i32;
            if leap == Some(month) {
                offset += leap_month_days(lunar.year) as i32;
            }
        }
        if lunar.is_leap_month {
            offset += month_days(lunar.year, lunar.month, false) as i32;
        }
        offset += lunar.day as i32 - 1;

        NaiveDate::from_num_days_from_ce_opt(EPOCH_DAYS_FROM_CE + offset)
            .ok_or_else(|| DateError::OutOfRange(lunar.to_string()))
    }
}

/// Convert a solar date with the default table oracle.
pub fn solar_to_lunar(date: NaiveDate) -> Result<LunarDate, DateError> {
    TableCalendar.solar_to_lunar(date)
}

/// Convert a lunar date with the default table oracle.
pub fn lunar_to_solar(lunar: &LunarDate) -> Result<NaiveDate, DateError> {
    TableCalendar.lunar_to_solar(lunar)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn epoch_constant_matches_chrono() {
        assert_eq!(ymd(1900, 1, 31).num_days_from_ce(), EPOCH_DAYS_FROM_CE);
    }

    #[test]
    fn epoch_is_first_lunar_day() {
        let l = solar_to_lunar(ymd(1900, 1, 31)).unwrap();
        assert_eq!(l, LunarDate::new(1900, 1, 1, false).unwrap());
    }

    #[test]
    fn before_epoch_is_out_of_range() {
        assert!(matches!(
            solar_to_lunar(ymd(1900, 1, 30)),
            Err(DateError::OutOfRange(_))
        ));
    }

    #[test]
    fn after_table_is_out_of_range() {
        assert!(solar_to_lunar(ymd(2101, 1, 28)).is_ok());
        assert!(matches!(
            solar_to_lunar(ymd(2101, 1, 29)),
            Err(DateError::OutOfRange(_))
        ));
    }

    #[test]
    fn leap_month_2020_is_fourth() {
        assert_eq!(leap_month(2020), Some(4));
        assert_eq!(leap_month_days(2020), 29);
        assert_eq!(leap_month(2021), None);
        assert_eq!(leap_month_days(2021), 0);
    }

    #[test]
    fn month_lengths_2020() {
        let lens: Vec<u32> = (1..=12).map(|m| month_days(2020, m, false)).collect();
        assert_eq!(lens, vec![29, 30, 30, 30, 30, 29, 29, 30, 29, 30, 29, 30]);
        assert_eq!(month_days(2020, 4, true), 29);
        assert_eq!(month_days(2020, 5, true), 0);
    }

    #[test]
    fn year_days_with_leap() {
        assert_eq!(year_days(2020), 384);
        assert_eq!(year_days(2021), 354);
    }

    #[test]
    fn mid_year_conversion() {
        let l = solar_to_lunar(ymd(2000, 8, 16)).unwrap();
        assert_eq!((l.year, l.month, l.day, l.is_leap_month), (2000, 7, 17, false));
    }

    #[test]
    fn leap_month_conversion() {
        let l = solar_to_lunar(ymd(2020, 5, 23)).unwrap();
        assert_eq!((l.year, l.month, l.day, l.is_leap_month), (2020, 4, 1, true));
        let l = solar_to_lunar(ymd(2020, 6, 20)).unwrap();
        assert_eq!((l.year, l.month, l.day, l.is_leap_month), (2020, 4, 29, true));
    }

    #[test]
    fn lunar_to_solar_leap() {
        let l = LunarDate::new(2020, 4, 10, true).unwrap();
        assert_eq!(lunar_to_solar(&l).unwrap(), ymd(2020, 6, 1));
        let l = LunarDate::new(2020, 4, 10, false).unwrap();
        assert_eq!(lunar_to_solar(&l).unwrap(), ymd(2020, 5, 2));
    }

    #[test]
    fn new_rejects_non_leap_year_leap_flag() {
        assert!(matches!(
            LunarDate::new(2021, 4, 1, true),
            Err(DateError::InvalidLunarDate { .. })
        ));
    }

    #[test]
    fn new_rejects_day_thirty_in_short_month() {
        // 2020 month 1 has 29 days
        assert!(LunarDate::new(2020, 1, 30, false).is_err());
        assert!(LunarDate::new(2020, 2, 30, false).is_ok());
    }

    #[test]
    fn new_rejects_month_thirteen() {
        assert_eq!(
            LunarDate::new(2020, 13, 1, false),
            Err(DateError::InvalidLunarMonth(13))
        );
    }

    #[test]
    fn fold_leap_first_half() {
        let l = LunarDate::new(2020, 4, 15, true).unwrap();
        let folded = l.fold_leap(true);
        assert!(!folded.is_leap_month);
        assert_eq!(folded.month, 4);
        assert!(l.fold_leap(false).is_leap_month);
    }

    #[test]
    fn fold_leap_second_half_keeps_flag() {
        let l = LunarDate::new(2020, 4, 16, true).unwrap();
        assert!(l.fold_leap(true).is_leap_month);
    }

    #[test]
    fn display_format() {
        let l = LunarDate::new(2020, 4, 1, true).unwrap();
        assert_eq!(l.to_string(), "2020-4-1 (leap)");
    }
}
