//! Solar date parsing and the western sun sign.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::DateError;

/// Split a `YYYY-M-D` string (zero padding optional) into its parts.
///
/// No calendar validation happens here; lunar input goes through
/// [`crate::LunarDate::new`] and solar input through [`parse_date`].
pub fn parse_ymd(s: &str) -> Result<(i32, u32, u32), DateError> {
    let malformed = || DateError::Malformed(s.to_string());
    let mut parts = s.trim().split('-');
    let (Some(y), Some(m), Some(d), None) = (parts.next(), parts.next(), parts.next(), parts.next())
    else {
        return Err(malformed());
    };
    let year = y.parse::<i32>().map_err(|_| malformed())?;
    let month = m.parse::<u32>().map_err(|_| malformed())?;
    let day = d.parse::<u32>().map_err(|_| malformed())?;
    Ok((year, month, day))
}

/// Parse a solar `YYYY-M-D` string into a validated date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    let (year, month, day) = parse_ymd(s)?;
    solar_date(year, month, day)
}

/// Build a validated solar date.
pub fn solar_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, DateError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(DateError::InvalidSolarDate { year, month, day })
}

/// The twelve tropical sun signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum WesternSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (index 0 = Aries).
pub const ALL_WESTERN_SIGNS: [WesternSign; 12] = [
    WesternSign::Aries,
    WesternSign::Taurus,
    WesternSign::Gemini,
    WesternSign::Cancer,
    WesternSign::Leo,
    WesternSign::Virgo,
    WesternSign::Libra,
    WesternSign::Scorpio,
    WesternSign::Sagittarius,
    WesternSign::Capricorn,
    WesternSign::Aquarius,
    WesternSign::Pisces,
];

/// Day of month on which the sign entered during month `m` begins (index m-1).
const SIGN_START_DAY: [u32; 12] = [20, 19, 21, 20, 21, 22, 23, 23, 23, 24, 23, 22];

impl WesternSign {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Sun sign for a solar month (1-12) and day.
///
/// Months outside 1..=12 are clamped into range.
pub fn western_sign(month: u32, day: u32) -> WesternSign {
    let m = month.clamp(1, 12) as usize;
    // sign entered in January is Aquarius (index 10)
    let entered = (m + 9) % 12;
    let idx = if day >= SIGN_START_DAY[m - 1] {
        entered
    } else {
        (entered + 11) % 12
    };
    ALL_WESTERN_SIGNS[idx]
}

/// Sun sign of a solar date.
pub fn western_sign_of(date: NaiveDate) -> WesternSign {
    western_sign(date.month(), date.day())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_padded_and_unpadded() {
        assert_eq!(parse_ymd("2000-8-16").unwrap(), (2000, 8, 16));
        assert_eq!(parse_ymd("2000-08-06").unwrap(), (2000, 8, 6));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(parse_ymd("2000/8/16"), Err(DateError::Malformed(_))));
        assert!(matches!(parse_ymd("2000-8"), Err(DateError::Malformed(_))));
        assert!(matches!(parse_ymd("2000-8-16-1"), Err(DateError::Malformed(_))));
        assert!(matches!(parse_ymd("y-m-d"), Err(DateError::Malformed(_))));
    }

    #[test]
    fn parse_date_rejects_feb_30() {
        assert_eq!(
            parse_date("2001-2-30"),
            Err(DateError::InvalidSolarDate {
                year: 2001,
                month: 2,
                day: 30
            })
        );
    }

    #[test]
    fn leo_range() {
        assert_eq!(western_sign(7, 23), WesternSign::Leo);
        assert_eq!(western_sign(8, 16), WesternSign::Leo);
        assert_eq!(western_sign(8, 22), WesternSign::Leo);
        assert_eq!(western_sign(8, 23), WesternSign::Virgo);
        assert_eq!(western_sign(7, 22), WesternSign::Cancer);
    }

    #[test]
    fn capricorn_wraps_year_end() {
        assert_eq!(western_sign(12, 22), WesternSign::Capricorn);
        assert_eq!(western_sign(1, 1), WesternSign::Capricorn);
        assert_eq!(western_sign(1, 19), WesternSign::Capricorn);
        assert_eq!(western_sign(1, 20), WesternSign::Aquarius);
    }

    #[test]
    fn pisces_and_aries_boundary() {
        assert_eq!(western_sign(3, 20), WesternSign::Pisces);
        assert_eq!(western_sign(3, 21), WesternSign::Aries);
    }
}
