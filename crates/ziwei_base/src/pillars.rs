//! Four pillars (year, month, day, hour) of a birth or query moment.
//!
//! - year: `(year - 4) mod 10` / `(year - 4) mod 12`
//! - month: branch fixed by lunar month (month 1 = 寅), stem by the Tiger rule
//! - day: absolute day count, calibrated so that 2000-01-01 is 戊午
//! - hour: branch from the time slot, stem by the Rat rule
//!
//! Clean-room: standard sexagenary-cycle arithmetic, public domain.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ziwei_calendar::{CalendarOracle, DateError, TimeSlot};

use crate::branch::EarthlyBranch;
use crate::stem::HeavenlyStem;

/// Offset from `num_days_from_ce` to the sexagenary day index (甲子 = 0).
const DAY_CYCLE_OFFSET: i32 = 14;

/// A stem-branch pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pillar {
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
}

impl Pillar {
    pub const fn new(stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self { stem, branch }
    }

    /// Pillar at a position of the 60-term cycle (0 = 甲子, wraps).
    pub fn from_cycle(i: i32) -> Self {
        Self {
            stem: HeavenlyStem::from_index(i),
            branch: EarthlyBranch::from_index(i),
        }
    }

    /// Position in the 60-term cycle (甲子 = 0).
    pub fn cycle_index(self) -> u8 {
        let s = self.stem.index() as i32;
        let b = self.branch.index() as i32;
        // solve i ≡ s (mod 10), i ≡ b (mod 12)
        ((6 * s - 5 * b).rem_euclid(60)) as u8
    }
}

impl std::fmt::Display for Pillar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.stem, self.branch)
    }
}

/// The four pillars of one moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct FourPillars {
    pub year: Pillar,
    pub month: Pillar,
    pub day: Pillar,
    pub hour: Pillar,
}

/// Which calendar year the year pillar follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum YearBoundary {
    /// The year changes at lunar new year.
    #[default]
    LunarNewYear,
    /// The year changes on January 1 of the solar calendar.
    CalendarYear,
}

/// Year pillar of a pillar year.
pub fn year_pillar(year: i32) -> Pillar {
    Pillar::from_cycle(year - 4)
}

/// Month pillar of a lunar month (1-12) in a year with the given stem.
pub fn month_pillar(year_stem: HeavenlyStem, lunar_month: u32) -> Pillar {
    let m = lunar_month as i32;
    Pillar {
        stem: year_stem.tiger_month_stem().advance(m - 1),
        branch: EarthlyBranch::from_index(m + 1),
    }
}

/// Day pillar of a solar date.
pub fn day_pillar(date: NaiveDate) -> Pillar {
    Pillar::from_cycle(date.num_days_from_ce() + DAY_CYCLE_OFFSET)
}

/// Hour pillar of a time slot on a day with the given stem.
pub fn hour_pillar(day_stem: HeavenlyStem, slot: TimeSlot) -> Pillar {
    let branch = slot.counting_offset() as i32;
    Pillar {
        stem: day_stem.rat_hour_stem().advance(branch),
        branch: EarthlyBranch::from_index(branch),
    }
}

/// Pure pillar assembly once the pillar year and lunar month are known.
pub fn pillars_from_parts(
    pillar_year: i32,
    lunar_month: u32,
    date: NaiveDate,
    slot: TimeSlot,
) -> FourPillars {
    let year = year_pillar(pillar_year);
    let day = day_pillar(date);
    FourPillars {
        year,
        month: month_pillar(year.stem, lunar_month),
        day,
        hour: hour_pillar(day.stem, slot),
    }
}

/// The year whose pillar governs a date.
pub fn pillar_year(solar: NaiveDate, lunar_year: i32, boundary: YearBoundary) -> i32 {
    match boundary {
        YearBoundary::LunarNewYear => lunar_year,
        YearBoundary::CalendarYear => solar.year(),
    }
}

/// Four pillars of a solar date and time slot.
///
/// The lunar month comes from the oracle; a leap month uses the number of
/// the month it follows.
pub fn resolve_pillars<C: CalendarOracle + ?Sized>(
    oracle: &C,
    date: NaiveDate,
    slot: TimeSlot,
    boundary: YearBoundary,
) -> Result<FourPillars, DateError> {
    let lunar = oracle.solar_to_lunar(date)?;
    let year = pillar_year(date, lunar.year, boundary);
    Ok(pillars_from_parts(year, lunar.month, date, slot))
}
