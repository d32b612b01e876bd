//! Input and output types for natal chart construction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ziwei_calendar::{LunarDate, TimeSlot, WesternSign};

use crate::branch::{EarthlyBranch, ZodiacAnimal};
use crate::five_elements::FiveElementsClass;
use crate::palace_types::House;
use crate::pillars::{FourPillars, YearBoundary};
use crate::star::StarName;

/// Gender of the chart subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    /// Parse "male"/"female" (or their Chinese forms 男/女).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Some(Self::Male),
            "female" | "f" | "女" => Some(Self::Female),
            _ => None,
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Birth date in either calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput {
    Solar(NaiveDate),
    Lunar(LunarDate),
}

/// Chart construction options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Fold leap months onto their regular month (first half) or the next
    /// month (second half) for house placement.
    pub fix_leap: bool,
    pub year_boundary: YearBoundary,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            fix_leap: true,
            year_boundary: YearBoundary::default(),
        }
    }
}

/// Everything needed to build a natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartInput {
    pub date: DateInput,
    pub slot: TimeSlot,
    pub gender: Gender,
    pub options: ChartOptions,
}

impl ChartInput {
    pub fn solar(date: NaiveDate, slot: TimeSlot, gender: Gender) -> Self {
        Self {
            date: DateInput::Solar(date),
            slot,
            gender,
            options: ChartOptions::default(),
        }
    }

    pub fn lunar(date: LunarDate, slot: TimeSlot, gender: Gender) -> Self {
        Self {
            date: DateInput::Lunar(date),
            slot,
            gender,
            options: ChartOptions::default(),
        }
    }

    pub fn with_options(self, options: ChartOptions) -> Self {
        Self { options, ..self }
    }
}

/// A computed natal chart.
///
/// `houses[0]` is the soul house; `houses[i]` sits `i` branches after it
/// and plays role `ALL_HOUSE_ROLES[i]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chart {
    pub gender: Gender,
    pub solar_date: NaiveDate,
    /// Lunar birth date after the fix-leap policy.
    pub lunar_date: LunarDate,
    pub slot: TimeSlot,
    pub pillars: FourPillars,
    /// Year whose pillar is the birth year pillar.
    pub pillar_year: i32,
    pub zodiac: ZodiacAnimal,
    pub sign: WesternSign,
    pub soul_branch: EarthlyBranch,
    pub body_branch: EarthlyBranch,
    /// 命主, ruled by the year branch.
    pub soul_star: StarName,
    /// 身主, ruled by the year branch.
    pub body_star: StarName,
    pub five_elements_class: FiveElementsClass,
    pub houses: [House; 12],
    pub options: ChartOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_names() {
        assert_eq!(Gender::from_name("Male"), Some(Gender::Male));
        assert_eq!(Gender::from_name("女"), Some(Gender::Female));
        assert_eq!(Gender::from_name("x"), None);
        assert_eq!(Gender::Female.to_string(), "female");
    }

    #[test]
    fn default_options_fix_leap() {
        let o = ChartOptions::default();
        assert!(o.fix_leap);
        assert_eq!(o.year_boundary, YearBoundary::LunarNewYear);
    }

    #[test]
    fn with_options_keeps_date() {
        let d = NaiveDate::from_ymd_opt(2000, 8, 16).unwrap();
        let opts = ChartOptions {
            fix_leap: false,
            year_boundary: YearBoundary::CalendarYear,
        };
        let input = ChartInput::solar(d, TimeSlot::EARLY_RAT, Gender::Male).with_options(opts);
        assert_eq!(input.date, DateInput::Solar(d));
        assert_eq!(input.options, opts);
    }
}
