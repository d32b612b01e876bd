//! Zi Wei Dou Shu natal chart construction.
//!
//! This crate provides:
//! - Stems, branches and the four pillars of a birth moment
//! - Soul/body location, the twelve-house ring and the five-elements class
//! - Placement of 14 major, 14 auxiliary and 6 adjective stars
//! - Birth-year mutagens and star brightness
//! - Decade, small-limit, year, month, day and hour overlays
//!
//! Calendar conversion lives in `ziwei_calendar`; every date-dependent
//! entry point takes a [`CalendarOracle`] or uses [`TableCalendar`].

pub mod adjective_star;
pub mod branch;
pub mod brightness;
pub mod chart;
pub mod chart_types;
pub mod element;
pub mod five_elements;
pub mod horoscope;
pub mod horoscope_types;
pub mod major_star;
pub mod minor_star;
pub mod mutagen;
pub mod palace;
pub mod palace_types;
pub mod pillars;
pub mod star;
pub mod stem;
pub mod util;

pub use branch::{ALL_BRANCHES, BranchHealth, EarthlyBranch, Triad, ZodiacAnimal};
pub use brightness::brightness_of;
pub use chart::{build_chart, build_chart_with, placement_month};
pub use chart_types::{Chart, ChartInput, ChartOptions, DateInput, Gender};
pub use element::{Element, YinYang};
pub use five_elements::{FiveElementsClass, class_of};
pub use horoscope::{NatalContext, compute_overlay, decade_forward};
pub use horoscope_types::{Horoscope, HoroscopeItem, PlacedStar};
pub use mutagen::mutagen_of;
pub use palace_types::{ALL_HOUSE_ROLES, DecadalRange, House, HouseRole};
pub use pillars::{FourPillars, Pillar, YearBoundary, resolve_pillars};
pub use star::{
    ADJECTIVE_STARS, ALL_MUTAGENS, AUXILIARY_STARS, Brightness, MAJOR_STARS, Mutagen, Scope, Star,
    StarKind, StarName,
};
pub use stem::{ALL_STEMS, HeavenlyStem};
pub use ziwei_calendar::{
    CalendarOracle, DateError, LunarDate, NaiveDate, TableCalendar, TimeSlot, WesternSign,
};
