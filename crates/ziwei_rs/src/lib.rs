//! Convenience wrapper for ziwei chart construction.
//!
//! Accepts date strings and plain slot or hour numbers, builds the chart
//! with the built-in lunar table and wraps it in an [`Astrolabe`] for
//! lookups by role, name or position.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use ziwei_rs::*;
//!
//! let chart = by_solar("2000-8-16", 6, Gender::Male)?;
//! let soul = chart.soul_palace();
//! println!("{}", soul.branch.label(Locale::ZhCn));
//! let h = chart.horoscope("2024-6-1", 6)?;
//! ```

pub mod astrolabe;
pub mod convenience;
pub mod error;
pub mod labels;

// Primary re-exports: callers should only need `use ziwei_rs::*`
pub use astrolabe::{Astrolabe, SurroundedPalaces};
pub use convenience::{
    by_lunar, by_lunar_hour, by_lunar_with, by_solar, by_solar_hour, by_solar_with,
};
pub use error::{ConfigurationError, ZiweiError};
pub use labels::{Label, Locale, format_lunar_date};

// Core types so callers don't need to depend on ziwei_base directly.
pub use ziwei_base::{
    Brightness, Chart, ChartOptions, EarthlyBranch, FiveElementsClass, FourPillars, Gender,
    HeavenlyStem, Horoscope, HoroscopeItem, House, HouseRole, Mutagen, Scope, Star, StarKind,
    StarName, YearBoundary,
};
pub use ziwei_calendar::{LunarDate, NaiveDate, TimeSlot};
pub use ziwei_config::ZiweiConfig;
