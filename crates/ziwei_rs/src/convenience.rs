//! String-based entry points for building charts.

use ziwei_base::{ChartInput, ChartOptions, DateInput, Gender, TimeSlot, build_chart};
use ziwei_calendar::{LunarDate, hour_to_slot, parse_date, parse_ymd};

use crate::astrolabe::Astrolabe;
use crate::error::ZiweiError;

fn build(
    date: DateInput,
    slot: TimeSlot,
    gender: Gender,
    options: ChartOptions,
) -> Result<Astrolabe, ZiweiError> {
    let input = ChartInput {
        date,
        slot,
        gender,
        options,
    };
    Ok(Astrolabe::new(build_chart(&input)?))
}

fn solar_input(date: &str) -> Result<DateInput, ZiweiError> {
    Ok(DateInput::Solar(parse_date(date)?))
}

fn lunar_input(date: &str, is_leap: bool) -> Result<DateInput, ZiweiError> {
    let (y, m, d) = parse_ymd(date)?;
    Ok(DateInput::Lunar(LunarDate::new(y, m, d, is_leap)?))
}

/// Chart from a solar `YYYY-M-D` date and time slot (0-12).
pub fn by_solar(date: &str, slot: u8, gender: Gender) -> Result<Astrolabe, ZiweiError> {
    by_solar_with(date, slot, gender, ChartOptions::default())
}

/// Chart from a solar date and clock hour (0-23).
pub fn by_solar_hour(date: &str, hour: u8, gender: Gender) -> Result<Astrolabe, ZiweiError> {
    build(
        solar_input(date)?,
        hour_to_slot(hour)?,
        gender,
        ChartOptions::default(),
    )
}

pub fn by_solar_with(
    date: &str,
    slot: u8,
    gender: Gender,
    options: ChartOptions,
) -> Result<Astrolabe, ZiweiError> {
    build(solar_input(date)?, TimeSlot::new(slot)?, gender, options)
}

/// Chart from a lunar `YYYY-M-D` date; `is_leap` selects the leap month.
pub fn by_lunar(
    date: &str,
    slot: u8,
    gender: Gender,
    is_leap: bool,
) -> Result<Astrolabe, ZiweiError> {
    by_lunar_with(date, slot, gender, is_leap, ChartOptions::default())
}

pub fn by_lunar_hour(
    date: &str,
    hour: u8,
    gender: Gender,
    is_leap: bool,
) -> Result<Astrolabe, ZiweiError> {
    build(
        lunar_input(date, is_leap)?,
        hour_to_slot(hour)?,
        gender,
        ChartOptions::default(),
    )
}

pub fn by_lunar_with(
    date: &str,
    slot: u8,
    gender: Gender,
    is_leap: bool,
    options: ChartOptions,
) -> Result<Astrolabe, ZiweiError> {
    build(lunar_input(date, is_leap)?, TimeSlot::new(slot)?, gender, options)
}
