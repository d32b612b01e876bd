//! Natal chart construction.
//!
//! Stages run in a fixed order: calendar resolution, pillars, soul/body,
//! house ring, five-elements class, star placement, mutagens, brightness,
//! decades and small-limit ages. Each stage reads only what earlier stages
//! produced.

use chrono::NaiveDate;
use ziwei_calendar::{
    CalendarOracle, DateError, LunarDate, TableCalendar, TimeSlot, western_sign_of,
};

use crate::adjective_star::place_adjective_stars;
use crate::branch::EarthlyBranch;
use crate::brightness::apply_brightness;
use crate::chart_types::{Chart, ChartInput, DateInput};
use crate::five_elements::class_of;
use crate::horoscope::{
    NatalContext, assign_decadal_ranges, assign_small_limit_ages, compute_overlay,
    decade_forward,
};
use crate::horoscope_types::Horoscope;
use crate::major_star::{placement_lunar_day, place_major_stars};
use crate::minor_star::place_auxiliary_stars;
use crate::mutagen::apply_mutagens;
use crate::palace::{build_ring, house_at_branch, locate};
use crate::palace_types::{House, HouseRole};
use crate::pillars::{pillar_year, pillars_from_parts};
use crate::star::{Star, StarName};

/// Lunar month number used for house and month-star placement.
///
/// With `fix_leap` set, the second half (day 16 on) of a leap month counts
/// as the following month. Otherwise a leap month uses its own number.
pub fn placement_month(lunar: &LunarDate, fix_leap: bool) -> u32 {
    if fix_leap && lunar.is_leap_month && lunar.day > 15 {
        lunar.month % 12 + 1
    } else {
        lunar.month
    }
}

fn resolve_dates<C: CalendarOracle + ?Sized>(
    oracle: &C,
    date: DateInput,
) -> Result<(NaiveDate, LunarDate), DateError> {
    match date {
        DateInput::Solar(solar) => Ok((solar, oracle.solar_to_lunar(solar)?)),
        DateInput::Lunar(l) => {
            let lunar = LunarDate::new(l.year, l.month, l.day, l.is_leap_month)?;
            Ok((oracle.lunar_to_solar(&lunar)?, lunar))
        }
    }
}

/// Build a natal chart with the built-in calendar table.
pub fn build_chart(input: &ChartInput) -> Result<Chart, DateError> {
    build_chart_with(&TableCalendar, input)
}

/// Build a natal chart against a calendar oracle.
pub fn build_chart_with<C: CalendarOracle + ?Sized>(
    oracle: &C,
    input: &ChartInput,
) -> Result<Chart, DateError> {
    let (solar, lunar) = resolve_dates(oracle, input.date)?;
    let options = input.options;
    let slot = input.slot;

    let year = pillar_year(solar, lunar.year, options.year_boundary);
    let pillars = pillars_from_parts(year, lunar.month, solar, slot);
    let year_stem = pillars.year.stem;
    let year_branch = pillars.year.branch;
    tracing::debug!(%solar, %lunar, year, pillars.year = %pillars.year, "calendar resolved");

    let month = placement_month(&lunar, options.fix_leap);
    let skeleton = locate(month, slot, year_stem);
    let mut houses = build_ring(&skeleton);
    let class = class_of(skeleton.soul_stem, skeleton.soul_branch);
    tracing::debug!(
        soul = %skeleton.soul_branch,
        body = skeleton.body_index,
        class = class.value(),
        "houses located"
    );

    let lunar_day = placement_lunar_day(oracle, solar, slot)?;
    place_major_stars(&mut houses, lunar_day, class);
    place_auxiliary_stars(&mut houses, month, slot, year_stem, year_branch);
    place_adjective_stars(&mut houses, month, year_branch);
    apply_mutagens(&mut houses, year_stem);
    apply_brightness(&mut houses);

    let forward = decade_forward(input.gender, year_branch.yin_yang());
    assign_decadal_ranges(&mut houses, class, forward);
    assign_small_limit_ages(&mut houses, input.gender);
    tracing::debug!(forward, "decades assigned");

    Ok(Chart {
        gender: input.gender,
        solar_date: solar,
        lunar_date: lunar.fold_leap(options.fix_leap),
        slot,
        pillars,
        pillar_year: year,
        zodiac: year_branch.zodiac(),
        sign: western_sign_of(solar),
        soul_branch: skeleton.soul_branch,
        body_branch: EarthlyBranch::from_index(skeleton.body_index as i32),
        soul_star: skeleton.soul_branch.soul_star(),
        body_star: year_branch.body_star(),
        five_elements_class: class,
        houses,
        options,
    })
}

impl Chart {
    pub fn soul_house(&self) -> &House {
        &self.houses[0]
    }

    pub fn body_house(&self) -> &House {
        self.houses
            .iter()
            .find(|h| h.is_body_house)
            .unwrap_or(&self.houses[0])
    }

    /// House playing a natal role.
    pub fn house(&self, role: HouseRole) -> &House {
        &self.houses[role.index() as usize]
    }

    /// House sitting at a branch.
    pub fn house_at(&self, branch: EarthlyBranch) -> Option<&House> {
        house_at_branch(&self.houses, branch).map(|i| &self.houses[i])
    }

    /// A natal star and the house holding it.
    pub fn find_star(&self, name: StarName) -> Option<(&House, &Star)> {
        self.houses
            .iter()
            .find_map(|h| h.star(name).map(|s| (h, s)))
    }

    /// Whether decades advance forward through the ring.
    pub fn decades_forward(&self) -> bool {
        decade_forward(self.gender, self.pillars.year.branch.yin_yang())
    }

    fn natal_context(&self) -> NatalContext<'_> {
        NatalContext {
            ring: &self.houses,
            class: self.five_elements_class,
            gender: self.gender,
            year_polarity: self.pillars.year.branch.yin_yang(),
            birth_year: self.pillar_year,
            boundary: self.options.year_boundary,
        }
    }

    /// Overlays for a query moment, using the built-in calendar table.
    pub fn compute_horoscope(
        &self,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Horoscope, DateError> {
        self.compute_horoscope_with(&TableCalendar, date, slot)
    }

    pub fn compute_horoscope_with<C: CalendarOracle + ?Sized>(
        &self,
        oracle: &C,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Horoscope, DateError> {
        compute_overlay(oracle, date, slot, &self.natal_context())
    }
}
