//! Horoscope overlays: decade, small limit, year, month, day, hour.
//!
//! The decade and small-limit overlays walk the natal ring from the soul
//! house. The calendar overlays find the natal house whose branch equals
//! the query moment's pillar branch. Every overlay gets the mutagens of its
//! own governing stem as scope-tagged star copies; natal stars are never
//! modified.

use chrono::NaiveDate;
use ziwei_calendar::{CalendarOracle, DateError, TimeSlot};

use crate::chart_types::Gender;
use crate::element::YinYang;
use crate::five_elements::FiveElementsClass;
use crate::horoscope_types::{Horoscope, HoroscopeItem, PlacedStar};
use crate::minor_star::scoped_positions;
use crate::mutagen::scoped_mutagen_stars;
use crate::palace::house_at_branch_or_soul;
use crate::palace_types::{DecadalRange, House, HouseRole};
use crate::pillars::{Pillar, YearBoundary, pillar_year, pillars_from_parts};
use crate::star::{Scope, Star};
use crate::util::wrap_branch;

/// Oldest nominal age listed in per-house small-limit ages.
pub const MAX_LISTED_AGE: u32 = 120;

/// Natal facts an overlay needs.
#[derive(Debug, Clone, Copy)]
pub struct NatalContext<'a> {
    pub ring: &'a [House; 12],
    pub class: FiveElementsClass,
    pub gender: Gender,
    /// Polarity of the birth year branch.
    pub year_polarity: YinYang,
    /// Year whose pillar is the birth year pillar.
    pub birth_year: i32,
    pub boundary: YearBoundary,
}

/// Whether decades advance forward through the ring.
pub fn decade_forward(gender: Gender, year_polarity: YinYang) -> bool {
    matches!(
        (gender, year_polarity),
        (Gender::Male, YinYang::Yang) | (Gender::Female, YinYang::Yin)
    )
}

/// Ring position `steps` away from the soul house in a direction.
fn walk(steps: i32, forward: bool) -> u8 {
    wrap_branch(if forward { steps } else { -steps })
}

/// Age range of the `k`-th decade.
pub fn decade_range(class: FiveElementsClass, k: u32) -> DecadalRange {
    let start = class.value() as u32 + 10 * k;
    DecadalRange {
        start_age: start,
        end_age: start + 9,
    }
}

/// Decade order containing a nominal age.
///
/// Ages before the first decade resolve to the first decade.
pub fn decade_order(class: FiveElementsClass, nominal_age: i32) -> u32 {
    let k = (nominal_age - class.value() as i32).div_euclid(10);
    k.max(0) as u32
}

/// Ring position of the decade containing a nominal age.
pub fn decade_position(class: FiveElementsClass, nominal_age: i32, forward: bool) -> u8 {
    walk(decade_order(class, nominal_age) as i32, forward)
}

/// Ring position of the small limit at a nominal age.
pub fn small_limit_position(gender: Gender, nominal_age: i32) -> u8 {
    walk(nominal_age - 1, gender == Gender::Male)
}

/// Record each house's decade range.
pub fn assign_decadal_ranges(ring: &mut [House; 12], class: FiveElementsClass, forward: bool) {
    for k in 0..12u32 {
        let pos = walk(k as i32, forward) as usize;
        ring[pos].decadal = Some(decade_range(class, k));
    }
}

/// Record the nominal ages whose small limit falls in each house.
pub fn assign_small_limit_ages(ring: &mut [House; 12], gender: Gender) {
    for house in ring.iter_mut() {
        house.ages.clear();
    }
    for age in 1..=MAX_LISTED_AGE {
        let pos = small_limit_position(gender, age as i32) as usize;
        ring[pos].ages.push(age);
    }
}

/// Roles natal houses play when `index` acts as the soul house.
pub fn rotated_roles(index: u8) -> [HouseRole; 12] {
    std::array::from_fn(|j| HouseRole::from_index(j as i32 - index as i32))
}

fn item(
    ring: &[House; 12],
    scope: Scope,
    index: u8,
    pillar: Pillar,
    with_moving_stars: bool,
) -> HoroscopeItem {
    let mut stars: Vec<PlacedStar> = Vec::new();
    if with_moving_stars {
        for (name, branch) in scoped_positions(pillar.stem, pillar.branch) {
            stars.push(PlacedStar {
                house_index: house_at_branch_or_soul(ring, branch) as u8,
                star: Star::new(name, scope),
            });
        }
    }
    for (house_index, star) in scoped_mutagen_stars(ring, pillar.stem, scope) {
        stars.push(PlacedStar { house_index, star });
    }
    HoroscopeItem {
        scope,
        index,
        stem: pillar.stem,
        branch: pillar.branch,
        roles: rotated_roles(index),
        mutagen_stars: pillar.stem.mutagen_stars(),
        stars,
        decadal: None,
    }
}

fn ring_pillar(ring: &[House; 12], index: u8) -> Pillar {
    let h = &ring[index as usize];
    Pillar::new(h.stem, h.branch)
}

fn calendar_item(ring: &[House; 12], scope: Scope, pillar: Pillar, moving: bool) -> HoroscopeItem {
    let index = house_at_branch_or_soul(ring, pillar.branch) as u8;
    item(ring, scope, index, pillar, moving)
}

/// Compute all overlays for a query moment.
pub fn compute_overlay<C: CalendarOracle + ?Sized>(
    oracle: &C,
    query_date: NaiveDate,
    query_slot: TimeSlot,
    natal: &NatalContext<'_>,
) -> Result<Horoscope, DateError> {
    let ring = natal.ring;
    let lunar = oracle.solar_to_lunar(query_date)?;
    let year = pillar_year(query_date, lunar.year, natal.boundary);
    let pillars = pillars_from_parts(year, lunar.month, query_date, query_slot);
    let nominal_age = year - natal.birth_year + 1;

    let forward = decade_forward(natal.gender, natal.year_polarity);
    let decade_index = decade_position(natal.class, nominal_age, forward);
    let mut decadal = item(
        ring,
        Scope::Decadal,
        decade_index,
        ring_pillar(ring, decade_index),
        true,
    );
    decadal.decadal = Some(decade_range(
        natal.class,
        decade_order(natal.class, nominal_age),
    ));

    let age_index = small_limit_position(natal.gender, nominal_age);
    let age = item(ring, Scope::Age, age_index, ring_pillar(ring, age_index), false);

    tracing::debug!(
        %query_date,
        nominal_age,
        decade = decade_index,
        age = age_index,
        "horoscope overlay"
    );

    Ok(Horoscope {
        solar_date: query_date,
        lunar_date: lunar,
        slot: query_slot,
        nominal_age,
        decadal,
        age,
        yearly: calendar_item(ring, Scope::Yearly, pillars.year, true),
        monthly: calendar_item(ring, Scope::Monthly, pillars.month, false),
        daily: calendar_item(ring, Scope::Daily, pillars.day, false),
        hourly: calendar_item(ring, Scope::Hourly, pillars.hour, false),
    })
}
