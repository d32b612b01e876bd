//! Types for time-scoped horoscope overlays.

use chrono::NaiveDate;
use serde::Serialize;
use ziwei_calendar::{LunarDate, TimeSlot};

use crate::branch::EarthlyBranch;
use crate::palace_types::{DecadalRange, HouseRole};
use crate::star::{Scope, Star, StarName};
use crate::stem::HeavenlyStem;

/// A scope-tagged star and the natal house it lands in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlacedStar {
    /// Natal ring position.
    pub house_index: u8,
    pub star: Star,
}

/// One overlay period projected onto the natal ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HoroscopeItem {
    pub scope: Scope,
    /// Natal ring position acting as this period's soul house.
    pub index: u8,
    /// Governing stem of the period.
    pub stem: HeavenlyStem,
    /// Governing branch of the period.
    pub branch: EarthlyBranch,
    /// Role each natal house plays in this period, by natal ring position.
    pub roles: [HouseRole; 12],
    /// Stars transformed by the governing stem (prosperity, authority, fame, adversity).
    pub mutagen_stars: [StarName; 4],
    /// Scope-tagged stars produced by this period.
    pub stars: Vec<PlacedStar>,
    /// Age range, decade scope only.
    pub decadal: Option<DecadalRange>,
}

impl HoroscopeItem {
    /// Natal ring position that plays `role` in this period.
    pub fn position_of(&self, role: HouseRole) -> usize {
        (self.index as usize + role.index() as usize) % 12
    }

    /// Scope-tagged stars landing in a natal house.
    pub fn stars_in(&self, house_index: u8) -> impl Iterator<Item = &Star> {
        self.stars
            .iter()
            .filter(move |p| p.house_index == house_index)
            .map(|p| &p.star)
    }
}

/// Overlays for one query moment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Horoscope {
    pub solar_date: NaiveDate,
    pub lunar_date: LunarDate,
    pub slot: TimeSlot,
    /// Count-inclusive age: query year minus birth year plus one.
    pub nominal_age: i32,
    pub decadal: HoroscopeItem,
    pub age: HoroscopeItem,
    pub yearly: HoroscopeItem,
    pub monthly: HoroscopeItem,
    pub daily: HoroscopeItem,
    pub hourly: HoroscopeItem,
}

impl Horoscope {
    /// The six items, longest period first.
    pub fn items(&self) -> [&HoroscopeItem; 6] {
        [
            &self.decadal,
            &self.age,
            &self.yearly,
            &self.monthly,
            &self.daily,
            &self.hourly,
        ]
    }
}
