//! Placement of the 14 major stars.
//!
//! 紫微 is found by a remainder search over the lunar day and the
//! five-elements class; 天府 mirrors it across the 寅-申 axis. The 紫微
//! group then steps backward through the branches, the 天府 group forward.

use chrono::NaiveDate;
use ziwei_calendar::{CalendarOracle, DateError, TimeSlot};

use crate::branch::EarthlyBranch;
use crate::five_elements::FiveElementsClass;
use crate::palace::house_at_branch_or_soul;
use crate::palace_types::House;
use crate::star::{Star, StarName};
use crate::util::wrap_branch;

/// 紫微 group, stepping backward from 紫微. `None` slots are skipped branches.
const ZIWEI_GROUP: [Option<StarName>; 9] = [
    Some(StarName::Ziwei),
    Some(StarName::Tianji),
    None,
    Some(StarName::Taiyang),
    Some(StarName::Wuqu),
    Some(StarName::Tiantong),
    None,
    None,
    Some(StarName::Lianzhen),
];

/// 天府 group, stepping forward from 天府.
const TIANFU_GROUP: [Option<StarName>; 11] = [
    Some(StarName::Tianfu),
    Some(StarName::Taiyin),
    Some(StarName::Tanlang),
    Some(StarName::Jumen),
    Some(StarName::Tianxiang),
    Some(StarName::Tianliang),
    Some(StarName::Qisha),
    None,
    None,
    None,
    Some(StarName::Pojun),
];

/// Lunar day that drives the major-star search.
///
/// A late-rat birth belongs to the next solar day, so its lunar day is
/// taken from there. The fix-leap policy does not change the day number.
pub fn placement_lunar_day<C: CalendarOracle + ?Sized>(
    oracle: &C,
    date: NaiveDate,
    slot: TimeSlot,
) -> Result<u32, DateError> {
    let date = if slot.is_late_rat() {
        date.succ_opt()
            .ok_or_else(|| DateError::OutOfRange(date.to_string()))?
    } else {
        date
    };
    Ok(oracle.solar_to_lunar(date)?.day)
}

/// Branches of 紫微 and 天府.
pub fn ziwei_tianfu_anchors(
    lunar_day: u32,
    class: FiveElementsClass,
) -> (EarthlyBranch, EarthlyBranch) {
    let cls = class.value() as u32;
    let mut offset = 0;
    while (lunar_day + offset) % cls != 0 {
        offset += 1;
    }
    let quotient = ((lunar_day + offset) / cls) % 12;

    // position counted from 寅 = 0
    let mut node = quotient as i32 - 1;
    if offset % 2 == 0 {
        node += offset as i32;
    } else {
        node -= offset as i32;
    }
    let node = wrap_branch(node) as i32;

    let ziwei = EarthlyBranch::from_index(node + 2);
    let tianfu = EarthlyBranch::from_index(wrap_branch(12 - node) as i32 + 2);
    (ziwei, tianfu)
}

/// Branch of every major star, in group order.
pub fn major_star_positions(
    ziwei: EarthlyBranch,
    tianfu: EarthlyBranch,
) -> Vec<(StarName, EarthlyBranch)> {
    let backward = ZIWEI_GROUP
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.map(|s| (s, ziwei.advance(-(i as i32)))));
    let forward = TIANFU_GROUP
        .iter()
        .enumerate()
        .filter_map(|(i, s)| s.map(|s| (s, tianfu.advance(i as i32))));
    backward.chain(forward).collect()
}

/// Place the 14 major stars into the ring by branch.
pub fn place_major_stars(ring: &mut [House; 12], lunar_day: u32, class: FiveElementsClass) {
    let (ziwei, tianfu) = ziwei_tianfu_anchors(lunar_day, class);
    tracing::debug!(lunar_day, class = class.value(), %ziwei, %tianfu, "major star anchors");
    for (name, branch) in major_star_positions(ziwei, tianfu) {
        let pos = house_at_branch_or_soul(ring, branch);
        tracing::trace!(star = %name, %branch, "place major star");
        ring[pos].push_star(Star::natal(name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day17_metal4() {
        // 17 + 3 = 20 = 4 * 5; odd offset: 5 - 1 - 3 = 1 → 卯
        let (z, t) = ziwei_tianfu_anchors(17, FiveElementsClass::Metal4);
        assert_eq!(z, EarthlyBranch::Mao);
        assert_eq!(t, EarthlyBranch::Chou);
    }

    #[test]
    fn day17_earth5_ziwei_tianfu_together() {
        let (z, t) = ziwei_tianfu_anchors(17, FiveElementsClass::Earth5);
        assert_eq!(z, EarthlyBranch::Yin);
        assert_eq!(t, EarthlyBranch::Yin);
    }

    #[test]
    fn day1_water2() {
        // 1 + 1 = 2 → q = 1, odd offset: 0 - 1 → 丑
        let (z, _) = ziwei_tianfu_anchors(1, FiveElementsClass::Water2);
        assert_eq!(z, EarthlyBranch::Chou);
    }

    #[test]
    fn divisible_day_needs_no_offset() {
        // 6 / 6 = 1 → node 0 → 寅
        let (z, t) = ziwei_tianfu_anchors(6, FiveElementsClass::Fire6);
        assert_eq!(z, EarthlyBranch::Yin);
        assert_eq!(t, EarthlyBranch::Yin);
    }

    #[test]
    fn anchors_mirror_across_yin_shen() {
        for day in 1..=30 {
            for class in [
                FiveElementsClass::Water2,
                FiveElementsClass::Wood3,
                FiveElementsClass::Metal4,
                FiveElementsClass::Earth5,
                FiveElementsClass::Fire6,
            ] {
                let (z, t) = ziwei_tianfu_anchors(day, class);
                // 寅 + 寅 = 申 + 申 (mod 12)
                assert_eq!((z.index() + t.index()) % 12, 4, "day {day} {class:?}");
            }
        }
    }

    #[test]
    fn fourteen_distinct_stars() {
        let pos = major_star_positions(EarthlyBranch::Mao, EarthlyBranch::Chou);
        assert_eq!(pos.len(), 14);
        let mut names: Vec<_> = pos.iter().map(|(n, _)| *n).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), 14);
    }

    #[test]
    fn group_offsets() {
        let pos = major_star_positions(EarthlyBranch::Mao, EarthlyBranch::Chou);
        let at = |n: StarName| pos.iter().find(|(s, _)| *s == n).map(|(_, b)| *b);
        assert_eq!(at(StarName::Lianzhen), Some(EarthlyBranch::Wei));
        assert_eq!(at(StarName::Pojun), Some(EarthlyBranch::Hai));
        assert_eq!(at(StarName::Qisha), Some(EarthlyBranch::Wei));
    }
}
