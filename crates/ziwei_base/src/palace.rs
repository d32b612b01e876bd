//! Soul/body location and house ring construction.
//!
//! The birth-month house sits at branch `month + 1` (month 1 = 寅). The
//! soul house counts back from it by the time slot, the body house counts
//! forward by the same amount. Every house stem follows the Tiger rule:
//! 寅 takes the year's month-1 stem and each later branch advances it.

use ziwei_calendar::TimeSlot;

use crate::branch::EarthlyBranch;
use crate::palace_types::{ALL_HOUSE_ROLES, ChartSkeleton, House};
use crate::stem::HeavenlyStem;
use crate::util::{branch_distance, jump_branch, tiger_ordinal};

/// Stem of the house sitting at a branch, for a year of the given stem.
pub fn house_stem(year_stem: HeavenlyStem, branch: EarthlyBranch) -> HeavenlyStem {
    year_stem
        .tiger_month_stem()
        .advance(tiger_ordinal(branch.index()) as i32)
}

/// Locate the soul and body houses.
pub fn locate(lunar_month: u32, slot: TimeSlot, year_stem: HeavenlyStem) -> ChartSkeleton {
    let month_house = jump_branch(2, lunar_month as i32 - 1);
    let offset = slot.counting_offset() as i32;
    let soul_index = jump_branch(month_house, -offset);
    let body_index = jump_branch(month_house, offset);
    let soul_branch = EarthlyBranch::from_index(soul_index as i32);
    ChartSkeleton {
        soul_index,
        body_index,
        soul_stem: house_stem(year_stem, soul_branch),
        soul_branch,
    }
}

/// Lay out the twelve houses starting at the soul house.
pub fn build_ring(skeleton: &ChartSkeleton) -> [House; 12] {
    let body_pos = branch_distance(skeleton.soul_index, skeleton.body_index);
    // stem of the soul house fixes the stem of 寅
    let tiger_stem = skeleton
        .soul_stem
        .advance(-(tiger_ordinal(skeleton.soul_index) as i32));
    std::array::from_fn(|i| {
        let branch = EarthlyBranch::from_index(skeleton.soul_index as i32 + i as i32);
        let stem = tiger_stem.advance(tiger_ordinal(branch.index()) as i32);
        let mut house = House::new(i as u8, ALL_HOUSE_ROLES[i], stem, branch);
        house.is_soul_house = i == 0;
        house.is_body_house = i == body_pos as usize;
        house
    })
}

/// Ring position of the house at a branch.
pub fn house_at_branch(ring: &[House; 12], branch: EarthlyBranch) -> Option<usize> {
    ring.iter().position(|h| h.branch == branch)
}

/// Ring position of the house at a branch, falling back to the soul house.
///
/// Every ring covers all twelve branches, so the fallback only fires on a
/// malformed ring.
pub fn house_at_branch_or_soul(ring: &[House; 12], branch: EarthlyBranch) -> usize {
    house_at_branch(ring, branch).unwrap_or_else(|| {
        tracing::warn!(%branch, "no house at branch, falling back to soul house");
        0
    })
}
