//! Placement of the 14 auxiliary stars.
//!
//! Each rule is a closed-form branch offset keyed by the lunar month, the
//! time slot, the year stem, or the year branch's triad. Branch indices
//! here use 子 = 0.

use ziwei_calendar::TimeSlot;

use crate::branch::{EarthlyBranch, Triad};
use crate::palace::house_at_branch_or_soul;
use crate::palace_types::House;
use crate::star::{Scope, Star, StarName};
use crate::stem::HeavenlyStem;

/// 天魁 by year stem.
const TIANKUI: [i32; 10] = [1, 0, 11, 11, 1, 0, 6, 6, 3, 3];
/// 天钺 by year stem.
const TIANYUE: [i32; 10] = [7, 8, 9, 9, 7, 8, 2, 2, 5, 5];
/// 禄存 by year stem.
const LUCUN: [i32; 10] = [2, 3, 5, 6, 5, 6, 8, 9, 11, 0];

fn at(i: i32) -> EarthlyBranch {
    EarthlyBranch::from_index(i)
}

/// 左辅 and 右弼: forward from 辰 and backward from 戌 by the lunar month.
pub fn zuofu_youbi(lunar_month: u32) -> (EarthlyBranch, EarthlyBranch) {
    let m = lunar_month as i32 - 1;
    (at(4 + m), at(10 - m))
}

/// 文昌 and 文曲: backward from 戌 and forward from 辰 by the time slot.
pub fn wenchang_wenqu(slot: TimeSlot) -> (EarthlyBranch, EarthlyBranch) {
    let t = slot.counting_offset() as i32;
    (at(10 - t), at(4 + t))
}

/// 天魁 and 天钺 by year stem.
pub fn kui_yue(year_stem: HeavenlyStem) -> (EarthlyBranch, EarthlyBranch) {
    let s = year_stem.index() as usize;
    (at(TIANKUI[s]), at(TIANYUE[s]))
}

/// 火星 and 铃星: seasonal base by year-branch triad, then forward by the slot.
pub fn huo_ling(year_branch: EarthlyBranch, slot: TimeSlot) -> (EarthlyBranch, EarthlyBranch) {
    let (huo, ling) = match year_branch.triad() {
        Triad::YinWuXu => (1, 3),
        Triad::ShenZiChen => (2, 10),
        Triad::SiYouChou => (3, 10),
        Triad::HaiMaoWei => (9, 10),
    };
    let t = slot.counting_offset() as i32;
    (at(huo + t), at(ling + t))
}

/// 地空 and 地劫: backward and forward from 亥 by the slot.
pub fn kong_jie(slot: TimeSlot) -> (EarthlyBranch, EarthlyBranch) {
    let t = slot.counting_offset() as i32;
    (at(11 - t), at(11 + t))
}

/// 禄存, 擎羊 (one after) and 陀罗 (one before) by year stem.
pub fn lucun_yang_tuo(year_stem: HeavenlyStem) -> (EarthlyBranch, EarthlyBranch, EarthlyBranch) {
    let lucun = LUCUN[year_stem.index() as usize];
    (at(lucun), at(lucun + 1), at(lucun - 1))
}

/// 天马 by year-branch triad: the branch clashing the triad's first member.
pub fn tianma(year_branch: EarthlyBranch) -> EarthlyBranch {
    match year_branch.triad() {
        Triad::YinWuXu => EarthlyBranch::Shen,
        Triad::ShenZiChen => EarthlyBranch::Yin,
        Triad::SiYouChou => EarthlyBranch::Hai,
        Triad::HaiMaoWei => EarthlyBranch::Si,
    }
}

/// Branch of every auxiliary star.
pub fn auxiliary_positions(
    lunar_month: u32,
    slot: TimeSlot,
    year_stem: HeavenlyStem,
    year_branch: EarthlyBranch,
) -> [(StarName, EarthlyBranch); 14] {
    let (zuofu, youbi) = zuofu_youbi(lunar_month);
    let (wenchang, wenqu) = wenchang_wenqu(slot);
    let (kui, yue) = kui_yue(year_stem);
    let (huo, ling) = huo_ling(year_branch, slot);
    let (kong, jie) = kong_jie(slot);
    let (lucun, yang, tuo) = lucun_yang_tuo(year_stem);
    [
        (StarName::Zuofu, zuofu),
        (StarName::Youbi, youbi),
        (StarName::Wenchang, wenchang),
        (StarName::Wenqu, wenqu),
        (StarName::Tiankui, kui),
        (StarName::Tianyue, yue),
        (StarName::Huoxing, huo),
        (StarName::Lingxing, ling),
        (StarName::Dikong, kong),
        (StarName::Dijie, jie),
        (StarName::Lucun, lucun),
        (StarName::Qingyang, yang),
        (StarName::Tuoluo, tuo),
        (StarName::Tianma, tianma(year_branch)),
    ]
}

/// Stars that move with a decade or year: placed by that period's stem and branch.
pub fn scoped_positions(
    stem: HeavenlyStem,
    branch: EarthlyBranch,
) -> [(StarName, EarthlyBranch); 6] {
    let (kui, yue) = kui_yue(stem);
    let (lucun, yang, tuo) = lucun_yang_tuo(stem);
    [
        (StarName::Tiankui, kui),
        (StarName::Tianyue, yue),
        (StarName::Lucun, lucun),
        (StarName::Qingyang, yang),
        (StarName::Tuoluo, tuo),
        (StarName::Tianma, tianma(branch)),
    ]
}

/// Place the 14 auxiliary stars into the ring by branch.
pub fn place_auxiliary_stars(
    ring: &mut [House; 12],
    lunar_month: u32,
    slot: TimeSlot,
    year_stem: HeavenlyStem,
    year_branch: EarthlyBranch,
) {
    for (name, branch) in auxiliary_positions(lunar_month, slot, year_stem, year_branch) {
        let pos = house_at_branch_or_soul(ring, branch);
        tracing::trace!(star = %name, %branch, "place auxiliary star");
        ring[pos].push_star(Star::new(name, Scope::Natal));
    }
}
