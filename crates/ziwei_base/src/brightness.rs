//! Brightness of the major stars by branch.
//!
//! Columns run in Tiger-first order: 寅 卯 辰 巳 午 未 申 酉 戌 亥 子 丑.

use crate::branch::EarthlyBranch;
use crate::palace_types::House;
use crate::star::{Brightness, StarName};
use crate::util::tiger_ordinal;

/// Rows follow [`crate::star::MAJOR_STARS`].
const BRIGHTNESS: [[Brightness; 12]; 14] = {
    use Brightness::{
        Beneficial as L, Gained as D, Neutral as P, Prosperous as W, Temple as M, Trapped as X,
    };
    [
        [W, W, D, W, M, M, W, W, D, W, P, M], // 紫微
        [W, W, P, X, P, P, P, P, P, P, M, M], // 天机
        [M, M, M, M, W, L, P, X, X, X, X, D], // 太阳
        [P, X, D, L, X, W, W, W, M, M, D, D], // 武曲
        [D, X, X, D, L, W, D, D, L, W, M, M], // 天同
        [X, X, X, M, W, L, P, P, P, P, M, W], // 廉贞
        [M, M, M, M, M, M, M, M, M, M, M, M], // 天府
        [D, D, P, X, W, M, P, D, P, X, M, M], // 太阴
        [W, W, X, X, L, D, M, W, M, W, X, D], // 贪狼
        [D, D, X, X, X, P, M, W, P, D, W, D], // 巨门
        [W, W, P, P, M, M, W, W, P, P, M, M], // 天相
        [M, M, P, P, W, W, P, P, L, L, D, D], // 天梁
        [M, M, P, P, X, X, W, W, D, D, L, L], // 七杀
        [D, D, X, W, M, P, X, P, W, M, X, D], // 破军
    ]
};

/// Brightness of a star in a branch; `None` for non-major stars.
pub fn brightness_of(star: StarName, branch: EarthlyBranch) -> Option<Brightness> {
    let row = star.major_index()?;
    Some(BRIGHTNESS[row][tiger_ordinal(branch.index()) as usize])
}

/// Annotate every major star in the ring with its brightness.
pub fn apply_brightness(ring: &mut [House; 12]) {
    for house in ring.iter_mut() {
        let branch = house.branch;
        for star in house.major_stars.iter_mut() {
            star.brightness = brightness_of(star.name, branch);
        }
    }
}
