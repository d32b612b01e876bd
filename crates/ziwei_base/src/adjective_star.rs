//! Placement of the six adjective (miscellaneous) stars.
//!
//! 红鸾 天喜 天哭 天虚 follow the year branch; 天刑 天姚 follow the lunar month.

use crate::branch::EarthlyBranch;
use crate::palace::house_at_branch_or_soul;
use crate::palace_types::House;
use crate::star::{Star, StarName};

/// Branch of every adjective star.
pub fn adjective_positions(
    lunar_month: u32,
    year_branch: EarthlyBranch,
) -> [(StarName, EarthlyBranch); 6] {
    let yb = year_branch.index() as i32;
    let m = lunar_month as i32 - 1;
    let hongluan = EarthlyBranch::from_index(3 - yb);
    [
        (StarName::Hongluan, hongluan),
        (StarName::Tianxi, hongluan.clash()),
        (StarName::Tianxing, EarthlyBranch::from_index(9 + m)),
        (StarName::Tianyao, EarthlyBranch::from_index(1 + m)),
        (StarName::Tianku, EarthlyBranch::from_index(6 - yb)),
        (StarName::Tianxu, EarthlyBranch::from_index(6 + yb)),
    ]
}

pub fn place_adjective_stars(ring: &mut [House; 12], lunar_month: u32, year_branch: EarthlyBranch) {
    for (name, branch) in adjective_positions(lunar_month, year_branch) {
        let pos = house_at_branch_or_soul(ring, branch);
        ring[pos].push_star(Star::natal(name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(pos: &[(StarName, EarthlyBranch)], n: StarName) -> EarthlyBranch {
        pos.iter().find(|(s, _)| *s == n).map(|(_, b)| *b).unwrap()
    }

    #[test]
    fn rat_year() {
        let pos = adjective_positions(1, EarthlyBranch::Zi);
        assert_eq!(find(&pos, StarName::Hongluan), EarthlyBranch::Mao);
        assert_eq!(find(&pos, StarName::Tianxi), EarthlyBranch::You);
        assert_eq!(find(&pos, StarName::Tianku), EarthlyBranch::Wu);
        assert_eq!(find(&pos, StarName::Tianxu), EarthlyBranch::Wu);
    }

    #[test]
    fn month_stars() {
        let pos = adjective_positions(1, EarthlyBranch::Zi);
        assert_eq!(find(&pos, StarName::Tianxing), EarthlyBranch::You);
        assert_eq!(find(&pos, StarName::Tianyao), EarthlyBranch::Chou);
        let pos = adjective_positions(7, EarthlyBranch::Chen);
        assert_eq!(find(&pos, StarName::Tianxing), EarthlyBranch::Mao);
        assert_eq!(find(&pos, StarName::Tianyao), EarthlyBranch::Wei);
    }

    #[test]
    fn hongluan_tianxi_opposite() {
        for b in crate::branch::ALL_BRANCHES {
            let pos = adjective_positions(3, b);
            assert_eq!(
                find(&pos, StarName::Tianxi),
                find(&pos, StarName::Hongluan).clash()
            );
        }
    }
}
