//! Five-elements class (wu xing ju) of a stem-branch pair.
//!
//! The class number (2-6) is the cycle length of the major-star search
//! and the starting age of the first decade.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::element::Element;
use crate::stem::HeavenlyStem;

/// The five classes, named by element and number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FiveElementsClass {
    /// 水二局
    Water2,
    /// 木三局
    Wood3,
    /// 金四局
    Metal4,
    /// 土五局
    Earth5,
    /// 火六局
    Fire6,
}

const W2: FiveElementsClass = FiveElementsClass::Water2;
const W3: FiveElementsClass = FiveElementsClass::Wood3;
const M4: FiveElementsClass = FiveElementsClass::Metal4;
const E5: FiveElementsClass = FiveElementsClass::Earth5;
const F6: FiveElementsClass = FiveElementsClass::Fire6;

/// Class by [stem][branch] (rows 甲..癸, columns 子..亥).
///
/// Each reachable cell is the nayin element of that sexagenary pair. Cells
/// whose stem and branch parity differ never occur and mirror the partner
/// stem.
#[rustfmt::skip]
const CLASS_TABLE: [[FiveElementsClass; 12]; 10] = [
    [M4, M4, W2, W2, F6, F6, M4, M4, W2, W2, F6, F6],
    [M4, M4, W2, W2, F6, F6, M4, M4, W2, W2, F6, F6],
    [W2, W2, F6, F6, E5, E5, W2, W2, F6, F6, E5, E5],
    [W2, W2, F6, F6, E5, E5, W2, W2, F6, F6, E5, E5],
    [F6, F6, E5, E5, W3, W3, F6, F6, E5, E5, W3, W3],
    [F6, F6, E5, E5, W3, W3, F6, F6, E5, E5, W3, W3],
    [E5, E5, W3, W3, M4, M4, E5, E5, W3, W3, M4, M4],
    [E5, E5, W3, W3, M4, M4, E5, E5, W3, W3, M4, M4],
    [W3, W3, M4, M4, W2, W2, W3, W3, M4, M4, W2, W2],
    [W3, W3, M4, M4, W2, W2, W3, W3, M4, M4, W2, W2],
];

impl FiveElementsClass {
    /// Class number, 2-6.
    pub const fn value(self) -> u8 {
        match self {
            Self::Water2 => 2,
            Self::Wood3 => 3,
            Self::Metal4 => 4,
            Self::Earth5 => 5,
            Self::Fire6 => 6,
        }
    }

    pub const fn from_value(v: u8) -> Option<Self> {
        match v {
            2 => Some(Self::Water2),
            3 => Some(Self::Wood3),
            4 => Some(Self::Metal4),
            5 => Some(Self::Earth5),
            6 => Some(Self::Fire6),
            _ => None,
        }
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Water2 => Element::Water,
            Self::Wood3 => Element::Wood,
            Self::Metal4 => Element::Metal,
            Self::Earth5 => Element::Earth,
            Self::Fire6 => Element::Fire,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Water2 => "water2",
            Self::Wood3 => "wood3",
            Self::Metal4 => "metal4",
            Self::Earth5 => "earth5",
            Self::Fire6 => "fire6",
        }
    }
}

/// Five-elements class of a stem-branch pair.
pub fn class_of(stem: HeavenlyStem, branch: EarthlyBranch) -> FiveElementsClass {
    CLASS_TABLE[stem.index() as usize][branch.index() as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;
    use crate::stem::ALL_STEMS;

    #[test]
    fn wu_yin_is_earth5() {
        // 戊寅己卯城头土
        assert_eq!(
            class_of(HeavenlyStem::Wu, EarthlyBranch::Yin),
            FiveElementsClass::Earth5
        );
    }

    #[test]
    fn jia_zi_is_metal4() {
        // 甲子乙丑海中金
        assert_eq!(
            class_of(HeavenlyStem::Jia, EarthlyBranch::Zi),
            FiveElementsClass::Metal4
        );
    }

    #[test]
    fn bing_zi_is_water2() {
        // 丙子丁丑涧下水
        assert_eq!(
            class_of(HeavenlyStem::Bing, EarthlyBranch::Zi),
            FiveElementsClass::Water2
        );
    }

    #[test]
    fn ren_wu_is_wood3() {
        // 壬午癸未杨柳木
        assert_eq!(
            class_of(HeavenlyStem::Ren, EarthlyBranch::Wu),
            FiveElementsClass::Wood3
        );
    }

    #[test]
    fn gui_hai_is_water2() {
        // 壬戌癸亥大海水
        assert_eq!(
            class_of(HeavenlyStem::Gui, EarthlyBranch::Hai),
            FiveElementsClass::Water2
        );
    }

    /// The sixty pairs hold thirty nayin, six per element.
    #[test]
    fn twelve_pairs_per_class() {
        let mut counts = [0usize; 7];
        for s in ALL_STEMS {
            for b in ALL_BRANCHES {
                if s.index() % 2 == b.index() % 2 {
                    counts[class_of(s, b).value() as usize] += 1;
                }
            }
        }
        assert_eq!(counts[2..], [12, 12, 12, 12, 12]);
    }

    #[test]
    fn fire_pairs() {
        // 丙寅丁卯炉中火, 戊午己未天上火, 甲戌乙亥山头火
        for (s, b) in [
            (HeavenlyStem::Bing, EarthlyBranch::Yin),
            (HeavenlyStem::Ji, EarthlyBranch::Wei),
            (HeavenlyStem::Jia, EarthlyBranch::Xu),
        ] {
            assert_eq!(class_of(s, b), FiveElementsClass::Fire6, "{s}{b}");
        }
    }

    #[test]
    fn table_values_in_range() {
        for s in ALL_STEMS {
            for b in ALL_BRANCHES {
                let v = class_of(s, b).value();
                assert!((2..=6).contains(&v));
                assert_eq!(FiveElementsClass::from_value(v), Some(class_of(s, b)));
            }
        }
    }
}
