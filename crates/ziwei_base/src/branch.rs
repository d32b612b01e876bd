//! The twelve earthly branches (di zhi) and their associations.
//!
//! Branch indices run 子 = 0 through 亥 = 11 everywhere in this crate.
//!
//! Clean-room: standard sexagenary-cycle tables, public domain.

use serde::{Deserialize, Serialize};

use crate::element::{Element, YinYang};
use crate::star::StarName;
use crate::util::wrap_branch;

/// The 12 earthly branches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum EarthlyBranch {
    Zi,
    Chou,
    Yin,
    Mao,
    Chen,
    Si,
    Wu,
    Wei,
    Shen,
    You,
    Xu,
    Hai,
}

/// All 12 branches in cycle order (index 0 = Zi).
pub const ALL_BRANCHES: [EarthlyBranch; 12] = [
    EarthlyBranch::Zi,
    EarthlyBranch::Chou,
    EarthlyBranch::Yin,
    EarthlyBranch::Mao,
    EarthlyBranch::Chen,
    EarthlyBranch::Si,
    EarthlyBranch::Wu,
    EarthlyBranch::Wei,
    EarthlyBranch::Shen,
    EarthlyBranch::You,
    EarthlyBranch::Xu,
    EarthlyBranch::Hai,
];

/// The twelve zodiac animals, one per branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum ZodiacAnimal {
    Rat,
    Ox,
    Tiger,
    Rabbit,
    Dragon,
    Snake,
    Horse,
    Goat,
    Monkey,
    Rooster,
    Dog,
    Pig,
}

const ALL_ANIMALS: [ZodiacAnimal; 12] = [
    ZodiacAnimal::Rat,
    ZodiacAnimal::Ox,
    ZodiacAnimal::Tiger,
    ZodiacAnimal::Rabbit,
    ZodiacAnimal::Dragon,
    ZodiacAnimal::Snake,
    ZodiacAnimal::Horse,
    ZodiacAnimal::Goat,
    ZodiacAnimal::Monkey,
    ZodiacAnimal::Rooster,
    ZodiacAnimal::Dog,
    ZodiacAnimal::Pig,
];

impl ZodiacAnimal {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rat => "Rat",
            Self::Ox => "Ox",
            Self::Tiger => "Tiger",
            Self::Rabbit => "Rabbit",
            Self::Dragon => "Dragon",
            Self::Snake => "Snake",
            Self::Horse => "Horse",
            Self::Goat => "Goat",
            Self::Monkey => "Monkey",
            Self::Rooster => "Rooster",
            Self::Dog => "Dog",
            Self::Pig => "Pig",
        }
    }
}

/// Descriptive body associations of a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BranchHealth {
    /// Internal organ.
    pub organ: &'static str,
    /// External body part.
    pub body_part: &'static str,
    /// Ailments traditionally associated with the branch.
    pub tip: &'static str,
}

const HEALTH: [BranchHealth; 12] = [
    BranchHealth {
        organ: "gallbladder",
        body_part: "lower body",
        tip: "reproductive system, bladder and urinary tract",
    },
    BranchHealth {
        organ: "abdomen",
        body_part: "hands and feet",
        tip: "spleen, stomach and intestines",
    },
    BranchHealth {
        organ: "liver",
        body_part: "limbs",
        tip: "liver, gallbladder, tendons and bones of the limbs",
    },
    BranchHealth {
        organ: "liver",
        body_part: "chest and back",
        tip: "liver, gallbladder and nervous system",
    },
    BranchHealth {
        organ: "chest",
        body_part: "head and face",
        tip: "spleen, stomach, chest and skin",
    },
    BranchHealth {
        organ: "heart",
        body_part: "face",
        tip: "heart and circulation",
    },
    BranchHealth {
        organ: "heart",
        body_part: "eyes",
        tip: "heart, eyes and blood pressure",
    },
    BranchHealth {
        organ: "spleen and stomach",
        body_part: "neck",
        tip: "spleen, stomach and neck",
    },
    BranchHealth {
        organ: "lungs",
        body_part: "spine",
        tip: "respiratory system and spine",
    },
    BranchHealth {
        organ: "lungs",
        body_part: "throat",
        tip: "respiratory system and throat",
    },
    BranchHealth {
        organ: "life gate",
        body_part: "legs and feet",
        tip: "stomach, legs, feet and joints",
    },
    BranchHealth {
        organ: "kidneys",
        body_part: "head and face",
        tip: "kidneys and urinary system",
    },
];

/// Soul star (ming zhu), keyed by the soul house branch.
const SOUL_STARS: [StarName; 12] = [
    StarName::Tanlang,
    StarName::Jumen,
    StarName::Lucun,
    StarName::Wenqu,
    StarName::Lianzhen,
    StarName::Wuqu,
    StarName::Pojun,
    StarName::Wuqu,
    StarName::Lianzhen,
    StarName::Wenqu,
    StarName::Lucun,
    StarName::Jumen,
];

/// Body star (shen zhu), keyed by the birth year branch.
const BODY_STARS: [StarName; 12] = [
    StarName::Huoxing,
    StarName::Tianxiang,
    StarName::Tianliang,
    StarName::Tiantong,
    StarName::Wenchang,
    StarName::Tianji,
    StarName::Huoxing,
    StarName::Tianxiang,
    StarName::Tianliang,
    StarName::Tiantong,
    StarName::Wenchang,
    StarName::Tianji,
];

/// One of the four three-branch seasonal groups (san he).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Triad {
    /// 寅午戌 (fire).
    YinWuXu,
    /// 申子辰 (water).
    ShenZiChen,
    /// 巳酉丑 (metal).
    SiYouChou,
    /// 亥卯未 (wood).
    HaiMaoWei,
}

impl EarthlyBranch {
    /// Stable identifier, e.g. `"zi"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Zi => "zi",
            Self::Chou => "chou",
            Self::Yin => "yin",
            Self::Mao => "mao",
            Self::Chen => "chen",
            Self::Si => "si",
            Self::Wu => "wu",
            Self::Wei => "wei",
            Self::Shen => "shen",
            Self::You => "you",
            Self::Xu => "xu",
            Self::Hai => "hai",
        }
    }

    /// 0-based index (Zi = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Branch at any signed cycle position (wraps mod 12).
    pub fn from_index(i: i32) -> Self {
        ALL_BRANCHES[wrap_branch(i) as usize]
    }

    /// Branch `steps` positions later (negative counts back).
    pub fn advance(self, steps: i32) -> Self {
        Self::from_index(self.index() as i32 + steps)
    }

    pub const fn yin_yang(self) -> YinYang {
        YinYang::from_ordinal(self.index())
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Zi | Self::Hai => Element::Water,
            Self::Yin | Self::Mao => Element::Wood,
            Self::Si | Self::Wu => Element::Fire,
            Self::Shen | Self::You => Element::Metal,
            Self::Chou | Self::Chen | Self::Wei | Self::Xu => Element::Earth,
        }
    }

    /// The opposite branch (six steps away).
    pub fn clash(self) -> Self {
        self.advance(6)
    }

    pub const fn zodiac(self) -> ZodiacAnimal {
        ALL_ANIMALS[self.index() as usize]
    }

    /// Soul star when this is the soul house branch.
    pub const fn soul_star(self) -> StarName {
        SOUL_STARS[self.index() as usize]
    }

    /// Body star when this is the birth year branch.
    pub const fn body_star(self) -> StarName {
        BODY_STARS[self.index() as usize]
    }

    pub const fn health(self) -> BranchHealth {
        HEALTH[self.index() as usize]
    }

    pub const fn triad(self) -> Triad {
        match self {
            Self::Yin | Self::Wu | Self::Xu => Triad::YinWuXu,
            Self::Shen | Self::Zi | Self::Chen => Triad::ShenZiChen,
            Self::Si | Self::You | Self::Chou => Triad::SiYouChou,
            Self::Hai | Self::Mao | Self::Wei => Triad::HaiMaoWei,
        }
    }
}

impl std::fmt::Display for EarthlyBranch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
