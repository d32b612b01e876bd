//! Five elements and yin/yang polarity.

use serde::{Deserialize, Serialize};

/// The five phases (wu xing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Element {
    Wood,
    Fire,
    Earth,
    Metal,
    Water,
}

impl Element {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Wood => "wood",
            Self::Fire => "fire",
            Self::Earth => "earth",
            Self::Metal => "metal",
            Self::Water => "water",
        }
    }
}

/// Yin/yang polarity of a stem or branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum YinYang {
    Yang,
    Yin,
}

impl YinYang {
    /// Even ordinals are yang, odd are yin, for both stems and branches.
    pub const fn from_ordinal(index: u8) -> Self {
        if index % 2 == 0 { Self::Yang } else { Self::Yin }
    }

    pub const fn is_yang(self) -> bool {
        matches!(self, Self::Yang)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Yang => "yang",
            Self::Yin => "yin",
        }
    }
}
