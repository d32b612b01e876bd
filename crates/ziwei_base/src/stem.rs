//! The ten heavenly stems (tian gan).
//!
//! Clean-room: standard sexagenary-cycle tables, public domain.

use serde::{Deserialize, Serialize};

use crate::element::{Element, YinYang};
use crate::mutagen::MUTAGEN_STARS;
use crate::star::StarName;
use crate::util::wrap_stem;

/// The 10 heavenly stems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum HeavenlyStem {
    Jia,
    Yi,
    Bing,
    Ding,
    Wu,
    Ji,
    Geng,
    Xin,
    Ren,
    Gui,
}

/// All 10 stems in cycle order (index 0 = Jia).
pub const ALL_STEMS: [HeavenlyStem; 10] = [
    HeavenlyStem::Jia,
    HeavenlyStem::Yi,
    HeavenlyStem::Bing,
    HeavenlyStem::Ding,
    HeavenlyStem::Wu,
    HeavenlyStem::Ji,
    HeavenlyStem::Geng,
    HeavenlyStem::Xin,
    HeavenlyStem::Ren,
    HeavenlyStem::Gui,
];

impl HeavenlyStem {
    /// Stable identifier, e.g. `"jia"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Jia => "jia",
            Self::Yi => "yi",
            Self::Bing => "bing",
            Self::Ding => "ding",
            Self::Wu => "wu",
            Self::Ji => "ji",
            Self::Geng => "geng",
            Self::Xin => "xin",
            Self::Ren => "ren",
            Self::Gui => "gui",
        }
    }

    /// 0-based index (Jia = 0).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Stem at any signed cycle position (wraps mod 10).
    pub fn from_index(i: i32) -> Self {
        ALL_STEMS[wrap_stem(i) as usize]
    }

    /// Stem `steps` positions later in the cycle (negative counts back).
    pub fn advance(self, steps: i32) -> Self {
        Self::from_index(self.index() as i32 + steps)
    }

    pub const fn yin_yang(self) -> YinYang {
        YinYang::from_ordinal(self.index())
    }

    pub const fn element(self) -> Element {
        match self {
            Self::Jia | Self::Yi => Element::Wood,
            Self::Bing | Self::Ding => Element::Fire,
            Self::Wu | Self::Ji => Element::Earth,
            Self::Geng | Self::Xin => Element::Metal,
            Self::Ren | Self::Gui => Element::Water,
        }
    }

    /// The stem this one clashes with.
    pub const fn clash(self) -> Self {
        match self {
            Self::Jia => Self::Geng,
            Self::Yi => Self::Xin,
            Self::Bing => Self::Ren,
            Self::Ding => Self::Gui,
            Self::Wu => Self::Jia,
            Self::Ji => Self::Yi,
            Self::Geng => Self::Jia,
            Self::Xin => Self::Yi,
            Self::Ren => Self::Bing,
            Self::Gui => Self::Ding,
        }
    }

    /// Stem of lunar month 1 (the Tiger month) in a year of this stem.
    pub const fn tiger_month_stem(self) -> Self {
        match self {
            Self::Jia | Self::Ji => Self::Bing,
            Self::Yi | Self::Geng => Self::Wu,
            Self::Bing | Self::Xin => Self::Geng,
            Self::Ding | Self::Ren => Self::Ren,
            Self::Wu | Self::Gui => Self::Jia,
        }
    }

    /// Stem of the Rat hour on a day of this stem.
    pub const fn rat_hour_stem(self) -> Self {
        match self {
            Self::Jia | Self::Ji => Self::Jia,
            Self::Yi | Self::Geng => Self::Bing,
            Self::Bing | Self::Xin => Self::Wu,
            Self::Ding | Self::Ren => Self::Geng,
            Self::Wu | Self::Gui => Self::Ren,
        }
    }

    /// Stars transformed under this stem, in prosperity, authority, fame, adversity order.
    pub const fn mutagen_stars(self) -> [StarName; 4] {
        MUTAGEN_STARS[self.index() as usize]
    }
}

impl std::fmt::Display for HeavenlyStem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
