//! Star identifiers, categories, and per-placement annotations.

use serde::{Deserialize, Serialize};

/// Every star this crate places.
///
/// The first 14 are the major stars, the next 14 the auxiliary stars,
/// and the last 6 the adjective (miscellaneous) stars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum StarName {
    // major, 紫微 group
    Ziwei,
    Tianji,
    Taiyang,
    Wuqu,
    Tiantong,
    Lianzhen,
    // major, 天府 group
    Tianfu,
    Taiyin,
    Tanlang,
    Jumen,
    Tianxiang,
    Tianliang,
    Qisha,
    Pojun,
    // auxiliary
    Zuofu,
    Youbi,
    Wenchang,
    Wenqu,
    Tiankui,
    Tianyue,
    Huoxing,
    Lingxing,
    Dikong,
    Dijie,
    Lucun,
    Qingyang,
    Tuoluo,
    Tianma,
    // adjective
    Hongluan,
    Tianxi,
    Tianxing,
    Tianyao,
    Tianku,
    Tianxu,
}

/// The 14 major stars in table order.
pub const MAJOR_STARS: [StarName; 14] = [
    StarName::Ziwei,
    StarName::Tianji,
    StarName::Taiyang,
    StarName::Wuqu,
    StarName::Tiantong,
    StarName::Lianzhen,
    StarName::Tianfu,
    StarName::Taiyin,
    StarName::Tanlang,
    StarName::Jumen,
    StarName::Tianxiang,
    StarName::Tianliang,
    StarName::Qisha,
    StarName::Pojun,
];

/// The 14 auxiliary stars.
pub const AUXILIARY_STARS: [StarName; 14] = [
    StarName::Zuofu,
    StarName::Youbi,
    StarName::Wenchang,
    StarName::Wenqu,
    StarName::Tiankui,
    StarName::Tianyue,
    StarName::Huoxing,
    StarName::Lingxing,
    StarName::Dikong,
    StarName::Dijie,
    StarName::Lucun,
    StarName::Qingyang,
    StarName::Tuoluo,
    StarName::Tianma,
];

/// The 6 adjective stars.
pub const ADJECTIVE_STARS: [StarName; 6] = [
    StarName::Hongluan,
    StarName::Tianxi,
    StarName::Tianxing,
    StarName::Tianyao,
    StarName::Tianku,
    StarName::Tianxu,
];

impl StarName {
    /// Stable identifier, e.g. `"ziwei"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ziwei => "ziwei",
            Self::Tianji => "tianji",
            Self::Taiyang => "taiyang",
            Self::Wuqu => "wuqu",
            Self::Tiantong => "tiantong",
            Self::Lianzhen => "lianzhen",
            Self::Tianfu => "tianfu",
            Self::Taiyin => "taiyin",
            Self::Tanlang => "tanlang",
            Self::Jumen => "jumen",
            Self::Tianxiang => "tianxiang",
            Self::Tianliang => "tianliang",
            Self::Qisha => "qisha",
            Self::Pojun => "pojun",
            Self::Zuofu => "zuofu",
            Self::Youbi => "youbi",
            Self::Wenchang => "wenchang",
            Self::Wenqu => "wenqu",
            Self::Tiankui => "tiankui",
            Self::Tianyue => "tianyue",
            Self::Huoxing => "huoxing",
            Self::Lingxing => "lingxing",
            Self::Dikong => "dikong",
            Self::Dijie => "dijie",
            Self::Lucun => "lucun",
            Self::Qingyang => "qingyang",
            Self::Tuoluo => "tuoluo",
            Self::Tianma => "tianma",
            Self::Hongluan => "hongluan",
            Self::Tianxi => "tianxi",
            Self::Tianxing => "tianxing",
            Self::Tianyao => "tianyao",
            Self::Tianku => "tianku",
            Self::Tianxu => "tianxu",
        }
    }

    /// Every star, in declaration order.
    pub fn all() -> impl Iterator<Item = StarName> {
        MAJOR_STARS
            .into_iter()
            .chain(AUXILIARY_STARS)
            .chain(ADJECTIVE_STARS)
    }

    /// Look up by stable identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().find(|s| s.name() == name)
    }

    pub const fn kind(self) -> StarKind {
        match self {
            Self::Ziwei
            | Self::Tianji
            | Self::Taiyang
            | Self::Wuqu
            | Self::Tiantong
            | Self::Lianzhen
            | Self::Tianfu
            | Self::Taiyin
            | Self::Tanlang
            | Self::Jumen
            | Self::Tianxiang
            | Self::Tianliang
            | Self::Qisha
            | Self::Pojun => StarKind::Major,
            Self::Zuofu
            | Self::Youbi
            | Self::Wenchang
            | Self::Wenqu
            | Self::Tiankui
            | Self::Tianyue => StarKind::Soft,
            Self::Huoxing
            | Self::Lingxing
            | Self::Dikong
            | Self::Dijie
            | Self::Qingyang
            | Self::Tuoluo => StarKind::Tough,
            Self::Lucun => StarKind::Lucun,
            Self::Tianma => StarKind::Tianma,
            Self::Hongluan
            | Self::Tianxi
            | Self::Tianxing
            | Self::Tianyao
            | Self::Tianku
            | Self::Tianxu => StarKind::Adjective,
        }
    }

    pub const fn is_major(self) -> bool {
        matches!(self.kind(), StarKind::Major)
    }

    /// Row in the 14-star major tables, `None` for non-major stars.
    pub const fn major_index(self) -> Option<usize> {
        let i = self as usize;
        if i < MAJOR_STARS.len() { Some(i) } else { None }
    }
}

impl std::fmt::Display for StarName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Star category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StarKind {
    /// One of the 14 major stars.
    Major,
    /// Auspicious auxiliary (左右昌曲魁钺).
    Soft,
    /// Malefic auxiliary (火铃空劫羊陀).
    Tough,
    /// 禄存.
    Lucun,
    /// 天马.
    Tianma,
    /// Miscellaneous minor stars.
    Adjective,
}

/// Which chart layer produced a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum Scope {
    Natal,
    Decadal,
    Age,
    Yearly,
    Monthly,
    Daily,
    Hourly,
}

impl Scope {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Natal => "natal",
            Self::Decadal => "decadal",
            Self::Age => "age",
            Self::Yearly => "yearly",
            Self::Monthly => "monthly",
            Self::Daily => "daily",
            Self::Hourly => "hourly",
        }
    }
}

/// Seven-level brightness of a major star in a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Brightness {
    /// 庙
    Temple,
    /// 旺
    Prosperous,
    /// 得
    Gained,
    /// 利
    Beneficial,
    /// 平
    Neutral,
    /// 不
    Weak,
    /// 陷
    Trapped,
}

impl Brightness {
    /// Ordinal strength, 6 (temple) down to 0 (trapped).
    pub const fn rank(self) -> u8 {
        6 - self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Temple => "temple",
            Self::Prosperous => "prosperous",
            Self::Gained => "gained",
            Self::Beneficial => "beneficial",
            Self::Neutral => "neutral",
            Self::Weak => "weak",
            Self::Trapped => "trapped",
        }
    }
}

/// The four transformations (si hua).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mutagen {
    /// 化禄
    Prosperity,
    /// 化权
    Authority,
    /// 化科
    Fame,
    /// 化忌
    Adversity,
}

/// The four mutagens in table-column order.
pub const ALL_MUTAGENS: [Mutagen; 4] = [
    Mutagen::Prosperity,
    Mutagen::Authority,
    Mutagen::Fame,
    Mutagen::Adversity,
];

impl Mutagen {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Prosperity => "prosperity",
            Self::Authority => "authority",
            Self::Fame => "fame",
            Self::Adversity => "adversity",
        }
    }
}

/// A star as placed in a house.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Star {
    pub name: StarName,
    pub kind: StarKind,
    pub scope: Scope,
    pub brightness: Option<Brightness>,
    pub mutagen: Option<Mutagen>,
}

impl Star {
    /// A bare star of the given scope.
    pub const fn new(name: StarName, scope: Scope) -> Self {
        Self {
            name,
            kind: name.kind(),
            scope,
            brightness: None,
            mutagen: None,
        }
    }

    /// A bare natal star.
    pub const fn natal(name: StarName) -> Self {
        Self::new(name, Scope::Natal)
    }
}
