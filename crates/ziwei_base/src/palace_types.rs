//! Types for the twelve-house ring.

use serde::{Deserialize, Serialize};

use crate::branch::EarthlyBranch;
use crate::star::{Mutagen, Star, StarKind, StarName};
use crate::stem::HeavenlyStem;
use crate::util::wrap_branch;

/// The twelve house roles, in ring order starting at the soul house.
///
/// Ring position `i` holds branch `soul + i`, so walking forward through
/// the branches visits parents, fortune, property and so on, reaching
/// siblings last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[allow(missing_docs)]
pub enum HouseRole {
    Soul,
    Parents,
    Fortune,
    Property,
    Career,
    Friends,
    Travel,
    Health,
    Wealth,
    Children,
    Spouse,
    Siblings,
}

/// All 12 roles in ring order (index 0 = Soul).
pub const ALL_HOUSE_ROLES: [HouseRole; 12] = [
    HouseRole::Soul,
    HouseRole::Parents,
    HouseRole::Fortune,
    HouseRole::Property,
    HouseRole::Career,
    HouseRole::Friends,
    HouseRole::Travel,
    HouseRole::Health,
    HouseRole::Wealth,
    HouseRole::Children,
    HouseRole::Spouse,
    HouseRole::Siblings,
];

impl HouseRole {
    /// Stable identifier, e.g. `"soul"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Soul => "soul",
            Self::Parents => "parents",
            Self::Fortune => "fortune",
            Self::Property => "property",
            Self::Career => "career",
            Self::Friends => "friends",
            Self::Travel => "travel",
            Self::Health => "health",
            Self::Wealth => "wealth",
            Self::Children => "children",
            Self::Spouse => "spouse",
            Self::Siblings => "siblings",
        }
    }

    /// Ring position of this role in the natal chart.
    pub const fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(i: i32) -> Self {
        ALL_HOUSE_ROLES[wrap_branch(i) as usize]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ALL_HOUSE_ROLES.into_iter().find(|r| r.name() == name)
    }
}

impl std::fmt::Display for HouseRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Inclusive nominal-age range of one decade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DecadalRange {
    pub start_age: u32,
    pub end_age: u32,
}

impl DecadalRange {
    pub const fn contains(self, age: u32) -> bool {
        age >= self.start_age && age <= self.end_age
    }
}

/// Soul/body placement, computed once per chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ChartSkeleton {
    /// Branch index of the soul house.
    pub soul_index: u8,
    /// Branch index of the body house.
    pub body_index: u8,
    pub soul_stem: HeavenlyStem,
    pub soul_branch: EarthlyBranch,
}

/// One house of the ring.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct House {
    /// Ring position, 0 = soul house.
    pub index: u8,
    pub role: HouseRole,
    pub stem: HeavenlyStem,
    pub branch: EarthlyBranch,
    pub is_soul_house: bool,
    pub is_body_house: bool,
    pub major_stars: Vec<Star>,
    /// Auxiliary stars (soft, tough, lucun, tianma).
    pub minor_stars: Vec<Star>,
    pub adjective_stars: Vec<Star>,
    /// Decade governed by this house.
    pub decadal: Option<DecadalRange>,
    /// Nominal ages (up to 120) whose small limit falls here.
    pub ages: Vec<u32>,
}

impl House {
    pub fn new(index: u8, role: HouseRole, stem: HeavenlyStem, branch: EarthlyBranch) -> Self {
        Self {
            index,
            role,
            stem,
            branch,
            is_soul_house: false,
            is_body_house: false,
            major_stars: Vec::new(),
            minor_stars: Vec::new(),
            adjective_stars: Vec::new(),
            decadal: None,
            ages: Vec::new(),
        }
    }

    /// Append a star to the collection matching its kind.
    pub fn push_star(&mut self, star: Star) {
        match star.kind {
            StarKind::Major => self.major_stars.push(star),
            StarKind::Adjective => self.adjective_stars.push(star),
            _ => self.minor_stars.push(star),
        }
    }

    /// All stars: major, then minor, then adjective.
    pub fn stars(&self) -> impl Iterator<Item = &Star> {
        self.major_stars
            .iter()
            .chain(&self.minor_stars)
            .chain(&self.adjective_stars)
    }

    pub fn stars_mut(&mut self) -> impl Iterator<Item = &mut Star> {
        self.major_stars
            .iter_mut()
            .chain(&mut self.minor_stars)
            .chain(&mut self.adjective_stars)
    }

    pub fn star(&self, name: StarName) -> Option<&Star> {
        self.stars().find(|s| s.name == name)
    }

    /// Whether every named star is here.
    pub fn has(&self, names: &[StarName]) -> bool {
        names.iter().all(|n| self.star(*n).is_some())
    }

    /// Whether at least one named star is here.
    pub fn has_one_of(&self, names: &[StarName]) -> bool {
        names.iter().any(|n| self.star(*n).is_some())
    }

    /// Whether none of the named stars is here.
    pub fn not_have(&self, names: &[StarName]) -> bool {
        !self.has_one_of(names)
    }

    /// Whether any star here carries the mutagen.
    pub fn has_mutagen(&self, mutagen: Mutagen) -> bool {
        self.stars().any(|s| s.mutagen == Some(mutagen))
    }

    /// No major star apart from the excluded ones.
    pub fn is_empty(&self, exclude: &[StarName]) -> bool {
        self.major_stars.iter().all(|s| exclude.contains(&s.name))
    }
}
