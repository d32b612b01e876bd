//! Query facade over a computed chart.

use serde::Serialize;
use ziwei_base::{
    Chart, DateError, Horoscope, House, HouseRole, Mutagen, NaiveDate, Star, StarName, TimeSlot,
};
use ziwei_calendar::parse_date;

use crate::error::ZiweiError;
use crate::labels::{role_from_chinese, role_from_english, star_from_chinese, star_from_english};

/// A natal chart with lookup helpers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Astrolabe {
    chart: Chart,
}

impl Astrolabe {
    pub fn new(chart: Chart) -> Self {
        Self { chart }
    }

    pub fn chart(&self) -> &Chart {
        &self.chart
    }

    pub fn into_chart(self) -> Chart {
        self.chart
    }

    /// House playing a natal role.
    pub fn palace(&self, role: HouseRole) -> &House {
        self.chart.house(role)
    }

    /// House at a ring position (0 = soul house).
    pub fn palace_at(&self, index: usize) -> Option<&House> {
        self.chart.houses.get(index)
    }

    /// House by identifier (`"wealth"`), Chinese name (`"财帛"`, `"财帛宫"`)
    /// or English label (`"Wealth"`).
    pub fn palace_named(&self, name: &str) -> Result<&House, ZiweiError> {
        let role = HouseRole::from_name(name)
            .or_else(|| role_from_chinese(name))
            .or_else(|| role_from_english(name))
            .ok_or_else(|| ZiweiError::UnknownName(name.to_string()))?;
        Ok(self.palace(role))
    }

    pub fn soul_palace(&self) -> &House {
        self.chart.soul_house()
    }

    pub fn body_palace(&self) -> &House {
        self.chart.body_house()
    }

    /// A star and the house it sits in.
    pub fn star(&self, name: StarName) -> Option<(&House, &Star)> {
        self.chart.find_star(name)
    }

    /// Star by identifier (`"ziwei"`), Chinese name or English label.
    pub fn star_named(&self, name: &str) -> Result<(&House, &Star), ZiweiError> {
        let star = StarName::from_name(name)
            .or_else(|| star_from_chinese(name))
            .or_else(|| star_from_english(name))
            .ok_or_else(|| ZiweiError::UnknownName(name.to_string()))?;
        self.star(star)
            .ok_or_else(|| ZiweiError::UnknownName(name.to_string()))
    }

    /// The target house with its opposite, wealth and career companions.
    pub fn surrounded_palaces(&self, role: HouseRole) -> SurroundedPalaces<'_> {
        let at = |offset: usize| &self.chart.houses[(role.index() as usize + offset) % 12];
        SurroundedPalaces {
            target: at(0),
            opposite: at(6),
            wealth: at(8),
            career: at(4),
        }
    }

    /// Houses with no major star.
    pub fn empty_palaces(&self) -> Vec<&House> {
        self.chart
            .houses
            .iter()
            .filter(|h| h.is_empty(&[]))
            .collect()
    }

    /// Overlays for a solar query date and slot.
    pub fn horoscope(&self, date: &str, slot: u8) -> Result<Horoscope, ZiweiError> {
        let date = parse_date(date)?;
        let slot = TimeSlot::new(slot)?;
        Ok(self.horoscope_at(date, slot)?)
    }

    pub fn horoscope_at(
        &self,
        date: NaiveDate,
        slot: TimeSlot,
    ) -> Result<Horoscope, DateError> {
        self.chart.compute_horoscope(date, slot)
    }
}

/// A house and the three houses that frame it.
#[derive(Debug, Clone, Copy)]
pub struct SurroundedPalaces<'a> {
    pub target: &'a House,
    /// Six houses away.
    pub opposite: &'a House,
    /// Eight houses after the target.
    pub wealth: &'a House,
    /// Four houses after the target.
    pub career: &'a House,
}

impl<'a> SurroundedPalaces<'a> {
    pub fn all(&self) -> [&'a House; 4] {
        [self.target, self.opposite, self.wealth, self.career]
    }

    fn stars(&self) -> impl Iterator<Item = &'a Star> + '_ {
        self.all().into_iter().flat_map(|h| h.stars())
    }

    /// Every named star sits in one of the four houses.
    pub fn has(&self, names: &[StarName]) -> bool {
        names.iter().all(|n| self.stars().any(|s| s.name == *n))
    }

    /// At least one named star sits in the four houses.
    pub fn has_one_of(&self, names: &[StarName]) -> bool {
        self.stars().any(|s| names.contains(&s.name))
    }

    pub fn not_have(&self, names: &[StarName]) -> bool {
        !self.has_one_of(names)
    }

    /// A star in the four houses carries the mutagen.
    pub fn have_mutagen(&self, mutagen: Mutagen) -> bool {
        self.all().iter().any(|h| h.has_mutagen(mutagen))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ziwei_base::{ChartInput, EarthlyBranch, Gender, build_chart};

    fn golden() -> Astrolabe {
        let date = NaiveDate::from_ymd_opt(2000, 8, 16).unwrap();
        let input = ChartInput::solar(date, TimeSlot::new(6).unwrap(), Gender::Male);
        Astrolabe::new(build_chart(&input).unwrap())
    }

    #[test]
    fn named_palaces_agree() {
        let a = golden();
        let by_role = a.palace(HouseRole::Wealth);
        assert_eq!(a.palace_named("wealth").unwrap(), by_role);
        assert_eq!(a.palace_named("财帛宫").unwrap(), by_role);
        assert_eq!(a.palace_named("Wealth").unwrap(), by_role);
        assert!(matches!(
            a.palace_named("nowhere"),
            Err(ZiweiError::UnknownName(_))
        ));
    }

    #[test]
    fn soul_palace_is_first() {
        let a = golden();
        assert_eq!(a.palace_at(0).unwrap(), a.soul_palace());
        assert!(a.palace_at(12).is_none());
        assert!(a.body_palace().is_body_house);
    }

    #[test]
    fn star_by_any_name() {
        let a = golden();
        let (h, _) = a.star_named("紫微").unwrap();
        assert_eq!(h.branch, EarthlyBranch::Yin);
        let (h2, _) = a.star_named("ziwei").unwrap();
        assert_eq!(h, h2);
        assert!(a.star_named("pluto").is_err());
    }

    #[test]
    fn surrounded_soul() {
        let a = golden();
        let s = a.surrounded_palaces(HouseRole::Soul);
        assert_eq!(s.target.role, HouseRole::Soul);
        assert_eq!(s.opposite.role, HouseRole::Travel);
        assert_eq!(s.wealth.role, HouseRole::Wealth);
        assert_eq!(s.career.role, HouseRole::Career);
        // 紫微 天府 in 寅, 七杀 in 申, 廉贞 天相 in 午
        assert!(s.has(&[StarName::Ziwei, StarName::Qisha, StarName::Lianzhen]));
        assert!(s.has_one_of(&[StarName::Tianxiang, StarName::Pojun]));
        assert!(s.not_have(&[StarName::Pojun]));
        // 武曲 化权 sits in the wealth house at 戌
        assert!(s.have_mutagen(Mutagen::Authority));
    }

    #[test]
    fn surrounded_wraps_ring() {
        let a = golden();
        let s = a.surrounded_palaces(HouseRole::Siblings);
        assert_eq!(s.opposite.role, HouseRole::Friends);
        assert_eq!(s.wealth.role, HouseRole::Health);
        assert_eq!(s.career.role, HouseRole::Property);
    }

    #[test]
    fn empty_palaces() {
        // every branch of the reference chart holds a major star
        assert!(golden().empty_palaces().is_empty());

        let date = NaiveDate::from_ymd_opt(1985, 3, 15).unwrap();
        let input = ChartInput::solar(date, TimeSlot::new(3).unwrap(), Gender::Female);
        let a = Astrolabe::new(build_chart(&input).unwrap());
        let mut empty: Vec<u8> = a.empty_palaces().iter().map(|h| h.branch.index()).collect();
        empty.sort();
        let want = [EarthlyBranch::Wu, EarthlyBranch::Wei, EarthlyBranch::Shen, EarthlyBranch::Xu];
        assert_eq!(empty, want.map(|b| b.index()).to_vec());
    }

    #[test]
    fn horoscope_from_strings() {
        let a = golden();
        let h = a.horoscope("2024-6-1", 6).unwrap();
        assert_eq!(h.nominal_age, 25);
        assert!(a.horoscope("2024-6-1", 13).is_err());
        assert!(a.horoscope("June 1", 6).is_err());
    }
}
