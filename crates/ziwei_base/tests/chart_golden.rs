//! Golden-value tests for a full natal chart and its overlays.
//!
//! Reference chart: solar 2000-08-16, 午 slot (index 6), male.
//! Lunar 庚辰 year, month 7 day 17; soul and body both at 寅 (戊寅),
//! five-elements class 土五局.

use ziwei_base::{
    Brightness, Chart, ChartInput, EarthlyBranch, FiveElementsClass, Gender, HeavenlyStem,
    HouseRole, Mutagen, NaiveDate, Scope, StarName, TimeSlot, WesternSign, ZodiacAnimal,
    build_chart,
};

use EarthlyBranch::*;

fn golden() -> Chart {
    let date = NaiveDate::from_ymd_opt(2000, 8, 16).unwrap();
    build_chart(&ChartInput::solar(date, TimeSlot::new(6).unwrap(), Gender::Male)).unwrap()
}

fn branch_of(chart: &Chart, name: StarName) -> EarthlyBranch {
    chart.find_star(name).map(|(h, _)| h.branch).unwrap()
}

/// Calendar and pillar metadata.
#[test]
fn metadata() {
    let c = golden();
    assert_eq!(
        (c.lunar_date.year, c.lunar_date.month, c.lunar_date.day),
        (2000, 7, 17)
    );
    assert!(!c.lunar_date.is_leap_month);
    assert_eq!(c.pillars.year.to_string(), "geng-chen");
    assert_eq!(c.pillars.month.to_string(), "jia-shen");
    assert_eq!(c.pillars.day.to_string(), "bing-wu");
    assert_eq!(c.pillars.hour.to_string(), "jia-wu");
    assert_eq!(c.zodiac, ZodiacAnimal::Dragon);
    assert_eq!(c.sign, WesternSign::Leo);
}

/// Soul/body and class.
#[test]
fn soul_body_and_class() {
    let c = golden();
    assert_eq!(c.soul_branch, Yin);
    assert_eq!(c.body_branch, Yin);
    assert_eq!(c.soul_house().stem, HeavenlyStem::Wu);
    assert!(c.soul_house().is_body_house);
    assert_eq!(c.five_elements_class, FiveElementsClass::Earth5);
}

/// House roles and stems by branch.
#[test]
fn house_ring() {
    let c = golden();
    let expected = [
        (Zi, HouseRole::Spouse, HeavenlyStem::Wu),
        (Chou, HouseRole::Siblings, HeavenlyStem::Ji),
        (Yin, HouseRole::Soul, HeavenlyStem::Wu),
        (Mao, HouseRole::Parents, HeavenlyStem::Ji),
        (Chen, HouseRole::Fortune, HeavenlyStem::Geng),
        (Si, HouseRole::Property, HeavenlyStem::Xin),
        (Wu, HouseRole::Career, HeavenlyStem::Ren),
        (Wei, HouseRole::Friends, HeavenlyStem::Gui),
        (Shen, HouseRole::Travel, HeavenlyStem::Jia),
        (You, HouseRole::Health, HeavenlyStem::Yi),
        (Xu, HouseRole::Wealth, HeavenlyStem::Bing),
        (Hai, HouseRole::Children, HeavenlyStem::Ding),
    ];
    for (branch, role, stem) in expected {
        let h = c.house_at(branch).unwrap();
        assert_eq!(h.role, role, "{branch}");
        assert_eq!(h.stem, stem, "{branch}");
    }
}

/// All 14 major stars.
#[test]
fn major_stars() {
    let c = golden();
    let expected = [
        (StarName::Ziwei, Yin),
        (StarName::Tianji, Chou),
        (StarName::Taiyang, Hai),
        (StarName::Wuqu, Xu),
        (StarName::Tiantong, You),
        (StarName::Lianzhen, Wu),
        (StarName::Tianfu, Yin),
        (StarName::Taiyin, Mao),
        (StarName::Tanlang, Chen),
        (StarName::Jumen, Si),
        (StarName::Tianxiang, Wu),
        (StarName::Tianliang, Wei),
        (StarName::Qisha, Shen),
        (StarName::Pojun, Zi),
    ];
    for (name, branch) in expected {
        assert_eq!(branch_of(&c, name), branch, "{name}");
    }
}

/// All 14 auxiliary stars.
#[test]
fn auxiliary_stars() {
    let c = golden();
    let expected = [
        (StarName::Zuofu, Xu),
        (StarName::Youbi, Chen),
        (StarName::Wenchang, Chen),
        (StarName::Wenqu, Xu),
        (StarName::Tiankui, Wu),
        (StarName::Tianyue, Yin),
        (StarName::Huoxing, Shen),
        (StarName::Lingxing, Chen),
        (StarName::Dikong, Si),
        (StarName::Dijie, Si),
        (StarName::Lucun, Shen),
        (StarName::Qingyang, You),
        (StarName::Tuoluo, Wei),
        (StarName::Tianma, Yin),
    ];
    for (name, branch) in expected {
        assert_eq!(branch_of(&c, name), branch, "{name}");
    }
}

/// All 6 adjective stars.
#[test]
fn adjective_stars() {
    let c = golden();
    let expected = [
        (StarName::Hongluan, Hai),
        (StarName::Tianxi, Si),
        (StarName::Tianxing, Mao),
        (StarName::Tianyao, Wei),
        (StarName::Tianku, Yin),
        (StarName::Tianxu, Xu),
    ];
    for (name, branch) in expected {
        assert_eq!(branch_of(&c, name), branch, "{name}");
    }
}

/// 庚 year mutagens.
#[test]
fn birth_year_mutagens() {
    let c = golden();
    let expected = [
        (StarName::Taiyang, Mutagen::Prosperity),
        (StarName::Wuqu, Mutagen::Authority),
        (StarName::Taiyin, Mutagen::Fame),
        (StarName::Tiantong, Mutagen::Adversity),
    ];
    for (name, m) in expected {
        let (_, s) = c.find_star(name).unwrap();
        assert_eq!(s.mutagen, Some(m), "{name}");
    }
    let tagged = c
        .houses
        .iter()
        .flat_map(|h| h.stars())
        .filter(|s| s.mutagen.is_some())
        .count();
    assert_eq!(tagged, 4);
}

/// A few brightness cells.
#[test]
fn brightness() {
    let c = golden();
    let b = |n| c.find_star(n).unwrap().1.brightness;
    assert_eq!(b(StarName::Ziwei), Some(Brightness::Prosperous));
    assert_eq!(b(StarName::Tianfu), Some(Brightness::Temple));
    assert_eq!(b(StarName::Taiyang), Some(Brightness::Trapped));
    assert_eq!(b(StarName::Lucun), None);
}

/// Soul star by soul branch, body star by year branch.
#[test]
fn soul_and_body_stars() {
    let c = golden();
    assert_eq!(c.soul_star, Yin.soul_star());
    assert_eq!(c.body_star, Chen.body_star());
}

/// Decade ranges: 土五局 male in a yang year walks forward.
#[test]
fn decades_forward() {
    let c = golden();
    assert!(c.decades_forward());
    let soul = c.house(HouseRole::Soul).decadal.unwrap();
    assert_eq!((soul.start_age, soul.end_age), (5, 14));
    let parents = c.house(HouseRole::Parents).decadal.unwrap();
    assert_eq!((parents.start_age, parents.end_age), (15, 24));
    let siblings = c.house(HouseRole::Siblings).decadal.unwrap();
    assert_eq!((siblings.start_age, siblings.end_age), (115, 124));
}

/// Small-limit ages start at the soul house for age 1.
#[test]
fn small_limit_ages() {
    let c = golden();
    assert_eq!(&c.soul_house().ages[..3], &[1, 13, 25]);
    assert_eq!(&c.house(HouseRole::Parents).ages[..2], &[2, 14]);
    let total: usize = c.houses.iter().map(|h| h.ages.len()).sum();
    assert_eq!(total, 120);
}

/// Overlays for 2024-06-01 午 (lunar 2024-4-25, nominal age 25).
#[test]
fn horoscope_2024() {
    let c = golden();
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let h = c.compute_horoscope(date, TimeSlot::new(6).unwrap()).unwrap();
    assert_eq!(h.nominal_age, 25);

    // decade 25-34 sits two houses forward, at 庚辰
    assert_eq!(h.decadal.index, 2);
    assert_eq!(h.decadal.branch, Chen);
    assert_eq!(h.decadal.stem, HeavenlyStem::Geng);
    let range = h.decadal.decadal.unwrap();
    assert_eq!((range.start_age, range.end_age), (25, 34));
    assert_eq!(h.decadal.roles[2], HouseRole::Soul);

    assert_eq!(h.age.index, 0);

    assert_eq!(h.yearly.stem, HeavenlyStem::Jia);
    assert_eq!(h.yearly.branch, Chen);
    assert_eq!(h.yearly.index, 2);
    assert_eq!(h.monthly.stem, HeavenlyStem::Ji);
    assert_eq!(h.monthly.branch, Si);
    assert_eq!(h.monthly.index, 3);
    assert_eq!(h.daily.stem, HeavenlyStem::Bing);
    assert_eq!(h.daily.branch, Shen);
    assert_eq!(h.daily.index, 6);
    assert_eq!(h.hourly.stem, HeavenlyStem::Jia);
    assert_eq!(h.hourly.branch, Wu);
    assert_eq!(h.hourly.index, 4);
}

/// Yearly 甲 mutagens land as yearly-scoped copies; natal tags stay put.
#[test]
fn yearly_mutagen_copies() {
    let c = golden();
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let h = c.compute_horoscope(date, TimeSlot::new(6).unwrap()).unwrap();
    assert_eq!(
        h.yearly.mutagen_stars,
        [
            StarName::Lianzhen,
            StarName::Pojun,
            StarName::Wuqu,
            StarName::Taiyang
        ]
    );
    // 廉贞 sits at 午, ring position 4
    let lianzhen: Vec<_> = h.yearly.stars_in(4).collect();
    assert!(lianzhen.iter().any(|s| s.name == StarName::Lianzhen
        && s.scope == Scope::Yearly
        && s.mutagen == Some(Mutagen::Prosperity)));
    // natal 廉贞 untouched
    let (_, natal) = c.find_star(StarName::Lianzhen).unwrap();
    assert_eq!(natal.mutagen, None);
}

/// Yearly moving stars for 甲辰.
#[test]
fn yearly_moving_stars() {
    let c = golden();
    let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    let h = c.compute_horoscope(date, TimeSlot::new(6).unwrap()).unwrap();
    let at = |name: StarName| {
        h.yearly
            .stars
            .iter()
            .find(|p| p.star.name == name && p.star.mutagen.is_none())
            .map(|p| c.houses[p.house_index as usize].branch)
    };
    assert_eq!(at(StarName::Lucun), Some(Yin));
    assert_eq!(at(StarName::Qingyang), Some(Mao));
    assert_eq!(at(StarName::Tuoluo), Some(Chou));
    assert_eq!(at(StarName::Tiankui), Some(Chou));
    assert_eq!(at(StarName::Tianyue), Some(Wei));
    assert_eq!(at(StarName::Tianma), Some(Yin));
}

/// 火星/铃星 for one birth year in each triad, all at the 午 slot.
#[test]
fn huo_ling_each_triad() {
    let cases = [
        // 庚辰, 申子辰: 火 from 寅, 铃 from 戌
        (2000, Shen, Chen),
        // 辛巳, 巳酉丑: 火 from 卯, 铃 from 戌
        (2001, You, Chen),
        // 壬午, 寅午戌: 火 from 丑, 铃 from 卯
        (2002, Wei, You),
        // 癸未, 亥卯未: 火 from 酉, 铃 from 戌
        (2003, Mao, Chen),
    ];
    for (year, huo, ling) in cases {
        let date = NaiveDate::from_ymd_opt(year, 8, 16).unwrap();
        let c = build_chart(&ChartInput::solar(date, TimeSlot::new(6).unwrap(), Gender::Male))
            .unwrap();
        assert_eq!(branch_of(&c, StarName::Huoxing), huo, "{year}");
        assert_eq!(branch_of(&c, StarName::Lingxing), ling, "{year}");
    }
}
