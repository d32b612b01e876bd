//! Localized display names.
//!
//! Chart construction never reads a locale; these tables only turn enum
//! values into text for output.

use std::str::FromStr;

use ziwei_base::{
    ALL_HOUSE_ROLES, Brightness, EarthlyBranch, FiveElementsClass, Gender, HeavenlyStem, HouseRole,
    Mutagen, Scope, StarName, ZodiacAnimal,
};
use ziwei_calendar::{LunarDate, WesternSign};

use crate::error::ConfigurationError;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    ZhCn,
    EnUs,
}

impl Locale {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::ZhCn => "zh-CN",
            Self::EnUs => "en-US",
        }
    }

    /// Parse a tag, falling back to [`Locale::ZhCn`] when unsupported.
    pub fn resolve(tag: &str) -> Self {
        tag.parse().unwrap_or_else(|e: ConfigurationError| {
            tracing::warn!(%e, "falling back to zh-CN");
            Self::ZhCn
        })
    }
}

impl FromStr for Locale {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "zh-cn" | "zh" | "zh-hans" => Ok(Self::ZhCn),
            "en-us" | "en" => Ok(Self::EnUs),
            _ => Err(ConfigurationError::UnsupportedLocale(s.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

/// A value with a display name per locale.
pub trait Label {
    fn label(&self, locale: Locale) -> &'static str;
}

fn pick(locale: Locale, zh: &'static str, en: &'static str) -> &'static str {
    match locale {
        Locale::ZhCn => zh,
        Locale::EnUs => en,
    }
}

const STEM_ZH: [&str; 10] = ["甲", "乙", "丙", "丁", "戊", "己", "庚", "辛", "壬", "癸"];
const STEM_EN: [&str; 10] = [
    "Jia", "Yi", "Bing", "Ding", "Wu", "Ji", "Geng", "Xin", "Ren", "Gui",
];

impl Label for HeavenlyStem {
    fn label(&self, locale: Locale) -> &'static str {
        let i = self.index() as usize;
        pick(locale, STEM_ZH[i], STEM_EN[i])
    }
}

const BRANCH_ZH: [&str; 12] = [
    "子", "丑", "寅", "卯", "辰", "巳", "午", "未", "申", "酉", "戌", "亥",
];
const BRANCH_EN: [&str; 12] = [
    "Zi", "Chou", "Yin", "Mao", "Chen", "Si", "Wu", "Wei", "Shen", "You", "Xu", "Hai",
];

impl Label for EarthlyBranch {
    fn label(&self, locale: Locale) -> &'static str {
        let i = self.index() as usize;
        pick(locale, BRANCH_ZH[i], BRANCH_EN[i])
    }
}

const ROLE_ZH: [&str; 12] = [
    "命宫", "父母", "福德", "田宅", "官禄", "仆役", "迁移", "疾厄", "财帛", "子女", "夫妻", "兄弟",
];
const ROLE_EN: [&str; 12] = [
    "Soul", "Parents", "Spirit", "Property", "Career", "Friends", "Travel", "Health", "Wealth",
    "Children", "Spouse", "Siblings",
];

impl Label for HouseRole {
    fn label(&self, locale: Locale) -> &'static str {
        let i = self.index() as usize;
        pick(locale, ROLE_ZH[i], ROLE_EN[i])
    }
}

/// Declaration order of [`StarName`].
const STAR_ZH: [&str; 34] = [
    "紫微", "天机", "太阳", "武曲", "天同", "廉贞", "天府", "太阴", "贪狼", "巨门", "天相", "天梁",
    "七杀", "破军", "左辅", "右弼", "文昌", "文曲", "天魁", "天钺", "火星", "铃星", "地空", "地劫",
    "禄存", "擎羊", "陀罗", "天马", "红鸾", "天喜", "天刑", "天姚", "天哭", "天虚",
];
const STAR_EN: [&str; 34] = [
    "Emperor",
    "Advisor",
    "Sun",
    "General",
    "Fortunate",
    "Judge",
    "Empress",
    "Moon",
    "Wolf",
    "Advocate",
    "Minister",
    "Sage",
    "Marshal",
    "Rebel",
    "Left Assistant",
    "Right Assistant",
    "Literary Talent",
    "Literary Art",
    "Heavenly Noble",
    "Heavenly Honor",
    "Fire",
    "Bell",
    "Void",
    "Robbery",
    "Salary",
    "Goat Blade",
    "Spinning Top",
    "Heavenly Horse",
    "Red Phoenix",
    "Happiness",
    "Punishment",
    "Romance",
    "Weeping",
    "Emptiness",
];

impl Label for StarName {
    fn label(&self, locale: Locale) -> &'static str {
        let i = *self as usize;
        pick(locale, STAR_ZH[i], STAR_EN[i])
    }
}

impl Label for Brightness {
    fn label(&self, locale: Locale) -> &'static str {
        match self {
            Self::Temple => pick(locale, "庙", "Temple"),
            Self::Prosperous => pick(locale, "旺", "Prosperous"),
            Self::Gained => pick(locale, "得", "Gained"),
            Self::Beneficial => pick(locale, "利", "Beneficial"),
            Self::Neutral => pick(locale, "平", "Neutral"),
            Self::Weak => pick(locale, "不", "Weak"),
            Self::Trapped => pick(locale, "陷", "Trapped"),
        }
    }
}

impl Label for Mutagen {
    fn label(&self, locale: Locale) -> &'static str {
        match self {
            Self::Prosperity => pick(locale, "禄", "Prosperity"),
            Self::Authority => pick(locale, "权", "Authority"),
            Self::Fame => pick(locale, "科", "Fame"),
            Self::Adversity => pick(locale, "忌", "Adversity"),
        }
    }
}

impl Label for FiveElementsClass {
    fn label(&self, locale: Locale) -> &'static str {
        match self {
            Self::Water2 => pick(locale, "水二局", "Water 2"),
            Self::Wood3 => pick(locale, "木三局", "Wood 3"),
            Self::Metal4 => pick(locale, "金四局", "Metal 4"),
            Self::Earth5 => pick(locale, "土五局", "Earth 5"),
            Self::Fire6 => pick(locale, "火六局", "Fire 6"),
        }
    }
}

const ZODIAC_ZH: [&str; 12] = [
    "鼠", "牛", "虎", "兔", "龙", "蛇", "马", "羊", "猴", "鸡", "狗", "猪",
];

impl Label for ZodiacAnimal {
    fn label(&self, locale: Locale) -> &'static str {
        pick(locale, ZODIAC_ZH[*self as usize], self.name())
    }
}

const SIGN_ZH: [&str; 12] = [
    "白羊座", "金牛座", "双子座", "巨蟹座", "狮子座", "处女座", "天秤座", "天蝎座", "射手座",
    "摩羯座", "水瓶座", "双鱼座",
];

impl Label for WesternSign {
    fn label(&self, locale: Locale) -> &'static str {
        pick(locale, SIGN_ZH[self.index() as usize], self.name())
    }
}

impl Label for Gender {
    fn label(&self, locale: Locale) -> &'static str {
        match self {
            Self::Male => pick(locale, "男", "Male"),
            Self::Female => pick(locale, "女", "Female"),
        }
    }
}

impl Label for Scope {
    fn label(&self, locale: Locale) -> &'static str {
        match self {
            Self::Natal => pick(locale, "本命", "Natal"),
            Self::Decadal => pick(locale, "大限", "Decade"),
            Self::Age => pick(locale, "小限", "Age"),
            Self::Yearly => pick(locale, "流年", "Year"),
            Self::Monthly => pick(locale, "流月", "Month"),
            Self::Daily => pick(locale, "流日", "Day"),
            Self::Hourly => pick(locale, "流时", "Hour"),
        }
    }
}

/// Star by its Chinese name.
pub fn star_from_chinese(name: &str) -> Option<StarName> {
    StarName::all().find(|s| STAR_ZH[*s as usize] == name)
}

/// Star by English display name, case-insensitive.
pub fn star_from_english(name: &str) -> Option<StarName> {
    StarName::all().find(|s| STAR_EN[*s as usize].eq_ignore_ascii_case(name))
}

/// Role by Chinese name, with or without the trailing 宫.
pub fn role_from_chinese(name: &str) -> Option<HouseRole> {
    let bare = name.strip_suffix('宫').unwrap_or(name);
    if bare == "交友" {
        return Some(HouseRole::Friends);
    }
    ALL_HOUSE_ROLES.into_iter().find(|r| {
        let zh = ROLE_ZH[r.index() as usize];
        zh.strip_suffix('宫').unwrap_or(zh) == bare
    })
}

/// Role by English display name, case-insensitive.
pub fn role_from_english(name: &str) -> Option<HouseRole> {
    ALL_HOUSE_ROLES
        .into_iter()
        .find(|r| ROLE_EN[r.index() as usize].eq_ignore_ascii_case(name))
}

const CN_DIGITS: [&str; 10] = ["〇", "一", "二", "三", "四", "五", "六", "七", "八", "九"];
const CN_MONTHS: [&str; 12] = [
    "正", "二", "三", "四", "五", "六", "七", "八", "九", "十", "冬", "腊",
];
const CN_TENS: [&str; 4] = ["初", "十", "廿", "三"];

fn chinese_day(day: u32) -> String {
    match day {
        10 => "初十".to_string(),
        20 => "二十".to_string(),
        30 => "三十".to_string(),
        d => {
            let tens = CN_TENS[(d / 10) as usize % 4];
            let units = if d % 10 == 0 { "十" } else { CN_DIGITS[(d % 10) as usize] };
            format!("{tens}{units}")
        }
    }
}

/// Render a lunar date, e.g. `二〇〇〇年七月十七` or `2000-7-17`.
pub fn format_lunar_date(date: &LunarDate, locale: Locale) -> String {
    match locale {
        Locale::EnUs => date.to_string(),
        Locale::ZhCn => {
            let year: String = date
                .year
                .to_string()
                .chars()
                .filter_map(|c| c.to_digit(10))
                .map(|d| CN_DIGITS[d as usize])
                .collect();
            let leap = if date.is_leap_month { "闰" } else { "" };
            let month = CN_MONTHS[(date.month as usize + 11) % 12];
            format!("{year}年{leap}{month}月{}", chinese_day(date.day))
        }
    }
}
