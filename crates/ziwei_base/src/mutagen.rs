//! Four-transformation (si hua) tagging.
//!
//! Each stem transforms four named stars, in the fixed column order
//! prosperity, authority, fame, adversity.

use crate::palace_types::House;
use crate::star::{ALL_MUTAGENS, Mutagen, Scope, Star, StarName};
use crate::stem::HeavenlyStem;

/// Mutagen stars per stem (rows 甲..癸).
pub(crate) const MUTAGEN_STARS: [[StarName; 4]; 10] = {
    use StarName::*;
    [
        [Lianzhen, Pojun, Wuqu, Taiyang],
        [Tianji, Tianliang, Ziwei, Taiyin],
        [Tiantong, Tianji, Wenchang, Lianzhen],
        [Taiyin, Tiantong, Tianji, Jumen],
        [Tanlang, Taiyin, Youbi, Tianji],
        [Wuqu, Tanlang, Tianliang, Wenqu],
        [Taiyang, Wuqu, Taiyin, Tiantong],
        [Jumen, Taiyang, Wenqu, Wenchang],
        [Tianliang, Ziwei, Zuofu, Wuqu],
        [Pojun, Jumen, Taiyin, Tanlang],
    ]
};

/// Mutagen a star receives under a governing stem, if any.
pub fn mutagen_of(stem: HeavenlyStem, star: StarName) -> Option<Mutagen> {
    stem.mutagen_stars()
        .iter()
        .position(|s| *s == star)
        .map(|i| ALL_MUTAGENS[i])
}

/// Tag every natal star in the ring that the stem transforms.
pub fn apply_mutagens(ring: &mut [House; 12], stem: HeavenlyStem) {
    for house in ring.iter_mut() {
        for star in house.stars_mut() {
            if star.scope != Scope::Natal {
                continue;
            }
            if let Some(m) = mutagen_of(stem, star.name) {
                star.mutagen = Some(m);
            }
        }
    }
}

/// Scope-tagged copies of the stars a stem transforms, each paired with the
/// ring index of the house holding the natal star.
///
/// Natal stars are left untouched.
pub fn scoped_mutagen_stars(
    ring: &[House; 12],
    stem: HeavenlyStem,
    scope: Scope,
) -> Vec<(u8, Star)> {
    let mut out = Vec::with_capacity(4);
    for (i, name) in stem.mutagen_stars().into_iter().enumerate() {
        let found = ring.iter().find_map(|h| {
            h.stars()
                .find(|s| s.name == name && s.scope == Scope::Natal)
                .map(|s| (h.index, *s))
        });
        if let Some((index, natal)) = found {
            let mut star = Star::new(name, scope);
            star.brightness = natal.brightness;
            star.mutagen = Some(ALL_MUTAGENS[i]);
            out.push((index, star));
        }
    }
    out
}
