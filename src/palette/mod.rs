//! Highlight colors for the banner links
//!
//! One of a few fixed five-color sets is chosen per build. The caller supplies
//! the random source, so a seeded generator always yields the same set.

use rand::Rng;
use serde::Serialize;

/// Five highlight colors: blog, profile, CV, about, contact
pub type ColorSet = [&'static str; 5];

const SETS: [ColorSet; 4] = [
    ["#F5E1FF", "#CAF0F8", "#FF8D84", "#FFE599", "#93C47D"],
    ["#EAF4F4", "#FFEDD8", "#76A5AF", "#EC407A", "#BA68C8"],
    ["#F9E5D8", "#EDE9F6", "#64B5F6", "#BCAAA4", "#FF8A65"],
    ["#EEEBFF", "#FFFAD4", "#FFEE58", "#BDBDBD", "#B2FF59"],
];

/// Banner colors by role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BannerColors {
    pub blog: &'static str,
    pub profile: &'static str,
    pub cv: &'static str,
    pub about: &'static str,
    pub contact: &'static str,
}

impl From<ColorSet> for BannerColors {
    fn from(set: ColorSet) -> Self {
        let [blog, profile, cv, about, contact] = set;
        Self {
            blog,
            profile,
            cv,
            about,
            contact,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ColorPalette;

impl ColorPalette {
    pub fn len(&self) -> usize {
        SETS.len()
    }

    pub fn is_empty(&self) -> bool {
        SETS.is_empty()
    }

    /// The set at `index`, wrapping around
    pub fn at(&self, index: usize) -> ColorSet {
        SETS[index % SETS.len()]
    }

    /// A uniformly chosen set
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> ColorSet {
        self.at(rng.gen_range(0..SETS.len()))
    }
}
