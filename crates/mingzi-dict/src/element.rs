//! The five elements (五行) and the two cycles that relate them.
//!
//! Every element generates exactly one successor and controls exactly one
//! other element:
//!
//! ```text
//! generating:  木 → 火 → 土 → 金 → 水 → 木
//! controlling: 木 → 土 → 水 → 火 → 金 → 木
//! ```
//!
//! The two relations are disjoint 5-cycles: no ordered pair is both
//! generating and controlling.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five canonical elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// 木
    Wood,
    /// 火
    Fire,
    /// 土
    Earth,
    /// 金
    Metal,
    /// 水
    Water,
}

impl Element {
    /// All five elements in generating-cycle order.
    pub const ALL: [Self; 5] = [Self::Wood, Self::Fire, Self::Earth, Self::Metal, Self::Water];

    /// The element this one generates (相生).
    #[must_use]
    pub const fn generates(self) -> Self {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one controls (相克).
    #[must_use]
    pub const fn controls(self) -> Self {
        match self {
            Self::Wood => Self::Earth,
            Self::Earth => Self::Water,
            Self::Water => Self::Fire,
            Self::Fire => Self::Metal,
            Self::Metal => Self::Wood,
        }
    }

    /// True if either element generates the other.
    #[must_use]
    pub fn is_generating_pair(self, other: Self) -> bool {
        self.generates() == other || other.generates() == self
    }

    /// True if either element controls the other.
    #[must_use]
    pub fn is_controlling_pair(self, other: Self) -> bool {
        self.controls() == other || other.controls() == self
    }

    /// Map a stroke figure to its element by last digit.
    ///
    /// 1–2 木, 3–4 火, 5–6 土, 7–8 金, 9–0 水.
    #[must_use]
    pub const fn from_stroke_figure(strokes: u32) -> Self {
        match strokes % 10 {
            1 | 2 => Self::Wood,
            3 | 4 => Self::Fire,
            5 | 6 => Self::Earth,
            7 | 8 => Self::Metal,
            _ => Self::Water,
        }
    }

    /// The Chinese glyph for this element.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Wood => '木',
            Self::Fire => '火',
            Self::Earth => '土',
            Self::Metal => '金',
            Self::Water => '水',
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Returned when a string names no element.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown element: {0:?} (expected 木/火/土/金/水 or wood/fire/earth/metal/water)")]
pub struct UnknownElement(pub String);

impl FromStr for Element {
    type Err = UnknownElement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "木" | "wood" => Ok(Self::Wood),
            "火" | "fire" => Ok(Self::Fire),
            "土" | "earth" => Ok(Self::Earth),
            "金" | "metal" => Ok(Self::Metal),
            "水" | "water" => Ok(Self::Water),
            _ => Err(UnknownElement(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generating_cycle_closes_after_five_steps() {
        for start in Element::ALL {
            let mut e = start;
            for _ in 0..5 {
                e = e.generates();
            }
            assert_eq!(e, start);
        }
    }

    #[test]
    fn controlling_cycle_closes_after_five_steps() {
        for start in Element::ALL {
            let mut e = start;
            for _ in 0..5 {
                e = e.controls();
            }
            assert_eq!(e, start);
        }
    }

    #[test]
    fn cycles_are_disjoint() {
        for a in Element::ALL {
            assert_ne!(a.generates(), a.controls(), "{a:?}");
            assert_ne!(a.generates(), a);
            assert_ne!(a.controls(), a);
        }
    }

    #[test]
    fn pair_checks_are_symmetric() {
        assert!(Element::Wood.is_generating_pair(Element::Fire));
        assert!(Element::Fire.is_generating_pair(Element::Wood));
        assert!(Element::Water.is_controlling_pair(Element::Fire));
        assert!(Element::Fire.is_controlling_pair(Element::Water));
        assert!(!Element::Wood.is_generating_pair(Element::Wood));
        assert!(!Element::Wood.is_controlling_pair(Element::Fire));
    }

    #[test]
    fn stroke_figure_buckets() {
        assert_eq!(Element::from_stroke_figure(1), Element::Wood);
        assert_eq!(Element::from_stroke_figure(12), Element::Wood);
        assert_eq!(Element::from_stroke_figure(23), Element::Fire);
        assert_eq!(Element::from_stroke_figure(14), Element::Fire);
        assert_eq!(Element::from_stroke_figure(15), Element::Earth);
        assert_eq!(Element::from_stroke_figure(6), Element::Earth);
        assert_eq!(Element::from_stroke_figure(17), Element::Metal);
        assert_eq!(Element::from_stroke_figure(28), Element::Metal);
        assert_eq!(Element::from_stroke_figure(9), Element::Water);
        assert_eq!(Element::from_stroke_figure(20), Element::Water);
        assert_eq!(Element::from_stroke_figure(0), Element::Water);
    }

    #[test]
    fn parse_glyph_and_name() {
        assert_eq!("土".parse::<Element>(), Ok(Element::Earth));
        assert_eq!("Metal".parse::<Element>(), Ok(Element::Metal));
        assert_eq!(" water ".parse::<Element>(), Ok(Element::Water));
        assert!("aether".parse::<Element>().is_err());
    }

    #[test]
    fn display_is_glyph() {
        assert_eq!(Element::Fire.to_string(), "火");
    }
}
