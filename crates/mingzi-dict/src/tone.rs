//! Mandarin tones and the level/oblique (平仄) split used for rhythm.

use serde::{Deserialize, Serialize};

/// One of the four Mandarin tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    /// 阴平
    First,
    /// 阳平
    Second,
    /// 上声
    Third,
    /// 去声
    Fourth,
}

/// Tonal class in classical prosody.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToneClass {
    /// 平: first and second tones.
    Level,
    /// 仄: third and fourth tones.
    Oblique,
}

impl Tone {
    /// Build from a tone number (1–4).
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4 => Some(Self::Fourth),
            _ => None,
        }
    }

    #[must_use]
    pub const fn class(self) -> ToneClass {
        match self {
            Self::First | Self::Second => ToneClass::Level,
            Self::Third | Self::Fourth => ToneClass::Oblique,
        }
    }
}

impl ToneClass {
    /// 平 or 仄.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Level => '平',
            Self::Oblique => '仄',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_two_tones_are_level() {
        assert_eq!(Tone::First.class(), ToneClass::Level);
        assert_eq!(Tone::Second.class(), ToneClass::Level);
        assert_eq!(Tone::Third.class(), ToneClass::Oblique);
        assert_eq!(Tone::Fourth.class(), ToneClass::Oblique);
    }

    #[test]
    fn tone_numbers_map_in_order() {
        assert_eq!(Tone::from_number(1), Some(Tone::First));
        assert_eq!(Tone::from_number(2), Some(Tone::Second));
        assert_eq!(Tone::from_number(3), Some(Tone::Third));
        assert_eq!(Tone::from_number(4), Some(Tone::Fourth));
        assert_eq!(Tone::from_number(0), None);
        assert_eq!(Tone::from_number(5), None);
    }
}
