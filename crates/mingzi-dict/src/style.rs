//! Stylistic tags for names and literary sources.
//!
//! A [`Style`] is a single tag; a [`StyleSet`] is the compact bit set a
//! literary source carries. Requests filter with a [`StyleFilter`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single stylistic tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// 古典: rooted in the classics.
    Classical,
    /// 诗意: lyrical imagery.
    Poetic,
    /// 大气: broad, imposing.
    Grand,
    /// 清新: light, natural.
    Fresh,
    /// 温润: mild, gentle.
    Gentle,
}

impl Style {
    pub const ALL: [Self; 5] = [
        Self::Classical,
        Self::Poetic,
        Self::Grand,
        Self::Fresh,
        Self::Gentle,
    ];

    /// Chinese label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Classical => "古典",
            Self::Poetic => "诗意",
            Self::Grand => "大气",
            Self::Fresh => "清新",
            Self::Gentle => "温润",
        }
    }

    /// The single-bit set for this style.
    #[must_use]
    pub const fn bit(self) -> StyleSet {
        match self {
            Self::Classical => StyleSet::CLASSICAL,
            Self::Poetic => StyleSet::POETIC,
            Self::Grand => StyleSet::GRAND,
            Self::Fresh => StyleSet::FRESH,
            Self::Gentle => StyleSet::GENTLE,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no style.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown style: {0:?}")]
pub struct UnknownStyle(pub String);

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classical" | "古典" => Ok(Self::Classical),
            "poetic" | "诗意" => Ok(Self::Poetic),
            "grand" | "大气" => Ok(Self::Grand),
            "fresh" | "清新" => Ok(Self::Fresh),
            "gentle" | "温润" => Ok(Self::Gentle),
            _ => Err(UnknownStyle(s.to_string())),
        }
    }
}

bitflags::bitflags! {
    /// Set of style tags attached to a literary source.
    ///
    /// ```
    /// use mingzi_dict::style::{Style, StyleSet};
    ///
    /// let tags = StyleSet::CLASSICAL | StyleSet::GRAND;
    /// assert!(tags.has(Style::Grand));
    /// assert!(!tags.has(Style::Fresh));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct StyleSet: u8 {
        const CLASSICAL = 1 << 0;
        const POETIC    = 1 << 1;
        const GRAND     = 1 << 2;
        const FRESH     = 1 << 3;
        const GENTLE    = 1 << 4;
    }
}

impl StyleSet {
    /// True if `style` is a member.
    #[must_use]
    pub const fn has(self, style: Style) -> bool {
        self.contains(style.bit())
    }

    /// Members in declaration order.
    #[must_use]
    pub fn styles(self) -> Vec<Style> {
        Style::ALL.into_iter().filter(|s| self.has(*s)).collect()
    }
}

/// Style restriction on a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleFilter {
    /// No restriction.
    #[default]
    All,
    /// Only sources tagged with this style; also activates its keyword pool.
    Only(Style),
}

impl StyleFilter {
    /// True if a source tagged `tags` passes this filter.
    #[must_use]
    pub const fn admits(self, tags: StyleSet) -> bool {
        match self {
            Self::All => true,
            Self::Only(style) => tags.has(style),
        }
    }

    /// The selected style, if any.
    #[must_use]
    pub const fn style(self) -> Option<Style> {
        match self {
            Self::All => None,
            Self::Only(style) => Some(style),
        }
    }
}

impl FromStr for StyleFilter {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "全部" => Ok(Self::All),
            other => other.parse().map(Self::Only),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn styles_round_trip_through_bits() {
        for style in Style::ALL {
            assert!(style.bit().has(style));
            assert_eq!(style.bit().styles(), vec![style]);
        }
    }

    #[test]
    fn styles_listed_in_declaration_order() {
        let tags = StyleSet::GENTLE | StyleSet::CLASSICAL;
        assert_eq!(tags.styles(), vec![Style::Classical, Style::Gentle]);
    }

    #[test]
    fn all_filter_admits_untagged() {
        assert!(StyleFilter::All.admits(StyleSet::empty()));
    }

    #[test]
    fn only_filter_requires_tag() {
        let f = StyleFilter::Only(Style::Poetic);
        assert!(f.admits(StyleSet::POETIC | StyleSet::FRESH));
        assert!(!f.admits(StyleSet::GRAND));
        assert!(!f.admits(StyleSet::empty()));
    }

    #[test]
    fn parse_filter() {
        assert_eq!("all".parse::<StyleFilter>(), Ok(StyleFilter::All));
        assert_eq!(
            "诗意".parse::<StyleFilter>(),
            Ok(StyleFilter::Only(Style::Poetic))
        );
        assert!("baroque".parse::<StyleFilter>().is_err());
    }
}
