//! A scored, explained name candidate and its parts.

use std::fmt;

use mingzi_dict::{Element, LiterarySource, Style};
use serde::Serialize;

/// Stroke counts of each component. Unknown counts are 0; an absent second
/// character is 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StrokeCounts {
    pub surname: u32,
    pub char1: u32,
    pub char2: u32,
    pub total: u32,
}

/// The four sub-scores, before any preference bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ScoreBreakdown {
    /// 0–40.
    pub elemental: u32,
    /// 10–40: table credit plus the three-talents adjustment.
    pub stroke: u32,
    /// 5 or 20.
    pub cultural: u32,
    /// Always 10.
    pub meaning: u32,
}

impl ScoreBreakdown {
    #[must_use]
    pub const fn sum(&self) -> u32 {
        self.elemental + self.stroke + self.cultural + self.meaning
    }
}

/// Numerology figures (五格) derived from the stroke counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StrokeFigures {
    /// 天格: surname + 1.
    pub heaven: u32,
    /// 人格: surname + first given character.
    pub person: u32,
    /// 地格: both given characters, or the single one + 1.
    pub earth: u32,
    /// 外格: total − person + 1.
    pub outer: u32,
    /// 总格.
    pub total: u32,
}

/// Recommendation tier, by final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// ≥ 90.
    Top,
    /// ≥ 80.
    High,
    /// ≥ 70.
    Moderate,
    /// Below 70.
    Caution,
}

impl Tier {
    #[must_use]
    pub const fn from_score(score: u32) -> Self {
        match score {
            90.. => Self::Top,
            80..=89 => Self::High,
            70..=79 => Self::Moderate,
            _ => Self::Caution,
        }
    }

    /// Star rating with its one-word label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Top => "⭐⭐⭐⭐⭐ (完美)",
            Self::High => "⭐⭐⭐⭐ (优秀)",
            Self::Moderate => "⭐⭐⭐ (良好)",
            Self::Caution => "⭐⭐ (慎选)",
        }
    }

    /// Canned verdict shown under the score.
    #[must_use]
    pub const fn summary(self) -> &'static str {
        match self {
            Self::Top => "✅ 终极推荐：五行大补，数理全吉，且有文化出处。",
            Self::High => "✅ 优选好名：五行平衡，数理吉祥，适合长期使用。",
            Self::Moderate => "⭕ 尚可备选：虽无大碍，但亮点不足，可结合个人喜好选择。",
            Self::Caution => "⚠️ 建议慎选：五行或数理存在短板。",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The six narrative sections attached to every candidate.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Explanation {
    /// 五行 match against the profile.
    pub elemental: String,
    /// Literary source, character meanings, or the modern fallback.
    pub cultural: String,
    /// Tone pattern (平仄).
    pub phonetic: String,
    /// Stroke numerology.
    pub stroke: String,
    /// First impression.
    pub social: String,
    /// Psychological suggestion.
    pub psychology: String,
}

impl Explanation {
    /// Sections with their headings, in display order.
    #[must_use]
    pub fn sections(&self) -> [(&'static str, &str); 6] {
        [
            ("五行分析", &self.elemental),
            ("文化底蕴", &self.cultural),
            ("声调音律", &self.phonetic),
            ("数理笔画", &self.stroke),
            ("社交印象", &self.social),
            ("心理暗示", &self.psychology),
        ]
    }
}

/// Quotation a literary candidate came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRef {
    pub text: String,
    pub attribution: String,
}

impl From<&LiterarySource> for SourceRef {
    fn from(src: &LiterarySource) -> Self {
        Self {
            text: src.text.to_string(),
            attribution: src.attribution.to_string(),
        }
    }
}

/// A scored given name for one surname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCandidate {
    pub surname: char,
    pub char1: char,
    /// `None` for a single-character given name.
    pub char2: Option<char>,
    pub strokes: StrokeCounts,
    /// Element of each given character; `None` when unknown or absent.
    pub elements: [Option<Element>; 2],
    /// 0–100, preference bonuses included.
    pub score: u32,
    pub breakdown: ScoreBreakdown,
    pub figures: StrokeFigures,
    pub tier: Tier,
    pub explanation: Explanation,
    pub source: Option<SourceRef>,
    pub style_tags: Vec<Style>,
}

impl NameCandidate {
    /// Surname followed by the given characters.
    #[must_use]
    pub fn full_name(&self) -> String {
        let mut name = String::with_capacity(12);
        name.push(self.surname);
        name.push(self.char1);
        if let Some(c) = self.char2 {
            name.push(c);
        }
        name
    }

    /// The given characters, in order.
    pub fn given_chars(&self) -> impl Iterator<Item = char> {
        std::iter::once(self.char1).chain(self.char2)
    }

    /// Identity used for de-duplication.
    #[must_use]
    pub const fn key(&self) -> (char, Option<char>) {
        (self.char1, self.char2)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn bare(char2: Option<char>) -> NameCandidate {
        NameCandidate {
            surname: '杨',
            char1: '嘉',
            char2,
            strokes: StrokeCounts::default(),
            elements: [None, None],
            score: 0,
            breakdown: ScoreBreakdown::default(),
            figures: StrokeFigures::default(),
            tier: Tier::Caution,
            explanation: Explanation::default(),
            source: None,
            style_tags: Vec::new(),
        }
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(Tier::from_score(100), Tier::Top);
        assert_eq!(Tier::from_score(90), Tier::Top);
        assert_eq!(Tier::from_score(89), Tier::High);
        assert_eq!(Tier::from_score(80), Tier::High);
        assert_eq!(Tier::from_score(79), Tier::Moderate);
        assert_eq!(Tier::from_score(70), Tier::Moderate);
        assert_eq!(Tier::from_score(69), Tier::Caution);
        assert_eq!(Tier::from_score(0), Tier::Caution);
    }

    #[test]
    fn full_name_with_and_without_second_char() {
        assert_eq!(bare(Some('铭')).full_name(), "杨嘉铭");
        assert_eq!(bare(None).full_name(), "杨嘉");
    }

    #[test]
    fn given_chars_skip_absent_second() {
        assert_eq!(bare(None).given_chars().collect::<Vec<_>>(), vec!['嘉']);
        assert_eq!(bare(Some('铭')).given_chars().collect::<Vec<_>>(), vec!['嘉', '铭']);
    }

    #[test]
    fn serializes_chars_as_strings() {
        let json = serde_json::to_value(bare(None)).unwrap();
        assert_eq!(json["surname"], "杨");
        assert_eq!(json["char2"], serde_json::Value::Null);
        assert_eq!(json["tier"], "caution");
    }
}
