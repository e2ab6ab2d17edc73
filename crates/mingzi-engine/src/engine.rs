//! The [`NamingEngine`] facade: generation, paging and custom-name assessment.

use mingzi_dict::{Dictionary, Gender};
use serde::{Deserialize, Serialize};
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::candidate::NameCandidate;
use crate::config::EngineConfig;
use crate::error::{Rejection, ValidationRejection};
use crate::generator::Generator;
use crate::profile::ElementalProfile;
use crate::ranker::{RankPolicy, rank_and_page};
use crate::request::{GenerationRequest, Page};
use crate::scorer::Scorer;
use crate::validator::is_ideograph;

/// A user-typed name to score (已有名字测算).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessRequest {
    pub surname: char,
    /// With or without the surname in front. Only the first two given
    /// characters count.
    pub name: String,
    pub profile: ElementalProfile,
    /// When set, gender-restricted characters are rejected.
    pub gender: Option<Gender>,
}

/// Entry point tying a dictionary to a configuration.
///
/// Holds no mutable state; every call is independent.
#[derive(Debug, Clone)]
pub struct NamingEngine<'d> {
    dict: &'d Dictionary,
    config: EngineConfig,
}

impl<'d> NamingEngine<'d> {
    #[must_use]
    pub const fn new(dict: &'d Dictionary, config: EngineConfig) -> Self {
        Self { dict, config }
    }

    #[must_use]
    pub fn with_defaults(dict: &'d Dictionary) -> Self {
        Self::new(dict, EngineConfig::default())
    }

    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dict
    }

    /// Every candidate for the request, unranked.
    #[must_use]
    pub fn generate(&self, req: &GenerationRequest) -> Vec<NameCandidate> {
        Generator::new(self.dict, &self.config).generate(req)
    }

    /// One ranked, diverse page.
    #[must_use]
    pub fn generate_page(&self, req: &GenerationRequest) -> Page {
        let candidates = rank_and_page(
            self.generate(req),
            req.offset,
            req.page_size,
            RankPolicy::from(&self.config),
        );
        Page {
            candidates,
            offset: req.offset,
            page_size: req.page_size,
        }
    }

    /// Score one user-typed name.
    ///
    /// # Errors
    ///
    /// [`ValidationRejection::EmptyName`] when nothing follows the surname,
    /// [`ValidationRejection::NotIdeograph`] for anything but a single CJK
    /// ideograph, and any rejection the scorer or gender rule raises.
    pub fn assess(&self, req: &AssessRequest) -> Result<NameCandidate, Rejection> {
        let (char1, char2) = split_given_name(req.surname, &req.name)?;
        let scorer = Scorer::new(self.dict, &self.config);
        let candidate = scorer.score(req.surname, char1, char2, &req.profile, None)?;

        if let Some(gender) = req.gender {
            for c in candidate.given_chars() {
                scorer.validator().check_char_for_gender(c, gender)?;
            }
        }
        debug!(name = %candidate.full_name(), score = candidate.score, "assessed");
        Ok(candidate)
    }
}

/// Strip a leading surname and split the first one or two given characters.
///
/// Splits by grapheme cluster so a combining sequence is reported whole.
///
/// # Errors
///
/// [`ValidationRejection::EmptyName`] or [`ValidationRejection::NotIdeograph`].
pub fn split_given_name(
    surname: char,
    name: &str,
) -> Result<(char, Option<char>), ValidationRejection> {
    let name = name.trim();
    let given = name.strip_prefix(surname).unwrap_or(name).trim_start();

    let mut chars = given.graphemes(true).take(2).map(|g| {
        if is_ideograph(g) {
            g.chars().next().ok_or(ValidationRejection::EmptyName)
        } else {
            Err(ValidationRejection::NotIdeograph(g.to_string()))
        }
    });
    let char1 = chars.next().ok_or(ValidationRejection::EmptyName)??;
    let char2 = chars.next().transpose()?;
    Ok((char1, char2))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use mingzi_dict::{Element, Style, StyleFilter};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::candidate::Tier;
    use crate::error::HomophoneRejection;
    use crate::profile::{DayMaster, Strength};
    use crate::request::NameLength;

    fn profile() -> ElementalProfile {
        ElementalProfile {
            day_master: DayMaster::new(Element::Wood, "甲"),
            strength: Strength::Weak,
            favorable: vec![Element::Earth, Element::Metal],
        }
    }

    fn assess(name: &str, gender: Option<Gender>) -> Result<NameCandidate, Rejection> {
        let dict = Dictionary::builtin();
        NamingEngine::with_defaults(&dict).assess(&AssessRequest {
            surname: '杨',
            name: name.to_string(),
            profile: profile(),
            gender,
        })
    }

    // ── split_given_name ─────────────────────────────────────────

    #[test]
    fn split_strips_surname_prefix() {
        assert_eq!(split_given_name('杨', "杨嘉铭"), Ok(('嘉', Some('铭'))));
        assert_eq!(split_given_name('杨', "嘉铭"), Ok(('嘉', Some('铭'))));
        assert_eq!(split_given_name('杨', " 杨安 "), Ok(('安', None)));
    }

    #[test]
    fn split_keeps_first_two_only() {
        assert_eq!(split_given_name('杨', "杨嘉铭远"), Ok(('嘉', Some('铭'))));
    }

    #[test]
    fn split_rejects_empty_and_non_ideographs() {
        assert_eq!(split_given_name('杨', "杨"), Err(ValidationRejection::EmptyName));
        assert_eq!(split_given_name('杨', "  "), Err(ValidationRejection::EmptyName));
        assert_eq!(
            split_given_name('杨', "杨Li"),
            Err(ValidationRejection::NotIdeograph("L".into()))
        );
        assert_eq!(
            split_given_name('杨', "杨嘉e\u{301}"),
            Err(ValidationRejection::NotIdeograph("e\u{301}".into()))
        );
    }

    // ── assess ───────────────────────────────────────────────────

    #[test]
    fn assess_scores_a_valid_name() {
        let c = assess("杨嘉铭", None).unwrap();
        assert_eq!(c.full_name(), "杨嘉铭");
        assert!(c.source.is_none());
        assert!(c.score <= 100);
    }

    #[test]
    fn assess_single_given_character() {
        let c = assess("杨安", None).unwrap();
        assert_eq!(c.full_name(), "杨安");
        assert_eq!((c.char1, c.char2), ('安', None));
        assert_eq!(c.breakdown.elemental, 40);
        assert_eq!(c.tier, Tier::from_score(c.score));
    }

    #[test]
    fn assess_reports_homophone() {
        assert_eq!(
            assess("杨伟", Some(Gender::Male)).map(|c| c.full_name()),
            Err(Rejection::Homophone(HomophoneRejection { surname: '杨', ch: '伟' }))
        );
    }

    #[test]
    fn assess_applies_gender_only_when_given() {
        assert!(assess("杨刚", None).is_ok());
        assert_eq!(
            assess("杨刚", Some(Gender::Female)).map(|c| c.full_name()),
            Err(Rejection::Validation(ValidationRejection::GenderRestricted {
                ch: '刚',
                gender: Gender::Female,
            }))
        );
    }

    #[test]
    fn assess_reports_banned_and_unknown() {
        assert_eq!(
            assess("杨死", None).map(|c| c.full_name()),
            Err(Rejection::Validation(ValidationRejection::Banned('死')))
        );
        assert!(matches!(
            assess("杨龘", None),
            Err(Rejection::Validation(ValidationRejection::UnknownStrokes('龘')))
        ));
    }

    // ── generate_page ────────────────────────────────────────────

    #[test]
    fn first_page_is_full_and_sorted() {
        let dict = Dictionary::builtin();
        let engine = NamingEngine::with_defaults(&dict);
        let page = engine.generate_page(&GenerationRequest::new('杨', profile()));
        assert_eq!(page.len(), 10);
        assert!(page.has_more());
        assert!(page.candidates.windows(2).all(|w| w[0].score >= w[1].score));
        assert!(page.candidates.iter().all(|c| c.char2.is_some()));
    }

    #[test]
    fn style_request_still_fills_a_page() {
        let dict = Dictionary::builtin();
        let engine = NamingEngine::with_defaults(&dict);
        let req = GenerationRequest {
            style: StyleFilter::Only(Style::Poetic),
            length: NameLength::One,
            ..GenerationRequest::new('杨', profile())
        };
        let page = engine.generate_page(&req);
        assert_eq!(page.len(), 10);
        assert!(page.candidates.iter().all(|c| c.char2.is_none()));
    }
}
