//! Multi-factor scoring of one candidate name.
//!
//! | Factor    | Points                                                     |
//! |-----------|------------------------------------------------------------|
//! | elemental | 20 per favorable char, 10 per known other, ×2 when single  |
//! | stroke    | 30 if the total is auspicious else 15, then ±talents       |
//! | cultural  | 20 with a literary source, else 5                          |
//! | meaning   | 10                                                         |
//!
//! The total is clamped to [0, 100].

use mingzi_dict::{Dictionary, Element, LiterarySource};

use crate::candidate::{NameCandidate, ScoreBreakdown, SourceRef, Tier};
use crate::config::EngineConfig;
use crate::error::Rejection;
use crate::explain::{NarrationInput, explain};
use crate::numerology::{figures, stroke_counts, stroke_score};
use crate::profile::ElementalProfile;
use crate::validator::Validator;

pub const FAVORABLE_POINTS: u32 = 20;
pub const KNOWN_POINTS: u32 = 10;
pub const SOURCE_POINTS: u32 = 20;
pub const PLAIN_CULTURAL_POINTS: u32 = 5;
pub const MEANING_POINTS: u32 = 10;
pub const MAX_SCORE: u32 = 100;

/// Scores candidates against one dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Scorer<'d> {
    validator: Validator<'d>,
    default_favorable: [Element; 2],
}

impl<'d> Scorer<'d> {
    #[must_use]
    pub const fn new(dict: &'d Dictionary, config: &EngineConfig) -> Self {
        Self {
            validator: Validator::new(dict, config.complexity_ceiling),
            default_favorable: config.default_favorable,
        }
    }

    #[must_use]
    pub const fn validator(&self) -> &Validator<'d> {
        &self.validator
    }

    /// Score `surname` + `char1` (+ `char2`).
    ///
    /// # Errors
    ///
    /// [`Rejection::Validation`] if a given character is inadmissible,
    /// [`Rejection::Homophone`] if the combination is blacklisted for the
    /// surname. Gender is not checked here.
    pub fn score(
        &self,
        surname: char,
        char1: char,
        char2: Option<char>,
        profile: &ElementalProfile,
        source: Option<&LiterarySource>,
    ) -> Result<NameCandidate, Rejection> {
        let v = &self.validator;
        v.check_char(char1)?;
        if let Some(c) = char2 {
            v.check_char(c)?;
        }
        v.check_homophones(surname, char1, char2)?;

        let dict = v.dictionary();
        let single = char2.is_none();
        let targets = profile.target_elements(self.default_favorable);

        let el1 = dict.element_of(char1);
        let el2 = char2.and_then(|c| dict.element_of(c));
        let element_points = |el: Option<Element>| match el {
            Some(e) if targets.contains(&e) => FAVORABLE_POINTS,
            Some(_) => KNOWN_POINTS,
            None => 0,
        };
        let elemental = if single {
            element_points(el1) * 2
        } else {
            element_points(el1) + element_points(el2)
        };

        let counts = stroke_counts(
            dict.strokes(surname),
            dict.strokes(char1),
            char2.and_then(|c| dict.strokes(c)),
        );
        let figures = figures(&counts, single);

        let breakdown = ScoreBreakdown {
            elemental,
            stroke: stroke_score(&figures),
            cultural: if source.is_some() {
                SOURCE_POINTS
            } else {
                PLAIN_CULTURAL_POINTS
            },
            meaning: MEANING_POINTS,
        };
        let score = breakdown.sum().min(MAX_SCORE);

        let mut given = vec![(char1, el1)];
        if let Some(c) = char2 {
            given.push((c, el2));
        }
        let explanation = explain(
            dict,
            &NarrationInput {
                surname,
                given: &given,
                profile,
                targets,
                figures: &figures,
                score,
                source,
            },
        );

        Ok(NameCandidate {
            surname,
            char1,
            char2,
            strokes: counts,
            elements: [el1, el2],
            score,
            breakdown,
            figures,
            tier: Tier::from_score(score),
            explanation,
            source: source.map(SourceRef::from),
            style_tags: source.map(|s| s.styles.styles()).unwrap_or_default(),
        })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
