//! Admissibility rules for given-name characters.
//!
//! The same rules run twice: the generator uses the boolean predicates to
//! silently thin its pools, and the scorer uses the `check_*` forms to
//! reject one candidate with a reason.
//!
//! | Rule        | Fails when                                         |
//! |-------------|----------------------------------------------------|
//! | ideograph   | not a single unified CJK ideograph                 |
//! | banned      | on the banned list                                 |
//! | strokes     | stroke count unknown                               |
//! | complexity  | stroke count ≥ the ceiling (31)                    |
//! | gender      | male-only for a girl, female-only for a boy        |
//! | homophone   | surname + character is on the surname's blacklist  |

use std::sync::LazyLock;

use mingzi_dict::{Dictionary, Gender};
use regex::Regex;

use crate::error::{HomophoneRejection, ValidationRejection};

static IDEOGRAPH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\p{Unified_Ideograph}$").expect("static ideograph pattern")
});

/// True if `s` is exactly one unified CJK ideograph.
///
/// Han-script marks such as 々 and 〆 are not ideographs.
#[must_use]
pub fn is_ideograph(s: &str) -> bool {
    IDEOGRAPH.is_match(s)
}

/// Character checks against one dictionary.
#[derive(Debug, Clone, Copy)]
pub struct Validator<'d> {
    dict: &'d Dictionary,
    complexity_ceiling: u32,
}

impl<'d> Validator<'d> {
    #[must_use]
    pub const fn new(dict: &'d Dictionary, complexity_ceiling: u32) -> Self {
        Self {
            dict,
            complexity_ceiling,
        }
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d Dictionary {
        self.dict
    }

    /// Ideograph, not banned, known strokes, below the ceiling. Gender-blind.
    #[must_use]
    pub fn is_admissible_char(&self, ch: char) -> bool {
        self.check_char(ch).is_ok()
    }

    /// [`is_admissible_char`](Self::is_admissible_char) plus the gender lists.
    #[must_use]
    pub fn is_admissible_for_gender(&self, ch: char, gender: Gender) -> bool {
        self.check_char_for_gender(ch, gender).is_ok()
    }

    /// # Errors
    ///
    /// The first rule `ch` breaks, in table order.
    pub fn check_char(&self, ch: char) -> Result<(), ValidationRejection> {
        let mut buf = [0u8; 4];
        if !is_ideograph(ch.encode_utf8(&mut buf)) {
            return Err(ValidationRejection::NotIdeograph(ch.to_string()));
        }
        if self.dict.is_banned(ch) {
            return Err(ValidationRejection::Banned(ch));
        }
        let strokes = self
            .dict
            .strokes(ch)
            .ok_or(ValidationRejection::UnknownStrokes(ch))?;
        if strokes >= self.complexity_ceiling {
            return Err(ValidationRejection::TooComplex { ch, strokes });
        }
        Ok(())
    }

    /// # Errors
    ///
    /// As [`check_char`](Self::check_char), then
    /// [`ValidationRejection::GenderRestricted`].
    pub fn check_char_for_gender(
        &self,
        ch: char,
        gender: Gender,
    ) -> Result<(), ValidationRejection> {
        self.check_char(ch)?;
        let restricted = match gender {
            Gender::Female => self.dict.is_male_only(ch),
            Gender::Male => self.dict.is_female_only(ch),
        };
        if restricted {
            return Err(ValidationRejection::GenderRestricted { ch, gender });
        }
        Ok(())
    }

    /// # Errors
    ///
    /// Names the first given character on the surname's blacklist.
    pub fn check_homophones(
        &self,
        surname: char,
        char1: char,
        char2: Option<char>,
    ) -> Result<(), HomophoneRejection> {
        let forbidden = self.dict.forbidden_for(surname);
        std::iter::once(char1)
            .chain(char2)
            .find(|c| forbidden.contains(c))
            .map_or(Ok(()), |ch| Err(HomophoneRejection { surname, ch }))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
