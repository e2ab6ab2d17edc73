//! What a caller asks for, and the page it gets back.

use std::str::FromStr;

use mingzi_dict::{Gender, StyleFilter};
use serde::{Deserialize, Serialize};

use crate::candidate::NameCandidate;
use crate::profile::ElementalProfile;

/// Bias between literary and pool-built candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourcePreference {
    /// Bonus for literary candidates.
    Classical,
    /// Literary pass skipped; bonus for pool candidates.
    Modern,
    #[default]
    Balanced,
}

/// Returned when a string names no source preference.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown source preference: {0:?} (expected classical/modern/balanced)")]
pub struct UnknownPreference(pub String);

impl FromStr for SourcePreference {
    type Err = UnknownPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classical" | "古典" => Ok(Self::Classical),
            "modern" | "现代" => Ok(Self::Modern),
            "balanced" | "均衡" => Ok(Self::Balanced),
            _ => Err(UnknownPreference(s.to_string())),
        }
    }
}

/// Number of given-name characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameLength {
    One,
    #[default]
    Two,
}

/// One "load more" call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub surname: char,
    pub profile: ElementalProfile,
    pub page_size: usize,
    /// Plain integer page token.
    pub offset: usize,
    pub gender: Gender,
    pub style: StyleFilter,
    pub length: NameLength,
    pub preference: SourcePreference,
}

impl GenerationRequest {
    /// First page of ten, male, two characters, no style or source bias.
    #[must_use]
    pub fn new(surname: char, profile: ElementalProfile) -> Self {
        Self {
            surname,
            profile,
            page_size: 10,
            offset: 0,
            gender: Gender::default(),
            style: StyleFilter::default(),
            length: NameLength::default(),
            preference: SourcePreference::default(),
        }
    }

    /// The same request, one page further on.
    #[must_use]
    pub fn next_page(&self) -> Self {
        Self {
            offset: self.offset + self.page_size,
            ..self.clone()
        }
    }
}

/// One page of ranked candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page {
    pub candidates: Vec<NameCandidate>,
    pub offset: usize,
    pub page_size: usize,
}

impl Page {
    /// A full page means another call may return more; a short one is the end.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.page_size > 0 && self.candidates.len() == self.page_size
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
