//! The birth-derived elemental profile (八字 result) a request is scored against.
//!
//! The profile comes from an external calculator and is taken as given:
//! the engine never re-derives or validates it.

use std::fmt;
use std::str::FromStr;

use mingzi_dict::Element;
use serde::{Deserialize, Serialize};

/// The day master (日主): the chart's own element and its heavenly-stem label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayMaster {
    pub element: Element,
    /// Heavenly stem, e.g. `"甲"`. May be empty.
    pub stem: String,
}

impl DayMaster {
    #[must_use]
    pub fn new(element: Element, stem: impl Into<String>) -> Self {
        Self {
            element,
            stem: stem.into(),
        }
    }
}

impl fmt::Display for DayMaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.stem.is_empty() {
            write!(f, "{}", self.element)
        } else {
            write!(f, "{}({})", self.stem, self.element)
        }
    }
}

/// Whether the day master is strong (身旺) or weak (身弱).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Strong,
    #[default]
    Weak,
}

impl Strength {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "身旺",
            Self::Weak => "身弱",
        }
    }
}

/// Returned when a string names no strength.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strength: {0:?} (expected strong/weak or 身旺/身弱)")]
pub struct UnknownStrength(pub String);

impl FromStr for Strength {
    type Err = UnknownStrength;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strong" | "身旺" | "旺" => Ok(Self::Strong),
            "weak" | "身弱" | "弱" => Ok(Self::Weak),
            _ => Err(UnknownStrength(s.to_string())),
        }
    }
}

/// Output of the external chart calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementalProfile {
    pub day_master: DayMaster,
    pub strength: Strength,
    /// Favorable elements (喜用神), most important first.
    pub favorable: Vec<Element>,
}

impl ElementalProfile {
    /// The two elements names should carry.
    ///
    /// First and second favorable entries; a single entry is used twice;
    /// an empty list falls back to `default`. Entries past the second are
    /// ignored.
    #[must_use]
    pub fn target_elements(&self, default: [Element; 2]) -> [Element; 2] {
        match self.favorable.as_slice() {
            [] => default,
            [only] => [*only, *only],
            [a, b, ..] => [*a, *b],
        }
    }
}
