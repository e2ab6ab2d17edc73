//! Gender of the person being named, and gender affinity of dictionary entries.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Gender of the person being named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Chinese label (男 / 女).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Returned when a string names no gender.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown gender: {0:?} (expected male/female or 男/女)")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            _ => Err(UnknownGender(s.to_string())),
        }
    }
}

/// Which genders a literary source suits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderAffinity {
    Male,
    Female,
    Mixed,
}

impl GenderAffinity {
    /// True if an entry with this affinity may be offered for `gender`.
    #[must_use]
    pub const fn admits(self, gender: Gender) -> bool {
        matches!(
            (self, gender),
            (Self::Mixed, _) | (Self::Male, Gender::Male) | (Self::Female, Gender::Female)
        )
    }
}
