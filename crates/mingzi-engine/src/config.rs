//! Engine tuning knobs.
//!
//! Every field has a default, so a TOML file only needs the keys it
//! changes:
//!
//! ```toml
//! diversity_cap = 2
//! default_favorable = ["water", "wood"]
//!
//! [bonus]
//! style_per_char = 4
//! ```
//!
//! | Key                 | Default          | Meaning                                   |
//! |---------------------|------------------|-------------------------------------------|
//! | `complexity_ceiling`| 31               | characters need strictly fewer strokes    |
//! | `pair_pool_cap`     | 60               | per-side cap for two-character products   |
//! | `single_pool_cap`   | 200              | cap for single-character candidates       |
//! | `diversity_cap`     | 3                | max candidates sharing one given char     |
//! | `page_slack`        | 80               | extra diverse entries built past the page |
//! | `default_favorable` | earth, metal     | used when the profile lists none          |
//! | `bonus.classical`   | 5                | literary candidates, classical preference |
//! | `bonus.modern`      | 5                | pool candidates, modern preference        |
//! | `bonus.style_per_char` | 3             | per given char in the active style pool   |

use std::path::Path;

use mingzi_dict::Element;
use serde::{Deserialize, Serialize};

/// Failure to load an [`EngineConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid engine config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Preference bonuses added after scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Bonuses {
    pub classical: u32,
    pub modern: u32,
    pub style_per_char: u32,
}

impl Default for Bonuses {
    fn default() -> Self {
        Self {
            classical: 5,
            modern: 5,
            style_per_char: 3,
        }
    }
}

/// Tuning shared by the validator, generator and ranker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub complexity_ceiling: u32,
    pub pair_pool_cap: usize,
    pub single_pool_cap: usize,
    pub diversity_cap: usize,
    pub page_slack: usize,
    pub default_favorable: [Element; 2],
    pub bonus: Bonuses,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            complexity_ceiling: 31,
            pair_pool_cap: 60,
            single_pool_cap: 200,
            diversity_cap: 3,
            page_slack: 80,
            default_favorable: [Element::Earth, Element::Metal],
            bonus: Bonuses::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a TOML document. Absent keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] on malformed TOML or mistyped values.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Read and parse a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
