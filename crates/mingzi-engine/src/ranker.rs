//! De-duplication, ordering and diversity-aware paging.
//!
//! Paging is two-phase: one globally consistent "diverse" ordering is built
//! for the request, then the page is sliced out of it. Because the ordering
//! does not depend on the offset, sequential calls with increasing offsets
//! never repeat a name.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::candidate::NameCandidate;
use crate::config::EngineConfig;

/// Limits applied while building the diverse ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankPolicy {
    /// A given character may appear in at most this many candidates.
    pub diversity_cap: usize,
    /// Entries built past the end of the requested page.
    pub slack: usize,
}

impl Default for RankPolicy {
    fn default() -> Self {
        Self::from(&EngineConfig::default())
    }
}

impl From<&EngineConfig> for RankPolicy {
    fn from(config: &EngineConfig) -> Self {
        Self {
            diversity_cap: config.diversity_cap,
            slack: config.page_slack,
        }
    }
}

/// Running state of the diversity fold.
#[derive(Debug, Clone, Default)]
pub struct DiversityAccumulator {
    used_names: HashSet<String>,
    usage: HashMap<char, usize>,
    emitted: Vec<NameCandidate>,
}

impl DiversityAccumulator {
    /// How many emitted candidates contain `ch`.
    #[must_use]
    pub fn usage(&self, ch: char) -> usize {
        self.usage.get(&ch).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.emitted.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emitted.is_empty()
    }

    /// Emit `candidate` unless its full name was already emitted or one of
    /// its given characters has reached `cap`. Returns whether it was taken.
    pub fn offer(&mut self, candidate: NameCandidate, cap: usize) -> bool {
        let name = candidate.full_name();
        if self.used_names.contains(&name) {
            return false;
        }
        if candidate.given_chars().any(|c| self.usage(c) >= cap) {
            return false;
        }
        let mut chars: Vec<char> = candidate.given_chars().collect();
        chars.dedup();
        for c in chars {
            *self.usage.entry(c).or_insert(0) += 1;
        }
        self.used_names.insert(name);
        self.emitted.push(candidate);
        true
    }

    #[must_use]
    pub fn into_inner(self) -> Vec<NameCandidate> {
        self.emitted
    }
}

/// Keep the best-scoring instance of each `(char1, char2)`.
///
/// Equal scores keep the earlier instance; the survivor takes the position
/// where the pair was first seen.
#[must_use]
pub fn dedupe(candidates: Vec<NameCandidate>) -> Vec<NameCandidate> {
    let mut slot: HashMap<(char, Option<char>), usize> = HashMap::new();
    let mut out: Vec<NameCandidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match slot.get(&candidate.key()) {
            Some(&i) => {
                if candidate.score > out[i].score {
                    out[i] = candidate;
                }
            }
            None => {
                slot.insert(candidate.key(), out.len());
                out.push(candidate);
            }
        }
    }
    out
}

/// The diverse ordering, stopping after `limit` entries.
#[must_use]
pub fn diverse_order(
    candidates: Vec<NameCandidate>,
    limit: usize,
    policy: RankPolicy,
) -> Vec<NameCandidate> {
    let mut sorted = dedupe(candidates);
    sorted.sort_by(|a, b| b.score.cmp(&a.score));

    let acc = sorted
        .into_iter()
        .try_fold(DiversityAccumulator::default(), |mut acc, candidate| {
            if acc.len() >= limit {
                return Err(acc);
            }
            acc.offer(candidate, policy.diversity_cap);
            Ok(acc)
        })
        .unwrap_or_else(|full| full);
    acc.into_inner()
}

/// Rank `candidates` and return `[offset, offset + page_size)` of the
/// diverse ordering.
#[must_use]
pub fn rank_and_page(
    candidates: Vec<NameCandidate>,
    offset: usize,
    page_size: usize,
    policy: RankPolicy,
) -> Vec<NameCandidate> {
    let total = candidates.len();
    let limit = offset
        .saturating_add(page_size)
        .saturating_add(policy.slack);
    let diverse = diverse_order(candidates, limit, policy);
    debug!(total, diverse = diverse.len(), offset, page_size, "ranked");
    diverse.into_iter().skip(offset).take(page_size).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
