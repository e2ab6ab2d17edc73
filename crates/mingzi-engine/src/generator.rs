//! Candidate enumeration.
//!
//! ```text
//! profile ──► target elements A, B
//!                 │
//!                 ▼
//! pools:  A, B, modern(gender), style(filter)   (deduped, gender-filtered)
//!                 │
//!     ┌───────────┴────────────┐
//!     ▼                        ▼
//! literary pass            combinatorial pass
//! (sources, two chars)     (A × B, or style ∪ modern ∪ A ∪ B singly)
//!     │                        │
//!     └──────► scored, bonus applied, clamped ◄──┘
//! ```
//!
//! Output is unranked and may hold the same name twice; the ranker sorts
//! that out. A rejected combination is dropped and counted, never fatal.

use mingzi_dict::{Dictionary, Gender, LiterarySource};
use tracing::{debug, instrument, trace};

use crate::candidate::NameCandidate;
use crate::config::EngineConfig;
use crate::explain::rescore;
use crate::request::{GenerationRequest, NameLength, SourcePreference};
use crate::scorer::{MAX_SCORE, Scorer};

/// The four candidate pools for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pools {
    /// First target element.
    pub a: Vec<char>,
    /// Second target element.
    pub b: Vec<char>,
    pub modern: Vec<char>,
    /// Empty unless a specific style was requested.
    pub style: Vec<char>,
}

/// Enumerates and scores candidates for a request.
#[derive(Debug, Clone, Copy)]
pub struct Generator<'a> {
    scorer: Scorer<'a>,
    config: &'a EngineConfig,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub const fn new(dict: &'a Dictionary, config: &'a EngineConfig) -> Self {
        Self {
            scorer: Scorer::new(dict, config),
            config,
        }
    }

    fn dict(&self) -> &'a Dictionary {
        self.scorer.validator().dictionary()
    }

    /// Deduplicate in order and keep what `gender` may use.
    fn admissible(&self, chars: &[char], gender: Gender) -> Vec<char> {
        let v = self.scorer.validator();
        let mut out: Vec<char> = Vec::with_capacity(chars.len());
        for &c in chars {
            if !out.contains(&c) && v.is_admissible_for_gender(c, gender) {
                out.push(c);
            }
        }
        out
    }

    /// Build the request's pools.
    #[must_use]
    pub fn pools(&self, req: &GenerationRequest) -> Pools {
        let dict = self.dict();
        let [a, b] = req.profile.target_elements(self.config.default_favorable);
        let style = req
            .style
            .style()
            .map(|s| self.admissible(dict.style_keywords(s, req.gender), req.gender))
            .unwrap_or_default();
        Pools {
            a: self.admissible(dict.element_pool(a), req.gender),
            b: self.admissible(dict.element_pool(b), req.gender),
            modern: self.admissible(dict.modern_pool(req.gender), req.gender),
            style,
        }
    }

    /// Score every candidate the request can produce. Unranked.
    #[instrument(
        name = "mingzi.generate",
        skip(self, req),
        fields(surname = %req.surname, gender = ?req.gender, length = ?req.length)
    )]
    #[must_use]
    pub fn generate(&self, req: &GenerationRequest) -> Vec<NameCandidate> {
        let pools = self.pools(req);
        debug!(
            a = pools.a.len(),
            b = pools.b.len(),
            modern = pools.modern.len(),
            style = pools.style.len(),
            "pools built"
        );

        let mut out = Vec::new();
        let mut rejected = 0usize;

        if req.preference != SourcePreference::Modern && req.length == NameLength::Two {
            self.literary_pass(req, &pools, &mut out, &mut rejected);
        }
        let literary = out.len();

        match req.length {
            NameLength::One => self.single_pass(req, &pools, &mut out, &mut rejected),
            NameLength::Two => self.pair_pass(req, &pools, &mut out, &mut rejected),
        }

        debug!(
            literary,
            combinatorial = out.len() - literary,
            rejected,
            "generation finished"
        );
        out
    }

    fn literary_pass(
        &self,
        req: &GenerationRequest,
        pools: &Pools,
        out: &mut Vec<NameCandidate>,
        rejected: &mut usize,
    ) {
        let v = self.scorer.validator();
        let bonus = if req.preference == SourcePreference::Classical {
            self.config.bonus.classical
        } else {
            0
        };

        let eligible = self.dict().sources().iter().filter(|src: &&LiterarySource| {
            src.gender.admits(req.gender) && req.style.admits(src.styles)
        });
        for src in eligible {
            let [c1, c2] = src.keywords;
            if let Some(reason) = [c1, c2]
                .into_iter()
                .find_map(|c| v.check_char_for_gender(c, req.gender).err())
            {
                trace!(attribution = src.attribution, %reason, "source skipped");
                *rejected += 1;
                continue;
            }
            match self.scorer.score(req.surname, c1, Some(c2), &req.profile, Some(src)) {
                Ok(candidate) => out.push(self.with_bonus(candidate, bonus, pools)),
                Err(reason) => {
                    trace!(attribution = src.attribution, %reason, "source rejected");
                    *rejected += 1;
                }
            }
        }
    }

    fn pair_pass(
        &self,
        req: &GenerationRequest,
        pools: &Pools,
        out: &mut Vec<NameCandidate>,
        rejected: &mut usize,
    ) {
        let bonus = self.modern_bonus(req);
        let cap = self.config.pair_pool_cap;
        for &c1 in pools.a.iter().take(cap) {
            for &c2 in pools.b.iter().take(cap) {
                if c1 == c2 {
                    continue;
                }
                match self.scorer.score(req.surname, c1, Some(c2), &req.profile, None) {
                    Ok(candidate) => out.push(self.with_bonus(candidate, bonus, pools)),
                    Err(reason) => {
                        trace!(%c1, %c2, %reason, "pair rejected");
                        *rejected += 1;
                    }
                }
            }
        }
    }

    fn single_pass(
        &self,
        req: &GenerationRequest,
        pools: &Pools,
        out: &mut Vec<NameCandidate>,
        rejected: &mut usize,
    ) {
        let bonus = self.modern_bonus(req);
        let mut union: Vec<char> = Vec::new();
        for &c in pools.style.iter().chain(&pools.modern).chain(&pools.a).chain(&pools.b) {
            if !union.contains(&c) {
                union.push(c);
            }
        }
        for c in union.into_iter().take(self.config.single_pool_cap) {
            match self.scorer.score(req.surname, c, None, &req.profile, None) {
                Ok(candidate) => out.push(self.with_bonus(candidate, bonus, pools)),
                Err(reason) => {
                    trace!(%c, %reason, "single rejected");
                    *rejected += 1;
                }
            }
        }
    }

    const fn modern_bonus(&self, req: &GenerationRequest) -> u32 {
        match req.preference {
            SourcePreference::Modern => self.config.bonus.modern,
            SourcePreference::Classical | SourcePreference::Balanced => 0,
        }
    }

    /// Add the preference bonus plus the per-character style bonus, clamped.
    ///
    /// The tier and score-driven narration follow the final score.
    fn with_bonus(&self, mut candidate: NameCandidate, bonus: u32, pools: &Pools) -> NameCandidate {
        let styled = candidate
            .given_chars()
            .filter(|c| pools.style.contains(c))
            .count();
        let style_bonus = self
            .config
            .bonus
            .style_per_char
            .saturating_mul(u32::try_from(styled).unwrap_or(u32::MAX));
        let score = candidate
            .score
            .saturating_add(bonus)
            .saturating_add(style_bonus)
            .min(MAX_SCORE);
        rescore(&mut candidate, score);
        candidate
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use mingzi_dict::{Element, GenderAffinity, Style, StyleFilter, StyleSet};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::candidate::Tier;
    use crate::profile::{DayMaster, ElementalProfile, Strength};

    fn source(keywords: [char; 2], gender: GenderAffinity, styles: StyleSet) -> LiterarySource {
        LiterarySource {
            text: "句",
            attribution: "篇",
            keywords,
            gender,
            styles,
        }
    }

    fn dict() -> Dictionary {
        Dictionary::builder()
            .element_pool(Element::Earth, "嘉安坤安死")
            .element_pool(Element::Metal, "铭锦刚")
            .element_pool(Element::Water, "泽")
            .glyphs(&[
                ('杨', 13, 2),
                ('嘉', 14, 1),
                ('安', 6, 1),
                ('坤', 8, 1),
                ('铭', 14, 2),
                ('锦', 16, 3),
                ('刚', 10, 1),
                ('泽', 17, 2),
                ('伟', 11, 3),
                ('死', 6, 3),
            ])
            .banned("死")
            .male_only("刚")
            .female_only("")
            .homophones('杨', "坤")
            .modern_pool(Gender::Male, "泽嘉")
            .modern_pool(Gender::Female, "泽")
            .style_keywords(Style::Grand, Gender::Male, "嘉泽")
            .source(source(['嘉', '泽'], GenderAffinity::Mixed, StyleSet::GRAND))
            .source(source(['锦', '刚'], GenderAffinity::Mixed, StyleSet::POETIC))
            .source(source(['安', '铭'], GenderAffinity::Female, StyleSet::GENTLE))
            .build()
    }

    fn request(length: NameLength) -> GenerationRequest {
        GenerationRequest {
            length,
            ..GenerationRequest::new(
                '杨',
                ElementalProfile {
                    day_master: DayMaster::new(Element::Wood, "甲"),
                    strength: Strength::Weak,
                    favorable: vec![Element::Earth, Element::Metal],
                },
            )
        }
    }

    fn names(candidates: &[NameCandidate]) -> Vec<String> {
        candidates.iter().map(NameCandidate::full_name).collect()
    }

    // ── pools ────────────────────────────────────────────────────

    #[test]
    fn pools_are_deduped_and_filtered() {
        let d = dict();
        let cfg = EngineConfig::default();
        let g = Generator::new(&d, &cfg);
        let pools = g.pools(&request(NameLength::Two));
        assert_eq!(pools.a, vec!['嘉', '安', '坤']);
        assert_eq!(pools.b, vec!['铭', '锦', '刚']);
        assert_eq!(pools.modern, vec!['泽', '嘉']);
        assert!(pools.style.is_empty());

        let female = GenerationRequest {
            gender: Gender::Female,
            ..request(NameLength::Two)
        };
        assert_eq!(g.pools(&female).b, vec!['铭', '锦']);
    }

    #[test]
    fn style_pool_only_for_specific_style() {
        let d = dict();
        let cfg = EngineConfig::default();
        let g = Generator::new(&d, &cfg);
        let req = GenerationRequest {
            style: StyleFilter::Only(Style::Grand),
            ..request(NameLength::Two)
        };
        assert_eq!(g.pools(&req).style, vec!['嘉', '泽']);
    }

    // ── passes ───────────────────────────────────────────────────

    #[test]
    fn two_char_generation_order_and_rejections() {
        let d = dict();
        let cfg = EngineConfig::default();
        let g = Generator::new(&d, &cfg);
        let out = g.generate(&request(NameLength::Two));
        // Literary: 嘉泽, 锦刚 (female-only source skipped). Pairs: 坤 is a
        // homophone of 杨, so only 嘉/安 rows survive.
        assert_eq!(
            names(&out),
            vec!["杨嘉泽", "杨锦刚", "杨嘉铭", "杨嘉锦", "杨嘉刚", "杨安铭", "杨安锦", "杨安刚"]
        );
        assert!(out[0].source.is_some());
        assert!(out[2].source.is_none());
    }

    #[test]
    fn female_request_never_sees_male_only_chars() {
        let d = dict();
        let cfg = EngineConfig::default();
        let g = Generator::new(&d, &cfg);
        let req = GenerationRequest {
            gender: Gender::Female,
            ..request(NameLength::Two)
        };
        let out = g.generate(&req);
        assert!(out.iter().all(|c| !c.given_chars().any(|ch| d.is_male_only(ch))));
        assert!(names(&out).contains(&"杨安铭".to_string()));
        assert!(!names(&out).contains(&"杨锦刚".to_string()));
    }

    #[test]
    fn modern_preference_skips_literary_and_adds_bonus() {
        let d = dict();
        let cfg = EngineConfig::default();
        let g = Generator::new(&d, &cfg);
        let balanced = g.generate(&request(NameLength::Two));
        let modern = g.generate(&GenerationRequest {
            preference: SourcePreference::Modern,
            ..request(NameLength::Two)
        });
        assert!(modern.iter().all(|c| c.source.is_none()));
        let find = |v: &[NameCandidate], name: &str| {
            v.iter().find(|c| c.full_name() == name).map(|c| c.score)
        };
        let base = find(&balanced, "杨安铭").unwrap();
        assert_eq!(find(&modern, "杨安铭"), Some((base + 5).min(100)));
    }

    #[test]
    fn classical_preference_boosts_sources_only() {
        let d = dict();
        let cfg = EngineConfig::default();
        let g = Generator::new(&d, &cfg);
        let balanced = g.generate(&request(NameLength::Two));
        let classical = g.generate(&GenerationRequest {
            preference: SourcePreference::Classical,
            ..request(NameLength::Two)
        });
        assert_eq!(classical[1].score, (balanced[1].score + 5).min(100));
        assert_eq!(classical[2].score, balanced[2].score);
    }

    #[test]
    fn style_filter_limits_sources_and_adds_style_bonus() {
        let d = dict();
        let cfg = EngineConfig::default();
        let g = Generator::new(&d, &cfg);
        let req = GenerationRequest {
            style: StyleFilter::Only(Style::Grand),
            ..request(NameLength::Two)
        };
        let out = g.generate(&req);
        let literary: Vec<_> = out.iter().filter(|c| c.source.is_some()).collect();
        assert_eq!(literary.len(), 1);
        assert_eq!(literary[0].full_name(), "杨嘉泽");

        let plain = g.generate(&request(NameLength::Two));
        let score_of = |v: &[NameCandidate], name: &str| {
            v.iter().find(|c| c.full_name() == name).map(|c| c.score).unwrap()
        };
        assert_eq!(
            score_of(&out, "杨嘉铭"),
            (score_of(&plain, "杨嘉铭") + 3).min(100)
        );
    }

    #[test]
    fn single_char_uses_union_in_order() {
        let d = dict();
        let cfg = EngineConfig::default();
        let g = Generator::new(&d, &cfg);
        let out = g.generate(&request(NameLength::One));
        // modern (泽 嘉), then A (安; 坤 is a homophone), then B.
        assert_eq!(
            names(&out),
            vec!["杨泽", "杨嘉", "杨安", "杨铭", "杨锦", "杨刚"]
        );
        assert!(out.iter().all(|c| c.char2.is_none()));
    }

    #[test]
    fn caps_bound_the_search() {
        let d = dict();
        let cfg = EngineConfig {
            pair_pool_cap: 1,
            single_pool_cap: 2,
            ..EngineConfig::default()
        };
        let g = Generator::new(&d, &cfg);
        let pairs = g.generate(&GenerationRequest {
            preference: SourcePreference::Modern,
            ..request(NameLength::Two)
        });
        assert_eq!(names(&pairs), vec!["杨嘉铭"]);
        let singles = g.generate(&request(NameLength::One));
        assert_eq!(names(&singles), vec!["杨泽", "杨嘉"]);
    }

    #[test]
    fn scores_stay_in_bounds_after_bonus() {
        let d = dict();
        let cfg = EngineConfig {
            bonus: crate::config::Bonuses {
                classical: 90,
                modern: 90,
                style_per_char: 90,
            },
            ..EngineConfig::default()
        };
        let g = Generator::new(&d, &cfg);
        let out = g.generate(&GenerationRequest {
            preference: SourcePreference::Classical,
            style: StyleFilter::Only(Style::Grand),
            ..request(NameLength::Two)
        });
        assert!(!out.is_empty());
        assert!(out.iter().all(|c| c.score <= 100));
    }

    #[test]
    fn extreme_bonuses_saturate_at_the_ceiling() {
        let d = dict();
        let cfg = EngineConfig {
            bonus: crate::config::Bonuses {
                classical: u32::MAX,
                modern: u32::MAX,
                style_per_char: u32::MAX,
            },
            ..EngineConfig::default()
        };
        let g = Generator::new(&d, &cfg);
        let modern = g.generate(&GenerationRequest {
            preference: SourcePreference::Modern,
            style: StyleFilter::Only(Style::Grand),
            ..request(NameLength::Two)
        });
        assert!(!modern.is_empty());
        assert!(modern.iter().all(|c| c.score == 100 && c.tier == Tier::Top));

        let classical = g.generate(&GenerationRequest {
            preference: SourcePreference::Classical,
            ..request(NameLength::Two)
        });
        let literary: Vec<_> = classical.iter().filter(|c| c.source.is_some()).collect();
        assert!(!literary.is_empty());
        assert!(literary.iter().all(|c| c.score == 100 && c.tier == Tier::Top));
        assert!(classical.iter().all(|c| c.score <= 100));
    }

    #[test]
    fn tier_and_narration_follow_bonus_adjusted_score() {
        let d = dict();
        let cfg = EngineConfig::default();
        let g = Generator::new(&d, &cfg);
        let plain = g.generate(&request(NameLength::Two));
        let boosted = g.generate(&GenerationRequest {
            preference: SourcePreference::Classical,
            style: StyleFilter::Only(Style::Grand),
            ..request(NameLength::Two)
        });
        for c in plain.iter().chain(&boosted) {
            assert_eq!(c.tier, Tier::from_score(c.score), "{}", c.full_name());
            let ambitious = c.explanation.psychology.contains("领袖与成就");
            assert_eq!(ambitious, c.score > 85, "{}", c.full_name());
        }

        // 嘉泽 gains the classical bonus and two style bonuses.
        let score_of = |v: &[NameCandidate]| {
            v.iter().find(|c| c.full_name() == "杨嘉泽").map(|c| c.score).unwrap()
        };
        assert_eq!(score_of(&boosted), (score_of(&plain) + 5 + 6).min(100));
    }
}
