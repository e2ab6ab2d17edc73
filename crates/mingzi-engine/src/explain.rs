//! The six narrative sections of an [`Explanation`].
//!
//! Every section is a pure function of values the scorer has already
//! computed, plus dictionary lookups. Nothing here computes the score;
//! [`rescore`] only carries a bonus-adjusted score through to the tier and
//! the score-driven sections.

use mingzi_dict::{Dictionary, Element, LiterarySource, ToneClass};

use crate::candidate::{Explanation, NameCandidate, StrokeFigures, Tier};
use crate::numerology::{is_auspicious, talent_adjustment, talent_elements};
use crate::profile::{ElementalProfile, Strength};

/// Scores above this read as ambitious rather than easy-going.
const AMBITIOUS_ABOVE: u32 = 85;

/// What the scorer hands over for narration.
#[derive(Debug, Clone, Copy)]
pub struct NarrationInput<'a> {
    pub surname: char,
    /// Given characters with their elements; one or two entries.
    pub given: &'a [(char, Option<Element>)],
    pub profile: &'a ElementalProfile,
    pub targets: [Element; 2],
    pub figures: &'a StrokeFigures,
    pub score: u32,
    pub source: Option<&'a LiterarySource>,
}

/// Compose all six sections.
#[must_use]
pub fn explain(dict: &Dictionary, input: &NarrationInput<'_>) -> Explanation {
    let elements = impression_elements(input.given);
    Explanation {
        elemental: elemental(input.profile, input.targets, input.given),
        cultural: cultural(dict, input.given, input.source),
        phonetic: phonetic(dict, input.surname, input.given),
        stroke: stroke(input.figures),
        social: social(elements, input.score),
        psychology: psychology(elements, input.score),
    }
}

/// Replace a candidate's score, keeping its tier and the social and
/// psychology sections in step with it.
pub fn rescore(candidate: &mut NameCandidate, score: u32) {
    candidate.score = score;
    candidate.tier = Tier::from_score(score);
    candidate.explanation.social = social(candidate.elements, score);
    candidate.explanation.psychology = psychology(candidate.elements, score);
}

// ---------------------------------------------------------------------------
// Elemental
// ---------------------------------------------------------------------------

/// Relationship of the given characters' elements to the day master.
///
/// Checked in order: same element, day master generates it, day master
/// controls it, it generates the day master, it controls the day master.
#[must_use]
pub fn relation(day_master: Element, strength: Strength, elements: &[Element]) -> &'static str {
    let strong = strength == Strength::Strong;
    let any = |f: &dyn Fn(Element) -> bool| elements.iter().any(|&e| f(e));

    if any(&|e| e == day_master) {
        if strong { "⚠️ 帮扶日主(忌)" } else { "✅ 帮扶日主(喜)" }
    } else if any(&|e| day_master.generates() == e) {
        "✅ 食伤泄秀(才华)"
    } else if any(&|e| day_master.controls() == e) {
        "✅ 财星/官星(事业)"
    } else if any(&|e| e.generates() == day_master) {
        if strong { "⚠️ 印星生身(忌)" } else { "✅ 印星护身(贵人)" }
    } else if elements.is_empty() {
        "⭕ 五行未明"
    } else {
        "⭕ 官杀制身(自律)"
    }
}

fn elemental(
    profile: &ElementalProfile,
    targets: [Element; 2],
    given: &[(char, Option<Element>)],
) -> String {
    let parts: Vec<String> = given
        .iter()
        .map(|&(ch, el)| match el {
            Some(e) if targets.contains(&e) => format!("「{ch}」({e}) 为喜用神"),
            Some(e) => format!("「{ch}」({e}) 五行相生"),
            None => format!("「{ch}」五行未知"),
        })
        .collect();

    let known: Vec<Element> = given.iter().filter_map(|&(_, e)| e).collect();
    let all_favorable = given
        .iter()
        .all(|&(_, e)| e.is_some_and(|e| targets.contains(&e)));
    let balance = if all_favorable { "⭐⭐⭐ 完美" } else { "⭐⭐ 良好" };

    format!(
        "日主{}，{}。\n{}。\n{}。整体平衡度：{balance}",
        profile.day_master,
        profile.strength.label(),
        parts.join("，"),
        relation(profile.day_master.element, profile.strength, &known),
    )
}

// ---------------------------------------------------------------------------
// Cultural
// ---------------------------------------------------------------------------

fn cultural(
    dict: &Dictionary,
    given: &[(char, Option<Element>)],
    source: Option<&LiterarySource>,
) -> String {
    if let Some(src) = source {
        let imagery: String = given.iter().filter_map(|&(_, e)| e.map(Element::glyph)).collect();
        let imagery = if imagery.is_empty() {
            String::new()
        } else {
            format!("\n富有{imagery}之意象，意境深远。")
        };
        return format!("📜 典籍出处\n“{}”\n—— {}。{imagery}", src.text, src.attribution);
    }

    let glosses: Vec<String> = given
        .iter()
        .filter_map(|&(ch, _)| dict.meaning(ch).map(|m| format!("「{ch}」{m}")))
        .collect();
    if glosses.is_empty() {
        "💡 现代组合\n字义稳重，朗朗上口，符合现代审美习惯。".to_string()
    } else {
        format!("💡 字义解读\n{}。", glosses.join("；"))
    }
}

// ---------------------------------------------------------------------------
// Phonetic
// ---------------------------------------------------------------------------

fn phonetic(dict: &Dictionary, surname: char, given: &[(char, Option<Element>)]) -> String {
    let chars: Vec<char> = std::iter::once(surname)
        .chain(given.iter().map(|&(c, _)| c))
        .collect();
    let classes: Vec<Option<ToneClass>> = chars
        .iter()
        .map(|&c| dict.tone(c).map(|t| t.class()))
        .collect();

    let pattern: Vec<String> = chars
        .iter()
        .zip(&classes)
        .map(|(c, class)| match class {
            Some(k) => format!("{c}({})", k.glyph()),
            None => format!("{c}(?)"),
        })
        .collect();

    let verdict = if classes.iter().any(Option::is_none) {
        "部分字声调未收录，建议实际诵读。"
    } else if classes.iter().all(|k| *k == Some(ToneClass::Level)) {
        "全为平声，音调舒缓，略欠起伏。"
    } else if classes.iter().all(|k| *k == Some(ToneClass::Oblique)) {
        "全为仄声，读来略显急促。"
    } else {
        "平仄相间，音律起伏，朗朗上口。"
    };

    format!("🔊 声调分析\n{}。\n{verdict}", pattern.join(" "))
}

// ---------------------------------------------------------------------------
// Stroke
// ---------------------------------------------------------------------------

fn stroke(figures: &StrokeFigures) -> String {
    let mark = |n| if is_auspicious(n) { "吉" } else { "平" };
    let total = if is_auspicious(figures.total) {
        format!("总格{}(大吉) - 运势亨通", figures.total)
    } else {
        format!("总格{}(中平) - 守成之象", figures.total)
    };

    let [h, p, e] = talent_elements(figures);
    let adjustment = talent_adjustment(figures);
    let verdict = match adjustment {
        1.. => format!("三才相生 +{adjustment}"),
        0 => "三才平和".to_string(),
        _ => format!("三才相克 {adjustment}"),
    };
    format!(
        "{total} | 人格{}({}) | 地格{}({}) | 外格{}\n天格{}({h}) 人格{}({p}) 地格{}({e})，{verdict}",
        figures.person,
        mark(figures.person),
        figures.earth,
        mark(figures.earth),
        figures.outer,
        figures.heaven,
        figures.person,
        figures.earth,
    )
}

// ---------------------------------------------------------------------------
// Social & psychology
// ---------------------------------------------------------------------------

struct Impression {
    social: &'static str,
    psycho: &'static str,
    keywords: &'static [&'static str],
}

const FIRST_DEFAULT: Impression = Impression {
    social: "独特",
    psycho: "个性鲜明",
    keywords: &["独特"],
};

const SECOND_DEFAULT: Impression = Impression {
    social: "稳重",
    psycho: "踏实",
    keywords: &["稳重"],
};

const fn impression(element: Element) -> Impression {
    match element {
        Element::Earth => Impression {
            social: "诚信可靠 / 务实派",
            psycho: "暗示稳重与责任感",
            keywords: &["踏实", "守信", "包容", "沉稳"],
        },
        Element::Metal => Impression {
            social: "执行力强 / 威严",
            psycho: "暗示决断力与魄力",
            keywords: &["果敢", "锋利", "义气", "坚韧"],
        },
        Element::Water => Impression {
            social: "善于变通 / 智囊",
            psycho: "暗示聪慧与适应力",
            keywords: &["灵动", "深邃", "智谋", "柔韧"],
        },
        Element::Wood => Impression {
            social: "进取心强 / 仁义",
            psycho: "暗示成长与正直",
            keywords: &["生机", "仁爱", "挺拔", "向上"],
        },
        Element::Fire => Impression {
            social: "感染力强 / 领袖",
            psycho: "暗示活力与希望",
            keywords: &["热烈", "明亮", "礼貌", "升腾"],
        },
    }
}

/// Element slots used for impressions: absent second slot stays `None`.
fn impression_elements(given: &[(char, Option<Element>)]) -> [Option<Element>; 2] {
    [
        given.first().and_then(|&(_, e)| e),
        given.get(1).and_then(|&(_, e)| e),
    ]
}

fn impressions(elements: [Option<Element>; 2]) -> (Impression, Impression) {
    (
        elements[0].map_or(FIRST_DEFAULT, impression),
        elements[1].map_or(SECOND_DEFAULT, impression),
    )
}

fn social(elements: [Option<Element>; 2], score: u32) -> String {
    let (first, second) = impressions(elements);
    let mut keywords: Vec<&str> = Vec::with_capacity(3);
    for kw in first.keywords.iter().chain(second.keywords) {
        if keywords.len() == 3 {
            break;
        }
        if !keywords.contains(kw) {
            keywords.push(*kw);
        }
    }
    let signal = if score > AMBITIOUS_ABOVE {
        "专业且有魄力"
    } else {
        "亲和且踏实"
    };
    format!(
        "👀 第一印象\n{}。\n{}；给人以“{signal}”的社交信号。",
        keywords.join(" / "),
        first.social,
    )
}

fn psychology(elements: [Option<Element>; 2], score: u32) -> String {
    let (first, second) = impressions(elements);
    let path = if score > AMBITIOUS_ABOVE {
        "“领袖与成就”"
    } else {
        "“安稳与幸福”"
    };
    format!(
        "🧠 潜意识暗示\n{}，{}。\n名字磁场引导孩子走向{path}。",
        first.psycho, second.psycho
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::profile::DayMaster;

    fn profile(strength: Strength) -> ElementalProfile {
        ElementalProfile {
            day_master: DayMaster::new(Element::Wood, "甲"),
            strength,
            favorable: vec![Element::Earth, Element::Metal],
        }
    }

    // ── relation ──────────────────────────────────────────────────

    #[test]
    fn relation_same_element_depends_on_strength() {
        assert_eq!(relation(Element::Wood, Strength::Weak, &[Element::Wood]), "✅ 帮扶日主(喜)");
        assert_eq!(relation(Element::Wood, Strength::Strong, &[Element::Wood]), "⚠️ 帮扶日主(忌)");
    }

    #[test]
    fn relation_follows_cycles() {
        assert_eq!(relation(Element::Wood, Strength::Weak, &[Element::Fire]), "✅ 食伤泄秀(才华)");
        assert_eq!(relation(Element::Wood, Strength::Weak, &[Element::Earth]), "✅ 财星/官星(事业)");
        assert_eq!(relation(Element::Wood, Strength::Strong, &[Element::Water]), "⚠️ 印星生身(忌)");
        assert_eq!(relation(Element::Wood, Strength::Weak, &[Element::Water]), "✅ 印星护身(贵人)");
        assert_eq!(relation(Element::Wood, Strength::Weak, &[Element::Metal]), "⭕ 官杀制身(自律)");
        assert_eq!(relation(Element::Wood, Strength::Weak, &[]), "⭕ 五行未明");
    }

    #[test]
    fn relation_prefers_earlier_rules() {
        // Fire (output) outranks earth (wealth) regardless of slot order.
        assert_eq!(
            relation(Element::Wood, Strength::Weak, &[Element::Earth, Element::Fire]),
            "✅ 食伤泄秀(才华)"
        );
    }

    // ── elemental ────────────────────────────────────────────────

    #[test]
    fn elemental_marks_favorable_and_balance() {
        let targets = [Element::Earth, Element::Metal];
        let text = elemental(
            &profile(Strength::Weak),
            targets,
            &[('嘉', Some(Element::Earth)), ('铭', Some(Element::Metal))],
        );
        assert_eq!(
            text,
            "日主甲(木)，身弱。\n「嘉」(土) 为喜用神，「铭」(金) 为喜用神。\n✅ 财星/官星(事业)。整体平衡度：⭐⭐⭐ 完美"
        );

        let text = elemental(
            &profile(Strength::Weak),
            targets,
            &[('嘉', Some(Element::Earth)), ('林', Some(Element::Wood))],
        );
        assert!(text.contains("「林」(木) 五行相生"));
        assert!(text.ends_with("⭐⭐ 良好"));
    }

    // ── cultural ─────────────────────────────────────────────────

    #[test]
    fn cultural_falls_back_to_meanings_then_modern() {
        let d = Dictionary::builder().meanings(&[('嘉', "美好")]).build();
        let given = [('嘉', None), ('铭', None)];
        assert_eq!(cultural(&d, &given, None), "💡 字义解读\n「嘉」美好。");

        let empty = Dictionary::default();
        assert!(cultural(&empty, &given, None).starts_with("💡 现代组合"));
    }

    #[test]
    fn cultural_quotes_source_with_imagery() {
        let src = LiterarySource {
            text: "嘉言懿行",
            attribution: "《尚书》",
            keywords: ['嘉', '铭'],
            gender: mingzi_dict::GenderAffinity::Mixed,
            styles: mingzi_dict::StyleSet::CLASSICAL,
        };
        let d = Dictionary::default();
        let given = [('嘉', Some(Element::Earth)), ('铭', Some(Element::Metal))];
        assert_eq!(
            cultural(&d, &given, Some(&src)),
            "📜 典籍出处\n“嘉言懿行”\n—— 《尚书》。\n富有土金之意象，意境深远。"
        );

        let unknown = [('嘉', None), ('铭', None)];
        assert_eq!(
            cultural(&d, &unknown, Some(&src)),
            "📜 典籍出处\n“嘉言懿行”\n—— 《尚书》。"
        );
    }

    // ── phonetic ─────────────────────────────────────────────────

    #[test]
    fn phonetic_pattern_is_deterministic() {
        let d = Dictionary::builder()
            .glyphs(&[('杨', 13, 2), ('嘉', 14, 1), ('锦', 16, 3)])
            .build();
        let text = phonetic(&d, '杨', &[('嘉', None), ('锦', None)]);
        assert_eq!(text, "🔊 声调分析\n杨(平) 嘉(平) 锦(仄)。\n平仄相间，音律起伏，朗朗上口。");

        let text = phonetic(&d, '杨', &[('嘉', None)]);
        assert!(text.contains("全为平声"));

        let text = phonetic(&d, '杨', &[('水', None)]);
        assert!(text.contains("水(?)"));
    }

    // ── stroke ───────────────────────────────────────────────────

    #[test]
    fn stroke_text_lists_figures() {
        let figures = StrokeFigures {
            heaven: 14,
            person: 27,
            earth: 28,
            outer: 15,
            total: 41,
        };
        let text = stroke(&figures);
        assert_eq!(
            text.lines().next(),
            Some("总格41(大吉) - 运势亨通 | 人格27(平) | 地格28(平) | 外格15")
        );
        assert!(text.contains("人格27(平) | 地格28(平) | 外格15"));
        assert!(text.contains("天格14(火) 人格27(金) 地格28(金)"));
    }

    // ── social & psychology ──────────────────────────────────────

    #[test]
    fn social_keeps_three_distinct_keywords() {
        let text = social([Some(Element::Earth), Some(Element::Earth)], 90);
        assert!(text.starts_with("👀 第一印象\n踏实 / 守信 / 包容。"));
        assert!(text.contains("专业且有魄力"));
    }

    #[test]
    fn single_char_uses_default_second_impression() {
        let text = psychology([Some(Element::Fire), None], 60);
        assert_eq!(
            text,
            "🧠 潜意识暗示\n暗示活力与希望，踏实。\n名字磁场引导孩子走向“安稳与幸福”。"
        );
    }

    #[test]
    fn unknown_elements_use_defaults() {
        let text = social([None, None], 50);
        assert!(text.starts_with("👀 第一印象\n独特 / 稳重。"));
        assert!(text.contains("亲和且踏实"));
    }
}
