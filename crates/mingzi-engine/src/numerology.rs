//! Stroke numerology: the auspicious-total table and the three talents (三才).
//!
//! ```text
//! heaven = surname + 1
//! person = surname + char1
//! earth  = char1 + char2          (single given char: char1 + 1)
//! outer  = total − person + 1
//! ```
//!
//! Heaven, person and earth each map to an element by last digit; adjacent
//! pairs that generate each other add 5, pairs that control each other
//! subtract 5, and the sum is clamped to [−5, +10].

use mingzi_dict::Element;

use crate::candidate::{StrokeCounts, StrokeFigures};

/// Totals considered auspicious (吉数).
pub const AUSPICIOUS_TOTALS: [u32; 25] = [
    15, 16, 21, 23, 24, 25, 29, 31, 32, 33, 35, 37, 39, 41, 45, 47, 48, 52, 57, 61, 63, 65, 67,
    68, 81,
];

/// Stroke credit when the total is in the table.
pub const AUSPICIOUS_CREDIT: u32 = 30;
/// Stroke credit otherwise.
pub const PLAIN_CREDIT: u32 = 15;

const TALENT_STEP: i32 = 5;
const TALENT_MIN: i32 = -5;
const TALENT_MAX: i32 = 10;

#[must_use]
pub fn is_auspicious(strokes: u32) -> bool {
    AUSPICIOUS_TOTALS.contains(&strokes)
}

/// Stroke counts for a name. `None` counts as 0.
#[must_use]
pub fn stroke_counts(surname: Option<u32>, char1: Option<u32>, char2: Option<u32>) -> StrokeCounts {
    let surname = surname.unwrap_or(0);
    let char1 = char1.unwrap_or(0);
    let char2 = char2.unwrap_or(0);
    StrokeCounts {
        surname,
        char1,
        char2,
        total: surname + char1 + char2,
    }
}

/// The five figures. `single` marks a one-character given name.
#[must_use]
pub const fn figures(counts: &StrokeCounts, single: bool) -> StrokeFigures {
    let person = counts.surname + counts.char1;
    let earth = if single {
        counts.char1 + 1
    } else {
        counts.char1 + counts.char2
    };
    StrokeFigures {
        heaven: counts.surname + 1,
        person,
        earth,
        outer: counts.total.saturating_sub(person) + 1,
        total: counts.total,
    }
}

/// Elements of heaven, person and earth.
#[must_use]
pub const fn talent_elements(figures: &StrokeFigures) -> [Element; 3] {
    [
        Element::from_stroke_figure(figures.heaven),
        Element::from_stroke_figure(figures.person),
        Element::from_stroke_figure(figures.earth),
    ]
}

/// The clamped three-talents adjustment.
#[must_use]
pub fn talent_adjustment(figures: &StrokeFigures) -> i32 {
    let [heaven, person, earth] = talent_elements(figures);
    let raw: i32 = [(heaven, person), (person, earth)]
        .into_iter()
        .map(|(a, b)| {
            if a.is_generating_pair(b) {
                TALENT_STEP
            } else if a.is_controlling_pair(b) {
                -TALENT_STEP
            } else {
                0
            }
        })
        .sum();
    raw.clamp(TALENT_MIN, TALENT_MAX)
}

/// Table credit plus the adjustment.
#[must_use]
pub fn stroke_score(figures: &StrokeFigures) -> u32 {
    let credit = if is_auspicious(figures.total) {
        AUSPICIOUS_CREDIT
    } else {
        PLAIN_CREDIT
    };
    credit.saturating_add_signed(talent_adjustment(figures))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
