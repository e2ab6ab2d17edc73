//! The injectable, read-only character dictionary.
//!
//! A [`Dictionary`] bundles every lookup table the engine consults. It is
//! built once (usually via [`Dictionary::builtin`]) and then shared by
//! reference; nothing mutates it afterwards. Tests build small dictionaries
//! with [`DictionaryBuilder`] to pin exact behavior.
//!
//! Missing entries are "unknown", never errors: `strokes` returns `None`,
//! `element_of` returns `None`, pools come back empty.

use std::collections::{HashMap, HashSet};

use crate::element::Element;
use crate::gender::Gender;
use crate::source::LiterarySource;
use crate::style::Style;
use crate::tone::Tone;

/// Every lookup table the naming engine reads.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    /// Element pools, indexed by `Element as usize`. Order is curated order.
    pools: [Vec<char>; 5],
    /// Reverse index: the first pool that lists a character wins.
    elements: HashMap<char, Element>,
    strokes: HashMap<char, u32>,
    tones: HashMap<char, Tone>,
    meanings: HashMap<char, String>,
    banned: HashSet<char>,
    male_only: HashSet<char>,
    /// `None` when no female-only list was supplied at all.
    female_only: Option<HashSet<char>>,
    homophones: HashMap<char, Vec<char>>,
    sources: Vec<LiterarySource>,
    style_keywords: HashMap<(Style, Gender), Vec<char>>,
    modern: HashMap<Gender, Vec<char>>,
}

impl Dictionary {
    /// Start building a dictionary from scratch.
    #[must_use]
    pub fn builder() -> DictionaryBuilder {
        DictionaryBuilder::default()
    }

    /// Characters tagged with `element`, in curated order.
    #[must_use]
    pub fn element_pool(&self, element: Element) -> &[char] {
        &self.pools[element as usize]
    }

    /// The element a character is tagged with, if any.
    #[must_use]
    pub fn element_of(&self, ch: char) -> Option<Element> {
        self.elements.get(&ch).copied()
    }

    /// Kangxi stroke count, if known.
    #[must_use]
    pub fn strokes(&self, ch: char) -> Option<u32> {
        self.strokes.get(&ch).copied()
    }

    /// Mandarin tone, if known.
    #[must_use]
    pub fn tone(&self, ch: char) -> Option<Tone> {
        self.tones.get(&ch).copied()
    }

    /// Short gloss of a character, if known.
    #[must_use]
    pub fn meaning(&self, ch: char) -> Option<&str> {
        self.meanings.get(&ch).map(String::as_str)
    }

    #[must_use]
    pub fn is_banned(&self, ch: char) -> bool {
        self.banned.contains(&ch)
    }

    #[must_use]
    pub fn is_male_only(&self, ch: char) -> bool {
        self.male_only.contains(&ch)
    }

    /// False when no female-only list exists.
    #[must_use]
    pub fn is_female_only(&self, ch: char) -> bool {
        self.female_only.as_ref().is_some_and(|set| set.contains(&ch))
    }

    /// Characters that form an unfortunate homophone with `surname`.
    #[must_use]
    pub fn forbidden_for(&self, surname: char) -> &[char] {
        self.homophones.get(&surname).map(Vec::as_slice).unwrap_or(&[])
    }

    #[must_use]
    pub fn sources(&self) -> &[LiterarySource] {
        &self.sources
    }

    /// Keyword characters for a style, as curated for `gender`.
    #[must_use]
    pub fn style_keywords(&self, style: Style, gender: Gender) -> &[char] {
        self.style_keywords
            .get(&(style, gender))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Contemporary favorites for `gender`.
    #[must_use]
    pub fn modern_pool(&self, gender: Gender) -> &[char] {
        self.modern.get(&gender).map(Vec::as_slice).unwrap_or(&[])
    }
}

// ---------------------------------------------------------------------------
// DictionaryBuilder
// ---------------------------------------------------------------------------

/// Chained construction of a [`Dictionary`].
///
/// Character lists are passed as strings (`"坤城培"`), one character per
/// entry. Repeated characters in a pool are kept once.
#[derive(Debug, Default)]
pub struct DictionaryBuilder {
    dict: Dictionary,
}

impl DictionaryBuilder {
    /// Append characters to an element pool.
    #[must_use]
    pub fn element_pool(mut self, element: Element, chars: &str) -> Self {
        let pool = &mut self.dict.pools[element as usize];
        for ch in chars.chars() {
            if !pool.contains(&ch) {
                pool.push(ch);
            }
            self.dict.elements.entry(ch).or_insert(element);
        }
        self
    }

    /// Record stroke counts and tones: `(char, strokes, tone number)`.
    ///
    /// A tone number outside 1–4 leaves the tone unknown.
    #[must_use]
    pub fn glyphs(mut self, entries: &[(char, u32, u8)]) -> Self {
        for &(ch, strokes, tone) in entries {
            self.dict.strokes.insert(ch, strokes);
            if let Some(tone) = Tone::from_number(tone) {
                self.dict.tones.insert(ch, tone);
            }
        }
        self
    }

    #[must_use]
    pub fn meanings(mut self, entries: &[(char, &str)]) -> Self {
        for &(ch, meaning) in entries {
            self.dict.meanings.insert(ch, meaning.to_string());
        }
        self
    }

    #[must_use]
    pub fn banned(mut self, chars: &str) -> Self {
        self.dict.banned.extend(chars.chars());
        self
    }

    #[must_use]
    pub fn male_only(mut self, chars: &str) -> Self {
        self.dict.male_only.extend(chars.chars());
        self
    }

    /// Calling this (even with an empty string) makes the female-only set exist.
    #[must_use]
    pub fn female_only(mut self, chars: &str) -> Self {
        self.dict
            .female_only
            .get_or_insert_with(HashSet::new)
            .extend(chars.chars());
        self
    }

    #[must_use]
    pub fn homophones(mut self, surname: char, forbidden: &str) -> Self {
        let list = self.dict.homophones.entry(surname).or_default();
        for ch in forbidden.chars() {
            if !list.contains(&ch) {
                list.push(ch);
            }
        }
        self
    }

    #[must_use]
    pub fn source(mut self, source: LiterarySource) -> Self {
        self.dict.sources.push(source);
        self
    }

    #[must_use]
    pub fn style_keywords(mut self, style: Style, gender: Gender, chars: &str) -> Self {
        self.dict
            .style_keywords
            .entry((style, gender))
            .or_default()
            .extend(chars.chars());
        self
    }

    #[must_use]
    pub fn modern_pool(mut self, gender: Gender, chars: &str) -> Self {
        self.dict.modern.entry(gender).or_default().extend(chars.chars());
        self
    }

    #[must_use]
    pub fn build(self) -> Dictionary {
        self.dict
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
