//! # mingzi-dict: character tables for Chinese given-name generation
//!
//! Everything the naming engine looks up about a character lives here:
//!
//! | Table            | Lookup                          | Missing entry     |
//! |------------------|---------------------------------|-------------------|
//! | element pools    | `Element` → curated characters  | empty pool        |
//! | strokes          | char → Kangxi stroke count      | `None`            |
//! | tones            | char → Mandarin tone            | `None`            |
//! | policy           | banned, male-only, female-only  | not listed        |
//! | homophones       | surname → forbidden characters  | empty list        |
//! | sources          | curated literary quotations     | empty             |
//! | style keywords   | (style, gender) → characters    | empty             |
//! | modern pools     | gender → contemporary favorites | empty             |
//!
//! [`Dictionary::builtin`] ships a curated set; tests build their own with
//! [`Dictionary::builder`].

// Tables are long lists of literal data.
#![allow(clippy::too_many_lines)]

pub mod builtin;
pub mod dictionary;
pub mod element;
pub mod gender;
pub mod source;
pub mod style;
pub mod tone;

pub use builtin::builtin_surnames;
pub use dictionary::{Dictionary, DictionaryBuilder};
pub use element::Element;
pub use gender::{Gender, GenderAffinity};
pub use source::LiterarySource;
pub use style::{Style, StyleFilter, StyleSet};
pub use tone::{Tone, ToneClass};
