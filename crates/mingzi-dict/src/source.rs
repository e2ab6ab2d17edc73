//! Curated literary sources (典籍出处) that seed two-character names.

use crate::gender::GenderAffinity;
use crate::style::StyleSet;

/// A quotation whose two keyword characters form a candidate given name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiterarySource {
    /// The quoted line(s).
    pub text: &'static str,
    /// Work and author the quotation comes from.
    pub attribution: &'static str,
    /// The two characters lifted from the quotation.
    pub keywords: [char; 2],
    pub gender: GenderAffinity,
    pub styles: StyleSet,
}
