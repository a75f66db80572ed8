//! Translation and source context of a matched segment.

use crate::corpus::Corpus;
use crate::types::{
    TranslationUnit,
    UnitId,
};

/// Borrowed view of the unit behind a segment, for hover details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TranslationContext<'c> {
    pub id: UnitId,
    pub translation_language: &'c str,
    pub translation_segment: Option<&'c str>,
    pub origin_context_pre: Option<&'c str>,
    pub origin_context_post: Option<&'c str>,
}

impl<'c> TranslationContext<'c> {
    /// Borrows the fields shown in a hover from `unit`.
    fn new(id: UnitId, unit: &'c TranslationUnit) -> Self {
        Self {
            id,
            translation_language: &unit.translation_language,
            translation_segment: unit.translation_segment.as_deref(),
            origin_context_pre: unit.origin_context_pre.as_deref(),
            origin_context_post: unit.origin_context_post.as_deref(),
        }
    }
}

/// Context of the first unit, in corpus order, whose origin segment is exactly `text`.
///
/// Origin segments are not unique, so this is not a key lookup: when several units
/// share the text, the earliest one always wins. All origin languages are searched.
#[must_use]
pub fn lookup_context<'c>(corpus: &'c Corpus, text: &str) -> Option<TranslationContext<'c>> {
    corpus
        .iter()
        .find(|(_, unit)| unit.origin_segment() == Some(text))
        .map(|(id, unit)| TranslationContext::new(id, unit))
}

/// Context of a specific unit.
#[must_use]
pub fn context_of(corpus: &Corpus, id: UnitId) -> Option<TranslationContext<'_>> {
    corpus.get(id).map(|unit| TranslationContext::new(id, unit))
}
