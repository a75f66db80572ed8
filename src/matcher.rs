//! Similarity search over the corpus.

use crate::corpus::Corpus;
use crate::similarity::similarity;
use crate::types::{
    TranslationUnit,
    UnitId,
};

/// Candidates must score strictly above this to be returned.
pub const MATCH_THRESHOLD: f64 = 0.50;

/// A corpus unit whose origin segment is close enough to the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult<'c> {
    pub id: UnitId,
    pub unit: &'c TranslationUnit,
    /// Similarity in `(MATCH_THRESHOLD, 1.0]`
    pub score: f64,
}

impl<'c> MatchResult<'c> {
    /// Origin segment of the matched unit.
    ///
    /// Always present: units without one are never scored.
    #[must_use]
    pub fn segment(&self) -> &'c str {
        self.unit.origin_segment().unwrap_or_default()
    }
}

/// Finds the units of `lang` whose origin segment scores above [`MATCH_THRESHOLD`]
/// against `query`.
///
/// Results come in corpus order, not ranked by score. A missing language or an
/// empty/missing query yields no results; units without an origin segment are skipped.
#[must_use]
pub fn find_matches<'c>(
    corpus: &'c Corpus,
    lang: Option<&str>,
    query: Option<&str>,
) -> Vec<MatchResult<'c>> {
    let Some(query) = query.filter(|q| !q.is_empty()) else {
        return Vec::new();
    };

    let mut candidates = 0_usize;
    let matches: Vec<MatchResult<'c>> = corpus
        .filter_by_origin_language(lang)
        .filter_map(|(id, unit)| {
            let segment = unit.origin_segment()?;
            candidates += 1;
            let score = similarity(query, segment);
            (score > MATCH_THRESHOLD).then_some(MatchResult { id, unit, score })
        })
        .collect();

    tracing::debug!(
        "Matched {} of {} candidates for language {:?}",
        matches.len(),
        candidates,
        lang
    );

    matches
}
