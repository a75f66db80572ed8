//! In-memory, read-only translation-memory corpus.

/// Corpus loading errors
mod error;

use std::collections::HashMap;
use std::fmt::Display;

pub use error::LoadError;

use crate::types::{
    TranslationUnit,
    UnitId,
};

/// Ordered collection of translation units, indexed by origin language.
///
/// Built once and never mutated afterwards, so a single instance can be shared
/// (e.g. behind an `Arc`) by any number of concurrent readers.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    /// Units in the order the loader produced them
    units: Vec<TranslationUnit>,

    /// Origin language → positions in `units`, ascending
    by_origin_language: HashMap<String, Vec<usize>>,
}

impl Corpus {
    /// Creates a corpus from already-materialized units, preserving their order.
    #[must_use]
    pub fn new(units: Vec<TranslationUnit>) -> Self {
        let mut by_origin_language: HashMap<String, Vec<usize>> = HashMap::new();
        for (index, unit) in units.iter().enumerate() {
            by_origin_language.entry(unit.origin_language.clone()).or_default().push(index);
        }

        tracing::debug!(
            "Corpus loaded: {} units in {} origin languages",
            units.len(),
            by_origin_language.len()
        );

        Self { units, by_origin_language }
    }

    /// Creates a corpus from the records yielded by an external loader.
    ///
    /// Records are stored as-is: no deduplication and no validation of their content.
    ///
    /// # Errors
    /// Returns [`LoadError::MalformedRecord`] for the first record the loader failed
    /// to produce. Records after it are not consumed.
    pub fn load<I, E>(records: I) -> Result<Self, LoadError>
    where
        I: IntoIterator<Item = Result<TranslationUnit, E>>,
        E: Display,
    {
        let units = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                record.map_err(|e| LoadError::MalformedRecord { index, message: e.to_string() })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(units))
    }

    /// Units whose origin language equals `lang`, in corpus order.
    ///
    /// The comparison is exact and case-sensitive. `None` yields nothing: no selected
    /// language means no candidates.
    pub fn filter_by_origin_language<'c>(
        &'c self,
        lang: Option<&str>,
    ) -> impl Iterator<Item = (UnitId, &'c TranslationUnit)> + use<'c> {
        let positions = lang
            .and_then(|lang| self.by_origin_language.get(lang))
            .map_or(&[][..], Vec::as_slice);

        positions
            .iter()
            .filter_map(move |&index| self.units.get(index).map(|unit| (UnitId(index), unit)))
    }

    /// All units with their ids, in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = (UnitId, &TranslationUnit)> {
        self.units.iter().enumerate().map(|(index, unit)| (UnitId(index), unit))
    }

    #[must_use]
    pub fn get(&self, id: UnitId) -> Option<&TranslationUnit> {
        self.units.get(id.index())
    }

    #[must_use]
    pub fn units(&self) -> &[TranslationUnit] {
        &self.units
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.units.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Distinct origin languages present in the corpus, sorted.
    #[must_use]
    pub fn origin_languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.by_origin_language.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Number of units per translation language.
    ///
    /// Ordered by count (descending), then by language code.
    #[must_use]
    pub fn translation_language_counts(&self) -> Vec<(String, usize)> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for unit in &self.units {
            *counts.entry(unit.translation_language.as_str()).or_default() += 1;
        }

        let mut counts: Vec<(String, usize)> =
            counts.into_iter().map(|(language, count)| (language.to_string(), count)).collect();
        counts.sort_by(|(a_lang, a_count), (b_lang, b_count)| {
            b_count.cmp(a_count).then_with(|| a_lang.cmp(b_lang))
        });
        counts
    }
}

impl FromIterator<TranslationUnit> for Corpus {
    fn from_iter<T: IntoIterator<Item = TranslationUnit>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
