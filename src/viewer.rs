//! Entry points used by the presentation layer.

use std::path::Path;
use std::sync::Arc;

use serde::Serialize;

use crate::config::{
    ConfigError,
    ViewerSettings,
};
use crate::corpus::Corpus;
use crate::lookup::{
    TranslationContext,
    context_of,
    lookup_context,
};
use crate::matcher::find_matches;
use crate::types::UnitId;

/// One bar of the similarity chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentScore {
    pub id: UnitId,
    pub segment: String,
    pub score: f64,
}

/// Hover details of a matched segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextDetail {
    pub id: UnitId,
    pub language: String,
    pub translation: Option<String>,
    pub context_before: Option<String>,
    pub context_after: Option<String>,
}

impl From<TranslationContext<'_>> for ContextDetail {
    fn from(context: TranslationContext<'_>) -> Self {
        Self {
            id: context.id,
            language: context.translation_language.to_string(),
            translation: context.translation_segment.map(str::to_string),
            context_before: context.origin_context_pre.map(str::to_string),
            context_after: context.origin_context_post.map(str::to_string),
        }
    }
}

/// A loaded translation memory together with its settings.
///
/// Cheap to clone; clones share the same corpus.
#[derive(Debug, Clone)]
pub struct TranslationMemory {
    /// Shared, read-only corpus
    corpus: Arc<Corpus>,
    /// Validated settings
    settings: ViewerSettings,
}

impl TranslationMemory {
    /// Pairs `corpus` with the settings of `workspace_root`.
    ///
    /// See [`ViewerSettings::load`] for how the settings are found.
    ///
    /// # Errors
    /// The settings file cannot be read, parsed or validated.
    pub fn from_workspace(
        corpus: Arc<Corpus>,
        workspace_root: Option<&Path>,
    ) -> Result<Self, ConfigError> {
        Ok(Self::new(corpus, ViewerSettings::load(workspace_root)?))
    }

    /// `settings` are expected to be valid.
    #[must_use]
    pub fn new(corpus: Arc<Corpus>, settings: ViewerSettings) -> Self {
        let unsearchable = corpus
            .origin_languages()
            .into_iter()
            .filter(|lang| !settings.is_origin_language(lang))
            .collect::<Vec<_>>();
        if !unsearchable.is_empty() {
            tracing::warn!(
                "Corpus contains origin languages that are not configured and will not be searched: {:?}",
                unsearchable
            );
        }

        Self { corpus, settings }
    }

    /// Segments of `origin_language` similar to `query`, in corpus order.
    ///
    /// Missing input, a language outside the configured origin languages, or a query
    /// without close segments all yield an empty list.
    #[must_use]
    pub fn search(&self, origin_language: Option<&str>, query: Option<&str>) -> Vec<SegmentScore> {
        let lang = origin_language.filter(|lang| self.settings.is_origin_language(lang));
        if lang.is_none() && origin_language.is_some() {
            tracing::debug!("Origin language {:?} is not configured", origin_language);
        }

        find_matches(&self.corpus, lang, query)
            .into_iter()
            .map(|m| SegmentScore { id: m.id, segment: m.segment().to_string(), score: m.score })
            .collect()
    }

    /// Translation and context of the first unit whose origin segment is `origin_segment`.
    #[must_use]
    pub fn lookup_context(&self, origin_segment: &str) -> Option<ContextDetail> {
        lookup_context(&self.corpus, origin_segment).map(ContextDetail::from)
    }

    /// Translation and context of a unit returned by [`Self::search`].
    #[must_use]
    pub fn lookup_context_by_id(&self, id: UnitId) -> Option<ContextDetail> {
        context_of(&self.corpus, id).map(ContextDetail::from)
    }

    #[must_use]
    pub fn origin_languages(&self) -> &[String] {
        &self.settings.origin_languages
    }

    #[must_use]
    pub fn translation_languages(&self) -> &[String] {
        &self.settings.translation_languages
    }

    /// Units per translation language, most frequent first.
    #[must_use]
    pub fn translation_language_counts(&self) -> Vec<(String, usize)> {
        self.corpus.translation_language_counts()
    }

    #[must_use]
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }
}
