//! Core types used throughout the project.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// Position of a unit in corpus order.
///
/// Stable for the lifetime of a loaded [`Corpus`](crate::corpus::Corpus), so it can be
/// handed to the presentation layer and resolved back without ambiguity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(pub usize);

impl UnitId {
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One aligned (source segment, translation) pair plus its surrounding context.
///
/// Text fields are optional because translation-memory exports routinely carry empty
/// segments. Field aliases accept the column names of the flat XML export
/// (`o_language`, `o_segment`, ...) so loaders can deserialize rows directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationUnit {
    #[serde(alias = "o_language")]
    pub origin_language: String,

    /// Units without an origin segment are never scored.
    #[serde(default, alias = "o_segment")]
    pub origin_segment: Option<String>,

    #[serde(default, alias = "o_context_pre")]
    pub origin_context_pre: Option<String>,

    #[serde(default, alias = "o_context_post")]
    pub origin_context_post: Option<String>,

    #[serde(alias = "t_language")]
    pub translation_language: String,

    #[serde(default, alias = "t_segment")]
    pub translation_segment: Option<String>,
}

impl TranslationUnit {
    /// Creates a unit with the given languages and segments and no context.
    #[must_use]
    pub fn new(
        origin_language: impl Into<String>,
        origin_segment: Option<String>,
        translation_language: impl Into<String>,
        translation_segment: Option<String>,
    ) -> Self {
        Self {
            origin_language: origin_language.into(),
            origin_segment,
            origin_context_pre: None,
            origin_context_post: None,
            translation_language: translation_language.into(),
            translation_segment,
        }
    }

    /// Attaches the text surrounding the origin segment in its source document.
    #[must_use]
    pub fn with_context(mut self, pre: Option<String>, post: Option<String>) -> Self {
        self.origin_context_pre = pre;
        self.origin_context_post = post;
        self
    }

    #[must_use]
    pub fn origin_segment(&self) -> Option<&str> {
        self.origin_segment.as_deref()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn deserialize_export_column_names() {
        let json = r#"{
            "o_language": "de",
            "o_segment": "Guten Morgen",
            "o_context_pre": "Hallo.",
            "o_context_post": null,
            "t_language": "pl",
            "t_segment": "Dzień dobry"
        }"#;

        let unit: TranslationUnit = serde_json::from_str(json).unwrap();

        assert_that!(unit.origin_language, eq("de"));
        assert_that!(unit.origin_segment(), some(eq("Guten Morgen")));
        assert_that!(unit.origin_context_pre, some(eq("Hallo.")));
        assert_that!(unit.origin_context_post, none());
        assert_that!(unit.translation_language, eq("pl"));
        assert_that!(unit.translation_segment, some(eq("Dzień dobry")));
    }

    #[rstest]
    fn deserialize_missing_text_fields_as_none() {
        let json = r#"{"originLanguage": "en", "translationLanguage": "tr"}"#;

        let unit: TranslationUnit = serde_json::from_str(json).unwrap();

        assert_that!(unit.origin_segment, none());
        assert_that!(unit.origin_context_pre, none());
        assert_that!(unit.origin_context_post, none());
        assert_that!(unit.translation_segment, none());
    }

    #[rstest]
    fn with_context_sets_both_sides() {
        let unit = TranslationUnit::new("en", Some("b".to_string()), "de", None)
            .with_context(Some("a".to_string()), Some("c".to_string()));

        assert_that!(unit.origin_context_pre, some(eq("a")));
        assert_that!(unit.origin_context_post, some(eq("c")));
    }

    #[rstest]
    fn unit_id_display() {
        assert_that!(UnitId(3).to_string(), eq("#3"));
        assert_that!(UnitId(3).index(), eq(3));
    }
}
