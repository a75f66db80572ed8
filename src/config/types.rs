use std::collections::HashSet;

use serde::{
    Deserialize,
    Serialize,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Configuration error in '{field_path}': {message}")]
pub struct ValidationError {
    /// JSON path to the field (e.g., "originLanguages[0]")
    pub field_path: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field_path: impl Into<String>, message: impl Into<String>) -> Self {
        Self { field_path: field_path.into(), message: message.into() }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration validation failed:\n{}", format_validation_errors(.0))]
    ValidationErrors(Vec<ValidationError>),

    #[error("Failed to load configuration file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// One numbered line per error
fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .enumerate()
        .map(|(i, err)| format!("  {}. {} - {}", i + 1, err.field_path, err.message))
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewerSettings {
    /// Languages a query can be made in. Closed set: other origin languages in the
    /// corpus are never searched.
    pub origin_languages: Vec<String>,

    /// Translation languages known to the presentation layer (legend and colors).
    pub translation_languages: Vec<String>,
}

impl ViewerSettings {
    #[must_use]
    pub fn is_origin_language(&self, lang: &str) -> bool {
        self.origin_languages.iter().any(|l| l == lang)
    }

    /// # Errors
    /// - Empty language list
    /// - Empty language code
    /// - Duplicated language code
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        validate_languages("originLanguages", &self.origin_languages, &mut errors);
        validate_languages("translationLanguages", &self.translation_languages, &mut errors);

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}

/// Checks a language list: not empty, no blank codes, no duplicates.
fn validate_languages(field: &str, languages: &[String], errors: &mut Vec<ValidationError>) {
    if languages.is_empty() {
        errors.push(ValidationError::new(
            field,
            "At least one language is required. Example: [\"de\", \"en\"]",
        ));
        return;
    }

    let mut seen = HashSet::new();
    for (index, language) in languages.iter().enumerate() {
        if language.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("{field}[{index}]"),
                "The language code cannot be empty",
            ));
        } else if !seen.insert(language.as_str()) {
            errors.push(ValidationError::new(
                format!("{field}[{index}]"),
                format!("Duplicate language code '{language}'"),
            ));
        }
    }
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            origin_languages: vec!["de".to_string(), "en".to_string()],
            translation_languages: ["de", "en", "ti-ET", "pl", "tr"]
                .iter()
                .map(|lang| (*lang).to_string())
                .collect(),
        }
    }
}
