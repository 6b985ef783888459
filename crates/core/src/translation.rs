//! Outcome translation lookup.
//!
//! Free text is first reduced to an outcome category with [`TRANSLATION_RULES`], a smaller
//! keyword set than the report outcome classifier uses. The category is then looked up for the
//! requested language. Unregistered languages echo the input text back unchanged.

use crate::lexicon::{first_substring_match, TRANSLATIONS, TRANSLATION_RULES};
use crate::report::Outcome;
use serde::{Deserialize, Serialize};

/// Result of a translation lookup. Never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub original_text: String,
    pub language_code: String,
    pub translation: String,
}

/// Reduces `text` to an outcome category for translation purposes.
///
/// Keyword hits take precedence; otherwise text that is literally a category name
/// (ignoring case and surrounding whitespace) maps to that category.
pub fn detect_category(text: &str) -> Outcome {
    let lowered = text.to_lowercase();
    if let Some(category) = first_substring_match(TRANSLATION_RULES, &lowered) {
        return category;
    }

    match lowered.trim() {
        "recovered" => Outcome::Recovered,
        "ongoing" => Outcome::Ongoing,
        "fatal" => Outcome::Fatal,
        _ => Outcome::Unknown,
    }
}

/// Looks up the localised label for `category` in `language_code`.
pub fn lookup(language_code: &str, category: Outcome) -> Option<&'static str> {
    TRANSLATIONS
        .iter()
        .find(|(lang, _)| *lang == language_code)
        .and_then(|(_, entries)| entries.iter().find(|(o, _)| *o == category))
        .map(|(_, label)| *label)
}

/// Translates `text` into `language_code`.
///
/// The language code is matched case-insensitively and reported back lowercased. When the
/// language is not registered the translation is `text` itself.
pub fn translate(text: &str, language_code: &str) -> TranslationResult {
    let language_code = language_code.to_lowercase();
    let category = detect_category(text);
    let translation = match lookup(&language_code, category) {
        Some(label) => label.to_string(),
        None => {
            tracing::debug!(lang = %language_code, "no translation registered, echoing input");
            text.to_string()
        }
    };

    TranslationResult {
        original_text: text.to_string(),
        language_code,
        translation,
    }
}
