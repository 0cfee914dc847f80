//! Configuration for a corpus TF-IDF run.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::text::stopwords::Language;
use crate::text::TextOptions;

/// What to do with a document that has no terms left after tokenization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmptyDocumentPolicy {
    /// Keep it as an empty `DocumentTf` (max 0, no terms)
    #[default]
    Keep,
    /// Fail the run with `Error::EmptyDocument`
    Reject,
}

/// Options for `TfIdfAnalyzer`
///
/// Every field has a default, so a partial document deserializes fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfIdfConfig {
    /// n-gram cardinality, 1 means plain tokens
    #[serde(default = "default_ngram")]
    pub ngram: usize,

    /// Keep stop words in the token stream.
    /// When false, tokens in the stop-word list of `language` are dropped.
    #[serde(default = "default_with_stop_words")]
    pub with_stop_words: bool,

    /// Stop-word language code ("en", "fr")
    #[serde(default = "default_language")]
    pub language: String,

    /// Drop tokens made only of digits
    #[serde(default)]
    pub skip_numeric: bool,

    #[serde(default)]
    pub empty_document: EmptyDocumentPolicy,
}

fn default_ngram() -> usize {
    1
}

fn default_with_stop_words() -> bool {
    true
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for TfIdfConfig {
    fn default() -> Self {
        Self {
            ngram: default_ngram(),
            with_stop_words: default_with_stop_words(),
            language: default_language(),
            skip_numeric: false,
            empty_document: EmptyDocumentPolicy::default(),
        }
    }
}

impl TfIdfConfig {
    /// Set the n-gram cardinality.
    pub fn with_ngram(mut self, n: usize) -> Self {
        self.ngram = n;
        self
    }

    /// Remove stop words of the given language.
    pub fn without_stop_words(mut self, language: impl Into<String>) -> Self {
        self.with_stop_words = false;
        self.language = language.into();
        self
    }

    pub fn with_skip_numeric(mut self, skip: bool) -> Self {
        self.skip_numeric = skip;
        self
    }

    pub fn with_empty_document(mut self, policy: EmptyDocumentPolicy) -> Self {
        self.empty_document = policy;
        self
    }

    /// Check the options and resolve them into tokenizer options.
    /// The language is only looked up when stop words are filtered.
    pub fn validate(&self) -> Result<TextOptions> {
        if self.ngram == 0 {
            return Err(Error::InvalidNgram(self.ngram));
        }
        let stop_words = if self.with_stop_words {
            None
        } else {
            Some(self.language.parse::<Language>()?)
        };
        Ok(TextOptions {
            stop_words,
            skip_numeric: self.skip_numeric,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TfIdfConfig::default();
        assert_eq!(config.ngram, 1);
        assert!(config.with_stop_words);
        assert_eq!(config.language, "en");
        assert!(!config.skip_numeric);
        assert_eq!(config.empty_document, EmptyDocumentPolicy::Keep);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: TfIdfConfig =
            serde_json::from_str(r#"{"ngram": 2, "empty_document": "reject"}"#).unwrap();
        assert_eq!(config.ngram, 2);
        assert!(config.with_stop_words);
        assert_eq!(config.empty_document, EmptyDocumentPolicy::Reject);
    }

    #[test]
    fn test_validate_rejects_zero_ngram() {
        let config = TfIdfConfig::default().with_ngram(0);
        assert_eq!(config.validate().unwrap_err(), Error::InvalidNgram(0));
    }

    #[test]
    fn test_validate_resolves_language_only_when_filtering() {
        let mut config = TfIdfConfig::default();
        config.language = "xx".to_string();
        assert!(config.validate().unwrap().stop_words.is_none());

        let config = TfIdfConfig::default().without_stop_words("xx");
        assert_eq!(
            config.validate().unwrap_err(),
            Error::LanguageNotSupported("xx".to_string())
        );

        let options = TfIdfConfig::default().without_stop_words("fr").validate().unwrap();
        assert_eq!(options.stop_words, Some(Language::Fr));
    }
}
