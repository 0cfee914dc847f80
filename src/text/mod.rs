//! Text preparation: markup cleanup, sentence splitting and tokenization.
//!
//! Everything here is stateless. The statistics engine only consumes the
//! token sequences produced by [`tokenize`] / [`get_words`].

pub mod diacritics;
pub mod stopwords;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use stopwords::Language;

pub use diacritics::remove_diacritics;

const WORD_SEPARATOR: &str = " ";

static NBSP: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)&nbsp;").expect("valid regex"));
static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Tokenizer options resolved from `TfIdfConfig`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextOptions {
    /// Stop-word language to filter with, `None` keeps every token
    pub stop_words: Option<Language>,
    /// Drop tokens made only of ASCII digits
    pub skip_numeric: bool,
}

/// Replace line breaks, tabs, `&nbsp;` and HTML tags by spaces,
/// then collapse whitespace runs.
pub fn normalize(raw: &str) -> String {
    let text = NBSP.replace_all(raw, WORD_SEPARATOR);
    let text = HTML_TAG.replace_all(&text, WORD_SEPARATOR);
    SPACES.replace_all(&text, WORD_SEPARATOR).trim().to_string()
}

/// Split a text into sentence-like segments on `.`, `!` and `?`.
/// The separators are consumed and empty segments dropped.
///
/// # Examples
/// ```
/// use tf_idf_stats::text::get_statements;
/// assert_eq!(get_statements("A. B! C?"), vec!["A", "B", "C"]);
/// ```
pub fn get_statements(text: &str) -> Vec<String> {
    normalize(text)
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[inline]
fn is_special(c: char) -> bool {
    matches!(
        c,
        '|' | '&' | '’' | '«' | '»' | '\'' | '"' | '/' | '(' | ')' | '!' | '?' | '\\' | '-'
    )
}

#[inline]
fn is_word_punct(c: char) -> bool {
    matches!(
        c,
        '\'' | '’' | '«' | '»' | '"' | ';' | ':' | ',' | '.' | '/' | '(' | ')' | '!' | '?' | '\\' | '-'
    )
}

/// Keep only cased letters and whitespace.
/// Separator-like punctuation becomes a space, everything else
/// (digits, symbols, other punctuation) is dropped.
pub fn remove_specials(text: &str) -> String {
    let cleaned: String = normalize(text)
        .chars()
        .map(|c| if is_special(c) { ' ' } else { c })
        .filter(|c| c.is_whitespace() || c.is_lowercase() || c.is_uppercase())
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(WORD_SEPARATOR)
}

/// Split a text into lowercase tokens according to `options`.
pub fn tokenize(text: &str, options: &TextOptions) -> Vec<String> {
    let cleaned: String = normalize(text)
        .chars()
        .map(|c| if is_word_punct(c) { ' ' } else { c })
        .collect();
    let stop_words = options.stop_words.map(Language::stop_words);

    cleaned
        .to_lowercase()
        .split_whitespace()
        .filter(|word| !(options.skip_numeric && word.bytes().all(|b| b.is_ascii_digit())))
        .filter(|word| match stop_words {
            Some(set) => !set.contains(remove_diacritics(word).as_str()),
            None => true,
        })
        .map(str::to_string)
        .collect()
}

/// Get all words of a text or HTML fragment.
///
/// # Arguments
/// * `with_stop_words` - keep stop words; when false they are removed
/// * `language` - stop-word language code, only read when filtering
pub fn get_words(text: &str, with_stop_words: bool, language: &str) -> Result<Vec<String>> {
    let options = TextOptions {
        stop_words: if with_stop_words { None } else { Some(language.parse()?) },
        skip_numeric: false,
    };
    Ok(tokenize(text, &options))
}
