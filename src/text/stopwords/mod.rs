//! Static stop-word lists keyed by language code.
//!
//! Lists hold diacritic-free lowercase forms; callers fold a token with
//! `remove_diacritics` before looking it up.

mod en;
mod fr;

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::text::remove_diacritics;

static EN: LazyLock<HashSet<&'static str>> = LazyLock::new(|| en::WORDS.iter().copied().collect());
static FR: LazyLock<HashSet<&'static str>> = LazyLock::new(|| fr::WORDS.iter().copied().collect());

/// Languages with a stop-word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Fr,
}

impl Language {
    /// Short ISO code of the language
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
        }
    }

    /// Stop-word set of the language
    pub fn stop_words(self) -> &'static HashSet<&'static str> {
        match self {
            Language::En => &EN,
            Language::Fr => &FR,
        }
    }

    /// Check a single token against the stop-word set.
    /// Case and diacritics are ignored.
    pub fn is_stop_word(self, token: &str) -> bool {
        self.stop_words()
            .contains(remove_diacritics(&token.to_lowercase()).as_str())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(code: &str) -> Result<Self> {
        if code.eq_ignore_ascii_case("en") {
            Ok(Language::En)
        } else if code.eq_ignore_ascii_case("fr") {
            Ok(Language::Fr)
        } else {
            Err(Error::LanguageNotSupported(code.to_string()))
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Check a token against the stop words of the language given by its code.
pub fn is_stop_word(token: &str, language: &str) -> Result<bool> {
    Ok(language.parse::<Language>()?.is_stop_word(token))
}
