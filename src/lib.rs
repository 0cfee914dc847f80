//! This crate computes document and corpus level term statistics:
//! raw counts, TF, IDF, TF-IDF and their min/max/avg over a corpus.

pub mod config;
pub mod error;
pub mod text;
pub mod utils;
pub mod vectorizer;

/// TF-IDF Analyzer
/// The top-level struct of this crate.
/// It runs a corpus through tokenization, optional stop-word removal and
/// n-gram building, then computes:
/// - Per-document counts, TF and TF-IDF
/// - Per-term document counts and the TF / IDF / TF-IDF lists, sums,
///   min, max and average across the corpus
///
/// `TfIdfAnalyzer<N, E>` has the following generic parameters:
/// - `N`: Statistics float type (f32, f64)
/// - `E`: TF/IDF calculation engine type (e.g., DefaultTfIdfEngine)
///
/// IDF of a term depends on every document, so a run makes two passes:
/// TF for all documents first, then TF-IDF.
pub use vectorizer::TfIdfAnalyzer;

/// Result of a corpus run
/// Holds the documents in input order, the number of documents and the
/// per-term statistics.
///
/// # Serialization
/// Supported. Term order (first occurrence) is preserved.
pub use vectorizer::CorpusResult;

/// Term frequencies of one document
/// - `count`: occurrences of each term
/// - `tfs`: occurrences divided by the count of the most frequent term
/// - `max`: count of the most frequent term
/// - `tf_idf`: filled by the second pass
pub use vectorizer::term::DocumentTf;

/// Per-term accumulator of one corpus pass, and its entries
/// A fresh accumulator belongs to each run; it is never shared.
pub use vectorizer::corpus::{CorpusStats, TermStat};

/// TF IDF Calculation Engine Trait
/// By implementing this trait, you can plug different TF / IDF formulas
/// into `TfIdfAnalyzer<N, E>`.
/// `DefaultTfIdfEngine` uses `count / max` and the smoothed
/// `ln(docs / docs_with_term) + 1`.
pub use vectorizer::tfidf::{combine, DefaultTfIdfEngine, TfIdfEngine};

pub use config::{EmptyDocumentPolicy, TfIdfConfig};
pub use error::{Error, Result};
pub use text::stopwords::{is_stop_word, Language};
pub use text::{get_statements, get_words, remove_diacritics, remove_specials};
pub use utils::float::StatNum;
pub use vectorizer::ngram::get_ngrams;
pub use vectorizer::{get_tf, get_tf_idfs};
