//! Error types for term statistics computation.

use thiserror::Error;

/// Errors raised while building term statistics
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A document produced no terms after tokenization and filtering.
    /// Only raised with `EmptyDocumentPolicy::Reject`.
    #[error("document {index} has no terms after tokenization")]
    EmptyDocument { index: usize },

    /// No stop-word list exists for the requested language code
    #[error("language not supported: {0}")]
    LanguageNotSupported(String),

    /// A term reached IDF computation without an accumulator entry.
    /// IDF was requested before every document went through TF counting.
    #[error("no corpus statistics for term {0:?}; compute TF for every document first")]
    MissingTermStat(String),

    /// The corpus size given for IDF is smaller than the number of
    /// documents already counted for a term
    #[error("term {term:?} counted in {doc_freq} documents but the corpus has {doc_num}")]
    DocCountMismatch { term: String, doc_num: u64, doc_freq: u64 },

    /// TF-IDF was already computed for this document
    #[error("document already has TF-IDF values")]
    AlreadyCombined,

    /// n-gram size must be at least 1
    #[error("invalid n-gram size: {0}")]
    InvalidNgram(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
