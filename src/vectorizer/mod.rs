pub mod corpus;
pub mod ngram;
pub mod term;
pub mod tfidf;

use std::cmp::Ordering;
use std::marker::PhantomData;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::config::{EmptyDocumentPolicy, TfIdfConfig};
use crate::error::{Error, Result};
use crate::text::{tokenize, TextOptions};
use crate::utils::float::StatNum;
use crate::vectorizer::{
    corpus::{CorpusStats, TermStat},
    ngram::into_terms,
    term::DocumentTf,
    tfidf::{combine, DefaultTfIdfEngine, TfIdfEngine},
};

/// Outcome of a corpus run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusResult<N = f64>
where
    N: StatNum,
{
    /// one entry per input document, in input order
    pub documents: Vec<DocumentTf<N>>,
    pub number_of_docs: u64,
    pub stats: CorpusStats<N>,
}

impl<N> CorpusResult<N>
where
    N: StatNum,
{
    #[inline]
    pub fn stat(&self, term: &str) -> Option<&TermStat<N>> {
        self.stats.get(term)
    }

    /// The `k` terms of a document with the highest TF-IDF, best first.
    /// Ties keep first-occurrence order.
    pub fn top_terms(&self, doc_index: usize, k: usize) -> Vec<(&str, N)> {
        let Some(doc) = self.documents.get(doc_index) else {
            return Vec::new();
        };
        let mut terms: Vec<(&str, N)> = doc
            .tf_idf
            .iter()
            .map(|(term, &w)| (term.as_str(), w))
            .collect();
        terms.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
        terms.truncate(k);
        terms
    }
}

/// Corpus TF-IDF analyzer
///
/// Runs text through tokenization, optional stop-word removal and n-gram
/// building, then computes per-document TF, TF-IDF and per-term aggregates.
///
/// `TfIdfAnalyzer<N, E>` has the following generic parameters:
/// - `N`: float type of the statistics (f32, f64)
/// - `E`: TF/IDF formulas (e.g. `DefaultTfIdfEngine`)
///
/// Each `run` owns its own accumulator, so one analyzer can serve several
/// corpora, concurrently or not.
#[derive(Debug, Clone)]
pub struct TfIdfAnalyzer<N = f64, E = DefaultTfIdfEngine>
where
    N: StatNum,
    E: TfIdfEngine<N>,
{
    config: TfIdfConfig,
    options: TextOptions,
    _marker: PhantomData<fn() -> (N, E)>,
}

impl<N, E> TfIdfAnalyzer<N, E>
where
    N: StatNum,
    E: TfIdfEngine<N>,
{
    /// Create an analyzer, validating the configuration
    ///
    /// # Errors
    /// `InvalidNgram` or `LanguageNotSupported`
    pub fn new(config: TfIdfConfig) -> Result<Self> {
        let options = config.validate()?;
        Ok(Self {
            config,
            options,
            _marker: PhantomData,
        })
    }

    pub fn config(&self) -> &TfIdfConfig {
        &self.config
    }

    /// Terms of one document: tokens, or n-grams when `ngram > 1`
    pub fn terms(&self, text: &str) -> Vec<String> {
        into_terms(tokenize(text, &self.options), self.config.ngram)
    }

    /// Compute TF, TF-IDF and aggregate statistics for a corpus
    ///
    /// Pass 1 counts every document and records TF values,
    /// pass 2 computes IDF from the complete document counts.
    ///
    /// # Errors
    /// `EmptyDocument` when a document has no terms and the policy is `Reject`
    pub fn run<T>(&self, documents: &[T]) -> Result<CorpusResult<N>>
    where
        T: AsRef<str> + Sync,
    {
        let doc_num = documents.len() as u64;
        debug!(documents = documents.len(), ngram = self.config.ngram, "Computing term frequencies");

        // tokenization has no shared state; folding below stays in input order
        let term_lists: Vec<Vec<String>> = documents
            .par_iter()
            .map(|doc| self.terms(doc.as_ref()))
            .collect();

        let mut stats = CorpusStats::new();
        let mut tfs = Vec::with_capacity(term_lists.len());
        for (index, terms) in term_lists.iter().enumerate() {
            if terms.is_empty() {
                match self.config.empty_document {
                    EmptyDocumentPolicy::Reject => return Err(Error::EmptyDocument { index }),
                    EmptyDocumentPolicy::Keep => {
                        warn!(index, "Document has no terms, keeping an empty frequency table")
                    }
                }
            }
            let doc = DocumentTf::from_terms_with::<E, _>(terms);
            stats.record_document(&doc);
            trace!(index, terms = doc.term_num(), max = doc.max, "Document counted");
            tfs.push(doc);
        }

        debug!(terms = stats.len(), "Computing TF-IDF");
        let documents = tfs
            .into_iter()
            .map(|doc| combine::<N, E>(doc, doc_num, &mut stats))
            .collect::<Result<Vec<_>>>()?;

        stats.finalize();

        Ok(CorpusResult {
            documents,
            number_of_docs: doc_num,
            stats,
        })
    }
}

/// Term frequencies of a token sequence
///
/// # Arguments
/// * `tokens` - document tokens, in order
/// * `n` - n-gram cardinality, `None` or `<= 1` counts the tokens themselves
/// * `stats` - accumulator receiving this document's TF values, if any
pub fn get_tf<T>(tokens: &[T], n: Option<usize>, stats: Option<&mut CorpusStats<f64>>) -> DocumentTf<f64>
where
    T: AsRef<str>,
{
    let doc = match n {
        Some(n) if n > 1 => DocumentTf::from_terms(&ngram::get_ngrams(tokens, n)),
        _ => DocumentTf::from_terms(tokens),
    };
    if let Some(stats) = stats {
        stats.record_document(&doc);
    }
    doc
}

/// TF-IDF of every term in several documents, with the default engine and `f64`
///
/// # Arguments
/// * `documents` - texts or HTML fragments
/// * `n` - n-gram cardinality, `None` means 1
/// * `with_stop_words` - keep stop words; when false they are removed
/// * `language` - stop-word language code, only read when filtering
pub fn get_tf_idfs<T>(documents: &[T], n: Option<usize>, with_stop_words: bool, language: &str) -> Result<CorpusResult>
where
    T: AsRef<str> + Sync,
{
    let mut config = TfIdfConfig::default().with_ngram(n.unwrap_or(1).max(1));
    config.with_stop_words = with_stop_words;
    config.language = language.to_string();
    TfIdfAnalyzer::<f64>::new(config)?.run(documents)
}
