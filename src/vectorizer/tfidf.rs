use crate::error::{Error, Result};
use crate::utils::float::StatNum;
use crate::vectorizer::{corpus::CorpusStats, term::DocumentTf};

/// TF and IDF formulas used by the analyzer
pub trait TfIdfEngine<N>
where
    N: StatNum,
{
    /// TF of a term
    /// # Arguments
    /// * `count` - occurrences of the term in the document
    /// * `max_count` - occurrences of the most frequent term of the document
    fn tf(count: u64, max_count: u64) -> N;

    /// IDF of a term
    /// # Arguments
    /// * `doc_num` - documents in the corpus
    /// * `doc_freq` - documents containing the term
    fn idf(doc_num: u64, doc_freq: u64) -> N;
}

/// Default engine
/// - `tf = count / max_count`
/// - `idf = ln(doc_num / doc_freq) + 1`
///
/// The `+ 1` keeps a term found in every document at weight 1 instead of 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTfIdfEngine;

impl<N> TfIdfEngine<N> for DefaultTfIdfEngine
where
    N: StatNum,
{
    #[inline]
    fn tf(count: u64, max_count: u64) -> N {
        if max_count == 0 {
            return N::zero();
        }
        N::from_count(count) / N::from_count(max_count)
    }

    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> N {
        if doc_freq == 0 {
            return N::zero();
        }
        (N::from_count(doc_num) / N::from_count(doc_freq)).ln() + N::one()
    }
}

/// Compute the TF-IDF of every term of a document and fold the IDF and
/// TF-IDF values into `stats`.
///
/// Every term of `doc` must already have its TF recorded in `stats`,
/// for all documents of the corpus. Call it once per document.
/// All terms are checked before anything is recorded.
///
/// # Errors
/// - `AlreadyCombined` when `doc` already carries TF-IDF values
/// - `MissingTermStat` for the first term without statistics
/// - `DocCountMismatch` when `doc_num` is below a term's document count
pub fn combine<N, E>(mut doc: DocumentTf<N>, doc_num: u64, stats: &mut CorpusStats<N>) -> Result<DocumentTf<N>>
where
    N: StatNum,
    E: TfIdfEngine<N>,
{
    if !doc.tf_idf.is_empty() {
        return Err(Error::AlreadyCombined);
    }
    let weights = doc
        .tfs
        .iter()
        .map(|(term, &tf)| {
            let doc_freq = stats.doc_num(term);
            if doc_freq == 0 {
                return Err(Error::MissingTermStat(term.clone()));
            }
            if doc_num < doc_freq {
                return Err(Error::DocCountMismatch {
                    term: term.clone(),
                    doc_num,
                    doc_freq,
                });
            }
            let idf = E::idf(doc_num, doc_freq);
            Ok((term.clone(), idf, tf * idf))
        })
        .collect::<Result<Vec<(String, N, N)>>>()?;

    for (term, idf, tf_idf) in weights {
        stats.record_idf(&term, idf, tf_idf)?;
        doc.tf_idf.insert(term, tf_idf);
    }
    Ok(doc)
}
