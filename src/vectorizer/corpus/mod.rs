use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::utils::float::{avg_of, max_of, min_of, StatNum};
use crate::vectorizer::term::DocumentTf;

/// Statistics of one term across the documents of a corpus
///
/// Lists hold one entry per document containing the term, in document order.
/// The min/max/avg fields are zero until `CorpusStats::finalize` runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermStat<N = f64>
where
    N: StatNum,
{
    /// number of documents containing the term
    pub doc_num: u64,
    pub tfs: Vec<N>,
    pub tf_sum: N,
    pub idfs: Vec<N>,
    pub idf_sum: N,
    pub tf_idfs: Vec<N>,
    pub tf_idf_sum: N,

    pub tf_min: N,
    pub tf_max: N,
    pub tf_avg: N,
    pub idf_min: N,
    pub idf_max: N,
    pub idf_avg: N,
    pub tf_idf_min: N,
    pub tf_idf_max: N,
    pub tf_idf_avg: N,
}

impl<N> TermStat<N>
where
    N: StatNum,
{
    /// Stat of a term seen for the first time
    fn new(tf: N) -> Self {
        Self {
            doc_num: 1,
            tfs: vec![tf],
            tf_sum: tf,
            idfs: Vec::new(),
            idf_sum: N::zero(),
            tf_idfs: Vec::new(),
            tf_idf_sum: N::zero(),
            tf_min: N::zero(),
            tf_max: N::zero(),
            tf_avg: N::zero(),
            idf_min: N::zero(),
            idf_max: N::zero(),
            idf_avg: N::zero(),
            tf_idf_min: N::zero(),
            tf_idf_max: N::zero(),
            tf_idf_avg: N::zero(),
        }
    }

    fn summarize(&mut self) {
        self.tf_min = min_of(&self.tfs);
        self.tf_max = max_of(&self.tfs);
        self.tf_avg = avg_of(self.tf_sum, self.doc_num);

        self.idf_min = min_of(&self.idfs);
        self.idf_max = max_of(&self.idfs);
        self.idf_avg = avg_of(self.idf_sum, self.doc_num);

        self.tf_idf_min = min_of(&self.tf_idfs);
        self.tf_idf_max = max_of(&self.tf_idfs);
        self.tf_idf_avg = avg_of(self.tf_idf_sum, self.doc_num);
    }
}

/// Per-term accumulator of one corpus pass
///
/// Built fresh for every run and never shared between runs.
/// TF values must be recorded for every document before any IDF is recorded,
/// and `finalize` is called once after the last document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorpusStats<N = f64>
where
    N: StatNum,
{
    terms: IndexMap<String, TermStat<N>>,
}

impl<N> Default for CorpusStats<N>
where
    N: StatNum,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N> CorpusStats<N>
where
    N: StatNum,
{
    pub fn new() -> Self {
        Self {
            terms: IndexMap::new(),
        }
    }

    /// Record the TF of a term in one more document
    pub fn record_tf(&mut self, term: &str, tf: N) {
        match self.terms.get_mut(term) {
            Some(stat) => {
                stat.doc_num += 1;
                stat.tfs.push(tf);
                stat.tf_sum = stat.tf_sum + tf;
            }
            None => {
                self.terms.insert(term.to_string(), TermStat::new(tf));
            }
        }
    }

    /// Record every TF of a document
    pub fn record_document(&mut self, doc: &DocumentTf<N>) {
        for (term, &tf) in doc.tfs.iter() {
            self.record_tf(term, tf);
        }
    }

    /// Record the IDF and TF-IDF of a term for one document
    ///
    /// # Errors
    /// `MissingTermStat` when no TF was recorded for the term
    pub fn record_idf(&mut self, term: &str, idf: N, tf_idf: N) -> Result<()> {
        let stat = self
            .terms
            .get_mut(term)
            .ok_or_else(|| Error::MissingTermStat(term.to_string()))?;
        stat.idfs.push(idf);
        stat.idf_sum = stat.idf_sum + idf;
        stat.tf_idfs.push(tf_idf);
        stat.tf_idf_sum = stat.tf_idf_sum + tf_idf;
        Ok(())
    }

    /// Compute min/max/avg of every term.
    /// Calling it again recomputes the same values.
    pub fn finalize(&mut self) {
        for stat in self.terms.values_mut() {
            stat.summarize();
        }
        debug!(terms = self.terms.len(), "Corpus statistics finalized");
    }

    /// Number of documents containing the term, 0 when unknown
    #[inline]
    pub fn doc_num(&self, term: &str) -> u64 {
        self.terms.get(term).map_or(0, |stat| stat.doc_num)
    }

    #[inline]
    pub fn get(&self, term: &str) -> Option<&TermStat<N>> {
        self.terms.get(term)
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Number of distinct terms
    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Terms in first-seen order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TermStat<N>)> {
        self.terms.iter().map(|(term, stat)| (term.as_str(), stat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_record_creates_stat() {
        let mut stats: CorpusStats = CorpusStats::new();
        stats.record_tf("word", 0.5);
        let stat = stats.get("word").unwrap();
        assert_eq!(stat.doc_num, 1);
        assert_eq!(stat.tfs, vec![0.5]);
        assert_eq!(stat.tf_sum, 0.5);
        assert!(stat.idfs.is_empty());
        assert!(stat.tf_idfs.is_empty());
    }

    #[test]
    fn later_records_mutate_in_order() {
        let mut stats: CorpusStats = CorpusStats::new();
        stats.record_tf("word", 0.5);
        stats.record_tf("word", 1.0);
        stats.record_tf("word", 0.25);
        let stat = stats.get("word").unwrap();
        assert_eq!(stat.doc_num, 3);
        assert_eq!(stat.tfs, vec![0.5, 1.0, 0.25]);
        assert_eq!(stat.tf_sum, 1.75);
        assert_eq!(stats.len(), 1);
    }

    #[test]
    fn record_document_folds_every_term() {
        let mut stats: CorpusStats = CorpusStats::new();
        stats.record_document(&DocumentTf::from_terms(&["a", "a", "b"]));
        stats.record_document(&DocumentTf::from_terms(&["b", "c"]));
        assert_eq!(stats.doc_num("a"), 1);
        assert_eq!(stats.doc_num("b"), 2);
        assert_eq!(stats.doc_num("c"), 1);
        assert_eq!(stats.doc_num("d"), 0);
        assert_eq!(stats.get("b").unwrap().tfs, vec![0.5, 1.0]);
    }

    #[test]
    fn idf_for_unknown_term_is_missing() {
        let mut stats: CorpusStats = CorpusStats::new();
        assert_eq!(
            stats.record_idf("ghost", 1.0, 1.0),
            Err(Error::MissingTermStat("ghost".to_string()))
        );
    }

    #[test]
    fn finalize_computes_min_max_avg() {
        let mut stats: CorpusStats = CorpusStats::new();
        stats.record_tf("t", 1.0);
        stats.record_tf("t", 0.5);
        stats.record_idf("t", 1.0, 1.0).unwrap();
        stats.record_idf("t", 1.0, 0.5).unwrap();
        stats.finalize();

        let stat = stats.get("t").unwrap();
        assert_eq!(stat.tf_min, 0.5);
        assert_eq!(stat.tf_max, 1.0);
        assert_eq!(stat.tf_avg, 0.75);
        assert_eq!(stat.idf_min, 1.0);
        assert_eq!(stat.idf_max, 1.0);
        assert_eq!(stat.idf_avg, 1.0);
        assert_eq!(stat.tf_idf_min, 0.5);
        assert_eq!(stat.tf_idf_max, 1.0);
        assert_eq!(stat.tf_idf_avg, 0.75);

        let before = stats.clone();
        stats.finalize();
        assert_eq!(stats, before);
    }
}
