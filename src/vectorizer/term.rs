use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::utils::float::StatNum;
use crate::vectorizer::tfidf::TfIdfEngine;

/// DocumentTf struct
/// Term statistics of a single document.
///
/// - `count`: occurrences of each term
/// - `tfs`: `count / max` for each term
/// - `max`: occurrences of the most frequent term, 0 for an empty document
/// - `tf_idf`: filled once the whole corpus has been counted
///
/// Maps keep terms in first-occurrence order.
/// An empty document has empty maps, no TF is ever divided by zero.
///
/// # Examples
/// ```
/// use tf_idf_stats::DocumentTf;
/// let doc: DocumentTf = DocumentTf::from_terms(&["word1", "word1", "word2"]);
/// assert_eq!(doc.max, 2);
/// assert_eq!(doc.tf("word2"), Some(0.5));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DocumentTf<N = f64>
where
    N: StatNum,
{
    pub count: IndexMap<String, u64>,
    pub tfs: IndexMap<String, N>,
    pub max: u64,
    #[serde(default)]
    pub tf_idf: IndexMap<String, N>,
}

impl<N> Default for DocumentTf<N>
where
    N: StatNum,
{
    fn default() -> Self {
        Self {
            count: IndexMap::new(),
            tfs: IndexMap::new(),
            max: 0,
            tf_idf: IndexMap::new(),
        }
    }
}

impl<N> DocumentTf<N>
where
    N: StatNum,
{
    /// Count the terms with the default engine
    pub fn from_terms<T>(terms: &[T]) -> Self
    where
        T: AsRef<str>,
    {
        Self::from_terms_with::<crate::DefaultTfIdfEngine, T>(terms)
    }

    /// Count the terms and derive TF with the engine `E`
    pub fn from_terms_with<E, T>(terms: &[T]) -> Self
    where
        E: TfIdfEngine<N>,
        T: AsRef<str>,
    {
        let mut count: IndexMap<String, u64> = IndexMap::new();
        for term in terms {
            *count.entry(term.as_ref().to_string()).or_insert(0) += 1;
        }
        let max = count.values().copied().max().unwrap_or(0);
        let tfs = count
            .iter()
            .map(|(term, &c)| (term.clone(), E::tf(c, max)))
            .collect();

        Self {
            count,
            tfs,
            max,
            tf_idf: IndexMap::new(),
        }
    }
}

impl<N> DocumentTf<N>
where
    N: StatNum,
{
    /// Occurrences of a term, 0 when absent
    #[inline]
    pub fn count(&self, term: &str) -> u64 {
        self.count.get(term).copied().unwrap_or(0)
    }

    #[inline]
    pub fn tf(&self, term: &str) -> Option<N> {
        self.tfs.get(term).copied()
    }

    #[inline]
    pub fn tf_idf(&self, term: &str) -> Option<N> {
        self.tf_idf.get(term).copied()
    }

    /// Number of distinct terms
    #[inline]
    pub fn term_num(&self) -> usize {
        self.count.len()
    }

    /// Number of terms fed in, duplicates included
    #[inline]
    pub fn total_count(&self) -> u64 {
        self.count.values().sum()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count.is_empty()
    }

    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.count.contains_key(term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_and_normalizes_by_max() {
        let doc: DocumentTf = DocumentTf::from_terms(&["word1", "word1", "word2"]);
        assert_eq!(doc.count("word1"), 2);
        assert_eq!(doc.count("word2"), 1);
        assert_eq!(doc.count("word3"), 0);
        assert_eq!(doc.max, 2);
        assert_eq!(doc.tf("word1"), Some(1.0));
        assert_eq!(doc.tf("word2"), Some(0.5));
        assert!(doc.tf_idf.is_empty());
    }

    #[test]
    fn total_count_matches_input_length() {
        let terms = ["a", "b", "a", "c", "a", "b"];
        let doc: DocumentTf<f32> = DocumentTf::from_terms(&terms);
        assert_eq!(doc.total_count(), terms.len() as u64);
        assert_eq!(doc.term_num(), 3);
    }

    #[test]
    fn most_frequent_term_has_tf_one() {
        let terms = ["x", "y", "y", "z", "y", "x"];
        let doc: DocumentTf = DocumentTf::from_terms(&terms);
        assert_eq!(doc.tf("y"), Some(1.0));
        for (_, &tf) in doc.tfs.iter() {
            assert!(tf > 0.0 && tf <= 1.0);
        }
    }

    #[test]
    fn empty_document_has_no_tf() {
        let empty: [&str; 0] = [];
        let doc: DocumentTf = DocumentTf::from_terms(&empty);
        assert!(doc.is_empty());
        assert_eq!(doc.max, 0);
        assert!(doc.tfs.is_empty());
        assert_eq!(doc.total_count(), 0);
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let doc: DocumentTf = DocumentTf::from_terms(&["b", "a", "b", "c"]);
        let order: Vec<&str> = doc.tfs.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["b", "a", "c"]);
    }
}
