const GRAM_SEPARATOR: &str = " ";

/// Build the n-grams of an ordered token sequence
///
/// Windows overlap and nothing is deduplicated, so `L` tokens give
/// `max(0, L - n + 1)` n-grams. `n` below 1 is treated as 1.
///
/// # Examples
/// ```
/// use tf_idf_stats::get_ngrams;
/// assert_eq!(get_ngrams(&["a", "b", "c", "d"], 2), vec!["a b", "b c", "c d"]);
/// ```
pub fn get_ngrams<T>(tokens: &[T], n: usize) -> Vec<String>
where
    T: AsRef<str>,
{
    tokens
        .windows(n.max(1))
        .map(|window| {
            window
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<&str>>()
                .join(GRAM_SEPARATOR)
        })
        .collect()
}

/// Terms to count for a token sequence: the tokens themselves when `n <= 1`,
/// their n-grams otherwise.
pub(crate) fn into_terms(tokens: Vec<String>, n: usize) -> Vec<String> {
    if n > 1 {
        get_ngrams(&tokens, n)
    } else {
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::get_words;

    #[test]
    fn bigrams_overlap() {
        assert_eq!(get_ngrams(&["a", "b", "c", "d"], 2), vec!["a b", "b c", "c d"]);
    }

    #[test]
    fn count_is_len_minus_n_plus_one() {
        let tokens = ["a", "b", "c", "d", "e"];
        for n in 1..=7 {
            let expected = (tokens.len() + 1).saturating_sub(n);
            assert_eq!(get_ngrams(&tokens, n).len(), expected, "n={n}");
        }
        let empty: [&str; 0] = [];
        assert!(get_ngrams(&empty, 1).is_empty());
    }

    #[test]
    fn unigrams_reproduce_words() {
        let words = get_words("word1 word2 word3 word4. le la sur word5", true, "fr").unwrap();
        let grams = get_ngrams(&words, 1);
        assert_eq!(grams, words);
        assert_eq!(grams.len(), 8);
        assert_eq!(grams[3], "word4");

        let grams = get_ngrams(&words, 2);
        assert_eq!(grams.len(), 7);
        assert_eq!(grams[1], "word2 word3");

        let grams = get_ngrams(&words, 3);
        assert_eq!(grams.len(), 6);
        assert_eq!(grams[2], "word3 word4 le");
    }

    #[test]
    fn zero_behaves_like_one() {
        assert_eq!(get_ngrams(&["x", "y"], 0), vec!["x", "y"]);
    }

    #[test]
    fn into_terms_keeps_tokens_for_unigrams() {
        let tokens = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert_eq!(into_terms(tokens.clone(), 1), tokens);
        assert_eq!(into_terms(tokens, 3), vec!["a b c"]);
    }
}
