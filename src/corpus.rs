use crate::error::KgResult;
use crate::geometry::ALPHABET_LEN;
use crate::layouts::letter_index;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Normalizes a raw corpus line the way every evaluator sees it.
pub fn normalize_word(raw: &str) -> Vec<char> {
    raw.to_lowercase().trim().chars().collect()
}

/// Adjacent-letter pair counts aggregated over a word list.
///
/// Cost only depends on how often each ordered letter pair occurs, so the
/// corpus is reduced once to a 26x26 table instead of being rescanned for
/// every layout.
#[derive(Debug, Clone)]
pub struct Corpus {
    pair_counts: Vec<u64>,
    total_pairs: u64,
    words: usize,
    skipped_words: usize,
}

impl Default for Corpus {
    fn default() -> Self {
        Self {
            pair_counts: vec![0; ALPHABET_LEN * ALPHABET_LEN],
            total_pairs: 0,
            words: 0,
            skipped_words: 0,
        }
    }
}

impl Corpus {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut corpus = Self::default();
        for w in words {
            corpus.push_word(w.as_ref());
        }
        corpus
    }

    /// One word per line. Blank and short lines are kept as words that
    /// contribute no pairs.
    pub fn from_text(content: &str) -> Self {
        Self::from_words(content.lines())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> KgResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let corpus = Self::from_text(&content);
        debug!(
            "Loaded corpus {}: {} words, {} letter pairs ({} words too short)",
            path.as_ref().display(),
            corpus.words,
            corpus.total_pairs,
            corpus.skipped_words
        );
        Ok(corpus)
    }

    pub fn push_word(&mut self, raw: &str) {
        self.words += 1;
        let word = normalize_word(raw);
        if word.len() < 2 {
            self.skipped_words += 1;
            return;
        }
        for pair in word.windows(2) {
            if let (Some(a), Some(b)) = (letter_index(pair[0]), letter_index(pair[1])) {
                self.pair_counts[a * ALPHABET_LEN + b] += 1;
                self.total_pairs += 1;
            }
        }
    }

    #[inline(always)]
    pub fn pair_count(&self, a: usize, b: usize) -> u64 {
        self.pair_counts[a * ALPHABET_LEN + b]
    }

    /// Flattened `26 * 26` counts, indexed `first * 26 + second`.
    pub fn pair_counts(&self) -> &[u64] {
        &self.pair_counts
    }

    /// Number of qualifying adjacent letter pairs across the whole corpus.
    pub fn total_pairs(&self) -> u64 {
        self.total_pairs
    }

    pub fn word_count(&self) -> usize {
        self.words
    }

    pub fn skipped_words(&self) -> usize {
        self.skipped_words
    }

    /// True when no layout can be distinguished by this corpus.
    pub fn is_empty(&self) -> bool {
        self.total_pairs == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_pairs_per_segment() {
        let corpus = Corpus::from_words(["abc", "ab"]);
        assert_eq!(corpus.pair_count(0, 1), 2);
        assert_eq!(corpus.pair_count(1, 2), 1);
        assert_eq!(corpus.total_pairs(), 3);
        assert_eq!(corpus.word_count(), 2);
    }

    #[test]
    fn test_normalizes_case_and_whitespace() {
        let corpus = Corpus::from_words(["  AB \t"]);
        assert_eq!(corpus.pair_count(0, 1), 1);
        assert_eq!(corpus.total_pairs(), 1);
    }

    #[test]
    fn test_skips_pairs_touching_non_letters() {
        // "a-b" has no letter pair, "don't" keeps d-o and o-n and t is orphaned
        let corpus = Corpus::from_words(["a-b", "don't"]);
        assert_eq!(corpus.total_pairs(), 2);
        assert_eq!(corpus.pair_count(3, 14), 1);
        assert_eq!(corpus.pair_count(14, 13), 1);
    }

    #[test]
    fn test_degenerate_inputs_have_no_pairs() {
        assert!(Corpus::from_words(["a", ""]).is_empty());
        assert!(Corpus::from_words(["1234"]).is_empty());
        assert!(Corpus::from_words(Vec::<String>::new()).is_empty());
        assert_eq!(Corpus::from_words(["a", ""]).skipped_words(), 2);
    }

    #[test]
    fn test_from_text_splits_lines() {
        let corpus = Corpus::from_text("ab\n\nba\r\n");
        assert_eq!(corpus.word_count(), 3);
        assert_eq!(corpus.total_pairs(), 2);
    }
}
