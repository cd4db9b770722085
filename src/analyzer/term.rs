use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// TermFrequency struct
/// Manages word occurrence counts within a single document and the total
/// number of surviving occurrences. This is the Vocabulary of one analysis
/// run: every key was seen at least once, and the sum of counts equals the
/// total count of filtered token occurrences.
///
/// Keys keep the tokenizer's first-seen order (`IndexMap`), which makes the
/// downstream ranking reproducible across runs on identical input.
///
/// # Examples
/// ```
/// use tf_idf_analyzer::TermFrequency;
/// let mut freq = TermFrequency::new();
/// freq.add_term("cat");
/// freq.add_term("mat");
/// freq.add_term("cat");
///
/// assert_eq!(freq.term_count("cat"), 2);
/// assert_eq!(freq.total_term_count(), 3);
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct TermFrequency {
    #[serde(with = "indexmap::map::serde_seq")]
    term_count: IndexMap<String, u64>,
    total_term_count: u64,
}

/// Implementation for adding terms
impl TermFrequency {
    /// Create a new TermFrequency
    pub fn new() -> Self {
        TermFrequency {
            term_count: IndexMap::new(),
            total_term_count: 0,
        }
    }

    /// Add a term
    ///
    /// # Arguments
    /// * `term` - term to add
    #[inline]
    pub fn add_term(&mut self, term: &str) -> &mut Self {
        let count = self.term_count.entry(term.to_string()).or_insert(0);
        *count += 1;
        self.total_term_count += 1;
        self
    }

    /// Add multiple terms
    ///
    /// # Arguments
    /// * `terms` - slice of terms to add
    #[inline]
    pub fn add_terms<T>(&mut self, terms: &[T]) -> &mut Self
    where
        T: AsRef<str>,
    {
        for term in terms {
            self.add_term(term.as_ref());
        }
        self
    }
}

/// Implementation for reading the vocabulary
impl TermFrequency {
    /// Get the occurrence count of a term
    ///
    /// # Arguments
    /// * `term` - term to look up
    ///
    /// # Returns
    /// * `u64` - occurrence count, 0 if the term is absent
    #[inline]
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_count.get(term).copied().unwrap_or(0)
    }

    /// Get the total count of all term occurrences
    #[inline]
    pub fn total_term_count(&self) -> u64 {
        self.total_term_count
    }

    /// Get the number of distinct terms (the vocabulary size)
    #[inline]
    pub fn term_num(&self) -> usize {
        self.term_count.len()
    }

    /// Check whether the vocabulary is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.term_count.is_empty()
    }

    /// Check whether a term exists
    #[inline]
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_count.contains_key(term)
    }

    /// Iterate over `(term, count)` pairs in first-seen order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.term_count.iter().map(|(term, &count)| (term.as_str(), count))
    }
}
