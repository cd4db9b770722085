/// TF-IDF calculation engine trait
/// Defines the scoring strategy plugged into `Analyzer<E>`.
///
/// The engine sees corpus-level counts only; the analyzer always runs it
/// against a one-document corpus (`doc_num == 1`, `doc_freq == 1` for every
/// vocabulary word), so whatever formula an engine uses should be well
/// defined at that point.
pub trait TfIdfEngine {
    /// IDF for a term that appears in `doc_freq` of `doc_num` documents.
    ///
    /// # Returns
    /// * `f64` - the IDF value
    fn idf(doc_num: u64, doc_freq: u64) -> f64;

    /// Relative term frequency of a term within one document.
    ///
    /// # Arguments
    /// * `count` - occurrences of the term
    /// * `total_count` - total term occurrences in the document
    fn relative_tf(count: u64, total_count: u64) -> f64;
}

/// Smoothed TF-IDF engine
/// Textbook smoothed IDF: `ln((N + 1) / (df + 1)) + 1`.
///
/// Under a single-document corpus both `N` and `df` are 1 for every word in
/// the vocabulary, so the IDF degenerates to `ln(1) + 1 = 1.0` everywhere.
/// That is a forced property of the formula, not a defect; callers that
/// display the value should surface it as such.
#[derive(Debug, Clone, Copy)]
pub struct SmoothedTfIdfEngine;

impl TfIdfEngine for SmoothedTfIdfEngine {
    #[inline]
    fn idf(doc_num: u64, doc_freq: u64) -> f64 {
        ((doc_num as f64 + 1.0) / (doc_freq as f64 + 1.0)).ln() + 1.0
    }

    #[inline]
    fn relative_tf(count: u64, total_count: u64) -> f64 {
        if total_count == 0 {
            return 0.0;
        }
        count as f64 / total_count as f64
    }
}
