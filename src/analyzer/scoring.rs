use std::cmp::Ordering;
use std::fmt::Debug;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::term::TermFrequency;
use super::tfidf::TfIdfEngine;

/// Above this vocabulary size the ranking sort runs on the rayon pool.
const PAR_SORT_THRESHOLD: usize = 4096;

/// One ranked vocabulary entry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScoredWord {
    /// Normalized word (lower-cased, filtered)
    pub word: String,
    /// Term frequency as the raw occurrence count within the document.
    /// This is the "frequency in text" number a display layer labels as TF;
    /// use `relative_tf` for the count-over-total convention.
    pub tf: u64,
    /// Smoothed IDF. Identically 1.0 under the single-document corpus.
    pub idf: f64,
}

impl ScoredWord {
    /// Relative term frequency, `count / total_occurrences`.
    ///
    /// # Arguments
    /// * `total_count` - total surviving token occurrences of the document
    #[inline]
    pub fn relative_tf(&self, total_count: u64) -> f64 {
        if total_count == 0 {
            return 0.0;
        }
        self.tf as f64 / total_count as f64
    }
}

/// The fully scored and ranked vocabulary of one document.
pub struct RankedWords {
    pub list: Vec<ScoredWord>,
}

impl RankedWords {
    /// Score every vocabulary word with the engine `E`.
    ///
    /// The document is its own entire corpus, so the engine is queried with
    /// `doc_num = 1` and, for every word, `doc_freq = 1` (each word is in
    /// the one document by construction of the vocabulary).
    pub fn score<E>(freq: &TermFrequency) -> Self
    where
        E: TfIdfEngine,
    {
        let idf = E::idf(1, 1);
        let list = freq
            .iter()
            .map(|(word, count)| ScoredWord {
                word: word.to_string(),
                tf: count,
                idf,
            })
            .collect();
        RankedWords { list }
    }

    /// Sort into the ranking order:
    /// IDF descending, then TF descending, then word ascending.
    ///
    /// IDF is the primary key for compatibility with the multi-document
    /// formula, but it is constant within a single-document run, so the
    /// observable order comes from the tie-break. The comparator is a total
    /// order, which makes the output deterministic and idempotent.
    pub fn rank(&mut self) -> &mut Self {
        if self.list.len() >= PAR_SORT_THRESHOLD {
            self.list.par_sort_by(Self::ranking_order);
        } else {
            self.list.sort_by(Self::ranking_order);
        }
        self
    }

    #[inline]
    fn ranking_order(a: &ScoredWord, b: &ScoredWord) -> Ordering {
        b.idf
            .total_cmp(&a.idf)
            .then_with(|| b.tf.cmp(&a.tf))
            .then_with(|| a.word.cmp(&b.word))
    }

    /// Number of ranked entries (the vocabulary size).
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Check whether no word survived filtering.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }
}

impl Debug for RankedWords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            writeln!(f, "RankedWords [")?;
            for entry in &self.list {
                writeln!(f, "    {}: tf={} idf={:.6}", entry.word, entry.tf, entry.idf)?;
            }
            write!(f, "]")
        } else {
            f.debug_list().entries(&self.list).finish()
        }
    }
}
