/// This crate is a single-document text statistics engine.
/// It tokenizes one uploaded plain-text document, builds a vocabulary with
/// occurrence counts, scores every word with TF and smoothed IDF, ranks the
/// vocabulary with a deterministic total order, and slices the ranked list
/// into pages with full pagination descriptors.
pub mod analyzer;
pub mod error;

/// Document Analyzer
/// The top-level struct of this crate, wiring the tokenizer, the vocabulary,
/// the TF-IDF engine and the paginator into one stateless pipeline.
///
/// Each call to `analyze` / `analyze_bytes` / `analyze_named` is a pure
/// function of the input text and the requested page: no state is retained
/// between calls, so concurrent use needs no locking and retry is always safe.
///
/// `Analyzer<E>` has one generic parameter:
/// - `E`: TF-IDF calculation engine type (default `SmoothedTfIdfEngine`)
///
/// # Single-document degeneracy
/// The analyzer treats the uploaded document as the entire corpus, so the
/// smoothed IDF is identically `ln(1) + 1 = 1.0` for every word in every
/// run. This is a mathematically forced property of the formula against a
/// one-document corpus, not a defect; ranking therefore falls through to
/// the documented tie-break (TF descending, then word ascending).
pub use analyzer::Analyzer;

/// Analyzer Configuration
/// Page size, minimum token length, stop-word filter and pager window.
/// Built with `Default` plus `with_*` setters.
pub use analyzer::AnalyzerConfig;

/// Ranked Result Page
/// One page of ranked `ScoredWord` entries plus the vocabulary size and
/// the pagination descriptors consumed by a presentation layer.
pub use analyzer::RankedResultPage;

/// Term Frequency structure
/// A struct for managing word occurrence counts within one document.
/// It manages:
/// - The count of occurrences of each word
/// - The total number of surviving word occurrences in the document
///
/// Used as the base data for TF (Term Frequency) calculation.
pub use analyzer::term::TermFrequency;

/// Stop-word Filter
/// Built-in per-language stop-word lists (via the `stop-words` crate) and
/// custom lists; membership checks are case-insensitive.
pub use analyzer::stopwords::StopwordFilter;

/// Word Tokenizer
/// Lower-cases input, splits it into alphabetic/hyphen runs, and drops
/// stop words and tokens that fail the minimum-shape rule.
pub use analyzer::tokenizer::WordTokenizer;

/// TF-IDF Calculation Engine Trait
/// A trait that defines the behavior of a TF-IDF calculation engine.
///
/// By implementing this trait, you can plug a different scoring strategy
/// into `Analyzer<E>`. The default implementation, `SmoothedTfIdfEngine`,
/// computes the smoothed IDF `ln((N + 1) / (df + 1)) + 1`.
pub use analyzer::tfidf::{SmoothedTfIdfEngine, TfIdfEngine};

/// Scored Word and Ranked Words structures
/// Data structures for the ranked vocabulary.
/// - `ScoredWord`: one `{word, tf, idf}` record; `tf` is the raw count
/// - `RankedWords`: the full scored vocabulary with the ranking policy
pub use analyzer::scoring::{RankedWords, ScoredWord};

/// Pagination descriptors
/// - `Pagination`: page/total_pages/has_prev/has_next/prev_num/next_num
///   plus the windowed visible-pages list
/// - `PageItem`: a pager slot, either a concrete page number or a gap
pub use analyzer::page::{PageItem, Pagination};

/// Analysis Error
/// All failure modes of one analysis call. Every variant is recoverable at
/// the call boundary and renders as a single human-readable message.
pub use error::AnalyzeError;
