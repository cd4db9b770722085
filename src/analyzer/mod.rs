pub mod page;
pub mod scoring;
pub mod stopwords;
pub mod term;
pub mod tfidf;
pub mod tokenizer;

use std::marker::PhantomData;
use std::str;

use serde::Serialize;
use tracing::debug;

use crate::error::AnalyzeError;
use self::page::Pagination;
use self::scoring::{RankedWords, ScoredWord};
use self::stopwords::StopwordFilter;
use self::term::TermFrequency;
use self::tfidf::{SmoothedTfIdfEngine, TfIdfEngine};
use self::tokenizer::WordTokenizer;

/// Result rows per page when not configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 50;
/// Minimum surviving token length, in characters.
pub const DEFAULT_MIN_TOKEN_LEN: usize = 3;
/// Visible-pages window radius around the current page.
pub const DEFAULT_VISIBLE_WINDOW: usize = 2;

/// Analyzer configuration.
/// `Default` gives the stock setup: 50 rows per page, tokens of 3+
/// characters, the built-in English stop-word list, pager window 2.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Ranked entries per result page; must be >= 1
    pub page_size: usize,
    /// Minimum token length, in characters
    pub min_token_len: usize,
    /// Stop-word filter applied by the tokenizer
    pub stopwords: StopwordFilter,
    /// Window radius for the visible-pages list
    pub visible_window: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            min_token_len: DEFAULT_MIN_TOKEN_LEN,
            stopwords: StopwordFilter::default(),
            visible_window: DEFAULT_VISIBLE_WINDOW,
        }
    }
}

impl AnalyzerConfig {
    /// Set the page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set the minimum token length.
    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }

    /// Set the stop-word filter.
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Set the visible-pages window radius.
    pub fn with_visible_window(mut self, visible_window: usize) -> Self {
        self.visible_window = visible_window;
        self
    }
}

/// One page of analysis results, as consumed by a presentation layer.
#[derive(Serialize, Debug, Clone)]
pub struct RankedResultPage {
    /// Original file name, echoed when the caller supplied one
    pub filename: Option<String>,
    /// Ranked entries of the requested page, at most `page_size` of them
    pub results: Vec<ScoredWord>,
    /// Vocabulary size across all pages
    pub total_words: usize,
    /// Pager descriptors for this page
    pub pagination: Pagination,
}

/// Document Analyzer
/// Stateless end-to-end pipeline: text -> tokens -> vocabulary -> scored
/// words -> ranked list -> one page slice. See the crate docs for the
/// single-document IDF degeneracy.
#[derive(Debug, Clone)]
pub struct Analyzer<E = SmoothedTfIdfEngine>
where
    E: TfIdfEngine,
{
    config: AnalyzerConfig,
    tokenizer: WordTokenizer,
    _marker: PhantomData<E>,
}

impl Analyzer<SmoothedTfIdfEngine> {
    /// Create an analyzer with the default configuration and engine.
    pub fn new() -> Self {
        // the default page size is non-zero, so this cannot fail
        Self::with_config(AnalyzerConfig::default()).unwrap_or_else(|_| unreachable!())
    }
}

impl Default for Analyzer<SmoothedTfIdfEngine> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Analyzer<E>
where
    E: TfIdfEngine,
{
    /// Create an analyzer from a configuration.
    ///
    /// # Errors
    /// `AnalyzeError::InvalidPageSize` if `config.page_size == 0`.
    pub fn with_config(config: AnalyzerConfig) -> Result<Self, AnalyzeError> {
        if config.page_size == 0 {
            return Err(AnalyzeError::InvalidPageSize);
        }
        let tokenizer = WordTokenizer::new(config.min_token_len, config.stopwords.clone());
        Ok(Self {
            config,
            tokenizer,
            _marker: PhantomData,
        })
    }

    /// Build the vocabulary of one document.
    /// Empty input, or input where no token survives filtering, yields an
    /// empty vocabulary; that is a valid result, not an error.
    pub fn vocabulary(&self, text: &str) -> TermFrequency {
        let tokens = self.tokenizer.tokenize(text);
        let mut freq = TermFrequency::new();
        freq.add_terms(&tokens);
        freq
    }

    /// Analyze a document and return one page of ranked results.
    ///
    /// # Arguments
    /// * `text` - the whole document text
    /// * `page` - requested page, 1-based
    ///
    /// # Errors
    /// `AnalyzeError::PageOutOfRange` if `page` is 0 or beyond the last
    /// page. An empty vocabulary has zero pages; page 1 is still accepted
    /// there and returns an empty page with `total_words == 0`.
    pub fn analyze(&self, text: &str, page: usize) -> Result<RankedResultPage, AnalyzeError> {
        self.analyze_inner(None, text, page)
    }

    /// Analyze a document, echoing the caller's file name into the result.
    pub fn analyze_named(
        &self,
        filename: &str,
        text: &str,
        page: usize,
    ) -> Result<RankedResultPage, AnalyzeError> {
        self.analyze_inner(Some(filename.to_string()), text, page)
    }

    /// Analyze raw uploaded bytes.
    ///
    /// # Errors
    /// `AnalyzeError::Decode` if the bytes are not valid UTF-8, plus the
    /// page-range errors of `analyze`. A zero-byte upload decodes to the
    /// empty document and follows the empty-result policy.
    pub fn analyze_bytes(&self, bytes: &[u8], page: usize) -> Result<RankedResultPage, AnalyzeError> {
        let text = str::from_utf8(bytes)?;
        self.analyze_inner(None, text, page)
    }

    fn analyze_inner(
        &self,
        filename: Option<String>,
        text: &str,
        page: usize,
    ) -> Result<RankedResultPage, AnalyzeError> {
        let freq = self.vocabulary(text);
        let total_words = freq.term_num();
        let total_pages = page::total_pages(total_words, self.config.page_size);

        // Reject out-of-range pages. An empty vocabulary still answers
        // page 1 with an empty slice.
        if page == 0 || page > total_pages.max(1) {
            return Err(AnalyzeError::PageOutOfRange { page, total_pages });
        }

        let mut ranked = RankedWords::score::<E>(&freq);
        ranked.rank();

        let pagination = Pagination::build(page, self.config.page_size, total_words, self.config.visible_window);
        let (start, end) = pagination.slice_bounds();
        let results = ranked.list[start..end].to_vec();

        debug!(total_words, total_pages, page, rows = results.len(), "analyzed document");

        Ok(RankedResultPage {
            filename,
            results,
            total_words,
            pagination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyzer(stopwords: &[&str], page_size: usize) -> Analyzer {
        let config = AnalyzerConfig::default()
            .with_stopwords(StopwordFilter::from_list(stopwords))
            .with_page_size(page_size);
        Analyzer::with_config(config).expect("valid config")
    }

    #[test]
    fn zero_page_size_is_rejected_at_config_time() {
        let config = AnalyzerConfig::default().with_page_size(0);
        assert!(matches!(
            Analyzer::<SmoothedTfIdfEngine>::with_config(config),
            Err(AnalyzeError::InvalidPageSize)
        ));
    }

    #[test]
    fn vocabulary_counts_surviving_tokens() {
        let analyzer = analyzer(&["the", "on"], 50);
        let freq = analyzer.vocabulary("The cat sat on the mat. The cat ran.");
        assert_eq!(freq.term_count("cat"), 2);
        assert_eq!(freq.term_num(), 4);
        assert_eq!(freq.total_term_count(), 5);
        assert!(!freq.contains_term("the"));
    }

    #[test]
    fn filename_is_echoed() {
        let analyzer = analyzer(&[], 50);
        let page = analyzer.analyze_named("essay.txt", "words in a file", 1).expect("page 1");
        assert_eq!(page.filename.as_deref(), Some("essay.txt"));
    }

    #[test]
    fn invalid_utf8_is_a_decode_error() {
        let analyzer = analyzer(&[], 50);
        let err = analyzer.analyze_bytes(&[0xff, 0xfe, 0x20], 1).unwrap_err();
        assert!(matches!(err, AnalyzeError::Decode(_)));
    }

    #[test]
    fn zero_byte_upload_is_an_empty_result() {
        let analyzer = analyzer(&[], 50);
        let page = analyzer.analyze_bytes(b"", 1).expect("empty result, not an error");
        assert_eq!(page.total_words, 0);
        assert!(page.results.is_empty());
        assert_eq!(page.pagination.total_pages, 0);
    }

    #[test]
    fn page_zero_and_overflow_are_rejected() {
        let analyzer = analyzer(&[], 2);
        let text = "one two three four five six";
        assert!(matches!(
            analyzer.analyze(text, 0),
            Err(AnalyzeError::PageOutOfRange { page: 0, .. })
        ));
        // 6 words, page size 2 -> 3 pages
        assert!(analyzer.analyze(text, 3).is_ok());
        assert!(matches!(
            analyzer.analyze(text, 4),
            Err(AnalyzeError::PageOutOfRange { page: 4, total_pages: 3 })
        ));
    }

    #[test]
    fn page_two_of_an_empty_document_is_rejected() {
        let analyzer = analyzer(&[], 50);
        assert!(matches!(
            analyzer.analyze("", 2),
            Err(AnalyzeError::PageOutOfRange { page: 2, total_pages: 0 })
        ));
    }
}
