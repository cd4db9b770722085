use proptest::prelude::*;

use tf_idf_analyzer::{Analyzer, AnalyzerConfig, PageItem, StopwordFilter};

fn analyzer(stopwords: &[&str], page_size: usize) -> Analyzer {
    let config = AnalyzerConfig::default()
        .with_stopwords(StopwordFilter::from_list(stopwords))
        .with_page_size(page_size);
    Analyzer::with_config(config).expect("valid config")
}

const CAT_TEXT: &str = "The cat sat on the mat. The cat ran.";

#[test]
fn cat_scenario_page_one() {
    let analyzer = analyzer(&["the", "on"], 2);
    let page = analyzer.analyze(CAT_TEXT, 1).expect("page 1");

    assert_eq!(page.total_words, 4);
    let rows: Vec<(&str, u64)> = page.results.iter().map(|w| (w.word.as_str(), w.tf)).collect();
    // tf desc, then word asc: cat(2) first, then "mat" beats "ran"
    assert_eq!(rows, vec![("cat", 2), ("mat", 1)]);
    for entry in &page.results {
        assert!((entry.idf - 1.0).abs() < 1e-12);
    }

    let p = &page.pagination;
    assert_eq!(p.total_pages, 2);
    assert!(!p.has_prev);
    assert!(p.has_next);
    assert_eq!(p.prev_num, None);
    assert_eq!(p.next_num, Some(2));
    assert_eq!(p.visible_pages, vec![PageItem::Num(1), PageItem::Num(2)]);
}

#[test]
fn cat_scenario_page_two() {
    let analyzer = analyzer(&["the", "on"], 2);
    let page = analyzer.analyze(CAT_TEXT, 2).expect("page 2");

    let rows: Vec<(&str, u64)> = page.results.iter().map(|w| (w.word.as_str(), w.tf)).collect();
    assert_eq!(rows, vec![("ran", 1), ("sat", 1)]);
    assert!(page.pagination.has_prev);
    assert!(!page.pagination.has_next);
}

#[test]
fn analysis_is_idempotent() {
    let analyzer = analyzer(&["the", "on"], 2);
    let a = analyzer.analyze(CAT_TEXT, 1).expect("first run");
    let b = analyzer.analyze(CAT_TEXT, 1).expect("second run");
    assert_eq!(a.results, b.results);
    assert_eq!(a.total_words, b.total_words);
    assert_eq!(a.pagination, b.pagination);
}

#[test]
fn tf_conservation_across_all_pages() {
    let analyzer = analyzer(&["the", "on"], 2);
    let vocabulary = analyzer.vocabulary(CAT_TEXT);

    let mut counted: u64 = 0;
    let total_pages = analyzer.analyze(CAT_TEXT, 1).expect("page 1").pagination.total_pages;
    for page in 1..=total_pages {
        let result = analyzer.analyze(CAT_TEXT, page).expect("in-range page");
        counted += result.results.iter().map(|w| w.tf).sum::<u64>();
    }
    assert_eq!(counted, vocabulary.total_term_count());
}

#[test]
fn all_stop_word_document_is_empty_not_an_error() {
    let analyzer = analyzer(&["the", "and"], 50);
    let page = analyzer.analyze("The the and AND the", 1).expect("empty result");
    assert_eq!(page.total_words, 0);
    assert!(page.results.is_empty());
    assert_eq!(page.pagination.total_pages, 0);
}

#[test]
fn overflow_page_is_a_consistent_error() {
    let analyzer = analyzer(&["the", "on"], 2);
    let err = analyzer.analyze(CAT_TEXT, 5).unwrap_err();
    assert_eq!(
        err.to_string(),
        "page 5 is out of range (total pages: 2)"
    );
}

proptest! {
    /// Concatenating pages 1..=total_pages reproduces the full ranked list
    /// exactly once, with no gaps or duplicates.
    #[test]
    fn pagination_covers_the_ranked_list(
        words in proptest::collection::vec("[a-z]{3,8}", 1..120),
        page_size in 1usize..20,
    ) {
        let text = words.join(" ");
        let analyzer = analyzer(&[], page_size);

        let full = analyzer
            .analyze(&text, 1)
            .and_then(|first| {
                let mut all = Vec::new();
                for page in 1..=first.pagination.total_pages {
                    all.extend(analyzer.analyze(&text, page)?.results);
                }
                Ok(all)
            })
            .expect("all pages in range");

        // one pass with everything on a single page as the reference order
        let reference = analyzer_with_room(&text).analyze(&text, 1).expect("single page").results;
        prop_assert_eq!(full, reference);
    }

    /// Every word of every run scores idf exactly 1.0.
    #[test]
    fn idf_is_always_one(words in proptest::collection::vec("[a-z]{3,8}", 1..60)) {
        let text = words.join(" ");
        let analyzer = analyzer_with_room(&text);
        let page = analyzer.analyze(&text, 1).expect("page 1");
        for entry in &page.results {
            prop_assert!((entry.idf - 1.0).abs() < 1e-12);
        }
    }
}

/// Analyzer whose page size is large enough to hold the whole vocabulary.
fn analyzer_with_room(text: &str) -> Analyzer {
    let upper = text.split_whitespace().count().max(1);
    analyzer(&[], upper)
}
