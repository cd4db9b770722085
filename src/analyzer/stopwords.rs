use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A filter for excluding common words from the vocabulary.
/// Membership is case-insensitive: the stored list and the probe word are
/// both lower-cased.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Create a filter with the built-in list for the given language.
    /// Unknown language codes fall back to English.
    ///
    /// # Arguments
    /// * `language` - language code, e.g. "en", "ru", "de", "fr", "es"
    pub fn new(language: &str) -> Self {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "ru" | "russian" => LANGUAGE::Russian,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            _ => LANGUAGE::English,
        };
        let stopwords = get(lang).iter().map(|s| s.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Create an empty filter (no word is excluded).
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a filter from a custom word list.
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    /// Add extra words to the filter.
    pub fn add_words(&mut self, words: &[&str]) {
        for word in words {
            self.stopwords.insert(word.to_lowercase());
        }
    }

    /// Check whether a word is a stop word.
    #[inline]
    pub fn is_stopword(&self, word: &str) -> bool {
        if word.chars().any(|c| c.is_uppercase()) {
            self.stopwords.contains(&word.to_lowercase())
        } else {
            self.stopwords.contains(word)
        }
    }

    /// Number of words in the filter.
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check whether the filter excludes nothing.
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
