use super::stopwords::StopwordFilter;

/// Word Tokenizer
/// Splits raw document text into normalized word tokens:
/// - the whole input is lower-cased first
/// - candidate tokens are maximal runs of alphabetic characters and hyphens;
///   digits, punctuation and whitespace all split tokens
/// - a candidate survives only if it contains at least one alphabetic
///   character, is at least `min_token_len` characters long, and is not a
///   stop word
///
/// Empty input is valid and yields no tokens.
#[derive(Debug, Clone)]
pub struct WordTokenizer {
    min_token_len: usize,
    stopwords: StopwordFilter,
}

impl WordTokenizer {
    /// Create a tokenizer
    ///
    /// # Arguments
    /// * `min_token_len` - minimum surviving token length, in characters
    /// * `stopwords` - stop-word filter applied after lower-casing
    pub fn new(min_token_len: usize, stopwords: StopwordFilter) -> Self {
        Self {
            min_token_len,
            stopwords,
        }
    }

    /// Tokenize document text into surviving word tokens, in text order.
    ///
    /// # Returns
    /// * `Vec<String>` - lower-cased tokens that passed every filter
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        lowered
            .split(|c: char| !(c.is_alphabetic() || c == '-'))
            .filter(|candidate| self.keep(candidate))
            .map(String::from)
            .collect()
    }

    /// Minimum-shape and stop-word rule for one candidate token.
    #[inline]
    fn keep(&self, candidate: &str) -> bool {
        if candidate.chars().count() < self.min_token_len {
            return false;
        }
        if !candidate.chars().any(|c| c.is_alphabetic()) {
            return false;
        }
        !self.stopwords.is_stopword(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenizer(stopwords: &[&str]) -> WordTokenizer {
        WordTokenizer::new(3, StopwordFilter::from_list(stopwords))
    }

    #[test]
    fn lowercases_and_splits_on_punctuation() {
        let tok = tokenizer(&[]);
        let tokens = tok.tokenize("The cat SAT, on the mat!");
        assert_eq!(tokens, vec!["the", "cat", "sat", "the", "mat"]);
    }

    #[test]
    fn drops_stop_words_and_short_words() {
        let tok = tokenizer(&["the", "on"]);
        let tokens = tok.tokenize("The cat sat on the mat. The cat ran.");
        assert_eq!(tokens, vec!["cat", "sat", "mat", "cat", "ran"]);
    }

    #[test]
    fn digits_split_tokens() {
        let tok = tokenizer(&[]);
        let tokens = tok.tokenize("area51 covers 100km of desert");
        assert_eq!(tokens, vec!["area", "covers", "desert"]);
    }

    #[test]
    fn hyphenated_words_stay_whole_but_bare_hyphens_die() {
        let tok = tokenizer(&[]);
        let tokens = tok.tokenize("a well-known trick --- works");
        assert_eq!(tokens, vec!["well-known", "trick", "works"]);
    }

    #[test]
    fn cyrillic_text_is_tokenized() {
        let tok = tokenizer(&[]);
        let tokens = tok.tokenize("Частота слова в тексте");
        assert_eq!(tokens, vec!["частота", "слова", "тексте"]);
    }

    #[test]
    fn empty_and_unparseable_input_yield_no_tokens() {
        let tok = tokenizer(&[]);
        assert!(tok.tokenize("").is_empty());
        assert!(tok.tokenize("12 34 :: !!").is_empty());
    }
}
