use std::collections::HashSet;

use stop_words::{get, LANGUAGE};

/// Immutable stopword set, stored lowercase.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Russian stopwords from the stop-words crate.
    pub fn russian() -> Self {
        let words: Vec<String> = get(LANGUAGE::Russian);
        Self::from_words(words)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_russian_list_has_common_function_words() {
        let stop = StopWords::russian();
        assert!(!stop.is_empty());
        assert!(stop.contains("и"));
        assert!(stop.contains("в"));
    }

    #[test]
    fn test_from_words_lowercases() {
        let stop = StopWords::from_words(["И", " На "]);
        assert!(stop.contains("и"));
        assert!(stop.contains("на"));
        assert_eq!(stop.len(), 2);
    }
}
