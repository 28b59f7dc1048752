// Default normalizer: lowercase, split into alphabetic words, drop stopwords,
// lemmatize.
//
// A token is any maximal run of alphanumeric characters. Runs that contain a
// digit ("451", "2018г") are discarded rather than trimmed. A token is dropped
// if either its surface form or its lemma is a stopword, since a stemmer can
// map a stopword onto a non-stopword key and vice versa.

use super::stopwords::StopWords;
use super::traits::{Lemmatizer, Normalizer};

/// Stopwords are matched against the surface token before lemmatization as
/// well as against the lemma after it, not only the lemma.
pub struct TextNormalizer {
    stop_words: StopWords,
    lemmatizer: Box<dyn Lemmatizer>,
}

impl TextNormalizer {
    pub fn new(stop_words: StopWords, lemmatizer: Box<dyn Lemmatizer>) -> Self {
        Self {
            stop_words,
            lemmatizer,
        }
    }
}

impl Normalizer for TextNormalizer {
    fn normalize(&self, text: &str) -> Vec<String> {
        tokenize(text)
            .into_iter()
            .filter(|token| !self.stop_words.contains(token))
            .map(|token| self.lemmatizer.lemmatize(&token))
            .filter(|lemma| is_word(lemma) && !self.stop_words.contains(lemma))
            .collect()
    }
}

/// Lowercase `text` and split it into purely alphabetic tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|token| is_word(token))
        .map(str::to_owned)
        .collect()
}

fn is_word(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}
