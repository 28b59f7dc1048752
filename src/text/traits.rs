// Normalizer and lemmatizer traits: swap-ready abstractions.
//
// The pipeline only sees `Normalizer`. The default implementation tokenizes,
// drops stopwords and lemmatizes through a `Lemmatizer`, so a stemmer can be
// traded for a dictionary (or a real morphological analyzer) without touching
// aggregation.

/// Converts raw article text into normalized word tokens.
pub trait Normalizer: Send + Sync {
    /// Lowercased, lemmatized, alphabetic-only tokens with stopwords removed,
    /// in text order.
    fn normalize(&self, text: &str) -> Vec<String>;
}

/// Reduces a lowercase word form to its dictionary form.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str) -> String;
}
