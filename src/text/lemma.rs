// Lemmatizer implementations.
//
// SnowballLemmatizer stems rather than lemmatizes: "слова" and "слово" both
// become "слов". Good enough for frequency counting, where what matters is
// that inflected forms collapse onto one key. DictionaryLemmatizer layers an
// explicit form -> lemma table on top for words where a real dictionary form
// is wanted in the output.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rust_stemmers::{Algorithm, Stemmer};

use super::traits::Lemmatizer;

/// Snowball stemmer behind the Lemmatizer trait.
pub struct SnowballLemmatizer {
    stemmer: Stemmer,
}

impl SnowballLemmatizer {
    pub fn russian() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::Russian),
        }
    }
}

impl Lemmatizer for SnowballLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        self.stemmer.stem(word).into_owned()
    }
}

/// Leaves every word as it is.
pub struct IdentityLemmatizer;

impl Lemmatizer for IdentityLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        word.to_string()
    }
}

/// Lookup table of word form -> lemma, with a fallback for unknown forms.
pub struct DictionaryLemmatizer {
    lemmas: HashMap<String, String>,
    fallback: Box<dyn Lemmatizer>,
}

impl DictionaryLemmatizer {
    pub fn new(lemmas: HashMap<String, String>, fallback: Box<dyn Lemmatizer>) -> Self {
        let lemmas = lemmas
            .into_iter()
            .map(|(form, lemma)| (form.to_lowercase(), lemma.to_lowercase()))
            .collect();
        Self { lemmas, fallback }
    }

    /// Load a dictionary file: one `form<TAB>lemma` pair per line. Blank lines
    /// and lines starting with `#` are skipped.
    pub fn load(path: &Path, fallback: Box<dyn Lemmatizer>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read lemma dictionary {}", path.display()))?;
        let lemmas = parse_dictionary(&contents)
            .with_context(|| format!("Malformed lemma dictionary {}", path.display()))?;
        Ok(Self::new(lemmas, fallback))
    }

    /// Number of word forms in the table.
    pub fn len(&self) -> usize {
        self.lemmas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lemmas.is_empty()
    }
}

impl Lemmatizer for DictionaryLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        match self.lemmas.get(word) {
            Some(lemma) => lemma.clone(),
            None => self.fallback.lemmatize(word),
        }
    }
}

fn parse_dictionary(contents: &str) -> Result<HashMap<String, String>> {
    let mut lemmas = HashMap::new();
    for (lineno, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (form, lemma) = line
            .split_once('\t')
            .with_context(|| format!("line {}: expected `form<TAB>lemma`", lineno + 1))?;
        let (form, lemma) = (form.trim(), lemma.trim());
        if form.is_empty() || lemma.is_empty() {
            anyhow::bail!("line {}: empty form or lemma", lineno + 1);
        }
        lemmas.insert(form.to_string(), lemma.to_string());
    }
    Ok(lemmas)
}
