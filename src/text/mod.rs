// Text normalization: tokenization, stopword filtering, lemmatization.
//
// The stopword corpus and the lemmatizer are built once at startup and handed
// to the normalizer; nothing here initializes global state on first use.

pub mod lemma;
pub mod normalizer;
pub mod stopwords;
pub mod traits;

use std::path::Path;

use anyhow::Result;
use tracing::info;

use lemma::{DictionaryLemmatizer, SnowballLemmatizer};
use normalizer::TextNormalizer;
use stopwords::StopWords;
use traits::Lemmatizer;

/// Build the Russian normalizer used by the CLI.
///
/// With `lemma_dict` set, forms listed in that file are lemmatized by lookup
/// and everything else falls back to the Snowball stemmer.
pub fn russian_normalizer(lemma_dict: Option<&Path>) -> Result<TextNormalizer> {
    let lemmatizer: Box<dyn Lemmatizer> = match lemma_dict {
        Some(path) => {
            let dict = DictionaryLemmatizer::load(path, Box::new(SnowballLemmatizer::russian()))?;
            info!(
                path = %path.display(),
                forms = dict.len(),
                "Loaded lemma dictionary"
            );
            Box::new(dict)
        }
        None => Box::new(SnowballLemmatizer::russian()),
    };

    Ok(TextNormalizer::new(StopWords::russian(), lemmatizer))
}
