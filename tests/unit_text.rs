// Unit tests for text normalization.
//
// Most cases use the identity lemmatizer and an explicit stopword list so the
// expected tokens are exact; the Snowball and dictionary lemmatizers get their
// own checks at the end.

use std::io::Write;

use topwords::text::lemma::{DictionaryLemmatizer, IdentityLemmatizer, SnowballLemmatizer};
use topwords::text::normalizer::TextNormalizer;
use topwords::text::russian_normalizer;
use topwords::text::stopwords::StopWords;
use topwords::text::traits::{Lemmatizer, Normalizer};

fn plain_normalizer() -> TextNormalizer {
    TextNormalizer::new(
        StopWords::from_words(["и", "на", "в", "по"]),
        Box::new(IdentityLemmatizer),
    )
}

// ============================================================
// TextNormalizer with identity lemmas
// ============================================================

#[test]
fn normalize_lowercases() {
    assert_eq!(plain_normalizer().normalize("РеГистР"), vec!["регистр"]);
}

#[test]
fn normalize_drops_stopwords() {
    assert_eq!(plain_normalizer().normalize("и на в слово"), vec!["слово"]);
}

#[test]
fn normalize_drops_numbers_and_degree_sign() {
    assert_eq!(
        plain_normalizer().normalize("451° по Фаренгейту"),
        vec!["фаренгейту"]
    );
    assert_eq!(plain_normalizer().normalize("цифры 146 42 17"), vec!["цифры"]);
}

#[test]
fn normalize_strips_punctuation() {
    assert_eq!(
        plain_normalizer().normalize("пунктуация: , ! ... — «Лето»"),
        vec!["пунктуация", "лето"]
    );
}

#[test]
fn normalize_keeps_text_order_and_repeats() {
    assert_eq!(
        plain_normalizer().normalize("two two one two"),
        vec!["two", "two", "one", "two"]
    );
}

#[test]
fn normalize_empty_text() {
    assert!(plain_normalizer().normalize("").is_empty());
    assert!(plain_normalizer().normalize("   \n\t ").is_empty());
}

// ============================================================
// Stopwords checked against the lemma as well as the surface form
// ============================================================

struct ToStopword;

impl Lemmatizer for ToStopword {
    fn lemmatize(&self, word: &str) -> String {
        if word == "нам" {
            "на".to_string()
        } else {
            word.to_string()
        }
    }
}

#[test]
fn normalize_drops_lemma_that_is_a_stopword() {
    let normalizer = TextNormalizer::new(StopWords::from_words(["на"]), Box::new(ToStopword));
    assert_eq!(normalizer.normalize("нам слово"), vec!["слово"]);
}

// ============================================================
// Lemmatizers
// ============================================================

#[test]
fn snowball_maps_inflections_to_one_key() {
    let normalizer = TextNormalizer::new(
        StopWords::default(),
        Box::new(SnowballLemmatizer::russian()),
    );
    let tokens = normalizer.normalize("слово слова слову");
    assert_eq!(tokens.len(), 3);
    assert!(tokens.iter().all(|t| t == &tokens[0]), "{tokens:?}");
}

#[test]
fn dictionary_lookup_then_fallback() {
    let lemmas = [("слова", "слово"), ("цифры", "цифра")]
        .into_iter()
        .map(|(f, l)| (f.to_string(), l.to_string()))
        .collect();
    let dict = DictionaryLemmatizer::new(lemmas, Box::new(IdentityLemmatizer));
    assert_eq!(dict.lemmatize("слова"), "слово");
    assert_eq!(dict.lemmatize("цифры"), "цифра");
    assert_eq!(dict.lemmatize("лето"), "лето");
    assert_eq!(dict.len(), 2);
}

#[test]
fn dictionary_loaded_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# form\tlemma").unwrap();
    writeln!(file, "тексте\tтекст").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "Слов\tслово").unwrap();

    let dict = DictionaryLemmatizer::load(file.path(), Box::new(IdentityLemmatizer)).unwrap();
    assert_eq!(dict.len(), 2);
    assert_eq!(dict.lemmatize("тексте"), "текст");
    // forms are stored lowercase, matching tokenizer output
    assert_eq!(dict.lemmatize("слов"), "слово");
}

#[test]
fn dictionary_missing_file_is_error() {
    let result = DictionaryLemmatizer::load(
        std::path::Path::new("/nonexistent/topwords/lemmas.tsv"),
        Box::new(IdentityLemmatizer),
    );
    assert!(result.is_err());
}

#[test]
fn russian_normalizer_filters_builtin_stopwords() {
    let normalizer = russian_normalizer(None).unwrap();
    let tokens = normalizer.normalize("и в на");
    assert!(tokens.is_empty(), "{tokens:?}");
}

#[test]
fn russian_normalizer_uses_dictionary_when_given() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "фаренгейту\tфаренгейт").unwrap();

    let normalizer = russian_normalizer(Some(file.path())).unwrap();
    assert_eq!(normalizer.normalize("451° по Фаренгейту"), vec!["фаренгейт"]);
}
