// Category aggregation: sum per-article bag-of-words counts.

use tracing::debug;

use super::count::WordCount;
use crate::text::traits::Normalizer;

/// Normalize each article and sum token occurrences into one WordCount.
///
/// Word order in the result is first-seen order across the articles as given.
/// No articles, or articles with no surviving tokens, give an empty WordCount.
pub fn aggregate<S: AsRef<str>>(texts: &[S], normalizer: &dyn Normalizer) -> WordCount {
    let mut total = WordCount::new();
    for text in texts {
        let article: WordCount = normalizer.normalize(text.as_ref()).into_iter().collect();
        total.merge(&article);
    }

    debug!(
        articles = texts.len(),
        distinct_words = total.len(),
        "Aggregated category word counts"
    );

    total
}
