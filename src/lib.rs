// topwords: per-category word frequency tables for news sites.
//
// This is the library root. Each module corresponds to one stage of the
// crawl: fetching pages, normalizing text, counting and resolving words,
// writing results.

pub mod config;
pub mod output;
pub mod pipeline;
pub mod site;
pub mod text;
pub mod words;
