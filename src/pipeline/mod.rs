// Pipelines: end-to-end runs composed from site, text, words and output.

pub mod crawl;
