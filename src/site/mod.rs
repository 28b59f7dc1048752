// News site access: HTTP fetching, HTML extraction, and the fetcher seam.
//
// `selectors` is pure (HTML string in, links/text out) and tested offline.
// `fetcher` wires it to the HTTP client behind the ArticleFetcher trait.

pub mod client;
pub mod fetcher;
pub mod selectors;
pub mod traits;
