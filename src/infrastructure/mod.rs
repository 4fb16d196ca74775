mod clients;
pub(crate) mod scrapers;

pub use clients::{front_page::FrontPageClient, PageSource};
pub use scrapers::{hackernews::HackerNewsScraper, PageExtraction, PageScraper, Selectors};
