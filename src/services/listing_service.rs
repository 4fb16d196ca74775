use crate::config::cli::MAX_POSTS;
use crate::domain::Notice;
use crate::error::{Result, ScrapeError};
use crate::infrastructure::{PageScraper, PageSource};
use crate::services::scraping::ScrapingService;
use crate::services::serializing::render_json;
use crate::services::trimming::trim_entries;
use tracing::info;

/// The rendered JSON payload and the diagnostics gathered while producing it.
#[derive(Debug)]
pub struct Listing {
    pub json: String,
    pub records: usize,
    pub pages_fetched: usize,
    pub notices: Vec<Notice>,
}

pub struct ListingService<S, P> {
    scraping: ScrapingService<S, P>,
}

impl<S: PageSource, P: PageScraper> ListingService<S, P> {
    pub fn new(scraping: ScrapingService<S, P>) -> Self {
        Self { scraping }
    }

    pub async fn fetch(&self, posts: usize) -> Result<Listing> {
        if posts > MAX_POSTS {
            return Err(ScrapeError::Validation(format!(
                "{posts} is too high. Max value = {MAX_POSTS}"
            )));
        }
        let page_size = self.scraping.page_size();
        if page_size == 0 {
            return Err(ScrapeError::Validation(
                "page_size must be at least 1".to_string(),
            ));
        }

        info!("Starting listing pipeline for {posts} post(s)");

        let harvest = self.scraping.scrape_all(posts).await?;
        let entries = trim_entries(harvest.entries, posts, page_size, harvest.pages_fetched);
        let records = entries.len();
        let json = render_json(entries)?;

        info!(
            "Listing pipeline completed: {records} record(s) from {} page(s), {} notice(s)",
            harvest.pages_fetched,
            harvest.notices.len()
        );

        Ok(Listing {
            json,
            records,
            pages_fetched: harvest.pages_fetched,
            notices: harvest.notices,
        })
    }
}
