use crate::domain::{Entry, Notice};
use crate::error::{Result, ScrapeError};
use crate::infrastructure::{PageExtraction, PageScraper, PageSource, Selectors};
use indicatif::{ProgressBar, ProgressStyle};
use scraper::Html;
use tracing::{debug, info};

/// Number of pages that must be fetched to cover `posts` entries.
pub fn pages_needed(posts: usize, page_size: usize) -> usize {
    let mut pages = posts / page_size;
    if posts % page_size != 0 {
        pages += 1;
    }
    pages
}

/// Everything gathered across the page loop, in page order.
#[derive(Debug, Default)]
pub struct Harvest {
    pub entries: Vec<Entry>,
    pub notices: Vec<Notice>,
    pub pages_fetched: usize,
}

impl Harvest {
    pub fn absorb(mut self, extraction: PageExtraction) -> Self {
        self.entries.extend(extraction.entries);
        self.notices.extend(extraction.notices);
        self.pages_fetched += 1;
        self
    }
}

pub struct ScrapingService<S, P> {
    source: S,
    scraper: P,
    selectors: Selectors,
    page_size: usize,
}

impl<S: PageSource, P: PageScraper> ScrapingService<S, P> {
    pub fn new(source: S, scraper: P, selectors: Selectors, page_size: usize) -> Self {
        info!("Created new Scraping service ({page_size} entries per page)");
        Self {
            source,
            scraper,
            selectors,
            page_size,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub async fn scrape_page(&self, page: usize) -> Result<PageExtraction> {
        let body = self.source.fetch_page(page).await?;
        let document = Html::parse_document(&body);
        self.scraper
            .extract_entries(&document, &self.selectors, page)
    }

    /// Fetches pages one after another until `posts` entries are covered.
    /// The first failing page aborts the whole run.
    pub async fn scrape_all(&self, posts: usize) -> Result<Harvest> {
        let pages = pages_needed(posts, self.page_size);
        info!("Fetching {pages} page(s) for {posts} post(s)");

        let pb = ProgressBar::new(pages as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}")
                .map_err(|e| ScrapeError::Other(e.to_string()))?,
        );

        let mut harvest = Harvest::default();
        for page in 1..=pages {
            pb.set_message(format!("page {page}"));

            let extraction = self.scrape_page(page).await?;
            debug!(
                "Page {page} yielded {} entries and {} notices",
                extraction.entries.len(),
                extraction.notices.len()
            );
            harvest = harvest.absorb(extraction);

            pb.inc(1);
        }
        pb.finish_and_clear();

        Ok(harvest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectorConfig;
    use crate::infrastructure::scrapers::fixtures::ranked_page;
    use crate::infrastructure::HackerNewsScraper;
    use crate::services::testing::StaticPages;

    fn service(
        pages: Vec<String>,
        page_size: usize,
    ) -> ScrapingService<StaticPages, HackerNewsScraper> {
        let selectors = Selectors::new(&SelectorConfig::default()).unwrap();
        ScrapingService::new(StaticPages::new(pages), HackerNewsScraper, selectors, page_size)
    }

    #[test]
    fn test_pages_needed() {
        assert_eq!(pages_needed(0, 30), 0);
        assert_eq!(pages_needed(1, 30), 1);
        assert_eq!(pages_needed(30, 30), 1);
        assert_eq!(pages_needed(31, 30), 2);
        assert_eq!(pages_needed(35, 30), 2);
        assert_eq!(pages_needed(60, 30), 2);
        assert_eq!(pages_needed(100, 30), 4);
    }

    #[tokio::test]
    async fn test_zero_posts_fetches_nothing() {
        let service = service(vec![ranked_page(1, 30)], 30);
        let harvest = service.scrape_all(0).await.unwrap();

        assert!(harvest.entries.is_empty());
        assert_eq!(harvest.pages_fetched, 0);
        assert!(service.source.requested().is_empty());
    }

    #[tokio::test]
    async fn test_pages_are_fetched_in_order_and_appended() {
        let service = service(vec![ranked_page(1, 30), ranked_page(31, 30)], 30);
        let harvest = service.scrape_all(35).await.unwrap();

        assert_eq!(service.source.requested(), vec![1, 2]);
        assert_eq!(harvest.pages_fetched, 2);
        assert_eq!(harvest.entries.len(), 60);
        assert_eq!(harvest.entries[0].rank, "1");
        assert_eq!(harvest.entries[30].rank, "31");
        assert_eq!(harvest.entries[59].rank, "60");
    }

    #[tokio::test]
    async fn test_failed_page_aborts_run() {
        let service = service(vec![ranked_page(1, 30)], 30);
        let result = service.scrape_all(45).await;

        assert!(result.is_err());
        assert_eq!(service.source.requested(), vec![1, 2]);
    }

    #[test]
    fn test_absorb_keeps_page_order() {
        let mut first = PageExtraction::new(1);
        first.push(Entry {
            title: "a".to_string(),
            link: "l".to_string(),
            score: "1".to_string(),
            author: "u".to_string(),
            comments: "0".to_string(),
            rank: "1".to_string(),
        });
        let mut second = PageExtraction::new(2);
        second.push(Entry {
            rank: "2".to_string(),
            ..first.entries[0].clone()
        });

        let harvest = Harvest::default().absorb(first).absorb(second);
        let ranks: Vec<&str> = harvest.entries.iter().map(|e| e.rank.as_str()).collect();
        assert_eq!(ranks, vec!["1", "2"]);
        assert_eq!(harvest.pages_fetched, 2);
    }
}
