use crate::error::{Result, ScrapeError};
use crate::infrastructure::PageSource;
use std::sync::Mutex;

/// In-memory page source. Page `i` serves `pages[i - 1]`; pages past the end fail.
pub struct StaticPages {
    pages: Vec<String>,
    requested: Mutex<Vec<usize>>,
}

impl StaticPages {
    pub fn new(pages: Vec<String>) -> Self {
        Self {
            pages,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<usize> {
        self.requested.lock().unwrap().clone()
    }
}

impl PageSource for StaticPages {
    async fn fetch_page(&self, page: usize) -> Result<String> {
        self.requested.lock().unwrap().push(page);
        self.pages
            .get(page - 1)
            .cloned()
            .ok_or_else(|| ScrapeError::Other(format!("page {page} unavailable")))
    }
}
