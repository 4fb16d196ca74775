use crate::config::SelectorConfig;
use crate::domain::{Entry, Field, FieldFault, Notice};
use crate::error::{Result, ScrapeError};
use scraper::{Html, Selector};

pub(crate) mod hackernews;
pub(crate) mod text;

#[cfg(test)]
pub(crate) mod fixtures;

pub trait PageScraper {
    fn extract_entries(
        &self,
        document: &Html,
        selectors: &Selectors,
        page: usize,
    ) -> Result<PageExtraction>;
}

pub struct Selectors {
    pub title: Selector,
    pub rank: Selector,
    pub meta: Selector,
    pub score: Selector,
    pub author: Selector,
    pub link: Selector,
}

impl Selectors {
    pub fn new(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            title: parse(&config.title)?,
            rank: parse(&config.rank)?,
            meta: parse(&config.meta)?,
            score: parse(&config.score)?,
            author: parse(&config.author)?,
            link: parse(&config.link)?,
        })
    }
}

fn parse(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|e| ScrapeError::Selector(format!("{selector}: {e}")))
}

/// Entries pulled from one page, plus every fallback applied along the way.
#[derive(Debug, Default)]
pub struct PageExtraction {
    pub page: usize,
    pub entries: Vec<Entry>,
    pub notices: Vec<Notice>,
}

impl PageExtraction {
    pub fn new(page: usize) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn note(
        &mut self,
        position: usize,
        field: Field,
        fault: FieldFault,
        fallback: impl Into<String>,
    ) {
        self.notices
            .push(Notice::new(self.page, position, field, fault, fallback));
    }
}
