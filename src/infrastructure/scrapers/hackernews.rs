use super::text::{count_digits, digits_only, truncate_text};
use super::{PageExtraction, PageScraper, Selectors};
use crate::domain::{Entry, Field, FieldFault};
use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Html};

pub const BLANK_TITLE: &str = "BLANK";
pub const NO_USER: &str = "NOUSER";
pub const NO_COUNT: &str = "0";

/// Separates the comment count from its unit label, as in `12&nbsp;comments`.
const COUNT_SEPARATOR: char = '\u{a0}';

/// Reads the title block and meta block of every story on a front page.
///
/// Entry `i` is built from the `i`-th title link, rank marker and meta block
/// in document order. Missing optional fields fall back to defaults and are
/// recorded as notices on the returned extraction.
pub struct HackerNewsScraper;

impl PageScraper for HackerNewsScraper {
    fn extract_entries(
        &self,
        document: &Html,
        selectors: &Selectors,
        page: usize,
    ) -> Result<PageExtraction> {
        let mut extraction = PageExtraction::new(page);

        let ranks: Vec<String> = document
            .select(&selectors.rank)
            .map(|el| digits_only(&el.text().collect::<String>()))
            .collect();
        let metas: Vec<ElementRef> = document.select(&selectors.meta).collect();

        for (position, title_block) in document.select(&selectors.title).enumerate() {
            let title = title(&title_block, position, &mut extraction);
            let link = title_block
                .value()
                .attr("href")
                .ok_or(ScrapeError::MissingLink { page, position })?
                .to_string();

            let rank = match ranks.get(position) {
                Some(rank) => rank.clone(),
                None => {
                    extraction.note(position, Field::Rank, FieldFault::MissingField, "");
                    String::new()
                }
            };

            let (score, author, comments) = match metas.get(position) {
                Some(meta) => (
                    score(meta, selectors, position, &mut extraction),
                    author(meta, selectors, position, &mut extraction),
                    comments(meta, selectors, position, &mut extraction),
                ),
                None => {
                    extraction.note(position, Field::Score, FieldFault::MissingField, NO_COUNT);
                    extraction.note(position, Field::Author, FieldFault::MissingField, NO_USER);
                    extraction.note(position, Field::Comments, FieldFault::MissingField, NO_COUNT);
                    (NO_COUNT.to_string(), NO_USER.to_string(), NO_COUNT.to_string())
                }
            };

            extraction.push(Entry {
                title,
                link,
                score,
                author,
                comments,
                rank,
            });
        }

        Ok(extraction)
    }
}

fn title(block: &ElementRef, position: usize, extraction: &mut PageExtraction) -> String {
    let text: String = block.text().collect();
    let text = text.trim_start();

    if text.is_empty() {
        extraction.note(position, Field::Title, FieldFault::MissingField, BLANK_TITLE);
        return BLANK_TITLE.to_string();
    }

    let (title, truncated) = truncate_text(text);
    if truncated {
        extraction.note(position, Field::Title, FieldFault::Truncated, title.as_str());
    }
    title
}

fn score(
    meta: &ElementRef,
    selectors: &Selectors,
    position: usize,
    extraction: &mut PageExtraction,
) -> String {
    let Some(score) = meta.select(&selectors.score).next() else {
        extraction.note(position, Field::Score, FieldFault::MissingField, NO_COUNT);
        return NO_COUNT.to_string();
    };

    match count_digits(&score.text().collect::<String>()) {
        Some(points) => points,
        None => {
            extraction.note(position, Field::Score, FieldFault::MalformedNumeric, NO_COUNT);
            NO_COUNT.to_string()
        }
    }
}

fn author(
    meta: &ElementRef,
    selectors: &Selectors,
    position: usize,
    extraction: &mut PageExtraction,
) -> String {
    let Some(user) = meta.select(&selectors.author).next() else {
        extraction.note(position, Field::Author, FieldFault::MissingField, NO_USER);
        return NO_USER.to_string();
    };

    let (author, truncated) = truncate_text(&user.text().collect::<String>());
    if truncated {
        extraction.note(position, Field::Author, FieldFault::Truncated, author.as_str());
    }
    author
}

/// The comment link is taken to be the last link in the meta block.
fn comments(
    meta: &ElementRef,
    selectors: &Selectors,
    position: usize,
    extraction: &mut PageExtraction,
) -> String {
    let Some(link) = meta.select(&selectors.link).last() else {
        extraction.note(position, Field::Comments, FieldFault::MissingField, NO_COUNT);
        return NO_COUNT.to_string();
    };

    let text: String = link.text().collect();
    let count = text.split(COUNT_SEPARATOR).next().unwrap_or_default();

    match count_digits(count) {
        Some(comments) => comments,
        None => {
            extraction.note(position, Field::Comments, FieldFault::MalformedNumeric, NO_COUNT);
            NO_COUNT.to_string()
        }
    }
}
