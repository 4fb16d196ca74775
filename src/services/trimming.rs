use crate::domain::Entry;
use tracing::{debug, warn};

/// Entries fetched beyond `posts` when `pages` full pages were requested.
pub fn excess_posts(posts: usize, page_size: usize, pages: usize) -> usize {
    (page_size * pages).saturating_sub(posts)
}

/// Drops the surplus from the tail so that a run of full pages yields exactly `posts` entries.
pub fn trim_entries(
    mut entries: Vec<Entry>,
    posts: usize,
    page_size: usize,
    pages: usize,
) -> Vec<Entry> {
    let excess = excess_posts(posts, page_size, pages);
    let keep = entries.len().saturating_sub(excess);
    entries.truncate(keep);
    debug!("Trimmed {excess} excess post(s)");

    if entries.len() != posts {
        warn!(
            "Requested {posts} post(s) but only {} remain after trimming; a page came back short",
            entries.len()
        );
    }

    entries
}
