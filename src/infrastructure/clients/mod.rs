use crate::error::Result;
use std::future::Future;

pub(crate) mod front_page;

/// Anything that can hand back the raw markup of a listing page by 1-based index.
pub trait PageSource {
    fn fetch_page(&self, page: usize) -> impl Future<Output = Result<String>> + Send;
}
