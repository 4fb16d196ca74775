pub(crate) mod listing_service;
pub(crate) mod scraping;
pub(crate) mod serializing;
pub(crate) mod trimming;

#[cfg(test)]
pub(crate) mod testing;
