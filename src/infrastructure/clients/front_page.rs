use super::PageSource;
use crate::error::Result;
use reqwest::Client;
use tracing::{debug, instrument};

pub struct FrontPageClient {
    client: Client,
    base_url: String,
}

impl FrontPageClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

impl PageSource for FrontPageClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_page(&self, page: usize) -> Result<String> {
        let response = self
            .client
            .get(&self.base_url)
            .query(&[("p", page)])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        debug!("Fetched page {page} ({} bytes)", body.len());

        Ok(body)
    }
}
