use crate::config::cli::Args;
use crate::error::{Result, ScrapeError};
use reqwest::Client;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::info;

pub(crate) mod cli;

pub const DEFAULT_BASE_URL: &str = "https://news.ycombinator.com/news";
pub const DEFAULT_PAGE_SIZE: usize = 30;

/// CSS selectors used to locate the title block, meta block and their parts.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    pub title: String,
    pub rank: String,
    pub meta: String,
    pub score: String,
    pub author: String,
    pub link: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            title: "a.storylink, span.titleline > a".to_string(),
            rank: "span.rank".to_string(),
            meta: ".subtext".to_string(),
            score: "span.score".to_string(),
            author: "a.hnuser".to_string(),
            link: "a".to_string(),
        }
    }
}

/// Where the listing lives and how it is laid out.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteProfile {
    pub base_url: String,
    pub page_size: usize,
    pub selectors: SelectorConfig,
}

impl Default for SiteProfile {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            selectors: SelectorConfig::default(),
        }
    }
}

impl SiteProfile {
    pub fn load(path: &Path) -> Result<Self> {
        let profile: SiteProfile = serde_json::from_str(&std::fs::read_to_string(path)?)?;
        if profile.page_size == 0 {
            return Err(ScrapeError::Validation(
                "page_size must be at least 1".to_string(),
            ));
        }
        info!("Loaded site profile from {:?}", path);
        Ok(profile)
    }
}

pub struct Config {
    pub args: Args,
    pub profile: SiteProfile,
    pub http_client: Client,
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        let profile = match &args.profile {
            Some(path) => SiteProfile::load(path)?,
            None => SiteProfile::default(),
        };

        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self {
            args,
            profile,
            http_client,
        })
    }
}
