use log::debug;
use reqwest::Client;

use crate::config::FetchConfig;
use crate::error::{RecipeBoxError, Result};

pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Fetches the page body. Non-success statuses are errors.
    pub async fn fetch(&self, url: &str) -> Result<String> {
        debug!("Fetching {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RecipeBoxError::HttpStatus(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
