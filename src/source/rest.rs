use crate::{
    config::Config,
    country::{self, Country},
    source::CountrySource,
};
use anyhow::{anyhow, Result};
use async_trait::async_trait;

#[derive(Debug, Clone)]
pub struct RestSource {
    client: reqwest::Client,
    endpoint: String,
}

impl RestSource {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint(),
        }
    }
}

#[async_trait]
impl CountrySource for RestSource {
    async fn countries(&mut self) -> Result<Vec<Country>> {
        let response = self.client.get(&self.endpoint).send().await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "countries endpoint returned {}",
                response.status()
            ));
        }

        let payload: Vec<serde_json::Value> = response.json().await?;
        Ok(country::from_payload(payload))
    }
}
