use crate::{
    config::Config,
    country::{self, Country},
    source::CountrySource,
};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone, Default)]
pub struct FileSource {
    filename: Option<PathBuf>,
}

impl FileSource {
    pub fn new(config: &Config) -> Self {
        Self {
            filename: config.countries_file(),
        }
    }

    pub fn at(filename: PathBuf) -> Self {
        Self {
            filename: Some(filename),
        }
    }
}

#[async_trait]
impl CountrySource for FileSource {
    async fn countries(&mut self) -> Result<Vec<Country>> {
        let filename = self.filename.clone().ok_or(anyhow!(
            "no countries file configured; run `minuit config set-countries-file`"
        ))?;

        let mut io = std::fs::OpenOptions::new();
        io.read(true);
        let io = io.open(filename)?;

        let payload: Vec<serde_json::Value> = serde_json::from_reader(io)?;
        Ok(country::from_payload(payload))
    }
}
