use crate::{
    filenames::minuit_config,
    time::{REFRESH_INTERVAL, WINDOW_MINUTES},
};
use chrono::Duration;
use fancy_duration::FancyDuration;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILENAME: &str = ".minuit.conf";
pub const DEFAULT_ENDPOINT: &str = "https://restcountries.com/v3.1/all?fields=name,flag,timezones";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum SourceType {
    #[default]
    Rest,
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    source_type: SourceType,
    endpoint: Option<String>,
    countries_file: Option<std::path::PathBuf>,
    window: Option<FancyDuration<Duration>>,
    refresh_interval: Option<FancyDuration<Duration>>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_type: SourceType::Rest,
            endpoint: None,
            countries_file: None,
            window: None,
            refresh_interval: None,
        }
    }
}

impl Config {
    pub fn load(filename: Option<std::path::PathBuf>) -> Result<Self, anyhow::Error> {
        let path = filename.unwrap_or(minuit_config());
        let mut io = std::fs::OpenOptions::new();
        io.read(true);

        match io.open(path) {
            Ok(io) => Ok(serde_yaml::from_reader(io)?),
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn save(&self, filename: Option<std::path::PathBuf>) -> Result<(), anyhow::Error> {
        let path = filename.unwrap_or(minuit_config());
        let mut io = std::fs::OpenOptions::new();
        io.write(true);
        io.truncate(true);
        io.create(true);
        let io = io.open(path)?;

        Ok(serde_yaml::to_writer(io, self)?)
    }

    pub fn set_source_type(&mut self, typ: SourceType) {
        self.source_type = typ;
    }

    pub fn source_type(&self) -> SourceType {
        self.source_type.clone()
    }

    pub fn set_endpoint(&mut self, endpoint: Option<String>) {
        self.endpoint = endpoint;
    }

    pub fn endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or(DEFAULT_ENDPOINT.to_string())
    }

    pub fn set_countries_file(&mut self, countries_file: Option<std::path::PathBuf>) {
        self.countries_file = countries_file;
    }

    pub fn countries_file(&self) -> Option<std::path::PathBuf> {
        self.countries_file.clone()
    }

    pub fn set_window(&mut self, window: Option<FancyDuration<Duration>>) {
        self.window = window;
    }

    pub fn window_minutes(&self) -> i32 {
        match &self.window {
            Some(window) => window.duration().num_minutes() as i32,
            None => WINDOW_MINUTES,
        }
    }

    pub fn set_refresh_interval(&mut self, refresh_interval: Option<FancyDuration<Duration>>) {
        self.refresh_interval = refresh_interval;
    }

    pub fn refresh_interval(&self) -> Duration {
        match &self.refresh_interval {
            Some(refresh_interval) => refresh_interval.duration(),
            None => *REFRESH_INTERVAL,
        }
    }
}
