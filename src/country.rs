use serde::{Deserialize, Serialize};

pub const FALLBACK_FLAG: &str = "🏳️";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountryName {
    common: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    name: CountryName,
    flag: Option<String>,
    timezones: Vec<String>,
}

impl Country {
    pub fn build(name: &str, flag: Option<&str>, timezones: &[&str]) -> Self {
        Self {
            name: CountryName {
                common: name.to_string(),
            },
            flag: flag.map(|f| f.to_string()),
            timezones: timezones.iter().map(|tz| tz.to_string()).collect(),
        }
    }

    pub fn name(&self) -> String {
        self.name.common.clone()
    }

    pub fn flag(&self) -> String {
        self.flag.clone().unwrap_or(FALLBACK_FLAG.to_string())
    }

    pub fn timezones(&self) -> Vec<String> {
        self.timezones.clone()
    }
}

// The countries payload is tolerated element by element: anything that
// doesn't match the Country shape (no name, timezones not a sequence) is
// dropped, never an error.
pub fn from_payload(payload: Vec<serde_json::Value>) -> Vec<Country> {
    payload
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect()
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayEntry {
    country: String,
    flag: String,
    time: String,
}

impl DisplayEntry {
    pub fn new(country: String, flag: String, time: String) -> Self {
        Self {
            country,
            flag,
            time,
        }
    }

    pub fn country(&self) -> String {
        self.country.clone()
    }

    pub fn flag(&self) -> String {
        self.flag.clone()
    }

    pub fn time(&self) -> String {
        self.time.clone()
    }

    pub fn line(&self) -> String {
        format!("{} {} ({})", self.flag, self.country, self.time)
    }
}

pub fn sort_entries(a: &DisplayEntry, b: &DisplayEntry) -> std::cmp::Ordering {
    a.country().to_lowercase().cmp(&b.country().to_lowercase())
}
