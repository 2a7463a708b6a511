pub mod file;
pub mod rest;

use crate::country::Country;
use anyhow::Result;
use async_trait::async_trait;

pub const LOAD_ERROR: &str = "Could not load country data";

#[async_trait]
pub trait CountrySource {
    async fn countries(&mut self) -> Result<Vec<Country>>;
}
