use crate::{
    config::{Config, SourceType},
    country::Country,
    source::{file::FileSource, rest::RestSource, CountrySource, LOAD_ERROR},
    time::{now, WINDOW_MINUTES},
    ui::types::Phase,
    window::{categorize_window, Groups},
};
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Debug, Clone)]
pub struct State {
    pub countries: Option<Vec<Country>>,
    pub phase: Phase,
    pub window_minutes: i32,
    pub redraw: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            countries: None,
            phase: Phase::default(),
            window_minutes: WINDOW_MINUTES,
            redraw: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProtectedState(Arc<Mutex<State>>);

impl std::ops::Deref for ProtectedState {
    type Target = Arc<Mutex<State>>;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl ProtectedState {
    // The cache is written exactly once per process. A failed load leaves it
    // unset and parks the UI in the error phase until the program is
    // restarted.
    pub async fn load(&self, config: Config) {
        let result = match config.source_type() {
            SourceType::Rest => RestSource::new(&config).countries().await,
            SourceType::File => FileSource::new(&config).countries().await,
        };

        let mut inner = self.lock().await;
        inner.window_minutes = config.window_minutes();

        match result {
            Ok(countries) => {
                inner.countries = Some(countries);
                inner.phase = Phase::Ready;
            }
            Err(e) => {
                inner.phase = Phase::Error(format!("{} ({})", LOAD_ERROR, e));
            }
        }

        inner.redraw = true;
    }

    pub async fn groups(&self) -> Groups {
        let inner = self.lock().await;
        categorize_window(inner.countries.as_deref(), now(), inner.window_minutes)
    }

    pub async fn phase(&self) -> Phase {
        self.lock().await.phase.clone()
    }
}
