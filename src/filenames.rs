use crate::config::CONFIG_FILENAME;
use std::path::PathBuf;

pub fn minuit_config() -> PathBuf {
    dirs::home_dir().unwrap_or("/".into()).join(CONFIG_FILENAME)
}
