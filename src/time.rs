lazy_static::lazy_static! {
    pub static ref REFRESH_INTERVAL: chrono::Duration = chrono::Duration::seconds(1);
}

pub const MINUTES_IN_DAY: i32 = 24 * 60;
pub const WINDOW_MINUTES: i32 = 60;

pub fn now() -> chrono::DateTime<chrono::Utc> {
    chrono::Utc::now()
}
