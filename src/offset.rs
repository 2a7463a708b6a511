use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref OFFSET_REGEX: Regex = Regex::new(r"^UTC([+-])(\d{2}):?(\d{2})?$").unwrap();
}

// Offsets arrive as raw strings: `UTC`, `UTC±HH`, or `UTC±HH:MM`. Anything
// else parses to None so the caller can skip that timezone entry.
pub fn parse_offset(raw: &str) -> Option<i32> {
    if raw == "UTC" {
        return Some(0);
    }

    let captures = OFFSET_REGEX.captures(raw)?;

    let sign = if &captures[1] == "-" { -1 } else { 1 };
    let hours: i32 = captures[2].parse().ok()?;
    let minutes: i32 = match captures.get(3) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };

    Some(sign * (hours * 60 + minutes))
}

pub fn local_time(
    utc_now: chrono::DateTime<chrono::Utc>,
    offset_minutes: i32,
) -> chrono::DateTime<chrono::Utc> {
    utc_now + chrono::Duration::minutes(offset_minutes.into())
}
