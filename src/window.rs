use crate::{
    country::{sort_entries, Country, DisplayEntry},
    offset::{local_time, parse_offset},
    time::{MINUTES_IN_DAY, WINDOW_MINUTES},
};
use chrono::Timelike;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Groups {
    past_hour: Vec<DisplayEntry>,
    next_hour: Vec<DisplayEntry>,
}

impl Groups {
    pub fn past_hour(&self) -> Vec<DisplayEntry> {
        self.past_hour.clone()
    }

    pub fn next_hour(&self) -> Vec<DisplayEntry> {
        self.next_hour.clone()
    }
}

fn minutes_of_day(instant: &chrono::DateTime<chrono::Utc>) -> i32 {
    (instant.hour() * 60 + instant.minute()) as i32
}

pub fn categorize(cache: Option<&[Country]>, utc_now: chrono::DateTime<chrono::Utc>) -> Groups {
    categorize_window(cache, utc_now, WINDOW_MINUTES)
}

pub fn categorize_window(
    cache: Option<&[Country]>,
    utc_now: chrono::DateTime<chrono::Utc>,
    window_minutes: i32,
) -> Groups {
    let countries = match cache {
        Some(countries) => countries,
        None => return Groups::default(),
    };

    let mut past_hour = Vec::new();
    let mut next_hour = Vec::new();

    for country in countries {
        // The first timezone string that parses wins, even when a later one
        // would also land in a window. Countries with no parseable timezone
        // are skipped.
        let offset = match country.timezones().iter().find_map(|tz| parse_offset(tz)) {
            Some(offset) => offset,
            None => continue,
        };

        let local = local_time(utc_now, offset);
        let minutes = minutes_of_day(&local);

        let entry = DisplayEntry::new(
            country.name(),
            country.flag(),
            local.format("%H:%M").to_string(),
        );

        if minutes < window_minutes {
            past_hour.push(entry);
        } else if minutes >= MINUTES_IN_DAY - window_minutes {
            next_hour.push(entry);
        }
    }

    past_hour.sort_by(sort_entries);
    next_hour.sort_by(sort_entries);

    Groups {
        past_hour,
        next_hour,
    }
}

#[cfg(test)]
mod tests {
    use crate::country::Country;

    fn instant(s: &str) -> chrono::DateTime<chrono::Utc> {
        use std::str::FromStr;
        chrono::DateTime::<chrono::Utc>::from_str(s).unwrap()
    }

    #[test]
    fn test_categorize_unset_cache() {
        use super::categorize;

        let groups = categorize(None, instant("2024-01-01T00:15:00Z"));
        assert!(groups.past_hour().is_empty());
        assert!(groups.next_hour().is_empty());

        let groups = categorize(None, instant("2024-01-01T23:50:00Z"));
        assert!(groups.past_hour().is_empty());
        assert!(groups.next_hour().is_empty());
    }

    #[test]
    fn test_categorize_past_hour() {
        use super::categorize;

        let cache = vec![Country::build("Testland", Some("🏳️"), &["UTC+00:00"])];

        let groups = categorize(Some(&cache), instant("2024-01-01T00:15:00Z"));
        let past = groups.past_hour();
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].country(), "Testland");
        assert_eq!(past[0].flag(), "🏳️");
        assert_eq!(past[0].time(), "00:15");
        assert!(groups.next_hour().is_empty());
    }

    #[test]
    fn test_categorize_next_hour() {
        use super::categorize;

        let cache = vec![Country::build("Testland", Some("🏳️"), &["UTC+00:00"])];

        let groups = categorize(Some(&cache), instant("2024-01-01T23:50:00Z"));
        let next = groups.next_hour();
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].country(), "Testland");
        assert_eq!(next[0].time(), "23:50");
        assert!(groups.past_hour().is_empty());
    }

    #[test]
    fn test_categorize_outside_window() {
        use super::categorize;

        let cache = vec![Country::build("Testland", Some("🏳️"), &["UTC+00:00"])];

        let groups = categorize(Some(&cache), instant("2024-01-01T12:00:00Z"));
        assert!(groups.past_hour().is_empty());
        assert!(groups.next_hour().is_empty());

        // boundary: exactly on the hour after midnight is excluded
        let groups = categorize(Some(&cache), instant("2024-01-01T01:00:00Z"));
        assert!(groups.past_hour().is_empty());

        // boundary: exactly an hour before midnight is included
        let groups = categorize(Some(&cache), instant("2024-01-01T23:00:00Z"));
        assert_eq!(groups.next_hour().len(), 1);
    }

    #[test]
    fn test_first_parseable_timezone_wins() {
        use super::categorize;

        // local time in UTC+2 is 00:05
        let cache = vec![Country::build(
            "Multizone",
            None,
            &["garbage", "UTC+02:00", "UTC-11"],
        )];

        let groups = categorize(Some(&cache), instant("2024-01-01T22:05:00Z"));
        let past = groups.past_hour();
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].time(), "00:05");
        assert_eq!(past[0].flag(), crate::country::FALLBACK_FLAG);
        assert!(groups.next_hour().is_empty());
    }

    #[test]
    fn test_unparseable_countries_skipped() {
        use super::categorize;

        let cache = vec![
            Country::build("Nowhere", None, &["garbage", "also garbage"]),
            Country::build("Zoneless", None, &[]),
            Country::build("Testland", None, &["UTC"]),
        ];

        let groups = categorize(Some(&cache), instant("2024-01-01T00:30:00Z"));
        let past = groups.past_hour();
        assert_eq!(past.len(), 1);
        assert_eq!(past[0].country(), "Testland");
    }

    #[test]
    fn test_groups_sorted_by_name() {
        use super::categorize;

        let cache = vec![
            Country::build("zimbabwe", None, &["UTC+00:00"]),
            Country::build("Albania", None, &["UTC+00:00"]),
            Country::build("mali", None, &["UTC+00:00"]),
            Country::build("Chad", None, &["UTC+00:00"]),
        ];

        let groups = categorize(Some(&cache), instant("2024-01-01T00:30:00Z"));
        let names = groups
            .past_hour()
            .iter()
            .map(|entry| entry.country())
            .collect::<Vec<String>>();
        assert_eq!(names, vec!["Albania", "Chad", "mali", "zimbabwe"]);
    }

    #[test]
    fn test_window_invariants() {
        use super::{categorize, minutes_of_day};
        use crate::offset::{local_time, parse_offset};
        use crate::time::{MINUTES_IN_DAY, WINDOW_MINUTES};

        let mut cache = Vec::new();
        for x in 0..200 {
            let hours = rand::random::<u32>() % 15;
            let minutes = [0, 0, 0, 30, 45][rand::random::<usize>() % 5];
            let sign = if rand::random::<bool>() { "+" } else { "-" };
            cache.push(Country::build(
                &format!("Country {}", x),
                None,
                &[&format!("UTC{}{:02}:{:02}", sign, hours, minutes)],
            ));
        }

        let utc_now = instant("2024-06-15T00:00:00Z")
            + chrono::Duration::minutes((rand::random::<u32>() % MINUTES_IN_DAY as u32).into());
        let groups = categorize(Some(&cache), utc_now);

        for entry in groups.past_hour() {
            let offset = cache
                .iter()
                .find(|c| c.name() == entry.country())
                .and_then(|c| c.timezones().iter().find_map(|tz| parse_offset(tz)))
                .unwrap();
            assert!(minutes_of_day(&local_time(utc_now, offset)) < WINDOW_MINUTES);
        }

        for entry in groups.next_hour() {
            let offset = cache
                .iter()
                .find(|c| c.name() == entry.country())
                .and_then(|c| c.timezones().iter().find_map(|tz| parse_offset(tz)))
                .unwrap();
            assert!(
                minutes_of_day(&local_time(utc_now, offset)) >= MINUTES_IN_DAY - WINDOW_MINUTES
            );
        }

        let past_names = groups
            .past_hour()
            .iter()
            .map(|entry| entry.country())
            .collect::<Vec<String>>();
        for entry in groups.next_hour() {
            assert!(!past_names.contains(&entry.country()));
        }
    }

    #[test]
    fn test_wider_window() {
        use super::categorize_window;

        let cache = vec![Country::build("Testland", None, &["UTC+00:00"])];

        let groups = categorize_window(Some(&cache), instant("2024-01-01T01:30:00Z"), 120);
        assert_eq!(groups.past_hour().len(), 1);

        let groups = categorize_window(Some(&cache), instant("2024-01-01T22:30:00Z"), 120);
        assert_eq!(groups.next_hour().len(), 1);
    }
}
