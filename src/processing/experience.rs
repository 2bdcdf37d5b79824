//! Experience-years estimation and seniority banding
//!
//! Durations resolve to whole years from the 4-digit endpoints of each
//! entry; an open end ("Present", or no end at all) runs to the injected
//! `today`. Entries are summed additively: overlapping tenures are counted
//! twice on purpose (total tenure, not calendar coverage).

use crate::processing::candidate::ExperienceEntry;
use chrono::{Datelike, NaiveDate};
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Seniority {
    Entry,
    Mid,
    Senior,
    Lead,
}

impl std::fmt::Display for Seniority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seniority::Entry => write!(f, "Entry-level"),
            Seniority::Mid => write!(f, "Mid-level"),
            Seniority::Senior => write!(f, "Senior"),
            Seniority::Lead => write!(f, "Lead/Principal"),
        }
    }
}

/// Years covered by a single entry, zero when no start year is recognizable
pub fn entry_years(entry: &ExperienceEntry, today: NaiveDate) -> u32 {
    let year_re = Regex::new(r"\b(19|20)\d{2}\b").unwrap();
    let first_year = |text: &str| {
        year_re
            .find(text)
            .and_then(|m| m.as_str().parse::<i32>().ok())
    };

    let Some(start) = entry.start.as_deref().and_then(first_year) else {
        return 0;
    };
    let end = match entry.end.as_deref() {
        None => today.year(),
        Some(text) if is_open_ended(text) => today.year(),
        Some(text) => first_year(text).unwrap_or_else(|| today.year()),
    };

    (end - start).max(0) as u32
}

/// Additive total across all entries
pub fn total_years(entries: &[ExperienceEntry], today: NaiveDate) -> u32 {
    entries.iter().map(|e| entry_years(e, today)).sum()
}

fn is_open_ended(end: &str) -> bool {
    let lowered = end.to_lowercase();
    lowered.contains("present") || lowered.contains("current") || lowered.contains("now")
}

/// Band derived from total years alone
pub fn seniority_from_years(years: u32) -> Seniority {
    match years {
        0..=1 => Seniority::Entry,
        2..=4 => Seniority::Mid,
        5..=10 => Seniority::Senior,
        _ => Seniority::Lead,
    }
}

/// Band with title keywords taking precedence over the year count
pub fn estimate_seniority(title: &str, years: u32) -> Seniority {
    let title = title.to_lowercase();
    let has_any = |words: &[&str]| words.iter().any(|w| title.contains(w));

    if has_any(&["lead", "principal", "architect", "director", "vp", "head of"]) {
        Seniority::Lead
    } else if has_any(&["senior", "sr.", "staff"]) {
        Seniority::Senior
    } else if has_any(&["junior", "jr.", "intern", "trainee"]) {
        Seniority::Entry
    } else {
        seniority_from_years(years)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
    }

    fn entry(start: Option<&str>, end: Option<&str>) -> ExperienceEntry {
        ExperienceEntry {
            title: "Engineer".to_string(),
            organization: "Acme".to_string(),
            start: start.map(str::to_string),
            end: end.map(str::to_string),
            bullets: Vec::new(),
        }
    }

    #[test]
    fn test_closed_range() {
        assert_eq!(entry_years(&entry(Some("2021"), Some("2023")), today()), 2);
        assert_eq!(entry_years(&entry(Some("Jan 2019"), Some("Mar 2024")), today()), 5);
    }

    #[test]
    fn test_open_range_runs_to_injected_today() {
        assert_eq!(entry_years(&entry(Some("2020"), Some("Present")), today()), 6);
        assert_eq!(entry_years(&entry(Some("2020"), None), today()), 6);
    }

    #[test]
    fn test_unparseable_start_contributes_zero() {
        assert_eq!(entry_years(&entry(None, Some("2023")), today()), 0);
        assert_eq!(entry_years(&entry(Some("a while ago"), Some("2023")), today()), 0);
    }

    #[test]
    fn test_reversed_range_clamps_to_zero() {
        assert_eq!(entry_years(&entry(Some("2024"), Some("2020")), today()), 0);
    }

    #[test]
    fn test_totals_are_additive_without_dedup() {
        // Overlapping 2020-2023 and 2021-2023 count 3 + 2, not calendar union 3.
        let entries = vec![
            entry(Some("2020"), Some("2023")),
            entry(Some("2021"), Some("2023")),
        ];
        assert_eq!(total_years(&entries, today()), 5);
    }

    #[test]
    fn test_seniority_bands() {
        assert_eq!(seniority_from_years(0), Seniority::Entry);
        assert_eq!(seniority_from_years(1), Seniority::Entry);
        assert_eq!(seniority_from_years(2), Seniority::Mid);
        assert_eq!(seniority_from_years(4), Seniority::Mid);
        assert_eq!(seniority_from_years(5), Seniority::Senior);
        assert_eq!(seniority_from_years(10), Seniority::Senior);
        assert_eq!(seniority_from_years(11), Seniority::Lead);
    }

    #[test]
    fn test_title_overrides_years() {
        assert_eq!(estimate_seniority("Principal Engineer", 1), Seniority::Lead);
        assert_eq!(estimate_seniority("Senior Developer", 1), Seniority::Senior);
        assert_eq!(estimate_seniority("Junior Analyst", 8), Seniority::Entry);
        assert_eq!(estimate_seniority("Software Engineer", 8), Seniority::Senior);
    }
}
