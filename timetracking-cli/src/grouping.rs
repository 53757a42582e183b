use std::collections::{HashMap, HashSet};
use std::fmt;

use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use harvest::domain::TimeEntry;

use crate::calendar::WorkCalendar;

/// Bucketing resolution for grouped reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Granularity {
    Day,
    Week,
    Month,
    Year,
}

impl Granularity {
    /// Bucket key for an already shifted workday. Week keys are
    /// zero-padded ISO weeks so lexicographic order is chronological.
    fn key(self, date: NaiveDate) -> String {
        match self {
            Self::Day => date.format("%Y-%m-%d").to_string(),
            Self::Week => {
                let week = date.iso_week();
                format!("{}-W{:02}", week.year(), week.week())
            }
            Self::Month => date.format("%Y-%m").to_string(),
            Self::Year => date.format("%Y").to_string(),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        };
        f.write_str(name)
    }
}

/// Buckets entries by the key of their shifted date, and reports how many
/// distinct workdays the input spans. Grouping coarser than a day never
/// collapses that count; entries without a date are excluded.
pub fn group_entries(
    calendar: &WorkCalendar,
    entries: Vec<TimeEntry>,
    granularity: Granularity,
) -> (usize, HashMap<String, Vec<TimeEntry>>) {
    let mut buckets: HashMap<String, Vec<TimeEntry>> = HashMap::new();
    let mut days: HashSet<NaiveDate> = HashSet::new();

    for mut entry in entries {
        let Some(date) = entry.spent_date else {
            continue;
        };

        // Shifting again is a no-op for entries the collector already moved.
        let day = calendar.shift_to_workday(date);
        entry.spent_date = Some(day);
        days.insert(day);

        buckets.entry(granularity.key(day)).or_default().push(entry);
    }

    (days.len(), buckets)
}
