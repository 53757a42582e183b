use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use forecast::domain::Assignment;
use harvest::domain::TimeEntry;

use crate::grouping::Granularity;

/// Baseline for the expected-hours line.
const HOURS_PER_WORKDAY: f64 = 8.0;

pub fn print_days(days: usize, entries: &[TimeEntry]) {
    let mut per_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for entry in entries {
        if let Some(date) = entry.spent_date {
            *per_day.entry(date).or_default() += entry.hours;
        }
    }

    for (date, hours) in &per_day {
        println!(
            "{}  {}  {:>6.2}",
            date.format("%Y-%m-%d"),
            date.format("%a"),
            hours
        );
    }

    let total: f64 = per_day.values().sum();
    let expected = days as f64 * HOURS_PER_WORKDAY;
    println!();
    println!(
        "{} workdays, {:.2}h tracked, {:.2}h expected ({:+.2}h)",
        days,
        total,
        expected,
        total - expected
    );
}

pub fn print_grouped(
    days: usize,
    groups: &HashMap<String, Vec<TimeEntry>>,
    granularity: Granularity,
    workweek_len: u32,
) {
    let mut keys: Vec<&String> = groups.keys().collect();
    keys.sort();

    for key in &keys {
        let bucket = &groups[*key];
        let hours: f64 = bucket.iter().map(|e| e.hours).sum();
        let tracked = bucket.iter().filter(|e| !e.is_placeholder()).count();
        println!("{}  {:>7.2}h  ({} entries)", key, hours, tracked);
    }

    let total: f64 = groups.values().flatten().map(|e| e.hours).sum();
    println!();
    println!(
        "{} workdays in {} {} buckets, {:.2}h tracked",
        days,
        keys.len(),
        granularity,
        total
    );
    if granularity == Granularity::Week {
        println!(
            "a full {}-day workweek is {:.2}h",
            workweek_len,
            f64::from(workweek_len) * HOURS_PER_WORKDAY
        );
    }
}

pub fn print_assignments(project: &str, assignments: &[Assignment]) {
    if assignments.is_empty() {
        println!("no assignments for '{}'", project);
        return;
    }

    for assignment in assignments {
        let until = assignment
            .end_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "open-ended".to_string());
        let allocation = assignment
            .hours_per_day()
            .map(|h| format!("{:.1}h/day", h))
            .unwrap_or_else(|| "unallocated".to_string());

        match &assignment.notes {
            Some(notes) => println!(
                "{} .. {}  {}  {}",
                assignment.start_date.format("%Y-%m-%d"),
                until,
                allocation,
                notes
            ),
            None => println!(
                "{} .. {}  {}",
                assignment.start_date.format("%Y-%m-%d"),
                until,
                allocation
            ),
        }
    }
}
