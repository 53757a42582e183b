use std::collections::HashSet;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Which calendar days count as workdays: a weekly off-day pattern plus
/// individually excluded dates. Immutable once validated.
#[derive(Debug, Clone)]
pub struct WorkCalendar {
    weekdays_off: HashSet<Weekday>,
    excluded: HashSet<NaiveDate>,
}

#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("invalid weekday '{0}'")]
    InvalidWeekday(String),
    #[error("invalid excluded date '{value}': {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },
    #[error("every weekday is marked as off")]
    EveryDayOff,
}

impl WorkCalendar {
    pub fn new(weekdays_off: &[String], excluded_dates: &[String]) -> Result<Self, CalendarError> {
        let mut off = HashSet::new();
        for name in weekdays_off {
            let weekday = Weekday::from_str(name)
                .map_err(|_| CalendarError::InvalidWeekday(name.clone()))?;
            off.insert(weekday);
        }

        // A full off-week would make the backward shift endless.
        if off.len() > 6 {
            return Err(CalendarError::EveryDayOff);
        }

        let mut excluded = HashSet::new();
        for value in excluded_dates {
            let date = NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|source| {
                CalendarError::InvalidDate {
                    value: value.clone(),
                    source,
                }
            })?;
            excluded.insert(date);
        }

        Ok(Self {
            weekdays_off: off,
            excluded,
        })
    }

    /// True when the date's weekday is off or the date itself is excluded.
    pub fn is_non_workday(&self, date: NaiveDate) -> bool {
        self.weekdays_off.contains(&date.weekday()) || self.excluded.contains(&date)
    }

    /// Walks backward to the nearest workday; a workday maps to itself.
    pub fn shift_to_workday(&self, date: NaiveDate) -> NaiveDate {
        let mut day = date;
        while self.is_non_workday(day) {
            day = day
                .pred_opt()
                .expect("calendar underflow while shifting to a workday");
        }
        day
    }

    pub fn days_off(&self) -> usize {
        self.weekdays_off.len()
    }

    pub fn workweek_len(&self) -> u32 {
        7 - self.weekdays_off.len() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn weekend_calendar() -> WorkCalendar {
        WorkCalendar::new(
            &["saturday".to_string(), "sunday".to_string()],
            &["2018-11-01".to_string()],
        )
        .unwrap()
    }

    #[test]
    fn excluded_date_shifts_to_preceding_workday() {
        let calendar = weekend_calendar();
        // 2018-11-01 is a Thursday, but excluded; Wednesday the 31st is free.
        assert_eq!(
            calendar.shift_to_workday(date(2018, 11, 1)),
            date(2018, 10, 31)
        );
    }

    #[test]
    fn weekend_shifts_to_friday() {
        let calendar = weekend_calendar();
        assert_eq!(
            calendar.shift_to_workday(date(2018, 11, 24)),
            date(2018, 11, 23)
        );
        assert_eq!(
            calendar.shift_to_workday(date(2018, 11, 25)),
            date(2018, 11, 23)
        );
    }

    #[test]
    fn workday_maps_to_itself() {
        let calendar = weekend_calendar();
        assert_eq!(
            calendar.shift_to_workday(date(2018, 11, 23)),
            date(2018, 11, 23)
        );
    }

    #[test]
    fn shift_is_idempotent() {
        let calendar = weekend_calendar();
        let mut day = date(2018, 11, 1);
        for _ in 0..60 {
            let shifted = calendar.shift_to_workday(day);
            assert!(!calendar.is_non_workday(shifted));
            assert_eq!(calendar.shift_to_workday(shifted), shifted);
            day = day.pred_opt().unwrap();
        }
    }

    #[test]
    fn six_off_days_still_terminates() {
        let off: Vec<String> = ["monday", "tuesday", "wednesday", "thursday", "friday", "saturday"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let calendar = WorkCalendar::new(&off, &[]).unwrap();
        // Everything collapses onto the nearest preceding Sunday.
        assert_eq!(
            calendar.shift_to_workday(date(2018, 11, 24)),
            date(2018, 11, 18)
        );
        assert_eq!(calendar.workweek_len(), 1);
    }

    #[test]
    fn rejects_a_fully_off_week() {
        let off: Vec<String> = [
            "monday",
            "tuesday",
            "wednesday",
            "thursday",
            "friday",
            "saturday",
            "sunday",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert!(matches!(
            WorkCalendar::new(&off, &[]),
            Err(CalendarError::EveryDayOff)
        ));
    }

    #[test]
    fn rejects_unknown_weekday_name() {
        let err = WorkCalendar::new(&["caturday".to_string()], &[]).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidWeekday(name) if name == "caturday"));
    }

    #[test]
    fn rejects_unparsable_excluded_date() {
        let err = WorkCalendar::new(&[], &["2018-13-01".to_string()]).unwrap_err();
        assert!(matches!(err, CalendarError::InvalidDate { value, .. } if value == "2018-13-01"));
    }

    #[test]
    fn weekday_names_accept_abbreviations_and_case() {
        let calendar =
            WorkCalendar::new(&["Sat".to_string(), "SUNDAY".to_string()], &[]).unwrap();
        assert_eq!(calendar.days_off(), 2);
        assert_eq!(calendar.workweek_len(), 5);
    }

    #[test]
    fn duplicate_weekday_names_count_once() {
        let calendar =
            WorkCalendar::new(&["sun".to_string(), "sunday".to_string()], &[]).unwrap();
        assert_eq!(calendar.days_off(), 1);
        assert_eq!(calendar.workweek_len(), 6);
    }
}
