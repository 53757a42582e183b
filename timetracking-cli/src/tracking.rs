use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;
use harvest::{
    domain::{TimeEntriesFilter, TimeEntriesPage, TimeEntry},
    HarvestClient, HarvestError,
};

use crate::calendar::WorkCalendar;

/// Paginated, user-filtered read access to tracked time.
#[async_trait]
pub trait TimeEntrySource {
    async fn time_entries(
        &self,
        filter: &TimeEntriesFilter,
    ) -> Result<TimeEntriesPage, HarvestError>;
}

#[async_trait]
impl TimeEntrySource for HarvestClient {
    async fn time_entries(
        &self,
        filter: &TimeEntriesFilter,
    ) -> Result<TimeEntriesPage, HarvestError> {
        self.get_time_entries(filter).await
    }
}

/// Pulls entries page by page until `amount` distinct workdays have been
/// seen, rewriting every entry's date onto its workday along the way.
/// With `include_empty_days`, workdays without tracked time are
/// represented by zero-duration placeholders, so the result always spans
/// exactly `amount` workdays.
///
/// Relies on the source returning entries in non-ascending date order:
/// once the quota is full, the first unseen workday ends the collection
/// and the rest of the stream is discarded.
pub async fn collect_recent_days<S: TimeEntrySource>(
    source: &S,
    calendar: &WorkCalendar,
    user_id: i64,
    amount: usize,
    from: NaiveDate,
    include_empty_days: bool,
) -> Result<(usize, Vec<TimeEntry>), HarvestError> {
    let mut entries: Vec<TimeEntry> = Vec::with_capacity(amount);
    let mut seen_days: HashSet<NaiveDate> = HashSet::new();

    if amount == 0 {
        return Ok((0, entries));
    }

    if include_empty_days {
        let mut day = from;
        loop {
            day = calendar.shift_to_workday(day);
            seen_days.insert(day);
            entries.push(TimeEntry::placeholder(day));
            if seen_days.len() == amount {
                break;
            }
            day = day
                .pred_opt()
                .expect("calendar underflow while walking back over workdays");
        }
    }

    let mut filter = TimeEntriesFilter::new().user_id(user_id).to(from);

    'pages: loop {
        let page = source.time_entries(&filter).await?;

        for mut entry in page.time_entries {
            let Some(date) = entry.spent_date else {
                continue;
            };

            let day = calendar.shift_to_workday(date);
            entry.spent_date = Some(day);

            if !seen_days.contains(&day) {
                if seen_days.len() == amount {
                    break 'pages;
                }
                seen_days.insert(day);
            }
            entries.push(entry);
        }

        match page.next_page {
            Some(next) => filter.page = Some(next),
            None => break,
        }
    }

    Ok((seen_days.len(), entries))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Serves a fixed sequence of pages, keyed by the requested cursor,
    /// and counts how often it is asked.
    struct MockSource {
        pages: Vec<TimeEntriesPage>,
        calls: AtomicUsize,
    }

    impl MockSource {
        fn with_pages(pages: Vec<TimeEntriesPage>) -> Self {
            Self {
                pages,
                calls: AtomicUsize::new(0),
            }
        }

        fn empty() -> Self {
            Self::with_pages(vec![TimeEntriesPage {
                time_entries: vec![],
                next_page: None,
            }])
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl TimeEntrySource for MockSource {
        async fn time_entries(
            &self,
            filter: &TimeEntriesFilter,
        ) -> Result<TimeEntriesPage, HarvestError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let index = filter.page.unwrap_or(1) as usize - 1;
            Ok(self.pages[index].clone())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn entry(spent_date: Option<NaiveDate>, hours: f64) -> TimeEntry {
        TimeEntry {
            id: Some(1),
            spent_date,
            hours,
            notes: None,
        }
    }

    fn page(entries: Vec<TimeEntry>, next_page: Option<i64>) -> TimeEntriesPage {
        TimeEntriesPage {
            time_entries: entries,
            next_page,
        }
    }

    fn weekend_calendar() -> WorkCalendar {
        WorkCalendar::new(&["saturday".to_string(), "sunday".to_string()], &[]).unwrap()
    }

    #[tokio::test]
    async fn empty_source_still_yields_full_skeleton() {
        let source = MockSource::empty();
        let calendar = weekend_calendar();

        // 2018-11-26 is a Monday.
        let (days, entries) =
            collect_recent_days(&source, &calendar, 1, 5, date(2018, 11, 26), true)
                .await
                .unwrap();

        assert_eq!(days, 5);
        assert_eq!(entries.len(), 5);
        assert!(entries.iter().all(|e| e.hours == 0.0));

        let expected = [
            date(2018, 11, 26), // Mon
            date(2018, 11, 23), // Fri
            date(2018, 11, 22), // Thu
            date(2018, 11, 21), // Wed
            date(2018, 11, 20), // Tue
        ];
        let dates: Vec<NaiveDate> = entries.iter().filter_map(|e| e.spent_date).collect();
        assert_eq!(dates, expected);
    }

    #[tokio::test]
    async fn stops_paging_once_quota_is_full() {
        let source = MockSource::with_pages(vec![
            page(
                vec![
                    entry(Some(date(2018, 11, 23)), 8.0),
                    entry(Some(date(2018, 11, 22)), 8.0),
                ],
                Some(2),
            ),
            page(vec![entry(Some(date(2018, 11, 21)), 8.0)], Some(3)),
            page(vec![entry(Some(date(2018, 11, 20)), 8.0)], None),
        ]);
        let calendar = weekend_calendar();

        let (days, entries) =
            collect_recent_days(&source, &calendar, 1, 2, date(2018, 11, 23), false)
                .await
                .unwrap();

        assert_eq!(days, 2);
        assert_eq!(entries.len(), 2);
        // Page 2 is fetched, its first unseen day ends collection; page 3 never is.
        assert_eq!(source.call_count(), 2);
    }

    #[tokio::test]
    async fn discards_rest_of_page_after_quota() {
        let source = MockSource::with_pages(vec![page(
            vec![
                entry(Some(date(2018, 11, 23)), 8.0),
                entry(Some(date(2018, 11, 22)), 7.0),
                entry(Some(date(2018, 11, 21)), 6.0),
            ],
            None,
        )]);
        let calendar = weekend_calendar();

        let (days, entries) =
            collect_recent_days(&source, &calendar, 1, 2, date(2018, 11, 23), false)
                .await
                .unwrap();

        assert_eq!(days, 2);
        let dates: Vec<NaiveDate> = entries.iter().filter_map(|e| e.spent_date).collect();
        assert_eq!(dates, vec![date(2018, 11, 23), date(2018, 11, 22)]);
    }

    #[tokio::test]
    async fn count_never_exceeds_amount() {
        let source = MockSource::with_pages(vec![page(
            (0..10u64)
                .map(|i| entry(Some(date(2018, 11, 23) - chrono::Days::new(i * 7)), 4.0))
                .collect(),
            None,
        )]);
        let calendar = weekend_calendar();

        let (days, _) = collect_recent_days(&source, &calendar, 1, 3, date(2018, 11, 23), false)
            .await
            .unwrap();

        assert_eq!(days, 3);
    }

    #[tokio::test]
    async fn dateless_entries_are_dropped() {
        let source = MockSource::with_pages(vec![page(
            vec![
                entry(Some(date(2018, 11, 23)), 8.0),
                entry(None, 99.0),
                entry(Some(date(2018, 11, 22)), 8.0),
            ],
            None,
        )]);
        let calendar = weekend_calendar();

        let (days, entries) =
            collect_recent_days(&source, &calendar, 1, 5, date(2018, 11, 23), false)
                .await
                .unwrap();

        assert_eq!(days, 2);
        assert_eq!(entries.len(), 2);
        let total: f64 = entries.iter().map(|e| e.hours).sum();
        assert_eq!(total, 16.0);
    }

    #[tokio::test]
    async fn repeated_days_keep_every_entry() {
        let source = MockSource::with_pages(vec![page(
            vec![
                entry(Some(date(2018, 11, 23)), 5.0),
                entry(Some(date(2018, 11, 23)), 3.0),
            ],
            None,
        )]);
        let calendar = weekend_calendar();

        let (days, entries) =
            collect_recent_days(&source, &calendar, 1, 1, date(2018, 11, 23), false)
                .await
                .unwrap();

        assert_eq!(days, 1);
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn weekend_entries_land_on_friday() {
        let source = MockSource::with_pages(vec![page(
            vec![
                entry(Some(date(2018, 11, 24)), 2.0), // Saturday
                entry(Some(date(2018, 11, 23)), 8.0), // Friday
            ],
            None,
        )]);
        let calendar = weekend_calendar();

        let (days, entries) =
            collect_recent_days(&source, &calendar, 1, 5, date(2018, 11, 24), false)
                .await
                .unwrap();

        assert_eq!(days, 1);
        assert!(entries
            .iter()
            .all(|e| e.spent_date == Some(date(2018, 11, 23))));
    }

    #[tokio::test]
    async fn zero_amount_collects_nothing() {
        let source = MockSource::empty();
        let calendar = weekend_calendar();

        let (days, entries) =
            collect_recent_days(&source, &calendar, 1, 0, date(2018, 11, 23), true)
                .await
                .unwrap();

        assert_eq!(days, 0);
        assert!(entries.is_empty());
        assert_eq!(source.call_count(), 0);
    }

    #[tokio::test]
    async fn placeholders_merge_with_tracked_entries() {
        let source = MockSource::with_pages(vec![page(
            vec![entry(Some(date(2018, 11, 23)), 3.0)],
            None,
        )]);
        let calendar = weekend_calendar();

        // Mon 26, Fri 23, Thu 22 make up the three most recent workdays.
        let (days, entries) =
            collect_recent_days(&source, &calendar, 1, 3, date(2018, 11, 26), true)
                .await
                .unwrap();

        assert_eq!(days, 3);
        assert_eq!(entries.len(), 4);
        let friday_hours: f64 = entries
            .iter()
            .filter(|e| e.spent_date == Some(date(2018, 11, 23)))
            .map(|e| e.hours)
            .sum();
        assert_eq!(friday_hours, 3.0);
    }

    #[tokio::test]
    async fn source_errors_abort_without_partial_result() {
        struct FailingSource;

        #[async_trait]
        impl TimeEntrySource for FailingSource {
            async fn time_entries(
                &self,
                _filter: &TimeEntriesFilter,
            ) -> Result<TimeEntriesPage, HarvestError> {
                Err(HarvestError::Unauthorized)
            }
        }

        let calendar = weekend_calendar();
        let result =
            collect_recent_days(&FailingSource, &calendar, 1, 3, date(2018, 11, 23), true).await;
        assert!(matches!(result, Err(HarvestError::Unauthorized)));
    }
}
