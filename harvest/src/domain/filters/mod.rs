mod time_entries_filter;

pub use time_entries_filter::TimeEntriesFilter;

pub trait HarvestFilter {
    fn as_query(&self) -> String;
}
