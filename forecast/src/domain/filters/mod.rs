mod assignments_filter;

pub use assignments_filter::AssignmentsFilter;

pub trait ForecastFilter {
    fn as_query(&self) -> String;
}
