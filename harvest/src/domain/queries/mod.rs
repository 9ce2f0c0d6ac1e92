mod project_query;
mod time_entry_query;

pub use project_query::ProjectQuery;
pub use time_entry_query::TimeEntryQuery;

/// Types that render themselves as Harvest query-string parameters.
pub trait HarvestQuery {
    fn as_query_pairs(&self) -> Vec<(&'static str, String)>;
}
