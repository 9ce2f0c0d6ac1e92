mod project;
mod queries;
mod task;
mod time_entry;

pub use project::*;
pub use queries::*;
pub use task::*;
pub use time_entry::*;
