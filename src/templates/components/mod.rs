pub mod calendar;
pub mod error;
pub mod plans;

pub use calendar::calendar_table;
pub use error::{html_error_response, load_failed_response};
pub use plans::plans_list;
