pub mod calendar_date;
pub mod log_query;
