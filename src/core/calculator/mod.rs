pub mod breaks;
pub mod day_report;
