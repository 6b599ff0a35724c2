pub mod day_report;
pub mod employee_report;
pub mod event;
pub mod event_status;

pub use day_report::{BreakInterval, DayReport};
pub use employee_report::{EmployeeReport, FileReport};
pub use event::AttendanceEvent;
pub use event_status::EventStatus;
