mod common;
use common::ev;

use rattendance::core::logic::Core;
use rattendance::models::{EmployeeReport, FileReport};
use rattendance::ui::Reporter;

fn sample_report() -> EmployeeReport {
    let days = Core::build_day_reports(&[
        ev("2024-10-15 09:00:00", "C/In"),
        ev("2024-10-15 12:00:00", "C/Out"),
        ev("2024-10-15 12:30:00", "C/In"),
        ev("2024-10-16 08:00:00", "C/In"),
    ]);

    EmployeeReport {
        employee: "Jane Doe".to_string(),
        files: vec![
            FileReport {
                file_name: "AttendanceLogs_2024-10-16.csv".to_string(),
                days,
            },
            FileReport {
                file_name: "AttendanceLogs_2024-10-09.csv".to_string(),
                days: Vec::new(),
            },
        ],
    }
}

#[test]
fn test_plain_render_layout() {
    let out = Reporter::new(false, "*").render(&sample_report());

    assert!(!out.contains('\x1b'), "plain output must not carry ANSI codes");
    assert!(out.contains("******************* Timelogs for Jane Doe *********************"));

    let lines: Vec<&str> = out.lines().collect();
    let d16 = lines
        .iter()
        .position(|l| *l == "2024-10-16 08:00:00 C/In")
        .expect("day 16 header");
    assert_eq!(lines[d16 + 1], "         08:00:00 C/In");

    assert!(out.contains("         Total Hours Worked: 3.5"));
    assert!(out.contains("         12:00:00 C/Out\n         12:30:00 C/In\n         break: 30 min(s)"));
    assert!(out.contains("         Total Break Min(s): 30"));
    assert_eq!(out.matches("**No out**").count(), 1);
    assert!(out.contains("No events for Jane Doe"));
}

#[test]
fn test_colored_render_paints_statuses() {
    let out = Reporter::new(true, "").render(&sample_report());

    assert!(out.contains("\x1b[32mC/In\x1b[0m"));
    assert!(out.contains("\x1b[31mC/Out\x1b[0m"));
    assert!(out.contains("*******************"));
}
