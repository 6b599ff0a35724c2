#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use rattendance::models::{AttendanceEvent, EventStatus};
use std::fs;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "Name,Date/Time,Status,Location ID,VerifyCode";

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// "2024-10-15 09:00:00" → NaiveDateTime
pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn ev(at: &str, status: &str) -> AttendanceEvent {
    AttendanceEvent::new("Jane Doe", ts(at), EventStatus::from_export_str(status))
}

/// Create `<root>/<folder>/<file>` with the given CSV body (header included).
pub fn write_export(root: &Path, folder: &str, file: &str, rows: &[&str]) -> PathBuf {
    let dir = root.join(folder);
    fs::create_dir_all(&dir).expect("create month folder");

    let mut body = String::from(HEADER);
    body.push('\n');
    for r in rows {
        body.push_str(r);
        body.push('\n');
    }

    let path = dir.join(file);
    fs::write(&path, body).expect("write export file");
    path
}

/// Write a config file pointing to `root` and return its path.
pub fn write_config(dir: &Path, root: &Path, employee: &str) -> PathBuf {
    let path = dir.join("rattendance.conf");
    let yaml = format!(
        "export_root: {}\ndefault_employee: {}\n",
        root.display(),
        employee
    );
    fs::write(&path, yaml).expect("write config");
    path
}

/// Export root with one October folder and three weekly exports.
pub fn october_fixture(root: &Path) {
    write_export(
        root,
        "10 October",
        "AttendanceLogs_2024-10-01.csv",
        &["Jane Doe,2024-10-01 09:00:00,C/In,1,FP"],
    );

    write_export(
        root,
        "10 October",
        "AttendanceLogs_2024-10-08.csv",
        &[
            "Jane Doe,2024-10-08 09:00:00,C/In,1,FP",
            "John Roe,2024-10-08 08:30:00,C/In,1,FP",
            "Jane Doe,2024-10-08 17:00:00,C/Out,1,FP",
        ],
    );

    write_export(
        root,
        "10 October",
        "AttendanceLogs_2024-10-15.csv",
        &[
            "Jane Doe,2024-10-15 18:00:00,C/Out,1,FP",
            "Jane Doe,2024-10-15 13:00:00,C/In,1,FP",
            "Jane Doe,2024-10-15 12:00:00,C/Out,1,FP",
            "Jane Doe,2024-10-15 09:00:00,C/In,1,FP",
            "Jane Doe,2024-10-14 08:45:00,C/In,2,CARD",
            "John Roe,2024-10-15 08:00:00,C/In,1,FP",
        ],
    );

    write_export(root, "09 September", "AttendanceLogs_2024-09-30.csv", &[]);
}
