mod common;
use common::{HEADER, october_fixture, ts, write_export};

use rattendance::config::Config;
use rattendance::errors::AppError;
use rattendance::models::EventStatus;
use rattendance::source::EventSource;
use rattendance::source::date_time::{excel_serial_to_naive_datetime, parse_date_time};
use rattendance::source::folders::{
    month_from_name, parse_month_folder, select_export_files, select_month_folder,
};
use rattendance::source::reader::read_events_from;
use std::fs;
use tempfile::tempdir;

fn config_for(root: &std::path::Path) -> Config {
    Config {
        export_root: root.to_string_lossy().to_string(),
        default_employee: "Jane Doe".to_string(),
        ..Config::default()
    }
}

#[test]
fn test_month_folder_names() {
    assert_eq!(parse_month_folder("10 October"), Some(10));
    assert_eq!(parse_month_folder("03 Mar"), Some(3));
    assert_eq!(parse_month_folder("11 Foo"), Some(11));
    assert_eq!(parse_month_folder("7"), Some(7));
    assert_eq!(parse_month_folder("13 Nothing"), None);
    assert_eq!(parse_month_folder("Backup"), None);

    assert_eq!(month_from_name("DECEMBER"), Some(12));
    assert_eq!(month_from_name("ju"), None);
}

#[test]
fn test_select_month_folder_prefers_requested_month() {
    let tmp = tempdir().expect("tempdir");
    october_fixture(tmp.path());

    let folder = select_month_folder(tmp.path(), 9).expect("september folder");
    assert!(folder.ends_with("09 September"));

    let folder = select_month_folder(tmp.path(), 10).expect("october folder");
    assert!(folder.ends_with("10 October"));
}

#[test]
fn test_select_month_folder_breaks_ties_by_name() {
    let tmp = tempdir().expect("tempdir");
    october_fixture(tmp.path());
    fs::create_dir_all(tmp.path().join("10 Oct old")).expect("mkdir");
    fs::create_dir_all(tmp.path().join("10 Oct archive")).expect("mkdir");

    let folder = select_month_folder(tmp.path(), 10).expect("october folder");
    assert!(folder.ends_with("10 October"));

    // fallback applies the same ordering
    let folder = select_month_folder(tmp.path(), 12).expect("fallback folder");
    assert!(folder.ends_with("10 October"));
}

#[test]
fn test_select_month_folder_falls_back_to_latest_month() {
    let tmp = tempdir().expect("tempdir");
    october_fixture(tmp.path());

    let folder = select_month_folder(tmp.path(), 12).expect("fallback folder");
    assert!(folder.ends_with("10 October"));
}

#[test]
fn test_select_month_folder_errors() {
    let tmp = tempdir().expect("tempdir");
    fs::create_dir_all(tmp.path().join("misc")).expect("mkdir");

    assert!(matches!(
        select_month_folder(tmp.path(), 10),
        Err(AppError::NoMonthFolder(_))
    ));
    assert!(matches!(
        select_month_folder(&tmp.path().join("missing"), 10),
        Err(AppError::ExportRootMissing(_))
    ));
}

#[test]
fn test_select_export_files_takes_two_newest() {
    let tmp = tempdir().expect("tempdir");
    october_fixture(tmp.path());
    let folder = tmp.path().join("10 October");
    fs::write(folder.join("notes.txt"), "ignored").expect("write notes");

    let files = select_export_files(&folder, "csv", 2).expect("files");
    let names: Vec<String> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();

    assert_eq!(
        names,
        vec!["AttendanceLogs_2024-10-15.csv", "AttendanceLogs_2024-10-08.csv"]
    );

    assert!(matches!(
        select_export_files(&folder, "xlsx", 2),
        Err(AppError::NoExportFiles(_))
    ));
}

#[test]
fn test_reader_maps_columns_and_filters_employee() {
    let csv = format!(
        "{HEADER}\n\
         Jane Doe,2024-10-15 09:00:00,C/In,1,FP\n\
         John Roe,2024-10-15 08:00:00,C/In,1,FP\n\
         Jane Doe,2024-10-15 12:00:00,C/Out,2,CARD\n\
         Jane Doe,2024-10-15 12:30:00,OverTime In,2,CARD\n"
    );

    let events = read_events_from(csv.as_bytes(), "inline", " Jane Doe ").expect("events");

    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.name == "Jane Doe"));
    assert_eq!(events[0].timestamp, ts("2024-10-15 09:00:00"));
    assert_eq!(events[0].status, EventStatus::ClockIn);
    assert_eq!(events[1].status, EventStatus::ClockOut);
    assert_eq!(events[1].location, "2");
    assert_eq!(events[1].verify_code, "CARD");
    assert_eq!(events[2].status, EventStatus::Other("OverTime In".into()));

    assert!(events[0].status.is_in());
    assert!(!events[1].status.is_in());
    assert!(!events[2].status.is_in() && !events[2].status.is_out());
}

#[test]
fn test_reader_skips_rows_with_bad_timestamp() {
    let csv = format!(
        "{HEADER}\n\
         Jane Doe,not a date,C/In,1,FP\n\
         Jane Doe,10/15/2024 05:30:00 PM,C/Out,1,FP\n"
    );

    let events = read_events_from(csv.as_bytes(), "inline", "Jane Doe").expect("events");

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].timestamp, ts("2024-10-15 17:30:00"));
}

#[test]
fn test_reader_optional_columns_default_to_empty() {
    let csv = "Name,Date/Time,Status\nJane Doe,2024-10-15 09:00,C/In\n";

    let events = read_events_from(csv.as_bytes(), "inline", "Jane Doe").expect("events");

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].location, "");
    assert_eq!(events[0].verify_code, "");
}

#[test]
fn test_reader_requires_core_columns() {
    let csv = "Name,Status\nJane Doe,C/In\n";

    let err = read_events_from(csv.as_bytes(), "inline", "Jane Doe").unwrap_err();
    match err {
        AppError::MissingColumn { column, .. } => assert_eq!(column, "Date/Time"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_date_time_formats() {
    let expected = ts("2024-10-15 09:00:00");

    assert_eq!(parse_date_time("2024-10-15 09:00:00"), Some(expected));
    assert_eq!(parse_date_time("2024-10-15T09:00:00"), Some(expected));
    assert_eq!(parse_date_time("10/15/2024 09:00:00 AM"), Some(expected));
    assert_eq!(parse_date_time("15/10/2024 09:00:00"), Some(expected));
    assert_eq!(parse_date_time("45580.375"), Some(expected));
    assert_eq!(parse_date_time(""), None);
    assert_eq!(excel_serial_to_naive_datetime(-1.0), None);
}

#[test]
fn test_event_source_reads_selected_files() {
    let tmp = tempdir().expect("tempdir");
    october_fixture(tmp.path());
    let cfg = config_for(tmp.path());

    let source = EventSource::new(&cfg);
    let files = source.select_files(Some(10)).expect("files");
    assert_eq!(files.len(), 2);

    let events = source.read_events(&files[0], "Jane Doe").expect("events");
    assert_eq!(events.len(), 5);

    assert!(matches!(
        source.select_files(Some(13)),
        Err(AppError::InvalidMonth(13))
    ));
}

#[test]
fn test_event_source_honours_files_per_report() {
    let tmp = tempdir().expect("tempdir");
    october_fixture(tmp.path());
    write_export(tmp.path(), "10 October", "AttendanceLogs_2024-10-22.csv", &[]);

    let mut cfg = config_for(tmp.path());
    cfg.files_per_report = 3;

    let files = EventSource::new(&cfg).select_files(Some(10)).expect("files");
    assert_eq!(files.len(), 3);
    assert!(files[0].ends_with("AttendanceLogs_2024-10-22.csv"));
}
