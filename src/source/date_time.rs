// src/source/date_time.rs

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Layouts seen in the "Date/Time" column of terminal exports.
const DT_FORMATS: [&str; 8] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d/%m/%Y %H:%M:%S",
];

/// Interpreta il valore di una cella "Date/Time".
///
/// Accetta sia i formati testuali di `DT_FORMATS` sia il *seriale Excel*
/// (es. `45580.375`) che compare quando il foglio è stato salvato come CSV
/// senza formattazione.
pub fn parse_date_time(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DT_FORMATS.iter() {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    s.parse::<f64>().ok().and_then(excel_serial_to_naive_datetime)
}

/// Excel serial (days since 1899-12-30, fraction = time of day) → datetime.
pub fn excel_serial_to_naive_datetime(serial: f64) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 {
        return None;
    }

    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    let days = serial.trunc() as i64;
    let secs = ((serial - serial.trunc()) * 86400.0).round() as i64;

    let offset = Duration::try_days(days)?.checked_add(&Duration::try_seconds(secs)?)?;
    excel_epoch.checked_add_signed(offset)
}

/// Datetime → Excel serial, inverse of [`excel_serial_to_naive_datetime`].
pub fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> Option<f64> {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?.and_hms_opt(0, 0, 0)?;

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    Some(days + secs / 86400.0)
}
