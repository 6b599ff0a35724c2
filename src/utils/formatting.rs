//! Formatting utilities used for CLI and export outputs.

pub const MILLIS_PER_MINUTE: i64 = 60_000;
pub const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Round to 2 decimals, halves away from zero (0.125 → 0.13).
///
/// Works on the binary value: `9.005` is stored below the half and rounds
/// down. Durations go through [`millis_to_units2`] instead.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `millis / unit_millis` rounded to 2 decimals, halves away from zero.
///
/// The rounding happens on integer hundredths, so a decimal half such as
/// 9 h 00 m 18 s (9.005 h) always goes up to 9.01.
pub fn millis_to_units2(millis: i64, unit_millis: i64) -> f64 {
    let unit = i128::from(unit_millis.max(1));
    let hundredths = (i128::from(millis).abs() * 200 + unit) / (2 * unit);
    let value = hundredths as f64 / 100.0;

    if millis < 0 { -value } else { value }
}

/// Render a rounded quantity the short way: `9`, `8.5`, `0.13`.
pub fn format_amount(value: f64) -> String {
    let rounded = round2(value);
    if rounded == 0.0 {
        return "0".to_string();
    }

    let s = format!("{:.2}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Banner line like `****** Timelogs for Jane ******`.
pub fn banner(title: &str, sep: &str, left: usize, right: usize) -> String {
    format!("{} {} {}", sep.repeat(left), title, sep.repeat(right))
}
