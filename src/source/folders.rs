// src/source/folders.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::fs;
use std::path::{Path, PathBuf};

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// English month name (full or 3-letter) → 1..=12
pub fn month_from_name(name: &str) -> Option<u32> {
    let lower = name.trim().to_lowercase();
    if lower.len() < 3 {
        return None;
    }

    MONTH_NAMES
        .iter()
        .position(|m| *m == lower || (lower.len() == 3 && m.starts_with(&lower)))
        .map(|i| i as u32 + 1)
}

pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month.checked_sub(1)? as usize).copied()
}

/// Month of a folder named like "10 October".
///
/// The month name wins; the numeric prefix is used when the name is missing
/// or not an English month.
pub fn parse_month_folder(name: &str) -> Option<u32> {
    let mut parts = name.split_whitespace();
    let number = parts.next()?;
    let by_name = parts.next().and_then(month_from_name);

    by_name.or_else(|| number.parse::<u32>().ok().filter(|m| (1..=12).contains(m)))
}

/// Pick the month folder for `month` under `root`.
///
/// When no folder matches, the folder with the highest month is used.
pub fn select_month_folder(root: &Path, month: u32) -> AppResult<PathBuf> {
    if !root.is_dir() {
        return Err(AppError::ExportRootMissing(root.to_path_buf()));
    }

    let mut folders: Vec<(u32, PathBuf)> = Vec::new();

    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().to_string();
        if let Some(m) = parse_month_folder(&name) {
            folders.push((m, path));
        }
    }

    // ties broken by folder name so the choice does not depend on read_dir order
    folders.sort();

    if let Some((_, path)) = folders.iter().rev().find(|(m, _)| *m == month) {
        return Ok(path.clone());
    }

    let latest = folders
        .pop()
        .map(|(_, path)| path)
        .ok_or_else(|| AppError::NoMonthFolder(root.to_path_buf()))?;

    warning(format!(
        "No export folder for {}, using '{}'",
        month_name(month).unwrap_or("?"),
        latest.display()
    ));
    tracing::warn!(month, folder = %latest.display(), "month folder fallback");

    Ok(latest)
}

/// The `count` most recent export files of `folder` (by file name, newest first).
pub fn select_export_files(folder: &Path, extension: &str, count: usize) -> AppResult<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = fs::read_dir(folder)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .map(|e| e.to_string_lossy().eq_ignore_ascii_case(extension))
                .unwrap_or(false)
        })
        .collect();

    if files.is_empty() {
        return Err(AppError::NoExportFiles(folder.to_path_buf()));
    }

    files.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
    files.truncate(count);

    Ok(files)
}
