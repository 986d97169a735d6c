// Archive entities
// Naming rules for the nested weekly/daily/part hierarchy

use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A named blob inside an archive, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// A weekly archive that has been fully written to disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekArchive {
    pub path: PathBuf,
    pub week_start: NaiveDate,
    pub week_number: u32,
    pub day_count: u32,
    pub size_bytes: u64,
}

impl WeekArchive {
    pub fn size_kib(&self) -> f64 {
        self.size_bytes as f64 / 1024.0
    }
}

/// `part-001.json` for the first part of a day.
pub fn part_file_name(part_number: u32) -> String {
    format!("part-{:03}.json", part_number)
}

pub fn daily_archive_name(date: NaiveDate) -> String {
    format!("events_{}.zip", date.format("%Y-%m-%d"))
}

/// ISO 8601 week number, so late-December dates may land in week 1.
pub fn iso_week_number(date: NaiveDate) -> u32 {
    date.iso_week().week()
}

/// The year is not part of the name; reusing an output directory across
/// years overwrites archives that share a week number.
pub fn weekly_archive_name(week_start: NaiveDate) -> String {
    format!("events_week_{}.zip", iso_week_number(week_start))
}
