//! Current-date source for the home view.
//!
//! The date is computed once per activation and never refreshed; a stale
//! value across midnight is accepted for the lifetime of the home view.

use crate::engine::time_source::TimeSource;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Long-form date rendering style.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DateStyle {
    /// `2026年10月16日金曜日`
    #[default]
    Japanese,
    /// `Friday, October 16, 2026`
    English,
    /// `2026-10-16 (Friday)`
    Iso,
}

/// Formats `date` with year, month, day and full weekday name.
pub fn format_date(date: NaiveDate, style: DateStyle) -> String {
    match style {
        DateStyle::Japanese => format!(
            "{}年{}月{}日{}",
            date.year(),
            date.month(),
            date.day(),
            japanese_weekday(date.weekday())
        ),
        DateStyle::English => date.format("%A, %B %-d, %Y").to_string(),
        DateStyle::Iso => date.format("%Y-%m-%d (%A)").to_string(),
    }
}

fn japanese_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "月曜日",
        Weekday::Tue => "火曜日",
        Weekday::Wed => "水曜日",
        Weekday::Thu => "木曜日",
        Weekday::Fri => "金曜日",
        Weekday::Sat => "土曜日",
        Weekday::Sun => "日曜日",
    }
}

/// A date string captured at activation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateSource {
    snapshot: String,
}

impl DateSource {
    /// Reads the wall clock once and formats today's date.
    pub fn activate(time: &dyn TimeSource, style: DateStyle) -> Self {
        let snapshot = format_date(time.now().date(), style);
        tracing::debug!(date = %snapshot, "date captured");
        Self { snapshot }
    }

    /// The date captured at activation.
    pub fn snapshot(&self) -> &str {
        &self.snapshot
    }
}
