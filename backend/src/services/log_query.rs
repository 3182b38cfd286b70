//! Exercise log query: date-range filtering and head-limiting over a user's log.
//!
//! Rules, applied in order over a projected copy of the entries:
//! 1. `count` is the number of entries before any filtering.
//! 2. `from` keeps entries dated on or after it, `to` keeps entries dated on or
//!    before it. A bound that does not parse is ignored.
//! 3. `limit` keeps the first `limit` entries. A limit that is not a
//!    non-negative integer is an error.
//!
//! Empty parameters (`?from=`) count as absent. An entry whose own date does
//! not parse never satisfies an active bound.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::exercise::ExerciseEntry;
use crate::services::calendar_date::CalendarDate;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LogQueryParams {
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<String>,
}

/// An exercise as it appears in a log response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<&ExerciseEntry> for LogEntry {
    fn from(entry: &ExerciseEntry) -> Self {
        Self {
            description: entry.description.clone(),
            duration: entry.duration,
            date: entry.date.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LogQueryResult {
    pub count: usize,
    pub log: Vec<LogEntry>,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LogQueryError {
    #[error("limit must be a non-negative integer, got '{0}'")]
    InvalidLimit(String),
}

pub fn query(
    entries: &[ExerciseEntry],
    params: &LogQueryParams,
) -> Result<LogQueryResult, LogQueryError> {
    let limit = parse_limit(params.limit.as_deref())?;
    let from = parse_bound("from", params.from.as_deref());
    let to = parse_bound("to", params.to.as_deref());

    let mut log: Vec<LogEntry> = entries.iter().map(LogEntry::from).collect();

    if let Some(min) = from {
        log.retain(|entry| entry_date(entry).is_some_and(|date| date >= min));
    }
    if let Some(max) = to {
        log.retain(|entry| entry_date(entry).is_some_and(|date| date <= max));
    }
    if let Some(limit) = limit {
        log.truncate(limit);
    }

    Ok(LogQueryResult {
        count: entries.len(),
        log,
    })
}

fn non_empty(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|s| !s.is_empty())
}

fn parse_limit(raw: Option<&str>) -> Result<Option<usize>, LogQueryError> {
    match non_empty(raw) {
        None => Ok(None),
        Some(value) => match value.parse::<usize>() {
            Ok(limit) => Ok(Some(limit)),
            // Too large for usize: nothing to truncate
            Err(_) if value.bytes().all(|b| b.is_ascii_digit()) => Ok(Some(usize::MAX)),
            Err(_) => Err(LogQueryError::InvalidLimit(value.to_string())),
        },
    }
}

fn parse_bound(name: &str, raw: Option<&str>) -> Option<NaiveDate> {
    let value = non_empty(raw)?;
    let date = CalendarDate::parse(value).date();
    if date.is_none() {
        tracing::debug!(bound = name, value = value, "Ignoring unparsable log date bound");
    }
    date
}

fn entry_date(entry: &LogEntry) -> Option<NaiveDate> {
    CalendarDate::parse(&entry.date).date()
}
