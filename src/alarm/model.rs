use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone};
use serde::Deserialize;
use thiserror::Error;

pub type EventId = u32;

/// A single calendar entry. Immutable for the duration of a calculation.
#[derive(Debug, Clone)]
pub struct CalendarEvent<Tz: TimeZone = Local> {
    pub id: EventId,
    pub title: String,
    pub start_time: DateTime<Tz>,
}

impl<Tz: TimeZone> CalendarEvent<Tz> {
    pub fn new(id: EventId, title: impl Into<String>, start_time: DateTime<Tz>) -> Self {
        Self {
            id,
            title: title.into(),
            start_time,
        }
    }
}

impl<Tz: TimeZone> PartialEq for CalendarEvent<Tz> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.title == other.title && self.start_time == other.start_time
    }
}

impl<Tz: TimeZone> Eq for CalendarEvent<Tz> {}

#[derive(Debug, Error)]
pub enum EventFileError {
    #[error("unable to read event file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },
    #[error("unsupported event file version {0}; expected version 1")]
    UnsupportedVersion(u32),
    #[error("duplicate event id found: {0}")]
    DuplicateId(EventId),
    #[error("event {0} must have a non-empty title")]
    EmptyTitle(EventId),
    #[error("invalid local_datetime '{0}', expected ISO local datetime")]
    InvalidDateTime(String),
    #[error("local_datetime '{0}' does not exist in the local timezone")]
    NonexistentLocalTime(String),
}

/// The hard-coded calendar shown when no event file is supplied.
pub fn mock_calendar_events() -> Vec<CalendarEvent> {
    mock_calendar_events_in_tz(&Local)
}

pub fn mock_calendar_events_in_tz<Tz: TimeZone>(timezone: &Tz) -> Vec<CalendarEvent<Tz>> {
    let day = NaiveDate::from_ymd_opt(2026, 1, 27);
    [
        (1, "Team Meeting", 9, 30),
        (2, "Dentist Appointment", 14, 0),
        (3, "Project Deadline", 17, 0),
    ]
    .into_iter()
    .filter_map(|(id, title, hour, minute)| {
        let naive = day?.and_hms_opt(hour, minute, 0)?;
        let start_time = resolve_local_datetime(timezone, naive)?;
        Some(CalendarEvent::new(id, title, start_time))
    })
    .collect()
}

pub fn load_event_file(path: &Path) -> Result<Vec<CalendarEvent>, EventFileError> {
    let content = fs::read_to_string(path).map_err(|source| EventFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_event_file_text(&content)
}

pub fn parse_event_file_text(content: &str) -> Result<Vec<CalendarEvent>, EventFileError> {
    parse_event_file_text_in_tz(content, &Local)
}

pub fn parse_event_file_text_in_tz<Tz: TimeZone>(
    content: &str,
    timezone: &Tz,
) -> Result<Vec<CalendarEvent<Tz>>, EventFileError> {
    let raw = serde_json::from_str::<EventFile>(content).map_err(|err| EventFileError::Json {
        line: err.line(),
        column: err.column(),
        message: err.to_string(),
    })?;

    if raw.version != 1 {
        return Err(EventFileError::UnsupportedVersion(raw.version));
    }

    let mut ids = HashSet::new();
    let mut events = Vec::with_capacity(raw.events.len());
    for event in raw.events {
        if !ids.insert(event.id) {
            return Err(EventFileError::DuplicateId(event.id));
        }
        if event.title.trim().is_empty() {
            return Err(EventFileError::EmptyTitle(event.id));
        }

        let naive = parse_local_datetime(&event.local_datetime)?;
        let start_time = resolve_local_datetime(timezone, naive)
            .ok_or(EventFileError::NonexistentLocalTime(event.local_datetime))?;
        events.push(CalendarEvent::new(event.id, event.title, start_time));
    }

    Ok(events)
}

fn parse_local_datetime(input: &str) -> Result<NaiveDateTime, EventFileError> {
    NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| EventFileError::InvalidDateTime(input.to_string()))
}

// Ambiguous wall-clock times (DST fall-back) take the first instant.
fn resolve_local_datetime<Tz: TimeZone>(timezone: &Tz, naive: NaiveDateTime) -> Option<DateTime<Tz>> {
    match timezone.from_local_datetime(&naive) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(first, _second) => Some(first),
        LocalResult::None => None,
    }
}

#[derive(Debug, Deserialize)]
struct EventFile {
    version: u32,
    events: Vec<EventEntry>,
}

#[derive(Debug, Deserialize)]
struct EventEntry {
    id: EventId,
    title: String,
    local_datetime: String,
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;
    use chrono_tz::America::New_York;

    use super::*;

    #[test]
    fn mock_calendar_has_three_events_on_the_same_day() {
        let events = mock_calendar_events_in_tz(&New_York);
        assert_eq!(events.len(), 3);
        let titles: Vec<&str> = events.iter().map(|event| event.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Team Meeting", "Dentist Appointment", "Project Deadline"]
        );
        assert!(
            events
                .iter()
                .all(|event| event.start_time.date_naive() == events[0].start_time.date_naive())
        );
        assert_eq!(events[0].start_time.hour(), 9);
        assert_eq!(events[0].start_time.minute(), 30);
    }

    #[test]
    fn parses_valid_event_file() {
        let json = r#"
{
  "version": 1,
  "events": [
    { "id": 7, "title": "Standup", "local_datetime": "2026-01-28T08:45:00" },
    { "id": 8, "title": "Lunch", "local_datetime": "2026-01-28T12:00:00.000000000" }
  ]
}
"#;
        let events = parse_event_file_text_in_tz(json, &New_York).expect("valid file");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].id, 7);
        assert_eq!(events[0].title, "Standup");
        assert_eq!(events[0].start_time.hour(), 8);
        assert_eq!(events[1].start_time.hour(), 12);
    }

    #[test]
    fn empty_event_list_is_accepted_at_load_time() {
        let json = r#"{ "version": 1, "events": [] }"#;
        let events = parse_event_file_text_in_tz(json, &New_York).expect("valid file");
        assert!(events.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_event_file_text("{ not-json").expect_err("should fail");
        assert!(matches!(err, EventFileError::Json { .. }));
        assert!(err.to_string().contains("invalid JSON"));
    }

    #[test]
    fn rejects_unknown_version() {
        let json = r#"{ "version": 2, "events": [] }"#;
        let err = parse_event_file_text(json).expect_err("should fail");
        assert!(matches!(err, EventFileError::UnsupportedVersion(2)));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"
{
  "version": 1,
  "events": [
    { "id": 1, "title": "A", "local_datetime": "2026-01-27T09:30:00" },
    { "id": 1, "title": "B", "local_datetime": "2026-01-27T10:30:00" }
  ]
}
"#;
        let err = parse_event_file_text_in_tz(json, &New_York).expect_err("should fail");
        assert!(err.to_string().contains("duplicate event id found: 1"));
    }

    #[test]
    fn rejects_blank_title() {
        let json = r#"
{
  "version": 1,
  "events": [
    { "id": 4, "title": "   ", "local_datetime": "2026-01-27T09:30:00" }
  ]
}
"#;
        let err = parse_event_file_text_in_tz(json, &New_York).expect_err("should fail");
        assert!(matches!(err, EventFileError::EmptyTitle(4)));
    }

    #[test]
    fn rejects_invalid_timestamp() {
        let json = r#"
{
  "version": 1,
  "events": [
    { "id": 1, "title": "Bad", "local_datetime": "not-a-time" }
  ]
}
"#;
        let err = parse_event_file_text_in_tz(json, &New_York).expect_err("should fail");
        assert!(err.to_string().contains("invalid local_datetime"));
    }

    #[test]
    fn rejects_time_inside_spring_forward_gap() {
        let json = r#"
{
  "version": 1,
  "events": [
    { "id": 1, "title": "Gap", "local_datetime": "2026-03-08T02:30:00" }
  ]
}
"#;
        let err = parse_event_file_text_in_tz(json, &New_York).expect_err("should fail");
        assert!(matches!(err, EventFileError::NonexistentLocalTime(_)));
    }

    #[test]
    fn ambiguous_fall_back_time_takes_first_instant() {
        let json = r#"
{
  "version": 1,
  "events": [
    { "id": 1, "title": "Early", "local_datetime": "2026-11-01T01:30:00" }
  ]
}
"#;
        let events = parse_event_file_text_in_tz(json, &New_York).expect("valid file");
        let expected = match New_York.with_ymd_and_hms(2026, 11, 1, 1, 30, 0) {
            LocalResult::Ambiguous(first, _second) => first,
            _ => panic!("expected ambiguous local time"),
        };
        assert_eq!(events[0].start_time, expected);
    }
}
