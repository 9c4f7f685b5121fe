use chrono::{DateTime, Local, TimeDelta, TimeZone};
use thiserror::Error;

use crate::alarm::model::CalendarEvent;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum AlarmError {
    #[error("no events to calculate from")]
    EmptyInput,
    #[error("alarm time for a {buffer_minutes} minute buffer is out of range")]
    OutOfRange { buffer_minutes: u32 },
}

/// Outcome of one calculation. Recomputed from scratch on every sync.
#[derive(Debug, Clone)]
pub struct AlarmResult<Tz: TimeZone = Local> {
    pub earliest_event: CalendarEvent<Tz>,
    pub buffer_minutes: u32,
    pub alarm_time: DateTime<Tz>,
}

impl<Tz: TimeZone> PartialEq for AlarmResult<Tz> {
    fn eq(&self, other: &Self) -> bool {
        self.earliest_event == other.earliest_event
            && self.buffer_minutes == other.buffer_minutes
            && self.alarm_time == other.alarm_time
    }
}

/// Picks the event with the minimum start time and subtracts the buffer from it.
///
/// Ties keep the first event in slice order. The subtraction is done on the
/// absolute instant, so a buffer spanning a DST transition still moves the
/// alarm by exactly `buffer_minutes * 60` seconds.
pub fn compute_alarm<Tz: TimeZone>(
    events: &[CalendarEvent<Tz>],
    buffer_minutes: u32,
) -> Result<AlarmResult<Tz>, AlarmError> {
    let earliest = earliest_event(events).ok_or(AlarmError::EmptyInput)?;
    let alarm_time = earliest
        .start_time
        .clone()
        .checked_sub_signed(TimeDelta::minutes(i64::from(buffer_minutes)))
        .ok_or(AlarmError::OutOfRange { buffer_minutes })?;

    Ok(AlarmResult {
        earliest_event: earliest.clone(),
        buffer_minutes,
        alarm_time,
    })
}

pub fn earliest_event<Tz: TimeZone>(events: &[CalendarEvent<Tz>]) -> Option<&CalendarEvent<Tz>> {
    let (first, rest) = events.split_first()?;
    Some(rest.iter().fold(first, |min, event| {
        if event.start_time < min.start_time {
            event
        } else {
            min
        }
    }))
}
