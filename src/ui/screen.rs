use chrono::{Local, TimeZone};
use tracing::{debug, warn};

use crate::alarm::buffer::BufferSetting;
use crate::alarm::calculator::{AlarmError, AlarmResult, compute_alarm, earliest_event};
use crate::alarm::format::{TimeDisplayMode, format_clock, format_event_date};
use crate::alarm::model::CalendarEvent;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ScreenAction {
    DecreaseBuffer,
    IncreaseBuffer,
    SyncCalendar,
    ToggleDisplayMode,
}

/// Text lines shown in the result section once a sync has succeeded.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ResultSummary {
    pub alarm_time: String,
    pub event_title: String,
    pub event_time: String,
    pub buffer_minutes: u32,
}

/// State owned by the single alarm screen. Created fresh each time the screen
/// opens; nothing here outlives it.
pub struct AlarmScreen<Tz: TimeZone = Local> {
    events: Vec<CalendarEvent<Tz>>,
    buffer: BufferSetting,
    display_mode: TimeDisplayMode,
    last_result: Option<AlarmResult<Tz>>,
    status_message: Option<String>,
}

impl<Tz: TimeZone> AlarmScreen<Tz> {
    pub fn new(
        events: Vec<CalendarEvent<Tz>>,
        buffer: BufferSetting,
        display_mode: TimeDisplayMode,
    ) -> Self {
        Self {
            events,
            buffer,
            display_mode,
            last_result: None,
            status_message: None,
        }
    }

    pub fn apply(&mut self, action: ScreenAction) {
        match action {
            ScreenAction::DecreaseBuffer => self.buffer.decrease(),
            ScreenAction::IncreaseBuffer => self.buffer.increase(),
            ScreenAction::ToggleDisplayMode => self.display_mode = self.display_mode.toggled(),
            ScreenAction::SyncCalendar => {
                if let Err(err) = self.sync().map(|_| ()) {
                    self.status_message = Some(err.to_string());
                }
            }
        }
    }

    /// Recomputes the alarm from the current events and buffer, replacing any
    /// previous result. A failed sync clears the stale result.
    pub fn sync(&mut self) -> Result<&AlarmResult<Tz>, AlarmError> {
        self.status_message = None;
        match compute_alarm(&self.events, self.buffer.minutes()) {
            Ok(result) => {
                debug!(
                    event_id = result.earliest_event.id,
                    buffer_minutes = result.buffer_minutes,
                    "alarm recomputed"
                );
                Ok(&*self.last_result.insert(result))
            }
            Err(err) => {
                warn!("alarm calculation failed: {err}");
                self.last_result = None;
                Err(err)
            }
        }
    }

    pub fn events(&self) -> &[CalendarEvent<Tz>] {
        &self.events
    }

    pub fn buffer_minutes(&self) -> u32 {
        self.buffer.minutes()
    }

    pub fn display_mode(&self) -> TimeDisplayMode {
        self.display_mode
    }

    #[cfg(test)]
    pub fn last_result(&self) -> Option<&AlarmResult<Tz>> {
        self.last_result.as_ref()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn format_time(&self, event: &CalendarEvent<Tz>) -> String {
        format_clock(&event.start_time, self.display_mode)
    }

    /// Heading for the event list when every event falls on the earliest
    /// event's day. `None` for an empty or multi-day calendar.
    pub fn shared_event_date(&self) -> Option<String> {
        let earliest = earliest_event(&self.events)?;
        let day = earliest.start_time.date_naive();
        self.events
            .iter()
            .all(|event| event.start_time.date_naive() == day)
            .then(|| format_event_date(&earliest.start_time))
    }

    pub fn format_event_day(&self, event: &CalendarEvent<Tz>) -> String {
        format_event_date(&event.start_time)
    }

    // Reports the buffer the result was computed with, not the live setting.
    pub fn result_summary(&self) -> Option<ResultSummary> {
        let result = self.last_result.as_ref()?;
        Some(ResultSummary {
            alarm_time: format_clock(&result.alarm_time, self.display_mode),
            event_title: result.earliest_event.title.clone(),
            event_time: format_clock(&result.earliest_event.start_time, self.display_mode),
            buffer_minutes: result.buffer_minutes,
        })
    }
}
