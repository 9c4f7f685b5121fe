use chrono::{DateTime, TimeZone};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum TimeDisplayMode {
    #[default]
    Hour12,
    Hour24,
}

impl TimeDisplayMode {
    pub fn toggled(self) -> Self {
        match self {
            TimeDisplayMode::Hour12 => TimeDisplayMode::Hour24,
            TimeDisplayMode::Hour24 => TimeDisplayMode::Hour12,
        }
    }
}

/// `09:30 AM` in 12-hour mode, `09:30` in 24-hour mode.
pub fn format_clock<Tz: TimeZone>(instant: &DateTime<Tz>, mode: TimeDisplayMode) -> String {
    let pattern = match mode {
        TimeDisplayMode::Hour12 => "%I:%M %p",
        TimeDisplayMode::Hour24 => "%H:%M",
    };
    instant.naive_local().format(pattern).to_string()
}

pub fn format_event_date<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    instant.date_naive().format("%A, %B %d %Y").to_string()
}
