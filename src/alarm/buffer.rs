pub const DEFAULT_BUFFER_MINUTES: u32 = 60;
pub const BUFFER_STEP_MINUTES: u32 = 15;

/// Lead time before the earliest event, adjusted in fixed steps and floored at zero.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BufferSetting {
    minutes: u32,
}

impl Default for BufferSetting {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_MINUTES)
    }
}

impl BufferSetting {
    pub fn new(minutes: u32) -> Self {
        Self { minutes }
    }

    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    pub fn increase(&mut self) {
        self.minutes = self.minutes.saturating_add(BUFFER_STEP_MINUTES);
    }

    pub fn decrease(&mut self) {
        self.minutes = self.minutes.saturating_sub(BUFFER_STEP_MINUTES);
    }
}
