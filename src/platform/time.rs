//! Wall-clock frame timing

use std::time::Instant;

/// Measures the time between successive frames
#[derive(Debug, Clone)]
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last: now,
        }
    }

    /// Seconds since the previous tick (or since construction)
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Tick with an explicit timestamp. Timestamps earlier than the
    /// previous tick yield a zero delta.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let dt = now.saturating_duration_since(self.last);
        if now > self.last {
            self.last = now;
        }
        dt.as_secs_f32()
    }

    /// Seconds since the clock was created, as of the last tick
    pub fn elapsed(&self) -> f32 {
        self.last.duration_since(self.start).as_secs_f32()
    }
}
