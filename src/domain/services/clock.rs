#[cfg(test)]
#[path = "clock_test.rs"]
mod tests;

use std::time::Instant;

/// Tracks the moment elapsed active time was last flushed to the server.
pub struct SessionClock {
    last_ping: Instant,
}

impl SessionClock {
    pub fn new(now: Instant) -> SessionClock {
        return SessionClock { last_ping: now };
    }

    /// Returns whole elapsed seconds since the previous flush and moves the
    /// last-ping marker to `now` unconditionally, even when the caller ends
    /// up sending nothing.
    pub fn flush(&mut self, now: Instant) -> u64 {
        let seconds = now.saturating_duration_since(self.last_ping).as_secs();
        self.last_ping = now;
        return seconds;
    }
}
