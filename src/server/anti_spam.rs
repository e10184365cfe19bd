use std::time::{Duration, Instant};

use log::warn;

use crate::config::anti_spam::{BAN_DURATION_SECONDS, MAX_ERRORS_PER_SECOND, MAX_REQUESTS_PER_SECOND};

/// Tracks input-flood state for a single game connection.
pub struct AntiSpamState {
    // Last error code sent (for suppression)
    last_error_code: Option<String>,
    // Start of the current one-second window
    last_tick: Instant,
    requests_this_tick: u32,
    errors_this_tick: u32,
    banned_until: Option<Instant>,
}

impl AntiSpamState {
    pub fn new() -> Self {
        Self {
            last_error_code: None,
            last_tick: Instant::now(),
            requests_this_tick: 0,
            errors_this_tick: 0,
            banned_until: None,
        }
    }

    /// Call for every incoming client frame.
    /// Returns true if the connection is (now) banned.
    pub fn record_request(&mut self, session: &str) -> bool {
        self.tick(Instant::now());
        self.requests_this_tick += 1;
        if self.requests_this_tick > MAX_REQUESTS_PER_SECOND {
            self.ban(session, "Too many requests per second");
            return true;
        }
        self.is_banned()
    }

    /// Call for every error frame about to be sent.
    /// Returns true if the connection is (now) banned.
    pub fn record_error(&mut self, session: &str) -> bool {
        self.tick(Instant::now());
        self.errors_this_tick += 1;
        if self.errors_this_tick > MAX_ERRORS_PER_SECOND {
            self.ban(session, "Too many invalid frames per second");
            return true;
        }
        self.is_banned()
    }

    /// Returns true if the error should be sent (not a repeat of the previous one).
    pub fn should_send_error(&mut self, error_code: &str, session: &str) -> bool {
        if self.last_error_code.as_deref() == Some(error_code) {
            warn!("[AntiSpam] Suppressed duplicate error '{}' for session={}", error_code, session);
            return false;
        }
        self.last_error_code = Some(error_code.to_string());
        true
    }

    /// Call when a valid command went through.
    pub fn reset_on_valid_action(&mut self) {
        self.last_error_code = None;
    }

    pub fn is_banned(&self) -> bool {
        self.banned_until.is_some_and(|until| Instant::now() < until)
    }

    /// Remaining ban duration in seconds, or 0 if not banned.
    pub fn ban_remaining_secs(&self) -> u64 {
        self.banned_until
            .map(|until| until.saturating_duration_since(Instant::now()).as_secs())
            .unwrap_or(0)
    }

    fn ban(&mut self, session: &str, reason: &str) {
        let until = Instant::now() + Duration::from_secs(BAN_DURATION_SECONDS);
        self.banned_until = Some(until);
        warn!("[AntiSpam] Banned session={} for {}s, reason: {}", session, BAN_DURATION_SECONDS, reason);
    }

    /// Reset per-second counters if a new second has started.
    fn tick(&mut self, now: Instant) {
        if now.duration_since(self.last_tick) >= Duration::from_secs(1) {
            self.last_tick = now;
            self.requests_this_tick = 0;
            self.errors_this_tick = 0;
        }
    }
}

impl Default for AntiSpamState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_flood_bans_the_session() {
        let mut state = AntiSpamState::new();
        for _ in 0..MAX_REQUESTS_PER_SECOND {
            assert!(!state.record_request("s1"));
        }
        assert!(state.record_request("s1"));
        assert!(state.is_banned());
        assert!(state.ban_remaining_secs() > 0);
    }

    #[test]
    fn duplicate_errors_are_suppressed_until_a_valid_action() {
        let mut state = AntiSpamState::new();
        assert!(state.should_send_error("INVALID_COMMAND", "s1"));
        assert!(!state.should_send_error("INVALID_COMMAND", "s1"));
        assert!(state.should_send_error("OTHER", "s1"));
        state.reset_on_valid_action();
        assert!(state.should_send_error("OTHER", "s1"));
    }

    #[test]
    fn counters_reset_after_a_second() {
        let mut state = AntiSpamState::new();
        for _ in 0..MAX_ERRORS_PER_SECOND {
            assert!(!state.record_error("s1"));
        }
        state.tick(Instant::now() + Duration::from_secs(2));
        assert!(!state.record_error("s1"));
        assert!(!state.is_banned());
    }
}
