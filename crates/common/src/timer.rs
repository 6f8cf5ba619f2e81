//! Countdown state, urgency blink and clock formatting
//!
//! The browser interval only calls [`Countdown::tick`] once per second; all
//! bookkeeping about expiry lives here.

/// What a single tick did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still counting down.
    Running,
    /// This tick reached zero. Reported once per countdown.
    Expired,
    /// Already expired; nothing changed.
    Idle,
}

/// Read-only view of a countdown handed to dependents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub remaining: u32,
    pub expired: bool,
}

/// Fixed-duration, one-shot countdown with one-second resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    duration: u32,
    remaining: u32,
    expired: bool,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        Self {
            duration: seconds,
            remaining: seconds,
            expired: seconds == 0,
        }
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn is_expired(&self) -> bool {
        self.expired
    }

    /// Advance by one second.
    pub fn tick(&mut self) -> TickOutcome {
        if self.expired {
            return TickOutcome::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.expired = true;
            tracing::debug!("Countdown of {}s expired", self.duration);
            TickOutcome::Expired
        } else {
            TickOutcome::Running
        }
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            remaining: self.remaining,
            expired: self.expired,
        }
    }
}

/// `MM:SS`, zero padded. Minutes are not capped at 59.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// True while the clock is running but below `threshold` seconds.
pub fn is_urgent(remaining: u32, threshold: u32) -> bool {
    remaining > 0 && remaining < threshold
}

// -----------------------------------------------------------------------------
// Urgency Blink
// -----------------------------------------------------------------------------

/// Two-phase toggle driven by a fast interval while a clock is urgent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blinker {
    on: bool,
}

impl Blinker {
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Flip while urgent; settle to off otherwise.
    pub fn advance(&mut self, urgent: bool) -> bool {
        self.on = urgent && !self.on;
        self.on
    }
}

/// What the blink interval should do after the urgency of a clock changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkAction {
    Start,
    Stop,
    Keep,
}

impl BlinkAction {
    /// The interval only runs while the clock is urgent.
    pub fn for_state(interval_running: bool, urgent: bool) -> Self {
        match (interval_running, urgent) {
            (false, true) => BlinkAction::Start,
            (true, false) => BlinkAction::Stop,
            _ => BlinkAction::Keep,
        }
    }
}

/// Colour state of a clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerVisual {
    Normal,
    Warning,
    Danger,
}

impl TimerVisual {
    pub fn for_state(remaining: u32, threshold: u32, blink_on: bool) -> Self {
        if remaining == 0 {
            TimerVisual::Normal
        } else if is_urgent(remaining, threshold) && blink_on {
            TimerVisual::Danger
        } else {
            TimerVisual::Warning
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            TimerVisual::Normal => "normal",
            TimerVisual::Warning => "warning",
            TimerVisual::Danger => "danger",
        }
    }

    /// Star icon drawn on both sides of the clock.
    pub fn star_icon(&self) -> &'static str {
        match self {
            TimerVisual::Normal => "/assets/star6.svg",
            TimerVisual::Warning => "/assets/star4.svg",
            TimerVisual::Danger => "/assets/star5.svg",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_second_countdown() {
        let mut countdown = Countdown::new(10);
        for _ in 0..9 {
            assert_eq!(countdown.tick(), TickOutcome::Running);
            assert!(!countdown.is_expired());
        }
        assert_eq!(countdown.tick(), TickOutcome::Expired);
        assert_eq!(
            countdown.snapshot(),
            TimerSnapshot { remaining: 0, expired: true }
        );

        for _ in 0..5 {
            assert_eq!(countdown.tick(), TickOutcome::Idle);
        }
        assert_eq!(countdown.remaining(), 0);
        assert!(countdown.is_expired());
    }

    #[test]
    fn test_zero_duration_starts_expired() {
        let mut countdown = Countdown::new(0);
        assert!(countdown.is_expired());
        assert_eq!(countdown.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_expired_reported_once() {
        let mut countdown = Countdown::new(2);
        let outcomes: Vec<_> = (0..4).map(|_| countdown.tick()).collect();
        let expiries = outcomes.iter().filter(|o| **o == TickOutcome::Expired).count();
        assert_eq!(expiries, 1);
        assert_eq!(countdown.duration(), 2);
    }

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(120), "02:00");
        assert_eq!(format_clock(65), "01:05");
        assert_eq!(format_clock(9), "00:09");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn test_urgency_window() {
        assert!(!is_urgent(30, 30));
        assert!(is_urgent(29, 30));
        assert!(is_urgent(1, 30));
        assert!(!is_urgent(0, 30));
    }

    #[test]
    fn test_blinker_alternates_and_settles() {
        let mut blinker = Blinker::default();
        assert!(blinker.advance(true));
        assert!(!blinker.advance(true));
        assert!(blinker.advance(true));
        assert!(!blinker.advance(false));
        assert!(!blinker.is_on());
    }

    #[test]
    fn test_blink_interval_follows_urgency() {
        // Calm clock: no interval and nothing to write.
        assert_eq!(BlinkAction::for_state(false, is_urgent(45, 30)), BlinkAction::Keep);
        assert_eq!(BlinkAction::for_state(false, is_urgent(29, 30)), BlinkAction::Start);
        assert_eq!(BlinkAction::for_state(true, is_urgent(5, 30)), BlinkAction::Keep);
        assert_eq!(BlinkAction::for_state(true, is_urgent(0, 30)), BlinkAction::Stop);
    }

    #[test]
    fn test_visual_modes() {
        assert_eq!(TimerVisual::for_state(0, 30, true), TimerVisual::Normal);
        assert_eq!(TimerVisual::for_state(45, 30, true), TimerVisual::Warning);
        assert_eq!(TimerVisual::for_state(10, 30, true), TimerVisual::Danger);
        assert_eq!(TimerVisual::for_state(10, 30, false), TimerVisual::Warning);
        assert_eq!(TimerVisual::Danger.class(), "danger");
        assert_eq!(TimerVisual::Normal.star_icon(), "/assets/star6.svg");
    }
}
