//! Per-question countdown. The state machine only; the one-second cadence is
//! driven from outside by calling [`Countdown::tick`].

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The countdown is stopped; nothing changed.
    Idle,
    Ticked { remaining_secs: u32 },
    /// This tick took the counter to zero and stopped the countdown.
    Expired,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    limit_secs: u32,
    remaining_secs: u32,
    running: bool,
}

impl Countdown {
    /// A running countdown with the full limit remaining.
    #[must_use]
    pub fn started(limit_secs: u32) -> Self {
        Self {
            limit_secs,
            remaining_secs: limit_secs,
            running: limit_secs > 0,
        }
    }

    #[must_use]
    pub fn limit_secs(&self) -> u32 {
        self.limit_secs
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn elapsed_secs(&self) -> u32 {
        self.limit_secs - self.remaining_secs
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    /// Apply one elapsed second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.running || self.remaining_secs == 0 {
            self.running = false;
            return TickOutcome::Idle;
        }
        self.remaining_secs -= 1;
        if self.remaining_secs == 0 {
            self.running = false;
            return TickOutcome::Expired;
        }
        TickOutcome::Ticked {
            remaining_secs: self.remaining_secs,
        }
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Refill to the limit and start running again.
    pub fn reset(&mut self) {
        *self = Self::started(self.limit_secs);
    }
}

/// `MM:SS`, zero padded.
#[must_use]
pub fn format_clock(secs: u32) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_run_expires_exactly_once() {
        let mut countdown = Countdown::started(240);
        let mut expired = 0;
        for _ in 0..240 {
            if countdown.tick() == TickOutcome::Expired {
                expired += 1;
            }
        }
        assert_eq!(expired, 1);
        assert_eq!(countdown.remaining_secs(), 0);
        assert!(!countdown.is_running());

        assert_eq!(countdown.tick(), TickOutcome::Idle);
        assert_eq!(countdown.remaining_secs(), 0);
    }

    #[test]
    fn stopped_countdown_ignores_ticks() {
        let mut countdown = Countdown::started(10);
        assert_eq!(countdown.tick(), TickOutcome::Ticked { remaining_secs: 9 });
        countdown.stop();
        assert_eq!(countdown.tick(), TickOutcome::Idle);
        assert_eq!(countdown.remaining_secs(), 9);
        assert_eq!(countdown.elapsed_secs(), 1);
    }

    #[test]
    fn reset_refills_and_restarts() {
        let mut countdown = Countdown::started(3);
        countdown.tick();
        countdown.tick();
        countdown.tick();
        assert!(countdown.is_expired());
        countdown.reset();
        assert_eq!(countdown.remaining_secs(), 3);
        assert!(countdown.is_running());
    }

    #[test]
    fn clock_format_is_zero_padded() {
        assert_eq!(format_clock(240), "04:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(605), "10:05");
    }
}
