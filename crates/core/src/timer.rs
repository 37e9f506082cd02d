//! Session timer - elapsed clock and aggregate stats for one session
//!
//! The timer does not own a thread or an OS timer. The host advances it with
//! [`SessionTimer::tick`], the same fixed-timestep style the round engine
//! uses, and it only counts while running. Stopping is destructive: a
//! session's clock and stats never outlive it.

use crate::types::{SessionStats, TICK_MS};

#[derive(Debug, Clone, Default)]
pub struct SessionTimer {
    running: bool,
    total_seconds: u32,
    /// Milliseconds accumulated toward the next whole second.
    carry_ms: u32,
    stats: SessionStats,
}

impl SessionTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset clock and stats and begin counting.
    ///
    /// Starting an already running timer restarts it; there is never more
    /// than one clock.
    pub fn start(&mut self) {
        self.stop();
        self.running = true;
    }

    /// Stop counting and reset clock and stats to zero.
    pub fn stop(&mut self) {
        self.running = false;
        self.total_seconds = 0;
        self.carry_ms = 0;
        self.stats = SessionStats::default();
    }

    /// Advance the clock by `elapsed_ms`. Returns how many whole seconds elapsed.
    pub fn tick(&mut self, elapsed_ms: u32) -> u32 {
        if !self.running {
            return 0;
        }
        let total = self.carry_ms.saturating_add(elapsed_ms);
        let seconds = total / TICK_MS;
        self.carry_ms = total % TICK_MS;
        self.total_seconds = self.total_seconds.saturating_add(seconds);
        seconds
    }

    pub fn increment_attempts(&mut self) {
        self.stats.attempts = self.stats.attempts.saturating_add(1);
    }

    /// Count a correct guess and extend the streak.
    ///
    /// Never lets `correct` overtake `attempts`.
    pub fn increment_correct(&mut self) {
        if self.stats.correct < self.stats.attempts {
            self.stats.correct += 1;
        }
        self.stats.streak = self.stats.streak.saturating_add(1);
    }

    pub fn reset_streak(&mut self) {
        self.stats.streak = 0;
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Elapsed time as zero-padded `MM:SS` (minutes keep growing past 99).
    pub fn formatted_time(&self) -> String {
        format_clock(self.total_seconds)
    }

    /// Correct guesses per minute, biased by one second so it is defined at 0.
    pub fn ratio(&self) -> u32 {
        score_ratio(self.stats.correct, self.total_seconds)
    }
}

/// `MM:SS`, zero-padded.
pub fn format_clock(total_seconds: u32) -> String {
    format!("{:02}:{:02}", total_seconds / 60, total_seconds % 60)
}

/// `floor(correct * 60 / (seconds + 1))`.
pub fn score_ratio(correct: u32, seconds: u32) -> u32 {
    let num = u64::from(correct) * 60;
    let den = u64::from(seconds) + 1;
    u32::try_from(num / den).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_only_while_running() {
        let mut t = SessionTimer::new();
        assert_eq!(t.tick(5000), 0);
        assert_eq!(t.total_seconds(), 0);

        t.start();
        assert_eq!(t.tick(999), 0);
        assert_eq!(t.tick(1), 1);
        assert_eq!(t.tick(2500), 2);
        assert_eq!(t.total_seconds(), 3);
        assert_eq!(t.formatted_time(), "00:03");
    }

    #[test]
    fn restart_resets_instead_of_stacking() {
        let mut t = SessionTimer::new();
        t.start();
        t.tick(4_000);
        t.increment_attempts();
        t.start();
        assert!(t.running());
        assert_eq!(t.total_seconds(), 0);
        assert_eq!(t.stats(), SessionStats::default());
        t.tick(1_000);
        assert_eq!(t.total_seconds(), 1);
    }

    #[test]
    fn stop_is_destructive() {
        let mut t = SessionTimer::new();
        t.start();
        t.tick(61_000);
        t.increment_attempts();
        t.increment_correct();
        t.stop();
        assert!(!t.running());
        assert_eq!(t.total_seconds(), 0);
        assert_eq!(t.stats(), SessionStats::default());
        assert_eq!(t.tick(1_000), 0);
    }

    #[test]
    fn streak_counts_trailing_correct_run() {
        let mut t = SessionTimer::new();
        t.start();
        for correct in [true, true, false, true, true, true] {
            t.increment_attempts();
            if correct {
                t.increment_correct();
            } else {
                t.reset_streak();
            }
        }
        assert_eq!(t.stats(), SessionStats { attempts: 6, correct: 5, streak: 3 });
    }

    #[test]
    fn correct_never_exceeds_attempts() {
        let mut t = SessionTimer::new();
        t.start();
        t.increment_correct();
        assert_eq!(t.stats().correct, 0);
        assert!(t.stats().correct <= t.stats().attempts);
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(3_599), "59:59");
        assert_eq!(format_clock(6_000), "100:00");
    }

    #[test]
    fn ratio_is_biased_and_finite() {
        assert_eq!(score_ratio(0, 0), 0);
        assert_eq!(score_ratio(1, 0), 60);
        assert_eq!(score_ratio(3, 59), 3);
        assert_eq!(score_ratio(10, 119), 5);
        assert_eq!(score_ratio(u32::MAX, 0), u32::MAX);
        assert_eq!(score_ratio(5, u32::MAX), 0);
    }
}
