//! Monotonic elapsed-time sources and per-frame delta bookkeeping.

use std::cell::Cell;

use web_time::Instant;

/// A monotonic source of elapsed seconds since the clock started.
pub trait Clock {
    /// Seconds since start. Never decreases between calls.
    ///
    /// `f64` so that frame-sized steps stay exact after days of uptime.
    fn elapsed(&self) -> f64;
}

/// Wall clock backed by [`web_time::Instant`] (`performance.now()` on wasm).
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    /// Start a clock at the current instant.
    #[must_use]
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::start()
    }
}

impl Clock for SystemClock {
    fn elapsed(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Host-driven clock for replays and tests.
///
/// Time only moves forward: setting an earlier value is ignored.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    /// A clock sitting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the clock to `seconds` if that is not in the past.
    pub fn set(&self, seconds: f64) {
        if seconds > self.now.get() {
            self.now.set(seconds);
        }
    }

    /// Advance the clock by `seconds` (negative values are ignored).
    pub fn advance(&self, seconds: f64) {
        self.set(self.now.get() + seconds.max(0.0));
    }
}

impl Clock for ManualClock {
    fn elapsed(&self) -> f64 {
        self.now.get()
    }
}

/// Elapsed time at the current and the previous frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClockState {
    /// Elapsed seconds read at the most recent frame.
    pub elapsed: f64,
    /// Elapsed seconds read at the frame before that (seeded at 0).
    pub previous_elapsed: f64,
}

impl ClockState {
    /// Record a new elapsed reading and return the delta since the last
    /// one. The first delta is measured from zero and may be large.
    ///
    /// The subtraction happens in `f64`; only the small delta is narrowed.
    pub fn advance(&mut self, elapsed: f64) -> f32 {
        let delta = (elapsed - self.previous_elapsed).max(0.0);
        self.elapsed = elapsed;
        self.previous_elapsed = elapsed;
        delta as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_never_goes_backwards() {
        let clock = ManualClock::new();
        clock.set(2.0);
        clock.set(1.0);
        assert_eq!(clock.elapsed(), 2.0);
        clock.advance(-1.0);
        assert_eq!(clock.elapsed(), 2.0);
        clock.advance(0.5);
        assert_eq!(clock.elapsed(), 2.5);
    }

    #[test]
    fn first_delta_is_measured_from_zero() {
        let mut state = ClockState::default();
        assert_eq!(state.advance(3.0), 3.0);
        assert_eq!(state.advance(3.25), 0.25);
        assert_eq!(state.previous_elapsed, 3.25);
    }

    #[test]
    fn repeated_reading_yields_zero_delta() {
        let mut state = ClockState::default();
        let _ = state.advance(1.0);
        assert_eq!(state.advance(1.0), 0.0);
    }

    #[test]
    fn deltas_stay_exact_after_days_of_uptime() {
        let clock = ManualClock::new();
        let mut state = ClockState::default();
        clock.set(4.0 * 86_400.0);
        let _ = state.advance(clock.elapsed());

        let mut total = 0.0_f32;
        for _ in 0..60 {
            clock.advance(1.0 / 60.0);
            let delta = state.advance(clock.elapsed());
            assert!((delta - 1.0 / 60.0).abs() < 1e-6);
            total += delta;
        }
        assert!((total - 1.0).abs() < 1e-4);
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::start();
        let a = clock.elapsed();
        let b = clock.elapsed();
        assert!(b >= a);
    }
}
