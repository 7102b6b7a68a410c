//! Time management utilities
//!
//! The widget never reads a clock itself; hosts feed it monotonic seconds.
//! [`FrameClock`] is the host-side helper that produces them.

use std::time::Instant;

/// Monotonic frame clock reporting seconds since creation
///
/// Use [`FrameClock::tick`] in a real frame loop, or [`FrameClock::advance`]
/// to script frames deterministically (replays, tests).
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_frame: Instant,
    delta_time: f64,
    total_time: f64,
    frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Create a new clock at time zero
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Advance by the wall-clock time elapsed since the previous tick
    /// (call once per frame)
    pub fn tick(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame).as_secs_f64();
        self.last_frame = now;
        self.step(elapsed);
    }

    /// Advance by a fixed amount of seconds, ignoring wall-clock time
    ///
    /// Negative deltas are clamped to zero so the clock stays monotonic.
    pub fn advance(&mut self, seconds: f64) {
        self.step(seconds.max(0.0));
    }

    fn step(&mut self, seconds: f64) {
        self.delta_time = seconds;
        self.total_time += seconds;
        self.frame_count += 1;
    }

    /// Time since the last frame in seconds
    pub fn delta_time(&self) -> f64 {
        self.delta_time
    }

    /// Total elapsed seconds; this is the `now` value widgets expect
    pub fn total_seconds(&self) -> f64 {
        self.total_time
    }

    /// Number of frames stepped so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}
