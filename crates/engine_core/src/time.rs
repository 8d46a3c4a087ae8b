//! Frame timing for the render loop.
//!
//! The simulation steps a fixed amount per frame and never reads the delta;
//! timing here only feeds diagnostics.

use std::time::{Duration, Instant};

/// Tracks frame count and timing, and batches frames into report windows.
#[derive(Debug)]
pub struct Time {
    /// Time of the last frame.
    last_frame: Instant,
    /// Frame count since start.
    frame_count: u64,
    /// Length of one statistics window.
    report_interval: Duration,
    /// Time accumulated in the current window.
    window_time: Duration,
    /// Frames counted in the current window.
    window_frames: u32,
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

impl Time {
    /// Create a new time tracker with a 5 second report window.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            last_frame: now,
            frame_count: 0,
            report_interval: Duration::from_secs(5),
            window_time: Duration::ZERO,
            window_frames: 0,
        }
    }

    /// Update timing at the start of a new frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.advance(now - self.last_frame);
        self.last_frame = now;
    }

    fn advance(&mut self, delta: Duration) {
        self.frame_count += 1;
        self.window_time += delta;
        self.window_frames += 1;
    }

    /// Get the current frame count.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Set the length of the statistics window.
    pub fn set_report_interval(&mut self, interval: Duration) {
        self.report_interval = interval;
    }

    /// If the current window is complete, return its average FPS and start a new one.
    pub fn take_report(&mut self) -> Option<f32> {
        if self.window_time < self.report_interval || self.window_frames == 0 {
            return None;
        }
        let secs = self.window_time.as_secs_f32();
        let average = if secs > 0.0 {
            self.window_frames as f32 / secs
        } else {
            0.0
        };
        self.window_time = Duration::ZERO;
        self.window_frames = 0;
        Some(average)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_waits_for_full_window() {
        let mut time = Time::new();
        time.set_report_interval(Duration::from_millis(100));
        time.advance(Duration::from_millis(40));
        assert!(time.take_report().is_none());
        time.advance(Duration::from_millis(60));
        let fps = time.take_report().expect("window complete");
        assert!((fps - 20.0).abs() < 0.01);
        // Window resets after a report.
        assert!(time.take_report().is_none());
        assert_eq!(time.frame_count(), 2);
    }

    #[test]
    fn no_report_before_first_frame() {
        let mut time = Time::new();
        time.set_report_interval(Duration::ZERO);
        assert!(time.take_report().is_none());
        assert_eq!(time.frame_count(), 0);
    }
}
