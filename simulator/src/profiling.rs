//! Frame timing statistics for the debug overlay.

use std::time::{Duration, Instant};

use heavy_rain_common::debug_log::push_u32;
use heapless::String;

use crate::timing::FPS_WINDOW;

/// Frame timing measured by the frame clock.
pub struct ProfilingMetrics {
    // Last frame (microseconds)
    pub frame_time_us: u32,
    pub work_time_us: u32,
    pub sleep_time_us: u32,

    // Statistics
    pub frame_time_min_us: u32,
    pub frame_time_max_us: u32,
    frame_time_avg_us: f32,
    pub total_frames: u64,

    // FPS over a sliding window
    fps: u32,
    window_frames: u32,
    window_start: Instant,
}

impl ProfilingMetrics {
    const EMA_ALPHA: f32 = 0.1;

    pub fn new() -> Self {
        Self {
            frame_time_us: 0,
            work_time_us: 0,
            sleep_time_us: 0,
            frame_time_min_us: u32::MAX,
            frame_time_max_us: 0,
            frame_time_avg_us: 0.0,
            total_frames: 0,
            fps: 0,
            window_frames: 0,
            window_start: Instant::now(),
        }
    }

    /// Record one finished frame.
    pub fn record_frame(
        &mut self,
        total_time: Duration,
        work_time: Duration,
        sleep_time: Duration,
    ) {
        let total_us = total_time.as_micros() as u32;
        self.frame_time_us = total_us;
        self.work_time_us = work_time.as_micros() as u32;
        self.sleep_time_us = sleep_time.as_micros() as u32;

        self.frame_time_min_us = self.frame_time_min_us.min(total_us);
        self.frame_time_max_us = self.frame_time_max_us.max(total_us);

        if self.total_frames == 0 {
            self.frame_time_avg_us = total_us as f32;
        } else {
            self.frame_time_avg_us =
                Self::EMA_ALPHA.mul_add(total_us as f32, (1.0 - Self::EMA_ALPHA) * self.frame_time_avg_us);
        }
        self.total_frames += 1;

        self.window_frames += 1;
        let elapsed = self.window_start.elapsed();
        if elapsed >= FPS_WINDOW {
            self.fps = (self.window_frames as f32 / elapsed.as_secs_f32()).round() as u32;
            self.window_frames = 0;
            self.window_start = Instant::now();
        }
    }

    /// Frames per second over the last complete window.
    #[inline]
    pub const fn fps(&self) -> u32 { self.fps }

    #[inline]
    pub const fn frame_time_avg_us(&self) -> u32 { self.frame_time_avg_us as u32 }

    /// Smallest recorded frame time, 0 before the first frame.
    #[inline]
    pub const fn frame_time_min_us(&self) -> u32 {
        if self.frame_time_min_us == u32::MAX { 0 } else { self.frame_time_min_us }
    }
}

impl Default for ProfilingMetrics {
    fn default() -> Self { Self::new() }
}

/// Format microseconds as milliseconds with one decimal, e.g. `16.6`.
pub fn push_ms<const N: usize>(
    s: &mut String<N>,
    micros: u32,
) {
    push_u32(s, micros / 1000);
    s.push('.').ok();
    push_u32(s, (micros % 1000) / 100);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_max_avg() {
        let mut m = ProfilingMetrics::new();
        assert_eq!(m.frame_time_min_us(), 0);

        m.record_frame(Duration::from_micros(16_000), Duration::from_micros(2_000), Duration::from_micros(14_000));
        m.record_frame(Duration::from_micros(18_000), Duration::from_micros(3_000), Duration::from_micros(15_000));

        assert_eq!(m.frame_time_min_us(), 16_000);
        assert_eq!(m.frame_time_max_us, 18_000);
        assert!((16_190..=16_200).contains(&m.frame_time_avg_us()), "EMA with alpha 0.1");
        assert_eq!(m.total_frames, 2);
        assert_eq!(m.work_time_us, 3_000);
    }

    #[test]
    fn test_push_ms() {
        let mut s: String<12> = String::new();
        push_ms(&mut s, 16_667);
        assert_eq!(s.as_str(), "16.6");

        let mut s: String<12> = String::new();
        push_ms(&mut s, 450);
        assert_eq!(s.as_str(), "0.4");
    }
}
