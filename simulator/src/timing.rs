//! Timing constants for the simulator.
//!
//! These use `std::time::Duration`, which the `no_std` common crate cannot,
//! so they live here.

use std::time::Duration;

/// Target frame time (~60 FPS). The frame clock sleeps off whatever is left.
pub const FRAME_TIME: Duration = Duration::from_micros(16_667);

/// Interval over which the displayed FPS is averaged.
pub const FPS_WINDOW: Duration = Duration::from_secs(1);
