//! Heavy rain simulator for desktop platforms.
//!
//! Runs the game from the common crate in an SDL window using
//! embedded-graphics-simulator. See [`keymap`] for the controls; `H` toggles
//! the debug overlay.

// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

mod keymap;
mod overlay;
mod platform;
mod profiling;
mod timing;

use std::time::{SystemTime, UNIX_EPOCH};

use heavy_rain_common::platform::run;
use heavy_rain_common::rng::DEFAULT_SEED;
use heavy_rain_common::{Framebuffer, Game};

use crate::platform::SimPlatform;

fn main() {
    let mut platform = SimPlatform::new();
    let mut game = Game::new(clock_seed());
    let mut framebuffer = Framebuffer::new();

    run(&mut platform, &mut game, &mut framebuffer);
}

/// Seed from the wall clock so each run rains differently.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(DEFAULT_SEED, |d| d.subsec_nanos() ^ d.as_secs() as u32)
}
