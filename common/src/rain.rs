//! Raindrop field with fixed capacity and in-place recycling.
//!
//! The field owns exactly [`MAX_RAINDROPS`] drops for its whole lifetime.
//! A drop that falls past the bottom edge is re-seeded above the top edge in
//! the same tick, which gives endless rain from a fixed array.
//!
//! # Per-tick motion
//!
//! ```text
//! y += speed
//! x += wind
//! y >= height      -> recycle: y in [-50, 0), x in [-20, width + 20)
//! x >= width + 10  -> x = -10
//! x <  -10         -> x = width + 9
//! ```
//!
//! The horizontal wrap keeps `-10 <= x < width + 10` after every tick, so a
//! drop blown off one side re-enters from the other.

use crate::config::{
    HEIGHT_I,
    MAX_LENGTH,
    MAX_RAINDROPS,
    MIN_LENGTH,
    RECYCLE_SPAWN_DEPTH,
    RESET_SPAWN_DEPTH,
    SCREEN_WIDTH,
    SPAWN_OVERSCAN,
    WIDTH_I,
    WRAP_MARGIN,
};
use crate::params::{SimParams, SpeedLevel};
use crate::rng::Rng;

/// One raindrop.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Raindrop {
    /// Column in pixels. May sit up to the wrap margin off either side.
    pub x: i16,
    /// Row of the streak head in pixels. Negative while waiting above the screen.
    pub y: i16,
    /// Streak length in pixels (2-5).
    pub length: u8,
    /// Fall speed in pixels per tick.
    pub speed: u8,
}

/// Fixed-size collection of raindrops.
pub struct RainField {
    drops: [Raindrop; MAX_RAINDROPS],
    rng: Rng,
    generation: u32,
}

impl RainField {
    /// Create a field with all drops zeroed. Call [`reset`](Self::reset) before use.
    pub const fn new(seed: u32) -> Self {
        Self {
            drops: [Raindrop {
                x: 0,
                y: 0,
                length: 0,
                speed: 0,
            }; MAX_RAINDROPS],
            rng: Rng::new(seed),
            generation: 0,
        }
    }

    /// Scatter every drop above the screen and calm the weather.
    ///
    /// Drops get `x` in `[0, width)`, `y` in `[-100, 0)`, a random length and
    /// the current speed level plus 0 or 1. Wind and the thunder timer go to 0.
    pub fn reset(
        &mut self,
        params: &mut SimParams,
    ) {
        let level = params.speed.pixels_per_tick();
        for drop in &mut self.drops {
            drop.x = self.rng.below(SCREEN_WIDTH) as i16;
            drop.y = -(1 + self.rng.below(RESET_SPAWN_DEPTH) as i16);
            drop.length = Self::random_length(&mut self.rng);
            drop.speed = Self::jittered_speed(&mut self.rng, level);
        }
        params.wind = 0;
        params.thunder.timer = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Advance the simulation by one tick.
    pub fn advance(
        &mut self,
        params: &mut SimParams,
    ) {
        let level = params.speed.pixels_per_tick();
        let wind = i16::from(params.wind);

        for drop in &mut self.drops {
            drop.y += i16::from(drop.speed);
            drop.x += wind;

            if i32::from(drop.y) >= HEIGHT_I {
                drop.y = -(1 + self.rng.below(RECYCLE_SPAWN_DEPTH) as i16);
                drop.x = self.rng.range(-SPAWN_OVERSCAN, WIDTH_I + SPAWN_OVERSCAN) as i16;
                drop.length = Self::random_length(&mut self.rng);
                drop.speed = Self::jittered_speed(&mut self.rng, level);
            }

            let x = i32::from(drop.x);
            if x >= WIDTH_I + WRAP_MARGIN {
                drop.x = -WRAP_MARGIN as i16;
            } else if x < -WRAP_MARGIN {
                drop.x = (WIDTH_I + WRAP_MARGIN - 1) as i16;
            }
        }

        params.thunder.tick();
    }

    /// Switch speed level and force every drop to exactly that speed.
    ///
    /// Unlike reset and recycling, no jitter is added.
    pub fn set_speed_level(
        &mut self,
        params: &mut SimParams,
        level: SpeedLevel,
    ) {
        params.speed = level;
        let speed = level.pixels_per_tick();
        for drop in &mut self.drops {
            drop.speed = speed;
        }
    }

    /// All drops.
    #[inline]
    pub fn drops(&self) -> &[Raindrop] { &self.drops }

    /// Number of times [`reset`](Self::reset) has run.
    #[inline]
    pub const fn generation(&self) -> u32 { self.generation }

    #[cfg(test)]
    pub(crate) fn drops_mut(&mut self) -> &mut [Raindrop] { &mut self.drops }

    fn random_length(rng: &mut Rng) -> u8 { MIN_LENGTH + rng.below(u32::from(MAX_LENGTH - MIN_LENGTH) + 1) as u8 }

    fn jittered_speed(
        rng: &mut Rng,
        level: u8,
    ) -> u8 {
        level + rng.below(2) as u8
    }
}

impl Default for RainField {
    fn default() -> Self { Self::new(crate::rng::DEFAULT_SEED) }
}

// =============================================================================
// Unit Tests
// =============================================================================
