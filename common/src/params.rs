//! Shared simulation parameters.
//!
//! Wind, rain speed level, mood background and thunder live in one
//! [`SimParams`] value owned by the game loop. The input layer mutates it,
//! the rain field and renderer read it.

use embedded_graphics::pixelcolor::Bgr555;

use crate::blend::blend;
use crate::colors::{MOOD_COLORS, MOOD_COUNT, THUNDER_FLASH};
use crate::config::{MAX_WIND, THUNDER_DURATION};

// =============================================================================
// Speed Level
// =============================================================================

/// Discrete rain speed, cycled with Up/Down.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum SpeedLevel {
    /// 2 pixels per tick.
    Slow,
    /// 4 pixels per tick.
    #[default]
    Medium,
    /// 6 pixels per tick.
    Fast,
}

impl SpeedLevel {
    /// Base fall speed in pixels per tick.
    #[inline]
    pub const fn pixels_per_tick(self) -> u8 {
        match self {
            Self::Slow => 2,
            Self::Medium => 4,
            Self::Fast => 6,
        }
    }

    /// One step faster. Fast stays Fast.
    pub const fn faster(self) -> Self {
        match self {
            Self::Slow => Self::Medium,
            Self::Medium | Self::Fast => Self::Fast,
        }
    }

    /// One step slower. Slow stays Slow.
    pub const fn slower(self) -> Self {
        match self {
            Self::Fast => Self::Medium,
            Self::Medium | Self::Slow => Self::Slow,
        }
    }

    /// Display label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Slow => "SLOW",
            Self::Medium => "MEDIUM",
            Self::Fast => "FAST",
        }
    }
}

// =============================================================================
// Thunder
// =============================================================================

/// Thunder flash countdown.
///
/// While `timer > 0` the background is pulled toward the flash color by
/// `intensity / 2`. The effect ends on its own when the timer runs out.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct Thunder {
    /// Ticks left in the flash.
    pub timer: u8,
    /// Strength of the flash (see [`crate::config::THUNDER_SOFT`] / [`crate::config::THUNDER_HEAVY`]).
    pub intensity: u8,
}

impl Thunder {
    /// Start (or restart) a flash.
    #[inline]
    pub const fn trigger(
        &mut self,
        intensity: u8,
    ) {
        self.timer = THUNDER_DURATION;
        self.intensity = intensity;
    }

    /// Count down one tick. Never goes below zero.
    #[inline]
    pub const fn tick(&mut self) { self.timer = self.timer.saturating_sub(1); }

    /// Whether the flash is currently visible.
    #[inline]
    pub const fn is_active(&self) -> bool { self.timer > 0 }

    /// Blend weight toward the flash color.
    #[inline]
    pub const fn flash_weight(&self) -> u8 { self.intensity >> 1 }
}

// =============================================================================
// Simulation Parameters
// =============================================================================

/// All parameters the input layer can change during a session.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct SimParams {
    /// Horizontal drift added to every drop each tick, in `-MAX_WIND..=MAX_WIND`.
    pub wind: i8,
    /// Current speed level.
    pub speed: SpeedLevel,
    /// Index into [`MOOD_COLORS`].
    pub background: usize,
    /// Thunder flash state.
    pub thunder: Thunder,
}

impl SimParams {
    /// Default parameters: calm, medium speed, first mood.
    pub const fn new() -> Self {
        Self {
            wind: 0,
            speed: SpeedLevel::Medium,
            background: 0,
            thunder: Thunder {
                timer: 0,
                intensity: 0,
            },
        }
    }

    /// Push the wind one step left (`-1`) or right (`+1`), clamped to the wind limit.
    #[inline]
    pub fn nudge_wind(
        &mut self,
        delta: i8,
    ) {
        self.wind = self.wind.saturating_add(delta).clamp(-MAX_WIND, MAX_WIND);
    }

    /// Advance to the next mood background, wrapping around.
    #[inline]
    pub const fn next_background(&mut self) { self.background = (self.background + 1) % MOOD_COUNT; }

    /// Start a thunder flash. Does not touch drops or the scene.
    #[inline]
    pub const fn trigger_thunder(
        &mut self,
        intensity: u8,
    ) {
        self.thunder.trigger(intensity);
    }

    /// Background for this frame: the mood color, flashed while thunder is active.
    pub fn background_color(&self) -> Bgr555 {
        let base = MOOD_COLORS[self.background % MOOD_COUNT];
        if self.thunder.is_active() {
            blend(base, THUNDER_FLASH, self.thunder.flash_weight())
        } else {
            base
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{THUNDER_HEAVY, THUNDER_SOFT};

    #[test]
    fn test_speed_levels() {
        assert_eq!(SpeedLevel::Slow.pixels_per_tick(), 2);
        assert_eq!(SpeedLevel::Medium.pixels_per_tick(), 4);
        assert_eq!(SpeedLevel::Fast.pixels_per_tick(), 6);
        assert_eq!(SpeedLevel::default(), SpeedLevel::Medium);
    }

    #[test]
    fn test_speed_cycle_saturates() {
        assert_eq!(SpeedLevel::Slow.faster(), SpeedLevel::Medium);
        assert_eq!(SpeedLevel::Medium.faster(), SpeedLevel::Fast);
        assert_eq!(SpeedLevel::Fast.faster(), SpeedLevel::Fast);
        assert_eq!(SpeedLevel::Fast.slower(), SpeedLevel::Medium);
        assert_eq!(SpeedLevel::Medium.slower(), SpeedLevel::Slow);
        assert_eq!(SpeedLevel::Slow.slower(), SpeedLevel::Slow);
    }

    #[test]
    fn test_wind_is_clamped() {
        let mut params = SimParams::new();
        for _ in 0..10 {
            params.nudge_wind(-1);
        }
        assert_eq!(params.wind, -MAX_WIND);
        for _ in 0..10 {
            params.nudge_wind(1);
        }
        assert_eq!(params.wind, MAX_WIND);
    }

    #[test]
    fn test_background_wraps() {
        let mut params = SimParams::new();
        for expected in [1, 2, 3, 0, 1] {
            params.next_background();
            assert_eq!(params.background, expected);
        }
    }

    #[test]
    fn test_thunder_counts_down_to_zero() {
        let mut thunder = Thunder::default();
        thunder.trigger(THUNDER_HEAVY);
        assert_eq!(thunder.timer, THUNDER_DURATION);
        for expected in (0..THUNDER_DURATION).rev() {
            thunder.tick();
            assert_eq!(thunder.timer, expected);
        }
        thunder.tick();
        assert_eq!(thunder.timer, 0, "timer must not wrap below zero");
        assert!(!thunder.is_active());
    }

    #[test]
    fn test_flash_weight_is_half_intensity() {
        let mut thunder = Thunder::default();
        thunder.trigger(THUNDER_SOFT);
        assert_eq!(thunder.flash_weight(), 4);
        thunder.trigger(THUNDER_HEAVY);
        assert_eq!(thunder.flash_weight(), 8);
    }

    #[test]
    fn test_background_color_flashes_only_while_active() {
        let mut params = SimParams::new();
        assert_eq!(params.background_color(), MOOD_COLORS[0]);

        params.trigger_thunder(THUNDER_HEAVY);
        let flashed = params.background_color();
        assert_eq!(flashed, blend(MOOD_COLORS[0], THUNDER_FLASH, 8));
        assert_ne!(flashed, MOOD_COLORS[0]);

        params.thunder.timer = 0;
        assert_eq!(params.background_color(), MOOD_COLORS[0]);
    }
}
