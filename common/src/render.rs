//! Scene rendering.
//!
//! Both scenes repaint the whole frame every tick, so no dirty tracking is
//! needed:
//!
//! - [`draw_rain_scene`]: mood background (flashed during thunder), then one
//!   fading vertical streak per visible drop
//! - [`draw_menu`]: dark background and six centered lines, one of them
//!   pulsing
//!
//! # Streak shading
//!
//! For a drop of length `L` at `(x, y)` the pixel at `(x, y + j)` is:
//!
//! | `j` | color |
//! |-----|-------|
//! | 0 | [`RAIN_BRIGHT`] |
//! | 1..L | `blend(RAIN_DIM, background, (L - j) * 31 / L)` |
//!
//! The blend target is the frame's actual background, so trails follow the
//! thunder flash and the chosen mood.

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Bgr555;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::ContainsPoint;
use micromath::F32Ext;

use crate::blend::{MAX_WEIGHT, blend};
use crate::colors::{MENU_BG, RAIN_BRIGHT, RAIN_DIM, WHITE};
use crate::config::{MENU_ALPHA_MAX, MENU_ALPHA_MIN, MENU_PULSE_PERIOD, MENU_TOP_Y};
use crate::params::SimParams;
use crate::rain::{RainField, Raindrop};
use crate::text::{OPAQUE, draw_text_centered};

// =============================================================================
// Menu Layout
// =============================================================================

/// One line of the menu.
#[derive(Clone, Copy, Debug)]
pub struct MenuLine {
    /// Offset below [`MENU_TOP_Y`].
    pub dy: i32,
    /// Text (font charset only).
    pub text: &'static str,
    /// Whether this line uses the pulsing alpha.
    pub pulses: bool,
}

/// Menu lines, top to bottom.
pub const MENU_LINES: [MenuLine; 6] = [
    MenuLine { dy: 0, text: "HEAVY RAIN", pulses: false },
    MenuLine { dy: 20, text: "RAIN STORM", pulses: false },
    MenuLine { dy: 40, text: "240X160 MODE 3", pulses: false },
    MenuLine { dy: 55, text: "15 BIT COLOR", pulses: false },
    MenuLine { dy: 75, text: "PRESS A", pulses: true },
    MenuLine { dy: 90, text: "HOLD DPAD", pulses: false },
];

// =============================================================================
// Menu Pulse
// =============================================================================

/// Alpha of the "press A" prompt for a given frame.
///
/// A sine over [`MENU_PULSE_PERIOD`] ticks between [`MENU_ALPHA_MIN`] and
/// [`MENU_ALPHA_MAX`], starting from the midpoint.
pub fn menu_prompt_alpha(frame: u32) -> u8 {
    let mid = f32::from(MENU_ALPHA_MIN + MENU_ALPHA_MAX) / 2.0;
    let amplitude = f32::from(MENU_ALPHA_MAX - MENU_ALPHA_MIN) / 2.0;
    let phase = (frame % MENU_PULSE_PERIOD) as f32 / MENU_PULSE_PERIOD as f32 * core::f32::consts::TAU;

    // Same sin on host and target.
    let alpha = mid + amplitude * F32Ext::sin(phase) + 0.5;
    (alpha as u8).clamp(MENU_ALPHA_MIN, MENU_ALPHA_MAX)
}

/// Draw the title menu.
pub fn draw_menu<D>(
    display: &mut D,
    prompt_alpha: u8,
) where
    D: DrawTarget<Color = Bgr555>,
{
    display.clear(MENU_BG).ok();

    for line in &MENU_LINES {
        let alpha = if line.pulses { prompt_alpha } else { OPAQUE };
        draw_text_centered(display, MENU_TOP_Y + line.dy, line.text, WHITE, alpha);
    }
}

// =============================================================================
// Rain Scene
// =============================================================================

/// Color of streak pixel `j` for a drop of `length` over `background`.
#[inline]
pub fn streak_color(
    j: u8,
    length: u8,
    background: Bgr555,
) -> Bgr555 {
    if j == 0 || length == 0 {
        return RAIN_BRIGHT;
    }
    let fade = (u16::from(length.saturating_sub(j)) * u16::from(MAX_WEIGHT) / u16::from(length)) as u8;
    blend(RAIN_DIM, background, fade)
}

/// Draw the rain scene: background fill, then every visible drop.
pub fn draw_rain_scene<D>(
    display: &mut D,
    field: &RainField,
    params: &SimParams,
) where
    D: DrawTarget<Color = Bgr555>,
{
    let background = params.background_color();
    display.clear(background).ok();

    for drop in field.drops() {
        draw_streak(display, drop, background);
    }
}

/// Draw one drop's streak downward from its head. Drops whose head is not
/// on a visible row are skipped; streak pixels past the frame are clipped.
fn draw_streak<D>(
    display: &mut D,
    drop: &Raindrop,
    background: Bgr555,
) where
    D: DrawTarget<Color = Bgr555>,
{
    let bounds = display.bounding_box();
    let top = bounds.top_left.y;
    let bottom = top + bounds.size.height as i32;
    let (x, y) = (i32::from(drop.x), i32::from(drop.y));

    if y < top || y >= bottom {
        return;
    }

    for j in 0..drop.length {
        let point = Point::new(x, y + i32::from(j));
        if bounds.contains(point) {
            Pixel(point, streak_color(j, drop.length, background)).draw(display).ok();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
