//! Bitmap text with drop shadow and alpha.
//!
//! Text is drawn pixel by pixel from the 8x8 [`font`](crate::font) onto any
//! `DrawTarget<Color = Bgr555>`. For every lit glyph pixel:
//!
//! 1. a [`TEXT_SHADOW`] pixel goes one down and one right (if on screen),
//! 2. then the foreground pixel is written.
//!
//! Shadow-then-foreground per pixel means a glyph's lit pixels always cover
//! shadows cast by its neighbors.
//!
//! `alpha` is opacity in 5-bit steps: 31 writes `color` as is, lower values
//! blend `color` against [`MENU_BG`], 0 is invisible on the menu background.
//! Glyph pixels whose position is off-screen are skipped along with their
//! shadow.

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Bgr555;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::ContainsPoint;

use crate::blend::{MAX_WEIGHT, blend};
use crate::colors::{MENU_BG, TEXT_SHADOW};
use crate::config::WIDTH_I;
use crate::font::{GLYPH_SIZE, glyph, set_pixels};

/// Horizontal advance per character (monospace).
pub const CHAR_ADVANCE: i32 = GLYPH_SIZE;

/// Alpha value meaning fully opaque.
pub const OPAQUE: u8 = MAX_WEIGHT;

/// Width of a string in pixels, counting every character (supported or not).
#[inline]
pub fn text_width(text: &str) -> i32 { text.chars().count() as i32 * CHAR_ADVANCE }

/// X position that centers `text` horizontally on the screen.
#[inline]
pub fn centered_x(text: &str) -> i32 { (WIDTH_I - text_width(text)) / 2 }

/// Draw one character with its top-left corner at `(x, y)`.
///
/// Characters without a glyph draw nothing.
pub fn draw_char<D>(
    display: &mut D,
    x: i32,
    y: i32,
    c: char,
    color: Bgr555,
    alpha: u8,
) where
    D: DrawTarget<Color = Bgr555>,
{
    let Some(rows) = glyph(c) else {
        return;
    };

    let bounds = display.bounding_box();
    let fg = if alpha >= OPAQUE { color } else { blend(MENU_BG, color, alpha) };

    for (col, row) in set_pixels(rows) {
        let point = Point::new(x + col, y + row);
        if !bounds.contains(point) {
            continue;
        }

        let shadow = point + Point::new(1, 1);
        if bounds.contains(shadow) {
            Pixel(shadow, TEXT_SHADOW).draw(display).ok();
        }
        Pixel(point, fg).draw(display).ok();
    }
}

/// Draw a string left to right with a fixed 8px advance.
///
/// Unsupported characters are skipped but still take up their cell, so the
/// rest of the line keeps its alignment.
pub fn draw_text<D>(
    display: &mut D,
    x: i32,
    y: i32,
    text: &str,
    color: Bgr555,
    alpha: u8,
) where
    D: DrawTarget<Color = Bgr555>,
{
    let mut cursor_x = x;
    for c in text.chars() {
        draw_char(display, cursor_x, y, c, color, alpha);
        cursor_x += CHAR_ADVANCE;
    }
}

/// Draw a string centered horizontally on the screen.
pub fn draw_text_centered<D>(
    display: &mut D,
    y: i32,
    text: &str,
    color: Bgr555,
    alpha: u8,
) where
    D: DrawTarget<Color = Bgr555>,
{
    draw_text(display, centered_x(text), y, text, color, alpha);
}

// =============================================================================
// Unit Tests
// =============================================================================
