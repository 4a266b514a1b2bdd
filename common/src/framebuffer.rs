//! Owned 240x160 framebuffer in the display's native pixel format.
//!
//! Pixels are packed BGR555 words addressed as `pixels[y * width + x]`,
//! exactly the layout the display scans out, so presenting a frame is a
//! straight copy.
//!
//! # Drawing
//!
//! [`Framebuffer`] implements [`DrawTarget`], so the core renderers and any
//! `embedded_graphics` drawable can target it. All writes are clipped:
//! a pixel outside the frame is silently dropped.
//!
//! `clear()` and `fill_solid()` bypass the per-pixel path and write rows
//! directly.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Bgr555;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PointsIter, Rectangle};

use crate::config::{HEIGHT_I, SCREEN_HEIGHT, SCREEN_PIXELS, SCREEN_WIDTH, WIDTH_I};

/// Software framebuffer for the fixed 240x160 mode.
pub struct Framebuffer {
    pixels: [u16; SCREEN_PIXELS],
}

impl Framebuffer {
    /// Create a framebuffer filled with black.
    pub const fn new() -> Self {
        Self {
            pixels: [0; SCREEN_PIXELS],
        }
    }

    /// Fill every pixel with one color.
    pub fn clear_buffer(
        &mut self,
        color: Bgr555,
    ) {
        self.pixels.fill(color.into_storage());
    }

    /// Write one pixel. Coordinates outside the frame are ignored.
    #[inline]
    pub fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: Bgr555,
    ) {
        if let Some(idx) = Self::index(x, y) {
            self.pixels[idx] = color.into_storage();
        }
    }

    /// Read one pixel, or `None` outside the frame.
    #[inline]
    pub fn pixel(
        &self,
        x: i32,
        y: i32,
    ) -> Option<Bgr555> {
        Self::index(x, y).map(|idx| Bgr555::from(RawU16::new(self.pixels[idx])))
    }

    /// Raw packed pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[u16] { &self.pixels }

    /// Pixels as colors, row-major. Suitable for `fill_contiguous` on another target.
    pub fn colors(&self) -> impl Iterator<Item = Bgr555> + '_ {
        self.pixels.iter().map(|&raw| Bgr555::from(RawU16::new(raw)))
    }

    #[inline]
    const fn index(
        x: i32,
        y: i32,
    ) -> Option<usize> {
        if x >= 0 && x < WIDTH_I && y >= 0 && y < HEIGHT_I {
            Some(y as usize * SCREEN_WIDTH as usize + x as usize)
        } else {
            None
        }
    }
}

impl Default for Framebuffer {
    fn default() -> Self { Self::new() }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size { Size::new(SCREEN_WIDTH, SCREEN_HEIGHT) }
}

impl DrawTarget for Framebuffer {
    type Color = Bgr555;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_contiguous<I>(
        &mut self,
        area: &Rectangle,
        colors: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // Colors map onto the full (unclipped) area, so walk it and let
        // set_pixel drop whatever falls outside.
        let mut colors = colors.into_iter();
        for point in area.points() {
            match colors.next() {
                Some(color) => self.set_pixel(point.x, point.y, color),
                None => break,
            }
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        let raw = color.into_storage();
        let x_start = drawable_area.top_left.x as usize;
        let width = drawable_area.size.width as usize;

        for y in drawable_area.rows() {
            let row_start = y as usize * SCREEN_WIDTH as usize + x_start;
            self.pixels[row_start..row_start + width].fill(raw);
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        self.clear_buffer(color);
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::PrimitiveStyle;

    use super::*;
    use crate::colors::{BLACK, MENU_BG, WHITE};

    #[test]
    fn test_new_is_black() {
        let fb = Framebuffer::new();
        assert!(fb.pixels().iter().all(|&p| p == 0));
        assert_eq!(fb.pixels().len(), 240 * 160);
    }

    #[test]
    fn test_row_major_layout() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(3, 2, WHITE);
        assert_eq!(fb.pixels()[2 * 240 + 3], 0x7FFF);
        assert_eq!(fb.pixel(3, 2), Some(WHITE));
    }

    #[test]
    fn test_bgr555_packing() {
        let mut fb = Framebuffer::new();
        fb.set_pixel(0, 0, Bgr555::new(1, 2, 3));
        assert_eq!(fb.pixels()[0], 1 | (2 << 5) | (3 << 10));
    }

    #[test]
    fn test_out_of_bounds_writes_are_clipped() {
        let mut fb = Framebuffer::new();
        for (x, y) in [(-1, 0), (0, -1), (240, 0), (0, 160), (i32::MIN, i32::MAX)] {
            fb.set_pixel(x, y, WHITE);
            assert_eq!(fb.pixel(x, y), None);
        }
        assert!(fb.pixels().iter().all(|&p| p == 0), "nothing should have been written");
    }

    #[test]
    fn test_clear_fills_everything() {
        let mut fb = Framebuffer::new();
        fb.clear(MENU_BG).ok();
        assert!(fb.colors().all(|c| c == MENU_BG));
    }

    #[test]
    fn test_fill_solid_is_clipped_to_frame() {
        let mut fb = Framebuffer::new();
        Rectangle::new(Point::new(235, 155), Size::new(20, 20))
            .into_styled(PrimitiveStyle::with_fill(WHITE))
            .draw(&mut fb)
            .ok();

        assert_eq!(fb.pixel(235, 155), Some(WHITE));
        assert_eq!(fb.pixel(239, 159), Some(WHITE));
        assert_eq!(fb.pixel(234, 155), Some(BLACK));
        assert_eq!(fb.pixel(235, 154), Some(BLACK));
        let white = fb.colors().filter(|&c| c == WHITE).count();
        assert_eq!(white, 5 * 5);
    }

    #[test]
    fn test_fill_contiguous_partially_offscreen() {
        let mut fb = Framebuffer::new();
        let area = Rectangle::new(Point::new(-1, 0), Size::new(2, 1));
        fb.fill_contiguous(&area, [WHITE, MENU_BG]).ok();
        // First color lands off-screen, second at (0, 0).
        assert_eq!(fb.pixel(0, 0), Some(MENU_BG));
    }
}
