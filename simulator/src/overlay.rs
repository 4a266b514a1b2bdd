//! Debug overlay drawn over the presented frame.
//!
//! Shows frame timing, the live simulation parameters and the most recent
//! debug log lines in a dark panel at the top of the screen. Text uses the
//! game's own glyph font, so only uppercase letters, digits, space and
//! `< - > .` appear.

use embedded_graphics::pixelcolor::Bgr555;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use heapless::String;
use heavy_rain_common::colors::{BLACK, RAIN_BRIGHT, WHITE};
use heavy_rain_common::config::SCREEN_WIDTH;
use heavy_rain_common::debug_log::{LOG_BUFFER_SIZE, push_i32, push_u32};
use heavy_rain_common::text::{OPAQUE, draw_text};
use heavy_rain_common::{Game, Scene};

use crate::profiling::{ProfilingMetrics, push_ms};

const MARGIN: i32 = 2;
const LINE_HEIGHT: i32 = 10;
const STAT_LINES: i32 = 4;
const PANEL_HEIGHT: u32 = ((STAT_LINES + LOG_BUFFER_SIZE as i32) * LINE_HEIGHT + MARGIN * 2) as u32;

const STAT_COLOR: Bgr555 = WHITE;
const LOG_COLOR: Bgr555 = RAIN_BRIGHT;
const LOG_ALPHA: u8 = 24;

/// Draw the overlay for the current frame.
pub fn draw_overlay<D>(
    display: &mut D,
    game: &Game,
    metrics: &ProfilingMetrics,
) where
    D: DrawTarget<Color = Bgr555>,
{
    Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, PANEL_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(BLACK))
        .draw(display)
        .ok();

    let mut y = MARGIN;
    draw_text(display, MARGIN, y, &timing_line(metrics), STAT_COLOR, OPAQUE);
    y += LINE_HEIGHT;
    draw_text(display, MARGIN, y, &range_line(metrics), STAT_COLOR, OPAQUE);
    y += LINE_HEIGHT;
    draw_text(display, MARGIN, y, &split_line(metrics), STAT_COLOR, OPAQUE);
    y += LINE_HEIGHT;
    draw_text(display, MARGIN, y, &params_line(game), STAT_COLOR, OPAQUE);
    y += LINE_HEIGHT;

    for line in game.log().iter() {
        draw_text(display, MARGIN, y, line, LOG_COLOR, LOG_ALPHA);
        y += LINE_HEIGHT;
    }
}

/// `FPS 60 FRAME 16.6`
fn timing_line(metrics: &ProfilingMetrics) -> String<32> {
    let mut s = String::new();
    s.push_str("FPS ").ok();
    push_u32(&mut s, metrics.fps());
    s.push_str(" FRAME ").ok();
    push_ms(&mut s, metrics.frame_time_us);
    s
}

/// `MIN 16.6 MAX 17.1 AVG 16.7`
fn range_line(metrics: &ProfilingMetrics) -> String<32> {
    let mut s = String::new();
    s.push_str("MIN ").ok();
    push_ms(&mut s, metrics.frame_time_min_us());
    s.push_str(" MAX ").ok();
    push_ms(&mut s, metrics.frame_time_max_us);
    s.push_str(" AVG ").ok();
    push_ms(&mut s, metrics.frame_time_avg_us());
    s
}

/// `WORK 0.9 SLEEP 15.8`
fn split_line(metrics: &ProfilingMetrics) -> String<32> {
    let mut s = String::new();
    s.push_str("WORK ").ok();
    push_ms(&mut s, metrics.work_time_us);
    s.push_str(" SLEEP ").ok();
    push_ms(&mut s, metrics.sleep_time_us);
    s
}

/// `RAIN WIND -2 MEDIUM MOOD 1`
fn params_line(game: &Game) -> String<32> {
    let params = game.params();
    let mut s = String::new();
    s.push_str(game.scene().label()).ok();
    if game.scene() == Scene::Rain {
        s.push_str(" WIND ").ok();
        push_i32(&mut s, i32::from(params.wind));
        s.push(' ').ok();
        s.push_str(params.speed.label()).ok();
        s.push_str(" MOOD ").ok();
        push_u32(&mut s, params.background as u32);
    }
    s
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use heavy_rain_common::font::is_supported;
    use heavy_rain_common::{Button, Framebuffer, KeyMask};

    use super::*;

    fn game_in_rain() -> Game {
        let mut game = Game::new(9);
        game.tick(Button::A.into());
        game.tick(KeyMask::NONE);
        game.tick(Button::Left.into());
        game
    }

    #[test]
    fn test_lines_use_only_font_characters() {
        let mut metrics = ProfilingMetrics::new();
        metrics.record_frame(Duration::from_micros(16_700), Duration::from_micros(900), Duration::from_micros(15_800));
        let game = game_in_rain();

        for line in [timing_line(&metrics), range_line(&metrics), split_line(&metrics), params_line(&game)] {
            assert!(line.chars().all(is_supported), "unsupported character in {line:?}");
        }
    }

    #[test]
    fn test_split_line_shows_work_and_sleep() {
        let mut metrics = ProfilingMetrics::new();
        metrics.record_frame(Duration::from_micros(16_700), Duration::from_micros(900), Duration::from_micros(15_800));
        assert_eq!(split_line(&metrics).as_str(), "WORK 0.9 SLEEP 15.8");
    }

    #[test]
    fn test_params_line() {
        let game = game_in_rain();
        assert_eq!(params_line(&game).as_str(), "RAIN WIND -1 MEDIUM MOOD 0");
        assert_eq!(params_line(&Game::new(1)).as_str(), "MENU");
    }

    #[test]
    fn test_panel_covers_top_of_frame() {
        let mut fb = Framebuffer::new();
        fb.clear_buffer(WHITE);
        draw_overlay(&mut fb, &game_in_rain(), &ProfilingMetrics::new());

        let last_row = PANEL_HEIGHT as i32 - 1;
        assert_eq!(fb.pixel(239, 0), Some(BLACK));
        assert_eq!(fb.pixel(239, last_row), Some(BLACK));
        assert_eq!(fb.pixel(0, last_row + 1), Some(WHITE), "overlay must not reach below its panel");
    }
}
