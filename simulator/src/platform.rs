//! Desktop host: SDL window as the screen, keyboard as the buttons and a
//! sleep-paced frame clock.

use std::thread;
use std::time::{Duration, Instant};

use embedded_graphics::pixelcolor::Bgr555;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, SimulatorEvent, Window};
use heavy_rain_common::platform::Platform;
use heavy_rain_common::{Framebuffer, Game, KeyMask, SCREEN_HEIGHT, SCREEN_WIDTH};

use crate::keymap::{OVERLAY_KEY, button_for};
use crate::overlay::draw_overlay;
use crate::profiling::ProfilingMetrics;
use crate::timing::FRAME_TIME;

const WINDOW_TITLE: &str = "Heavy Rain";
const WINDOW_SCALE: u32 = 3;

pub struct SimPlatform {
    display: SimulatorDisplay<Bgr555>,
    window: Window,
    held: KeyMask,
    show_overlay: bool,
    quit: bool,
    metrics: ProfilingMetrics,
    frame_start: Option<Instant>,
}

impl SimPlatform {
    pub fn new() -> Self {
        let mut display = SimulatorDisplay::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
        display.clear(Bgr555::BLACK).ok();

        let output_settings = OutputSettingsBuilder::new().scale(WINDOW_SCALE).build();
        let mut window = Window::new(WINDOW_TITLE, &output_settings);
        // The event pump only exists after the first update.
        window.update(&display);

        Self {
            display,
            window,
            held: KeyMask::NONE,
            show_overlay: false,
            quit: false,
            metrics: ProfilingMetrics::new(),
            frame_start: None,
        }
    }

    /// Sleep off the rest of the current frame and record its timing.
    fn finish_frame(&mut self) {
        let Some(start) = self.frame_start else {
            return;
        };

        let work_time = start.elapsed();
        if let Some(remaining) = FRAME_TIME.checked_sub(work_time) {
            thread::sleep(remaining);
        }
        let total_time = start.elapsed();
        let sleep_time = total_time.checked_sub(work_time).unwrap_or(Duration::ZERO);

        self.metrics.record_frame(total_time, work_time, sleep_time);
    }

    fn pump_events(&mut self) {
        for event in self.window.events() {
            match event {
                SimulatorEvent::Quit => self.quit = true,
                SimulatorEvent::KeyDown { keycode, repeat, .. } => {
                    if keycode == OVERLAY_KEY {
                        if !repeat {
                            self.show_overlay = !self.show_overlay;
                        }
                    } else if let Some(button) = button_for(keycode) {
                        self.held.insert(button);
                    }
                }
                SimulatorEvent::KeyUp { keycode, .. } => {
                    if let Some(button) = button_for(keycode) {
                        self.held.remove(button);
                    }
                }
                _ => {}
            }
        }
    }
}

impl Default for SimPlatform {
    fn default() -> Self { Self::new() }
}

impl Platform for SimPlatform {
    fn wait_for_next_frame(&mut self) -> bool {
        self.finish_frame();
        self.frame_start = Some(Instant::now());
        self.pump_events();
        !self.quit
    }

    fn poll_keys(&mut self) -> KeyMask { self.held }

    fn present(
        &mut self,
        frame: &Framebuffer,
        game: &Game,
    ) {
        let area = self.display.bounding_box();
        self.display.fill_contiguous(&area, frame.colors()).ok();

        if self.show_overlay {
            draw_overlay(&mut self.display, game, &self.metrics);
        }

        self.window.update(&self.display);
    }
}
