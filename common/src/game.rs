//! Top-level game loop controller.
//!
//! [`Game`] owns all session state and advances it one tick at a time:
//!
//! ```text
//! tick(keys):  input -> apply actions -> update active scene
//! draw(target): render active scene
//! ```
//!
//! # Scene transitions
//!
//! | From | Input | To | Effect |
//! |------|-------|----|--------|
//! | Menu | A | Rain | field reset |
//! | Rain | B | Menu | none (field and parameters kept) |
//! | Rain | Start | Rain | default speed, field reset |
//!
//! Every applied action is recorded in the [`DebugLog`].

use embedded_graphics::pixelcolor::Bgr555;
use embedded_graphics::prelude::*;
use heapless::String;

use crate::config::{MENU_ALPHA_MAX, THUNDER_HEAVY};
use crate::debug_log::{DebugLog, LOG_LINE_LENGTH};
use crate::input::{InputController, InputResult, KeyMask};
use crate::params::{SimParams, SpeedLevel};
use crate::rain::RainField;
use crate::render::{draw_menu, draw_rain_scene, menu_prompt_alpha};
use crate::scene::Scene;

/// All state of a running session.
pub struct Game {
    scene: Scene,
    params: SimParams,
    rain: RainField,
    input: InputController,
    frame: u32,
    prompt_alpha: u8,
    log: DebugLog,
}

impl Game {
    /// Start on the menu. The rain field is seeded with `seed` and first
    /// reset when the rain scene is entered.
    pub const fn new(seed: u32) -> Self {
        Self {
            scene: Scene::Menu,
            params: SimParams::new(),
            rain: RainField::new(seed),
            input: InputController::new(),
            frame: 0,
            prompt_alpha: MENU_ALPHA_MAX,
            log: DebugLog::new(),
        }
    }

    /// Run one tick: read `keys`, apply the resulting actions, update the
    /// active scene.
    pub fn tick(
        &mut self,
        keys: KeyMask,
    ) {
        let actions = self.input.process(keys, self.scene, &self.params);
        self.apply(actions);
        self.update();
    }

    /// Render the active scene.
    pub fn draw<D>(
        &self,
        display: &mut D,
    ) where
        D: DrawTarget<Color = Bgr555>,
    {
        match self.scene {
            Scene::Menu => draw_menu(display, self.prompt_alpha),
            Scene::Rain => draw_rain_scene(display, &self.rain, &self.params),
        }
    }

    fn apply(
        &mut self,
        actions: InputResult,
    ) {
        if actions.start_rain {
            self.scene = Scene::Rain;
            self.rain.reset(&mut self.params);
            self.log.push(Scene::Rain.label());
        }

        let wind_before = self.params.wind;
        if actions.wind_left {
            self.params.nudge_wind(-1);
        }
        if actions.wind_right {
            self.params.nudge_wind(1);
        }
        if self.params.wind != wind_before {
            self.log.push_with_number("WIND ", i32::from(self.params.wind));
        }

        if let Some(level) = actions.new_speed {
            self.rain.set_speed_level(&mut self.params, level);
            self.log_labeled("SPEED ", level.label());
        }

        if let Some(intensity) = actions.thunder {
            self.params.trigger_thunder(intensity);
            self.log.push(if intensity >= THUNDER_HEAVY { "THUNDER HEAVY" } else { "THUNDER SOFT" });
        }

        if actions.next_background {
            self.params.next_background();
            self.log.push_with_number("MOOD ", self.params.background as i32);
        }

        if actions.reset_requested {
            self.params.speed = SpeedLevel::default();
            self.rain.reset(&mut self.params);
            self.log.push("RESET");
        }

        if actions.back_to_menu {
            self.scene = Scene::Menu;
            self.log.push(Scene::Menu.label());
        }
    }

    fn update(&mut self) {
        self.frame = self.frame.wrapping_add(1);
        match self.scene {
            Scene::Menu => self.prompt_alpha = menu_prompt_alpha(self.frame),
            Scene::Rain => self.rain.advance(&mut self.params),
        }
    }

    fn log_labeled(
        &mut self,
        prefix: &str,
        label: &str,
    ) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        line.push_str(prefix).ok();
        line.push_str(label).ok();
        self.log.push(&line);
    }

    /// Active scene.
    #[inline]
    pub const fn scene(&self) -> Scene { self.scene }

    /// Current simulation parameters.
    #[inline]
    pub const fn params(&self) -> &SimParams { &self.params }

    /// The rain field.
    #[inline]
    pub const fn rain(&self) -> &RainField { &self.rain }

    /// Ticks since start.
    #[inline]
    pub const fn frame(&self) -> u32 { self.frame }

    /// Alpha of the menu prompt for this tick.
    #[inline]
    pub const fn prompt_alpha(&self) -> u8 { self.prompt_alpha }

    /// Recent events.
    #[inline]
    pub const fn log(&self) -> &DebugLog { &self.log }
}

impl Default for Game {
    fn default() -> Self { Self::new(crate::rng::DEFAULT_SEED) }
}

// =============================================================================
// Unit Tests
// =============================================================================
