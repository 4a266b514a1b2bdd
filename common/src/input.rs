//! Button polling, edge detection and action mapping.
//!
//! The platform reports the held buttons once per tick as a [`KeyMask`].
//! [`KeyInput`] keeps the previous tick's mask to tell a fresh press from a
//! hold, and [`InputController`] turns that into an [`InputResult`] for the
//! game loop to apply.
//!
//! # Controls
//!
//! | Scene | Button | Trigger | Action |
//! |-------|--------|---------|--------|
//! | Menu | A | press | start rain |
//! | Rain | Left / Right | held | wind -1 / +1 per tick |
//! | Rain | Up / Down | press | speed level faster / slower |
//! | Rain | L / R | press | soft / heavy thunder |
//! | Rain | Select | press | next mood background |
//! | Rain | Start | press | reset |
//! | Rain | B | press | back to menu |

use crate::config::{THUNDER_HEAVY, THUNDER_SOFT};
use crate::params::{SimParams, SpeedLevel};
use crate::scene::Scene;

// =============================================================================
// Buttons
// =============================================================================

/// Digital buttons, valued by their bit in the key register.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[repr(u16)]
pub enum Button {
    A = 1 << 0,
    B = 1 << 1,
    Select = 1 << 2,
    Start = 1 << 3,
    Right = 1 << 4,
    Left = 1 << 5,
    Up = 1 << 6,
    Down = 1 << 7,
    R = 1 << 8,
    L = 1 << 9,
}

impl Button {
    /// Every button, in bit order.
    pub const ALL: [Self; 10] = [
        Self::A,
        Self::B,
        Self::Select,
        Self::Start,
        Self::Right,
        Self::Left,
        Self::Up,
        Self::Down,
        Self::R,
        Self::L,
    ];

    /// Bit of this button in a [`KeyMask`].
    #[inline]
    pub const fn bit(self) -> u16 { self as u16 }
}

/// Set of held buttons. Bits above the 10 buttons are ignored.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct KeyMask(u16);

impl KeyMask {
    /// No buttons held.
    pub const NONE: Self = Self(0);

    /// Mask covering all 10 buttons.
    pub const VALID_BITS: u16 = 0x03FF;

    /// Build a mask from raw bits (1 = held).
    #[inline]
    pub const fn from_bits(bits: u16) -> Self { Self(bits & Self::VALID_BITS) }

    /// Raw bits (1 = held).
    #[inline]
    pub const fn bits(self) -> u16 { self.0 }

    /// Whether `button` is held.
    #[inline]
    pub const fn contains(
        self,
        button: Button,
    ) -> bool {
        self.0 & button.bit() != 0
    }

    /// This mask with `button` added.
    #[inline]
    #[must_use]
    pub const fn with(
        self,
        button: Button,
    ) -> Self {
        Self(self.0 | button.bit())
    }

    /// Mark `button` as held.
    #[inline]
    pub const fn insert(
        &mut self,
        button: Button,
    ) {
        self.0 |= button.bit();
    }

    /// Mark `button` as released.
    #[inline]
    pub const fn remove(
        &mut self,
        button: Button,
    ) {
        self.0 &= !button.bit();
    }
}

impl From<Button> for KeyMask {
    fn from(button: Button) -> Self { Self(button.bit()) }
}

impl FromIterator<Button> for KeyMask {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, Self::with)
    }
}

// =============================================================================
// Edge Detection
// =============================================================================

/// Current and previous tick's button state.
#[derive(Clone, Copy, Default, Debug)]
pub struct KeyInput {
    current: KeyMask,
    previous: KeyMask,
}

impl KeyInput {
    /// No buttons held, none held last tick.
    pub const fn new() -> Self {
        Self {
            current: KeyMask::NONE,
            previous: KeyMask::NONE,
        }
    }

    /// Record this tick's buttons. Call exactly once per tick.
    #[inline]
    pub const fn poll(
        &mut self,
        keys: KeyMask,
    ) {
        self.previous = self.current;
        self.current = keys;
    }

    /// True only on the tick `button` went from released to held.
    #[inline]
    pub const fn just_pressed(
        &self,
        button: Button,
    ) -> bool {
        self.current.contains(button) && !self.previous.contains(button)
    }

    /// True every tick `button` is held.
    #[inline]
    pub const fn is_held(
        &self,
        button: Button,
    ) -> bool {
        self.current.contains(button)
    }
}

// =============================================================================
// Action Mapping
// =============================================================================

/// Actions requested by one tick of input.
///
/// Fields are applied by the game loop in declaration order.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct InputResult {
    /// A pressed on the menu.
    pub start_rain: bool,
    /// Left held: wind one step left.
    pub wind_left: bool,
    /// Right held: wind one step right.
    pub wind_right: bool,
    /// New speed level after Up/Down presses, if either was pressed.
    pub new_speed: Option<SpeedLevel>,
    /// Thunder intensity to trigger. R wins over L on the same tick.
    pub thunder: Option<u8>,
    /// Select pressed: next mood background.
    pub next_background: bool,
    /// Start pressed: restore default speed and reset the field.
    pub reset_requested: bool,
    /// B pressed: back to the menu.
    pub back_to_menu: bool,
}

impl InputResult {
    /// Whether nothing was requested.
    #[inline]
    pub fn is_empty(&self) -> bool { *self == Self::default() }
}

/// Polls buttons and maps them to actions for the active scene.
#[derive(Clone, Copy, Default, Debug)]
pub struct InputController {
    keys: KeyInput,
}

impl InputController {
    /// Create a controller with no previous state.
    pub const fn new() -> Self { Self { keys: KeyInput::new() } }

    /// Poll this tick's buttons and compute the requested actions.
    ///
    /// The previous mask is always updated, including on the menu, so a
    /// button held across a scene change does not fire again.
    pub fn process(
        &mut self,
        raw: KeyMask,
        scene: Scene,
        params: &SimParams,
    ) -> InputResult {
        self.keys.poll(raw);
        let keys = &self.keys;
        let mut result = InputResult::default();

        match scene {
            Scene::Menu => {
                result.start_rain = keys.just_pressed(Button::A);
            }
            Scene::Rain => {
                result.wind_left = keys.is_held(Button::Left);
                result.wind_right = keys.is_held(Button::Right);

                let mut speed = None;
                if keys.just_pressed(Button::Up) {
                    speed = Some(params.speed.faster());
                }
                if keys.just_pressed(Button::Down) {
                    speed = Some(speed.unwrap_or(params.speed).slower());
                }
                result.new_speed = speed;

                if keys.just_pressed(Button::L) {
                    result.thunder = Some(THUNDER_SOFT);
                }
                if keys.just_pressed(Button::R) {
                    result.thunder = Some(THUNDER_HEAVY);
                }

                result.next_background = keys.just_pressed(Button::Select);
                result.reset_requested = keys.just_pressed(Button::Start);
                result.back_to_menu = keys.just_pressed(Button::B);
            }
        }

        result
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn rain_tick(
        ctrl: &mut InputController,
        keys: KeyMask,
    ) -> InputResult {
        ctrl.process(keys, Scene::Rain, &SimParams::new())
    }

    #[test]
    fn test_button_bits_are_distinct_and_valid() {
        let all: KeyMask = Button::ALL.into_iter().collect();
        assert_eq!(all.bits(), KeyMask::VALID_BITS);
        assert_eq!(Button::A.bit(), 0x0001);
        assert_eq!(Button::L.bit(), 0x0200);
    }

    #[test]
    fn test_key_mask_ignores_high_bits() {
        assert_eq!(KeyMask::from_bits(0xFFFF).bits(), 0x03FF);
    }

    #[test]
    fn test_key_mask_insert_remove() {
        let mut mask = KeyMask::NONE;
        mask.insert(Button::Left);
        mask.insert(Button::A);
        assert!(mask.contains(Button::Left));
        mask.remove(Button::Left);
        assert!(!mask.contains(Button::Left));
        assert!(mask.contains(Button::A));
    }

    #[test]
    fn test_just_pressed_fires_once_per_press() {
        let mut input = KeyInput::new();
        let a = KeyMask::from(Button::A);

        input.poll(a);
        assert!(input.just_pressed(Button::A), "rising edge");
        input.poll(a);
        assert!(!input.just_pressed(Button::A), "held, no repeat");
        assert!(input.is_held(Button::A));
        input.poll(KeyMask::NONE);
        assert!(!input.just_pressed(Button::A));
        input.poll(a);
        assert!(input.just_pressed(Button::A), "second press fires again");
    }

    #[test]
    fn test_menu_only_reacts_to_a() {
        let mut ctrl = InputController::new();
        let everything_but_a: KeyMask = Button::ALL.into_iter().filter(|&b| b != Button::A).collect();
        let result = ctrl.process(everything_but_a, Scene::Menu, &SimParams::new());
        assert!(result.is_empty());

        let result = ctrl.process(everything_but_a.with(Button::A), Scene::Menu, &SimParams::new());
        assert!(result.start_rain);
    }

    #[test]
    fn test_a_held_into_menu_does_not_fire() {
        let mut ctrl = InputController::new();
        let a = KeyMask::from(Button::A);
        // A pressed while raining (no effect there), then still held on the menu.
        rain_tick(&mut ctrl, a);
        let result = ctrl.process(a, Scene::Menu, &SimParams::new());
        assert!(!result.start_rain);
    }

    #[test]
    fn test_wind_is_level_sensitive() {
        let mut ctrl = InputController::new();
        let left = KeyMask::from(Button::Left);
        for _ in 0..5 {
            let result = rain_tick(&mut ctrl, left);
            assert!(result.wind_left, "held left should act every tick");
            assert!(!result.wind_right);
        }
    }

    #[test]
    fn test_speed_buttons_are_edge_triggered() {
        let mut ctrl = InputController::new();
        let up = KeyMask::from(Button::Up);
        assert_eq!(rain_tick(&mut ctrl, up).new_speed, Some(SpeedLevel::Fast));
        assert_eq!(rain_tick(&mut ctrl, up).new_speed, None);

        let down = KeyMask::from(Button::Down);
        assert_eq!(rain_tick(&mut ctrl, down).new_speed, Some(SpeedLevel::Slow));
    }

    #[test]
    fn test_up_and_down_same_tick_apply_in_order() {
        let mut ctrl = InputController::new();
        let mut params = SimParams::new();
        params.speed = SpeedLevel::Fast;
        let both = KeyMask::from(Button::Up).with(Button::Down);
        let result = ctrl.process(both, Scene::Rain, &params);
        // Fast -> (up) Fast -> (down) Medium
        assert_eq!(result.new_speed, Some(SpeedLevel::Medium));
    }

    #[test]
    fn test_thunder_heavy_wins_same_tick() {
        let mut ctrl = InputController::new();
        assert_eq!(rain_tick(&mut ctrl, Button::L.into()).thunder, Some(THUNDER_SOFT));
        rain_tick(&mut ctrl, KeyMask::NONE);
        let both = KeyMask::from(Button::L).with(Button::R);
        assert_eq!(rain_tick(&mut ctrl, both).thunder, Some(THUNDER_HEAVY));
    }

    #[test]
    fn test_rain_single_fire_actions() {
        let mut ctrl = InputController::new();
        let keys = KeyMask::from(Button::Select).with(Button::Start).with(Button::B);
        let first = rain_tick(&mut ctrl, keys);
        assert!(first.next_background && first.reset_requested && first.back_to_menu);

        let held = rain_tick(&mut ctrl, keys);
        assert!(held.is_empty(), "held buttons must not repeat: {held:?}");
    }
}
