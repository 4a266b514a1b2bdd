//! Keyboard to button mapping.
//!
//! | Key | Button |
//! |-----|--------|
//! | W A S D | Up Left Down Right |
//! | J / K | A / B |
//! | Q / E | L / R |
//! | P / O | Start / Select |
//!
//! `H` is reserved for the debug overlay and maps to no button.

use embedded_graphics_simulator::sdl2::Keycode;
use heavy_rain_common::Button;

/// Key that toggles the debug overlay.
pub const OVERLAY_KEY: Keycode = Keycode::H;

/// Button bound to `keycode`, if any.
pub fn button_for(keycode: Keycode) -> Option<Button> {
    let button = match keycode {
        Keycode::W => Button::Up,
        Keycode::A => Button::Left,
        Keycode::S => Button::Down,
        Keycode::D => Button::Right,
        Keycode::J => Button::A,
        Keycode::K => Button::B,
        Keycode::Q => Button::L,
        Keycode::E => Button::R,
        Keycode::P => Button::Start,
        Keycode::O => Button::Select,
        _ => return None,
    };
    Some(button)
}

#[cfg(test)]
mod tests {
    use heavy_rain_common::KeyMask;

    use super::*;

    const BOUND: [Keycode; 10] = [
        Keycode::W,
        Keycode::A,
        Keycode::S,
        Keycode::D,
        Keycode::J,
        Keycode::K,
        Keycode::Q,
        Keycode::E,
        Keycode::P,
        Keycode::O,
    ];

    #[test]
    fn test_every_button_has_a_key() {
        let mask: KeyMask = BOUND.into_iter().filter_map(button_for).collect();
        assert_eq!(mask.bits(), KeyMask::VALID_BITS, "all ten buttons should be reachable");
    }

    #[test]
    fn test_overlay_key_is_not_a_button() {
        assert_eq!(button_for(OVERLAY_KEY), None);
        assert_eq!(button_for(Keycode::Z), None);
    }

    #[test]
    fn test_confirm_and_back() {
        assert_eq!(button_for(Keycode::J), Some(Button::A));
        assert_eq!(button_for(Keycode::K), Some(Button::B));
    }
}
