//! Color blending in 15-bit space.
//!
//! Blending is done per channel with 5-bit fixed-point weights instead of
//! floats: `weight` runs from 0 (all `from`) to 31 (all `to`).
//!
//! ```text
//! channel = (from * (31 - weight) + to * weight) / 31
//! ```
//!
//! The division truncates and no rounding correction is applied. Both end
//! points are still exact: at weight 0 the `to` term vanishes and the `from`
//! term is `from * 31 / 31`, and symmetrically at weight 31. Blending a color
//! with itself is exact for every weight, since the two terms sum to
//! `c * 31`. Intermediate weights round toward zero.
//!
//! Weights above 31 are clamped to 31 rather than allowed to underflow the
//! `31 - weight` term.

use embedded_graphics::pixelcolor::{Bgr555, RgbColor};

/// Largest blend weight; selects the `to` color entirely.
pub const MAX_WEIGHT: u8 = 31;

/// Interpolate between two colors.
///
/// `weight` 0 returns `from`, 31 returns `to`. Values above 31 behave as 31.
#[inline]
pub fn blend(
    from: Bgr555,
    to: Bgr555,
    weight: u8,
) -> Bgr555 {
    let w = u16::from(weight.min(MAX_WEIGHT));
    let inv = u16::from(MAX_WEIGHT) - w;
    let mix = |a: u8, b: u8| ((u16::from(a) * inv + u16::from(b) * w) / u16::from(MAX_WEIGHT)) as u8;

    Bgr555::new(mix(from.r(), to.r()), mix(from.g(), to.g()), mix(from.b(), to.b()))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::{BLACK, MENU_BG, MOOD_COLORS, RAIN_DIM, WHITE};

    #[test]
    fn test_blend_same_color_is_identity() {
        for color in [BLACK, WHITE, MENU_BG, RAIN_DIM, MOOD_COLORS[3]] {
            for weight in 0..=MAX_WEIGHT {
                assert_eq!(blend(color, color, weight), color, "weight {weight}");
            }
        }
    }

    #[test]
    fn test_blend_weight_zero_returns_from() {
        assert_eq!(blend(RAIN_DIM, WHITE, 0), RAIN_DIM);
        assert_eq!(blend(WHITE, BLACK, 0), WHITE);
    }

    #[test]
    fn test_blend_weight_max_is_exact_for_every_channel_value() {
        // No off-by-one at the upper end: c * 31 / 31 == c for all 5-bit c.
        for c in 0..=31u8 {
            let from = Bgr555::new(31 - c, c, 0);
            let to = Bgr555::new(c, 31 - c, c);
            assert_eq!(blend(from, to, MAX_WEIGHT), to, "channel value {c}");
            assert_eq!(blend(from, to, 0), from, "channel value {c}");
        }
    }

    #[test]
    fn test_blend_truncates_intermediate_weights() {
        // (0 * 15 + 31 * 16) / 31 = 16 exactly; (0 * 16 + 31 * 15) / 31 = 15.
        let result = blend(BLACK, WHITE, 16);
        assert_eq!((result.r(), result.g(), result.b()), (16, 16, 16));

        // (4 * 27 + 31 * 4) / 31 = 232 / 31 = 7.48 -> 7
        let result = blend(MENU_BG, WHITE, 4);
        assert_eq!(result.r(), 7);
    }

    #[test]
    fn test_blend_out_of_range_weight_is_clamped() {
        assert_eq!(blend(BLACK, WHITE, 32), WHITE);
        assert_eq!(blend(BLACK, WHITE, 255), WHITE);
    }

    #[test]
    fn test_blend_channels_are_independent() {
        let from = Bgr555::new(31, 0, 0);
        let to = Bgr555::new(0, 0, 31);
        let mid = blend(from, to, 16);
        assert_eq!(mid.g(), 0, "green should stay untouched");
        assert!(mid.r() > 0 && mid.r() < 31);
        assert!(mid.b() > 0 && mid.b() < 31);
    }
}
