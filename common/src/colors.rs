//! Color constants for the rain display.
//!
//! # Bgr555 Color Format
//!
//! The framebuffer stores 15-bit pixels with red in the low bits:
//!
//! ```text
//! bit 15    14..10   9..5    4..0
//!   -       blue     green   red
//! ```
//!
//! `embedded_graphics` models this exact layout as [`Bgr555`], so pixels can
//! be written to the buffer without conversion. Every channel is 0-31.

use embedded_graphics::pixelcolor::{Bgr555, RgbColor};

// =============================================================================
// Standard Colors
// =============================================================================

/// Pure black.
pub const BLACK: Bgr555 = Bgr555::BLACK;

/// Pure white. Menu text and the thunder flash target.
pub const WHITE: Bgr555 = Bgr555::WHITE;

// =============================================================================
// Menu Colors
// =============================================================================

/// Dark grey menu background. Translucent text is blended against it.
pub const MENU_BG: Bgr555 = Bgr555::new(4, 4, 4);

/// Text drop shadow, darker than the menu background.
pub const TEXT_SHADOW: Bgr555 = Bgr555::new(2, 2, 2);

// =============================================================================
// Rain Colors
// =============================================================================

/// Head pixel of every streak. Bright white-blue.
pub const RAIN_BRIGHT: Bgr555 = Bgr555::new(28, 30, 31);

/// Trail color before it fades into the background.
pub const RAIN_DIM: Bgr555 = Bgr555::new(20, 24, 28);

/// Color the background is pulled toward during a thunder flash.
pub const THUNDER_FLASH: Bgr555 = WHITE;

// =============================================================================
// Mood Backgrounds
// =============================================================================

/// Background palette cycled with Select.
pub const MOOD_COLORS: [Bgr555; 4] = [
    Bgr555::new(1, 3, 8),  // deep blue
    Bgr555::new(2, 4, 10), // medium blue
    Bgr555::new(1, 3, 7),  // dark blue
    Bgr555::new(2, 5, 12), // light blue
];

/// Number of mood backgrounds.
pub const MOOD_COUNT: usize = MOOD_COLORS.len();
