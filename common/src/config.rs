//! Compile-time configuration.
//!
//! The display mode is fixed (240x160, 15-bit color), so every dimension and
//! tuning value lives here as a `const`. Signed copies of the screen size are
//! provided because particle coordinates are signed.

// =============================================================================
// Display Configuration
// =============================================================================

/// Framebuffer width in pixels.
pub const SCREEN_WIDTH: u32 = 240;

/// Framebuffer height in pixels.
pub const SCREEN_HEIGHT: u32 = 160;

/// Total pixel count of the framebuffer.
pub const SCREEN_PIXELS: usize = (SCREEN_WIDTH * SCREEN_HEIGHT) as usize;

/// Width as a signed coordinate.
pub const WIDTH_I: i32 = SCREEN_WIDTH as i32;

/// Height as a signed coordinate.
pub const HEIGHT_I: i32 = SCREEN_HEIGHT as i32;

// =============================================================================
// Rain Field Configuration
// =============================================================================

/// Number of raindrops. Fixed for the lifetime of the process.
pub const MAX_RAINDROPS: usize = 150;

/// Shortest streak in pixels.
pub const MIN_LENGTH: u8 = 2;

/// Longest streak in pixels.
pub const MAX_LENGTH: u8 = 5;

/// Initial drops are scattered this far above the top edge.
pub const RESET_SPAWN_DEPTH: u32 = 100;

/// Recycled drops respawn at most this far above the top edge.
pub const RECYCLE_SPAWN_DEPTH: u32 = 50;

/// Recycled drops may spawn this far beyond either side edge.
pub const SPAWN_OVERSCAN: i32 = 20;

/// Horizontal wrap margin. Drops leaving by more than this re-enter on the other side.
pub const WRAP_MARGIN: i32 = 10;

/// Wind is clamped to `-MAX_WIND..=MAX_WIND` pixels per tick.
pub const MAX_WIND: i8 = 3;

// =============================================================================
// Thunder Configuration
// =============================================================================

/// Thunder flash duration in ticks.
pub const THUNDER_DURATION: u8 = 30;

/// Intensity of the L-button thunder.
pub const THUNDER_SOFT: u8 = 8;

/// Intensity of the R-button thunder.
pub const THUNDER_HEAVY: u8 = 16;

// =============================================================================
// Menu Configuration
// =============================================================================

/// Period of the "press A" pulse in ticks.
pub const MENU_PULSE_PERIOD: u32 = 60;

/// Dimmest alpha of the pulsing prompt.
pub const MENU_ALPHA_MIN: u8 = 16;

/// Brightest alpha of the pulsing prompt (fully opaque).
pub const MENU_ALPHA_MAX: u8 = 31;

/// Top of the menu text block (50px above the vertical center).
pub const MENU_TOP_Y: i32 = HEIGHT_I / 2 - 50;
