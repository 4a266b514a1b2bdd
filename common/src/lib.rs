//! Core of the heavy rain display: simulation, software renderer and game loop.
//!
//! Everything here is platform-agnostic and runs unchanged on the target and
//! on the desktop simulator:
//!
//! - [`blend`]: 15-bit color interpolation by a 5-bit weight
//! - [`colors`]: BGR555 palette (mood backgrounds, rain, menu)
//! - [`config`]: Screen, particle and effect constants
//! - [`font`]: 8x8 monochrome glyphs
//! - [`text`]: Shadowed, alpha-blended text on any draw target
//! - [`framebuffer`]: Owned 240x160 pixel buffer implementing `DrawTarget`
//! - [`params`]: Wind, speed level, mood and thunder state
//! - [`rain`]: Fixed-capacity raindrop field with in-place recycling
//! - [`render`]: Rain scene and menu drawing
//! - [`input`]: Button bitmask, edge detection and action mapping
//! - [`scene`]: Menu / Rain state enum
//! - [`game`]: Per-tick update and draw dispatch
//! - [`platform`]: Frame clock / input / present boundary and the main loop
//! - [`debug_log`]: Ring buffer of recent events
//!
//! # Testing
//!
//! ```bash
//! cargo test -p heavy-rain-common
//! ```
//!
//! The crate is `no_std` except under `cfg(test)`, where the standard test
//! harness needs std.

#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

pub mod blend;
pub mod colors;
pub mod config;
pub mod debug_log;
pub mod font;
pub mod framebuffer;
pub mod game;
pub mod input;
pub mod params;
pub mod platform;
pub mod rain;
pub mod render;
pub mod rng;
pub mod scene;
pub mod text;

// Re-export commonly used items
pub use config::{SCREEN_HEIGHT, SCREEN_WIDTH};
pub use framebuffer::Framebuffer;
pub use game::Game;
pub use input::{Button, KeyMask};
pub use scene::Scene;
