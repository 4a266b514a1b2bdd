//! Boundary between the game and the host it runs on.
//!
//! A host provides three things: a frame clock, the current button state and
//! a way to show a finished frame. [`run`] drives a [`Game`] through them:
//!
//! ```text
//! loop {
//!     wait_for_next_frame()   // only suspension point
//!     poll_keys()  -> tick
//!     draw         -> present
//! }
//! ```

use crate::framebuffer::Framebuffer;
use crate::game::Game;
use crate::input::KeyMask;

/// Host services needed by the main loop.
pub trait Platform {
    /// Block until the next frame tick. Returns `false` once the host wants
    /// the loop to stop.
    fn wait_for_next_frame(&mut self) -> bool;

    /// Buttons held right now.
    fn poll_keys(&mut self) -> KeyMask;

    /// Show a completed frame.
    fn present(
        &mut self,
        frame: &Framebuffer,
        game: &Game,
    );
}

/// Run one iteration: poll, tick, draw, present. Does not wait.
pub fn step<P: Platform>(
    platform: &mut P,
    game: &mut Game,
    framebuffer: &mut Framebuffer,
) {
    let keys = platform.poll_keys();
    game.tick(keys);
    game.draw(framebuffer);
    platform.present(framebuffer, game);
}

/// Drive `game` until the platform stops the frame clock.
///
/// Returns the number of ticks that ran.
pub fn run<P: Platform>(
    platform: &mut P,
    game: &mut Game,
    framebuffer: &mut Framebuffer,
) -> u32 {
    let mut ticks: u32 = 0;
    while platform.wait_for_next_frame() {
        step(platform, game, framebuffer);
        ticks = ticks.wrapping_add(1);
    }
    ticks
}

// =============================================================================
// Unit Tests
// =============================================================================
