//! Ring buffer of recent events.
//!
//! The game pushes one short line per applied action (scene change, wind,
//! speed, thunder, mood, reset). The simulator shows the buffer in its debug
//! overlay, so messages stick to characters the glyph font can draw.
//!
//! # Usage
//!
//! ```ignore
//! let mut log = DebugLog::new();
//! log.push("RAIN");
//! log.push_with_number("WIND ", -2);
//!
//! for line in log.iter() {
//!     draw_text(display, 0, y, line, WHITE, OPAQUE);
//! }
//! ```

use heapless::{Deque, String};

// =============================================================================
// Debug Log Configuration
// =============================================================================

/// Maximum number of lines kept.
pub const LOG_BUFFER_SIZE: usize = 6;

/// Maximum characters per line (one screen width of 8px glyphs).
pub const LOG_LINE_LENGTH: usize = 30;

// =============================================================================
// Debug Log Ring Buffer
// =============================================================================

/// Fixed-capacity event log. Oldest lines are dropped when full.
pub struct DebugLog {
    buffer: Deque<String<LOG_LINE_LENGTH>, LOG_BUFFER_SIZE>,
    total: u32,
}

impl DebugLog {
    /// Create an empty log.
    pub const fn new() -> Self {
        Self {
            buffer: Deque::new(),
            total: 0,
        }
    }

    /// Append a line, truncating it to [`LOG_LINE_LENGTH`] characters.
    pub fn push(
        &mut self,
        msg: &str,
    ) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in msg.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        self.push_line(line);
    }

    /// Append `prefix` followed by a signed number.
    pub fn push_with_number(
        &mut self,
        prefix: &str,
        value: i32,
    ) {
        let mut line: String<LOG_LINE_LENGTH> = String::new();
        for c in prefix.chars() {
            if line.push(c).is_err() {
                break;
            }
        }
        push_i32(&mut line, value);
        self.push_line(line);
    }

    fn push_line(
        &mut self,
        line: String<LOG_LINE_LENGTH>,
    ) {
        if self.buffer.is_full() {
            self.buffer.pop_front();
        }
        self.buffer.push_back(line).ok();
        self.total = self.total.wrapping_add(1);
    }

    /// Lines, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> { self.buffer.iter().map(heapless::string::StringInner::as_str) }

    /// Most recent line.
    pub fn last(&self) -> Option<&str> { self.buffer.back().map(heapless::string::StringInner::as_str) }

    /// Lines currently held.
    #[inline]
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Whether no line is held.
    #[inline]
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    /// Lines pushed since creation, including dropped ones.
    #[inline]
    pub const fn total(&self) -> u32 { self.total }
}

impl Default for DebugLog {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Push a u32 value to a heapless string (no format! macro).
pub fn push_u32<const N: usize>(
    s: &mut String<N>,
    mut val: u32,
) {
    if val == 0 {
        s.push('0').ok();
        return;
    }

    // Build digits in reverse
    let mut digits = [0u8; 10];
    let mut i = 0;
    while val > 0 {
        digits[i] = (val % 10) as u8;
        val /= 10;
        i += 1;
    }

    while i > 0 {
        i -= 1;
        s.push((b'0' + digits[i]) as char).ok();
    }
}

/// Push an i32 value, with a leading `-` when negative.
pub fn push_i32<const N: usize>(
    s: &mut String<N>,
    val: i32,
) {
    if val < 0 {
        s.push('-').ok();
    }
    push_u32(s, val.unsigned_abs());
}

// =============================================================================
// Tests
// =============================================================================
