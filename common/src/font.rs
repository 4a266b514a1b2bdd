//! 8x8 monochrome bitmap font.
//!
//! Each glyph is 8 bytes, one per row, top to bottom. Within a row the most
//! significant bit is the leftmost pixel. The set is deliberately small:
//! space, `A`-`Z`, `0`-`9` and `< - > .`. Lowercase input is folded to
//! uppercase; anything else has no glyph.

/// Glyph width and height in pixels.
pub const GLYPH_SIZE: i32 = 8;

/// One glyph: 8 rows, MSB = leftmost pixel.
pub type Glyph = [u8; 8];

const SPACE: usize = 0;
const FIRST_LETTER: usize = 1;
const FIRST_DIGIT: usize = 27;
const LESS_THAN: usize = 37;
const DASH: usize = 38;
const GREATER_THAN: usize = 39;
const PERIOD: usize = 40;

#[rustfmt::skip]
static GLYPHS: [Glyph; 41] = [
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00], // space
    [0x1C, 0x3E, 0x63, 0x63, 0x7F, 0x63, 0x63, 0x00], // A
    [0x3E, 0x63, 0x63, 0x3E, 0x63, 0x63, 0x3E, 0x00], // B
    [0x3E, 0x63, 0x60, 0x60, 0x60, 0x63, 0x3E, 0x00], // C
    [0x7E, 0x63, 0x61, 0x61, 0x61, 0x63, 0x7E, 0x00], // D
    [0x7F, 0x60, 0x60, 0x7E, 0x60, 0x60, 0x7F, 0x00], // E
    [0x7F, 0x60, 0x60, 0x7E, 0x60, 0x60, 0x60, 0x00], // F
    [0x3E, 0x63, 0x60, 0x67, 0x63, 0x63, 0x3E, 0x00], // G
    [0x63, 0x63, 0x63, 0x7F, 0x63, 0x63, 0x63, 0x00], // H
    [0x3E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x3E, 0x00], // I
    [0x1F, 0x06, 0x06, 0x06, 0x66, 0x66, 0x3C, 0x00], // J
    [0x63, 0x66, 0x6C, 0x78, 0x6C, 0x66, 0x63, 0x00], // K
    [0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7F, 0x00], // L
    [0x63, 0x77, 0x7F, 0x6B, 0x63, 0x63, 0x63, 0x00], // M
    [0x63, 0x73, 0x7B, 0x6F, 0x67, 0x63, 0x63, 0x00], // N
    [0x3E, 0x63, 0x63, 0x63, 0x63, 0x63, 0x3E, 0x00], // O
    [0x3E, 0x63, 0x63, 0x3E, 0x60, 0x60, 0x60, 0x00], // P
    [0x3E, 0x63, 0x63, 0x63, 0x6B, 0x66, 0x3D, 0x00], // Q
    [0x3E, 0x63, 0x63, 0x3E, 0x6C, 0x66, 0x63, 0x00], // R
    [0x3E, 0x63, 0x60, 0x3E, 0x03, 0x63, 0x3E, 0x00], // S
    [0x3E, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x0C, 0x00], // T
    [0x63, 0x63, 0x63, 0x63, 0x63, 0x63, 0x3E, 0x00], // U
    [0x63, 0x63, 0x63, 0x36, 0x36, 0x1C, 0x08, 0x00], // V
    [0x63, 0x63, 0x63, 0x6B, 0x7F, 0x36, 0x22, 0x00], // W
    [0x63, 0x36, 0x1C, 0x08, 0x1C, 0x36, 0x63, 0x00], // X
    [0x33, 0x33, 0x33, 0x1E, 0x0C, 0x0C, 0x0C, 0x00], // Y
    [0x7F, 0x06, 0x0C, 0x18, 0x30, 0x60, 0x7F, 0x00], // Z
    [0x3E, 0x63, 0x67, 0x6B, 0x73, 0x63, 0x3E, 0x00], // 0
    [0x0C, 0x1C, 0x3C, 0x0C, 0x0C, 0x0C, 0x3F, 0x00], // 1
    [0x3E, 0x63, 0x03, 0x0E, 0x38, 0x60, 0x7F, 0x00], // 2
    [0x3E, 0x63, 0x03, 0x1C, 0x03, 0x63, 0x3E, 0x00], // 3
    [0x06, 0x0E, 0x1E, 0x36, 0x66, 0x7F, 0x06, 0x00], // 4
    [0x7F, 0x60, 0x7E, 0x03, 0x03, 0x63, 0x3E, 0x00], // 5
    [0x1C, 0x30, 0x60, 0x7E, 0x63, 0x63, 0x3E, 0x00], // 6
    [0x7F, 0x03, 0x06, 0x0C, 0x18, 0x18, 0x18, 0x00], // 7
    [0x3E, 0x63, 0x63, 0x3E, 0x63, 0x63, 0x3E, 0x00], // 8
    [0x3E, 0x63, 0x63, 0x3F, 0x03, 0x06, 0x3C, 0x00], // 9
    [0x0E, 0x1C, 0x38, 0x70, 0x38, 0x1C, 0x0E, 0x00], // <
    [0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00], // -
    [0x70, 0x38, 0x1C, 0x0E, 0x1C, 0x38, 0x70, 0x00], // >
    [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00], // .
];

/// Index of a character in the glyph table, if the font has it.
const fn glyph_index(c: char) -> Option<usize> {
    let c = c.to_ascii_uppercase();
    match c {
        ' ' => Some(SPACE),
        'A'..='Z' => Some(FIRST_LETTER + (c as usize - 'A' as usize)),
        '0'..='9' => Some(FIRST_DIGIT + (c as usize - '0' as usize)),
        '<' => Some(LESS_THAN),
        '-' => Some(DASH),
        '>' => Some(GREATER_THAN),
        '.' => Some(PERIOD),
        _ => None,
    }
}

/// Look up the glyph for a character.
///
/// Returns `None` for characters outside the font; callers skip them.
#[inline]
pub fn glyph(c: char) -> Option<&'static Glyph> { glyph_index(c).map(|i| &GLYPHS[i]) }

/// Whether `c` can be rendered.
#[inline]
pub const fn is_supported(c: char) -> bool { glyph_index(c).is_some() }

/// Iterate over the set pixels of a glyph as `(column, row)` offsets.
pub fn set_pixels(glyph: &Glyph) -> impl Iterator<Item = (i32, i32)> + '_ {
    glyph.iter().enumerate().flat_map(|(row, &bits)| {
        (0..GLYPH_SIZE)
            .filter(move |&col| bits & (0x80u8 >> col) != 0)
            .map(move |col| (col, row as i32))
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
