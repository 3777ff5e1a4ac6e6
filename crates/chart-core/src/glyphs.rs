// File: crates/chart-core/src/glyphs.rs
// Summary: Fixed 3x5 bitmap glyph table used by the fallback text renderer.

/// Glyph cell width in pixels (before scaling).
pub const GLYPH_WIDTH: i32 = 3;
/// Glyph cell height in pixels (before scaling).
pub const GLYPH_HEIGHT: i32 = 5;
/// Horizontal cursor advance per character, including one column of spacing.
pub const GLYPH_ADVANCE: i32 = GLYPH_WIDTH + 1;

/// Five rows, top to bottom. Bit 2 is the leftmost column, bit 0 the rightmost.
pub type Glyph = [u8; GLYPH_HEIGHT as usize];

static GLYPHS: [(char, Glyph); 14] = [
    ('0', [0b111, 0b101, 0b101, 0b101, 0b111]),
    ('1', [0b010, 0b110, 0b010, 0b010, 0b111]),
    ('2', [0b111, 0b001, 0b111, 0b100, 0b111]),
    ('3', [0b111, 0b001, 0b111, 0b001, 0b111]),
    ('4', [0b101, 0b101, 0b111, 0b001, 0b001]),
    ('5', [0b111, 0b100, 0b111, 0b001, 0b111]),
    ('6', [0b111, 0b100, 0b111, 0b101, 0b111]),
    ('7', [0b111, 0b001, 0b001, 0b001, 0b001]),
    ('8', [0b111, 0b101, 0b111, 0b101, 0b111]),
    ('9', [0b111, 0b101, 0b111, 0b001, 0b111]),
    ('.', [0b000, 0b000, 0b000, 0b000, 0b010]),
    ('-', [0b000, 0b000, 0b111, 0b000, 0b000]),
    (',', [0b000, 0b000, 0b000, 0b010, 0b100]),
    (' ', [0b000, 0b000, 0b000, 0b000, 0b000]),
];

/// Look up the bitmap for `ch`; `None` for characters outside the table.
pub fn glyph(ch: char) -> Option<&'static Glyph> {
    GLYPHS.iter().find(|(c, _)| *c == ch).map(|(_, g)| g)
}

/// Whether the pixel at (`col`, `row`) of `glyph` is lit.
#[inline]
pub fn is_lit(glyph: &Glyph, col: i32, row: i32) -> bool {
    if !(0..GLYPH_WIDTH).contains(&col) || !(0..GLYPH_HEIGHT).contains(&row) {
        return false;
    }
    glyph[row as usize] & (1 << (GLYPH_WIDTH - 1 - col)) != 0
}
