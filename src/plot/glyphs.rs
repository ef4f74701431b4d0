//! Built-in 5x7 bitmap font.
//!
//! All text on the raster is drawn with these glyphs, so rendering needs
//! no system fonts. Glyphs are scaled by an integer factor derived from
//! the requested font size.

/// Height of every glyph in font pixels.
pub const GLYPH_HEIGHT: usize = 7;

/// Advance of a space, and of characters without a glyph.
const SPACE_WIDTH: u32 = 3;

/// One character bitmap. Bit `width - 1 - col` of `rows[row]` is set for ink.
#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    /// Width in font pixels.
    pub width: u8,
    /// Row bitmaps, top to bottom.
    pub rows: [u8; GLYPH_HEIGHT],
}

impl Glyph {
    /// Whether the font pixel at `(col, row)` is set.
    pub fn is_set(&self, col: usize, row: usize) -> bool {
        self.rows[row] & (1 << (self.width as usize - 1 - col)) != 0
    }
}

const fn g(width: u8, rows: [u8; GLYPH_HEIGHT]) -> Glyph {
    Glyph { width, rows }
}

/// Look up the glyph for `ch`.
pub fn glyph(ch: char) -> Option<Glyph> {
    Some(match ch {
        'A' => g(5, [0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'B' => g(5, [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110]),
        'C' => g(5, [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110]),
        'D' => g(5, [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100]),
        'E' => g(5, [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111]),
        'F' => g(5, [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000]),
        'G' => g(5, [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111]),
        'H' => g(5, [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001]),
        'I' => g(3, [0b111, 0b010, 0b010, 0b010, 0b010, 0b010, 0b111]),
        'J' => g(5, [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100]),
        'K' => g(5, [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001]),
        'L' => g(5, [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111]),
        'M' => g(5, [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001]),
        'N' => g(5, [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001]),
        'O' => g(5, [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'P' => g(5, [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000]),
        'Q' => g(5, [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101]),
        'R' => g(5, [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001]),
        'S' => g(5, [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110]),
        'T' => g(5, [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100]),
        'U' => g(5, [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110]),
        'V' => g(5, [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
        'W' => g(5, [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010]),
        'X' => g(5, [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001]),
        'Y' => g(5, [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100]),
        'Z' => g(5, [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111]),
        'a' => g(5, [0b00000, 0b00000, 0b01110, 0b00001, 0b01111, 0b10001, 0b01111]),
        'b' => g(5, [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b11110]),
        'c' => g(5, [0b00000, 0b00000, 0b01110, 0b10000, 0b10000, 0b10001, 0b01110]),
        'd' => g(5, [0b00001, 0b00001, 0b01101, 0b10011, 0b10001, 0b10001, 0b01111]),
        'e' => g(5, [0b00000, 0b00000, 0b01110, 0b10001, 0b11111, 0b10000, 0b01110]),
        'f' => g(4, [0b0011, 0b0100, 0b1110, 0b0100, 0b0100, 0b0100, 0b0100]),
        'g' => g(5, [0b00000, 0b01111, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]),
        'h' => g(5, [0b10000, 0b10000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001]),
        'i' => g(3, [0b010, 0b000, 0b110, 0b010, 0b010, 0b010, 0b111]),
        'j' => g(4, [0b0001, 0b0000, 0b0011, 0b0001, 0b0001, 0b1001, 0b0110]),
        'k' => g(4, [0b1000, 0b1000, 0b1001, 0b1010, 0b1100, 0b1010, 0b1001]),
        'l' => g(3, [0b110, 0b010, 0b010, 0b010, 0b010, 0b010, 0b111]),
        'm' => g(5, [0b00000, 0b00000, 0b11010, 0b10101, 0b10101, 0b10001, 0b10001]),
        'n' => g(5, [0b00000, 0b00000, 0b10110, 0b11001, 0b10001, 0b10001, 0b10001]),
        'o' => g(5, [0b00000, 0b00000, 0b01110, 0b10001, 0b10001, 0b10001, 0b01110]),
        'p' => g(5, [0b00000, 0b00000, 0b11110, 0b10001, 0b11110, 0b10000, 0b10000]),
        'q' => g(5, [0b00000, 0b00000, 0b01101, 0b10011, 0b01111, 0b00001, 0b00001]),
        'r' => g(5, [0b00000, 0b00000, 0b10110, 0b11001, 0b10000, 0b10000, 0b10000]),
        's' => g(5, [0b00000, 0b00000, 0b01110, 0b10000, 0b01110, 0b00001, 0b11110]),
        't' => g(4, [0b0100, 0b0100, 0b1110, 0b0100, 0b0100, 0b0101, 0b0010]),
        'u' => g(5, [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b10011, 0b01101]),
        'v' => g(5, [0b00000, 0b00000, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100]),
        'w' => g(5, [0b00000, 0b00000, 0b10001, 0b10001, 0b10101, 0b10101, 0b01010]),
        'x' => g(5, [0b00000, 0b00000, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001]),
        'y' => g(5, [0b00000, 0b00000, 0b10001, 0b10001, 0b01111, 0b00001, 0b01110]),
        'z' => g(5, [0b00000, 0b00000, 0b11111, 0b00010, 0b00100, 0b01000, 0b11111]),
        '0' => g(5, [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110]),
        '1' => g(3, [0b010, 0b110, 0b010, 0b010, 0b010, 0b010, 0b111]),
        '2' => g(5, [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111]),
        '3' => g(5, [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110]),
        '4' => g(5, [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010]),
        '5' => g(5, [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110]),
        '6' => g(5, [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110]),
        '7' => g(5, [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000]),
        '8' => g(5, [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110]),
        '9' => g(5, [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100]),
        '.' => g(2, [0b00, 0b00, 0b00, 0b00, 0b00, 0b11, 0b11]),
        ',' => g(2, [0b00, 0b00, 0b00, 0b00, 0b00, 0b01, 0b10]),
        ':' => g(2, [0b00, 0b11, 0b11, 0b00, 0b11, 0b11, 0b00]),
        '-' => g(3, [0b000, 0b000, 0b000, 0b111, 0b000, 0b000, 0b000]),
        '+' => g(5, [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000]),
        '_' => g(5, [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111]),
        '/' => g(5, [0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000]),
        '(' => g(3, [0b001, 0b010, 0b100, 0b100, 0b100, 0b010, 0b001]),
        ')' => g(3, [0b100, 0b010, 0b001, 0b001, 0b001, 0b010, 0b100]),
        '%' => g(5, [0b11001, 0b11001, 0b00010, 0b00100, 0b01000, 0b10011, 0b10011]),
        _ => return None,
    })
}

/// Integer scale for a font size given in pixels.
pub fn scale_for(size: f64) -> u32 {
    (size / GLYPH_HEIGHT as f64).floor().max(1.0) as u32
}

/// Horizontal advance of `ch` in font pixels, including one pixel of spacing.
fn advance(ch: char) -> u32 {
    match glyph(ch) {
        Some(gl) => gl.width as u32 + 1,
        None => SPACE_WIDTH,
    }
}

/// Unrotated `(width, height)` of `text` in device pixels.
pub fn text_extent(text: &str, size: f64) -> (u32, u32) {
    let scale = scale_for(size);
    let advance: u32 = text.chars().map(advance).sum();
    // Trailing spacing column is not part of the ink box.
    let width = advance.saturating_sub(1) * scale;
    (width, GLYPH_HEIGHT as u32 * scale)
}

/// Device pixels set when drawing `text` with its top-left at the origin.
pub fn text_pixels(text: &str, size: f64) -> Vec<(i32, i32)> {
    let scale = scale_for(size) as i32;
    let mut pixels = Vec::new();
    let mut cursor = 0i32;

    for ch in text.chars() {
        if let Some(gl) = glyph(ch) {
            for row in 0..GLYPH_HEIGHT {
                for col in 0..gl.width as usize {
                    if !gl.is_set(col, row) {
                        continue;
                    }
                    let x0 = cursor + col as i32 * scale;
                    let y0 = row as i32 * scale;
                    for dy in 0..scale {
                        for dx in 0..scale {
                            pixels.push((x0 + dx, y0 + dy));
                        }
                    }
                }
            }
        }
        cursor += advance(ch) as i32 * scale;
    }
    pixels
}
