//! 5x7 bitmap glyphs for chart labels.
//!
//! Each glyph is 7 rows; the lower 5 bits of a row are pixels, MSB on the left.
//! Lowercase letters render with their uppercase glyph; unknown characters
//! render as blank cells.

pub const GLYPH_W: u32 = 5;
pub const GLYPH_H: u32 = 7;
/// Horizontal advance per character, glyph plus one column of spacing.
pub const ADVANCE: u32 = 6;

#[rustfmt::skip]
const DIGITS: [[u8; 7]; 10] = [
    [0x0E,0x11,0x13,0x15,0x19,0x11,0x0E], // 0
    [0x04,0x0C,0x04,0x04,0x04,0x04,0x0E], // 1
    [0x0E,0x11,0x01,0x02,0x04,0x08,0x1F], // 2
    [0x1F,0x02,0x04,0x02,0x01,0x11,0x0E], // 3
    [0x02,0x06,0x0A,0x12,0x1F,0x02,0x02], // 4
    [0x1F,0x10,0x1E,0x01,0x01,0x11,0x0E], // 5
    [0x06,0x08,0x10,0x1E,0x11,0x11,0x0E], // 6
    [0x1F,0x01,0x02,0x04,0x08,0x08,0x08], // 7
    [0x0E,0x11,0x11,0x0E,0x11,0x11,0x0E], // 8
    [0x0E,0x11,0x11,0x0F,0x01,0x02,0x0C], // 9
];

#[rustfmt::skip]
const LETTERS: [[u8; 7]; 26] = [
    [0x0E,0x11,0x11,0x1F,0x11,0x11,0x11], // A
    [0x1E,0x11,0x11,0x1E,0x11,0x11,0x1E], // B
    [0x0E,0x11,0x10,0x10,0x10,0x11,0x0E], // C
    [0x1C,0x12,0x11,0x11,0x11,0x12,0x1C], // D
    [0x1F,0x10,0x10,0x1E,0x10,0x10,0x1F], // E
    [0x1F,0x10,0x10,0x1E,0x10,0x10,0x10], // F
    [0x0E,0x11,0x10,0x17,0x11,0x11,0x0F], // G
    [0x11,0x11,0x11,0x1F,0x11,0x11,0x11], // H
    [0x0E,0x04,0x04,0x04,0x04,0x04,0x0E], // I
    [0x07,0x02,0x02,0x02,0x02,0x12,0x0C], // J
    [0x11,0x12,0x14,0x18,0x14,0x12,0x11], // K
    [0x10,0x10,0x10,0x10,0x10,0x10,0x1F], // L
    [0x11,0x1B,0x15,0x15,0x11,0x11,0x11], // M
    [0x11,0x11,0x19,0x15,0x13,0x11,0x11], // N
    [0x0E,0x11,0x11,0x11,0x11,0x11,0x0E], // O
    [0x1E,0x11,0x11,0x1E,0x10,0x10,0x10], // P
    [0x0E,0x11,0x11,0x11,0x15,0x12,0x0D], // Q
    [0x1E,0x11,0x11,0x1E,0x14,0x12,0x11], // R
    [0x0F,0x10,0x10,0x0E,0x01,0x01,0x1E], // S
    [0x1F,0x04,0x04,0x04,0x04,0x04,0x04], // T
    [0x11,0x11,0x11,0x11,0x11,0x11,0x0E], // U
    [0x11,0x11,0x11,0x11,0x11,0x0A,0x04], // V
    [0x11,0x11,0x11,0x15,0x15,0x1B,0x11], // W
    [0x11,0x11,0x0A,0x04,0x0A,0x11,0x11], // X
    [0x11,0x11,0x0A,0x04,0x04,0x04,0x04], // Y
    [0x1F,0x01,0x02,0x04,0x08,0x10,0x1F], // Z
];

pub fn glyph(ch: char) -> [u8; 7] {
    match ch {
        '0'..='9' => DIGITS[(ch as u8 - b'0') as usize],
        'A'..='Z' => LETTERS[(ch as u8 - b'A') as usize],
        'a'..='z' => LETTERS[(ch as u8 - b'a') as usize],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04],
        '-' => [0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00],
        ':' => [0x00, 0x00, 0x04, 0x00, 0x00, 0x04, 0x00],
        '%' => [0x18, 0x19, 0x02, 0x04, 0x08, 0x13, 0x03],
        _ => [0x00; 7],
    }
}

/// Pixel size of `text` at the given integer scale.
pub fn text_size(text: &str, scale: u32) -> (u32, u32) {
    let chars = text.chars().count() as u32;
    if chars == 0 {
        return (0, 0);
    }
    ((chars * ADVANCE - 1) * scale, GLYPH_H * scale)
}
