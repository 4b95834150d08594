//! 5×5 font
//!
//! Row bitmaps in the same layout as icons. Lowercase letters fold to
//! uppercase; anything without a glyph is drawn as `?`.

/// Columns a glyph occupies while scrolling, including the gap
pub const GLYPH_ADVANCE: usize = 6;

const QUESTION: [u8; 5] = [0b01100, 0b10010, 0b00100, 0b00000, 0b00100];

/// Glyph rows for a character
pub fn glyph(ch: char) -> [u8; 5] {
    match ch.to_ascii_uppercase() {
        ' ' => [0; 5],
        'A' => [0b01100, 0b10010, 0b11110, 0b10010, 0b10010],
        'B' => [0b11100, 0b10010, 0b11100, 0b10010, 0b11100],
        'C' => [0b01110, 0b10000, 0b10000, 0b10000, 0b01110],
        'D' => [0b11100, 0b10010, 0b10010, 0b10010, 0b11100],
        'E' => [0b11110, 0b10000, 0b11100, 0b10000, 0b11110],
        'F' => [0b11110, 0b10000, 0b11100, 0b10000, 0b10000],
        'G' => [0b01110, 0b10000, 0b10011, 0b10001, 0b01110],
        'H' => [0b10010, 0b10010, 0b11110, 0b10010, 0b10010],
        'I' => [0b11100, 0b01000, 0b01000, 0b01000, 0b11100],
        'J' => [0b11111, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10010, 0b10100, 0b11000, 0b10100, 0b10010],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b11110],
        'M' => [0b10001, 0b11011, 0b10101, 0b10001, 0b10001],
        'N' => [0b10001, 0b11001, 0b10101, 0b10011, 0b10001],
        'O' => [0b01100, 0b10010, 0b10010, 0b10010, 0b01100],
        'P' => [0b11100, 0b10010, 0b11100, 0b10000, 0b10000],
        'Q' => [0b01100, 0b10010, 0b10010, 0b01100, 0b00110],
        'R' => [0b11100, 0b10010, 0b11100, 0b10010, 0b10001],
        'S' => [0b01110, 0b10000, 0b01100, 0b00010, 0b11100],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10010, 0b10010, 0b10010, 0b10010, 0b01100],
        'V' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => [0b10010, 0b10010, 0b01100, 0b10010, 0b10010],
        'Y' => [0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11110, 0b00100, 0b01000, 0b10000, 0b11110],
        '0' => [0b01100, 0b10110, 0b11010, 0b10010, 0b01100],
        '1' => [0b01000, 0b11000, 0b01000, 0b01000, 0b11100],
        '2' => [0b11100, 0b00010, 0b01100, 0b10000, 0b11110],
        '3' => [0b11110, 0b00010, 0b00100, 0b10010, 0b01100],
        '4' => [0b00110, 0b01010, 0b10010, 0b11111, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b11110],
        '6' => [0b00010, 0b00100, 0b01110, 0b10001, 0b01110],
        '7' => [0b11111, 0b00010, 0b00100, 0b01000, 0b10000],
        '8' => [0b01110, 0b10001, 0b01110, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b01110, 0b00100, 0b01000],
        '!' => [0b01000, 0b01000, 0b01000, 0b00000, 0b01000],
        '?' => QUESTION,
        ':' => [0b00000, 0b01000, 0b00000, 0b01000, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01000],
        '-' => [0b00000, 0b00000, 0b01110, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b01110, 0b00100, 0b00000],
        '\'' => [0b01000, 0b01000, 0b00000, 0b00000, 0b00000],
        _ => QUESTION,
    }
}

/// Column `col` (0 = leftmost) of a glyph as a 5-bit mask, bit `y` = row `y`
pub fn glyph_column(ch: char, col: usize) -> u8 {
    if col >= 5 {
        return 0;
    }
    let rows = glyph(ch);
    let mut mask = 0;
    for (y, bits) in rows.iter().enumerate() {
        if bits & (1 << (4 - col)) != 0 {
            mask |= 1 << y;
        }
    }
    mask
}
