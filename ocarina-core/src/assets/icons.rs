//! 5×5 icons
//!
//! Each icon is five rows, top first. Bit 4 of a row is the leftmost
//! column, bit 0 the rightmost.

/// Icons shown by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Icon {
    /// Title screen ring
    Title,
    /// One piece of the ocarina
    Piece,
    /// The assembled ocarina
    Ocarina,
    /// Searching hint in round 3
    Target,
    /// Cross shown on failure
    No,
}

impl Icon {
    /// Row bitmaps, top row first
    pub const fn rows(&self) -> [u8; 5] {
        match self {
            Icon::Title => [0b01110, 0b10001, 0b10101, 0b10001, 0b01110],
            Icon::Piece => [0b01100, 0b10010, 0b11111, 0b01110, 0b00100],
            Icon::Ocarina => [0b01110, 0b11111, 0b10101, 0b11111, 0b01110],
            Icon::Target => [0b00100, 0b01110, 0b11011, 0b01110, 0b00100],
            Icon::No => [0b10001, 0b01010, 0b00100, 0b01010, 0b10001],
        }
    }

    /// Check if the pixel at column `x`, row `y` is lit
    pub fn is_lit(&self, x: u8, y: u8) -> bool {
        if x > 4 || y > 4 {
            return false;
        }
        self.rows()[y as usize] & (1 << (4 - x)) != 0
    }
}
