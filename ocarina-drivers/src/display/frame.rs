//! 5×5 frame buffer

use ocarina_core::assets::Icon;

/// Grid width and height
pub const GRID_SIZE: usize = 5;

/// Brightness used for icons, glyphs and numbers
pub const FULL_BRIGHTNESS: u8 = 255;

/// One image for the LED grid
///
/// Indexed `[row][column]`, row 0 at the top. Each pixel holds a
/// brightness from 0 (off) to 255 (full).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    pixels: [[u8; GRID_SIZE]; GRID_SIZE],
}

impl Frame {
    /// Blank frame
    pub const fn new() -> Self {
        Self {
            pixels: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Frame from row bitmaps (bit 4 = leftmost column)
    pub fn from_rows(rows: [u8; GRID_SIZE], level: u8) -> Self {
        let mut frame = Self::new();
        for (y, bits) in rows.iter().enumerate() {
            for x in 0..GRID_SIZE {
                if bits & (1 << (GRID_SIZE - 1 - x)) != 0 {
                    frame.pixels[y][x] = level;
                }
            }
        }
        frame
    }

    /// Frame showing an icon at full brightness
    pub fn from_icon(icon: Icon) -> Self {
        Self::from_rows(icon.rows(), FULL_BRIGHTNESS)
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.pixels = [[0; GRID_SIZE]; GRID_SIZE];
    }

    /// Set one pixel; coordinates off the grid are ignored
    pub fn set(&mut self, x: u8, y: u8, level: u8) {
        if let Some(pixel) = self
            .pixels
            .get_mut(y as usize)
            .and_then(|row| row.get_mut(x as usize))
        {
            *pixel = level;
        }
    }

    /// Get one pixel (0 off the grid)
    pub fn get(&self, x: u8, y: u8) -> u8 {
        self.pixels
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(0)
    }

    /// One row of pixels
    pub fn row(&self, y: usize) -> &[u8; GRID_SIZE] {
        &self.pixels[y]
    }

    /// Check if every pixel is off
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().flatten().all(|level| *level == 0)
    }
}
