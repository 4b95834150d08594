//! LED matrix scanning
//!
//! The 5×5 grid is wired as five anode rows (active high) and five
//! cathode columns (active low). One row is lit at a time; brightness
//! comes from lighting a pixel in only some of the subframes.

use embedded_hal::digital::OutputPin;

use super::frame::{Frame, GRID_SIZE};

/// Brightness subframes per full refresh
pub const SUBFRAMES: u8 = 8;

/// Level step between subframes
const LEVEL_STEP: u16 = 256 / SUBFRAMES as u16;

/// Pin write failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MatrixError {
    Row(u8),
    Column(u8),
}

/// Row/column multiplexed LED matrix
pub struct LedMatrix<R, C> {
    rows: [R; GRID_SIZE],
    cols: [C; GRID_SIZE],
    row: usize,
    subframe: u8,
}

impl<R, C> LedMatrix<R, C>
where
    R: OutputPin,
    C: OutputPin,
{
    /// Take the pins and blank the grid
    pub fn new(rows: [R; GRID_SIZE], cols: [C; GRID_SIZE]) -> Result<Self, MatrixError> {
        let mut matrix = Self {
            rows,
            cols,
            row: 0,
            subframe: 0,
        };
        matrix.blank()?;
        Ok(matrix)
    }

    /// Turn every LED off
    pub fn blank(&mut self) -> Result<(), MatrixError> {
        for (i, row) in self.rows.iter_mut().enumerate() {
            row.set_low().map_err(|_| MatrixError::Row(i as u8))?;
        }
        for (i, col) in self.cols.iter_mut().enumerate() {
            col.set_high().map_err(|_| MatrixError::Column(i as u8))?;
        }
        Ok(())
    }

    /// Light the next row of `frame`
    ///
    /// Call at a fixed rate; a full refresh takes
    /// `GRID_SIZE * SUBFRAMES` calls.
    pub fn scan(&mut self, frame: &Frame) -> Result<(), MatrixError> {
        let previous = if self.row == 0 { GRID_SIZE - 1 } else { self.row - 1 };
        self.rows[previous]
            .set_low()
            .map_err(|_| MatrixError::Row(previous as u8))?;

        let threshold = self.subframe as u16 * LEVEL_STEP;
        for (x, level) in frame.row(self.row).iter().enumerate() {
            let lit = (*level as u16) > threshold;
            let col = &mut self.cols[x];
            let result = if lit { col.set_low() } else { col.set_high() };
            result.map_err(|_| MatrixError::Column(x as u8))?;
        }

        self.rows[self.row]
            .set_high()
            .map_err(|_| MatrixError::Row(self.row as u8))?;

        self.row += 1;
        if self.row == GRID_SIZE {
            self.row = 0;
            self.subframe = (self.subframe + 1) % SUBFRAMES;
        }
        Ok(())
    }
}
