//! Scrolling text
//!
//! Text is laid out as a strip of columns, one glyph plus a one column
//! gap per character. The strip enters from the right edge and scrolls
//! left until the last glyph has left the grid.

use heapless::String;
use ocarina_core::traits::MAX_MESSAGE_LEN;

use super::font::{glyph_column, GLYPH_ADVANCE};
use super::frame::{Frame, FULL_BRIGHTNESS, GRID_SIZE};

/// Scroll position for one message
#[derive(Debug, Clone)]
pub struct TextScroller {
    text: String<MAX_MESSAGE_LEN>,
    step: usize,
}

impl TextScroller {
    pub fn new(text: String<MAX_MESSAGE_LEN>) -> Self {
        Self { text, step: 0 }
    }

    /// Number of frames the whole message takes
    pub fn total_steps(&self) -> usize {
        self.text.chars().count() * GLYPH_ADVANCE + GRID_SIZE
    }

    /// Frame at a given scroll step
    ///
    /// Step 0 shows the first column of the strip at the right edge.
    pub fn frame_at(&self, step: usize) -> Frame {
        let mut frame = Frame::new();
        for x in 0..GRID_SIZE {
            // Strip column under screen column x
            let Some(column) = (step + x + 1).checked_sub(GRID_SIZE) else {
                continue;
            };
            let Some(ch) = self.text.chars().nth(column / GLYPH_ADVANCE) else {
                continue;
            };
            let mask = glyph_column(ch, column % GLYPH_ADVANCE);
            for y in 0..GRID_SIZE {
                if mask & (1 << y) != 0 {
                    frame.set(x as u8, y as u8, FULL_BRIGHTNESS);
                }
            }
        }
        frame
    }

    /// Next frame, or `None` once the message has scrolled off
    pub fn next_frame(&mut self) -> Option<Frame> {
        if self.step >= self.total_steps() {
            return None;
        }
        let frame = self.frame_at(self.step);
        self.step += 1;
        Some(frame)
    }
}
