//! Display trait for the 5×5 LED grid

use core::fmt::{self, Write};

use heapless::String;

use crate::assets::Icon;

/// Longest message the game ever shows
pub const MAX_MESSAGE_LEN: usize = 48;

/// Trait for the LED grid
///
/// The grid is a dumb output: text scrolls, icons and numbers are shown,
/// and single pixels can be plotted with a brightness level. Requests are
/// shown in the order they are made.
pub trait Display {
    /// Scroll a line of text
    fn show_text(&mut self, text: &str);

    /// Turn every pixel off
    fn clear(&mut self);

    /// Show a built-in icon
    fn show_icon(&mut self, icon: Icon);

    /// Show a number (scrolls when it has more than one digit)
    fn show_number(&mut self, value: i32);

    /// Plot one pixel
    ///
    /// - `x`, `y`: column and row (0-4)
    /// - `level`: brightness (0 = off, 255 = full)
    fn plot_brightness(&mut self, x: u8, y: u8, level: u8);
}

/// Helper trait for formatted messages
pub trait DisplayExt: Display {
    /// Format and scroll a message
    ///
    /// Messages longer than [`MAX_MESSAGE_LEN`] are truncated.
    fn show_fmt(&mut self, args: fmt::Arguments<'_>) {
        let mut text: String<MAX_MESSAGE_LEN> = String::new();
        // Overflow leaves the part that fit
        let _ = text.write_fmt(args);
        self.show_text(text.as_str());
    }
}

// Blanket implementation for all Display types
impl<T: Display> DisplayExt for T {}
