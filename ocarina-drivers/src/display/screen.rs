//! Display command sequencer
//!
//! The game issues display calls back to back without waiting. The
//! screen queues them and plays them in order against a millisecond
//! clock: text scrolls, icons hold, clears and pixels apply at once.

use heapless::{Deque, String};
use ocarina_core::assets::Icon;
use ocarina_core::traits::MAX_MESSAGE_LEN;

use super::font::glyph;
use super::frame::{Frame, FULL_BRIGHTNESS};
use super::scroll::TextScroller;

/// Commands waiting to be shown
pub const QUEUE_DEPTH: usize = 16;

/// Time per scroll column
pub const SCROLL_STEP_MS: u32 = 120;

/// Minimum time an icon or single digit stays up
pub const ICON_HOLD_MS: u32 = 400;

/// One display operation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayCommand {
    Clear,
    Pixel { x: u8, y: u8, level: u8 },
    Icon(Icon),
    Number(i32),
    Text(String<MAX_MESSAGE_LEN>),
}

impl DisplayCommand {
    /// Check if the command scrolls and leaves the screen blank after
    pub fn scrolls(&self) -> bool {
        match self {
            DisplayCommand::Text(_) => true,
            DisplayCommand::Number(value) => command_scrolls(*value),
            _ => false,
        }
    }
}

/// Numbers outside a single digit scroll like text
fn command_scrolls(value: i32) -> bool {
    !(0..=9).contains(&value)
}

/// Drops commands that would not change what is on screen
///
/// A command equal to the last one sent is redundant, unless it
/// scrolls: the scroll ends blank, so sending it again shows it again.
#[derive(Debug, Default)]
pub struct RepeatFilter {
    last: Option<DisplayCommand>,
}

impl RepeatFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if `command` can be skipped
    pub fn is_redundant(&self, command: &DisplayCommand) -> bool {
        !command.scrolls() && self.last.as_ref() == Some(command)
    }

    /// Record a command that reached the screen
    pub fn sent(&mut self, command: DisplayCommand) {
        self.last = Some(command);
    }
}

#[derive(Debug)]
enum Activity {
    Idle,
    Scrolling {
        scroller: TextScroller,
        next_step_at: u32,
    },
    Holding {
        until: u32,
    },
}

/// Queued display sequencer
#[derive(Debug)]
pub struct Screen {
    queue: Deque<DisplayCommand, QUEUE_DEPTH>,
    frame: Frame,
    activity: Activity,
}

impl Default for Screen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    pub fn new() -> Self {
        Self {
            queue: Deque::new(),
            frame: Frame::new(),
            activity: Activity::Idle,
        }
    }

    /// Queue a command
    ///
    /// Returns the command back if the queue is full.
    pub fn push(&mut self, command: DisplayCommand) -> Result<(), DisplayCommand> {
        self.queue.push_back(command)
    }

    /// Frame currently on screen
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Check if something is scrolling, holding or queued
    pub fn is_busy(&self) -> bool {
        !matches!(self.activity, Activity::Idle) || !self.queue.is_empty()
    }

    /// Number of queued commands
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Run the sequencer up to `now_ms`
    ///
    /// Returns true if the frame changed.
    pub fn advance(&mut self, now_ms: u32) -> bool {
        let mut changed = false;
        loop {
            match &mut self.activity {
                Activity::Scrolling {
                    scroller,
                    next_step_at,
                } => {
                    if now_ms < *next_step_at {
                        return changed;
                    }
                    match scroller.next_frame() {
                        Some(frame) => {
                            self.frame = frame;
                            *next_step_at = now_ms.saturating_add(SCROLL_STEP_MS);
                            return true;
                        }
                        None => self.activity = Activity::Idle,
                    }
                }
                Activity::Holding { until } => {
                    if now_ms < *until {
                        return changed;
                    }
                    self.activity = Activity::Idle;
                }
                Activity::Idle => {
                    let Some(command) = self.queue.pop_front() else {
                        return changed;
                    };
                    self.start(command, now_ms);
                    changed = true;
                }
            }
        }
    }

    fn start(&mut self, command: DisplayCommand, now_ms: u32) {
        match command {
            DisplayCommand::Clear => self.frame.clear(),
            DisplayCommand::Pixel { x, y, level } => self.frame.set(x, y, level),
            DisplayCommand::Icon(icon) => {
                self.frame = Frame::from_icon(icon);
                self.hold(now_ms);
            }
            DisplayCommand::Number(value) if !command_scrolls(value) => {
                let digit = char::from(b'0' + value as u8);
                self.frame = Frame::from_rows(glyph(digit), FULL_BRIGHTNESS);
                self.hold(now_ms);
            }
            DisplayCommand::Number(value) => {
                let mut text = String::new();
                // An i32 always fits
                let _ = core::fmt::write(&mut text, format_args!("{}", value));
                self.scroll(text, now_ms);
            }
            DisplayCommand::Text(text) => self.scroll(text, now_ms),
        }
    }

    fn hold(&mut self, now_ms: u32) {
        self.activity = Activity::Holding {
            until: now_ms.saturating_add(ICON_HOLD_MS),
        };
    }

    fn scroll(&mut self, text: String<MAX_MESSAGE_LEN>, now_ms: u32) {
        self.activity = Activity::Scrolling {
            scroller: TextScroller::new(text),
            next_step_at: now_ms,
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> DisplayCommand {
        let mut out = String::new();
        out.push_str(s).unwrap();
        DisplayCommand::Text(out)
    }

    #[test]
    fn test_clear_and_pixel_apply_at_once() {
        let mut screen = Screen::new();
        screen.push(DisplayCommand::Pixel { x: 2, y: 2, level: 100 }).unwrap();
        assert!(screen.advance(0));
        assert_eq!(screen.frame().get(2, 2), 100);
        assert!(!screen.is_busy());

        screen.push(DisplayCommand::Clear).unwrap();
        assert!(screen.advance(10));
        assert!(screen.frame().is_blank());
    }

    #[test]
    fn test_icon_holds_before_next_command() {
        let mut screen = Screen::new();
        screen.push(DisplayCommand::Icon(Icon::Title)).unwrap();
        screen.push(DisplayCommand::Clear).unwrap();

        screen.advance(0);
        assert_eq!(*screen.frame(), Frame::from_icon(Icon::Title));

        assert!(!screen.advance(ICON_HOLD_MS - 1));
        assert!(!screen.frame().is_blank());

        assert!(screen.advance(ICON_HOLD_MS));
        assert!(screen.frame().is_blank());
    }

    #[test]
    fn test_single_digit_is_static() {
        let mut screen = Screen::new();
        screen.push(DisplayCommand::Number(7)).unwrap();
        screen.advance(0);
        assert_eq!(*screen.frame(), Frame::from_rows(glyph('7'), FULL_BRIGHTNESS));
    }

    #[test]
    fn test_text_scrolls_at_fixed_rate() {
        let mut screen = Screen::new();
        screen.push(text("A")).unwrap();

        assert!(screen.advance(0));
        let first = *screen.frame();
        assert!(!screen.advance(SCROLL_STEP_MS - 1));
        assert!(screen.advance(SCROLL_STEP_MS));
        assert_ne!(*screen.frame(), first);
    }

    #[test]
    fn test_text_then_queue_continues() {
        let mut screen = Screen::new();
        screen.push(text("A")).unwrap();
        screen.push(DisplayCommand::Pixel { x: 0, y: 0, level: 9 }).unwrap();

        let mut now = 0;
        while screen.pending() > 0 {
            screen.advance(now);
            now += SCROLL_STEP_MS;
        }
        screen.advance(now);
        assert_eq!(screen.frame().get(0, 0), 9);
        assert!(!screen.is_busy());
    }

    #[test]
    fn test_negative_number_scrolls() {
        let mut screen = Screen::new();
        screen.push(DisplayCommand::Number(-3)).unwrap();
        screen.advance(0);
        assert!(matches!(screen.activity, Activity::Scrolling { .. }));
    }

    #[test]
    fn test_queue_full_returns_command() {
        let mut screen = Screen::new();
        for _ in 0..QUEUE_DEPTH {
            screen.push(DisplayCommand::Clear).unwrap();
        }
        assert_eq!(
            screen.push(DisplayCommand::Icon(Icon::No)),
            Err(DisplayCommand::Icon(Icon::No))
        );
    }

    #[test]
    fn test_hold_near_clock_wrap() {
        let mut screen = Screen::new();
        screen.push(DisplayCommand::Icon(Icon::Piece)).unwrap();
        screen.push(text("A")).unwrap();

        screen.advance(u32::MAX - 10);
        assert!(matches!(screen.activity, Activity::Holding { until: u32::MAX }));
        assert!(screen.advance(u32::MAX));
        assert!(matches!(
            screen.activity,
            Activity::Scrolling { next_step_at: u32::MAX, .. }
        ));
    }

    #[test]
    fn test_repeated_icon_is_redundant() {
        let mut filter = RepeatFilter::new();
        let icon = DisplayCommand::Icon(Icon::Piece);
        assert!(!filter.is_redundant(&icon));
        filter.sent(icon.clone());
        assert!(filter.is_redundant(&icon));
        assert!(!filter.is_redundant(&DisplayCommand::Icon(Icon::No)));

        filter.sent(DisplayCommand::Number(4));
        assert!(filter.is_redundant(&DisplayCommand::Number(4)));
    }

    #[test]
    fn test_repeated_scrolling_number_is_resent() {
        let mut filter = RepeatFilter::new();
        for value in [12, -3] {
            filter.sent(DisplayCommand::Number(value));
            assert!(!filter.is_redundant(&DisplayCommand::Number(value)));
        }

        filter.sent(text("GO"));
        assert!(!filter.is_redundant(&text("GO")));
    }

    #[test]
    fn test_scrolled_number_leaves_screen_blank() {
        let mut screen = Screen::new();
        screen.push(DisplayCommand::Number(12)).unwrap();

        let mut now = 0;
        screen.advance(now);
        while screen.is_busy() {
            now += SCROLL_STEP_MS;
            screen.advance(now);
        }
        assert!(screen.frame().is_blank());
        assert!(DisplayCommand::Number(12).scrolls());
        assert!(!DisplayCommand::Number(9).scrolls());
    }
}
