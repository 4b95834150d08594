//! Button A / B / A+B decoding
//!
//! Both buttons are sampled together at a fixed rate. A press is
//! reported when everything has been released again, so holding A and
//! then pressing B reports a single A+B instead of A followed by B.

use ocarina_core::Input;

/// Consecutive equal samples before a level change is accepted
pub const DEBOUNCE_SAMPLES: u8 = 3;

/// Decoded button gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    A,
    B,
    AB,
}

impl From<ButtonEvent> for Input {
    fn from(event: ButtonEvent) -> Self {
        match event {
            ButtonEvent::A => Input::ButtonA,
            ButtonEvent::B => Input::ButtonB,
            ButtonEvent::AB => Input::ButtonAB,
        }
    }
}

/// Debounced level of one button
#[derive(Debug, Default)]
struct Debounce {
    stable: bool,
    count: u8,
}

impl Debounce {
    /// Feed a raw level; returns the debounced level
    fn update(&mut self, pressed: bool) -> bool {
        if pressed == self.stable {
            self.count = 0;
        } else {
            self.count += 1;
            if self.count >= DEBOUNCE_SAMPLES {
                self.stable = pressed;
                self.count = 0;
            }
        }
        self.stable
    }
}

/// Button gesture decoder
#[derive(Debug, Default)]
pub struct ButtonDecoder {
    a: Debounce,
    b: Debounce,
    /// Buttons seen pressed since everything was last released
    seen_a: bool,
    seen_b: bool,
}

impl ButtonDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw sample of both buttons (true = pressed)
    pub fn update(&mut self, a_pressed: bool, b_pressed: bool) -> Option<ButtonEvent> {
        let a = self.a.update(a_pressed);
        let b = self.b.update(b_pressed);

        self.seen_a |= a;
        self.seen_b |= b;

        if a || b {
            return None;
        }

        let event = match (self.seen_a, self.seen_b) {
            (true, true) => Some(ButtonEvent::AB),
            (true, false) => Some(ButtonEvent::A),
            (false, true) => Some(ButtonEvent::B),
            (false, false) => None,
        };
        self.seen_a = false;
        self.seen_b = false;
        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hold a raw level for n samples, collecting events
    fn hold(
        decoder: &mut ButtonDecoder,
        a: bool,
        b: bool,
        samples: usize,
    ) -> std::vec::Vec<ButtonEvent> {
        (0..samples).filter_map(|_| decoder.update(a, b)).collect()
    }

    #[test]
    fn test_press_and_release_a() {
        let mut decoder = ButtonDecoder::new();
        assert!(hold(&mut decoder, true, false, 5).is_empty());
        assert_eq!(hold(&mut decoder, false, false, 5), [ButtonEvent::A]);
    }

    #[test]
    fn test_press_and_release_b() {
        let mut decoder = ButtonDecoder::new();
        hold(&mut decoder, false, true, 5);
        assert_eq!(hold(&mut decoder, false, false, 5), [ButtonEvent::B]);
    }

    #[test]
    fn test_overlapping_press_is_ab() {
        let mut decoder = ButtonDecoder::new();
        hold(&mut decoder, true, false, 5);
        hold(&mut decoder, true, true, 5);
        // A released first, B still held
        assert!(hold(&mut decoder, false, true, 5).is_empty());
        assert_eq!(hold(&mut decoder, false, false, 5), [ButtonEvent::AB]);
    }

    #[test]
    fn test_bounce_filtered() {
        let mut decoder = ButtonDecoder::new();
        let mut events = std::vec::Vec::new();
        for level in [true, false, true, false, false, false] {
            events.extend(decoder.update(level, false));
        }
        assert!(events.is_empty());
    }

    #[test]
    fn test_into_input() {
        assert_eq!(Input::from(ButtonEvent::AB), Input::ButtonAB);
        assert_eq!(Input::from(ButtonEvent::A), Input::ButtonA);
        assert_eq!(Input::from(ButtonEvent::B), Input::ButtonB);
    }
}
