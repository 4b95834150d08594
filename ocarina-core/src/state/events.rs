//! Events that trigger state transitions, and the raw inputs behind them

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Player asked to start from the instructions screen
    Start,
    /// Current round's target was found
    RoundCleared,
    /// Current round's countdown ran out
    TimeUp,
}

/// Inputs delivered by the board between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Input {
    /// Button A pressed on its own
    ButtonA,
    /// Button B pressed on its own
    ButtonB,
    /// Buttons A and B pressed together
    ButtonAB,
    /// Shake gesture detected
    Shake,
}
