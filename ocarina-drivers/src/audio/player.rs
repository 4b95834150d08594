//! Melody and tone playback
//!
//! The player owns the speaker. Commands replace whatever is sounding:
//! a new melody restarts from its first note, a tone cuts a melody off,
//! and stop silences everything.

use ocarina_core::assets::{Melody, Notes};

use super::tone::ToneOutput;

/// Speaker request from the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioCommand {
    Melody(Melody),
    Tone(u32),
    Stop,
}

#[derive(Debug)]
enum Playback {
    Silent,
    Ringing,
    Melody {
        notes: Notes<'static>,
        note_ends_at: u32,
    },
}

/// Background melody player
pub struct MelodyPlayer<T> {
    output: T,
    playback: Playback,
}

impl<T: ToneOutput> MelodyPlayer<T> {
    pub fn new(mut output: T) -> Self {
        output.silence();
        Self {
            output,
            playback: Playback::Silent,
        }
    }

    /// Apply a command at `now_ms`
    ///
    /// Returns the time of the next note change, if a melody is playing.
    pub fn handle(&mut self, command: AudioCommand, now_ms: u32) -> Option<u32> {
        match command {
            AudioCommand::Melody(melody) => {
                self.playback = Playback::Melody {
                    notes: melody.iter(),
                    note_ends_at: now_ms,
                };
                self.advance(now_ms)
            }
            AudioCommand::Tone(0) | AudioCommand::Stop => {
                self.output.silence();
                self.playback = Playback::Silent;
                None
            }
            AudioCommand::Tone(frequency_hz) => {
                self.output.set_frequency(frequency_hz);
                self.playback = Playback::Ringing;
                None
            }
        }
    }

    /// Move the melody on to the note due at `now_ms`
    ///
    /// Returns the time of the next note change, if a melody is playing.
    pub fn advance(&mut self, now_ms: u32) -> Option<u32> {
        let Playback::Melody {
            notes,
            note_ends_at,
        } = &mut self.playback
        else {
            return None;
        };

        while now_ms >= *note_ends_at {
            let Some(note) = notes.next() else {
                self.output.silence();
                self.playback = Playback::Silent;
                return None;
            };
            if note.is_rest() {
                self.output.silence();
            } else {
                self.output.set_frequency(note.frequency_hz);
            }
            *note_ends_at = note_ends_at.saturating_add(note.duration_ms);
        }
        Some(*note_ends_at)
    }

    pub fn output(&self) -> &T {
        &self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::vec::Vec;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Sound {
        Freq(u32),
        Silence,
    }

    #[derive(Default)]
    struct RecordingSpeaker {
        log: Vec<Sound>,
    }

    impl ToneOutput for RecordingSpeaker {
        fn set_frequency(&mut self, frequency_hz: u32) {
            self.log.push(Sound::Freq(frequency_hz));
        }

        fn silence(&mut self) {
            self.log.push(Sound::Silence);
        }
    }

    fn player() -> MelodyPlayer<RecordingSpeaker> {
        let mut player = MelodyPlayer::new(RecordingSpeaker::default());
        player.output.log.clear();
        player
    }

    #[test]
    fn test_melody_plays_each_note() {
        let mut player = player();
        // 60 bpm: a default 4-unit note lasts 1000 ms
        let melody = Melody::new("C E R G", 60);

        assert_eq!(player.handle(AudioCommand::Melody(melody), 0), Some(1000));
        assert_eq!(player.advance(999), Some(1000));
        assert_eq!(player.advance(1000), Some(2000));
        assert_eq!(player.advance(2000), Some(3000));
        assert_eq!(player.advance(3000), Some(4000));
        assert_eq!(player.advance(4000), None);
        assert_eq!(player.advance(9000), None);

        assert_eq!(
            player.output().log,
            [
                Sound::Freq(262),
                Sound::Freq(330),
                Sound::Silence,
                Sound::Freq(392),
                Sound::Silence,
            ]
        );
    }

    #[test]
    fn test_late_advance_catches_up() {
        let mut player = player();
        player.handle(AudioCommand::Melody(Melody::new("C D E", 60)), 0);
        // Skips straight to the third note without drifting
        assert_eq!(player.advance(2500), Some(3000));
    }

    #[test]
    fn test_tone_interrupts_melody() {
        let mut player = player();
        player.handle(AudioCommand::Melody(Melody::ROUND1), 0);
        assert_eq!(player.handle(AudioCommand::Tone(550), 100), None);
        assert_eq!(player.advance(10_000), None);
        assert_eq!(player.output().log.last(), Some(&Sound::Freq(550)));
        assert!(matches!(player.playback, Playback::Ringing));
    }

    #[test]
    fn test_stop_silences() {
        let mut player = player();
        player.handle(AudioCommand::Tone(800), 0);
        player.handle(AudioCommand::Stop, 10);
        assert_eq!(player.output().log, [Sound::Freq(800), Sound::Silence]);
        assert!(matches!(player.playback, Playback::Silent));
    }

    #[test]
    fn test_new_melody_restarts() {
        let mut player = player();
        player.handle(AudioCommand::Melody(Melody::FAIL), 0);
        player.handle(AudioCommand::Melody(Melody::ROUND3), 50);
        // ROUND3 opens on middle C as well, but starts a fresh note timer
        assert_eq!(player.advance(50), Some(50 + Melody::ROUND3.beat_ms()));
    }

    #[test]
    fn test_melody_near_clock_wrap() {
        let mut player = player();
        let start = u32::MAX - 1500;
        let melody = Melody::new("C D E", 60);

        assert_eq!(player.handle(AudioCommand::Melody(melody), start), Some(start + 1000));
        // Note ends pin at the clock limit instead of overflowing
        assert_eq!(player.advance(start + 1000), Some(u32::MAX));
        assert_eq!(player.advance(u32::MAX), None);
    }
}
