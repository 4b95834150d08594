//! Melodies in note notation
//!
//! A melody is a space-separated list of tokens:
//!
//! ```text
//! NOTE[#|b][octave][:beats]    e.g. C5, F#, Bb3:8
//! R[:beats]                    rest
//! ```
//!
//! Octave and beats are sticky: a token that omits them reuses the
//! previous token's values (defaults: octave 4, 4 beat units). Four beat
//! units last one beat at the melody tempo.

/// Octave used until a token names one
pub const DEFAULT_OCTAVE: u8 = 4;

/// Beat units used until a token names them (one beat)
pub const DEFAULT_BEATS: u8 = 4;

/// Beat units per beat
const UNITS_PER_BEAT: u32 = 4;

/// Equal-tempered frequencies for octave 4, C to B (Hz)
const OCTAVE4_HZ: [u32; 12] = [262, 277, 294, 311, 330, 349, 370, 392, 415, 440, 466, 494];

/// A melody and its tempo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Melody {
    /// Note tokens
    pub notes: &'static str,
    /// Tempo in beats per minute
    pub tempo_bpm: u16,
}

impl Melody {
    /// Descending scale for clearing round 1
    pub const ROUND1: Self = Self::new("C5 B A G F E D C ", 200);
    /// Clearing round 2
    pub const ROUND2: Self = Self::new("G B A G C5 B A B ", 200);
    /// Ascending scale for clearing round 3
    pub const ROUND3: Self = Self::new("C D E F G A B C5 ", 150);
    /// Buzz on failure
    pub const FAIL: Self = Self::new("C C C C C C C C ", 50);

    /// Create a melody
    pub const fn new(notes: &'static str, tempo_bpm: u16) -> Self {
        Self { notes, tempo_bpm }
    }

    /// Melody played when round 1, 2 or 3 is cleared
    pub fn for_round(round: u8) -> Option<Self> {
        match round {
            1 => Some(Self::ROUND1),
            2 => Some(Self::ROUND2),
            3 => Some(Self::ROUND3),
            _ => None,
        }
    }

    /// Length of one beat (ms)
    pub fn beat_ms(&self) -> u32 {
        60_000 / self.tempo_bpm.max(1) as u32
    }

    /// Iterate over the parsed notes
    pub fn iter(&self) -> Notes<'static> {
        Notes::new(self.notes, self.beat_ms())
    }

    /// Total playing time (ms)
    pub fn duration_ms(&self) -> u32 {
        self.iter().map(|note| note.duration_ms).sum()
    }
}

/// One note (or rest) ready to play
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Note {
    /// Frequency in Hz, 0 for a rest
    pub frequency_hz: u32,
    /// How long the note lasts (ms)
    pub duration_ms: u32,
}

impl Note {
    /// Check if this is a rest
    pub fn is_rest(&self) -> bool {
        self.frequency_hz == 0
    }
}

/// Iterator over the notes of a melody string
///
/// Tokens that cannot be parsed are skipped.
#[derive(Debug, Clone)]
pub struct Notes<'a> {
    tokens: core::str::SplitAsciiWhitespace<'a>,
    beat_ms: u32,
    octave: u8,
    beats: u8,
}

impl<'a> Notes<'a> {
    /// Parse `notes` with the given beat length
    pub fn new(notes: &'a str, beat_ms: u32) -> Self {
        Self {
            tokens: notes.split_ascii_whitespace(),
            beat_ms,
            octave: DEFAULT_OCTAVE,
            beats: DEFAULT_BEATS,
        }
    }

    /// Parse a single token, updating the sticky octave and beats
    fn parse_token(&mut self, token: &str) -> Option<Note> {
        let bytes = token.as_bytes();
        let mut pos = 0;

        let semitone: Option<i32> = match bytes.first()?.to_ascii_uppercase() {
            b'C' => Some(0),
            b'D' => Some(2),
            b'E' => Some(4),
            b'F' => Some(5),
            b'G' => Some(7),
            b'A' => Some(9),
            b'B' => Some(11),
            b'R' => None,
            _ => return None,
        };
        pos += 1;

        let mut semitone = semitone;
        if let (Some(s), Some(&accidental)) = (semitone, bytes.get(pos)) {
            match accidental {
                b'#' => {
                    semitone = Some(s + 1);
                    pos += 1;
                }
                b'b' => {
                    semitone = Some(s - 1);
                    pos += 1;
                }
                _ => {}
            }
        }

        if let Some(&digit) = bytes.get(pos) {
            if digit.is_ascii_digit() {
                self.octave = digit - b'0';
                pos += 1;
            }
        }

        if let Some(&b':') = bytes.get(pos) {
            let beats: u8 = token.get(pos + 1..)?.parse().ok()?;
            self.beats = beats;
            pos = bytes.len();
        }

        if pos != bytes.len() {
            return None;
        }

        let duration_ms = self.beats as u32 * self.beat_ms / UNITS_PER_BEAT;
        let frequency_hz = match semitone {
            Some(s) => frequency_for(s, self.octave),
            None => 0,
        };

        Some(Note {
            frequency_hz,
            duration_ms,
        })
    }
}

impl<'a> Iterator for Notes<'a> {
    type Item = Note;

    fn next(&mut self) -> Option<Note> {
        loop {
            let token = self.tokens.next()?;
            if let Some(note) = self.parse_token(token) {
                return Some(note);
            }
        }
    }
}

/// Frequency of a semitone offset from C in an octave
///
/// Offsets of -1 and 12 (Cb, B#) roll into the neighbouring octave.
fn frequency_for(semitone: i32, octave: u8) -> u32 {
    let octave = octave as i32 + semitone.div_euclid(12);
    let base = OCTAVE4_HZ[semitone.rem_euclid(12) as usize];

    if octave >= 4 {
        base << (octave - 4).min(8)
    } else {
        base >> (4 - octave).min(8)
    }
}
