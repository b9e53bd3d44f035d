//! Absolute pitches, their linear index and equal-temperament frequency.

use std::fmt;

use once_cell::sync::Lazy;

use crate::error::{EngineError, Result};

/// Frequency of A4 in Hz
pub const A4_FREQUENCY: f64 = 440.0;

/// Lowest linear index held in the note table (C0)
pub const BOTTOM_NOTE: i32 = 0;

/// Highest linear index held in the note table (C8)
pub const TOP_NOTE: i32 = 8 * 12;

/// Display names indexed by pitch class.
/// A# keeps the "A#/Ab" spelling the quiz has always shown.
const PITCH_CLASS_NAMES: [&str; 12] = [
    "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A", "A#/Ab", "B",
];

const UNKNOWN_NOTE: &str = "Unknown Note";

/// Musical note names (chromatic scale)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteName {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl NoteName {
    pub const ALL: [NoteName; 12] = [
        NoteName::C,
        NoteName::CSharp,
        NoteName::D,
        NoteName::DSharp,
        NoteName::E,
        NoteName::F,
        NoteName::FSharp,
        NoteName::G,
        NoteName::GSharp,
        NoteName::A,
        NoteName::ASharp,
        NoteName::B,
    ];

    /// Pitch class within an octave (C=0, B=11)
    pub const fn semitone(self) -> u8 {
        self as u8
    }

    pub fn from_semitone(pitch_class: u8) -> Option<NoteName> {
        Self::ALL.get(pitch_class as usize).copied()
    }
}

/// An absolute pitch: a pitch class in 0..=11 and an octave, where octave 4
/// holds A440.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pitch {
    octave: u8,
    pitch_class: u8,
}

impl Pitch {
    /// Build a pitch from a raw pitch class. Classes above 11 are rejected.
    pub fn new(pitch_class: u8, octave: u8) -> Result<Self> {
        if pitch_class > 11 {
            return Err(EngineError::InvalidPitchClass(pitch_class));
        }
        Ok(Self {
            pitch_class,
            octave,
        })
    }

    pub const fn of(name: NoteName, octave: u8) -> Self {
        Self {
            pitch_class: name.semitone(),
            octave,
        }
    }

    /// Inverse of [`Pitch::linear_index`]. Negative indices and indices past
    /// octave 255 are rejected rather than wrapped.
    pub fn from_linear_index(index: i32) -> Result<Self> {
        if index < 0 {
            return Err(EngineError::LinearIndexOutOfRange(index));
        }
        let octave =
            u8::try_from(index / 12).map_err(|_| EngineError::LinearIndexOutOfRange(index))?;
        Ok(Self {
            pitch_class: (index % 12) as u8,
            octave,
        })
    }

    pub fn pitch_class(&self) -> u8 {
        self.pitch_class
    }

    pub fn octave(&self) -> u8 {
        self.octave
    }

    pub fn name(&self) -> NoteName {
        // pitch_class is validated on construction
        NoteName::ALL[self.pitch_class as usize]
    }

    /// Semitones since C0
    pub fn linear_index(&self) -> i32 {
        self.pitch_class as i32 + self.octave as i32 * 12
    }

    /// Equal-temperament frequency in Hz, relative to A4 = 440 Hz
    pub fn frequency(&self) -> f64 {
        let semitones = self.linear_index() - Self::of(NoteName::A, 4).linear_index();
        A4_FREQUENCY * 2.0_f64.powf(semitones as f64 / 12.0)
    }

    pub fn label(&self) -> String {
        let name = PITCH_CLASS_NAMES
            .get(self.pitch_class as usize)
            .copied()
            .unwrap_or(UNKNOWN_NOTE);
        format!("{}{}", name, self.octave)
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Every pitch from [`BOTTOM_NOTE`] to [`TOP_NOTE`], built once and indexed
/// by linear index.
#[derive(Debug, Clone)]
pub struct NoteTable {
    notes: Vec<Pitch>,
}

impl NoteTable {
    pub fn new() -> Self {
        let notes = (BOTTOM_NOTE..=TOP_NOTE)
            .map(|i| Pitch {
                pitch_class: (i % 12) as u8,
                octave: (i / 12) as u8,
            })
            .collect();
        Self { notes }
    }

    /// O(1) lookup by pitch class and octave
    pub fn get(&self, pitch_class: u8, octave: u8) -> Option<Pitch> {
        if pitch_class > 11 {
            return None;
        }
        self.by_index(pitch_class as i32 + octave as i32 * 12)
    }

    pub fn by_index(&self, index: i32) -> Option<Pitch> {
        let offset = usize::try_from(index - BOTTOM_NOTE).ok()?;
        self.notes.get(offset).copied()
    }

    pub fn contains(&self, pitch: Pitch) -> bool {
        self.by_index(pitch.linear_index()).is_some()
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pitch> {
        self.notes.iter()
    }
}

impl Default for NoteTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Process-wide note table, built on first use.
pub static NOTES: Lazy<NoteTable> = Lazy::new(NoteTable::new);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_index_round_trip() {
        for n in BOTTOM_NOTE..=TOP_NOTE {
            let pitch = Pitch::from_linear_index(n).unwrap();
            assert_eq!(pitch.linear_index(), n);
        }
    }

    #[test]
    fn test_from_linear_index_splits_octave() {
        let pitch = Pitch::from_linear_index(57).unwrap();
        assert_eq!(pitch, Pitch::of(NoteName::A, 4));
        assert_eq!(pitch.pitch_class(), 9);
        assert_eq!(pitch.octave(), 4);
    }

    #[test]
    fn test_negative_index_rejected() {
        assert_eq!(
            Pitch::from_linear_index(-1),
            Err(EngineError::LinearIndexOutOfRange(-1))
        );
    }

    #[test]
    fn test_octave_overflow_rejected() {
        assert!(Pitch::from_linear_index(256 * 12).is_err());
        assert!(Pitch::from_linear_index(255 * 12 + 11).is_ok());
    }

    #[test]
    fn test_invalid_pitch_class_rejected() {
        assert_eq!(Pitch::new(12, 4), Err(EngineError::InvalidPitchClass(12)));
        assert_eq!(Pitch::new(11, 4).unwrap().name(), NoteName::B);
    }

    #[test]
    fn test_a4_frequency() {
        assert_eq!(Pitch::of(NoteName::A, 4).frequency(), 440.0);
    }

    #[test]
    fn test_octave_doubles_frequency() {
        let freq = Pitch::of(NoteName::A, 5).frequency();
        assert!((freq - 880.0).abs() < 1e-9);
        let freq = Pitch::of(NoteName::A, 3).frequency();
        assert!((freq - 220.0).abs() < 1e-9);
    }

    #[test]
    fn test_middle_c_frequency() {
        let freq = Pitch::of(NoteName::C, 4).frequency();
        assert!((freq - 261.6255653005986).abs() < 1e-9);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Pitch::of(NoteName::C, 4).label(), "C4");
        assert_eq!(Pitch::of(NoteName::CSharp, 3).label(), "C#/Db3");
        assert_eq!(Pitch::of(NoteName::ASharp, 2).label(), "A#/Ab2");
        assert_eq!(Pitch::of(NoteName::B, 0).to_string(), "B0");
    }

    #[test]
    fn test_semitones() {
        assert_eq!(NoteName::C.semitone(), 0);
        assert_eq!(NoteName::B.semitone(), 11);
        assert_eq!(NoteName::from_semitone(9), Some(NoteName::A));
        assert_eq!(NoteName::from_semitone(12), None);
    }

    #[test]
    fn test_note_table_covers_c0_to_c8() {
        assert_eq!(NOTES.len(), 97);
        assert_eq!(NOTES.by_index(0), Some(Pitch::of(NoteName::C, 0)));
        assert_eq!(NOTES.by_index(96), Some(Pitch::of(NoteName::C, 8)));
        assert_eq!(NOTES.by_index(97), None);
        assert_eq!(NOTES.by_index(-3), None);
    }

    #[test]
    fn test_note_table_lookup() {
        assert_eq!(NOTES.get(9, 4), Some(Pitch::of(NoteName::A, 4)));
        assert_eq!(NOTES.get(1, 8), None);
        assert_eq!(NOTES.get(12, 0), None);
        assert!(NOTES.contains(Pitch::of(NoteName::G, 7)));
        assert!(!NOTES.contains(Pitch::of(NoteName::D, 8)));
    }
}
