//! Chords as ordered interval stacks, made absolute against a base pitch.

use crate::error::Result;
use crate::interval::{Interval, MAJOR_THIRD, PERFECT_FIFTH, UNISON};
use crate::note::Pitch;

/// Interval offsets from an unspecified root, in voice order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeChord {
    intervals: Vec<Interval>,
}

impl RelativeChord {
    pub fn new(intervals: impl Into<Vec<Interval>>) -> Self {
        Self {
            intervals: intervals.into(),
        }
    }

    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Place the chord on `base`, keeping voice order.
    pub fn absolute(&self, base: Pitch) -> Result<Vec<Pitch>> {
        absolute_chord(base, &self.intervals)
    }
}

/// Major triad: root, major third, perfect fifth
pub fn triad() -> RelativeChord {
    RelativeChord::new([UNISON, MAJOR_THIRD, PERFECT_FIFTH])
}

/// Offset `base` by each interval in turn. Fails if any voice falls below C0.
pub fn absolute_chord(base: Pitch, intervals: &[Interval]) -> Result<Vec<Pitch>> {
    let root = base.linear_index();
    intervals
        .iter()
        .map(|&interval| Pitch::from_linear_index(root + interval))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::note::NoteName;

    #[test]
    fn test_c_major_triad() {
        let chord = triad().absolute(Pitch::of(NoteName::C, 4)).unwrap();
        assert_eq!(
            chord,
            vec![
                Pitch::of(NoteName::C, 4),
                Pitch::of(NoteName::E, 4),
                Pitch::of(NoteName::G, 4),
            ]
        );
    }

    #[test]
    fn test_triad_crosses_octave() {
        // G4 B4 D5
        let chord = triad().absolute(Pitch::of(NoteName::G, 4)).unwrap();
        assert_eq!(chord[1], Pitch::of(NoteName::B, 4));
        assert_eq!(chord[2], Pitch::of(NoteName::D, 5));
    }

    #[test]
    fn test_voice_order_preserved() {
        let chord = absolute_chord(Pitch::of(NoteName::C, 4), &[7, 0, 4]).unwrap();
        assert_eq!(chord[0], Pitch::of(NoteName::G, 4));
        assert_eq!(chord[1], Pitch::of(NoteName::C, 4));
        assert_eq!(chord[2], Pitch::of(NoteName::E, 4));
    }

    #[test]
    fn test_empty_chord() {
        let chord = absolute_chord(Pitch::of(NoteName::C, 4), &[]).unwrap();
        assert!(chord.is_empty());
    }

    #[test]
    fn test_voice_below_c0_rejected() {
        assert!(absolute_chord(Pitch::of(NoteName::C, 0), &[-1]).is_err());
    }
}
