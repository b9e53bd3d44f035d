//! Intervals as semitone offsets from a root, and the scales built from them.

pub type Interval = i32;

pub const UNISON: Interval = 0;
pub const MINOR_SECOND: Interval = 1;
pub const MAJOR_SECOND: Interval = 2;
pub const MINOR_THIRD: Interval = 3;
pub const MAJOR_THIRD: Interval = 4;
pub const PERFECT_FOURTH: Interval = 5;
pub const AUGMENTED_FOURTH: Interval = 6;
pub const PERFECT_FIFTH: Interval = 7;
pub const MINOR_SIXTH: Interval = 8;
pub const MAJOR_SIXTH: Interval = 9;
pub const MINOR_SEVENTH: Interval = 10;
pub const MAJOR_SEVENTH: Interval = 11;
pub const OCTAVE: Interval = 12;

const INTERVAL_LABELS: [&str; 13] = [
    "I",
    "Minor II",
    "Major II",
    "Minor III",
    "Major III",
    "Perfect IV",
    "Augmented IV",
    "Perfect V",
    "Minor VI",
    "Major VI",
    "Minor VII",
    "Major VII",
    "Octave",
];

/// Scale-degree style name of an interval, or "Unknown" outside 0..=12.
pub fn interval_label(semitones: Interval) -> &'static str {
    usize::try_from(semitones)
        .ok()
        .and_then(|i| INTERVAL_LABELS.get(i))
        .copied()
        .unwrap_or("Unknown")
}

/// Seven scale degrees relative to the tonic.
pub type Scale = [Interval; 7];

pub const MAJOR_SCALE: Scale = [
    UNISON,
    MAJOR_SECOND,
    MAJOR_THIRD,
    PERFECT_FOURTH,
    PERFECT_FIFTH,
    MAJOR_SIXTH,
    MAJOR_SEVENTH,
];

/// Minor scale as the quiz asks it: minor third and sixth, major seventh.
pub const MINOR_SCALE: Scale = [
    UNISON,
    MAJOR_SECOND,
    MINOR_THIRD,
    PERFECT_FOURTH,
    PERFECT_FIFTH,
    MINOR_SIXTH,
    MAJOR_SEVENTH,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels() {
        assert_eq!(interval_label(UNISON), "I");
        assert_eq!(interval_label(AUGMENTED_FOURTH), "Augmented IV");
        assert_eq!(interval_label(7), "Perfect V");
        assert_eq!(interval_label(OCTAVE), "Octave");
    }

    #[test]
    fn test_unknown_labels() {
        assert_eq!(interval_label(99), "Unknown");
        assert_eq!(interval_label(13), "Unknown");
        assert_eq!(interval_label(-1), "Unknown");
    }

    #[test]
    fn test_scale_presets() {
        assert_eq!(MAJOR_SCALE, [0, 2, 4, 5, 7, 9, 11]);
        assert_eq!(MINOR_SCALE, [0, 2, 3, 5, 7, 8, 11]);
    }
}
