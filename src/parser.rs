use thiserror::Error;

use crate::note::{NOTES, NoteName, Pitch};

/// Map a note letter to its natural pitch class.
fn letter_to_note(c: char) -> Option<NoteName> {
    match c.to_ascii_uppercase() {
        'C' => Some(NoteName::C),
        'D' => Some(NoteName::D),
        'E' => Some(NoteName::E),
        'F' => Some(NoteName::F),
        'G' => Some(NoteName::G),
        'A' => Some(NoteName::A),
        'B' => Some(NoteName::B),
        _ => None,
    }
}

/// Pitch parse failure with the offending text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid pitch '{input}': {message}")]
pub struct ParseError {
    pub input: String,
    pub message: String,
}

impl ParseError {
    fn new(input: &str, message: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            message: message.into(),
        }
    }
}

/// Parse scientific pitch notation such as `C4`, `f#3` or `Bb5`.
///
/// Accidentals may carry the pitch across an octave boundary (`Cb4` is B3).
/// The result must lie in the note table, C0 to C8.
pub fn parse_pitch(input: &str) -> Result<Pitch, ParseError> {
    let trimmed = input.trim();
    let mut chars = trimmed.chars().peekable();

    let letter = chars
        .next()
        .ok_or_else(|| ParseError::new(input, "empty"))?;
    let name = letter_to_note(letter)
        .ok_or_else(|| ParseError::new(input, format!("unknown note letter '{}'", letter)))?;

    let accidental = match chars.peek() {
        Some('#') => {
            chars.next();
            1
        }
        Some('b') => {
            chars.next();
            -1
        }
        _ => 0,
    };

    let octave_text: String = chars.collect();
    if octave_text.is_empty() {
        return Err(ParseError::new(input, "missing octave"));
    }
    let octave: u8 = octave_text
        .parse()
        .map_err(|_| ParseError::new(input, format!("invalid octave '{}'", octave_text)))?;

    let index = name.semitone() as i32 + accidental + octave as i32 * 12;
    NOTES
        .by_index(index)
        .ok_or_else(|| ParseError::new(input, "outside C0-C8"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letter_mapping() {
        assert_eq!(letter_to_note('a'), Some(NoteName::A));
        assert_eq!(letter_to_note('C'), Some(NoteName::C));
        assert_eq!(letter_to_note('h'), None);
    }

    #[test]
    fn test_parse_naturals() {
        assert_eq!(parse_pitch("C4").unwrap(), Pitch::of(NoteName::C, 4));
        assert_eq!(parse_pitch("a4").unwrap(), Pitch::of(NoteName::A, 4));
        assert_eq!(parse_pitch(" g7 ").unwrap(), Pitch::of(NoteName::G, 7));
    }

    #[test]
    fn test_parse_accidentals() {
        assert_eq!(parse_pitch("F#3").unwrap(), Pitch::of(NoteName::FSharp, 3));
        assert_eq!(parse_pitch("Bb5").unwrap(), Pitch::of(NoteName::ASharp, 5));
        assert_eq!(parse_pitch("Cb4").unwrap(), Pitch::of(NoteName::B, 3));
        assert_eq!(parse_pitch("B#3").unwrap(), Pitch::of(NoteName::C, 4));
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(parse_pitch("C0").unwrap().linear_index(), 0);
        assert_eq!(parse_pitch("C8").unwrap().linear_index(), 96);
        assert!(parse_pitch("C#8").is_err());
        assert!(parse_pitch("Cb0").is_err());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_pitch("").unwrap_err().message, "empty");
        assert_eq!(parse_pitch("C").unwrap_err().message, "missing octave");
        assert!(parse_pitch("X4").is_err());
        assert!(parse_pitch("C#x").is_err());
        let err = parse_pitch("H2").unwrap_err();
        assert_eq!(err.to_string(), "invalid pitch 'H2': unknown note letter 'H'");
    }
}
