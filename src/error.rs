use thiserror::Error;

/// Contract violations reported by the pitch, synthesis and mixing functions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("pitch class {0} is outside 0-11")]
    InvalidPitchClass(u8),
    #[error("linear index {0} is outside the representable pitch range")]
    LinearIndexOutOfRange(i32),
    #[error("cannot synthesize frequency {0} Hz")]
    InvalidFrequency(f64),
    #[error("sample rate must be non-zero")]
    InvalidSampleRate,
    #[error("buffer {index} has {found} samples, expected {expected}")]
    MismatchedBufferLengths {
        expected: usize,
        found: usize,
        index: usize,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
