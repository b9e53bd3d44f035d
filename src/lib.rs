//! Pitch, interval and chord arithmetic with equal-temperament tuning, and the
//! sine synthesis and mixing that turn them into sample buffers.
//!
//! Every function here is a pure transformation; playing a buffer is left to
//! the caller.

pub mod chord;
pub mod error;
pub mod interval;
pub mod mixer;
pub mod note;
pub mod parser;
pub mod quiz;
pub mod synth;

pub use error::EngineError;
pub use note::{NoteName, Pitch};
pub use synth::{SampleBuffer, SynthConfig};
