//! Sine synthesis by tiling one precomputed cycle.
//!
//! Every cycle in a buffer is the same `round(sample_rate / frequency)`
//! samples long, so long buffers never drift in phase. The price is that the
//! sounding frequency is `sample_rate / cycle_len` rather than the exact
//! target (A4 at 44.1 kHz plays at 441 Hz).

use std::f64::consts::PI;
use std::time::Duration;

use tracing::trace;

use crate::error::{EngineError, Result};

/// Default output rate, matching CD audio
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Synthesis parameters shared by everything that renders a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynthConfig {
    /// Samples per second
    pub sample_rate: u32,
    /// Length of each rendered note or chord in samples
    pub note_samples: usize,
}

impl SynthConfig {
    pub fn new(sample_rate: u32, note_length: Duration) -> Self {
        let note_samples = (note_length.as_secs_f64() * sample_rate as f64).round() as usize;
        Self {
            sample_rate,
            note_samples,
        }
    }
}

impl Default for SynthConfig {
    /// One second per note at 44.1 kHz
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            note_samples: DEFAULT_SAMPLE_RATE as usize,
        }
    }
}

/// Mono samples in [-1.0, 1.0]. The sample rate travels with the caller.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f64>,
}

impl SampleBuffer {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<f64> {
        self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Largest absolute sample value, 0.0 for an empty buffer
    pub fn peak(&self) -> f64 {
        self.samples.iter().fold(0.0, |peak, s| peak.max(s.abs()))
    }

    /// Signed 16-bit PCM: each sample clamped to [-1, 1], scaled by 32767 and
    /// rounded to nearest.
    pub fn to_pcm_i16(&self) -> Vec<i16> {
        self.samples
            .iter()
            .map(|&s| (s.clamp(-1.0, 1.0) * i16::MAX as f64).round() as i16)
            .collect()
    }
}

impl From<Vec<f64>> for SampleBuffer {
    fn from(samples: Vec<f64>) -> Self {
        Self::new(samples)
    }
}

/// Samples in one sine cycle at this frequency, rounded half away from zero.
pub fn cycle_length(frequency_hz: f64, sample_rate_hz: u32) -> Result<usize> {
    if !frequency_hz.is_finite() || frequency_hz <= 0.0 {
        return Err(EngineError::InvalidFrequency(frequency_hz));
    }
    if sample_rate_hz == 0 {
        return Err(EngineError::InvalidSampleRate);
    }
    let cycle_len = (sample_rate_hz as f64 / frequency_hz).round();
    if cycle_len < 1.0 {
        return Err(EngineError::InvalidFrequency(frequency_hz));
    }
    // saturates for absurdly low frequencies, which only ever index the
    // first `total_samples` entries anyway
    Ok(cycle_len as usize)
}

/// Generate `total_samples` of a unit-amplitude sine at `frequency_hz`.
pub fn sine_wave(frequency_hz: f64, sample_rate_hz: u32, total_samples: usize) -> Result<SampleBuffer> {
    let cycle_len = cycle_length(frequency_hz, sample_rate_hz)?;
    trace!(frequency_hz, sample_rate_hz, cycle_len, total_samples, "synthesizing sine");

    // A cycle longer than the buffer is only ever read up to the buffer length.
    let cycle: Vec<f64> = (0..cycle_len.min(total_samples))
        .map(|i| (2.0 * PI * (i as f64 / cycle_len as f64)).sin())
        .collect();

    let samples = (0..total_samples).map(|j| cycle[j % cycle_len]).collect();
    Ok(SampleBuffer::new(samples))
}
