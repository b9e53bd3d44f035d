//! Scale-degree ear training: establish the key with a cadence, then ask
//! which degree a single note is.

use std::ops::Range;

use rand::Rng;
use tracing::debug;

use crate::chord::triad;
use crate::error::Result;
use crate::interval::{Interval, Scale, interval_label};
use crate::mixer::mix;
use crate::note::{NoteName, Pitch};
use crate::synth::{SampleBuffer, SynthConfig, sine_wave};

/// Octaves the question note is drawn from (4 inclusive to 6 exclusive)
pub const QUESTION_OCTAVES: Range<u8> = 4..6;

/// Chord roots of the I-IV-V-I cadence in C
pub const CADENCE_ROOTS: [Pitch; 4] = [
    Pitch::of(NoteName::C, 4),
    Pitch::of(NoteName::F, 4),
    Pitch::of(NoteName::G, 4),
    Pitch::of(NoteName::C, 4),
];

/// Render a single pitch at the configured note length.
pub fn render_note(pitch: Pitch, config: &SynthConfig) -> Result<SampleBuffer> {
    sine_wave(pitch.frequency(), config.sample_rate, config.note_samples)
}

/// Render all voices of a chord and mix them into one buffer.
pub fn render_chord(pitches: &[Pitch], config: &SynthConfig) -> Result<SampleBuffer> {
    let voices = pitches
        .iter()
        .map(|&p| render_note(p, config))
        .collect::<Result<Vec<_>>>()?;
    mix(&voices)
}

/// One mixed buffer per cadence chord, in playing order.
pub fn cadence(config: &SynthConfig) -> Result<Vec<SampleBuffer>> {
    CADENCE_ROOTS
        .iter()
        .map(|&root| render_chord(&triad().absolute(root)?, config))
        .collect()
}

/// A single scale-degree question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Index into the scale, which is what the player answers with
    pub degree: usize,
    pub interval: Interval,
    pub pitch: Pitch,
}

impl Question {
    /// Pick a degree uniformly from `scale` and an octave from `octaves`.
    pub fn random<R: Rng>(rng: &mut R, scale: &Scale, octaves: Range<u8>) -> Result<Self> {
        let degree = rng.random_range(0..scale.len());
        let octave = rng.random_range(octaves);
        Self::new(scale, degree, octave)
    }

    /// The question for a fixed degree of a scale on C.
    pub fn new(scale: &Scale, degree: usize, octave: u8) -> Result<Self> {
        let interval = scale[degree];
        let pitch = Pitch::from_linear_index(interval + octave as i32 * 12)?;
        debug!(degree, interval, %pitch, "new question");
        Ok(Self {
            degree,
            interval,
            pitch,
        })
    }

    pub fn render(&self, config: &SynthConfig) -> Result<SampleBuffer> {
        render_note(self.pitch, config)
    }

    pub fn check(&self, answer: usize) -> Answer {
        Answer {
            correct: answer == self.degree,
            interval: self.interval,
            pitch: self.pitch,
        }
    }
}

/// Outcome of answering a [`Question`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Answer {
    pub correct: bool,
    pub interval: Interval,
    pub pitch: Pitch,
}

impl Answer {
    pub fn message(&self) -> String {
        let verdict = if self.correct { "Correct!" } else { "Wrong!" };
        format!(
            "{} It was {} ({})",
            verdict,
            interval_label(self.interval),
            self.pitch.label()
        )
    }
}

/// Running score across questions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Session {
    pub asked: u32,
    pub correct: u32,
}

impl Session {
    pub fn record(&mut self, answer: &Answer) {
        self.asked += 1;
        if answer.correct {
            self.correct += 1;
        }
    }

    pub fn summary(&self) -> String {
        if self.asked == 0 {
            return "No questions answered".to_string();
        }
        let percent = self.correct as f64 * 100.0 / self.asked as f64;
        format!("Score: {}/{} ({:.0}%)", self.correct, self.asked, percent)
    }
}
