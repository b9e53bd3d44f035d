//! Mixer: averages voices sample by sample so the sum never clips.

use crate::error::{EngineError, Result};
use crate::synth::SampleBuffer;

/// Mean of equal-length buffers. No inputs yields an empty buffer; a length
/// mismatch is an error rather than padding or truncation.
pub fn mix(buffers: &[SampleBuffer]) -> Result<SampleBuffer> {
    let Some(first) = buffers.first() else {
        return Ok(SampleBuffer::default());
    };

    let len = first.len();
    if let Some((index, buf)) = buffers.iter().enumerate().find(|(_, b)| b.len() != len) {
        return Err(EngineError::MismatchedBufferLengths {
            expected: len,
            found: buf.len(),
            index,
        });
    }

    let count = buffers.len() as f64;
    let samples = (0..len)
        .map(|i| buffers.iter().map(|b| b.samples()[i]).sum::<f64>() / count)
        .collect();
    Ok(SampleBuffer::new(samples))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::sine_wave;

    #[test]
    fn test_opposites_cancel() {
        let a = SampleBuffer::new(vec![1.0; 64]);
        let b = SampleBuffer::new(vec![-1.0; 64]);
        let out = mix(&[a, b]).unwrap();
        assert_eq!(out.len(), 64);
        assert!(out.samples().iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_empty_input() {
        assert!(mix(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_single_buffer_unchanged() {
        let a = sine_wave(330.0, 44_100, 500).unwrap();
        assert_eq!(mix(std::slice::from_ref(&a)).unwrap(), a);
    }

    #[test]
    fn test_averages() {
        let a = SampleBuffer::new(vec![1.0, 0.5, 0.0]);
        let b = SampleBuffer::new(vec![0.0, 0.5, -1.0]);
        let c = SampleBuffer::new(vec![0.5, 0.5, 0.25]);
        let out = mix(&[a, b, c]).unwrap();
        assert_eq!(out.samples(), &[0.5, 0.5, -0.25]);
    }

    #[test]
    fn test_mismatched_lengths() {
        let a = SampleBuffer::new(vec![0.0; 4]);
        let b = SampleBuffer::new(vec![0.0; 4]);
        let c = SampleBuffer::new(vec![0.0; 3]);
        assert_eq!(
            mix(&[a, b, c]),
            Err(EngineError::MismatchedBufferLengths {
                expected: 4,
                found: 3,
                index: 2
            })
        );
    }
}
