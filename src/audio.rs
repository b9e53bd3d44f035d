//! Blocking playback of rendered buffers through the default output device.

use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use thiserror::Error;
use tracing::{debug, error, info};

use eartrainer::synth::SampleBuffer;

/// Extra time allowed for the device to drain after the last sample
const DRAIN_GRACE: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("no output audio device available")]
    NoDevice,
    #[error("failed to get default output config: {0}")]
    Config(#[from] cpal::DefaultStreamConfigError),
    #[error("failed to build output stream: {0}")]
    Build(#[from] cpal::BuildStreamError),
    #[error("failed to play stream: {0}")]
    Play(#[from] cpal::PlayStreamError),
    #[error("audio stream stopped before the buffer finished")]
    Stalled,
}

/// The default output device and the config buffers are streamed with.
pub struct AudioOutput {
    device: cpal::Device,
    config: cpal::StreamConfig,
}

impl AudioOutput {
    pub fn open() -> Result<Self, AudioError> {
        let host = cpal::default_host();
        let device = host.default_output_device().ok_or(AudioError::NoDevice)?;
        let config: cpal::StreamConfig = device.default_output_config()?.into();
        info!(
            sample_rate = config.sample_rate,
            channels = config.channels,
            "opened audio output"
        );
        Ok(Self { device, config })
    }

    /// The rate buffers must be synthesized at to play at the right pitch.
    pub fn sample_rate(&self) -> u32 {
        self.config.sample_rate
    }

    /// Stream a mono buffer to every channel, blocking until it has played.
    pub fn play(&self, buffer: &SampleBuffer) -> Result<(), AudioError> {
        if buffer.is_empty() {
            return Ok(());
        }

        let samples: Arc<Vec<f32>> = Arc::new(buffer.samples().iter().map(|&s| s as f32).collect());
        let channels = self.config.channels as usize;
        let (done_tx, done_rx) = mpsc::channel::<()>();

        let source = Arc::clone(&samples);
        let mut position = 0usize;
        let mut finished = false;

        let stream = self.device.build_output_stream(
            &self.config,
            move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                for frame in data.chunks_mut(channels) {
                    let value = source.get(position).copied().unwrap_or(0.0);
                    frame.fill(value);
                    position += 1;
                }
                if position >= source.len() && !finished {
                    finished = true;
                    let _ = done_tx.send(());
                }
            },
            move |err| {
                error!("audio stream error: {}", err);
            },
            None,
        )?;

        stream.play()?;

        let length = Duration::from_secs_f64(samples.len() as f64 / self.sample_rate() as f64);
        debug!(samples = samples.len(), ?length, "playing buffer");
        done_rx
            .recv_timeout(length * 2 + DRAIN_GRACE)
            .map_err(|_| AudioError::Stalled)?;

        // let the final device period ring out
        std::thread::sleep(Duration::from_millis(50));
        Ok(())
    }

    pub fn play_all(&self, buffers: &[SampleBuffer]) -> Result<(), AudioError> {
        for buffer in buffers {
            self.play(buffer)?;
        }
        Ok(())
    }
}
