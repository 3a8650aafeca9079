//! Real-time capture adapter.
//!
//! Opens a cpal input stream and runs the quantize node inside the device
//! callback: device samples are normalized to f32, batched into fixed-size
//! quanta, converted to 16-bit PCM, and pushed into an SPSC ring toward the
//! uplink thread. The callback never blocks and never performs I/O; when the
//! ring is full the quantum is dropped.

use anyhow::{Context, Result};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{Device, SampleFormat, Stream, StreamConfig};
use dasp_sample::Sample as DaspSample;
use rtrb::Producer;
use tracing::{error, info, warn};

use crate::audio::frame::AudioBuffer;
use crate::audio::quantize::Quantize;
use crate::config::CaptureConfig;
use crate::pipeline::Node;

/// Owns the live input stream.
///
/// The capture session runs for as long as this handler is alive; dropping
/// it stops the stream and hangs up the producer side of the ring.
pub struct CaptureHandler {
    _stream: Stream,
}

impl CaptureHandler {
    /// Start capturing from the default input device.
    pub fn start(config: &CaptureConfig, producer: Producer<Vec<i16>>) -> Result<Self> {
        let host = cpal::default_host();

        let device = host
            .default_input_device()
            .context("No input device available")?;

        info!(
            "Using input device: {}",
            device.name().unwrap_or_else(|_| "Unknown".to_string())
        );

        let device_config = device
            .default_input_config()
            .context("Failed to get default input config")?;

        info!("Input config: {:?}", device_config);

        let stream_config = StreamConfig {
            channels: device_config.channels().min(2), // Limit to stereo
            sample_rate: device_config.sample_rate(),
            buffer_size: cpal::BufferSize::Default,
        };

        let stream = match device_config.sample_format() {
            SampleFormat::I16 => {
                Self::dispatch_channels::<i16>(&device, &stream_config, producer, config)?
            }
            SampleFormat::U16 => {
                Self::dispatch_channels::<u16>(&device, &stream_config, producer, config)?
            }
            SampleFormat::F32 => {
                Self::dispatch_channels::<f32>(&device, &stream_config, producer, config)?
            }
            format => {
                anyhow::bail!("Unsupported sample format: {:?}", format);
            }
        };

        stream.play().context("Failed to play stream")?;

        info!("Audio capture started");

        Ok(Self { _stream: stream })
    }

    /// The channel count is only known at runtime, so select the
    /// compile-time channel layout here.
    fn dispatch_channels<T>(
        device: &Device,
        config: &StreamConfig,
        producer: Producer<Vec<i16>>,
        capture_config: &CaptureConfig,
    ) -> Result<Stream>
    where
        T: cpal::Sample + cpal::SizedSample,
    {
        match config.channels {
            1 => Self::build_input_stream::<T, 1>(device, config, producer, capture_config),
            _ => Self::build_input_stream::<T, 2>(device, config, producer, capture_config),
        }
    }

    fn build_input_stream<T, const CHANNELS: usize>(
        device: &Device,
        config: &StreamConfig,
        mut producer: Producer<Vec<i16>>,
        capture_config: &CaptureConfig,
    ) -> Result<Stream>
    where
        T: cpal::Sample + cpal::SizedSample,
    {
        let quantum_len = capture_config.quantum_size * CHANNELS;
        let quantize = Quantize::<f32, i16, CHANNELS>::new();
        let mut pending: Vec<f32> = Vec::with_capacity(quantum_len);

        let stream = device
            .build_input_stream(
                config,
                move |data: &[T], _: &cpal::InputCallbackInfo| {
                    // An empty callback is a no-op, the loop simply never runs.
                    for sample in data {
                        pending.push(Self::to_f32_sample(sample));

                        if pending.len() >= quantum_len {
                            let quantum = pending.drain(..quantum_len).collect::<Vec<_>>();

                            // quantum_len is a multiple of CHANNELS, so this
                            // construction cannot fail.
                            let Ok(buffer) = AudioBuffer::<f32, CHANNELS>::new(quantum) else {
                                continue;
                            };

                            if let Some(pcm) = quantize.process(buffer) {
                                // Fire and forget: ownership of the PCM buffer
                                // moves into the ring, or the quantum is dropped.
                                if producer.push(pcm.into_inner()).is_err() {
                                    warn!("Uplink queue full, dropping quantum");
                                }
                            }
                        }
                    }
                },
                move |err| {
                    error!("Audio capture error: {}", err);
                },
                None,
            )
            .context("Failed to build input stream")?;

        Ok(stream)
    }

    fn to_f32_sample<T>(sample: &T) -> f32
    where
        T: cpal::Sample,
    {
        sample.to_float_sample().to_sample()
    }
}
