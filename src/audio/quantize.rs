//! Requantization of float audio to integer PCM.

use std::marker::PhantomData;

use crate::audio::frame::AudioBuffer;
use crate::audio::sample::AudioSample;
use crate::pipeline::Node;

/// Converts each quantum of normalized float samples into integer PCM.
///
/// Per sample, in order: clamp to [-1.0, 1.0], scale by the output type's
/// positive maximum, truncate toward zero. For `Out = i16` that means ±1.0
/// map to ±32767 and every output lies in [-32767, 32767]; out-of-range
/// inputs saturate at the boundaries rather than wrapping.
///
/// The node is stateless and pure: each call consumes one input buffer,
/// produces one output buffer of the same length, and retains nothing
/// across invocations. An empty quantum yields `None` (a no-op invocation,
/// not an error).
///
/// # Example
///
/// ```ignore
/// let quantize = Quantize::<f32, i16, 1>::new();
/// let pcm = quantize.process(captured)?;
/// ```
pub struct Quantize<In, Out, const CHANNELS: usize> {
    _marker: PhantomData<(In, Out)>,
}

impl<In, Out, const CHANNELS: usize> Quantize<In, Out, CHANNELS> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<In, Out, const CHANNELS: usize> Default for Quantize<In, Out, CHANNELS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<In, Out, const CHANNELS: usize> Node for Quantize<In, Out, CHANNELS>
where
    In: AudioSample,
    Out: AudioSample,
{
    type Input = AudioBuffer<In, CHANNELS>;
    type Output = AudioBuffer<Out, CHANNELS>;

    fn process(&self, input: Self::Input) -> Option<Self::Output> {
        if input.is_empty() {
            return None;
        }

        let converted: Vec<Out> = input
            .into_inner()
            .into_iter()
            .map(|sample| Out::from_f64_normalized(sample.to_f64_normalized()))
            .collect();

        // Length is unchanged, so the channel-alignment invariant still holds.
        AudioBuffer::new(converted).ok()
    }
}
