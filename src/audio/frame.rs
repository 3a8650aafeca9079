use anyhow::Result;

/// A type-safe audio buffer with compile-time channel count.
///
/// Holds the interleaved samples of one processing quantum. The quantum
/// length and sample rate are whatever the capture side provides; only the
/// channel layout is part of the type.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer<Sample, const CHANNELS: usize> {
    data: Vec<Sample>,
}

impl<Sample, const CHANNELS: usize> AudioBuffer<Sample, CHANNELS> {
    /// Create a new audio buffer from raw interleaved samples.
    ///
    /// Returns an error if the data length is not a multiple of the channel count.
    pub fn new(data: Vec<Sample>) -> Result<Self> {
        if !data.is_empty() && data.len() % CHANNELS != 0 {
            anyhow::bail!(
                "Data length {} must be a multiple of channels {}",
                data.len(),
                CHANNELS
            );
        }
        Ok(Self { data })
    }

    /// Returns an iterator over the samples of a specific channel.
    pub fn iter_channel(&self, channel_idx: usize) -> impl Iterator<Item = &Sample> {
        assert!(
            channel_idx < CHANNELS,
            "Channel index {} out of bounds (max {})",
            channel_idx,
            CHANNELS - 1
        );
        self.data.iter().skip(channel_idx).step_by(CHANNELS)
    }

    /// Returns the number of samples per channel.
    pub fn samples_per_channel(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// Returns the total number of samples across all channels.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of channels.
    pub const fn channels(&self) -> usize {
        CHANNELS
    }

    /// Access the underlying raw sample data.
    pub fn data(&self) -> &[Sample] {
        &self.data
    }

    /// Access the underlying raw sample data mutably.
    pub fn data_mut(&mut self) -> &mut [Sample] {
        &mut self.data
    }

    /// Consumes the buffer and returns the raw vector.
    pub fn into_inner(self) -> Vec<Sample> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_channel_iter() {
        let samples = vec![1, 10, 2, 20, 3, 30]; // L1, R1, L2, R2, L3, R3
        let buffer = AudioBuffer::<i16, 2>::new(samples).unwrap();

        let left: Vec<_> = buffer.iter_channel(0).cloned().collect();
        let right: Vec<_> = buffer.iter_channel(1).cloned().collect();

        assert_eq!(left, vec![1, 2, 3]);
        assert_eq!(right, vec![10, 20, 30]);
        assert_eq!(buffer.samples_per_channel(), 3);
    }

    #[test]
    fn test_buffer_rejects_ragged_data() {
        assert!(AudioBuffer::<i16, 2>::new(vec![0; 961]).is_err());
        assert!(AudioBuffer::<i16, 2>::new(vec![0; 960]).is_ok());
    }

    #[test]
    fn test_empty_buffer() {
        let buffer = AudioBuffer::<f32, 2>::new(vec![]).unwrap();
        assert!(buffer.is_empty());
        assert_eq!(buffer.samples_per_channel(), 0);
    }
}
