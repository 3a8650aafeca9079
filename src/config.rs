//! Capture session configuration.

/// Tunables for a capture session.
#[derive(Clone, Debug)]
pub struct CaptureConfig {
    /// Frames (samples per channel) in one quantum handed to the uplink.
    pub quantum_size: usize,
    /// Capacity of the capture -> uplink ring, in quanta.
    pub queue_capacity: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            // 10ms at 48kHz
            quantum_size: 480,
            queue_capacity: 100,
        }
    }
}
