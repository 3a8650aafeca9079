//! Consumer side of the capture hand-off.
//!
//! Runs on its own thread, draining the SPSC ring the capture callback
//! feeds and delivering each quantum to a [`Sink`]. Delivery is one-way:
//! a failed write is logged and the quantum is gone, nothing flows back
//! to the producer.

use std::io::Write;
use std::sync::Mutex;
use std::time::Duration;

use rtrb::Consumer;
use tracing::{info, warn};

use crate::pipeline::Sink;

/// Serialize PCM samples as little-endian bytes for transmission.
///
/// The output is exactly `2 * samples.len()` bytes, in sample order.
pub fn pcm_to_le_bytes(samples: &[i16]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(samples.len() * 2);
    for sample in samples {
        bytes.extend_from_slice(&sample.to_le_bytes());
    }
    bytes
}

/// Writes each quantum's little-endian bytes to an underlying writer.
pub struct PcmWriter<W: Write + Send> {
    writer: Mutex<W>,
}

impl<W: Write + Send> PcmWriter<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Consumes the sink and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap()
    }
}

impl<W: Write + Send> Sink for PcmWriter<W> {
    type Input = Vec<i16>;

    fn push(&self, input: Vec<i16>) {
        let bytes = pcm_to_le_bytes(&input);
        let mut writer = self.writer.lock().unwrap();
        let result = writer.write_all(&bytes).and_then(|_| writer.flush());
        if let Err(e) = result {
            warn!("Failed to write quantum: {}", e);
        }
    }
}

/// Drain the ring into the sink until the capture side hangs up.
pub fn run<S>(mut consumer: Consumer<Vec<i16>>, sink: &S)
where
    S: Sink<Input = Vec<i16>>,
{
    loop {
        match consumer.pop() {
            Ok(quantum) => sink.push(quantum),
            Err(_) => {
                if consumer.is_abandoned() {
                    info!("Capture side closed, uplink stopping");
                    break;
                }
                std::thread::sleep(Duration::from_millis(1));
            }
        }
    }
}
