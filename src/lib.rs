//! Real-time microphone capture to a 16-bit PCM uplink.
//!
//! The capture callback converts each floating-point quantum to 16-bit
//! signed PCM and hands the buffer off, fire-and-forget, through a
//! lock-free SPSC ring to an uplink thread that writes the raw
//! little-endian bytes to a byte sink.

pub mod audio;
pub mod config;
pub mod pipeline;
pub mod uplink;

pub use audio::capture::CaptureHandler;
pub use config::CaptureConfig;
pub use uplink::PcmWriter;
