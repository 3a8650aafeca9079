//! Audio data types and processing.
//!
//! # Data Types
//! - [`AudioSample`] - Trait for audio sample types (f32, i16)
//! - [`frame::AudioBuffer`] - One quantum of interleaved samples
//!
//! # Processing
//! - [`quantize::Quantize`] - Float to 16-bit PCM conversion node
//! - [`capture`] - cpal input adapter feeding the uplink ring

pub mod capture;
pub mod frame;
pub mod quantize;
pub mod sample;

pub use frame::AudioBuffer;
pub use quantize::Quantize;
pub use sample::AudioSample;
