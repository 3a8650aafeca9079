use anyhow::Result;
use tracing::{error, info};

use pcm_uplink::{CaptureConfig, CaptureHandler, PcmWriter, uplink};

fn main() {
    // Logging goes to stderr; stdout carries the PCM byte stream.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        error!("Application error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    info!("Starting PCM uplink...");

    let config = CaptureConfig::default();

    // Capture -> uplink (SPSC, one slot per quantum of i16 PCM)
    let (producer, consumer) = rtrb::RingBuffer::<Vec<i16>>::new(config.queue_capacity);

    // Uplink thread: raw little-endian PCM on stdout, pipeable into a
    // transport or player.
    let uplink_thread = std::thread::spawn(move || {
        let sink = PcmWriter::new(std::io::stdout());
        uplink::run(consumer, &sink);
    });

    let _capture = CaptureHandler::start(&config, producer)?;

    info!("Streaming PCM to stdout");

    // The stream lives on the audio thread; the uplink only exits once the
    // capture side hangs up, so this blocks for the life of the session.
    uplink_thread
        .join()
        .map_err(|_| anyhow::anyhow!("Uplink thread panicked"))?;

    Ok(())
}
