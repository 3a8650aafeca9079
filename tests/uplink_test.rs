//! End-to-end tests for the capture hand-off, without audio hardware.
//!
//! The real-time side is a plain synchronous transform, so the tests drive
//! it directly: quantize float quanta, push the PCM through the SPSC ring,
//! and check what the uplink writes.

use pcm_uplink::audio::{AudioBuffer, Quantize};
use pcm_uplink::pipeline::Node;
use pcm_uplink::uplink::{self, PcmWriter, pcm_to_le_bytes};

/// One quantum of a 440Hz-ish sine, mono, peaking just below full scale.
fn sine_quantum(len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| (i as f32 * 0.18).sin() * 0.9)
        .collect()
}

#[test]
fn quantized_stream_reaches_the_sink_in_order() {
    let quantize = Quantize::<f32, i16, 1>::new();
    let (mut producer, consumer) = rtrb::RingBuffer::<Vec<i16>>::new(16);

    let mut expected: Vec<i16> = Vec::new();
    for chunk in 0..4 {
        let quantum = sine_quantum(480 + chunk); // varying quantum lengths
        let buffer = AudioBuffer::<f32, 1>::new(quantum.clone()).unwrap();
        let pcm = quantize.process(buffer).unwrap().into_inner();

        assert_eq!(pcm.len(), quantum.len());
        expected.extend_from_slice(&pcm);
        producer.push(pcm).unwrap();
    }
    drop(producer);

    let sink = PcmWriter::new(Vec::new());
    uplink::run(consumer, &sink);

    let bytes = sink.into_inner();
    assert_eq!(bytes.len(), expected.len() * 2);
    assert_eq!(bytes, pcm_to_le_bytes(&expected));
}

#[test]
fn dropped_quantum_does_not_affect_later_ones() {
    let (mut producer, mut consumer) = rtrb::RingBuffer::<Vec<i16>>::new(2);

    producer.push(vec![1]).unwrap();
    producer.push(vec![2]).unwrap();
    // Ring full: this quantum is dropped, exactly as the capture callback
    // drops it, and the stream continues.
    assert!(producer.push(vec![3]).is_err());

    assert_eq!(consumer.pop().unwrap(), vec![1]);
    producer.push(vec![4]).unwrap();
    drop(producer);

    let sink = PcmWriter::new(Vec::new());
    uplink::run(consumer, &sink);
    assert_eq!(sink.into_inner(), pcm_to_le_bytes(&[2, 4]));
}

#[test]
fn pcm_bytes_round_trip_through_wav() {
    let quantize = Quantize::<f32, i16, 1>::new();
    let buffer = AudioBuffer::<f32, 1>::new(sine_quantum(1600)).unwrap();
    let pcm = quantize.process(buffer).unwrap().into_inner();

    let path = std::env::temp_dir().join("pcm_uplink_roundtrip.wav");
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for &sample in &pcm {
        writer.write_sample(sample).unwrap();
    }
    writer.finalize().unwrap();

    let mut reader = hound::WavReader::open(&path).unwrap();
    let read_back: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
    assert_eq!(read_back, pcm);

    std::fs::remove_file(&path).ok();
}
