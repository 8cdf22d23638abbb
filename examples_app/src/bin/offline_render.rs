use anyhow::Result;
use hound::{SampleFormat, WavSpec, WavWriter};
use offsetdsp_core::effects::utility::offset::Offset;
use offsetdsp_core::BlockProcessor;

const SAMPLE_RATE: u32 = 44100;
const BLOCK_SIZE: usize = 512;
const TONE_HZ: f64 = 220.0;
const SECONDS: usize = 4;

fn main() -> Result<()> {
    let spec = WavSpec {
        channels: 1,
        sample_rate: SAMPLE_RATE,
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };
    let mut writer = WavWriter::create("offset_render.wav", spec)?;

    let mut offset = Offset::default();
    offset.set_sample_rate(SAMPLE_RATE as f64);

    let mut input = [0.0f64; BLOCK_SIZE];
    let mut output = [0.0f64; BLOCK_SIZE];
    let mut phase = 0.0f64;
    let phase_step = TONE_HZ / SAMPLE_RATE as f64;

    let total_blocks = SAMPLE_RATE as usize * SECONDS / BLOCK_SIZE;
    for block in 0..total_blocks {
        // Step the offset once per second, the way a host delivers
        // automation events between blocks.
        let second = block * BLOCK_SIZE / SAMPLE_RATE as usize;
        offset.set_offset(second as f64 * 0.1);

        for sample in input.iter_mut() {
            *sample = (std::f64::consts::TAU * phase).sin() * 0.5;
            phase = (phase + phase_step) % 1.0;
        }

        offset.process(&input, &mut output);

        for &sample in output.iter() {
            writer.write_sample(sample as f32)?;
        }
    }

    writer.finalize()?;
    println!("Wrote {} blocks to offset_render.wav", total_blocks);

    Ok(())
}
