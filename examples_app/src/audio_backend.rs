use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait};
use offsetdsp_core::core::dsp_chain::DspChain;
use offsetdsp_core::BlockProcessor;

const TONE_HZ: f64 = 220.0;
const INITIAL_BLOCK: usize = 512;

/// Opens the default output device and feeds a generated mono test tone
/// through the given processor chain.
///
/// The closure receives the negotiated sample rate and returns the chain to
/// run. Dropping the returned stream tears everything down; no explicit
/// cleanup is required.
pub fn init_audio<F>(create_processor: F) -> Result<(cpal::Stream, f64)>
where
    F: FnOnce(f64) -> DspChain,
{
    let host = cpal::default_host();
    let device = host.default_output_device().expect("No output device available");
    let config = device.default_output_config()?;
    let sample_rate = config.sample_rate() as f64;

    println!("output stream sample rate: {}", sample_rate);

    let mut chain = create_processor(sample_rate);
    chain.prepare(INITIAL_BLOCK);

    let err_fn = |err| eprintln!("an error occurred on stream: {}", err);

    let stream = match config.sample_format() {
        cpal::SampleFormat::F32 => run_mono::<f32>(&device, &config.into(), chain, sample_rate, err_fn)?,
        cpal::SampleFormat::I16 => run_mono::<i16>(&device, &config.into(), chain, sample_rate, err_fn)?,
        cpal::SampleFormat::U16 => run_mono::<u16>(&device, &config.into(), chain, sample_rate, err_fn)?,
        _ => return Err(anyhow::anyhow!("Unsupported sample format")),
    };

    Ok((stream, sample_rate))
}

fn run_mono<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    mut chain: DspChain,
    sample_rate: f64,
    err_fn: impl Fn(cpal::StreamError) + Send + 'static,
) -> Result<cpal::Stream>
where
    T: cpal::Sample + cpal::SizedSample + cpal::FromSample<f64>,
{
    let channels = config.channels as usize;
    let mut input_buffer = vec![0.0; INITIAL_BLOCK];
    let mut output_buffer = vec![0.0; INITIAL_BLOCK];
    let mut phase = 0.0f64;
    let phase_step = TONE_HZ / sample_rate;

    let stream = device.build_output_stream(
        config,
        move |data: &mut [T], _: &cpal::OutputCallbackInfo| {
            let frames = data.len() / channels;
            if input_buffer.len() < frames {
                input_buffer.resize(frames, 0.0);
                output_buffer.resize(frames, 0.0);
            }

            let in_slice = &mut input_buffer[0..frames];
            let out_slice = &mut output_buffer[0..frames];

            for sample in in_slice.iter_mut() {
                *sample = (std::f64::consts::TAU * phase).sin() * 0.2;
                phase = (phase + phase_step) % 1.0;
            }

            chain.process(in_slice, out_slice);

            for (i, frame) in data.chunks_mut(channels).enumerate() {
                let sample = T::from_sample(out_slice[i]);
                for channel_sample in frame.iter_mut() {
                    *channel_sample = sample;
                }
            }
        },
        err_fn,
        None,
    )?;

    Ok(stream)
}
