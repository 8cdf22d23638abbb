use anyhow::Result;
use cpal::traits::StreamTrait;
use offsetdsp_core::core::dsp_chain::DspChain;
use offsetdsp_core::effects::utility::offset::Offset;
use offsetdsp_examples::audio_backend::init_audio;
use std::thread;
use std::time::Duration;

fn main() -> Result<()> {
    let offset = Offset::default();
    let control = offset.parameter();

    let create_chain = move |sample_rate: f64| DspChain::new(offset, sample_rate);

    let (stream, sample_rate) = init_audio(create_chain)?;

    println!("Playing Offset Demo (sine -> offset) at {}Hz...", sample_rate);
    println!("Sweeping the offset from the control thread while audio runs.");

    stream.play()?;

    // The audio thread reads the parameter once per block; each update here
    // lands on the next block boundary.
    for step in 0..=20 {
        let value = -0.5 + step as f64 * 0.05;
        control.set(value);
        println!("offset = {:.2}", value);
        thread::sleep(Duration::from_millis(250));
    }

    Ok(())
}
