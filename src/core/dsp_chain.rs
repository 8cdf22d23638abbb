use super::block_processor::BlockProcessor;
use alloc::boxed::Box;
use alloc::vec;
use alloc::vec::Vec;

/// A chain of DSP processors.
///
/// Processes audio sequentially through a list of processors. Stages
/// alternate between the caller's output buffer and an internal scratch
/// buffer, with the parity arranged so the final stage always writes the
/// caller's output.
pub struct DspChain {
    processors: Vec<Box<dyn BlockProcessor + Send>>,
    scratch: Vec<f64>,
    sample_rate: f64,
}

impl DspChain {
    /// Creates a new DspChain starting with the given processor.
    pub fn new(mut first: impl BlockProcessor + Send + 'static, sample_rate: f64) -> Self {
        first.set_sample_rate(sample_rate);
        DspChain {
            processors: vec![Box::new(first)],
            scratch: Vec::new(),
            sample_rate,
        }
    }

    /// Appends a processor to the chain.
    pub fn and(mut self, mut processor: impl BlockProcessor + Send + 'static) -> Self {
        processor.set_sample_rate(self.sample_rate);
        self.processors.push(Box::new(processor));
        self
    }

    /// Preallocates the scratch buffer so that `process` stays allocation
    /// free for blocks of up to `max_frames` samples.
    pub fn prepare(&mut self, max_frames: usize) {
        if self.scratch.len() < max_frames {
            self.scratch.resize(max_frames, 0.0);
        }
    }
}

impl BlockProcessor for DspChain {
    fn process(&mut self, input: &[f64], output: &mut [f64]) {
        let frames = input.len().min(output.len());

        let DspChain {
            processors, scratch, ..
        } = self;
        if scratch.len() < frames {
            scratch.resize(frames, 0.0);
        }

        {
            let out = &mut output[..frames];
            let scratch = &mut scratch[..frames];

            // With an odd number of stages the first one writes `out`
            // directly; with an even number it writes `scratch`. Either way
            // the last stage lands in `out`.
            let mut into_output = processors.len() % 2 == 1;
            let mut first = true;
            for p in processors.iter_mut() {
                match (first, into_output) {
                    (true, true) => p.process(input, out),
                    (true, false) => p.process(input, scratch),
                    (false, true) => p.process(scratch, out),
                    (false, false) => p.process(out, scratch),
                }
                first = false;
                into_output = !into_output;
            }
        }

        output[frames..].fill(0.0);
    }

    fn set_sample_rate(&mut self, sample_rate: f64) {
        self.sample_rate = sample_rate;
        for p in &mut self.processors {
            p.set_sample_rate(sample_rate);
        }
    }

    fn latency_samples(&self) -> u32 {
        self.processors.iter().map(|p| p.latency_samples()).sum()
    }
}
