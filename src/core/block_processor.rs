use alloc::boxed::Box;

/// The core trait for all streaming audio processors.
///
/// Implementors consume an input block and produce an output block. The
/// host decides the block length and the sample rate; processors must
/// accept whatever they are handed.
///
/// A real-time host never tolerates a panic inside its audio callback, so
/// mismatched buffer lengths are recovered locally: only the first
/// `min(input.len(), output.len())` samples are processed and the rest of
/// the output is zeroed. Empty blocks produce no writes.
pub trait BlockProcessor {
    /// Processes one block of audio samples.
    ///
    /// # Arguments
    /// * `input` - The input samples for this block.
    /// * `output` - The buffer the processed samples are written to.
    fn process(&mut self, input: &[f64], output: &mut [f64]);

    /// Sets the sample rate.
    ///
    /// Called before processing starts or when the host reconfigures the
    /// stream. Rate-independent processors can ignore it.
    fn set_sample_rate(&mut self, _sample_rate: f64) {}

    /// Returns the latency of the processor in samples.
    ///
    /// Used for delay compensation.
    fn latency_samples(&self) -> u32 {
        0
    }
}

impl<T: BlockProcessor + ?Sized> BlockProcessor for Box<T> {
    fn process(&mut self, input: &[f64], output: &mut [f64]) {
        (**self).process(input, output);
    }

    fn set_sample_rate(&mut self, sample_rate: f64) {
        (**self).set_sample_rate(sample_rate);
    }

    fn latency_samples(&self) -> u32 {
        (**self).latency_samples()
    }
}
