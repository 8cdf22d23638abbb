use crate::core::parameter::Parameter;
use crate::BlockProcessor;
use wide::f64x4;

/// Adds a constant offset to every sample of the signal.
///
/// The offset is a runtime parameter: a control thread updates it through
/// [`Offset::set_offset`] or a shared [`Parameter`] handle, and the audio
/// thread picks the new value up on the next block. The value is read once
/// per block, so an update never lands mid-buffer.
pub struct Offset {
    offset: Parameter,
}

impl Offset {
    /// Creates a new Offset processor with an initial value.
    pub fn new(offset: f64) -> Self {
        Offset {
            offset: Parameter::new(offset),
        }
    }

    /// Creates a new Offset processor driven by an existing parameter.
    pub fn with_parameter(offset: Parameter) -> Self {
        Offset { offset }
    }

    /// Replaces the current offset value.
    ///
    /// The value is stored as-is; visible to the next block that starts
    /// after this call returns.
    pub fn set_offset(&self, value: f64) {
        self.offset.set(value);
    }

    /// Returns the current offset value.
    pub fn offset(&self) -> f64 {
        self.offset.get()
    }

    /// Returns a shared handle to the offset parameter, for updates from a
    /// control thread while the processor lives on the audio thread.
    pub fn parameter(&self) -> Parameter {
        self.offset.clone()
    }
}

impl Default for Offset {
    /// An Offset that leaves the signal unchanged until the first update.
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl BlockProcessor for Offset {
    fn process(&mut self, input: &[f64], output: &mut [f64]) {
        let frames = input.len().min(output.len());
        let value = self.offset.get();
        let offset_vec = f64x4::splat(value);

        let (in_chunks, in_rem) = input[..frames].as_chunks::<4>();
        let (out_chunks, out_rem) = output[..frames].as_chunks_mut::<4>();

        for (out_c, in_c) in out_chunks.iter_mut().zip(in_chunks) {
            let vec = f64x4::from(*in_c);
            let result = vec + offset_vec;
            *out_c = result.to_array();
        }

        for (out_s, in_s) in out_rem.iter_mut().zip(in_rem) {
            *out_s = *in_s + value;
        }

        output[frames..].fill(0.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_applied_to_every_sample() {
        let mut offset = Offset::new(2.0);
        let input = [0.0, 1.0, -1.0, 5.5];
        let mut output = [0.0; 4];
        offset.process(&input, &mut output);
        assert_eq!(output, [2.0, 3.0, 1.0, 7.5]);
    }

    #[test]
    fn test_default_is_transparent() {
        let mut offset = Offset::default();
        let input = [3.0];
        let mut output = [0.0];
        offset.process(&input, &mut output);
        assert_eq!(output, [3.0]);
    }

    #[test]
    fn test_last_update_wins() {
        let mut offset = Offset::default();
        offset.set_offset(-1.5);
        offset.set_offset(4.0);
        let input = [10.0];
        let mut output = [0.0];
        offset.process(&input, &mut output);
        assert_eq!(output, [14.0]);
    }

    #[test]
    fn test_repeated_updates_equal_single_update() {
        let mut repeated = Offset::default();
        repeated.set_offset(0.75);
        repeated.set_offset(0.75);
        repeated.set_offset(0.75);
        let mut once = Offset::default();
        once.set_offset(0.75);

        let input = [1.0, 2.0, 3.0];
        let mut out_repeated = [0.0; 3];
        let mut out_once = [0.0; 3];
        repeated.process(&input, &mut out_repeated);
        once.process(&input, &mut out_once);
        assert_eq!(out_repeated, out_once);
    }

    #[test]
    fn test_empty_block() {
        let mut offset = Offset::new(2.0);
        let input: [f64; 0] = [];
        let mut output: [f64; 0] = [];
        offset.process(&input, &mut output);
    }

    #[test]
    fn test_simd_chunks_and_remainder() {
        // 7 samples: one full 4-wide chunk plus a 3-sample remainder.
        let mut offset = Offset::new(-0.5);
        let input = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let mut output = [0.0; 7];
        offset.process(&input, &mut output);
        assert_eq!(output, [0.5, 1.5, 2.5, 3.5, 4.5, 5.5, 6.5]);
    }

    #[test]
    fn test_short_output_truncates_and_zero_fills() {
        let mut offset = Offset::new(1.0);
        let input = [1.0, 2.0];
        let mut output = [9.0; 5];
        offset.process(&input, &mut output);
        assert_eq!(output, [2.0, 3.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_short_input_truncates() {
        let mut offset = Offset::new(1.0);
        let input = [1.0, 2.0, 3.0, 4.0, 5.0];
        let mut output = [9.0; 3];
        offset.process(&input, &mut output);
        assert_eq!(output, [2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_blocks_equal_concatenation() {
        let input = [0.25, -0.5, 1.0, 2.0, -3.0, 0.0, 8.0, 1.5];

        let mut blockwise = Offset::new(0.125);
        let mut out_a = [0.0; 3];
        let mut out_b = [0.0; 5];
        blockwise.process(&input[..3], &mut out_a);
        blockwise.process(&input[3..], &mut out_b);

        let mut whole = Offset::new(0.125);
        let mut out_whole = [0.0; 8];
        whole.process(&input, &mut out_whole);

        assert_eq!(&out_whole[..3], &out_a);
        assert_eq!(&out_whole[3..], &out_b);
    }

    #[test]
    fn test_shared_parameter_handle() {
        let mut offset = Offset::default();
        let handle = offset.parameter();
        handle.set(2.0);

        let input = [1.0];
        let mut output = [0.0];
        offset.process(&input, &mut output);
        assert_eq!(output, [3.0]);
    }
}
