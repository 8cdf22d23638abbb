pub mod block_processor;
pub mod dsp_chain;
pub mod parameter;
