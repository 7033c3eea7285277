// src/translate/mod.rs
pub mod accumulator;
pub mod decoder;
pub mod encoder;

pub use accumulator::SampleAccumulator;
pub use decoder::DecoderSession;
pub use encoder::EncoderSession;
