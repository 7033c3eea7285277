// src/lib.rs
pub mod codecs;
pub mod core;
pub mod testing;
pub mod translate;

// Re-export die wichtigsten Typen
pub use codecs::registry::{TranslatorDescriptor, TranslatorKey, TranslatorRegistry};
pub use codecs::{
    Direction, EncodedFrame, PcmFrame, SamplingRate, TranslatorConfig, BUFFER_SAMPLES,
    CODEC_RATE, FRAME_MS,
};
pub use crate::core::error::{TranslateError, TranslateResult};
pub use crate::core::usage::{UsageSnapshot, UsageTracker};
pub use crate::core::{ComponentLogger, LogContext};
pub use translate::{DecoderSession, EncoderSession, SampleAccumulator};
