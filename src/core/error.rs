use thiserror::Error;

pub type TranslateResult<T> = Result<T, TranslateError>;

#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("unsupported sampling rate {rate} Hz (expected 8000, 12000, 16000, 24000 or 48000)")]
    InvalidSamplingRate { rate: u32 },
    #[error("failed to create the opus {kind}: {detail}")]
    CodecInit { kind: &'static str, detail: String },
    #[error("error encoding the opus frame: {detail}")]
    EncodeFrame { detail: String },
    #[error("error decoding the opus frame: {detail}")]
    Decode { detail: String },
    #[error("pcm buffer overflow: {pending} pending + {incoming} incoming samples exceed capacity {capacity}")]
    BufferOverflow {
        pending: usize,
        incoming: usize,
        capacity: usize,
    },
    #[error("pcm payload of {len} bytes is not a whole number of 16-bit samples")]
    InvalidPcmLength { len: usize },
}

impl TranslateError {
    /// Construction errors are fatal for the leg being set up; everything
    /// else is absorbed per frame or per call.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            TranslateError::InvalidSamplingRate { .. } | TranslateError::CodecInit { .. }
        )
    }
}
