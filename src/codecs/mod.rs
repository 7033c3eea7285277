use serde::{Deserialize, Serialize};

use crate::core::error::{TranslateError, TranslateResult};

pub mod opus;
pub mod registry;

/// Opus accounts durations at 48 kHz regardless of the external PCM rate.
pub const CODEC_RATE: u32 = 48_000;
/// One codec frame is always 20 ms of audio.
pub const FRAME_MS: u32 = 20;
/// Pending-PCM capacity per encoder leg, in external-rate samples.
pub const BUFFER_SAMPLES: usize = 8_000;
/// Conventional upper bound for a single compressed opus packet.
pub const MAX_PACKET_BYTES: usize = 4_000;

/// The five external PCM rates opus accepts. Every variant divides 48 kHz
/// evenly, so the multiplier is an integer by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SamplingRate {
    Hz8000,
    Hz12000,
    Hz16000,
    Hz24000,
    Hz48000,
}

impl SamplingRate {
    pub const ALL: [SamplingRate; 5] = [
        SamplingRate::Hz8000,
        SamplingRate::Hz12000,
        SamplingRate::Hz16000,
        SamplingRate::Hz24000,
        SamplingRate::Hz48000,
    ];

    pub fn from_hz(rate: u32) -> TranslateResult<Self> {
        match rate {
            8_000 => Ok(SamplingRate::Hz8000),
            12_000 => Ok(SamplingRate::Hz12000),
            16_000 => Ok(SamplingRate::Hz16000),
            24_000 => Ok(SamplingRate::Hz24000),
            48_000 => Ok(SamplingRate::Hz48000),
            rate => Err(TranslateError::InvalidSamplingRate { rate }),
        }
    }

    pub fn hz(self) -> u32 {
        match self {
            SamplingRate::Hz8000 => 8_000,
            SamplingRate::Hz12000 => 12_000,
            SamplingRate::Hz16000 => 16_000,
            SamplingRate::Hz24000 => 24_000,
            SamplingRate::Hz48000 => 48_000,
        }
    }

    /// Ratio between the codec's 48 kHz accounting rate and this rate.
    /// Re-expresses duration, not sample values.
    pub fn multiplier(self) -> usize {
        (CODEC_RATE / self.hz()) as usize
    }

    /// External-rate samples per 20 ms codec frame.
    pub fn frame_size(self) -> usize {
        (self.hz() / 50) as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encode,
    Decode,
}

/// One compressed opus packet produced by a drain. `samples` is the frame's
/// duration expressed at the 48 kHz compressed-domain rate.
#[derive(Debug, Clone)]
pub struct EncodedFrame {
    pub payload: Vec<u8>,
    pub samples: usize,
}

impl EncodedFrame {
    pub fn byte_len(&self) -> usize {
        self.payload.len()
    }
}

/// One decoded PCM frame at the session's external rate.
#[derive(Debug, Clone, PartialEq)]
pub struct PcmFrame {
    pub samples: Vec<i16>,
    pub rate_hz: u32,
}

impl PcmFrame {
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn byte_len(&self) -> usize {
        self.samples.len() * 2
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranslatorConfig {
    /// Inband forward error correction. Off unless the host negotiates it.
    #[serde(default)]
    pub fec: bool,
    /// Target bitrate in bits per second; codec default when unset.
    #[serde(default)]
    pub bitrate: Option<i32>,
    /// Encoder complexity 0-10; codec default when unset.
    #[serde(default)]
    pub complexity: Option<u8>,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            fec: false,
            bitrate: None,
            complexity: None,
        }
    }
}

/// Seam over the encode primitive so the drain loop can be exercised with a
/// scripted codec (see `testing::mocks`).
pub trait FrameCodec: Send {
    /// Encodes exactly one frame of PCM into `out`, returning the number of
    /// compressed bytes written.
    fn encode_frame(&mut self, pcm: &[i16], out: &mut [u8]) -> TranslateResult<usize>;
}
