use crate::codecs::opus::OpusFrameDecoder;
use crate::codecs::{PcmFrame, SamplingRate, TranslatorConfig};
use crate::core::error::TranslateResult;
use crate::core::logging::{ComponentLogger, LogContext};
use crate::core::usage::{self, UsageTracker};

/// Longest packet opus can produce is 120 ms of audio.
const MAX_DECODE_MS: usize = 120;

/// One decode leg: opus packets in, signed linear PCM out. Stateless per
/// call beyond the codec handle itself.
pub struct DecoderSession {
    codec: OpusFrameDecoder,
    rate: SamplingRate,
    id: u64,
    usage: &'static UsageTracker,
    scratch: Vec<i16>,
}

impl DecoderSession {
    pub fn new(rate: SamplingRate, config: &TranslatorConfig) -> TranslateResult<Self> {
        Self::with_usage(rate, config, usage::global())
    }

    pub fn with_usage(
        rate: SamplingRate,
        config: &TranslatorConfig,
        usage: &'static UsageTracker,
    ) -> TranslateResult<Self> {
        let codec = OpusFrameDecoder::new(rate, config)?;
        let id = usage.register_decoder();
        let session = Self {
            codec,
            rate,
            id,
            usage,
            scratch: vec![0i16; rate.hz() as usize * MAX_DECODE_MS / 1000],
        };
        session.debug(&format!("created decoder #{} (opus -> {})", id, rate.hz()));
        Ok(session)
    }

    /// Decodes one packet into one PCM frame. The sample count is whatever
    /// the codec reports for the packet, not a fixed size. A decode failure
    /// yields no output for this call and leaves the session usable.
    pub fn decode(&mut self, packet: &[u8]) -> TranslateResult<PcmFrame> {
        let decoded = match self.codec.decode(packet, &mut self.scratch) {
            Ok(decoded) => decoded,
            Err(err) => {
                self.error(&err.to_string());
                return Err(err);
            }
        };

        self.debug(&format!(
            ">> got {} samples, {} bytes",
            decoded,
            decoded * 2
        ));

        Ok(PcmFrame {
            samples: self.scratch[..decoded].to_vec(),
            rate_hz: self.rate.hz(),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn rate(&self) -> SamplingRate {
        self.rate
    }

    pub fn multiplier(&self) -> usize {
        self.rate.multiplier()
    }
}

impl ComponentLogger for DecoderSession {
    fn log_context(&self) -> LogContext {
        LogContext::new("Decoder", &self.id.to_string()).with_rate(self.rate.hz())
    }
}

impl Drop for DecoderSession {
    fn drop(&mut self) {
        self.usage.release_decoder();
        self.debug(&format!(
            "destroyed decoder #{} (opus -> {})",
            self.id,
            self.rate.hz()
        ));
    }
}
