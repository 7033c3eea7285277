use crate::codecs::opus::OpusFrameEncoder;
use crate::codecs::{
    EncodedFrame, FrameCodec, SamplingRate, TranslatorConfig, MAX_PACKET_BYTES,
};
use crate::core::error::{TranslateError, TranslateResult};
use crate::core::logging::{ComponentLogger, LogContext};
use crate::core::usage::{self, UsageTracker};
use crate::translate::accumulator::SampleAccumulator;

/// One encode leg: signed linear PCM in, opus packets out.
///
/// Input chunks of any size are fed into the accumulator; `drain` encodes
/// as many whole 20 ms frames as are buffered and carries the rest over.
pub struct EncoderSession {
    codec: Box<dyn FrameCodec>,
    accumulator: SampleAccumulator,
    rate: SamplingRate,
    id: u64,
    usage: &'static UsageTracker,
}

impl EncoderSession {
    pub fn new(rate: SamplingRate, config: &TranslatorConfig) -> TranslateResult<Self> {
        Self::with_usage(rate, config, usage::global())
    }

    pub fn with_usage(
        rate: SamplingRate,
        config: &TranslatorConfig,
        usage: &'static UsageTracker,
    ) -> TranslateResult<Self> {
        let codec = OpusFrameEncoder::new(rate, config)?;
        Ok(Self::from_codec(Box::new(codec), rate, usage))
    }

    /// Builds a session around an already-constructed codec. This is the
    /// injection point the scripted test codec goes through.
    pub fn from_codec(
        codec: Box<dyn FrameCodec>,
        rate: SamplingRate,
        usage: &'static UsageTracker,
    ) -> Self {
        let id = usage.register_encoder();
        let session = Self {
            codec,
            accumulator: SampleAccumulator::new(rate.frame_size()),
            rate,
            id,
            usage,
        };
        session.debug(&format!("created encoder #{} ({} -> opus)", id, rate.hz()));
        session
    }

    /// Appends PCM samples. Produces no output by itself.
    pub fn feed(&mut self, pcm: &[i16]) -> TranslateResult<()> {
        self.accumulator.feed(pcm)
    }

    /// Appends raw little-endian PCM bytes, rejecting torn sample payloads
    /// before anything is copied.
    pub fn feed_bytes(&mut self, data: &[u8]) -> TranslateResult<()> {
        if data.len() % 2 != 0 {
            return Err(TranslateError::InvalidPcmLength { len: data.len() });
        }
        let incoming = data.len() / 2;
        if incoming > self.accumulator.remaining() {
            return Err(TranslateError::BufferOverflow {
                pending: self.accumulator.pending(),
                incoming,
                capacity: self.accumulator.pending() + self.accumulator.remaining(),
            });
        }
        let samples: Vec<i16> = data
            .chunks_exact(2)
            .map(|chunk| i16::from_le_bytes([chunk[0], chunk[1]]))
            .collect();
        self.accumulator.feed(&samples)
    }

    /// Encodes every whole buffered frame, in order. A codec failure on one
    /// frame is logged and that frame's output dropped; draining continues
    /// with the next frame. Leftover samples stay buffered for the next feed.
    pub fn drain(&mut self) -> Vec<EncodedFrame> {
        let ctx = self.log_context();
        let frame_size = self.accumulator.frame_size();
        let out_samples = frame_size * self.rate.multiplier();

        let mut frames = Vec::new();
        let mut scratch = [0u8; MAX_PACKET_BYTES];

        let Self {
            codec, accumulator, ..
        } = self;

        accumulator.drain_frames(|pcm| match codec.encode_frame(pcm, &mut scratch) {
            Ok(written) => {
                log::debug!(
                    "{}",
                    ctx.format(
                        "DEBUG",
                        &format!(">> got {} samples, {} bytes", out_samples, written)
                    )
                );
                frames.push(EncodedFrame {
                    payload: scratch[..written].to_vec(),
                    samples: out_samples,
                });
            }
            Err(err) => {
                log::error!("{}", ctx.format("ERROR", &err.to_string()));
            }
        });

        frames
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn rate(&self) -> SamplingRate {
        self.rate
    }

    pub fn frame_size(&self) -> usize {
        self.accumulator.frame_size()
    }

    pub fn multiplier(&self) -> usize {
        self.rate.multiplier()
    }

    /// Samples currently carried over, waiting for a whole frame.
    pub fn pending(&self) -> usize {
        self.accumulator.pending()
    }
}

impl ComponentLogger for EncoderSession {
    fn log_context(&self) -> LogContext {
        LogContext::new("Encoder", &self.id.to_string()).with_rate(self.rate.hz())
    }
}

impl Drop for EncoderSession {
    fn drop(&mut self) {
        self.usage.release_encoder();
        self.debug(&format!(
            "destroyed encoder #{} ({} -> opus)",
            self.id,
            self.rate.hz()
        ));
    }
}
