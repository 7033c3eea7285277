use audiopus::coder::{Decoder, Encoder};
use audiopus::{Application, Bandwidth, Bitrate, Channels, SampleRate};

use crate::codecs::{FrameCodec, SamplingRate, TranslatorConfig};
use crate::core::error::{TranslateError, TranslateResult};

fn opus_rate(rate: SamplingRate) -> SampleRate {
    match rate {
        SamplingRate::Hz8000 => SampleRate::Hz8000,
        SamplingRate::Hz12000 => SampleRate::Hz12000,
        SamplingRate::Hz16000 => SampleRate::Hz16000,
        SamplingRate::Hz24000 => SampleRate::Hz24000,
        SamplingRate::Hz48000 => SampleRate::Hz48000,
    }
}

/// Caps the encoder's bandpass at what the external rate can represent,
/// so no bits are spent on bands the output cannot carry.
fn bandwidth_ceiling(rate: SamplingRate) -> Bandwidth {
    match rate {
        SamplingRate::Hz8000 => Bandwidth::Narrowband,
        SamplingRate::Hz12000 => Bandwidth::Mediumband,
        SamplingRate::Hz16000 => Bandwidth::Wideband,
        SamplingRate::Hz24000 => Bandwidth::Superwideband,
        SamplingRate::Hz48000 => Bandwidth::Fullband,
    }
}

fn init_err(kind: &'static str) -> impl Fn(audiopus::Error) -> TranslateError {
    move |e| TranslateError::CodecInit {
        kind,
        detail: e.to_string(),
    }
}

/// Mono voice-optimized opus encoder for one translator leg.
pub struct OpusFrameEncoder {
    inner: Encoder,
}

impl OpusFrameEncoder {
    pub fn new(rate: SamplingRate, config: &TranslatorConfig) -> TranslateResult<Self> {
        let mut inner = Encoder::new(opus_rate(rate), Channels::Mono, Application::Voip)
            .map_err(init_err("encoder"))?;

        inner
            .set_max_bandwidth(bandwidth_ceiling(rate))
            .map_err(init_err("encoder"))?;
        inner
            .set_inband_fec(config.fec)
            .map_err(init_err("encoder"))?;

        if let Some(bitrate) = config.bitrate {
            inner
                .set_bitrate(Bitrate::BitsPerSecond(bitrate))
                .map_err(init_err("encoder"))?;
        }
        if let Some(complexity) = config.complexity {
            inner
                .set_complexity(complexity)
                .map_err(init_err("encoder"))?;
        }

        Ok(Self { inner })
    }
}

impl FrameCodec for OpusFrameEncoder {
    fn encode_frame(&mut self, pcm: &[i16], out: &mut [u8]) -> TranslateResult<usize> {
        self.inner
            .encode(pcm, out)
            .map_err(|e| TranslateError::EncodeFrame {
                detail: e.to_string(),
            })
    }
}

/// Mono opus decoder; no bandwidth ceiling, the decoder adapts to the stream.
pub struct OpusFrameDecoder {
    inner: Decoder,
    fec: bool,
}

impl OpusFrameDecoder {
    pub fn new(rate: SamplingRate, config: &TranslatorConfig) -> TranslateResult<Self> {
        let inner =
            Decoder::new(opus_rate(rate), Channels::Mono).map_err(init_err("decoder"))?;

        Ok(Self {
            inner,
            fec: config.fec,
        })
    }

    /// Decodes one packet into `out`, returning the decoded sample count.
    pub fn decode(&mut self, packet: &[u8], out: &mut [i16]) -> TranslateResult<usize> {
        self.inner
            .decode(Some(packet), out, self.fec)
            .map_err(|e| TranslateError::Decode {
                detail: e.to_string(),
            })
    }
}
