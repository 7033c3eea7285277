use serde::Serialize;

use crate::codecs::{Direction, SamplingRate, TranslatorConfig, BUFFER_SAMPLES};
use crate::core::error::TranslateResult;
use crate::core::usage::{self, UsageTracker};
use crate::translate::{DecoderSession, EncoderSession};

/// Relative routing costs. Only the ordering matters to the host: higher
/// external rates need less resampling around the translator, so they get
/// progressively cheaper.
const TABLE_COST_LIN_TO_OPUS: i32 = 600_000;
const TABLE_COST_OPUS_TO_LIN: i32 = 600_000;

fn cost_discount(rate: SamplingRate) -> i32 {
    match rate {
        SamplingRate::Hz8000 => 0,
        SamplingRate::Hz12000 => 1,
        SamplingRate::Hz16000 => 2,
        SamplingRate::Hz24000 => 4,
        SamplingRate::Hz48000 => 8,
    }
}

fn linear_format(rate: SamplingRate) -> String {
    match rate {
        SamplingRate::Hz8000 => "slin".to_string(),
        rate => format!("slin{}", rate.hz() / 1000),
    }
}

fn translator_name(direction: Direction, rate: SamplingRate) -> String {
    match (direction, rate) {
        (Direction::Encode, SamplingRate::Hz8000) => "lintoopus".to_string(),
        (Direction::Encode, rate) => format!("lin{}toopus", rate.hz() / 1000),
        (Direction::Decode, SamplingRate::Hz8000) => "opustolin".to_string(),
        (Direction::Decode, rate) => format!("opustolin{}", rate.hz() / 1000),
    }
}

/// One (direction, rate) pair out of the ten the registry serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TranslatorKey {
    pub direction: Direction,
    pub rate: SamplingRate,
}

/// What the host sees for one translator: naming, formats, buffer bounds
/// and routing cost. One parameterized type instead of a struct literal per
/// rate and direction.
#[derive(Debug, Clone, Serialize)]
pub struct TranslatorDescriptor {
    pub name: String,
    pub direction: Direction,
    pub rate_hz: u32,
    pub src_format: String,
    pub dst_format: String,
    pub buffer_samples: usize,
    pub buf_size: usize,
    pub table_cost: i32,
}

impl TranslatorDescriptor {
    pub fn for_key(key: TranslatorKey) -> Self {
        let (src_format, dst_format, table_cost) = match key.direction {
            Direction::Encode => (
                linear_format(key.rate),
                "opus".to_string(),
                TABLE_COST_LIN_TO_OPUS - cost_discount(key.rate),
            ),
            Direction::Decode => (
                "opus".to_string(),
                linear_format(key.rate),
                TABLE_COST_OPUS_TO_LIN - cost_discount(key.rate),
            ),
        };

        Self {
            name: translator_name(key.direction, key.rate),
            direction: key.direction,
            rate_hz: key.rate.hz(),
            src_format,
            dst_format,
            buffer_samples: BUFFER_SAMPLES,
            buf_size: BUFFER_SAMPLES * 2,
            table_cost,
        }
    }
}

/// Session factory for all ten translator legs, sharing one config and one
/// usage tracker. The host hands raw rates in; validation happens here.
pub struct TranslatorRegistry {
    config: TranslatorConfig,
    usage: &'static UsageTracker,
}

impl TranslatorRegistry {
    pub fn new(config: TranslatorConfig) -> Self {
        Self::with_usage(config, usage::global())
    }

    pub fn with_usage(config: TranslatorConfig, usage: &'static UsageTracker) -> Self {
        Self { config, usage }
    }

    pub fn keys() -> Vec<TranslatorKey> {
        let mut keys = Vec::with_capacity(SamplingRate::ALL.len() * 2);
        for rate in SamplingRate::ALL {
            keys.push(TranslatorKey {
                direction: Direction::Decode,
                rate,
            });
            keys.push(TranslatorKey {
                direction: Direction::Encode,
                rate,
            });
        }
        keys
    }

    pub fn descriptors(&self) -> Vec<TranslatorDescriptor> {
        Self::keys()
            .into_iter()
            .map(TranslatorDescriptor::for_key)
            .collect()
    }

    /// Hard failure for the leg on any error; no partial session escapes.
    pub fn build_encoder(&self, rate_hz: u32) -> TranslateResult<EncoderSession> {
        let rate = SamplingRate::from_hz(rate_hz)?;
        EncoderSession::with_usage(rate, &self.config, self.usage)
    }

    pub fn build_decoder(&self, rate_hz: u32) -> TranslateResult<DecoderSession> {
        let rate = SamplingRate::from_hz(rate_hz)?;
        DecoderSession::with_usage(rate, &self.config, self.usage)
    }

    pub fn usage(&self) -> &'static UsageTracker {
        self.usage
    }

    pub fn config(&self) -> &TranslatorConfig {
        &self.config
    }
}
