// src/bin/opus_show.rs
//
// Diagnostic readout for the translator registry: prints the ten
// translator descriptors and the encoder/decoder utilization, optionally
// after exercising one leg per rate.

use anyhow::{Context, Result};
use log::info;

use opuslin::{SamplingRate, TranslatorConfig, TranslatorRegistry};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let config: TranslatorConfig = match std::env::args().nth(1) {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {}", path))?;
            toml::from_str(&raw).with_context(|| format!("parsing config {}", path))?
        }
        None => TranslatorConfig::default(),
    };

    let registry = TranslatorRegistry::new(config);

    println!(
        "{}",
        serde_json::to_string_pretty(&registry.descriptors())?
    );

    // Bring one leg per rate up so the utilization readout shows live
    // sessions, the way the in-service module would.
    let mut legs = Vec::new();
    for rate in SamplingRate::ALL {
        legs.push((
            registry.build_encoder(rate.hz())?,
            registry.build_decoder(rate.hz())?,
        ));
    }

    let live = registry.usage().snapshot();
    info!(
        "[opuslin] {}/{} encoders/decoders are in use",
        live.encoders, live.decoders
    );
    println!("{}", serde_json::to_string_pretty(&live)?);

    drop(legs);

    let after = registry.usage().snapshot();
    info!(
        "[opuslin] {}/{} encoders/decoders are in use after teardown",
        after.encoders, after.decoders
    );

    Ok(())
}
