use std::sync::{Arc, Barrier};

use opuslin::{DecoderSession, EncoderSession, SamplingRate, TranslatorConfig, UsageTracker};

#[test]
fn hundred_threads_leave_no_residual_counts() {
    let usage: &'static UsageTracker = Box::leak(Box::new(UsageTracker::new()));
    let start = Arc::new(Barrier::new(100));

    let mut handles = Vec::new();
    for i in 0..100 {
        let start = start.clone();
        handles.push(std::thread::spawn(move || {
            let config = TranslatorConfig::default();
            let rate = SamplingRate::ALL[i % SamplingRate::ALL.len()];
            start.wait();

            let encoder = EncoderSession::with_usage(rate, &config, usage).expect("encoder");
            let decoder = DecoderSession::with_usage(rate, &config, usage).expect("decoder");

            // Touch the sessions so the whole construct/use/teardown path
            // runs under contention, not just the counters.
            assert_eq!(encoder.multiplier() * rate.hz() as usize, 48_000);
            assert_eq!(decoder.rate(), rate);

            drop(encoder);
            drop(decoder);
        }));
    }

    for handle in handles {
        handle.join().expect("thread should complete");
    }

    let snapshot = usage.snapshot();
    assert_eq!(snapshot.encoders, 0);
    assert_eq!(snapshot.decoders, 0);
    assert_eq!(snapshot.encoders_created, 100);
    assert_eq!(snapshot.decoders_created, 100);
}

#[test]
fn ids_are_unique_under_contention() {
    let usage: &'static UsageTracker = Box::leak(Box::new(UsageTracker::new()));
    let start = Arc::new(Barrier::new(16));

    let mut handles = Vec::new();
    for _ in 0..16 {
        let start = start.clone();
        handles.push(std::thread::spawn(move || {
            let config = TranslatorConfig::default();
            start.wait();
            let mut ids = Vec::new();
            for _ in 0..8 {
                let session =
                    EncoderSession::with_usage(SamplingRate::Hz8000, &config, usage)
                        .expect("encoder");
                ids.push(session.id());
            }
            ids
        }));
    }

    let mut all_ids: Vec<u64> = handles
        .into_iter()
        .flat_map(|handle| handle.join().expect("thread should complete"))
        .collect();
    all_ids.sort_unstable();
    all_ids.dedup();

    assert_eq!(all_ids.len(), 16 * 8);
    assert_eq!(usage.snapshot().encoders, 0);
}
