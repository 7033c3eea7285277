use opuslin::{SampleAccumulator, TranslateError};

#[test]
fn stays_empty_below_one_frame() {
    let mut acc = SampleAccumulator::new(160);

    acc.feed(&[1i16; 100]).expect("feed");
    assert_eq!(acc.drain_frames(|_| panic!("no frame expected")), 0);

    acc.feed(&[2i16; 59]).expect("feed");
    assert_eq!(acc.drain_frames(|_| panic!("no frame expected")), 0);
    assert_eq!(acc.pending(), 159);

    acc.feed(&[3i16; 1]).expect("feed");
    let mut seen = 0;
    assert_eq!(
        acc.drain_frames(|frame| {
            seen += 1;
            assert_eq!(frame.len(), 160);
        }),
        1
    );
    assert_eq!(seen, 1);
    assert_eq!(acc.pending(), 0);
}

#[test]
fn exact_multiple_drains_clean() {
    let mut acc = SampleAccumulator::new(160);
    acc.feed(&[0i16; 160 * 4]).expect("feed");

    let frames = acc.drain_frames(|frame| assert_eq!(frame.len(), 160));
    assert_eq!(frames, 4);
    assert_eq!(acc.pending(), 0);
}

#[test]
fn partial_frame_is_carried_to_the_front() {
    let mut acc = SampleAccumulator::new(160);

    // Two whole frames of zeros, then a marked partial tail.
    acc.feed(&[0i16; 160 * 2]).expect("feed");
    let tail: Vec<i16> = (1..=37).collect();
    acc.feed(&tail).expect("feed");

    assert_eq!(acc.drain_frames(|_| {}), 2);
    assert_eq!(acc.pending(), 37);
    assert_eq!(acc.pending_samples(), tail.as_slice());

    // The carried-over tail leads the next frame.
    acc.feed(&[0i16; 123]).expect("feed");
    let mut first_frame = Vec::new();
    assert_eq!(
        acc.drain_frames(|frame| first_frame.extend_from_slice(frame)),
        1
    );
    assert_eq!(&first_frame[..37], tail.as_slice());
    assert_eq!(acc.pending(), 0);
}

#[test]
fn feed_rejects_overflow_and_keeps_state() {
    let mut acc = SampleAccumulator::new(160);
    acc.feed(&[5i16; 7_900]).expect("feed");

    let err = acc.feed(&[6i16; 200]).unwrap_err();
    assert!(matches!(
        err,
        TranslateError::BufferOverflow {
            pending: 7_900,
            incoming: 200,
            capacity: 8_000
        }
    ));

    // Nothing was copied; the buffer still drains cleanly.
    assert_eq!(acc.pending(), 7_900);
    assert_eq!(acc.drain_frames(|_| {}), 7_900 / 160);
    assert_eq!(acc.pending(), 7_900 % 160);
}

#[test]
fn filling_to_capacity_is_allowed() {
    let mut acc = SampleAccumulator::new(160);
    acc.feed(&[0i16; 8_000]).expect("feed to capacity");
    assert_eq!(acc.remaining(), 0);
    assert_eq!(acc.drain_frames(|_| {}), 50);
}
