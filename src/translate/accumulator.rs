use crate::codecs::BUFFER_SAMPLES;
use crate::core::error::{TranslateError, TranslateResult};

/// Pending-PCM buffer for one encoder leg. Input arrives in caller-sized
/// chunks; the codec only takes whole 20 ms frames, so whatever does not
/// fill a frame stays here until the next feed.
pub struct SampleAccumulator {
    pending: Vec<i16>,
    frame_size: usize,
    capacity: usize,
}

impl SampleAccumulator {
    pub fn new(frame_size: usize) -> Self {
        Self::with_capacity(frame_size, BUFFER_SAMPLES)
    }

    pub fn with_capacity(frame_size: usize, capacity: usize) -> Self {
        debug_assert!(frame_size > 0 && frame_size <= capacity);
        Self {
            pending: Vec::with_capacity(capacity),
            frame_size,
            capacity,
        }
    }

    /// Appends samples, rejecting anything that would exceed capacity.
    /// On overflow the buffer is left exactly as it was.
    pub fn feed(&mut self, pcm: &[i16]) -> TranslateResult<()> {
        if self.pending.len() + pcm.len() > self.capacity {
            return Err(TranslateError::BufferOverflow {
                pending: self.pending.len(),
                incoming: pcm.len(),
                capacity: self.capacity,
            });
        }
        self.pending.extend_from_slice(pcm);
        Ok(())
    }

    /// Hands every whole buffered frame to `encode` in order, then compacts
    /// the leftover partial frame to the front of the buffer. Returns the
    /// number of frames handed out.
    pub fn drain_frames(&mut self, mut encode: impl FnMut(&[i16])) -> usize {
        let mut offset = 0;
        while self.pending.len() - offset >= self.frame_size {
            encode(&self.pending[offset..offset + self.frame_size]);
            offset += self.frame_size;
        }
        if offset > 0 {
            self.pending.drain(..offset);
        }
        offset / self.frame_size
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.pending.len()
    }

    pub fn frame_size(&self) -> usize {
        self.frame_size
    }

    /// The carried-over samples, front-aligned, for inspection in tests.
    pub fn pending_samples(&self) -> &[i16] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_leaves_less_than_one_frame_pending() {
        let mut acc = SampleAccumulator::new(160);
        acc.feed(&vec![1i16; 160 * 2 + 37]).expect("feed");

        let frames = acc.drain_frames(|frame| assert_eq!(frame.len(), 160));
        assert_eq!(frames, 2);
        assert_eq!(acc.pending(), 37);
        assert!(acc.pending() < acc.frame_size());
    }

    #[test]
    fn overflow_leaves_buffer_untouched() {
        let mut acc = SampleAccumulator::with_capacity(160, 400);
        acc.feed(&[7i16; 300]).expect("feed");

        let err = acc.feed(&[8i16; 200]).unwrap_err();
        assert!(matches!(
            err,
            TranslateError::BufferOverflow {
                pending: 300,
                incoming: 200,
                capacity: 400
            }
        ));
        assert_eq!(acc.pending(), 300);
        assert!(acc.pending_samples().iter().all(|&s| s == 7));
    }
}
