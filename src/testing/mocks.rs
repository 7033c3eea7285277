use crate::codecs::FrameCodec;
use crate::core::error::{TranslateError, TranslateResult};

/// Scripted stand-in for the opus encode primitive. Frames are numbered
/// from 1; any frame listed in `fail_on` returns an encode error, every
/// other frame produces a recognizable payload.
pub struct ScriptedFrameCodec {
    fail_on: Vec<usize>,
    bytes_per_frame: usize,
    calls: usize,
}

impl ScriptedFrameCodec {
    pub fn new(fail_on: Vec<usize>, bytes_per_frame: usize) -> Self {
        Self {
            fail_on,
            bytes_per_frame,
            calls: 0,
        }
    }

    pub fn succeeding(bytes_per_frame: usize) -> Self {
        Self::new(Vec::new(), bytes_per_frame)
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl FrameCodec for ScriptedFrameCodec {
    fn encode_frame(&mut self, _pcm: &[i16], out: &mut [u8]) -> TranslateResult<usize> {
        self.calls += 1;
        if self.fail_on.contains(&self.calls) {
            return Err(TranslateError::EncodeFrame {
                detail: format!("scripted failure on frame {}", self.calls),
            });
        }
        // Payload bytes carry the frame number so tests can see which
        // frames made it through.
        for byte in out.iter_mut().take(self.bytes_per_frame) {
            *byte = self.calls as u8;
        }
        Ok(self.bytes_per_frame)
    }
}
