//! Continuation stream.
//!
//! One websocket message may span any number of wire frames; a
//! [`MessageStream`] presents them as a single forward-only byte
//! stream, unmasking on the fly. Frame boundaries are invisible to
//! the caller: one `read` call may drain the tail of one frame and
//! the head of the next.

mod read;
mod state;

use state::ReadState;
use crate::frame::FrameDescriptor;

/// Supplies frame descriptors as the message progresses.
///
/// The implementor wraps the external frame-head parser. A call may
/// block until the next head has arrived and been parsed; the stream
/// never asks for a descriptor before the current frame is fully
/// consumed.
pub trait FrameSource {
    /// Fetch the next frame's descriptor.
    ///
    /// `Ok(None)` means no further frame exists. For a message whose
    /// last seen frame was non-final that is a peer protocol
    /// violation; the stream surfaces it as an error instead of
    /// waiting forever.
    fn next_frame(&mut self) -> std::io::Result<Option<FrameDescriptor>>;
}

/// Any in-memory descriptor sequence is a frame source.
impl<I: Iterator<Item = FrameDescriptor>> FrameSource for I {
    #[inline]
    fn next_frame(&mut self) -> std::io::Result<Option<FrameDescriptor>> { Ok(self.next()) }
}

/// Read-only, forward-only stream over one fragmented message.
///
/// Holds the transport `IO` and a [`FrameSource`]; owns the current
/// frame descriptor and mutates it as payload is consumed. Supports
/// exactly one reader; `&mut self` makes concurrent use of a single
/// instance unrepresentable, so there is no internal locking.
pub struct MessageStream<IO, F> {
    io: IO,
    frames: F,
    state: ReadState,
}

impl<IO, F> AsRef<IO> for MessageStream<IO, F> {
    #[inline]
    fn as_ref(&self) -> &IO { &self.io }
}

impl<IO, F> AsMut<IO> for MessageStream<IO, F> {
    #[inline]
    fn as_mut(&mut self) -> &mut IO { &mut self.io }
}

impl<IO, F> std::fmt::Debug for MessageStream<IO, F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageStream")
            .field("state", &self.state)
            .finish()
    }
}

impl<IO, F> MessageStream<IO, F> {
    /// Create a stream whose first descriptor is pulled from the
    /// frame source on the first read.
    #[inline]
    pub const fn new(io: IO, frames: F) -> Self {
        MessageStream {
            io,
            frames,
            state: ReadState::new(),
        }
    }

    /// Create a stream whose first frame's head is already parsed.
    #[inline]
    pub const fn with_first_frame(io: IO, frames: F, frame: FrameDescriptor) -> Self {
        MessageStream {
            io,
            frames,
            state: ReadState::Frame { frame, consumed: 0 },
        }
    }

    /// Check if the final frame's payload has been fully delivered.
    #[inline]
    pub const fn is_complete(&self) -> bool { matches!(&self.state, ReadState::Done) }

    /// Check if the stream sits between frames, next descriptor not
    /// yet fetched.
    #[inline]
    pub const fn is_awaiting_frame(&self) -> bool {
        matches!(&self.state, ReadState::AwaitFrame)
    }

    /// Check if a frame's payload is currently being delivered.
    #[inline]
    pub const fn is_reading_frame(&self) -> bool {
        matches!(&self.state, ReadState::Frame { .. })
    }

    /// The frame being delivered, if any.
    #[inline]
    pub const fn current_frame(&self) -> Option<&FrameDescriptor> {
        match &self.state {
            ReadState::Frame { frame, .. } => Some(frame),
            _ => None,
        }
    }

    /// Take back the transport and the frame source.
    #[inline]
    pub fn into_inner(self) -> (IO, F) { (self.io, self.frames) }
}

#[inline]
fn min_len(buf_len: usize, length: u64) -> usize {
    #[cfg(target_pointer_width = "64")]
    {
        std::cmp::min(buf_len, length as usize)
    }

    #[cfg(not(target_pointer_width = "64"))]
    {
        std::cmp::min(buf_len as u64, length) as usize
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::{Read, Result};

    use crate::frame::mask::apply_mask;

    /// IO source delivering at most `rlimit` bytes per read.
    pub struct LimitReader {
        pub buf: Vec<u8>,
        pub rlimit: usize,
        pub cursor: usize,
    }

    impl LimitReader {
        pub fn new(buf: Vec<u8>, rlimit: usize) -> Self {
            Self {
                buf,
                rlimit,
                cursor: 0,
            }
        }
    }

    impl Read for LimitReader {
        fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
            let left = self.buf.len() - self.cursor;
            let n = std::cmp::min(std::cmp::min(buf.len(), self.rlimit), left);
            buf[..n].copy_from_slice(&self.buf[self.cursor..self.cursor + n]);
            self.cursor += n;
            Ok(n)
        }
    }

    /// Masked copy of `data`, as it would appear on the wire.
    pub fn mask_wire(key: [u8; 4], data: &[u8]) -> Vec<u8> {
        let mut wire = data.to_vec();
        apply_mask(key, &mut wire);
        wire
    }

    #[test]
    fn stream_states() {
        let frames = std::iter::empty::<FrameDescriptor>();
        let stream = MessageStream::new(LimitReader::new(Vec::new(), 64), frames);

        assert!(stream.is_awaiting_frame());
        assert!(!stream.is_reading_frame());
        assert!(!stream.is_complete());
        assert!(stream.current_frame().is_none());

        let desc = FrameDescriptor::new_unmasked(8, true);
        let frames = std::iter::empty::<FrameDescriptor>();
        let stream =
            MessageStream::with_first_frame(LimitReader::new(Vec::new(), 64), frames, desc);

        assert!(stream.is_reading_frame());
        assert_eq!(stream.current_frame(), Some(&desc));
    }
}
