use std::io::Read;
use std::io::Result;
use std::io::{Seek, SeekFrom};

use log::trace;

use super::min_len;
use super::state::ReadState;
use super::{FrameSource, MessageStream};

use crate::error::StreamError;
use crate::frame::mask::apply_mask_at;
use crate::frame::{FrameDescriptor, Mask};

impl<IO: Read, F: FrameSource> Read for MessageStream<IO, F> {
    /// Read some data from the message, crossing frame boundaries
    /// as needed and unmasking in place.
    ///
    /// An empty buffer returns `Ok(0)` with no side effects. The
    /// call keeps filling the buffer until it is full or the final
    /// frame's payload is exhausted; once the message is complete
    /// every further read returns `Ok(0)`, which can be checked via
    /// [`MessageStream::is_complete`].
    ///
    /// A transport EOF inside a frame payload, or a frame source
    /// with no continuation for an unfinished message, is surfaced
    /// as an error; if some bytes were already copied they are
    /// returned first and the error shows up on the next call.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }

        let mut filled = 0;

        loop {
            match self.state {
                // message already delivered
                ReadState::Done => return Ok(filled),
                // between frames, descriptor not fetched yet
                ReadState::AwaitFrame => {
                    if filled == buf.len() {
                        return Ok(filled);
                    }
                    match self.frames.next_frame()? {
                        Some(frame) => {
                            trace!(
                                "stream: next frame, {} bytes, fin: {}",
                                frame.remaining,
                                frame.fin
                            );
                            self.state = ReadState::Frame { frame, consumed: 0 };
                        }
                        // the peer promised a continuation that
                        // does not exist
                        None if filled > 0 => return Ok(filled),
                        None => return Err(StreamError::MissingContinuation.into()),
                    }
                }
                // deliver payload of the current frame
                ReadState::Frame { frame, consumed } => {
                    if frame.remaining == 0 {
                        if frame.fin {
                            trace!("stream: message complete");
                            self.state = ReadState::Done;
                            return Ok(filled);
                        }
                        self.state = ReadState::AwaitFrame;
                        continue;
                    }
                    if filled == buf.len() {
                        return Ok(filled);
                    }

                    let len = min_len(buf.len() - filled, frame.remaining);
                    let read_n = self.io.read(&mut buf[filled..filled + len])?;

                    // EOF inside a frame payload: truncated wire
                    if read_n == 0 {
                        if filled > 0 {
                            return Ok(filled);
                        }
                        return Err(StreamError::UnexpectedEof.into());
                    }

                    // unmask with the key phase anchored to the
                    // absolute position within this frame
                    if let Mask::Key(key) = frame.mask {
                        apply_mask_at(key, consumed, &mut buf[filled..filled + read_n]);
                    }

                    filled += read_n;
                    self.state = ReadState::Frame {
                        frame: FrameDescriptor {
                            remaining: frame.remaining - read_n as u64,
                            ..frame
                        },
                        consumed: consumed + read_n as u64,
                    };
                }
            }
        }
    }
}

impl<IO: Read, F: FrameSource> Seek for MessageStream<IO, F> {
    /// **This is NOT supported!**
    ///
    /// A live frame stream is forward-only; every call returns
    /// [`StreamError::NotSeekable`] as an io error.
    fn seek(&mut self, _: SeekFrom) -> Result<u64> {
        Err(StreamError::NotSeekable.into())
    }
}
