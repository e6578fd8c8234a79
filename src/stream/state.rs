use crate::frame::FrameDescriptor;

/// Read state.
///
/// Replaces the callback pair of classic designs (next-frame fetch,
/// completion signal) with states a caller can observe. `Done` is a
/// one-way transition, entered exactly once per message.
#[derive(Debug, Clone, Copy)]
pub(super) enum ReadState {
    /// Delivering the current frame's payload. `consumed` is the
    /// absolute offset within the frame, which anchors the mask
    /// phase across partial reads.
    Frame {
        frame: FrameDescriptor,
        consumed: u64,
    },
    /// Current frame exhausted, message incomplete; the next
    /// descriptor has not been fetched yet.
    AwaitFrame,
    /// Final frame fully delivered.
    Done,
}

impl ReadState {
    #[inline]
    pub const fn new() -> Self { ReadState::AwaitFrame }
}
