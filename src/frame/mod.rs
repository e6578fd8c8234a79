//! Websocket frame descriptor.
//!
//! [RFC-6455 Section5](https://datatracker.ietf.org/doc/html/rfc6455#section-5)
//!
//! A frame head carries a final-fragment flag, an optional 4-byte
//! mask key and the payload length. Heads are parsed upstream; what
//! reaches this crate is the distilled [`FrameDescriptor`], consumed
//! by a [`MessageStream`](crate::stream::MessageStream) while the
//! payload bytes are pulled off the wire.

pub mod mask;

pub use mask::Mask;

/// One frame's pending payload, as seen by the receive path.
///
/// `remaining` counts the payload bytes not yet pulled off the
/// transport; it is decremented as the stream consumes them. When a
/// non-final frame hits zero, the whole descriptor is replaced by
/// the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDescriptor {
    pub remaining: u64,
    pub mask: Mask,
    pub fin: bool,
}

impl FrameDescriptor {
    /// Constructor.
    #[inline]
    pub const fn new(remaining: u64, mask: Mask, fin: bool) -> Self {
        Self {
            remaining,
            mask,
            fin,
        }
    }

    /// Descriptor of an unmasked frame.
    #[inline]
    pub const fn new_unmasked(remaining: u64, fin: bool) -> Self {
        Self::new(remaining, Mask::None, fin)
    }
}
