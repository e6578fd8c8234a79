//! Websocket frame-decoding core.
//!
//! This crate is the receive-path heart of a websocket implement:
//! it turns a raw, masked, possibly-fragmented sequence of frames
//! into a transparent byte stream.
//!
//! ## Features
//! - Recycle fixed-size buffers across connections.
//! - Unmask payload on the fly, crossing frame boundaries.
//! - Transparent Read over the underlying IO source.
//!
//! Frame heads are parsed elsewhere; this crate consumes the
//! resulting [`FrameDescriptor`](frame::FrameDescriptor)s together
//! with the transport bytes.
//!
//! ## Read a fragmented message
//!
//! ```ignore
//! {
//!     let mut stream = MessageStream::new(tcp, frames);
//!
//!     // frame boundaries are invisible here
//!     while !stream.is_complete() {
//!         let n = stream.read(&mut buf)?;
//!         message.extend_from_slice(&buf[..n]);
//!     }
//! }
//! ```
//!
//! ## Decode a close payload
//!
//! ```ignore
//! {
//!     let status = CloseStatus::from_bytes(&message)?;
//!     println!("peer closed: {} {}", status.code, status.reason);
//! }
//! ```

pub mod close;
pub mod error;
pub mod frame;
pub mod payload;
pub mod pool;
pub mod stream;
