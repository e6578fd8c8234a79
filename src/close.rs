//! Close frame payload.
//!
//! A close payload is `[2-byte big-endian status code][utf-8 reason]`,
//! both parts optional. Whether the close was clean is decided by the
//! connection layer after the close handshake, not here.

use crate::error::CloseError;
use crate::payload::PayloadData;

/// Status code when the close payload carries none, per RFC-6455.
pub const NO_STATUS: u16 = 1005;

/// Decoded close status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseStatus {
    pub code: u16,
    pub reason: String,
}

impl CloseStatus {
    /// Decode an assembled close payload.
    ///
    /// Fewer than 2 bytes yields code [`NO_STATUS`] and an empty
    /// reason. A malformed utf-8 reason is an error, never silently
    /// replaced or truncated.
    pub fn from_bytes(payload: &[u8]) -> Result<Self, CloseError> {
        let code = if payload.len() >= 2 {
            u16::from_be_bytes([payload[0], payload[1]])
        } else {
            NO_STATUS
        };

        let reason = if payload.len() > 2 {
            std::str::from_utf8(&payload[2..])
                .map_err(CloseError::BadReason)?
                .to_owned()
        } else {
            String::new()
        };

        Ok(Self { code, reason })
    }

    /// Decode from a frame's [`PayloadData`].
    #[inline]
    pub fn decode(payload: &PayloadData) -> Result<Self, CloseError> {
        Self::from_bytes(&payload.to_bytes())
    }
}
