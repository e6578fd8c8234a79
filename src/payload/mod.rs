//! Frame payload.
//!
//! One frame's decoded content: optional extension data negotiated
//! by an extension (none by default), followed by the application
//! data. Used on the receive path once a payload is fully assembled
//! in memory, and on the send path before framing.

use std::borrow::Cow;

use crate::error::FrameError;
use crate::frame::mask::apply_mask4;

/// Max representable frame payload length, per RFC-6455:
/// the most significant bit of a 64-bit length must be 0.
pub const MAX_PAYLOAD_LEN: u64 = (1 << 63) - 1;

/// Combined length, rejected past [`MAX_PAYLOAD_LEN`].
#[inline]
fn checked_total(ext: usize, app: usize) -> Result<u64, FrameError> {
    let total = ext as u128 + app as u128;
    if total > MAX_PAYLOAD_LEN as u128 {
        return Err(FrameError::PayloadOverflow);
    }
    Ok(total as u64)
}

/// Payload of a single frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadData {
    extension: Vec<u8>,
    application: Vec<u8>,
    masked: bool,
}

impl PayloadData {
    /// Construct an unmasked payload.
    ///
    /// Empty parts are valid; the only constraint is the combined
    /// length limit, checked here once so the rest of the crate can
    /// trust it.
    #[inline]
    pub fn new(extension: Vec<u8>, application: Vec<u8>) -> Result<Self, FrameError> {
        Self::new_masked(extension, application, false)
    }

    /// Construct a payload whose bytes are already masked,
    /// e.g. read straight off the wire.
    pub fn new_masked(
        extension: Vec<u8>,
        application: Vec<u8>,
        masked: bool,
    ) -> Result<Self, FrameError> {
        checked_total(extension.len(), application.len())?;
        Ok(Self {
            extension,
            application,
            masked,
        })
    }

    /// Application-data-only payload, the common case.
    #[inline]
    pub fn from_application(application: Vec<u8>) -> Result<Self, FrameError> {
        Self::new(Vec::new(), application)
    }

    #[inline]
    pub fn extension(&self) -> &[u8] { &self.extension }

    #[inline]
    pub fn application(&self) -> &[u8] { &self.application }

    /// Combined length of extension and application data.
    #[inline]
    pub fn len(&self) -> u64 { self.extension.len() as u64 + self.application.len() as u64 }

    #[inline]
    pub fn is_empty(&self) -> bool { self.extension.is_empty() && self.application.is_empty() }

    /// Whether the bytes currently carry a mask.
    #[inline]
    pub const fn is_masked(&self) -> bool { self.masked }

    /// Apply the 4-byte XOR mask in place.
    ///
    /// Masking is a pure positional XOR, so applying the same key
    /// twice restores the original bytes. Each successful call flips
    /// [`is_masked`](Self::is_masked).
    ///
    /// The key must be exactly 4 bytes, otherwise
    /// [`FrameError::IllegalMaskKey`] is returned and nothing is
    /// touched.
    pub fn mask(&mut self, key: &[u8]) -> Result<(), FrameError> {
        let key: [u8; 4] = key.try_into().map_err(|_| FrameError::IllegalMaskKey)?;

        if !self.extension.is_empty() {
            apply_mask4(key, &mut self.extension);
        }
        if !self.application.is_empty() {
            apply_mask4(key, &mut self.application);
        }

        self.masked = !self.masked;
        Ok(())
    }

    /// The wire bytes: extension data followed by application data.
    ///
    /// With no extension data this borrows the application buffer
    /// directly instead of copying.
    pub fn to_bytes(&self) -> Cow<'_, [u8]> {
        if self.extension.is_empty() {
            return Cow::Borrowed(&self.application);
        }
        let mut buf = Vec::with_capacity(self.extension.len() + self.application.len());
        buf.extend_from_slice(&self.extension);
        buf.extend_from_slice(&self.application);
        Cow::Owned(buf)
    }

    /// Consume into the wire bytes, reusing the application buffer
    /// when there is no extension data.
    pub fn into_bytes(self) -> Vec<u8> {
        if self.extension.is_empty() {
            return self.application;
        }
        let mut buf = self.extension;
        buf.extend_from_slice(&self.application);
        buf
    }

    /// Iterate over the combined bytes without materializing a
    /// concatenated copy.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.extension
            .iter()
            .chain(self.application.iter())
            .copied()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mask_round_trip() {
        let ext: Vec<u8> = (0..64).map(|_| rand::random()).collect();
        let app: Vec<u8> = (0..1024).map(|_| rand::random()).collect();
        let key: [u8; 4] = rand::random();

        let mut payload = PayloadData::new(ext.clone(), app.clone()).unwrap();
        assert!(!payload.is_masked());

        payload.mask(&key).unwrap();
        assert!(payload.is_masked());

        payload.mask(&key).unwrap();
        assert!(!payload.is_masked());
        assert_eq!(payload.extension(), &ext);
        assert_eq!(payload.application(), &app);
    }

    #[test]
    fn mask_round_trip_no_extension() {
        let app: Vec<u8> = (0..777).map(|_| rand::random()).collect();
        let key: [u8; 4] = rand::random();

        let mut payload = PayloadData::from_application(app.clone()).unwrap();
        payload.mask(&key).unwrap();
        payload.mask(&key).unwrap();

        assert_eq!(payload.application(), &app);
        assert!(payload.extension().is_empty());
    }

    #[test]
    fn mask_bad_key() {
        let mut payload = PayloadData::from_application(b"data".to_vec()).unwrap();

        for len in [0, 1, 2, 3, 5, 16] {
            let key = vec![0x5a; len];
            assert_eq!(payload.mask(&key), Err(FrameError::IllegalMaskKey));
            // a failed call must not flip the flag
            assert!(!payload.is_masked());
            assert_eq!(payload.application(), b"data");
        }
    }

    #[test]
    fn length_limit() {
        let half = 1_usize << 62;

        assert_eq!(checked_total(half, half - 1).unwrap(), MAX_PAYLOAD_LEN);
        assert_eq!(
            checked_total(half, half),
            Err(FrameError::PayloadOverflow)
        );
        assert_eq!(
            checked_total(usize::MAX, usize::MAX),
            Err(FrameError::PayloadOverflow)
        );
        assert_eq!(checked_total(0, 0).unwrap(), 0);
    }

    #[test]
    fn to_bytes_borrows_application() {
        let payload = PayloadData::from_application(b"hello".to_vec()).unwrap();
        let bytes = payload.to_bytes();
        assert!(matches!(bytes, Cow::Borrowed(_)));
        assert_eq!(&bytes[..], b"hello");

        let payload = PayloadData::new(b"ex".to_vec(), b"hello".to_vec()).unwrap();
        let bytes = payload.to_bytes();
        assert!(matches!(bytes, Cow::Owned(_)));
        assert_eq!(&bytes[..], b"exhello");
    }

    #[test]
    fn iter_crosses_parts() {
        let payload = PayloadData::new(b"ab".to_vec(), b"cdef".to_vec()).unwrap();
        let collected: Vec<u8> = payload.iter().collect();
        assert_eq!(&collected, b"abcdef");
        assert_eq!(collected.len() as u64, payload.len());

        let payload = PayloadData::new(Vec::new(), Vec::new()).unwrap();
        assert!(payload.is_empty());
        assert_eq!(payload.iter().count(), 0);
    }

    #[test]
    fn into_bytes() {
        let payload = PayloadData::from_application(b"hello".to_vec()).unwrap();
        assert_eq!(payload.into_bytes(), b"hello");

        let payload = PayloadData::new(b"ex".to_vec(), b"hello".to_vec()).unwrap();
        assert_eq!(payload.into_bytes(), b"exhello");
    }
}
