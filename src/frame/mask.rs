//! Mask key and payload masking.

use crate::error::FrameError;

/// Payload mask with a 32-bit key.
///
/// A key is either absent (frames sent by a server) or exactly
/// 4 bytes; no other length exists on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mask {
    Key([u8; 4]),
    None,
}

impl Mask {
    /// Validate a raw key slice, as handed over by the head parser.
    ///
    /// Accepts an empty slice (no mask) or exactly 4 bytes; any
    /// other length is an upstream protocol violation and is
    /// rejected with [`FrameError::IllegalMaskKey`].
    #[inline]
    pub fn from_key(key: &[u8]) -> Result<Self, FrameError> {
        match key.len() {
            0 => Ok(Mask::None),
            4 => Ok(Mask::Key([key[0], key[1], key[2], key[3]])),
            _ => Err(FrameError::IllegalMaskKey),
        }
    }
}

/// Generate a new random key.
#[inline]
pub fn new_rand_key() -> [u8; 4] { rand::random::<[u8; 4]>() }

/// Mask the buffer, byte by byte.
#[inline]
pub fn apply_mask(key: [u8; 4], buf: &mut [u8]) {
    for (i, b) in buf.iter_mut().enumerate() {
        *b ^= key[i & 0x03];
    }
}

/// Mask the buffer, 4 bytes at a time.
#[inline]
pub fn apply_mask4(key: [u8; 4], buf: &mut [u8]) {
    let key4 = u32::from_ne_bytes(key);

    let (prefix, middle, suffix) = unsafe { buf.align_to_mut::<u32>() };

    apply_mask(key, prefix);

    let head = prefix.len() & 3;
    let key4 = if head > 0 {
        if cfg!(target_endian = "big") {
            key4.rotate_left(8 * head as u32)
        } else {
            key4.rotate_right(8 * head as u32)
        }
    } else {
        key4
    };
    for b4 in middle.iter_mut() {
        *b4 ^= key4;
    }

    apply_mask(key4.to_ne_bytes(), suffix);
}

/// Mask the buffer as if it started at byte `offset` of the key
/// phase, so masking can resume mid-frame after a partial read.
#[inline]
pub fn apply_mask_at(key: [u8; 4], offset: u64, buf: &mut [u8]) {
    let r = (offset & 0x03) as usize;
    let key = [
        key[r],
        key[(r + 1) & 0x03],
        key[(r + 2) & 0x03],
        key[(r + 3) & 0x03],
    ];
    apply_mask4(key, buf);
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mask_key_len() {
        assert_eq!(Mask::from_key(&[]).unwrap(), Mask::None);
        assert_eq!(
            Mask::from_key(&[1, 2, 3, 4]).unwrap(),
            Mask::Key([1, 2, 3, 4])
        );

        for len in [1, 2, 3, 5, 8] {
            let key = vec![0xab; len];
            assert_eq!(Mask::from_key(&key), Err(FrameError::IllegalMaskKey));
        }
    }

    #[test]
    fn mask_byte() {
        let key: [u8; 4] = rand::random();
        let buf: Vec<u8> =
            std::iter::repeat(rand::random::<u8>()).take(1024).collect();

        assert_eq!(buf.len(), 1024);

        let mut buf2 = buf.clone();
        apply_mask(key, &mut buf2);
        apply_mask(key, &mut buf2);

        assert_eq!(buf, buf2);
    }

    #[test]
    fn mask_byte4() {
        for i in 0..4096 {
            let key: [u8; 4] = rand::random();
            let buf: Vec<u8> =
                std::iter::repeat(rand::random::<u8>()).take(i).collect();

            assert_eq!(buf.len(), i);

            let mut buf2 = buf.clone();
            apply_mask4(key, &mut buf2);
            apply_mask4(key, &mut buf2);

            assert_eq!(buf, buf2);
        }
    }

    #[test]
    fn mask_split_at_any_offset() {
        // masking a buffer in two runs must equal masking it whole
        for len in 0..256 {
            let key: [u8; 4] = rand::random();
            let buf: Vec<u8> = (0..len).map(|_| rand::random()).collect();

            let mut whole = buf.clone();
            apply_mask(key, &mut whole);

            for split in 0..=len {
                let mut parts = buf.clone();
                let (a, b) = parts.split_at_mut(split);
                apply_mask_at(key, 0, a);
                apply_mask_at(key, split as u64, b);

                assert_eq!(whole, parts);
            }
        }
    }
}
