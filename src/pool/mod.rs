//! Fixed-size buffer pool.
//!
//! Frame decoding rents one buffer per frame; recycling them across
//! connections avoids a fresh allocation on every frame. The pool is
//! the only state shared between connections, so it takes care of
//! its own synchronization and callers need no locking.
//!
//! The pool never evicts: every distinct size rented creates a
//! bucket that lives until the pool is dropped. Callers renting many
//! distinct sizes grow it without bound. This is a deliberate
//! trade-off, not an oversight.

use dashmap::DashMap;
use log::trace;

/// Cache of fixed-size byte buffers, keyed by exact size.
///
/// Construct one per process (or per memory domain) and share it by
/// reference; there is no implicit global instance.
#[derive(Debug, Default)]
pub struct BufferPool {
    buckets: DashMap<usize, Vec<Box<[u8]>>>,
}

impl BufferPool {
    #[inline]
    pub fn new() -> Self {
        Self {
            buckets: DashMap::new(),
        }
    }

    /// Get a buffer of exactly `size` bytes, every byte zero.
    ///
    /// Reuses a recycled buffer of that size when one is available,
    /// otherwise allocates. Never blocks.
    pub fn rent(&self, size: usize) -> Box<[u8]> {
        // entry() creates the bucket on first touch, from either
        // rent or recycle, so call order does not matter
        if let Some(buf) = self.buckets.entry(size).or_default().pop() {
            return buf;
        }
        trace!("pool: alloc {} bytes", size);
        vec![0u8; size].into_boxed_slice()
    }

    /// Hand a buffer back for reuse.
    ///
    /// Every byte is zeroed before the buffer becomes visible to
    /// other renters, so no connection can observe another's data.
    pub fn recycle(&self, mut buf: Box<[u8]>) {
        buf.fill(0);
        self.buckets.entry(buf.len()).or_default().push(buf);
    }

    /// Count of resident free buffers of the given size.
    #[inline]
    pub fn pooled(&self, size: usize) -> usize {
        self.buckets.get(&size).map_or(0, |b| b.len())
    }
}
