//! Capture buffer shared with a clock-edge interrupt handler.

use core::sync::atomic::{AtomicU8, AtomicUsize, Ordering};

use super::bits::{BitStore, DEFAULT_BYTES};

/// Bits captured from the reader's data line, shared between exactly one
/// producer (the strobe interrupt) and one consumer (the decoding pipeline).
///
/// Every method takes `&self`, and [`Capture::new`] is `const`, so a capture
/// can be placed in a `static` and reached from an interrupt handler.
///
/// There is no lock. The consumer only resets the buffer before a swipe starts
/// and reads it after the card-present signal has dropped; the state tokens in
/// [`crate::sans::swipe`] enforce this ordering.
pub struct Capture<const B: usize = DEFAULT_BYTES> {
    bits: [AtomicU8; B],
    len: AtomicUsize,
}

impl<const B: usize> Capture<B> {
    /// Number of bits the buffer can hold.
    pub const CAPACITY: usize = B * 8;

    /// Create an empty capture buffer.
    pub const fn new() -> Self {
        Self {
            bits: [const { AtomicU8::new(0) }; B],
            len: AtomicUsize::new(0),
        }
    }

    /// Append one sampled bit.
    ///
    /// Intended to be called once per clock edge from a single producer. Bits
    /// arriving after the buffer is full are dropped.
    pub fn push(&self, bit: bool) {
        let i = self.len.load(Ordering::Relaxed);
        if i >= Self::CAPACITY {
            return;
        }

        // Single producer, so a plain load/store pair cannot race with
        // another writer.
        let byte = &self.bits[i / 8];
        let m = 1 << (i % 8);
        let b = byte.load(Ordering::Relaxed);
        byte.store(if bit { b | m } else { b & !m }, Ordering::Relaxed);

        self.len.store(i + 1, Ordering::Release);
    }

    /// Number of bits captured so far.
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Empty the buffer ahead of a new swipe.
    pub fn reset(&self) {
        self.len.store(0, Ordering::Release);
    }

    /// Copy the captured bits into an owned store for decoding.
    pub fn snapshot(&self) -> BitStore<B> {
        let len = self.len.load(Ordering::Acquire);
        let bits = core::array::from_fn(|i| self.bits[i].load(Ordering::Relaxed));

        BitStore::from_raw(bits, len)
    }
}

impl<const B: usize> Default for Capture<B> {
    fn default() -> Self {
        Self::new()
    }
}
