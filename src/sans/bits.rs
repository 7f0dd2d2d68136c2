//! Packed storage for captured bits.

use core::fmt;

/// Default store size in bytes, enough for the longest of the three tracks.
pub const DEFAULT_BYTES: usize = 100;

/// A fixed-capacity, packed sequence of up to `B * 8` bits.
///
/// Appending beyond capacity is silently ignored, so a garbage swipe can only
/// ever truncate the capture.
#[derive(Clone, PartialEq, Eq)]
pub struct BitStore<const B: usize = DEFAULT_BYTES> {
    bits: [u8; B],
    len: usize,
}

impl<const B: usize> BitStore<B> {
    /// Number of bits the store can hold.
    pub const CAPACITY: usize = B * 8;

    /// Create an empty store.
    pub const fn new() -> Self {
        Self {
            bits: [0; B],
            len: 0,
        }
    }

    pub(super) fn from_raw(bits: [u8; B], len: usize) -> Self {
        Self {
            bits,
            len: len.min(Self::CAPACITY),
        }
    }

    /// Number of bits currently held.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        Self::CAPACITY
    }

    /// Discard all held bits.
    pub fn reset(&mut self) {
        self.len = 0;
    }

    /// Append a bit, dropping it if the store is full.
    pub fn push(&mut self, bit: bool) {
        if self.len >= Self::CAPACITY {
            return;
        }

        self.set(self.len, bit);
        self.len += 1;
    }

    /// Reverse the order of the held bits.
    pub fn reverse(&mut self) {
        let n = self.len;

        for i in 0..n / 2 {
            let b = self.get(i);

            self.set(i, self.get(n - i - 1));
            self.set(n - i - 1, b);
        }
    }

    /// Iterate over the held bits in order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| self.get(i))
    }

    /// Read the bit at `i`, which must be below the current length.
    pub(super) fn get(&self, i: usize) -> bool {
        self.bits[i / 8] & (1 << (i % 8)) != 0
    }

    fn set(&mut self, i: usize, bit: bool) {
        let b = &mut self.bits[i / 8];
        let m = 1 << (i % 8);

        *b = if bit { *b | m } else { *b & !m };
    }
}

impl<const B: usize> Default for BitStore<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const B: usize> Extend<bool> for BitStore<B> {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        iter.into_iter().for_each(|bit| self.push(bit));
    }
}

impl<const B: usize> FromIterator<bool> for BitStore<B> {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = Self::new();
        bits.extend(iter);
        bits
    }
}

impl<const B: usize> fmt::Debug for BitStore<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BitStore({}/{}; ", self.len, Self::CAPACITY)?;
        self.iter()
            .try_for_each(|bit| f.write_str(if bit { "1" } else { "0" }))?;
        f.write_str(")")
    }
}
