//! Character framing.

use super::{
    bits::BitStore,
    check::is_odd_parity,
    swipe::DecodeError,
    track::{END_SENTINEL, TrackFormat},
};

/// Rolling window over the last `width` bits read, with the newest bit in the
/// most significant position.
#[derive(Debug, Clone, Copy)]
pub(super) struct Accumulator {
    value: u8,
    width: u8,
}

impl Accumulator {
    pub(super) const fn new(width: u8) -> Self {
        Self { value: 0, width }
    }

    /// Shift in a bit, returning the updated window.
    pub(super) fn push(&mut self, bit: bool) -> u8 {
        self.value = (self.value >> 1) | (u8::from(bit) << (self.width - 1));
        self.value
    }

    pub(super) fn clear(&mut self) {
        self.value = 0;
    }
}

/// Decode characters from a start sentinel at bit `start`, writing ASCII to
/// `o`.
///
/// Framing stops at the first all-zero frame or at the end of the held bits.
/// Returns the number of characters written, which include both sentinels and
/// the trailing LRC character.
pub fn decode<const B: usize>(
    bits: &BitStore<B>,
    start: usize,
    format: &TrackFormat,
    o: &mut [u8],
) -> Result<usize, DecodeError> {
    let width = usize::from(format.width);

    let mut frame = Accumulator::new(format.width);
    let mut chars = 0;

    for (n, bit) in bits.iter().enumerate().skip(start) {
        let value = frame.push(bit);

        if (n + 1 - start) % width != 0 {
            continue;
        }

        // Blank frames pad the stripe after the data.
        if value == 0 {
            break;
        }

        if chars >= o.len() {
            Err(DecodeError::BufferTooSmall { capacity: o.len() })?;
        }

        if !is_odd_parity(value) {
            Err(DecodeError::Parity {
                offset: n + 1 - width,
            })?;
        }

        o[chars] = format.character(value);
        chars += 1;

        frame.clear();
    }

    // The end sentinel is followed only by the LRC character.
    match chars.checked_sub(2).map(|i| o[i]) {
        Some(END_SENTINEL) => Ok(chars),
        _ => Err(DecodeError::EndSentinelMisplaced),
    }
}
