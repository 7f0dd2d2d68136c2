//! Start sentinel search.

use super::{bits::BitStore, frame::Accumulator, swipe::DecodeError, track::TrackFormat};

/// Find the first bit of the first start sentinel frame.
///
/// Only the first match is reported. A spurious match on noise is rejected
/// later by the parity and redundancy checks.
pub fn find<const B: usize>(bits: &BitStore<B>, format: &TrackFormat) -> Result<usize, DecodeError> {
    let width = usize::from(format.width);
    let mut window = Accumulator::new(format.width);

    bits.iter()
        .enumerate()
        .find_map(|(i, bit)| {
            if window.push(bit) == format.start_sentinel {
                (i + 1).checked_sub(width)
            } else {
                None
            }
        })
        .ok_or(DecodeError::SentinelNotFound)
}
