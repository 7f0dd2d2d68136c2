//! Helpers for character parity and longitudinal redundancy checks.

use super::{bits::BitStore, swipe::DecodeError, track::TrackFormat};

/// Whether a frame has an odd number of set bits.
pub fn is_odd_parity(frame: u8) -> bool {
    frame.count_ones() % 2 == 1
}

/// Verify the longitudinal redundancy check over `frames` frames beginning at
/// bit `start`.
///
/// Every character bit column must hold an even number of ones across all
/// frames, sentinels and the LRC character included. The parity column is not
/// checked.
pub fn verify_lrc<const B: usize>(
    bits: &BitStore<B>,
    start: usize,
    frames: usize,
    format: &TrackFormat,
) -> Result<(), DecodeError> {
    let width = usize::from(format.width);
    let end = (start + frames * width).min(bits.len());

    for column in 0..format.lrc_parity_bit() {
        let ones = (start + usize::from(column)..end)
            .step_by(width)
            .filter(|&i| bits.get(i))
            .count();

        if ones % 2 != 0 {
            Err(DecodeError::LrcMismatch { column })?;
        }
    }

    Ok(())
}
