//! Slice-based decoder implementation.

use either::Either::{Left, Right};

use crate::sans::{
    bits::BitStore,
    swipe::{DecodeForward, Read, SwipeError},
    track::{Track, TrackFormat},
};

/// Decode a swipe from a slice of captured bits, writing ASCII to `o`.
///
/// Bits beyond the default store capacity (800) are dropped, as they would be
/// during capture.
///
/// This method is also re-exported as `magstripe::avec::decode_slice`.
pub fn decode(r: &[bool], track: Track, o: &mut [u8]) -> Result<Read, SwipeError> {
    let mut bits: BitStore = r.iter().copied().collect();
    resolve(DecodeForward::new(), &mut bits, &track.format(), o)
}

/// Run the decoding states over captured bits, forward then reversed.
pub(super) fn resolve<const B: usize>(
    state: DecodeForward,
    bits: &mut BitStore<B>,
    format: &TrackFormat,
    o: &mut [u8],
) -> Result<Read, SwipeError> {
    match state.advance(bits, format, o) {
        Left((read, _)) => Ok(read),
        Right(state) => state.advance(bits, format, o).0,
    }
}
