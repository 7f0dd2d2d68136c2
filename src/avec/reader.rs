//! Reader-based decoder implementation.
//!
//! Decodes textual capture dumps: one `0` or `1` per captured bit, in capture
//! order, with any whitespace ignored.
//!
//! _Requires Cargo feature `std`._

use std::{io::Read, string::String, vec::Vec};

use thiserror::Error;

use crate::sans::{
    bits::{BitStore, DEFAULT_BYTES},
    swipe::{DecodeForward, Direction, SwipeError},
    track::Track,
};

use super::slice::resolve;

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Found a byte other than a binary digit or whitespace.
    #[error("Invalid digit ({found:#04x}) at byte {offset}.")]
    InvalidDigit { offset: usize, found: u8 },
    /// The swipe could not be decoded in either direction.
    #[error("Unreadable swipe: {0}")]
    Unreadable(#[from] SwipeError),
}

/// A decoded track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Track text, including both sentinels and the LRC character.
    pub text: String,
    pub direction: Direction,
}

/// Decode a swipe from a reader of a capture dump.
///
/// This method is also re-exported as `magstripe::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(r: &mut impl Read, track: Track) -> Result<Decoded, Error> {
    let mut dump = Vec::new();
    r.read_to_end(&mut dump)?;

    let mut bits: BitStore = BitStore::new();

    for (offset, &found) in dump.iter().enumerate() {
        match found {
            b'0' => bits.push(false),
            b'1' => bits.push(true),
            b if b.is_ascii_whitespace() => {}
            _ => Err(Error::InvalidDigit { offset, found })?,
        }
    }

    // Every frame is at least five bits wide.
    let mut o = [0; BitStore::<DEFAULT_BYTES>::CAPACITY / 5];

    let read = resolve(DecodeForward::new(), &mut bits, &track.format(), &mut o)?;
    let text = o[..read.chars].iter().copied().map(char::from).collect();

    Ok(Decoded {
        text,
        direction: read.direction,
    })
}
