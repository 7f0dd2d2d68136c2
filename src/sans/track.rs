//! Framing constants for the three standard tracks.

use tartan_bitfield::bitfield;
use thiserror::Error;
use zerocopy::TryFromBytes;

/// An error selecting a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TrackError {
    /// Track number other than 1, 2, or 3.
    #[error("Unsupported track number ({0}).")]
    Unsupported(u8),
}

/// A magnetic stripe track.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromBytes)]
pub enum Track {
    /// Alphanumeric, 7-bit frames.
    One = 1,
    /// Numeric, 5-bit frames.
    Two = 2,
    /// Numeric, 5-bit frames.
    Three = 3,
}

impl Track {
    /// Framing constants for this track.
    pub const fn format(self) -> TrackFormat {
        match self {
            Track::One => TrackFormat {
                track: self,
                width: 7,
                start_sentinel: 0x45,
                ascii_offset: 0x20,
            },
            Track::Two | Track::Three => TrackFormat {
                track: self,
                width: 5,
                start_sentinel: 0x0B,
                ascii_offset: 0x30,
            },
        }
    }
}

impl TryFrom<u8> for Track {
    type Error = TrackError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        let track: Result<Track, _> = zerocopy::try_transmute!(n);
        track.map_err(|_| TrackError::Unsupported(n))
    }
}

/// The character marking the end of a track's data.
pub const END_SENTINEL: u8 = b'?';

/// Framing constants for a track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackFormat {
    pub track: Track,
    /// Bits per frame, parity included.
    pub width: u8,
    /// Start sentinel frame as read from the stripe, parity included.
    pub start_sentinel: u8,
    /// Added to a frame's character bits to produce ASCII.
    pub ascii_offset: u8,
}

impl TrackFormat {
    /// Index of the parity bit used by the longitudinal redundancy check. Bit
    /// columns below it hold character data.
    pub const fn lrc_parity_bit(&self) -> u8 {
        self.width - 1
    }

    /// Convert a frame to ASCII, discarding its parity bit.
    pub fn character(&self, frame: u8) -> u8 {
        bitfield! {
            struct AlphaFrame(u8) {
                [0..6] character: u8,
            }
        }

        bitfield! {
            struct NumericFrame(u8) {
                [0..4] character: u8,
            }
        }

        let character = match self.track {
            Track::One => AlphaFrame(frame).character(),
            Track::Two | Track::Three => NumericFrame(frame).character(),
        };

        character + self.ascii_offset
    }
}
