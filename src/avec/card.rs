//! Reading from a card reader's capture.

use either::Either::{Left, Right};
use thiserror::Error;
use tracing::debug;

use crate::sans::{
    bits::DEFAULT_BYTES,
    capture::Capture,
    swipe::{Direction, Idle, SwipeError},
    track::{Track, TrackError, TrackFormat},
};

use super::slice::resolve;

/// Errors occurring while reading a card.
#[derive(Debug, Error)]
pub enum Error {
    /// No card was present when the read began.
    #[error("No card present.")]
    NoCardPresent,
    /// The swipe could not be decoded in either direction.
    #[error("Unreadable swipe: {0}")]
    Unreadable(#[from] SwipeError),
}

/// The card-present signal of a reader.
pub trait Presence {
    /// Whether a card is currently engaged with the read head.
    fn is_present(&mut self) -> bool;
}

impl<F: FnMut() -> bool> Presence for F {
    fn is_present(&mut self) -> bool {
        self()
    }
}

/// A card reader for a single track.
///
/// The strobe interrupt appends bits to the shared [`Capture`]; the reader
/// waits out each swipe and decodes the result.
pub struct CardReader<'a, P, const B: usize = DEFAULT_BYTES> {
    capture: &'a Capture<B>,
    presence: P,
    format: TrackFormat,
    direction: Direction,
}

impl<'a, P: Presence, const B: usize> CardReader<'a, P, B> {
    /// Create a reader for track number `track` (1, 2, or 3).
    pub fn new(track: u8, capture: &'a Capture<B>, presence: P) -> Result<Self, TrackError> {
        let format = Track::try_from(track)?.format();

        Ok(Self {
            capture,
            presence,
            format,
            direction: Direction::Unknown,
        })
    }

    /// The track this reader decodes.
    pub fn track(&self) -> Track {
        self.format.track
    }

    /// Check if there is a card present for reading.
    pub fn available(&mut self) -> bool {
        self.presence.is_present()
    }

    /// Wait for the present card to be swiped, then decode it as ASCII into
    /// `o`.
    ///
    /// Returns the number of characters written, including both sentinels and
    /// the LRC character. Blocks while the card is present.
    pub fn read(&mut self, o: &mut [u8]) -> Result<usize, Error> {
        self.direction = Direction::Unknown;

        let mut state = match Idle.advance(self.presence.is_present(), self.capture) {
            Left(state) => state,
            Right(_) => Err(Error::NoCardPresent)?,
        };

        let (mut bits, state) = loop {
            state = match state.advance(self.presence.is_present(), self.capture) {
                Left(captured) => break captured,
                Right(state) => state,
            };

            core::hint::spin_loop();
        };

        debug!(bits = bits.len(), "swipe captured");

        let read = resolve(state, &mut bits, &self.format, o)?;
        self.direction = read.direction;

        Ok(read.chars)
    }

    /// The direction of the last card read, or [`Direction::Unknown`] if it
    /// failed.
    pub fn read_direction(&self) -> Direction {
        self.direction
    }
}
