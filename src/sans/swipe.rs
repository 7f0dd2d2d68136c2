//! States resolving the direction of a swipe.

use either::Either::{self, Left, Right};
use thiserror::Error;
use tracing::{debug, trace};

use super::{bits::BitStore, capture::Capture, check, frame, sentinel, track::TrackFormat};

/// An error decoding captured bits in one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// No start sentinel in the captured bits.
    #[error("Start sentinel not found.")]
    SentinelNotFound,
    /// Output buffer too small for the decoded characters.
    #[error("Output buffer too small ({capacity} characters).")]
    BufferTooSmall { capacity: usize },
    /// A frame failed its odd parity check.
    #[error("Parity error in frame at bit {offset}.")]
    Parity { offset: usize },
    /// The end sentinel was not second to last.
    #[error("End sentinel missing or misplaced.")]
    EndSentinelMisplaced,
    /// A bit column failed the longitudinal redundancy check.
    #[error("LRC mismatch in bit column {column}.")]
    LrcMismatch { column: u8 },
}

/// An error decoding captured bits in both directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unreadable in either direction (forward: {forward} backward: {backward})")]
pub struct SwipeError {
    pub forward: DecodeError,
    pub backward: DecodeError,
}

/// The orientation in which a swipe was decoded.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Unknown,
    Forward,
    Backward,
}

/// A successfully decoded swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Read {
    /// Number of characters written to the output buffer.
    pub chars: usize,
    pub direction: Direction,
}

/// State token waiting for a card.
#[derive(Debug)]
pub struct Idle;

impl Idle {
    /// Transition to another state by sampling the card-present signal.
    ///
    /// When a card is present, the capture is emptied and the successor waits
    /// for the swipe to complete.
    pub fn advance<const B: usize>(
        self,
        present: bool,
        capture: &Capture<B>,
    ) -> Either<CaptureWait, Idle> {
        if present {
            capture.reset();
            Left(CaptureWait(()))
        } else {
            Right(self)
        }
    }
}

/// State token waiting for a swipe to complete.
#[derive(Debug)]
pub struct CaptureWait(pub(super) ());

impl CaptureWait {
    /// Transition to another state by sampling the card-present signal.
    ///
    /// Once the card has left, returns the captured bits and a successor to
    /// decode them. Captured bits are never inspected while the card is
    /// present.
    pub fn advance<const B: usize>(
        self,
        present: bool,
        capture: &Capture<B>,
    ) -> Either<(BitStore<B>, DecodeForward), CaptureWait> {
        if present {
            Right(self)
        } else {
            Left((capture.snapshot(), DecodeForward(())))
        }
    }
}

/// State token to decode captured bits in the order they were read.
#[derive(Debug, Default)]
pub struct DecodeForward(pub(super) ());

impl DecodeForward {
    /// Enter decoding directly, for bits captured without the presence states.
    pub fn new() -> Self {
        Self(())
    }

    /// Transition to another state by decoding the captured bits as read.
    ///
    /// Returns the successful read and an idle successor, or a successor to
    /// retry in reverse.
    pub fn advance<const B: usize>(
        self,
        bits: &BitStore<B>,
        format: &TrackFormat,
        o: &mut [u8],
    ) -> Either<(Read, Idle), DecodeBackward> {
        match attempt(bits, format, o) {
            Ok(chars) => {
                debug!(chars, "decoded forward");

                let direction = Direction::Forward;
                Left((Read { chars, direction }, Idle))
            }
            Err(forward) => {
                debug!(error = %forward, "forward decode failed, retrying in reverse");
                Right(DecodeBackward { forward })
            }
        }
    }
}

/// State token to decode captured bits in reverse, after a failed forward
/// attempt.
#[derive(Debug)]
pub struct DecodeBackward {
    forward: DecodeError,
}

impl DecodeBackward {
    /// The error from the forward attempt.
    pub fn forward_error(&self) -> DecodeError {
        self.forward
    }

    /// Transition to the idle state by reversing the captured bits and
    /// decoding them again.
    ///
    /// Returns the read, or the errors from both directions.
    pub fn advance<const B: usize>(
        self,
        bits: &mut BitStore<B>,
        format: &TrackFormat,
        o: &mut [u8],
    ) -> (Result<Read, SwipeError>, Idle) {
        bits.reverse();

        let result = match attempt(bits, format, o) {
            Ok(chars) => {
                debug!(chars, "decoded backward");

                let direction = Direction::Backward;
                Ok(Read { chars, direction })
            }
            Err(backward) => {
                debug!(error = %backward, "backward decode failed");

                let forward = self.forward;
                Err(SwipeError { forward, backward })
            }
        };

        (result, Idle)
    }
}

/// Locate, frame, and check a track in one direction.
fn attempt<const B: usize>(
    bits: &BitStore<B>,
    format: &TrackFormat,
    o: &mut [u8],
) -> Result<usize, DecodeError> {
    let start = sentinel::find(bits, format)?;
    trace!(start, "start sentinel located");

    let chars = frame::decode(bits, start, format, o)?;
    check::verify_lrc(bits, start, chars, format)?;

    Ok(chars)
}
