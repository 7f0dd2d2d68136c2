//! Internal finite-state machine for decoding swipes.
//!
//! This module is intended for applications that need control over how the
//! card-present signal is polled, or over where captured bits are kept. See
//! [`crate::avec`] for implementations covering common reading patterns.
//!
//! # Architecture
//!
//! All states are represented by a non-copy token. Transition to another state
//! by calling the token's `advance` method, which returns a successor state
//! token along with any extracted data:
//!
//! ```text
//! Idle -> CaptureWait -> DecodeForward -> Idle
//!                                      -> DecodeBackward -> Idle
//! ```
//!
//! A card may be swiped in either direction. Reversal inverts the order of the
//! captured bits but not the structure of the track, so a failed forward
//! attempt is retried once on the reversed bits.
//!
//! Only the initial state, re-exported for convenience as [`Swipe`], and
//! [`swipe::DecodeForward`] (for bits captured by other means) can be
//! constructed.
//!
//! Some areas of the reading process are not represented in the finite-state
//! machine and must be carefully written:
//!
//! - Calling [`capture::Capture::push`] from the strobe interrupt, once per
//! clock edge, with the sampled data line.
//!
//! - Polling the card-present signal frequently enough to observe a swipe.

pub mod bits;
pub mod capture;
pub mod check;
pub mod frame;
pub mod sentinel;
pub mod swipe;
pub mod track;

/// Entrypoint to the finite-state machine.
pub type Swipe = swipe::Idle;
